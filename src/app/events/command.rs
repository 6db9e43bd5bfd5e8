use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Kontrollpunkt an Pixelposition anhängen
    AddPoint { pos: Vec2 },
    /// Kontrollpunkt an Index auf neue Position setzen
    MovePoint { index: usize, pos: Vec2 },
    /// Kontrollpunkt an Index entfernen
    RemovePoint { index: usize },
    /// Drag-Sitzung auf einem bestehenden Punkt beginnen
    BeginDrag { index: usize },
    /// Pointer-Sitzung ohne Punkttreffer beginnen (Press auf leere Fläche)
    BeginEmptyPress,
    /// Drag-Sitzung beenden (Primärtaste losgelassen)
    EndDrag,
    /// Laufzeit-Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
