use crate::shared::EditorOptions;
use glam::Vec2;

/// Taste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Maustaste: Punkte anlegen und ziehen
    Primary,
    /// Rechte Maustaste: Punkte entfernen
    Secondary,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Taste an Pixelposition gedrückt (Beginn einer Pointer-Sitzung)
    PointerPressed { button: PointerButton, pos: Vec2 },
    /// Pointer bei gehaltener Primärtaste bewegt
    PointerDragged { pos: Vec2 },
    /// Taste losgelassen
    PointerReleased { button: PointerButton },
    /// Abgeschlossener Klick (Press + Release ohne Verschiebung)
    PointerClicked { button: PointerButton, pos: Vec2 },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
}
