//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::ControlPointStore;
use crate::shared::EditorOptions;

/// Zustand einer Pointer-Interaktionssitzung.
///
/// Press→Drag→Release bildet eine Sitzung; jede Press-Phase löst die
/// Sitzung neu auf. `dragged_index` ist nur während eines aktiven Drags
/// auf einem bestehenden Punkt gesetzt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSession {
    /// Index des Punkts, der gerade gezogen wird (None = Idle)
    pub dragged_index: Option<usize>,
    /// Beim letzten Press wurde ein bestehender Punkt getroffen —
    /// unterdrückt das Anlegen eines neuen Punkts beim Klick-Abschluss
    pub pressed_on_existing: bool,
}

impl PointerSession {
    /// Erstellt eine frische Idle-Sitzung.
    pub fn new() -> Self {
        Self {
            dragged_index: None,
            pressed_on_existing: false,
        }
    }

    /// Gibt `true` zurück, wenn gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragged_index.is_some()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte der bearbeiteten Kurve
    pub store: ControlPointStore,
    /// Aktive Pointer-Sitzung (Drag-Zustand)
    pub session: PointerSession,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Auflösung)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            store: ControlPointStore::new(),
            session: PointerSession::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
