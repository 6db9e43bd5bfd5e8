//! Handler für Kontrollpunkt-Editing (Anlegen, Verschieben, Entfernen).

use crate::app::state::PointerSession;
use crate::app::AppState;
use glam::Vec2;

/// Hängt einen neuen Kontrollpunkt an und schließt die Klick-Sitzung ab.
pub fn add_point(state: &mut AppState, pos: Vec2) {
    state.store.add(pos);
    state.session = PointerSession::new();
    log::info!(
        "Kontrollpunkt {} an ({:.1}, {:.1}) hinzugefügt",
        state.store.len() - 1,
        pos.x,
        pos.y
    );
}

/// Verschiebt den Kontrollpunkt am Index auf die neue Position.
///
/// Ein veralteter Index (Punkt inzwischen entfernt) wird als "keine
/// Selektion" behandelt statt einen Fehler auszulösen.
pub fn move_point(state: &mut AppState, index: usize, pos: Vec2) {
    if index >= state.store.len() {
        log::warn!(
            "MovePoint mit veraltetem Index {} ({} Punkte) — ignoriert",
            index,
            state.store.len()
        );
        state.session.dragged_index = None;
        return;
    }

    state.store.set(index, pos);
}

/// Entfernt den Kontrollpunkt am Index; nachfolgende Indizes rücken auf.
///
/// Eine eventuell laufende Drag-Sitzung wird an die verschobenen Indizes
/// angepasst bzw. verworfen, wenn sie den entfernten Punkt betraf.
pub fn remove_point(state: &mut AppState, index: usize) {
    if index >= state.store.len() {
        log::warn!(
            "RemovePoint mit veraltetem Index {} ({} Punkte) — ignoriert",
            index,
            state.store.len()
        );
        return;
    }

    let removed = state.store.remove_at(index);

    state.session.dragged_index = match state.session.dragged_index {
        Some(dragged) if dragged == index => None,
        Some(dragged) if dragged > index => Some(dragged - 1),
        other => other,
    };

    log::info!(
        "Kontrollpunkt {} entfernt ({:.1}, {:.1})",
        index,
        removed.x,
        removed.y
    );
}
