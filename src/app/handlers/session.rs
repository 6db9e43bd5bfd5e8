//! Handler für den Pointer-Sitzungs-Lebenszyklus (Press/Release).

use crate::app::state::PointerSession;
use crate::app::AppState;

/// Beginnt eine Drag-Sitzung auf einem bestehenden Punkt.
///
/// Ein Index außerhalb des aktuellen Bestands setzt die Sitzung zurück
/// statt einen ungültigen Drag zu starten.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if index >= state.store.len() {
        log::warn!(
            "BeginDrag mit veraltetem Index {} ({} Punkte) — Sitzung zurückgesetzt",
            index,
            state.store.len()
        );
        state.session = PointerSession::new();
        return;
    }

    state.session.dragged_index = Some(index);
    state.session.pressed_on_existing = true;
}

/// Beginnt eine Pointer-Sitzung ohne Punkttreffer (Press auf leere Fläche).
pub fn begin_empty_press(state: &mut AppState) {
    state.session = PointerSession::new();
}

/// Beendet die Drag-Sitzung.
///
/// `pressed_on_existing` bleibt bis zum Klick-Abschluss bestehen, damit
/// ein Press-Drag-Release nicht zusätzlich als Punkt-Anlegen zählt.
pub fn end_drag(state: &mut AppState) {
    state.session.dragged_index = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn begin_drag_selects_index_and_marks_press() {
        let mut state = AppState::new();
        state.store.add(Vec2::new(0.0, 0.0));

        begin_drag(&mut state, 0);

        assert_eq!(state.session.dragged_index, Some(0));
        assert!(state.session.pressed_on_existing);
    }

    #[test]
    fn begin_drag_with_stale_index_resets_session() {
        let mut state = AppState::new();
        state.session.pressed_on_existing = true;

        begin_drag(&mut state, 4);

        assert_eq!(state.session, PointerSession::new());
    }

    #[test]
    fn empty_press_clears_previous_session() {
        let mut state = AppState::new();
        state.store.add(Vec2::new(0.0, 0.0));
        begin_drag(&mut state, 0);

        begin_empty_press(&mut state);

        assert_eq!(state.session, PointerSession::new());
    }

    #[test]
    fn end_drag_keeps_press_flag_for_click_resolution() {
        let mut state = AppState::new();
        state.store.add(Vec2::new(0.0, 0.0));
        begin_drag(&mut state, 0);

        end_drag(&mut state);

        assert_eq!(state.session.dragged_index, None);
        assert!(state.session.pressed_on_existing);
    }
}
