//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Die Treffer-Entscheidung (bestehender Punkt vs. leere Fläche) fällt
//! hier, damit die Handler nur noch aufgelöste Indizes ausführen.

use super::{AppCommand, AppIntent, AppState};
use crate::app::events::PointerButton;
use crate::core::hit_test;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            pos,
        } => {
            let tolerance = state.options.hit_tolerance_px;
            match hit_test::closest_point_within(state.store.points(), pos, tolerance) {
                Some(index) => vec![AppCommand::BeginDrag { index }],
                None => vec![AppCommand::BeginEmptyPress],
            }
        }
        AppIntent::PointerPressed {
            button: PointerButton::Secondary,
            ..
        } => Vec::new(),

        AppIntent::PointerDragged { pos } => match state.session.dragged_index {
            Some(index) => vec![AppCommand::MovePoint { index, pos }],
            None => Vec::new(),
        },

        AppIntent::PointerReleased {
            button: PointerButton::Primary,
        } => {
            if state.session.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased {
            button: PointerButton::Secondary,
        } => Vec::new(),

        AppIntent::PointerClicked {
            button: PointerButton::Primary,
            pos,
        } => {
            // Press auf bestehendem Punkt: Klick-Abschluss legt keinen
            // neuen Punkt an
            if state.session.pressed_on_existing {
                Vec::new()
            } else {
                vec![AppCommand::AddPoint { pos }]
            }
        }
        AppIntent::PointerClicked {
            button: PointerButton::Secondary,
            pos,
        } => {
            let tolerance = state.options.hit_tolerance_px;
            match hit_test::closest_point_within(state.store.points(), pos, tolerance) {
                Some(index) => vec![AppCommand::RemovePoint { index }],
                None => Vec::new(),
            }
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;
