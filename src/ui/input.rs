//! Übersetzt egui-Pointer-Events in die AppIntent-Eventformen.

use crate::app::{AppIntent, PointerButton};
use glam::Vec2;

fn to_local(pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - origin.x, pos.y - origin.y)
}

/// Sammelt Pointer-Intents aus der egui-Response des Kurven-Panels.
///
/// Positionen werden in Panel-lokale Pixelkoordinaten umgerechnet. Bei
/// einem von egui erkannten Klick liegen Press und Release bereits hinter
/// uns; beide werden vor dem Klick nachgereicht, damit die
/// Pointer-Sitzung bei jedem Klick frisch aufgelöst wird.
pub fn collect_pointer_intents(response: &egui::Response, origin: egui::Pos2) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    let pointer_pos = response.interact_pointer_pos();

    if response.drag_started_by(egui::PointerButton::Primary) {
        // Treffer-Entscheidung auf der Press-Position, nicht der bereits
        // verschobenen aktuellen Position
        let press_pos = response
            .ctx
            .input(|i| i.pointer.press_origin())
            .or(pointer_pos);
        if let Some(pos) = press_pos {
            intents.push(AppIntent::PointerPressed {
                button: PointerButton::Primary,
                pos: to_local(pos, origin),
            });
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = pointer_pos {
            intents.push(AppIntent::PointerDragged {
                pos: to_local(pos, origin),
            });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        intents.push(AppIntent::PointerReleased {
            button: PointerButton::Primary,
        });
    }

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pos) = pointer_pos {
            let local = to_local(pos, origin);
            intents.push(AppIntent::PointerPressed {
                button: PointerButton::Primary,
                pos: local,
            });
            intents.push(AppIntent::PointerReleased {
                button: PointerButton::Primary,
            });
            intents.push(AppIntent::PointerClicked {
                button: PointerButton::Primary,
                pos: local,
            });
        }
    }

    if response.clicked_by(egui::PointerButton::Secondary) {
        if let Some(pos) = pointer_pos {
            intents.push(AppIntent::PointerClicked {
                button: PointerButton::Secondary,
                pos: to_local(pos, origin),
            });
        }
    }

    intents
}
