//! Toolbar mit Laufzeit-Optionen und Punktzähler.

use crate::app::{AppIntent, AppState};

/// Zeichnet die Toolbar und liefert Options-Intents bei Änderungen.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mut options = state.options.clone();

            ui.label("Curve steps:");
            let steps_changed = ui
                .add(egui::DragValue::new(&mut options.curve_steps).range(10..=100_000))
                .changed();

            ui.separator();

            ui.label("Hit tolerance (px):");
            let tolerance_changed = ui
                .add(egui::Slider::new(&mut options.hit_tolerance_px, 1.0..=50.0))
                .changed();

            ui.separator();
            ui.label(format!("{} points", state.point_count()));

            if steps_changed || tolerance_changed {
                events.push(AppIntent::OptionsChanged { options });
            }
        });
    });

    events
}
