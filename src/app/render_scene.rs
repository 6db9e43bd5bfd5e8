//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{bezier, derivative};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Alle abgeleiteten Daten (Hodograph, Kurven-Polylines) werden hier pro
/// Frame neu berechnet — nie über Mutationen hinweg gecacht, damit die
/// Anzeige immer zum bearbeiteten Punktbestand passt.
pub fn build(state: &AppState) -> RenderScene {
    let points = state.store.points();
    let steps = state.options.curve_steps;

    // Kurven nur ab zwei Punkten/Vektoren abtasten
    let curve = if points.len() >= 2 {
        bezier::evaluate(points, steps)
    } else {
        Vec::new()
    };

    let hodograph = derivative::hodograph(points);
    let hodograph_curve = if hodograph.len() >= 2 {
        bezier::evaluate(&hodograph, steps)
    } else {
        Vec::new()
    };

    // Veraltete Drag-Indizes degradieren zu "keine Selektion"
    let selected_index = state
        .session
        .dragged_index
        .filter(|&index| index < points.len());

    RenderScene {
        control_points: points.to_vec(),
        selected_index,
        curve,
        hodograph,
        hodograph_curve,
        options: state.options.clone(),
    }
}
