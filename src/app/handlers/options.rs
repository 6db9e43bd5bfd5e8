//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt geänderte Optionen in den App-State.
///
/// Gespeichert wird erst beim Beenden der Anwendung (Host-Verantwortung),
/// damit Slider-Änderungen nicht pro Frame auf die Platte schreiben.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!(
        "Optionen übernommen: Toleranz {:.0} px, {} Kurvenschritte",
        state.options.hit_tolerance_px,
        state.options.curve_steps
    );
}
