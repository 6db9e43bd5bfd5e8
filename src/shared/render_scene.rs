//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::EditorOptions;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
///
/// Alle Kurven-Polylines sind abgeleitete Daten: leer, wenn die Eingabe
/// unter zwei Punkten/Vektoren liegt, und pro Frame neu berechnet.
#[derive(Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Parametrisierungsreihenfolge (Panel-Pixel)
    pub control_points: Vec<Vec2>,
    /// Index des aktuell gezogenen Punkts (für Hervorhebung)
    pub selected_index: Option<usize>,
    /// Abgetastete Bézier-Kurve der Kontrollpunkte
    pub curve: Vec<Vec2>,
    /// Hodograph: Differenzvektoren aufeinanderfolgender Kontrollpunkte
    pub hodograph: Vec<Vec2>,
    /// Abgetastete Bézier-Kurve des Hodographen
    pub hodograph_curve: Vec<Vec2>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve für das Kurven-Panel vorhanden ist.
    pub fn has_curve(&self) -> bool {
        !self.curve.is_empty()
    }

    /// Gibt zurück, ob eine Kurve für das Hodograph-Panel vorhanden ist.
    pub fn has_hodograph_curve(&self) -> bool {
        !self.hodograph_curve.is_empty()
    }
}
