//! Hodograph: Folge der Differenzvektoren aufeinanderfolgender Kontrollpunkte.

use glam::Vec2;

/// Berechnet den Hodographen als `points[i+1] - points[i]`.
///
/// Totale Funktion: leere oder einelementige Eingaben liefern einen leeren
/// Hodographen. Die Ausgabelänge ist immer `max(0, n - 1)`.
pub fn hodograph(points: &[Vec2]) -> Vec<Vec2> {
    points.windows(2).map(|pair| pair[1] - pair[0]).collect()
}
