//! Bézier-Auswertung über den De-Casteljau-Algorithmus.

use glam::Vec2;

/// Standard-Abtastauflösung: Anzahl der Parameterschritte in [0, 1].
pub const DEFAULT_CURVE_STEPS: usize = 10_000;

/// Wertet die Bézier-Kurve der Kontrollpunkte an `steps + 1` gleichmäßig
/// verteilten Parameterwerten aus (beide Endpunkte eingeschlossen).
///
/// Weniger als zwei Kontrollpunkte ergeben eine leere Polyline statt eines
/// Fehlers. Aufwand pro Abtastpunkt ist O(k²) bei k Kontrollpunkten.
pub fn evaluate(control_points: &[Vec2], steps: usize) -> Vec<Vec2> {
    if control_points.len() < 2 {
        return Vec::new();
    }

    let steps = steps.max(1);
    let mut polyline = Vec::with_capacity(steps + 1);
    let mut scratch = Vec::with_capacity(control_points.len());

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        polyline.push(reduce(control_points, t, &mut scratch));
    }

    polyline
}

/// Wertet die Kurve an einem einzelnen Parameterwert `t` aus.
///
/// `None` bei leerer Eingabe; ein einzelner Punkt ist seine eigene Kurve.
pub fn point_at(control_points: &[Vec2], t: f32) -> Option<Vec2> {
    if control_points.is_empty() {
        return None;
    }
    let mut scratch = Vec::with_capacity(control_points.len());
    Some(reduce(control_points, t, &mut scratch))
}

/// De-Casteljau-Rekurrenz: wiederholte paarweise Linearinterpolation, bis
/// genau ein Punkt übrig bleibt.
///
/// Die Interpolation rechnet `(1 - t)·a + t·b`, damit die Endpunkte bei
/// t = 0 und t = 1 exakt getroffen werden.
fn reduce(control_points: &[Vec2], t: f32, scratch: &mut Vec<Vec2>) -> Vec2 {
    scratch.clear();
    scratch.extend_from_slice(control_points);

    let mut remaining = scratch.len();
    while remaining > 1 {
        for i in 0..remaining - 1 {
            scratch[i] = scratch[i] * (1.0 - t) + scratch[i + 1] * t;
        }
        remaining -= 1;
    }

    scratch[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fewer_than_two_points_yield_empty_polyline() {
        assert!(evaluate(&[], 100).is_empty());
        assert!(evaluate(&[Vec2::new(5.0, 5.0)], 100).is_empty());
    }

    #[test]
    fn polyline_has_steps_plus_one_samples() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        assert_eq!(evaluate(&points, 100).len(), 101);
    }

    #[test]
    fn endpoints_match_first_and_last_control_point() {
        let points = [
            Vec2::new(1.0, 2.0),
            Vec2::new(40.0, -10.0),
            Vec2::new(7.0, 33.0),
            Vec2::new(-5.0, 8.0),
        ];
        let polyline = evaluate(&points, 50);

        assert_eq!(polyline[0], points[0]);
        assert_eq!(*polyline.last().unwrap(), *points.last().unwrap());
    }

    #[test]
    fn linear_case_is_monotone_with_constant_y() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        let polyline = evaluate(&points, 100);

        for pair in polyline.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
        for sample in &polyline {
            assert_eq!(sample.y, 0.0);
        }
    }

    #[test]
    fn quadratic_midpoint_matches_closed_form() {
        // B(0.5) = 0.25·p0 + 0.5·p1 + 0.25·p2
        let points = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 8.0), Vec2::new(8.0, 0.0)];
        let sample = point_at(&points, 0.5).unwrap();

        assert_relative_eq!(sample.x, 4.0, epsilon = 1e-4);
        assert_relative_eq!(sample.y, 4.0, epsilon = 1e-4);
    }

    #[test]
    fn point_at_on_empty_input_is_none() {
        assert_eq!(point_at(&[], 0.5), None);
    }

    #[test]
    fn single_point_is_its_own_curve() {
        let point = Vec2::new(3.0, 7.0);
        assert_eq!(point_at(&[point], 0.25), Some(point));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(5.0, 9.0), Vec2::new(12.0, 1.0)];
        assert_eq!(evaluate(&points, 200), evaluate(&points, 200));
    }
}
