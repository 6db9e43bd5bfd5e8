//! Die zentrale Kontrollpunkt-Liste — einzige mutierbare Quelle der Kurve.

use glam::Vec2;

/// Geordnete, mutierbare Sammlung von 2D-Kontrollpunkten.
///
/// Die Einfügereihenfolge entspricht der Parametrisierungsreihenfolge der
/// Bézier-Kurve. Identität ist positionsbasiert: Beim Entfernen eines
/// Punkts rücken alle nachfolgenden Indizes um eins auf.
#[derive(Debug, Clone, Default)]
pub struct ControlPointStore {
    points: Vec<Vec2>,
}

impl ControlPointStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt ans Ende an.
    pub fn add(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Entfernt den Punkt am Index und gibt ihn zurück.
    ///
    /// Ein ungültiger Index ist ein Programmierfehler (Panik wie bei
    /// `Vec::remove`); Aufrufer sichern Indizes vorher über den Hit-Test ab.
    pub fn remove_at(&mut self, index: usize) -> Vec2 {
        self.points.remove(index)
    }

    /// Ersetzt den Punkt am Index in-place.
    pub fn set(&mut self, index: usize, point: Vec2) {
        self.points[index] = point;
    }

    /// Gibt den Punkt am Index zurück (None bei ungültigem Index).
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte in Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let mut store = ControlPointStore::new();
        store.add(Vec2::new(1.0, 2.0));
        store.add(Vec2::new(3.0, 4.0));

        assert_eq!(store.len(), 2);
        assert_eq!(store.points(), &[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    }

    #[test]
    fn remove_at_shifts_following_indices() {
        let mut store = ControlPointStore::new();
        store.add(Vec2::new(0.0, 0.0));
        store.add(Vec2::new(1.0, 0.0));
        store.add(Vec2::new(2.0, 0.0));

        let removed = store.remove_at(1);
        assert_eq!(removed, Vec2::new(1.0, 0.0));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut store = ControlPointStore::new();
        store.add(Vec2::new(0.0, 0.0));
        store.set(0, Vec2::new(5.0, 5.0));

        assert_eq!(store.get(0), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let store = ControlPointStore::new();
        assert_eq!(store.get(0), None);
        assert!(store.is_empty());
    }
}
