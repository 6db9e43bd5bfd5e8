//! Core-Domäne: Kontrollpunkte und reine Kurven-Geometrie.
//!
//! Dieses Modul definiert die Haupt-Bausteine:
//! - ControlPointStore: geordnete Liste der Kontrollpunkte
//! - hit_test: nächster Punkt innerhalb eines Toleranzradius
//! - derivative: Hodograph (Differenzvektoren)
//! - bezier: De-Casteljau-Auswertung zur Polyline

pub mod bezier;
pub mod derivative;
pub mod point_store;

pub use point_store::ControlPointStore;
