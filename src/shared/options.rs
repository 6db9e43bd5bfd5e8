//! Zentrale Konfiguration für den Bézier-Hodograph-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Treffer-Toleranz in Pixeln: Klick innerhalb dieses Radius zählt als
/// Treffer auf einen bestehenden Kontrollpunkt.
pub const HIT_TOLERANCE_PX: f32 = 10.0;

// ── Kurven-Abtastung ────────────────────────────────────────────────

/// Anzahl der Parameterschritte pro Kurven-Polyline.
pub const CURVE_STEPS: usize = 10_000;

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Marker-Radius normaler Kontrollpunkte in Pixeln.
pub const POINT_RADIUS_PX: f32 = 3.0;
/// Marker-Radius des selektierten (gezogenen) Kontrollpunkts.
pub const POINT_RADIUS_SELECTED_PX: f32 = 4.0;
/// Linienstärke der Kurven und Vektorzüge.
pub const STROKE_WIDTH: f32 = 3.0;

/// Farbe normaler Kontrollpunkte (RGBA: Schwarz).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe des selektierten Kontrollpunkts (RGBA: Rot).
pub const POINT_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe des Kontrollpolygons (RGBA: Rosa).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [1.0, 0.7, 0.7, 1.0];
/// Farbe der Bézier-Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

// ── Hodograph-Panel ─────────────────────────────────────────────────

/// Hintergrundfarbe des Hodograph-Panels (RGBA: Schwarz).
pub const HODOGRAPH_BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Hodograph-Vektormarker (RGBA: Weiß).
pub const HODOGRAPH_POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des Vektorzugs zwischen den Hodograph-Vektoren (RGBA: Grün).
pub const HODOGRAPH_VECTOR_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe der Bézier-Kurve des Hodographen (RGBA: Orange).
pub const HODOGRAPH_CURVE_COLOR: [f32; 4] = [1.0, 0.65, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_hodograph_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Treffer-Toleranz für Punkt-Picks in Pixeln
    pub hit_tolerance_px: f32,

    // ── Abtastung ───────────────────────────────────────────────
    /// Parameterschritte pro Kurven-Polyline (Polyline hat steps+1 Punkte)
    pub curve_steps: usize,

    // ── Punkte ──────────────────────────────────────────────────
    /// Marker-Radius normaler Kontrollpunkte in Pixeln
    pub point_radius_px: f32,
    /// Marker-Radius des selektierten Kontrollpunkts
    pub point_radius_selected_px: f32,
    /// Linienstärke der Kurven und Vektorzüge
    pub stroke_width: f32,
    /// Farbe normaler Kontrollpunkte (RGBA)
    pub point_color: [f32; 4],
    /// Farbe des selektierten Kontrollpunkts
    pub point_color_selected: [f32; 4],
    /// Farbe des Kontrollpolygons
    pub control_polygon_color: [f32; 4],
    /// Farbe der Bézier-Kurve
    pub curve_color: [f32; 4],

    // ── Hodograph ───────────────────────────────────────────────
    /// Hintergrundfarbe des Hodograph-Panels
    pub hodograph_background_color: [f32; 4],
    /// Farbe der Hodograph-Vektormarker
    pub hodograph_point_color: [f32; 4],
    /// Farbe des Vektorzugs zwischen den Hodograph-Vektoren
    pub hodograph_vector_color: [f32; 4],
    /// Farbe der Bézier-Kurve des Hodographen
    pub hodograph_curve_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_tolerance_px: HIT_TOLERANCE_PX,
            curve_steps: CURVE_STEPS,

            point_radius_px: POINT_RADIUS_PX,
            point_radius_selected_px: POINT_RADIUS_SELECTED_PX,
            stroke_width: STROKE_WIDTH,
            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            curve_color: CURVE_COLOR,

            hodograph_background_color: HODOGRAPH_BACKGROUND_COLOR,
            hodograph_point_color: HODOGRAPH_POINT_COLOR,
            hodograph_vector_color: HODOGRAPH_VECTOR_COLOR,
            hodograph_curve_color: HODOGRAPH_CURVE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_hodograph_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_hodograph_editor.toml")
    }
}
