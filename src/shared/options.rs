//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CanvasRegion, Point2D};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ── Editieren ───────────────────────────────────────────────────────

/// Pick-Radius in Kurven-Koordinaten (5 % des normierten Plotbereichs).
pub const PICK_TOLERANCE: f64 = 0.05;
/// Zulässiger Bereich des Pick-Radius.
pub const PICK_TOLERANCE_RANGE: RangeInclusive<f64> = 0.005..=0.5;
/// Laufende Drags beim Moduswechsel abbrechen.
pub const CANCEL_DRAG_ON_MODE_CHANGE: bool = true;

// ── Darstellung ─────────────────────────────────────────────────────

/// Anzahl Stützstellen der Kurven-Polylinie.
pub const CURVE_SAMPLES: usize = 100;
/// Zulässiger Bereich der Stützstellen (mindestens Start- und Endpunkt).
pub const CURVE_SAMPLES_RANGE: RangeInclusive<usize> = 2..=2000;
/// Schrittweite des t-Reglers.
pub const T_STEP: f64 = 0.01;
/// Kurve standardmäßig nur bis t zeichnen.
pub const SLIDER_REVEAL_DEFAULT: bool = true;

// ── Animation ───────────────────────────────────────────────────────

/// Frames pro Animationsdurchlauf (t = frame / ANIMATION_FRAMES).
pub const ANIMATION_FRAMES: u32 = 100;
/// Zulässiger Bereich der Frames pro Durchlauf.
pub const ANIMATION_FRAMES_RANGE: RangeInclusive<u32> = 1..=1000;

/// Startkurve für "Zurücksetzen" (kubisch).
pub const DEFAULT_CONTROL_POINTS: [[f64; 2]; 4] = [[0.1, 0.2], [0.4, 0.8], [0.6, 0.4], [0.9, 0.9]];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Editieren ───────────────────────────────────────────────
    /// Hit-Test-Radius für Move/Remove (gleiche Einheiten wie die Punkte)
    pub pick_tolerance: f64,
    /// Drag beim Moduswechsel verwerfen (sonst erst beim Loslassen)
    pub cancel_drag_on_mode_change: bool,
    /// Untere linke Ecke des gültigen Zeichenbereichs
    pub canvas_min: Point2D,
    /// Obere rechte Ecke des gültigen Zeichenbereichs
    pub canvas_max: Point2D,

    // ── Darstellung ─────────────────────────────────────────────
    /// Stützstellen der Kurven-Polylinie
    pub curve_samples: usize,
    /// Schrittweite des t-Reglers
    pub t_step: f64,
    /// Anfangszustand des Reveal-Modus
    pub slider_reveal_default: bool,
    /// De-Casteljau-Konstruktionslinien in den RenderState aufnehmen
    pub show_construction: bool,

    // ── Animation ───────────────────────────────────────────────
    /// Frames pro Durchlauf
    pub animation_frames: u32,

    // ── Zurücksetzen ────────────────────────────────────────────
    /// Kontrollpunkte für "Zurücksetzen"
    pub default_control_points: Vec<Point2D>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_tolerance: PICK_TOLERANCE,
            cancel_drag_on_mode_change: CANCEL_DRAG_ON_MODE_CHANGE,
            canvas_min: CanvasRegion::UNIT.min,
            canvas_max: CanvasRegion::UNIT.max,

            curve_samples: CURVE_SAMPLES,
            t_step: T_STEP,
            slider_reveal_default: SLIDER_REVEAL_DEFAULT,
            show_construction: false,

            animation_frames: ANIMATION_FRAMES,

            default_control_points: DEFAULT_CONTROL_POINTS
                .iter()
                .map(|&[x, y]| Point2D::new(x, y))
                .collect(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
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
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }

    /// Ersetzt unbrauchbare Werte (nicht-positiv, nicht-endlich) durch Defaults.
    pub fn sanitized(mut self) -> Self {
        if !(self.pick_tolerance.is_finite() && self.pick_tolerance > 0.0) {
            log::warn!(
                "Ungültiger Pick-Radius {}, verwende {}",
                self.pick_tolerance,
                PICK_TOLERANCE
            );
            self.pick_tolerance = PICK_TOLERANCE;
        }
        self.pick_tolerance = self
            .pick_tolerance
            .clamp(*PICK_TOLERANCE_RANGE.start(), *PICK_TOLERANCE_RANGE.end());
        if !(self.t_step.is_finite() && self.t_step > 0.0 && self.t_step <= 1.0) {
            self.t_step = T_STEP;
        }
        self.curve_samples = self
            .curve_samples
            .clamp(*CURVE_SAMPLES_RANGE.start(), *CURVE_SAMPLES_RANGE.end());
        self.animation_frames = self
            .animation_frames
            .clamp(*ANIMATION_FRAMES_RANGE.start(), *ANIMATION_FRAMES_RANGE.end());
        let size = (self.canvas_max - self.canvas_min).abs();
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            log::warn!(
                "Ungültiger Zeichenbereich {:?}..{:?}, verwende Einheitsbereich",
                self.canvas_min,
                self.canvas_max
            );
            self.canvas_min = CanvasRegion::UNIT.min;
            self.canvas_max = CanvasRegion::UNIT.max;
        }
        self.default_control_points.retain(|p| p.is_finite());
        self
    }

    /// Gültiger Zeichenbereich für Pointer-Events.
    pub fn canvas_region(&self) -> CanvasRegion {
        CanvasRegion::from_corners(self.canvas_min, self.canvas_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.pick_tolerance, PICK_TOLERANCE);
        assert_eq!(opts.curve_samples, 100);
        assert_eq!(opts.animation_frames, 100);
        assert_eq!(opts.default_control_points.len(), 4);
        assert_eq!(opts.default_control_points[0], Point2D::new(0.1, 0.2));
        assert_eq!(opts.canvas_region(), CanvasRegion::UNIT);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut opts = EditorOptions::default();
        opts.pick_tolerance = 0.1;
        opts.show_construction = true;
        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let parsed: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed: EditorOptions =
            toml::from_str("pick_tolerance = 0.02\n").expect("Deserialisierung");
        assert_eq!(parsed.pick_tolerance, 0.02);
        assert_eq!(parsed.curve_samples, CURVE_SAMPLES);
        assert!(parsed.cancel_drag_on_mode_change);
    }

    #[test]
    fn sanitized_repairs_invalid_values() {
        let opts = EditorOptions {
            pick_tolerance: -1.0,
            t_step: 0.0,
            curve_samples: 0,
            animation_frames: 0,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(opts.pick_tolerance, PICK_TOLERANCE);
        assert_eq!(opts.t_step, T_STEP);
        assert_eq!(opts.curve_samples, 2);
        assert_eq!(opts.animation_frames, 1);
    }

    #[test]
    fn sanitized_clamps_oversized_counts() {
        let parsed: EditorOptions = toml::from_str(
            "curve_samples = 9223372036854775807\nanimation_frames = 4000000000\npick_tolerance = 3.0\n",
        )
        .expect("Deserialisierung");
        let opts = parsed.sanitized();
        assert_eq!(opts.curve_samples, *CURVE_SAMPLES_RANGE.end());
        assert_eq!(opts.animation_frames, *ANIMATION_FRAMES_RANGE.end());
        assert_eq!(opts.pick_tolerance, *PICK_TOLERANCE_RANGE.end());
    }

    #[test]
    fn sanitized_rejects_degenerate_canvas() {
        for (min, max) in [
            (Point2D::new(0.5, 0.5), Point2D::new(0.5, 0.5)),
            (Point2D::new(0.0, 0.3), Point2D::new(1.0, 0.3)),
            (Point2D::new(f64::NAN, 0.0), Point2D::new(1.0, 1.0)),
        ] {
            let opts = EditorOptions {
                canvas_min: min,
                canvas_max: max,
                ..EditorOptions::default()
            }
            .sanitized();
            assert_eq!(opts.canvas_region(), CanvasRegion::UNIT);
        }

        let flipped = EditorOptions {
            canvas_min: Point2D::new(2.0, 2.0),
            canvas_max: Point2D::new(-1.0, 0.0),
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(
            flipped.canvas_region(),
            CanvasRegion::from_corners(Point2D::new(-1.0, 0.0), Point2D::new(2.0, 2.0))
        );
    }

    #[test]
    fn saved_file_loads_back() {
        let path = std::env::temp_dir().join(format!(
            "bezier_curve_editor_options_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            animation_frames: 42,
            slider_reveal_default: false,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::path::Path::new("/nonexistent/bezier_curve_editor.toml");
        assert_eq!(EditorOptions::load_from_file(path), EditorOptions::default());
    }
}
