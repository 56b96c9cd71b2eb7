//! RenderState als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` ihn baut und `ui` ihn konsumiert.

use crate::app::EditMode;
use crate::core::Point2D;

/// Beschriftung eines Kontrollpunkts.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    /// Text (`P0`, `P1`, …)
    pub text: String,
    /// Position des zugehörigen Kontrollpunkts
    pub position: Point2D,
}

/// Read-only Schnappschuss für einen Render-Frame.
///
/// Wird bei jeder Änderung vollständig neu berechnet, nie inkrementell gepatcht.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderState {
    /// Abgetastete Kurve (leer ohne Kontrollpunkte)
    pub curve: Vec<Point2D>,
    /// Kontrollpolygon == aktuelle Kontrollpunkte in Reihenfolge
    pub control_polygon: Vec<Point2D>,
    /// Kurvenpunkt bei t (None ohne Kontrollpunkte)
    pub t_marker: Option<Point2D>,
    /// Ein Label pro Kontrollpunkt
    pub labels: Vec<PointLabel>,
    /// De-Casteljau-Zwischenstufen (leer wenn deaktiviert)
    pub construction: Vec<Vec<Point2D>>,
    /// Kurvenparameter dieses Frames
    pub t: f64,
    /// Obergrenze des gezeichneten Kurvenabschnitts
    pub t_max: f64,
    /// Kurvengrad (None ohne Kontrollpunkte)
    pub degree: Option<usize>,
    /// Aktiver Bearbeitungsmodus
    pub mode: EditMode,
    /// Läuft gerade eine Animation
    pub animating: bool,
}

impl RenderState {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_curve(&self) -> bool {
        !self.control_polygon.is_empty()
    }
}
