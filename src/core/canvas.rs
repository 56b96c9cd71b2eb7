//! Gültiger Zeichenbereich für Pointer-Events.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Achsenparalleles Rechteck in Kurven-Koordinaten, in dem Pointer-Events
/// angenommen werden. Punkte außerhalb werden vom Editor ignoriert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRegion {
    /// Untere linke Ecke (inklusiv)
    pub min: DVec2,
    /// Obere rechte Ecke (inklusiv)
    pub max: DVec2,
}

impl CanvasRegion {
    /// Normierter Einheitsbereich [0,1]×[0,1].
    pub const UNIT: Self = Self {
        min: DVec2::ZERO,
        max: DVec2::ONE,
    };

    /// Erstellt einen Bereich aus zwei beliebigen Ecken.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Prüft, ob `pos` endlich ist und im Bereich liegt (Ränder eingeschlossen).
    pub fn contains(&self, pos: DVec2) -> bool {
        pos.is_finite()
            && pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
    }

    /// Breite und Höhe des Bereichs.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

impl Default for CanvasRegion {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_region_contains_edges_and_rejects_outside() {
        let region = CanvasRegion::UNIT;
        assert!(region.contains(DVec2::new(0.0, 0.0)));
        assert!(region.contains(DVec2::new(1.0, 1.0)));
        assert!(region.contains(DVec2::new(0.3, 0.7)));
        assert!(!region.contains(DVec2::new(-0.01, 0.5)));
        assert!(!region.contains(DVec2::new(0.5, 1.01)));
    }

    #[test]
    fn non_finite_positions_are_outside() {
        let region = CanvasRegion::UNIT;
        assert!(!region.contains(DVec2::new(f64::NAN, 0.5)));
        assert!(!region.contains(DVec2::new(0.5, f64::INFINITY)));
    }

    #[test]
    fn from_corners_normalizes_order() {
        let region = CanvasRegion::from_corners(DVec2::new(2.0, -1.0), DVec2::new(-2.0, 1.0));
        assert_eq!(region.min, DVec2::new(-2.0, -1.0));
        assert_eq!(region.max, DVec2::new(2.0, 1.0));
        assert_eq!(region.size(), DVec2::new(4.0, 2.0));
    }
}
