//! Core-Domänentypen: Kurvenauswertung, Kontrollpunkte, Zeichenbereich.

pub mod bezier;
pub mod canvas;
pub mod control_points;
mod error;

pub use bezier::{binomial, de_casteljau_levels, evaluate, sample};
pub use canvas::CanvasRegion;
pub use control_points::{ControlPointStore, PointPick};
pub use error::CurveError;

/// Punkt in Kurven-Koordinaten (doppelte Genauigkeit).
pub type Point2D = glam::DVec2;
