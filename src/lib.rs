//! Bézier Curve Editor Library.
//! Kurvenmathematik und Bearbeitungsmodell als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AnimationDriver, AppCommand, AppController, AppEvent, AppIntent, AppState, Axis, EditMode,
    EditOutcome, EditSession, ViewState,
};
pub use core::{evaluate, sample, CanvasRegion, ControlPointStore, CurveError, Point2D};
pub use shared::{EditorOptions, PointLabel, RenderState};
