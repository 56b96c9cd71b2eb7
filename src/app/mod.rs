//! Application-Layer: Controller, State, Events und Handler.

pub mod animation;
pub mod command_log;
pub mod controller;
pub mod edit_session;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand einer Editor-Sitzung.
pub mod state;

pub use crate::core::{ControlPointStore, Point2D};
pub use animation::{AnimationDriver, AnimationTick};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use edit_session::{EditMode, EditOutcome, EditSession};
pub use events::{AppCommand, AppEvent, AppIntent, Axis};
pub use render_scene::build as build_render_state;
pub use state::{AppState, ViewState};
