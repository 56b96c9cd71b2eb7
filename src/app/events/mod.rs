//! AppIntent-, AppCommand- und AppEvent-Enums für den Intent/Command-Datenfluss.

mod app_event;
mod command;
mod intent;

pub use app_event::AppEvent;
pub use command::AppCommand;
pub use intent::{AppIntent, Axis};
