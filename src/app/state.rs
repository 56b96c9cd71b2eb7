//! Application State: zentrale Datenhaltung einer Sitzung.

mod app_state;
mod view;

pub use app_state::AppState;
pub use view::ViewState;
