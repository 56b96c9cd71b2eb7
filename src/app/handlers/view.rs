//! Handler für Kurvenparameter und Reveal-Modus.

use crate::app::AppState;

/// Setzt t (begrenzt auf [0,1]). Nicht-endliche Werte werden verworfen.
pub fn set_parameter(state: &mut AppState, t: f64) {
    if !t.is_finite() {
        log::warn!("Ungültiger Kurvenparameter t = {} ignoriert", t);
        return;
    }
    state.view.t = t.clamp(0.0, 1.0);
    state.mark_render_dirty();
}

/// Schaltet den Reveal-Modus um.
pub fn toggle_reveal_mode(state: &mut AppState) {
    state.view.reveal = !state.view.reveal;
    log::debug!("Reveal-Modus: {}", state.view.reveal);
    state.mark_render_dirty();
}
