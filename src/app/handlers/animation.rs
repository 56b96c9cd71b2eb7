//! Handler für den Animations-Sweep.

use crate::app::{AppEvent, AppState};

/// Startet einen neuen Durchlauf; ein laufender wird ersetzt.
pub fn start(state: &mut AppState) {
    state.animation.start();
    state.mark_render_dirty();
}

/// Bricht einen laufenden Durchlauf ohne Completion ab.
pub fn cancel(state: &mut AppState) {
    if state.animation.cancel() {
        state.mark_render_dirty();
    }
}

/// Führt einen Frame aus: setzt t und meldet ggf. den Abschluss.
pub fn advance(state: &mut AppState) {
    let Some(tick) = state.animation.tick() else {
        return;
    };
    state.view.t = tick.t;
    state.mark_render_dirty();

    if tick.finished {
        let run = state.animation.run_id();
        log::info!("Animation #{} abgeschlossen", run);
        state.push_event(AppEvent::AnimationCompleted { run });
    }
}
