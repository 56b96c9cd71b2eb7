//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und verteilt sie an Sitzung und Animation.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    state.session.configure(&options);
    state.animation.set_frames(options.animation_frames);
    state.options = options;
    log::info!("Optionen übernommen");
    state.mark_render_dirty();
}

/// Schreibt die aktuellen Optionen neben die Binary.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
