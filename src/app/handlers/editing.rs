//! Handler für Pointer-Gesten, Bearbeitungsmodus und direkte Punkt-Edits.

use crate::app::events::Axis;
use crate::app::{AppState, EditMode};
use crate::core::Point2D;

/// Reicht Pointer-Down an die Bearbeitungssitzung weiter.
pub fn pointer_down(state: &mut AppState, pos: Point2D) {
    let outcome = state.session.on_pointer_down(&mut state.points, pos);
    if outcome.needs_recompute() {
        state.mark_render_dirty();
    }
}

/// Reicht Pointer-Move an die Bearbeitungssitzung weiter (Drag-Update).
pub fn pointer_move(state: &mut AppState, pos: Point2D) -> anyhow::Result<()> {
    let outcome = state.session.on_pointer_move(&mut state.points, pos)?;
    if outcome.needs_recompute() {
        state.mark_render_dirty();
    }
    Ok(())
}

/// Beendet einen laufenden Drag.
pub fn pointer_up(state: &mut AppState) {
    state.session.on_pointer_up();
}

/// Wechselt den Bearbeitungsmodus.
pub fn set_edit_mode(state: &mut AppState, mode: EditMode) {
    state.session.set_mode(mode);
    state.mark_render_dirty();
}

/// Ersetzt alle Kontrollpunkte (Zurücksetzen). Nicht-endliche Punkte werden verworfen.
pub fn reset_control_points(state: &mut AppState, points: Vec<Point2D>) {
    let total = points.len();
    state.session.cancel_drag();
    state
        .points
        .reset(points.into_iter().filter(|p| p.is_finite()));
    if state.points.len() < total {
        log::warn!(
            "{} nicht-endliche Kontrollpunkte beim Zurücksetzen verworfen",
            total - state.points.len()
        );
    }
    log::info!("Kontrollpunkte zurückgesetzt: {} Punkte", state.points.len());
    state.mark_render_dirty();
}

/// Setzt einen Kontrollpunkt direkt auf eine neue Position.
pub fn replace_control_point(
    state: &mut AppState,
    index: usize,
    position: Point2D,
) -> anyhow::Result<()> {
    if !position.is_finite() {
        log::warn!("Nicht-endliche Position für P{} ignoriert", index);
        return Ok(());
    }
    state.points.replace(index, position)?;
    state.mark_render_dirty();
    Ok(())
}

/// Setzt eine einzelne Koordinate eines Kontrollpunkts.
pub fn set_control_point_axis(
    state: &mut AppState,
    index: usize,
    axis: Axis,
    value: f64,
) -> anyhow::Result<()> {
    let current = state
        .points
        .get(index)
        .ok_or(crate::core::CurveError::IndexOutOfRange {
            index,
            len: state.points.len(),
        })?;
    let position = match axis {
        Axis::X => Point2D::new(value, current.y),
        Axis::Y => Point2D::new(current.x, value),
    };
    replace_control_point(state, index, position)
}
