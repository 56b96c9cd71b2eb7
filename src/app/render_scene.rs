//! Builder für den RenderState aus dem AppState.

use crate::app::AppState;
use crate::core::{bezier, ControlPointStore};
use crate::shared::{PointLabel, RenderState};

/// Baut einen vollständigen RenderState aus dem aktuellen AppState.
///
/// Ohne Kontrollpunkte bleiben Kurve, Polygon, Marker und Labels leer.
pub fn build(state: &AppState) -> RenderState {
    let points = state.points.points();
    let animating = state.is_animating();
    let t = state.view.t;
    // Während der Animation wächst die Kurve immer mit t, unabhängig vom Schalter
    let t_max = if state.view.reveal || animating { t } else { 1.0 };

    let base = RenderState {
        t,
        t_max,
        degree: state.points.degree(),
        mode: state.session.mode(),
        animating,
        ..RenderState::default()
    };

    let (Ok(curve), Ok(marker)) = (
        bezier::sample(points, state.options.curve_samples, t_max),
        bezier::evaluate(t, points),
    ) else {
        return base;
    };

    let construction = if state.options.show_construction {
        bezier::de_casteljau_levels(t, points)
            .map(|levels| levels.into_iter().skip(1).collect())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let labels = points
        .iter()
        .enumerate()
        .map(|(i, &position)| PointLabel {
            text: ControlPointStore::label(i),
            position,
        })
        .collect();

    RenderState {
        curve,
        control_polygon: points.to_vec(),
        t_marker: Some(marker),
        labels,
        construction,
        ..base
    }
}
