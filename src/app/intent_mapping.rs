//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::PointerDown { pos }],
        AppIntent::PointerMoved { pos } => {
            // Ohne aktiven Drag entsteht kein Command (hält das Command-Log schlank)
            if state.session.dragging().is_some() {
                vec![AppCommand::PointerMove { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::PointerUp],
        AppIntent::EditModeRequested { mode } => vec![AppCommand::SetEditMode { mode }],
        AppIntent::ParameterChanged { t } => vec![AppCommand::SetParameter { t }],
        AppIntent::RevealModeToggled => vec![AppCommand::ToggleRevealMode],
        AppIntent::AnimationStartRequested => vec![AppCommand::StartAnimation],
        AppIntent::AnimationCancelRequested => vec![AppCommand::CancelAnimation],
        AppIntent::AnimationFrameElapsed => {
            if state.animation.is_running() {
                vec![AppCommand::AdvanceAnimation]
            } else {
                vec![]
            }
        }
        AppIntent::ResetRequested => vec![
            AppCommand::CancelAnimation,
            AppCommand::ResetControlPoints {
                points: state.options.default_control_points.clone(),
            },
        ],
        AppIntent::ResetToPointsRequested { points } => vec![
            AppCommand::CancelAnimation,
            AppCommand::ResetControlPoints { points },
        ],
        AppIntent::ControlPointEdited { index, position } => {
            vec![AppCommand::ReplaceControlPoint { index, position }]
        }
        AppIntent::ControlPointAxisEdited { index, axis, value } => {
            vec![AppCommand::SetControlPointAxis { index, axis, value }]
        }
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsSaveRequested => vec![AppCommand::SaveOptions],
    }
}

#[cfg(test)]
mod tests;
