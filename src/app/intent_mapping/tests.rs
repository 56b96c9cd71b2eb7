use crate::app::{AppCommand, AppIntent, AppState, EditMode};
use crate::core::Point2D;

use super::map_intent_to_commands;

#[test]
fn pointer_pressed_maps_to_pointer_down() {
    let state = AppState::new();
    let pos = Point2D::new(0.3, 0.4);

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });

    assert_eq!(commands, vec![AppCommand::PointerDown { pos }]);
}

#[test]
fn pointer_moved_without_drag_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: Point2D::new(0.5, 0.5),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn animation_frame_without_running_sweep_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::AnimationFrameElapsed);

    assert!(commands.is_empty());
}

#[test]
fn reset_requested_cancels_animation_then_uses_default_points() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CancelAnimation));
    match &commands[1] {
        AppCommand::ResetControlPoints { points } => {
            assert_eq!(points, &state.options.default_control_points);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn edit_mode_requested_maps_to_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::EditModeRequested {
            mode: EditMode::Remove,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetEditMode {
            mode: EditMode::Remove
        }]
    );
}

#[test]
fn options_save_requested_maps_to_save_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::OptionsSaveRequested);

    assert_eq!(commands, vec![AppCommand::SaveOptions]);
}
