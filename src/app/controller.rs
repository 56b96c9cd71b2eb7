//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppEvent, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Nach allen Commands wird der RenderState genau einmal neu berechnet,
    /// sofern ein Handler ihn als veraltet markiert hat.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));
        // Auch nach einem Fehler den bis dahin gültigen Zustand darstellen
        state.refresh_render();
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer-Gesten ===
            AppCommand::PointerDown { pos } => handlers::editing::pointer_down(state, pos),
            AppCommand::PointerMove { pos } => handlers::editing::pointer_move(state, pos)?,
            AppCommand::PointerUp => handlers::editing::pointer_up(state),
            AppCommand::SetEditMode { mode } => handlers::editing::set_edit_mode(state, mode),

            // === Kontrollpunkte ===
            AppCommand::ResetControlPoints { points } => {
                handlers::editing::reset_control_points(state, points)
            }
            AppCommand::ReplaceControlPoint { index, position } => {
                handlers::editing::replace_control_point(state, index, position)?
            }
            AppCommand::SetControlPointAxis { index, axis, value } => {
                handlers::editing::set_control_point_axis(state, index, axis, value)?
            }

            // === Parameter & Darstellung ===
            AppCommand::SetParameter { t } => handlers::view::set_parameter(state, t),
            AppCommand::ToggleRevealMode => handlers::view::toggle_reveal_mode(state),

            // === Animation ===
            AppCommand::StartAnimation => handlers::animation::start(state),
            AppCommand::CancelAnimation => handlers::animation::cancel(state),
            AppCommand::AdvanceAnimation => handlers::animation::advance(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)
            }
            AppCommand::SaveOptions => handlers::options::save_options(state)?,
        }

        Ok(())
    }

    /// Holt alle seit dem letzten Aufruf angefallenen Benachrichtigungen ab.
    pub fn drain_events(&self, state: &mut AppState) -> Vec<AppEvent> {
        state.drain_events()
    }
}
