use crate::app::{render_scene, AnimationDriver, AppEvent, CommandLog, EditSession};
use crate::core::ControlPointStore;
use crate::shared::{EditorOptions, RenderState};

use super::ViewState;

/// Hauptzustand einer Editor-Sitzung.
///
/// Bündelt alles, was der Host zwischen Events hält: Kontrollpunkte,
/// Bearbeitungsmodus, t, Animation und den zuletzt berechneten RenderState.
pub struct AppState {
    /// Kontrollpunkte der Kurve
    pub points: ControlPointStore,
    /// Modus und Drag-Zustand
    pub session: EditSession,
    /// t und Reveal-Modus
    pub view: ViewState,
    /// Frame-getakteter t-Sweep
    pub animation: AnimationDriver,
    /// Laufzeit-Optionen (Pick-Radius, Stützstellen, Frames, …)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Zuletzt berechneter Render-Schnappschuss
    pub render: RenderState,
    /// Markiert, dass `render` neu berechnet werden muss
    render_dirty: bool,
    /// Noch nicht abgeholte Benachrichtigungen an die UI
    events: Vec<AppEvent>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let mut state = Self {
            points: ControlPointStore::new(),
            session: EditSession::new(&options),
            view: ViewState::new(options.slider_reveal_default),
            animation: AnimationDriver::new(options.animation_frames),
            options,
            command_log: CommandLog::new(),
            render: RenderState::default(),
            render_dirty: false,
            events: Vec::new(),
        };
        state.render = render_scene::build(&state);
        state
    }

    /// Läuft gerade eine Animation?
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Fordert eine Neuberechnung des RenderStates an.
    pub fn mark_render_dirty(&mut self) {
        self.render_dirty = true;
    }

    /// Berechnet den RenderState neu, falls angefordert.
    /// Gibt zurück, ob neu berechnet wurde.
    pub fn refresh_render(&mut self) -> bool {
        if !self.render_dirty {
            return false;
        }
        self.render_dirty = false;
        self.render = render_scene::build(self);
        self.push_event(AppEvent::RenderStateChanged);
        true
    }

    /// Legt eine Benachrichtigung in die Outbox.
    pub fn push_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }

    /// Holt alle offenen Benachrichtigungen ab.
    pub fn drain_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
