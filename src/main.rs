//! Bézier Curve Editor.
//!
//! Interaktiver Editor für Bézier-Kurven beliebigen Grades mit egui.

use bezier_curve_editor::{ui, AppController, AppEvent, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier Curve Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 760.0])
                .with_title("Bezier Curve Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    notice: Option<String>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            notice: None,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = ui::render_control_panel(ctx, &self.state);
        if self.state.is_animating() {
            events.push(AppIntent::AnimationFrameElapsed);
        }
        self.process_events(events);

        ui::render_status_bar(ctx, &self.state, self.notice.as_deref());

        let canvas_events = self.show_canvas(ctx);
        let has_canvas_events = !canvas_events.is_empty();
        self.process_events(canvas_events);

        self.collect_notifications();

        if self.state.is_animating() || has_canvas_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn show_canvas(&self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let view =
                    ui::CanvasView::new(response.rect, self.state.options.canvas_region());

                events.extend(view.collect_pointer_intents(ui, &response));
                view.paint(&painter, &self.state.render);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    fn collect_notifications(&mut self) {
        for event in self.controller.drain_events(&mut self.state) {
            match event {
                AppEvent::AnimationCompleted { run } => {
                    self.notice = Some(format!("Animation #{} abgeschlossen", run));
                }
                AppEvent::RenderStateChanged => {}
            }
        }
    }
}
