//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::ControlPointStore;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, notice: Option<&str>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let render = &state.render;
            match render.degree {
                Some(degree) => ui.label(format!(
                    "Punkte: {} | Grad: {}",
                    state.points.len(),
                    degree
                )),
                None => ui.label("Keine Kontrollpunkte"),
            };

            ui.separator();
            ui.label(format!("t = {:.2}", render.t));

            ui.separator();
            ui.label(format!("Modus: {}", render.mode.label()));

            if let Some(index) = state.session.dragging() {
                ui.separator();
                ui.label(format!("Ziehe {}", ControlPointStore::label(index)));
            }

            if let Some(progress) = state.animation.progress() {
                ui.separator();
                ui.label(format!("Animation: {:.0}%", progress * 100.0));
            }

            // Hinweis (z.B. Animation abgeschlossen)
            if let Some(msg) = notice {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
            }
        });
    });
}
