//! Seitenpanel: Modus, t-Regler, Reveal-Schalter, Animation und Punktkoordinaten.

use crate::app::{AppIntent, AppState, Axis, EditMode};
use crate::core::ControlPointStore;
use crate::shared::options::{
    ANIMATION_FRAMES_RANGE, CURVE_SAMPLES_RANGE, PICK_TOLERANCE_RANGE,
};

/// Rendert das Bedienpanel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let animating = state.is_animating();

    egui::SidePanel::right("control_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Modus");
            let active = state.session.mode();
            for mode in EditMode::ALL {
                if ui.radio(active == mode, mode.label()).clicked() && active != mode {
                    events.push(AppIntent::EditModeRequested { mode });
                }
            }

            ui.separator();

            let mut t = state.view.t;
            let slider = egui::Slider::new(&mut t, 0.0..=1.0)
                .step_by(state.options.t_step)
                .text("t");
            if ui.add_enabled(!animating, slider).changed() {
                events.push(AppIntent::ParameterChanged { t });
            }

            let mut reveal = state.view.reveal;
            if ui.checkbox(&mut reveal, "Slider Mode").changed() {
                events.push(AppIntent::RevealModeToggled);
            }

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!animating, egui::Button::new("Animate"))
                    .clicked()
                {
                    events.push(AppIntent::AnimationStartRequested);
                }
                if ui.add_enabled(animating, egui::Button::new("Stop")).clicked() {
                    events.push(AppIntent::AnimationCancelRequested);
                }
                if ui.button("Reset").clicked() {
                    events.push(AppIntent::ResetRequested);
                }
            });

            ui.separator();
            events.extend(render_options_section(ui, state));

            ui.separator();
            ui.heading("Kontrollpunkte");
            events.extend(render_point_editors(ui, state));
        });

    events
}

/// Aufklappbare Laufzeit-Optionen. Änderungen gelten sofort.
fn render_options_section(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    ui.collapsing("Optionen", |ui| {
        ui.horizontal(|ui| {
            ui.label("Pick-Radius:");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut opts.pick_tolerance)
                        .range(PICK_TOLERANCE_RANGE)
                        .speed(0.001),
                )
                .changed();
        });
        ui.horizontal(|ui| {
            ui.label("Stützstellen:");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut opts.curve_samples).range(CURVE_SAMPLES_RANGE),
                )
                .changed();
        });
        ui.horizontal(|ui| {
            ui.label("Animations-Frames:");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut opts.animation_frames)
                        .range(ANIMATION_FRAMES_RANGE),
                )
                .changed();
        });
        changed |= ui
            .checkbox(&mut opts.show_construction, "Konstruktion anzeigen")
            .changed();
        changed |= ui
            .checkbox(
                &mut opts.cancel_drag_on_mode_change,
                "Drag bei Moduswechsel abbrechen",
            )
            .changed();

        if ui.button("Speichern").clicked() {
            events.push(AppIntent::OptionsSaveRequested);
        }
    });

    if changed {
        events.insert(0, AppIntent::OptionsApplied { options: opts });
    }
    events
}

/// Je Kontrollpunkt ein X- und ein Y-Regler.
fn render_point_editors(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let min = state.options.canvas_min;
    let max = state.options.canvas_max;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, point) in state.points.points().iter().enumerate() {
            let label = ControlPointStore::label(index);
            for (axis, mut value, range) in [
                (Axis::X, point.x, min.x..=max.x),
                (Axis::Y, point.y, min.y..=max.y),
            ] {
                let text = format!("{label} {axis:?}");
                if ui
                    .add(egui::Slider::new(&mut value, range).text(text))
                    .changed()
                {
                    events.push(AppIntent::ControlPointAxisEdited { index, axis, value });
                }
            }
        }
    });

    events
}
