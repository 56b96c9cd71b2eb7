//! Zeichenfläche: Pointer-Input → AppIntent und Painting des RenderStates.

use crate::app::AppIntent;
use crate::core::{CanvasRegion, Point2D};
use crate::shared::RenderState;

const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1f, 0x77, 0xb4);
const POLYGON_COLOR: egui::Color32 = egui::Color32::from_rgb(0xd6, 0x27, 0x28);
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2c, 0xa0, 0x2c);
const CONSTRUCTION_COLOR: egui::Color32 = egui::Color32::from_gray(0x90);
const POINT_RADIUS_PX: f32 = 5.0;
const MARKER_RADIUS_PX: f32 = 6.5;

/// Abbildung zwischen Bildschirm-Rechteck und Kurven-Koordinaten.
///
/// Die y-Achse zeigt in Kurven-Koordinaten nach oben, auf dem Bildschirm nach unten.
#[derive(Debug, Clone, Copy)]
pub struct CanvasView {
    rect: egui::Rect,
    region: CanvasRegion,
}

impl CanvasView {
    /// Erstellt eine Abbildung für das übergebene Bildschirm-Rechteck.
    pub fn new(rect: egui::Rect, region: CanvasRegion) -> Self {
        Self { rect, region }
    }

    /// Bildschirm → Kurven-Koordinaten.
    pub fn screen_to_curve(&self, pos: egui::Pos2) -> Point2D {
        let size = self.region.size();
        let u = f64::from((pos.x - self.rect.left()) / self.rect.width());
        let v = f64::from((self.rect.bottom() - pos.y) / self.rect.height());
        self.region.min + Point2D::new(u * size.x, v * size.y)
    }

    /// Kurven- → Bildschirm-Koordinaten.
    pub fn curve_to_screen(&self, pos: Point2D) -> egui::Pos2 {
        let rel = (pos - self.region.min) / self.region.size();
        egui::pos2(
            self.rect.left() + rel.x as f32 * self.rect.width(),
            self.rect.bottom() - rel.y as f32 * self.rect.height(),
        )
    }

    /// Sammelt Pointer-Events der Zeichenfläche als AppIntents.
    pub fn collect_pointer_intents(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let (pressed, released, moving, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.interact_pos(),
            )
        });

        let mut events = Vec::new();
        let Some(screen_pos) = pointer_pos else {
            if released {
                events.push(AppIntent::PointerReleased);
            }
            return events;
        };
        let pos = self.screen_to_curve(screen_pos);

        if pressed && response.hovered() {
            events.push(AppIntent::PointerPressed { pos });
        }
        if moving {
            events.push(AppIntent::PointerMoved { pos });
        }
        if released {
            events.push(AppIntent::PointerReleased);
        }
        events
    }

    /// Zeichnet Kontrollpolygon, Kurve, Konstruktion, Marker und Labels.
    pub fn paint(&self, painter: &egui::Painter, scene: &RenderState) {
        painter.rect_filled(self.rect, egui::CornerRadius::ZERO, egui::Color32::WHITE);
        if !scene.has_curve() {
            return;
        }

        let to_screen = |points: &[Point2D]| -> Vec<egui::Pos2> {
            points.iter().map(|&p| self.curve_to_screen(p)).collect()
        };

        painter.add(egui::Shape::line(
            to_screen(scene.control_polygon.as_slice()),
            egui::Stroke::new(1.5, POLYGON_COLOR),
        ));
        for level in scene.construction.iter().filter(|level| level.len() > 1) {
            painter.add(egui::Shape::line(
                to_screen(level.as_slice()),
                egui::Stroke::new(1.0, CONSTRUCTION_COLOR),
            ));
        }
        painter.add(egui::Shape::line(
            to_screen(scene.curve.as_slice()),
            egui::Stroke::new(2.0, CURVE_COLOR),
        ));

        for &p in &scene.control_polygon {
            painter.circle_filled(self.curve_to_screen(p), POINT_RADIUS_PX, POLYGON_COLOR);
        }
        if let Some(marker) = scene.t_marker {
            painter.circle_filled(self.curve_to_screen(marker), MARKER_RADIUS_PX, MARKER_COLOR);
        }
        for label in &scene.labels {
            painter.text(
                self.curve_to_screen(label.position),
                egui::Align2::RIGHT_BOTTOM,
                &label.text,
                egui::FontId::proportional(14.0),
                egui::Color32::BLACK,
            );
        }
    }
}
