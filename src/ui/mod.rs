//! UI-Komponenten: Zeichenfläche, Bedienpanel und Status-Bar.

/// Zeichenfläche mit Koordinaten-Abbildung und Pointer-Input
pub mod canvas;
pub mod panel;
pub mod status;

pub use canvas::CanvasView;
pub use panel::render_control_panel;
pub use status::render_status_bar;
