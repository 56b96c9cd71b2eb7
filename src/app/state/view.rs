/// Darstellungsbezogener Anwendungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Kurvenparameter t in [0,1]
    pub t: f64,
    /// Reveal-Modus: Kurve nur bis t zeichnen
    pub reveal: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (t = 0).
    pub fn new(reveal: bool) -> Self {
        Self { t: 0.0, reveal }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(crate::shared::options::SLIDER_REVEAL_DEFAULT)
    }
}
