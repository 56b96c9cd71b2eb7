//! Bearbeitungssitzung: interpretiert Pointer-Gesten je nach Modus.
//!
//! Zustandstabelle (Modus × Event):
//!
//! | Event        | Add            | Move                       | Remove                 |
//! |--------------|----------------|----------------------------|------------------------|
//! | Pointer-Down | Punkt anhängen | Drag auf Treffer starten   | ersten Treffer löschen |
//! | Pointer-Move | ignoriert      | gegriffenen Punkt ersetzen | ignoriert              |
//! | Pointer-Up   | Drag beenden   | Drag beenden               | Drag beenden           |
//!
//! Events außerhalb des Zeichenbereichs werden ignoriert.

use crate::core::{CanvasRegion, ControlPointStore, CurveError, Point2D};
use crate::shared::EditorOptions;

/// Aktiver Bearbeitungsmodus (genau einer zur Zeit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Klick hängt einen neuen Kontrollpunkt an
    #[default]
    Add,
    /// Klick greift einen Kontrollpunkt, Ziehen verschiebt ihn
    Move,
    /// Klick entfernt einen Kontrollpunkt
    Remove,
}

impl EditMode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [EditMode; 3] = [EditMode::Add, EditMode::Move, EditMode::Remove];

    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            EditMode::Add => "Add",
            EditMode::Move => "Move",
            EditMode::Remove => "Remove",
        }
    }
}

/// Ergebnis eines verarbeiteten Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Kein Effekt
    Ignored,
    /// Kontrollpunkte wurden verändert (Neuberechnung nötig)
    Changed,
    /// Drag auf einem Kontrollpunkt gestartet
    DragStarted {
        /// Gegriffener Index
        index: usize,
    },
    /// Laufender Drag beendet
    DragEnded,
}

impl EditOutcome {
    /// Muss der RenderState neu berechnet werden?
    pub fn needs_recompute(self) -> bool {
        matches!(self, EditOutcome::Changed)
    }
}

/// Modus, Drag-Zustand und Pick-Parameter einer Bearbeitungssitzung.
#[derive(Debug, Clone)]
pub struct EditSession {
    mode: EditMode,
    drag: Option<usize>,
    tolerance: f64,
    region: CanvasRegion,
    cancel_drag_on_mode_change: bool,
}

impl EditSession {
    /// Erstellt eine Sitzung im Add-Modus ohne aktiven Drag.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            mode: EditMode::default(),
            drag: None,
            tolerance: options.pick_tolerance,
            region: options.canvas_region(),
            cancel_drag_on_mode_change: options.cancel_drag_on_mode_change,
        }
    }

    /// Übernimmt Pick-Radius, Zeichenbereich und Drag-Verhalten aus den Optionen.
    pub fn configure(&mut self, options: &EditorOptions) {
        self.tolerance = options.pick_tolerance;
        self.region = options.canvas_region();
        self.cancel_drag_on_mode_change = options.cancel_drag_on_mode_change;
    }

    /// Aktiver Modus.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Index des gerade gezogenen Punkts.
    pub fn dragging(&self) -> Option<usize> {
        self.drag
    }

    /// Aktueller Pick-Radius.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Wechselt den Modus. Keine automatischen Übergänge.
    pub fn set_mode(&mut self, mode: EditMode) {
        if mode != self.mode && self.cancel_drag_on_mode_change && self.drag.take().is_some() {
            log::debug!("Drag durch Moduswechsel abgebrochen");
        }
        self.mode = mode;
        log::info!("Bearbeitungsmodus: {:?}", mode);
    }

    /// Verwirft einen laufenden Drag ohne Pointer-Up.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Pointer gedrückt an `pos` (bereits in Kurven-Koordinaten).
    pub fn on_pointer_down(&mut self, store: &mut ControlPointStore, pos: Point2D) -> EditOutcome {
        if !self.region.contains(pos) {
            return EditOutcome::Ignored;
        }
        match self.mode {
            EditMode::Add => {
                store.add(pos);
                EditOutcome::Changed
            }
            EditMode::Move => match store.find_nearest(pos, self.tolerance) {
                Some(index) => {
                    self.drag = Some(index);
                    EditOutcome::DragStarted { index }
                }
                None => EditOutcome::Ignored,
            },
            EditMode::Remove => {
                if store.remove_nearest(pos, self.tolerance) {
                    EditOutcome::Changed
                } else {
                    EditOutcome::Ignored
                }
            }
        }
    }

    /// Pointer bewegt. Wirkt nur im Move-Modus mit aktivem Drag.
    pub fn on_pointer_move(
        &mut self,
        store: &mut ControlPointStore,
        pos: Point2D,
    ) -> Result<EditOutcome, CurveError> {
        let Some(index) = self.drag else {
            return Ok(EditOutcome::Ignored);
        };
        if self.mode != EditMode::Move || !self.region.contains(pos) {
            return Ok(EditOutcome::Ignored);
        }
        if let Err(e) = store.replace(index, pos) {
            self.drag = None;
            return Err(e);
        }
        Ok(EditOutcome::Changed)
    }

    /// Pointer losgelassen: beendet jeden Drag, unabhängig vom Modus.
    pub fn on_pointer_up(&mut self) -> EditOutcome {
        match self.drag.take() {
            Some(_) => EditOutcome::DragEnded,
            None => EditOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(cancel_on_switch: bool) -> EditSession {
        let options = EditorOptions {
            cancel_drag_on_mode_change: cancel_on_switch,
            ..EditorOptions::default()
        };
        EditSession::new(&options)
    }

    fn store_two() -> ControlPointStore {
        ControlPointStore::from_points([Point2D::new(0.2, 0.2), Point2D::new(0.8, 0.8)])
    }

    #[test]
    fn add_mode_appends_on_press() {
        let mut s = session(true);
        let mut store = ControlPointStore::new();
        let outcome = s.on_pointer_down(&mut store, Point2D::new(0.5, 0.5));
        assert_eq!(outcome, EditOutcome::Changed);
        assert_eq!(store.points(), &[Point2D::new(0.5, 0.5)]);
        assert_eq!(s.dragging(), None);
    }

    #[test]
    fn add_mode_ignores_pointer_move() {
        let mut s = session(true);
        let mut store = store_two();
        let outcome = s
            .on_pointer_move(&mut store, Point2D::new(0.3, 0.3))
            .expect("kein Fehler");
        assert_eq!(outcome, EditOutcome::Ignored);
        assert_eq!(store, store_two());
    }

    #[test]
    fn move_mode_drag_lifecycle() {
        let mut s = session(true);
        s.set_mode(EditMode::Move);
        let mut store = store_two();

        let outcome = s.on_pointer_down(&mut store, Point2D::new(0.81, 0.79));
        assert_eq!(outcome, EditOutcome::DragStarted { index: 1 });
        assert!(!outcome.needs_recompute());

        let outcome = s
            .on_pointer_move(&mut store, Point2D::new(0.6, 0.4))
            .expect("Drag-Update");
        assert_eq!(outcome, EditOutcome::Changed);
        assert_eq!(store.get(1), Some(Point2D::new(0.6, 0.4)));

        assert_eq!(s.on_pointer_up(), EditOutcome::DragEnded);
        assert_eq!(s.dragging(), None);
        assert_eq!(s.on_pointer_up(), EditOutcome::Ignored);
    }

    #[test]
    fn move_mode_press_on_empty_space_starts_nothing() {
        let mut s = session(true);
        s.set_mode(EditMode::Move);
        let mut store = store_two();
        assert_eq!(
            s.on_pointer_down(&mut store, Point2D::new(0.5, 0.5)),
            EditOutcome::Ignored
        );
        assert_eq!(s.dragging(), None);
    }

    #[test]
    fn remove_mode_deletes_first_hit() {
        let mut s = session(true);
        s.set_mode(EditMode::Remove);
        let mut store = store_two();
        assert_eq!(
            s.on_pointer_down(&mut store, Point2D::new(0.2, 0.21)),
            EditOutcome::Changed
        );
        assert_eq!(store.points(), &[Point2D::new(0.8, 0.8)]);
        assert_eq!(
            s.on_pointer_down(&mut store, Point2D::new(0.2, 0.21)),
            EditOutcome::Ignored
        );
    }

    #[test]
    fn events_outside_region_are_ignored() {
        let mut s = session(true);
        let mut store = ControlPointStore::new();
        assert_eq!(
            s.on_pointer_down(&mut store, Point2D::new(1.5, 0.5)),
            EditOutcome::Ignored
        );
        assert_eq!(
            s.on_pointer_down(&mut store, Point2D::new(f64::NAN, 0.5)),
            EditOutcome::Ignored
        );
        assert!(store.is_empty());

        s.set_mode(EditMode::Move);
        let mut store = store_two();
        s.on_pointer_down(&mut store, Point2D::new(0.2, 0.2));
        let outcome = s
            .on_pointer_move(&mut store, Point2D::new(-0.3, 0.2))
            .expect("kein Fehler");
        assert_eq!(outcome, EditOutcome::Ignored);
        assert_eq!(store.get(0), Some(Point2D::new(0.2, 0.2)));
    }

    #[test]
    fn mode_switch_mid_drag_stops_mutation() {
        for cancel_on_switch in [true, false] {
            let mut s = session(cancel_on_switch);
            s.set_mode(EditMode::Move);
            let mut store = store_two();
            s.on_pointer_down(&mut store, Point2D::new(0.2, 0.2));
            s.set_mode(EditMode::Add);
            let outcome = s
                .on_pointer_move(&mut store, Point2D::new(0.4, 0.4))
                .expect("kein Fehler");
            assert_eq!(outcome, EditOutcome::Ignored);
            assert_eq!(store, store_two());
        }
    }

    #[test]
    fn drag_survives_mode_switch_only_when_configured() {
        // Verhalten ohne Abbruch: Drag lebt bis Pointer-Up weiter
        let mut s = session(false);
        s.set_mode(EditMode::Move);
        let mut store = store_two();
        s.on_pointer_down(&mut store, Point2D::new(0.2, 0.2));
        s.set_mode(EditMode::Remove);
        assert_eq!(s.dragging(), Some(0));
        s.set_mode(EditMode::Move);
        let outcome = s
            .on_pointer_move(&mut store, Point2D::new(0.3, 0.3))
            .expect("Drag-Update");
        assert_eq!(outcome, EditOutcome::Changed);

        // Standard: Moduswechsel verwirft den Drag
        let mut s = session(true);
        s.set_mode(EditMode::Move);
        s.on_pointer_down(&mut store, Point2D::new(0.3, 0.3));
        assert_eq!(s.dragging(), Some(0));
        s.set_mode(EditMode::Remove);
        assert_eq!(s.dragging(), None);
    }

    #[test]
    fn stale_drag_index_is_reported_and_cleared() {
        let mut s = session(true);
        s.set_mode(EditMode::Move);
        let mut store = store_two();
        s.on_pointer_down(&mut store, Point2D::new(0.8, 0.8));
        store.clear();
        let err = s
            .on_pointer_move(&mut store, Point2D::new(0.5, 0.5))
            .expect_err("veralteter Index");
        assert_eq!(err, CurveError::IndexOutOfRange { index: 1, len: 0 });
        assert_eq!(s.dragging(), None);
    }
}
