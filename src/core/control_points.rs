//! Geordnete, veränderliche Sammlung der Kontrollpunkte.
//!
//! Die Einfügereihenfolge bestimmt Grad, Polygonreihenfolge und Beschriftung:
//! Index `i` trägt immer das Label `P{i}`. Nach dem Entfernen rücken alle
//! nachfolgenden Punkte um eins nach vorne, es entstehen keine Lücken.

use super::CurveError;
use glam::DVec2;

/// Treffer einer Pick-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPick {
    /// Index des getroffenen Punkts
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Kontrollpunkte einer Bézier-Kurve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointStore {
    points: Vec<DVec2>,
}

impl ControlPointStore {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Erstellt eine Sammlung aus vorhandenen Punkten (Reihenfolge bleibt erhalten).
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Kontrollpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kurvengrad (`len - 1`), `None` bei leerer Sammlung.
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    /// Read-only Sicht auf alle Punkte in Indexreihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    /// Label eines Index (`P0`, `P1`, …).
    pub fn label(index: usize) -> String {
        format!("P{index}")
    }

    /// Hängt einen Punkt an und gibt seinen neuen Index zurück.
    pub fn add(&mut self, pos: DVec2) -> usize {
        self.points.push(pos);
        let index = self.points.len() - 1;
        log::debug!("Kontrollpunkt {} hinzugefügt: {:?}", Self::label(index), pos);
        index
    }

    /// Sucht den ersten Punkt (niedrigster Index) mit Abstand < `tolerance`.
    ///
    /// Kein echter Nearest-Neighbor: bei mehreren Treffern gewinnt der
    /// niedrigste Index, nicht der nächstgelegene.
    pub fn find_nearest(&self, pos: DVec2, tolerance: f64) -> Option<usize> {
        self.pick(pos, tolerance).map(|hit| hit.index)
    }

    /// Wie [`Self::find_nearest`], liefert zusätzlich die Distanz.
    pub fn pick(&self, pos: DVec2, tolerance: f64) -> Option<PointPick> {
        self.points.iter().enumerate().find_map(|(index, p)| {
            let distance = p.distance(pos);
            (distance < tolerance).then_some(PointPick { index, distance })
        })
    }

    /// Entfernt den ersten Punkt innerhalb von `tolerance`.
    /// Gibt zurück, ob ein Punkt entfernt wurde.
    pub fn remove_nearest(&mut self, pos: DVec2, tolerance: f64) -> bool {
        match self.find_nearest(pos, tolerance) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Entfernt den Punkt an `index`; nachfolgende Indizes rücken nach.
    pub fn remove(&mut self, index: usize) -> Result<DVec2, CurveError> {
        self.check_index(index)?;
        let removed = self.points.remove(index);
        log::debug!(
            "Kontrollpunkt {} entfernt, {} verbleibend",
            Self::label(index),
            self.points.len()
        );
        Ok(removed)
    }

    /// Überschreibt den Punkt an `index` an Ort und Stelle.
    pub fn replace(&mut self, index: usize, pos: DVec2) -> Result<(), CurveError> {
        self.check_index(index)?;
        self.points[index] = pos;
        log::debug!("Kontrollpunkt {} verschoben: {:?}", Self::label(index), pos);
        Ok(())
    }

    /// Ersetzt die gesamte Sammlung.
    pub fn reset(&mut self, points: impl IntoIterator<Item = DVec2>) {
        self.points.clear();
        self.points.extend(points);
        log::debug!("Kontrollpunkte zurückgesetzt ({} Punkte)", self.points.len());
    }

    /// Leert die Sammlung.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    fn check_index(&self, index: usize) -> Result<(), CurveError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(CurveError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}
