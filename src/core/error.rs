//! Fehlertypen der Kurven-Domäne.

use thiserror::Error;

/// Vertragsverletzungen beim Zugriff auf Kontrollpunkte oder bei der Auswertung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Index verweist auf keinen aktuellen Kontrollpunkt.
    #[error("Kontrollpunkt-Index {index} außerhalb des gültigen Bereichs (Anzahl: {len})")]
    IndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Aktuelle Anzahl Kontrollpunkte
        len: usize,
    },

    /// Auswertung ohne Kontrollpunkte ist nicht definiert.
    #[error("keine Kontrollpunkte vorhanden")]
    EmptyControlSet,
}
