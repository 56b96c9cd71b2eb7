use super::Axis;
use crate::app::EditMode;
use crate::core::Point2D;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Pointer-Down an die Bearbeitungssitzung weiterreichen
    PointerDown { pos: Point2D },
    /// Pointer-Move an die Bearbeitungssitzung weiterreichen
    PointerMove { pos: Point2D },
    /// Pointer-Up: Drag beenden
    PointerUp,
    /// Bearbeitungsmodus setzen
    SetEditMode { mode: EditMode },
    /// Kurvenparameter setzen (wird auf [0,1] begrenzt)
    SetParameter { t: f64 },
    /// Reveal-Modus umschalten
    ToggleRevealMode,
    /// Neuen Animationsdurchlauf starten
    StartAnimation,
    /// Laufende Animation abbrechen
    CancelAnimation,
    /// Einen Animations-Frame ausführen
    AdvanceAnimation,
    /// Alle Kontrollpunkte ersetzen
    ResetControlPoints { points: Vec<Point2D> },
    /// Kontrollpunkt an Index ersetzen
    ReplaceControlPoint { index: usize, position: Point2D },
    /// Eine Koordinate eines Kontrollpunkts ersetzen
    SetControlPointAxis { index: usize, axis: Axis, value: f64 },
    /// Laufzeit-Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Optionen nach `EditorOptions::config_path()` speichern
    SaveOptions,
}
