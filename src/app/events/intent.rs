use crate::app::EditMode;
use crate::core::Point2D;
use crate::shared::EditorOptions;

/// Koordinatenachse für achsenweise Punkt-Bearbeitung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontale Koordinate
    X,
    /// Vertikale Koordinate
    Y,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind bereits in Kurven-Koordinaten umgerechnet.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer im Zeichenbereich gedrückt
    PointerPressed { pos: Point2D },
    /// Pointer bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { pos: Point2D },
    /// Pointer losgelassen
    PointerReleased,
    /// Bearbeitungsmodus wechseln (Radio-Buttons)
    EditModeRequested { mode: EditMode },
    /// Kurvenparameter t geändert (Regler)
    ParameterChanged { t: f64 },
    /// Reveal-Modus umschalten (Checkbox)
    RevealModeToggled,
    /// Animation starten (ein laufender Durchlauf wird ersetzt)
    AnimationStartRequested,
    /// Laufende Animation ohne Completion abbrechen
    AnimationCancelRequested,
    /// Frame-Takt des Hosts während einer Animation
    AnimationFrameElapsed,
    /// Kontrollpunkte auf die Standardkurve zurücksetzen
    ResetRequested,
    /// Kontrollpunkte durch eine vorgegebene Liste ersetzen
    ResetToPointsRequested { points: Vec<Point2D> },
    /// Kontrollpunkt direkt auf eine Position setzen
    ControlPointEdited { index: usize, position: Point2D },
    /// Eine Koordinate eines Kontrollpunkts setzen (Regler je Achse)
    ControlPointAxisEdited { index: usize, axis: Axis, value: f64 },
    /// Neue Laufzeit-Optionen übernehmen
    OptionsApplied { options: EditorOptions },
    /// Aktuelle Optionen in die TOML-Datei schreiben
    OptionsSaveRequested,
}
