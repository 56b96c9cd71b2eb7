//! Animations-Treiber: fährt t in festen Frame-Schritten von 0 nach 1.
//!
//! Der Treiber liest keine Uhr. Der Host meldet jeden Frame explizit
//! (`tick`), ein Frame-Zähler bildet linear auf `t = frame / frames` ab.
//! Ein erneuter `start` bricht den laufenden Durchlauf ab und beginnt bei 0,
//! es gibt nie zwei parallele Durchläufe.

/// Ergebnis eines einzelnen Animations-Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTick {
    /// Kurvenparameter dieses Frames, auf [0,1] begrenzt
    pub t: f64,
    /// Frame-Nummer innerhalb des Durchlaufs
    pub frame: u32,
    /// Letzter Frame des Durchlaufs (Completion genau einmal)
    pub finished: bool,
}

/// Abbrechbarer, frame-getakteter t-Sweep.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    frames: u32,
    /// Beim `start` festgehaltene Frame-Anzahl des laufenden Durchlaufs
    run_frames: u32,
    next_frame: Option<u32>,
    run: u64,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(crate::shared::ANIMATION_FRAMES)
    }
}

impl AnimationDriver {
    /// Erstellt einen ruhenden Treiber mit `frames` Schritten pro Durchlauf.
    pub fn new(frames: u32) -> Self {
        let frames = frames.max(1);
        Self {
            frames,
            run_frames: frames,
            next_frame: None,
            run: 0,
        }
    }

    /// Ändert die Frame-Anzahl. Wirkt ab dem nächsten `start`,
    /// ein laufender Durchlauf behält seine Frame-Anzahl.
    pub fn set_frames(&mut self, frames: u32) {
        self.frames = frames.max(1);
    }

    /// Frames pro Durchlauf.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Läuft gerade ein Durchlauf?
    pub fn is_running(&self) -> bool {
        self.next_frame.is_some()
    }

    /// Laufende Nummer des aktuellen (oder letzten) Durchlaufs.
    pub fn run_id(&self) -> u64 {
        self.run
    }

    /// Startet einen neuen Durchlauf bei t = 0.
    /// Ein laufender Durchlauf wird dabei ohne Completion verworfen.
    pub fn start(&mut self) -> u64 {
        if self.is_running() {
            log::info!("Animation #{} durch Neustart abgebrochen", self.run);
        }
        self.run += 1;
        self.run_frames = self.frames;
        self.next_frame = Some(0);
        log::info!("Animation #{} gestartet ({} Frames)", self.run, self.frames);
        self.run
    }

    /// Bricht den laufenden Durchlauf ab. Gibt zurück, ob einer lief.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.next_frame.take().is_some();
        if was_running {
            log::info!("Animation #{} abgebrochen", self.run);
        }
        was_running
    }

    /// Fortschritt des laufenden Durchlaufs in [0,1].
    pub fn progress(&self) -> Option<f64> {
        self.next_frame
            .map(|frame| (frame as f64 / self.run_frames as f64).clamp(0.0, 1.0))
    }

    /// Führt einen Frame aus. `None`, wenn kein Durchlauf läuft.
    ///
    /// Ein Durchlauf umfasst die Frames `0..=frames`; der letzte liefert
    /// `t == 1.0` und `finished == true`, danach ist der Treiber wieder ruhend.
    pub fn tick(&mut self) -> Option<AnimationTick> {
        let frame = self.next_frame?;
        let t = (frame as f64 / self.run_frames as f64).clamp(0.0, 1.0);
        let finished = frame >= self.run_frames;
        self.next_frame = if finished { None } else { Some(frame + 1) };
        Some(AnimationTick { t, frame, finished })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(driver: &mut AnimationDriver) -> Vec<AnimationTick> {
        std::iter::from_fn(|| driver.tick()).collect()
    }

    #[test]
    fn idle_driver_does_not_tick() {
        let mut driver = AnimationDriver::new(100);
        assert!(!driver.is_running());
        assert_eq!(driver.tick(), None);
        assert_eq!(driver.progress(), None);
    }

    #[test]
    fn full_run_ends_at_one_and_finishes_once() {
        let mut driver = AnimationDriver::new(100);
        driver.start();
        let ticks = run_to_end(&mut driver);

        assert_eq!(ticks.len(), 101);
        assert_eq!(ticks[0].t, 0.0);
        assert_eq!(ticks[50].t, 0.5);
        let last = ticks.last().copied().expect("letzter Frame");
        assert_eq!(last.t, 1.0);
        assert!(last.finished);
        assert_eq!(ticks.iter().filter(|tick| tick.finished).count(), 1);
        assert!(!driver.is_running());
    }

    #[test]
    fn t_is_monotonic_and_bounded() {
        let mut driver = AnimationDriver::new(7);
        driver.start();
        let ticks = run_to_end(&mut driver);
        assert!(ticks.windows(2).all(|w| w[0].t < w[1].t));
        assert!(ticks.iter().all(|tick| (0.0..=1.0).contains(&tick.t)));
    }

    #[test]
    fn restart_supersedes_running_sweep() {
        let mut driver = AnimationDriver::new(10);
        let first = driver.start();
        for _ in 0..5 {
            driver.tick();
        }
        let second = driver.start();
        assert_ne!(first, second);

        let ticks = run_to_end(&mut driver);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0].t, 0.0);
        assert_eq!(ticks.iter().filter(|tick| tick.finished).count(), 1);
    }

    #[test]
    fn cancel_stops_without_completion() {
        let mut driver = AnimationDriver::new(10);
        driver.start();
        driver.tick();
        assert!(driver.cancel());
        assert_eq!(driver.tick(), None);
        assert!(!driver.cancel());
    }

    #[test]
    fn frame_change_applies_to_next_run_only() {
        let mut driver = AnimationDriver::new(100);
        driver.start();
        let before = (0..51).filter_map(|_| driver.tick()).last().expect("Frame 50");
        assert_eq!(before.t, 0.5);

        driver.set_frames(1000);
        let rest = run_to_end(&mut driver);
        assert_eq!(rest.len(), 50);
        assert!(rest.iter().all(|tick| tick.t > before.t));
        assert_eq!(rest.last().map(|tick| tick.t), Some(1.0));

        driver.start();
        assert_eq!(run_to_end(&mut driver).len(), 1001);
    }

    #[test]
    fn zero_frames_is_clamped_to_single_step() {
        let mut driver = AnimationDriver::new(0);
        assert_eq!(driver.frames(), 1);
        driver.start();
        let ticks = run_to_end(&mut driver);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1].t, 1.0);
    }
}
