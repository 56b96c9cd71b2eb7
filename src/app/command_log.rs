//! Ringpuffer der zuletzt ausgeführten Commands (Diagnose im laufenden Editor).

use std::collections::VecDeque;

use super::AppCommand;

/// Hält die jüngsten Commands in Ausführungsreihenfolge.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl CommandLog {
    /// Standardkapazität des Logs.
    pub const DEFAULT_CAPACITY: usize = 512;

    /// Erstellt ein leeres Log mit Standardkapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt ein leeres Log, das höchstens `capacity` Einträge hält (mind. 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Hängt einen Command an; bei vollem Log fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Gibt die Anzahl der gehaltenen Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch kein Command geloggt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle Einträge, ältester zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_log_drops_oldest_entry() {
        let mut log = CommandLog::with_capacity(3);
        log.record(&AppCommand::StartAnimation);
        log.record(&AppCommand::PointerUp);
        log.record(&AppCommand::PointerUp);
        log.record(&AppCommand::ToggleRevealMode);

        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().next(), Some(&AppCommand::PointerUp));
        assert_eq!(log.last(), Some(&AppCommand::ToggleRevealMode));
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut log = CommandLog::with_capacity(0);
        assert!(log.is_empty());
        log.record(&AppCommand::CancelAnimation);
        log.record(&AppCommand::AdvanceAnimation);
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some(&AppCommand::AdvanceAnimation));
    }
}
