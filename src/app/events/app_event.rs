/// Benachrichtigungen vom Core an die UI (Outbox, vom Host abgeholt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Ein Animationsdurchlauf hat seinen letzten Frame erreicht
    AnimationCompleted {
        /// Nummer des abgeschlossenen Durchlaufs
        run: u64,
    },
    /// Der RenderState wurde neu berechnet
    RenderStateChanged,
}
