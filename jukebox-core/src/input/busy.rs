/// Watches the audio module's busy level for the busy to idle transition,
/// which is how a finished track shows up when no explicit notice arrives.
#[derive(Debug, Default)]
pub struct BusyMonitor {
    busy: bool,
}

impl BusyMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the level, returning whether it just fell to idle.
    pub fn went_idle(&mut self, busy: bool) -> bool {
        let edge = self.busy && !busy;
        self.busy = busy;
        edge
    }
}
