pub const RESIZE_QUIET_MS: i32 = 250;

/// Ticket handed to a scheduled callback; only the newest one may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Collapses a burst of events into one action after a quiet period.
///
/// Every event bumps the generation. A timer callback carrying an older
/// ticket is stale even if the host failed to cancel it.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: bool,
    fired: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self) -> Ticket {
        self.generation += 1;
        self.pending = true;
        Ticket(self.generation)
    }

    /// Called when a timer elapses. Returns true when the action should run.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if !self.pending || ticket.0 != self.generation {
            return false;
        }
        self.pending = false;
        self.fired += 1;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of times the action has run.
    pub fn fired(&self) -> u64 {
        self.fired
    }
}
