/// One-slot request arena
///
/// Each resolver owns exactly one slot. Starting a request bumps the
/// generation, so any response still in flight for an older generation
/// no longer matches and gets dropped on arrival. Nothing is queued and
/// nothing is aborted at the transport level.

/// Tracks the single "current" request of a resolver
#[derive(Debug, Default)]
pub struct RequestSlot {
    generation: u64,
    in_flight: bool,
}

/// What happened to a response handed back to a resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response matched the live request and was applied
    Applied,
    /// The response belonged to a superseded request and was ignored
    Discarded,
}

impl RequestSlot {
    /// Start a new request, superseding whatever was in flight
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.generation
    }

    /// Abandon the current request without starting another
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.in_flight = false;
    }

    /// Accept a response for `generation` if it is still the live request.
    /// Returns `false` for stale or already-finished generations.
    pub fn finish(&mut self, generation: u64) -> bool {
        if self.in_flight && generation == self.generation {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }
}
