//! Fire control (cooldown gate)

/// Tracks the last successful shot against a millisecond clock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FireControl {
    last_shot_ms: Option<u64>,
}

impl FireControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a shot at `now_ms` would pass the gate
    pub fn ready(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        match self.last_shot_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= cooldown_ms,
        }
    }

    /// Consume the gate. Returns false (and records nothing) during cooldown.
    pub fn try_fire(&mut self, now_ms: u64, cooldown_ms: u64) -> bool {
        if !self.ready(now_ms, cooldown_ms) {
            return false;
        }
        self.last_shot_ms = Some(now_ms);
        true
    }

    pub fn last_shot_ms(&self) -> Option<u64> {
        self.last_shot_ms
    }
}
