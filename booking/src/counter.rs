/// Floor shared by every counter in the wizard.
pub const COUNTER_MIN: u32 = 1;

/// Room/bathroom style counter with a hard floor of 1 and no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: u32,
}

impl Counter {
    /// Values below the floor are raised to it.
    pub fn new(value: u32) -> Self {
        Self {
            value: value.max(COUNTER_MIN),
        }
    }

    pub fn value(self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1).max(COUNTER_MIN);
        self.value
    }

    /// False at the floor; the decrement button is disabled then.
    pub fn can_decrement(self) -> bool {
        self.value > COUNTER_MIN
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(COUNTER_MIN)
    }
}
