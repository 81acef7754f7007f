//! Host-side input discipline
//!
//! A held key repeats its key-down event every OS repeat interval; only the
//! first may inject a jump impulse, or a single physical press would stack
//! several impulses between ticks. The guard latches on press and re-arms
//! on the matching release.

/// Debounce latch for the jump command
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpGuard {
    held: bool,
}

impl JumpGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a press; returns whether the command should fire
    pub fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    /// Register the matching release, re-arming the guard
    pub fn release(&mut self) {
        self.held = false;
    }
}
