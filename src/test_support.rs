//! Minimal in-memory stand-ins for the host-provided [`Asset`]/[`Clock`]
//! capabilities, used across the pool/swap/withdrawal test suites.

#![cfg(test)]

use crate::asset::{Asset, Clock};

/// A bare `u64`-value asset handle with no backing custody — exactly
/// enough behavior to exercise the core's bookkeeping.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MockCoin(u64);

impl MockCoin {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl Asset for MockCoin {
    fn value(&self) -> u64 {
        self.0
    }

    fn split(&mut self, amount: u64) -> Self {
        self.0 -= amount;
        Self(amount)
    }

    fn join(&mut self, other: Self) {
        self.0 += other.0;
    }

    fn zero() -> Self {
        Self(0)
    }

    fn destroy_zero(self) -> Result<(), crate::error::Error> {
        if self.0 == 0 {
            Ok(())
        } else {
            Err(crate::error::Error::Overflow)
        }
    }

    fn withdraw_all(&mut self) -> Self {
        self.split(self.0)
    }
}

/// A clock whose reading is set directly by the test, rather than
/// advancing on its own.
pub struct ScriptedClock(std::cell::Cell<u64>);

impl ScriptedClock {
    pub fn new(start_ms: u64) -> Self {
        Self(std::cell::Cell::new(start_ms))
    }

    pub fn advance_to(&self, ms: u64) {
        self.0.set(ms);
    }
}

impl Clock for ScriptedClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}
