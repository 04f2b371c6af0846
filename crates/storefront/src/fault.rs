//! Fault-injection port for add-to-cart.
//!
//! The original demo rejected roughly one add in twenty via an inline
//! probability draw, which made the failure path untestable. The decision
//! is isolated here behind [`FaultPolicy`] so production keeps the random
//! draw while tests script both outcomes deterministically.

use std::collections::VecDeque;

use rand::Rng;

/// Decides whether the next add-to-cart attempt fails.
pub trait FaultPolicy: Send {
    /// Returns `true` when the next add should be rejected with a
    /// transient fault.
    fn fail_next_add(&mut self) -> bool;
}

/// Never injects a fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaults;

impl FaultPolicy for NoFaults {
    fn fail_next_add(&mut self) -> bool {
        false
    }
}

/// Fails each add independently with a fixed probability.
#[derive(Debug, Clone, Copy)]
pub struct RandomFaults {
    rate: f64,
}

impl RandomFaults {
    /// Create a policy with the given failure probability, clamped to
    /// `[0, 1]`.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }
}

impl FaultPolicy for RandomFaults {
    fn fail_next_add(&mut self) -> bool {
        rand::rng().random_bool(self.rate)
    }
}

/// Replays a fixed sequence of outcomes, then succeeds forever.
///
/// `true` entries fail the corresponding add.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFaults {
    script: VecDeque<bool>,
}

impl ScriptedFaults {
    /// Create a policy from the given outcome sequence.
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: outcomes.into_iter().collect(),
        }
    }
}

impl FaultPolicy for ScriptedFaults {
    fn fail_next_add(&mut self) -> bool {
        self.script.pop_front().unwrap_or(false)
    }
}
