//! Engine configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sampling period (ms)
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 50;

/// Default inactivity timeout (ms)
pub const DEFAULT_INACTIVITY_TIMEOUT_MS: u64 = 15_000;

/// Default repetition target and button increment
pub const DEFAULT_REP_TARGET: u32 = 5;

/// Timing and target configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Fixed delay between ticks (ms)
    pub tick_interval_ms: u32,
    /// Force `Original` once this much time passes without a transition (ms)
    pub inactivity_timeout_ms: u64,
    /// How long a completion blink keeps the LED dark (ms)
    pub blink_off_ms: u32,
    /// Initial repetition target
    pub rep_target: u32,
    /// Target increment per button press
    pub rep_target_step: u32,
    /// Ignore further presses for this long after one fires (ms)
    pub button_holdoff_ms: u32,
}

impl EngineConfig {
    /// Reference configuration
    pub const fn new() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            inactivity_timeout_ms: DEFAULT_INACTIVITY_TIMEOUT_MS,
            blink_off_ms: 50,
            rep_target: DEFAULT_REP_TARGET,
            rep_target_step: DEFAULT_REP_TARGET,
            button_holdoff_ms: 100,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
