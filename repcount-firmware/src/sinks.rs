//! Board-side collaborators for the session
//!
//! Time comes from the embassy time driver; diagnostics go out over RTT.

use defmt::info;
use embassy_time::Instant;

use repcount_core::traits::{Clock, DiagnosticSink};
use repcount_core::Diagnostic;

/// Monotonic clock backed by the embassy time driver
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Diagnostic sink printing one line per event over defmt
#[derive(Clone, Copy, Default)]
pub struct DefmtSink;

impl DiagnosticSink for DefmtSink {
    fn record(&mut self, diagnostic: &Diagnostic) {
        info!("{=str}", diagnostic.to_line().as_str());
    }
}
