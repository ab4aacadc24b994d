//! Motion classification engine
//!
//! Each tick pushes one sample, recomputes the rolling averages and
//! evaluates the active state's predicates against the catalog. The
//! inactivity timeout is checked before anything else and overrides any
//! other transition in the same tick.

pub mod report;

pub use report::{Completion, Diagnostic, TickReport, Transition, MAX_DIAGNOSTIC_LEN};

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::counter::RepCounters;
use crate::sample::OrientationSample;
use crate::signal::{Averages, SampleBuffer, BUFFER_CAPACITY};
use crate::state::{Event, State};

/// Evaluate the predicates of `state`, first match wins
///
/// Returns the recognised event together with the signal reported in the
/// diagnostic line.
pub fn detect(catalog: &Catalog, state: State, avg: &Averages) -> Option<(Event, OrientationSample)> {
    let raw = avg.latest;
    let short = avg.short;
    let long = avg.long;
    let jj = &catalog.jumping_jack;

    match state {
        State::Original => {
            if catalog.stand.contains(raw) {
                Some((Event::Stood, short))
            } else if catalog.sit_up.lying.contains(short) {
                Some((Event::LayDown, short))
            } else {
                None
            }
        }
        State::SitupLying => catalog
            .sit_up
            .sit
            .contains(short)
            .then_some((Event::SatUp, short)),
        State::Standing => {
            let down = &catalog.squat.down;
            if down.contains(long) && down.contains(short) {
                Some((Event::SquatLowered, long))
            } else if jj.is_horizontal(raw, short) {
                Some((Event::HorizontalReached, raw))
            } else if catalog.push_up.down.contains(short) {
                Some((Event::PushupLowered, short))
            } else {
                None
            }
        }
        State::SquatDown => catalog
            .squat
            .stand
            .contains(short)
            .then_some((Event::Rose, short)),
        State::PushupDown => catalog
            .push_up
            .stand
            .contains(short)
            .then_some((Event::Rose, short)),
        State::JumpHorizontal1 => jj.is_vertical(raw).then_some((Event::VerticalReached, short)),
        State::JumpVertical => jj
            .is_horizontal(raw, short)
            .then_some((Event::HorizontalReached, short)),
        State::JumpHorizontal2 => jj.stand.contains(raw).then_some((Event::Stood, short)),
    }
}

/// Classifier engine
///
/// Owns every piece of mutable classification state: the sample history,
/// the current state, the last transition time and the counters. A restart
/// is a fresh `Engine`.
#[derive(Debug, Clone)]
pub struct Engine<'c, const N: usize = BUFFER_CAPACITY> {
    catalog: &'c Catalog,
    config: EngineConfig,
    buffer: SampleBuffer<N>,
    state: State,
    last_transition_ms: u64,
    counters: RepCounters,
}

impl<'c, const N: usize> Engine<'c, N> {
    /// Create an engine in `Original` with zero counters
    pub fn new(catalog: &'c Catalog, config: EngineConfig, now_ms: u64) -> Self {
        Self {
            catalog,
            config,
            buffer: SampleBuffer::new(),
            state: State::Original,
            last_transition_ms: now_ms,
            counters: RepCounters::new(),
        }
    }

    /// Current classifier state
    pub fn state(&self) -> State {
        self.state
    }

    /// Repetition counters
    pub fn counters(&self) -> &RepCounters {
        &self.counters
    }

    /// Time of the most recent transition (ms)
    pub fn last_transition_ms(&self) -> u64 {
        self.last_transition_ms
    }

    /// Sample history
    pub fn buffer(&self) -> &SampleBuffer<N> {
        &self.buffer
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Return to power-on state
    pub fn reset(&mut self, now_ms: u64) {
        self.buffer.clear();
        self.state = State::Original;
        self.last_transition_ms = now_ms;
        self.counters = RepCounters::new();
    }

    /// Run one classification pass for a new sample
    pub fn tick(&mut self, sample: OrientationSample, now_ms: u64) -> TickReport {
        self.buffer.push(sample);
        let averages = Averages::compute(&self.buffer);

        let mut report = TickReport {
            averages,
            transition: None,
            completion: None,
        };

        let idle_ms = now_ms.saturating_sub(self.last_transition_ms);
        if idle_ms > self.config.inactivity_timeout_ms {
            report.transition = Some(self.apply(Event::InactivityTimeout, averages.short, now_ms));
            return report;
        }

        if let Some((event, reading)) = detect(self.catalog, self.state, &averages) {
            if let Some(exercise) = self.state.completes(event) {
                let count = self.counters.increment(exercise);
                report.completion = Some(Completion { exercise, count });
            }
            report.transition = Some(self.apply(event, reading, now_ms));
        }

        report
    }

    fn apply(&mut self, event: Event, reading: OrientationSample, now_ms: u64) -> Transition {
        let from = self.state;
        self.state = from.transition(event);
        self.last_transition_ms = now_ms;
        Transition {
            from,
            to: self.state,
            event,
            reading,
            at_ms: now_ms,
        }
    }
}
