//! Per-tick control loop body
//!
//! A [`Session`] wires the engine to its collaborators. The caller owns the
//! timing: it calls [`Session::poll`] once per period and never from inside
//! a tick, so a target raise between polls cannot tear a classification.

use crate::catalog::Catalog;
use crate::classifier::{Engine, TickReport};
use crate::config::EngineConfig;
use crate::counter::{RepCounters, RepTarget};
use crate::signal::BUFFER_CAPACITY;
use crate::state::State;
use crate::traits::{Clock, DiagnosticSink, Feedback, FeedbackOutput, OrientationSensor};

/// Errors surfaced by a session tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError<E> {
    /// Sensor read failed; the tick was skipped
    Sensor(E),
}

/// Engine plus sensor, clock, feedback and diagnostic collaborators
pub struct Session<'c, S, C, F, D, const N: usize = BUFFER_CAPACITY> {
    engine: Engine<'c, N>,
    target: RepTarget,
    sensor: S,
    clock: C,
    feedback: F,
    diagnostics: D,
}

impl<'c, S, C, F, D> Session<'c, S, C, F, D, BUFFER_CAPACITY>
where
    S: OrientationSensor,
    C: Clock,
    F: FeedbackOutput,
    D: DiagnosticSink,
{
    /// Create a session at power-on state with the default history length
    pub fn new(
        catalog: &'c Catalog,
        config: EngineConfig,
        sensor: S,
        clock: C,
        feedback: F,
        diagnostics: D,
    ) -> Self {
        Self::with_capacity(catalog, config, sensor, clock, feedback, diagnostics)
    }
}

impl<'c, S, C, F, D, const N: usize> Session<'c, S, C, F, D, N>
where
    S: OrientationSensor,
    C: Clock,
    F: FeedbackOutput,
    D: DiagnosticSink,
{
    /// Create a session keeping `N` samples of history
    pub fn with_capacity(
        catalog: &'c Catalog,
        config: EngineConfig,
        sensor: S,
        clock: C,
        mut feedback: F,
        diagnostics: D,
    ) -> Self {
        let engine = Engine::new(catalog, config, clock.now_ms());
        let target = RepTarget::new(config.rep_target, config.rep_target_step);
        feedback.refresh(engine.counters(), &target);
        Self {
            engine,
            target,
            sensor,
            clock,
            feedback,
            diagnostics,
        }
    }

    /// Acquire one sample and classify it
    ///
    /// A failed read leaves every piece of classifier state untouched.
    pub fn poll(&mut self) -> Result<TickReport, SessionError<S::Error>> {
        let now_ms = self.clock.now_ms();

        let sample = match self.sensor.read() {
            Ok(sample) => sample,
            Err(e) => {
                self.feedback.poll(now_ms);
                return Err(SessionError::Sensor(e));
            }
        };

        let report = self.engine.tick(sample, now_ms);

        if let Some(diagnostic) = report.diagnostic() {
            self.diagnostics.record(&diagnostic);
        }

        if let Some(completion) = report.completion {
            let feedback = Feedback::new(completion.exercise, completion.count, &self.target);
            self.feedback.notify(feedback, now_ms);
        }

        self.feedback.poll(now_ms);
        Ok(report)
    }

    /// Raise the shared target by one step and return the new value
    pub fn raise_target(&mut self) -> u32 {
        let value = self.target.raise();
        self.feedback.refresh(self.engine.counters(), &self.target);
        value
    }

    /// Current classifier state
    pub fn state(&self) -> State {
        self.engine.state()
    }

    /// Repetition counters
    pub fn counters(&self) -> &RepCounters {
        self.engine.counters()
    }

    /// Shared repetition target
    pub fn target(&self) -> &RepTarget {
        &self.target
    }

    /// Underlying engine
    pub fn engine(&self) -> &Engine<'c, N> {
        &self.engine
    }

    /// Feedback collaborator
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Time source
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Exercise, CATALOG};
    use crate::classifier::Diagnostic;
    use crate::counter::FeedbackAction;
    use crate::sample::OrientationSample;
    use crate::traits::{ManualClock, NullSink};
    use heapless::Vec;

    const LYING: OrientationSample = OrientationSample::new(320, 292);
    const SIT: OrientationSample = OrientationSample::new(205, 320);

    // Mock sensor replaying a fixed script
    struct ScriptedSensor {
        script: Vec<Option<OrientationSample>, 64>,
        next: usize,
    }

    impl ScriptedSensor {
        fn new(samples: &[Option<OrientationSample>]) -> Self {
            let mut script = Vec::new();
            for &s in samples {
                script.push(s).unwrap();
            }
            Self { script, next: 0 }
        }
    }

    impl OrientationSensor for ScriptedSensor {
        type Error = ();

        fn read(&mut self) -> Result<OrientationSample, ()> {
            let sample = self.script.get(self.next).copied().flatten();
            self.next += 1;
            sample.ok_or(())
        }
    }

    // Mock feedback recording every call
    #[derive(Default)]
    struct RecordingFeedback {
        notified: Vec<Feedback, 16>,
        refreshed: Vec<u32, 8>,
        polls: usize,
    }

    impl FeedbackOutput for RecordingFeedback {
        fn notify(&mut self, feedback: Feedback, _now_ms: u64) {
            self.notified.push(feedback).unwrap();
        }

        fn refresh(&mut self, _counters: &RepCounters, target: &RepTarget) {
            self.refreshed.push(target.get()).unwrap();
        }

        fn poll(&mut self, _now_ms: u64) {
            self.polls += 1;
        }
    }

    // Mock diagnostic sink
    #[derive(Default)]
    struct RecordingSink {
        lines: Vec<Diagnostic, 16>,
    }

    impl DiagnosticSink for RecordingSink {
        fn record(&mut self, diagnostic: &Diagnostic) {
            self.lines.push(*diagnostic).unwrap();
        }
    }

    fn situps(n: usize) -> Vec<Option<OrientationSample>, 64> {
        let mut script = Vec::new();
        for _ in 0..n {
            for s in [LYING, LYING, SIT, SIT] {
                script.push(Some(s)).unwrap();
            }
        }
        script
    }

    fn run<'a>(
        clock: &'a ManualClock,
        script: &[Option<OrientationSample>],
        config: EngineConfig,
    ) -> Session<'static, ScriptedSensor, &'a ManualClock, RecordingFeedback, RecordingSink> {
        let mut session = Session::new(
            &CATALOG,
            config,
            ScriptedSensor::new(script),
            clock,
            RecordingFeedback::default(),
            RecordingSink::default(),
        );
        for _ in 0..script.len() {
            clock.advance(50);
            let _ = session.poll();
        }
        session
    }

    #[test]
    fn test_initial_refresh() {
        let clock = ManualClock::new(0);
        let session = run(&clock, &[], EngineConfig::default());
        assert_eq!(session.feedback().refreshed.as_slice(), &[5]);
        assert_eq!(session.state(), State::Original);
    }

    #[test]
    fn test_completion_notifies_feedback() {
        let clock = ManualClock::new(0);
        let session = run(&clock, &situps(1), EngineConfig::default());

        assert_eq!(session.counters().get(Exercise::SitUp), 1);
        let notified = &session.feedback().notified;
        assert_eq!(notified.len(), 1);
        assert_eq!(notified[0].exercise, Exercise::SitUp);
        assert_eq!(notified[0].count, 1);
        assert!(!notified[0].target_reached);
        assert_eq!(notified[0].action, FeedbackAction::Blink);
        assert_eq!(session.feedback().polls, 4);
    }

    #[test]
    fn test_counting_past_target() {
        let clock = ManualClock::new(0);
        let config = EngineConfig {
            rep_target: 2,
            ..EngineConfig::default()
        };
        let session = run(&clock, &situps(3), config);

        let actions: Vec<FeedbackAction, 4> =
            session.feedback().notified.iter().map(|f| f.action).collect();
        assert_eq!(
            actions.as_slice(),
            &[FeedbackAction::Blink, FeedbackAction::Latch, FeedbackAction::Suppress]
        );
        assert_eq!(session.counters().get(Exercise::SitUp), 3);
        assert!(session.feedback().notified[2].target_reached);
    }

    #[test]
    fn test_diagnostics_recorded() {
        let clock = ManualClock::new(0);
        let session = run(&clock, &situps(1), EngineConfig::default());
        let lines = &session.diagnostics.lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_line().as_str(), "320, 292; situp_lying");
        assert_eq!(lines[1].to_line().as_str(), "205, 320; original");
    }

    #[test]
    fn test_sensor_error_skips_tick() {
        let clock = ManualClock::new(0);
        let script = [Some(LYING), None, Some(LYING)];
        let mut session = Session::new(
            &CATALOG,
            EngineConfig::default(),
            ScriptedSensor::new(&script),
            &clock,
            RecordingFeedback::default(),
            NullSink,
        );

        clock.advance(50);
        assert!(session.poll().is_ok());
        clock.advance(50);
        assert_eq!(session.poll(), Err(SessionError::Sensor(())));
        assert_eq!(session.engine().buffer().latest(), LYING);
        assert_eq!(session.feedback().polls, 2);

        clock.advance(50);
        session.poll().unwrap();
        assert_eq!(session.state(), State::SitupLying);
    }

    #[test]
    fn test_raise_target_refreshes_feedback() {
        let clock = ManualClock::new(0);
        let mut session = run(&clock, &[], EngineConfig::default());
        assert_eq!(session.raise_target(), 10);
        assert_eq!(session.raise_target(), 15);
        assert_eq!(session.target().get(), 15);
        assert_eq!(session.feedback().refreshed.as_slice(), &[5, 10, 15]);
    }

    #[test]
    fn test_new_keeps_default_history() {
        let clock = ManualClock::new(0);
        let session = Session::new(
            &CATALOG,
            EngineConfig::default(),
            ScriptedSensor::new(&[]),
            &clock,
            RecordingFeedback::default(),
            NullSink,
        );
        assert_eq!(session.engine().buffer().capacity(), BUFFER_CAPACITY);
    }

    #[test]
    fn test_with_capacity_sets_history_length() {
        let clock = ManualClock::new(0);
        let session: Session<'_, _, _, _, _, 4> = Session::with_capacity(
            &CATALOG,
            EngineConfig::default(),
            ScriptedSensor::new(&[]),
            &clock,
            RecordingFeedback::default(),
            NullSink,
        );
        assert_eq!(session.engine().buffer().capacity(), 4);
        assert_eq!(session.feedback().refreshed.as_slice(), &[5]);
    }
}
