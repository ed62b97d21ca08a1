//! Ink economy: a depleting reserve that gates how much a drawer can paint.
//!
//! Every accepted pointer sample costs a fixed amount of ink regardless of
//! how many pixels it touches. When the reserve hits zero the gate denies
//! further painting until an explicit refill.

use std::time::{Duration, Instant};

/// Capacity of the reserve; also the refill target.
pub const MAX_INK: f64 = 100.0;

/// Ink drained by one accepted pointer sample.
pub const DEFAULT_DEPLETION_RATE: f64 = 0.115;

/// Flat surcharge added per sample while the penalty modifier is active.
pub const PENALTY_PER_SAMPLE: f64 = 0.2;

/// Default on/off period of the intermittent gate.
pub const DEFAULT_GATE_PERIOD: Duration = Duration::from_millis(50);

/// Admission decision for a single pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Allowed,
    Denied,
}

/// Finite ink supply consumed per accepted sample.
#[derive(Debug, Clone)]
pub struct InkReserve {
    level: f64,
    depletion_rate: f64,
    penalty_enabled: bool,
}

impl Default for InkReserve {
    fn default() -> Self {
        Self::new()
    }
}

impl InkReserve {
    /// Creates a full reserve with the default per-sample cost.
    pub fn new() -> Self {
        Self {
            level: MAX_INK,
            depletion_rate: DEFAULT_DEPLETION_RATE,
            penalty_enabled: false,
        }
    }

    /// Current level in `[0.0, MAX_INK]`.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Asks whether the next sample may paint. Does not consume.
    pub fn request_paint(&self) -> Gate {
        if self.level > 0.0 {
            Gate::Allowed
        } else {
            Gate::Denied
        }
    }

    /// Charges one sample's worth of ink, clamping at zero.
    pub fn consume(&mut self) {
        let mut cost = self.depletion_rate;
        if self.penalty_enabled {
            cost += PENALTY_PER_SAMPLE;
        }
        self.level = (self.level - cost).max(0.0);
    }

    /// Resets the reserve to capacity.
    ///
    /// Returns `true` if the level actually changed, so callers can skip
    /// acknowledging a refill that had no effect.
    pub fn refill(&mut self) -> bool {
        let changed = self.level < MAX_INK;
        self.level = MAX_INK;
        changed
    }

    /// Updates the per-sample cost. Non-finite or negative rates are
    /// rejected and the previous rate kept.
    pub fn set_depletion_rate(&mut self, rate: f64) -> bool {
        if !rate.is_finite() || rate < 0.0 {
            log::warn!(
                "Ignoring invalid ink depletion rate {rate}; keeping {}",
                self.depletion_rate
            );
            return false;
        }
        self.depletion_rate = rate;
        true
    }

    pub fn depletion_rate(&self) -> f64 {
        self.depletion_rate
    }

    pub fn set_penalty_enabled(&mut self, enabled: bool) {
        self.penalty_enabled = enabled;
    }

    pub fn penalty_enabled(&self) -> bool {
        self.penalty_enabled
    }
}

/// Periodically interrupts painting while a stroke is open, producing the
/// dashed "sputtering pen" effect.
///
/// The gate is purely clock-driven: the host calls [`advance`] with the
/// current instant and the open/closed phase is derived from how many whole
/// periods have elapsed since the stroke began. No timer thread exists, so
/// stopping the gate can never race a pending flip.
///
/// [`advance`]: IntermittentGate::advance
#[derive(Debug, Clone)]
pub struct IntermittentGate {
    enabled: bool,
    period: Duration,
    run: Option<GateRun>,
}

#[derive(Debug, Clone, Copy)]
struct GateRun {
    started_at: Instant,
    open: bool,
}

impl IntermittentGate {
    pub fn new(enabled: bool, period: Duration) -> Self {
        let period = if period.is_zero() {
            log::warn!("Intermittent gate period must be positive; using 1ms");
            Duration::from_millis(1)
        } else {
            period
        };
        Self {
            enabled,
            period,
            run: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the effect. Disabling cancels any running phase.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.run = None;
        }
    }

    /// Begins a run at stroke start. The gate opens immediately.
    pub fn start(&mut self, now: Instant) {
        if self.enabled {
            self.run = Some(GateRun {
                started_at: now,
                open: true,
            });
        }
    }

    /// Ends the run at stroke end, forcing the gate back open.
    pub fn stop(&mut self) {
        self.run = None;
    }

    /// Re-derives the phase from elapsed time. Safe to call at any cadence;
    /// several periods elapsing between ticks still land on the right phase.
    pub fn advance(&mut self, now: Instant) {
        let period = self.period;
        if let Some(run) = &mut self.run {
            let elapsed = now.saturating_duration_since(run.started_at);
            let periods = elapsed.as_nanos() / period.as_nanos();
            run.open = periods % 2 == 0;
        }
    }

    /// Whether painting is currently admitted. Always `true` outside a run.
    pub fn is_open(&self) -> bool {
        self.run.map_or(true, |run| run.open)
    }
}

impl Default for IntermittentGate {
    fn default() -> Self {
        Self::new(false, DEFAULT_GATE_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_to(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hundred_samples_at_rate_one_empty_the_reserve() {
        let mut ink = InkReserve::new();
        assert!(ink.set_depletion_rate(1.0));

        for _ in 0..100 {
            assert_eq!(ink.request_paint(), Gate::Allowed);
            ink.consume();
        }

        assert!(close_to(ink.level(), 0.0));
        assert_eq!(ink.request_paint(), Gate::Denied);

        // Further consumption never drives the level negative.
        ink.consume();
        assert!(close_to(ink.level(), 0.0));
    }

    #[test]
    fn penalty_is_added_to_the_base_rate() {
        let mut ink = InkReserve::new();
        ink.set_penalty_enabled(true);

        ink.consume();
        ink.consume();

        let expected = MAX_INK - 2.0 * (DEFAULT_DEPLETION_RATE + PENALTY_PER_SAMPLE);
        assert!(close_to(ink.level(), expected));
    }

    #[test]
    fn refill_reports_change_only_when_below_max() {
        let mut ink = InkReserve::new();
        assert!(!ink.refill());

        ink.consume();
        assert!(ink.refill());
        assert!(close_to(ink.level(), MAX_INK));
    }

    #[test]
    fn invalid_depletion_rates_keep_the_previous_value() {
        let mut ink = InkReserve::new();
        assert!(!ink.set_depletion_rate(f64::NAN));
        assert!(!ink.set_depletion_rate(-0.5));
        assert!(close_to(ink.depletion_rate(), DEFAULT_DEPLETION_RATE));

        assert!(ink.set_depletion_rate(0.5));
        assert!(close_to(ink.depletion_rate(), 0.5));
    }

    #[test]
    fn gate_allows_any_positive_level() {
        let mut ink = InkReserve::new();
        ink.set_depletion_rate(MAX_INK - 0.001);
        ink.consume();
        assert!(ink.level() > 0.0);
        assert_eq!(ink.request_paint(), Gate::Allowed);
    }

    #[test]
    fn intermittent_gate_flips_once_per_period() {
        let t0 = Instant::now();
        let mut gate = IntermittentGate::new(true, Duration::from_millis(50));
        gate.start(t0);
        assert!(gate.is_open());

        gate.advance(t0 + Duration::from_millis(25));
        assert!(gate.is_open());

        gate.advance(t0 + Duration::from_millis(50));
        assert!(!gate.is_open());

        gate.advance(t0 + Duration::from_millis(100));
        assert!(gate.is_open());
    }

    #[test]
    fn late_tick_resolves_elapsed_period_parity() {
        let t0 = Instant::now();
        let mut gate = IntermittentGate::new(true, Duration::from_millis(50));
        gate.start(t0);

        // Three whole periods elapsed in one tick: odd parity, gate closed.
        gate.advance(t0 + Duration::from_millis(170));
        assert!(!gate.is_open());
    }

    #[test]
    fn stop_forces_the_gate_open() {
        let t0 = Instant::now();
        let mut gate = IntermittentGate::new(true, Duration::from_millis(50));
        gate.start(t0);
        gate.advance(t0 + Duration::from_millis(50));
        assert!(!gate.is_open());

        gate.stop();
        assert!(gate.is_open());

        // A stale tick after stop has nothing to flip.
        gate.advance(t0 + Duration::from_millis(100));
        assert!(gate.is_open());
    }

    #[test]
    fn disabled_gate_never_closes() {
        let t0 = Instant::now();
        let mut gate = IntermittentGate::new(false, Duration::from_millis(50));
        gate.start(t0);
        gate.advance(t0 + Duration::from_millis(75));
        assert!(gate.is_open());
    }

    #[test]
    fn disabling_cancels_a_running_phase() {
        let t0 = Instant::now();
        let mut gate = IntermittentGate::new(true, Duration::from_millis(50));
        gate.start(t0);
        gate.advance(t0 + Duration::from_millis(50));
        assert!(!gate.is_open());

        gate.set_enabled(false);
        assert!(gate.is_open());
    }
}
