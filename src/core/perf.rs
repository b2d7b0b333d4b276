use std::fmt;
use std::time::Instant;

/// How often averaged phase timings are reported
pub const DIAGNOSTIC_INTERVAL_MS: f64 = 500.0;

/// Timed stage of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Update,
    FixedUpdate,
    PreRender,
    Render,
    PostRender,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Update,
        Phase::FixedUpdate,
        Phase::PreRender,
        Phase::Render,
        Phase::PostRender,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Update => "Update",
            Phase::FixedUpdate => "Fixed Update",
            Phase::PreRender => "Prerender",
            Phase::Render => "Render",
            Phase::PostRender => "Postrender",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Averaged phase timings for one diagnostic interval
///
/// A phase that never ran during the interval has no average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfReport {
    averages: [Option<f64>; 5],
}

impl PerfReport {
    pub fn average_ms(&self, phase: Phase) -> Option<f64> {
        self.averages[phase.slot()]
    }
}

impl fmt::Display for PerfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            match self.averages[i] {
                Some(avg) => write!(f, "{}: {:.1}ms", phase.label(), avg)?,
                None => write!(f, "{}: -", phase.label())?,
            }
        }
        Ok(())
    }
}

/// Running per-phase timing totals, flushed into a report every interval
///
/// Each phase keeps its own sample count: fixed update may run zero or many
/// times per iteration while the other phases run exactly once.
#[derive(Debug, Clone)]
pub struct PerfStats {
    totals_ms: [f64; 5],
    counts: [u32; 5],
    interval_ms: f64,
    last_flush_ms: f64,
}

impl PerfStats {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            totals_ms: [0.0; 5],
            counts: [0; 5],
            interval_ms,
            last_flush_ms: 0.0,
        }
    }

    /// Add one sample for a phase
    pub fn record(&mut self, phase: Phase, duration_ms: f64) {
        self.totals_ms[phase.slot()] += duration_ms;
        self.counts[phase.slot()] += 1;
    }

    /// Run `f`, recording its wall-clock duration against `phase`
    pub fn measure<T>(&mut self, phase: Phase, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(phase, start.elapsed().as_secs_f64() * 1000.0);
        out
    }

    pub fn count(&self, phase: Phase) -> u32 {
        self.counts[phase.slot()]
    }

    pub fn total_ms(&self, phase: Phase) -> f64 {
        self.totals_ms[phase.slot()]
    }

    /// Report and reset once `interval_ms` has passed since the last flush
    pub fn flush_if_due(&mut self, now_ms: f64) -> Option<PerfReport> {
        if now_ms - self.last_flush_ms < self.interval_ms {
            return None;
        }
        self.last_flush_ms = now_ms;
        Some(self.flush())
    }

    /// Report and reset unconditionally
    pub fn flush(&mut self) -> PerfReport {
        let mut averages = [None; 5];
        for (slot, avg) in averages.iter_mut().enumerate() {
            if self.counts[slot] > 0 {
                *avg = Some(self.totals_ms[slot] / self.counts[slot] as f64);
            }
        }

        self.totals_ms = [0.0; 5];
        self.counts = [0; 5];

        PerfReport { averages }
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        Self::new(DIAGNOSTIC_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_update_samples() {
        let mut perf = PerfStats::default();
        perf.record(Phase::Update, 2.0);
        perf.record(Phase::Update, 4.0);
        perf.record(Phase::Update, 6.0);

        let report = perf.flush_if_due(500.0).unwrap();
        assert_eq!(report.average_ms(Phase::Update), Some(4.0));
        assert_eq!(perf.count(Phase::Update), 0);
        assert_eq!(perf.total_ms(Phase::Update), 0.0);
    }

    #[test]
    fn not_due_before_interval() {
        let mut perf = PerfStats::default();
        perf.record(Phase::Render, 1.0);

        assert!(perf.flush_if_due(499.9).is_none());
        assert_eq!(perf.count(Phase::Render), 1);
        assert!(perf.flush_if_due(500.0).is_some());
        assert!(perf.flush_if_due(999.0).is_none());
        assert!(perf.flush_if_due(1000.0).is_some());
    }

    #[test]
    fn idle_phase_has_no_average() {
        let mut perf = PerfStats::default();
        perf.record(Phase::Update, 1.0);

        let report = perf.flush();
        assert_eq!(report.average_ms(Phase::FixedUpdate), None);
    }

    #[test]
    fn fixed_update_counted_separately() {
        let mut perf = PerfStats::default();
        perf.record(Phase::Update, 1.0);
        for _ in 0..3 {
            perf.record(Phase::FixedUpdate, 2.0);
        }

        assert_eq!(perf.count(Phase::Update), 1);
        assert_eq!(perf.count(Phase::FixedUpdate), 3);
        assert_eq!(perf.flush().average_ms(Phase::FixedUpdate), Some(2.0));
    }

    #[test]
    fn report_formats_one_decimal() {
        let mut perf = PerfStats::default();
        for phase in Phase::ALL {
            perf.record(phase, 1.5);
        }

        assert_eq!(
            perf.flush().to_string(),
            "Update: 1.5ms | Fixed Update: 1.5ms | Prerender: 1.5ms | Render: 1.5ms | Postrender: 1.5ms"
        );
    }

    #[test]
    fn measure_records_one_sample() {
        let mut perf = PerfStats::default();
        let value = perf.measure(Phase::PreRender, || 7);

        assert_eq!(value, 7);
        assert_eq!(perf.count(Phase::PreRender), 1);
    }
}
