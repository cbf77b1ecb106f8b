use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in one named stage.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Stage timings of one page run, in execution order. Nested stages are
/// labelled `parent.child`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `stage`, recording how long it took under `label`.
    pub fn measure<T>(&mut self, label: &str, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = stage();
        self.record(label, elapsed_ms(start));
        out
    }

    pub fn record(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }

    /// Record a stage that ran before everything already listed.
    pub fn record_first(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.insert(
            0,
            StageTiming {
                label: label.into(),
                elapsed_ms,
            },
        );
        self.total_ms += elapsed_ms;
    }

    /// Append `inner`'s stages as children of `parent`.
    pub fn nest(&mut self, parent: &str, inner: &TimingBreakdown) {
        for stage in &inner.stages {
            self.record(format!("{parent}.{}", stage.label), stage.elapsed_ms);
        }
    }

    pub fn stage(&self, label: &str) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.label == label)
    }
}

/// Milliseconds elapsed since `start`.
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
