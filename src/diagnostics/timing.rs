use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall time spent in one named pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one detection run, in execution order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

/// Lap timer: each [`lap`](Self::lap) records the time since the previous one.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
    last: Instant,
    stages: Vec<StageTiming>,
}

impl StageClock {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            stages: Vec::new(),
        }
    }

    pub fn lap(&mut self, label: &str) {
        let now = Instant::now();
        self.stages.push(StageTiming {
            label: label.to_string(),
            elapsed_ms: millis(now - self.last),
        });
        self.last = now;
    }

    /// Splice already measured stages after the ones recorded so far.
    pub fn extend(&mut self, stages: Vec<StageTiming>) {
        self.stages.extend(stages);
        self.last = Instant::now();
    }

    pub fn finish(self) -> TimingBreakdown {
        TimingBreakdown {
            total_ms: millis(self.started.elapsed()),
            stages: self.stages,
        }
    }
}

fn millis(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
