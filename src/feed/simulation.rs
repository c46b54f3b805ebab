// Synthetic alert stream for the monitoring dashboard.
//
// A timer fabricates one random alert per period so the dashboard has
// something to animate. None of this is derived from real content; every
// alert produced here is recorded with AlertOrigin::Synthetic.
//
// The randomness source is injected so tests can seed it, and the timer
// task lives exactly as long as its SimulationHandle.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::SharedFeed;
use crate::models::{AlertOrigin, IncidentType, MonitoringAlert, Severity};

/// Default period between synthetic alerts.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

pub const SYNTHETIC_DETAILS: &str = "Real-time monitoring alert";

/// Fabricates alerts by uniform sampling.
pub struct SyntheticAlertSource<R> {
    rng: R,
}

impl SyntheticAlertSource<StdRng> {
    /// Deterministic source for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SyntheticAlertSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Severity and type uniform over their variants, confidence uniform
    /// in [0.5, 1.0).
    pub fn next_alert(&mut self, now: DateTime<Utc>) -> MonitoringAlert {
        let severity = Severity::ALL[self.rng.random_range(0..Severity::ALL.len())];
        let incident_type = IncidentType::ALL[self.rng.random_range(0..IncidentType::ALL.len())];
        let confidence = self.rng.random_range(0.5..1.0);

        MonitoringAlert {
            severity,
            incident_type,
            confidence,
            timestamp: now,
            details: SYNTHETIC_DETAILS.to_string(),
            suggested_actions: vec![
                "Document incident".to_string(),
                "Update security settings".to_string(),
            ],
        }
    }
}

/// Owns the running simulation task. Dropping the handle stops the timer,
/// even if a period is only partly elapsed.
pub struct SimulationHandle {
    task: JoinHandle<()>,
}

impl SimulationHandle {
    /// Stop the simulation now. The task finishes at its next scheduling
    /// point; `is_running` turns false once it has.
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!("Synthetic alert simulation stopped");
    }
}

/// Start recording one synthetic alert per `period`. The first alert
/// arrives one full period after start.
pub fn start_simulation<R>(
    feed: SharedFeed,
    period: Duration,
    mut source: SyntheticAlertSource<R>,
) -> SimulationHandle
where
    R: Rng + Send + 'static,
{
    info!(period_ms = period.as_millis() as u64, "Starting synthetic alert simulation");

    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let alert = source.next_alert(Utc::now());
            feed.write().await.record(alert, AlertOrigin::Synthetic);
        }
    });

    SimulationHandle { task }
}
