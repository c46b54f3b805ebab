// Monitoring feed: the bounded, newest-first list of recent alerts.
//
// Two producers append here: the real submission path and the synthetic
// simulation timer. Every append bumps the stats, recomputes the pattern
// summary once enough alerts are held, and is broadcast to subscribers
// together with its origin.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use crate::models::{AlertOrigin, AlertStats, MonitoringAlert, PatternSummary};
use crate::patterns::local::PatternAnalyzer;

pub mod simulation;

/// Maximum number of alerts kept in the feed.
pub const FEED_CAPACITY: usize = 10;

/// Capacity of the broadcast channel; slow subscribers past this lag.
const EVENT_BUFFER: usize = 64;

/// Feed state shared between the simulation task, submissions and readers.
/// Never hold the lock across a network call.
pub type SharedFeed = Arc<RwLock<MonitoringFeed>>;

/// An alert as stored in the feed, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedAlert {
    pub origin: AlertOrigin,
    pub alert: MonitoringAlert,
}

/// Notification sent for every new alert, regardless of origin.
pub type FeedEvent = RecordedAlert;

pub struct MonitoringFeed {
    entries: VecDeque<RecordedAlert>,
    stats: AlertStats,
    patterns: Option<PatternSummary>,
    analyzer: PatternAnalyzer,
    events: broadcast::Sender<FeedEvent>,
}

impl Default for MonitoringFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitoringFeed {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            entries: VecDeque::with_capacity(FEED_CAPACITY + 1),
            stats: AlertStats::default(),
            patterns: None,
            analyzer: PatternAnalyzer::default(),
            events,
        }
    }

    /// Wrap a fresh feed for sharing across tasks.
    pub fn shared() -> SharedFeed {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Append an alert. Oldest entries are evicted beyond FEED_CAPACITY.
    pub fn record(&mut self, alert: MonitoringAlert, origin: AlertOrigin) {
        self.stats.record(alert.severity);

        let entry = RecordedAlert { origin, alert };
        self.entries.push_front(entry.clone());
        self.entries.truncate(FEED_CAPACITY);

        if let Some(summary) = self.analyzer.summarize(&self.alerts()) {
            self.patterns = Some(summary);
        }

        debug!(
            %origin,
            severity = %entry.alert.severity,
            incident_type = %entry.alert.incident_type,
            held = self.entries.len(),
            "Recorded alert"
        );

        // No subscribers is fine; the alert is still recorded.
        let _ = self.events.send(entry);
    }

    /// Receive every alert recorded after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.events.subscribe()
    }

    /// Held alerts, newest first.
    pub fn alerts(&self) -> Vec<MonitoringAlert> {
        self.entries.iter().map(|e| e.alert.clone()).collect()
    }

    /// Held alerts with their origins, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &RecordedAlert> {
        self.entries.iter()
    }

    /// The newest alert, if any.
    pub fn current(&self) -> Option<&RecordedAlert> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> AlertStats {
        self.stats
    }

    /// Latest pattern summary. None until three alerts have been held.
    pub fn patterns(&self) -> Option<&PatternSummary> {
        self.patterns.as_ref()
    }
}
