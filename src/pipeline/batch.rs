// Batch submission: analyze many texts concurrently.
//
// Submissions are independent requests with no queueing or coalescing;
// alerts land in the feed in completion order, not input order.

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::monitor::MonitoringPipeline;
use crate::feed::SharedFeed;

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub submitted: usize,
    pub alerts: usize,
    pub skipped: usize,
}

/// Submit every non-blank line with at most `concurrency` requests in
/// flight.
pub async fn run(
    pipeline: &MonitoringPipeline,
    feed: &SharedFeed,
    texts: &[String],
    context: &str,
    concurrency: usize,
    show_progress: bool,
) -> BatchOutcome {
    let texts: Vec<&str> = texts
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(texts.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("  Analyzing [{bar:30}] {pos}/{len} ({eta})") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<bool> = stream::iter(texts.iter().map(|text| {
        let pb = &pb;
        async move {
            let raised = pipeline.submit(feed, text, context).await.is_some();
            pb.inc(1);
            raised
        }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect()
    .await;

    pb.finish_and_clear();

    let alerts = results.iter().filter(|r| **r).count();
    let outcome = BatchOutcome {
        submitted: texts.len(),
        alerts,
        skipped: texts.len() - alerts,
    };
    info!(
        submitted = outcome.submitted,
        alerts = outcome.alerts,
        skipped = outcome.skipped,
        "Batch analysis complete"
    );
    outcome
}
