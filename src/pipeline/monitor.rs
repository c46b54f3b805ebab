// Real-submission path: content in, alert out.
//
// 1. Analyze the content via the generation endpoint
// 2. Classify the analysis into severity and incident type
// 3. Ask for recommended actions (fallback list on failure)
// 4. Record the alert in the feed with origin `content`
//
// A failed or empty analysis produces no alert at all.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::analysis::actions::ActionRecommender;
use crate::analysis::content::ContentAnalyzer;
use crate::feed::SharedFeed;
use crate::generation::traits::TextGenerator;
use crate::models::{AlertOrigin, MonitoringAlert};
use crate::scoring::risk::classify;

/// Context label used when the caller doesn't supply one.
pub const DEFAULT_CONTEXT: &str = "general";

pub struct MonitoringPipeline {
    analyzer: ContentAnalyzer,
    recommender: ActionRecommender,
}

impl MonitoringPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>, model: &str) -> Self {
        Self {
            analyzer: ContentAnalyzer::new(generator.clone(), model),
            recommender: ActionRecommender::new(generator, model),
        }
    }

    /// Run the pipeline without touching any feed.
    pub async fn monitor_content(&self, content: &str, context: &str) -> Option<MonitoringAlert> {
        let analysis = self.analyzer.analyze(content, context).await?;
        let classification = classify(&analysis);

        let suggested_actions = self
            .recommender
            .recommend(
                classification.severity,
                classification.incident_type,
                &analysis,
            )
            .await;

        Some(MonitoringAlert {
            severity: classification.severity,
            incident_type: classification.incident_type,
            confidence: classification.risk_score,
            timestamp: Utc::now(),
            details: analysis.context,
            suggested_actions,
        })
    }

    /// Run the pipeline and record the resulting alert. The feed lock is
    /// only taken once the alert exists.
    pub async fn submit(
        &self,
        feed: &SharedFeed,
        content: &str,
        context: &str,
    ) -> Option<MonitoringAlert> {
        let alert = self.monitor_content(content, context).await?;

        info!(
            severity = %alert.severity,
            incident_type = %alert.incident_type,
            confidence = alert.confidence,
            "Content alert raised"
        );

        feed.write()
            .await
            .record(alert.clone(), AlertOrigin::Content);
        Some(alert)
    }
}
