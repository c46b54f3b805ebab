// End-to-end tests of the submission pipeline against scripted generators.
//
// Every test swaps the remote endpoint for a ScriptedGenerator, so these
// check how analysis, classification, recommendations and the feed fit
// together, including every fallback path.

mod common;

use std::sync::Arc;

use common::{
    ScriptedGenerator, ACTIONS_PROMPT, ANALYSIS_PROMPT, EMERGENCY_PROMPT, INSIGHTS_PROMPT,
    PATTERNS_PROMPT, THERAPISTS_PROMPT,
};
use mindful::analysis::actions::fallback_actions;
use mindful::analysis::emergency::EmergencyDetector;
use mindful::feed::MonitoringFeed;
use mindful::models::{AlertOrigin, IncidentType, RiskLevel, Severity};
use mindful::patterns::remote::{RemotePatternAnalyzer, Timeframe};
use mindful::pipeline::batch;
use mindful::pipeline::monitor::MonitoringPipeline;
use mindful::support::directory::TALKSPACE_URL;
use mindful::support::progress::{fallback_insights, ProgressAdvisor, ProgressData};
use mindful::support::therapists::SupportMatcher;

const MODEL: &str = "command";

const THREAT_ANALYSIS: &str = r#"Here is the analysis:
{"toxicity": 0.9, "threat_level": 0.9, "harassment_probability": 0.9,
 "keywords": ["hurt"], "context": "Explicit threat of violence"}"#;

const BULLYING_ANALYSIS: &str = r#"{"toxicity": 0.5, "threat_level": 0.3,
 "harassment_probability": 0.5, "keywords": ["loser"],
 "context": "Repeated bullying in a group chat"}"#;

const ACTIONS: &str = r#"["Block the sender", "Save screenshots", "Report to the platform"]"#;

fn pipeline(generator: &Arc<ScriptedGenerator>) -> MonitoringPipeline {
    MonitoringPipeline::new(generator.clone(), MODEL)
}

// ============================================================
// Single submissions
// ============================================================

#[tokio::test]
async fn threat_content_raises_critical_alert() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, THREAT_ANALYSIS)
            .on(ACTIONS_PROMPT, ACTIONS),
    );
    let feed = MonitoringFeed::shared();

    let alert = pipeline(&generator)
        .submit(&feed, "I will hurt you", "direct_message")
        .await
        .expect("alert raised");

    assert_eq!(alert.severity, Severity::Critical);
    assert_eq!(alert.incident_type, IncidentType::Threat);
    assert!((alert.confidence - 0.9).abs() < 1e-9);
    assert_eq!(alert.details, "Explicit threat of violence");
    assert_eq!(alert.suggested_actions.len(), 3);
    assert_eq!(generator.calls(), 2);

    let feed = feed.read().await;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.current().unwrap().origin, AlertOrigin::Content);
    assert_eq!(feed.stats().critical, 1);
}

#[tokio::test]
async fn bullying_context_is_medium_cyberbullying() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, BULLYING_ANALYSIS)
            .on(ACTIONS_PROMPT, ACTIONS),
    );

    let alert = pipeline(&generator)
        .monitor_content("nobody likes you", "group_chat")
        .await
        .unwrap();

    assert_eq!(alert.severity, Severity::Medium);
    assert_eq!(alert.incident_type, IncidentType::Cyberbullying);
    assert!((alert.confidence - 0.42).abs() < 1e-9);
}

#[tokio::test]
async fn failed_analysis_produces_no_alert() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(ANALYSIS_PROMPT, 500));
    let feed = MonitoringFeed::shared();

    let alert = pipeline(&generator).submit(&feed, "hello", "general").await;

    assert!(alert.is_none());
    // No recommendation request after a failed analysis
    assert_eq!(generator.calls(), 1);
    let feed = feed.read().await;
    assert!(feed.is_empty());
    assert_eq!(feed.stats().total, 0);
}

#[tokio::test]
async fn unparseable_analysis_produces_no_alert() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, "I'm sorry, I can't help with that.")
            .on(ACTIONS_PROMPT, ACTIONS),
    );

    let alert = pipeline(&generator).monitor_content("hello", "general").await;
    assert!(alert.is_none());
}

#[tokio::test]
async fn analysis_after_leading_array_still_raises_alert() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(
                ANALYSIS_PROMPT,
                r#"Score [1]: {"toxicity": 0.5, "threat_level": 0.3,
                   "harassment_probability": 0.5, "context": "Repeated bullying"}"#,
            )
            .on(ACTIONS_PROMPT, ACTIONS),
    );

    let alert = pipeline(&generator)
        .monitor_content("nobody likes you", "general")
        .await
        .expect("object after the array is used");
    assert_eq!(alert.incident_type, IncidentType::Cyberbullying);
}

#[tokio::test]
async fn empty_content_makes_no_calls() {
    let generator = Arc::new(ScriptedGenerator::new().on(ANALYSIS_PROMPT, THREAT_ANALYSIS));
    let feed = MonitoringFeed::shared();
    let pipeline = pipeline(&generator);

    assert!(pipeline.submit(&feed, "", "general").await.is_none());
    assert!(pipeline.submit(&feed, "   \n\t", "general").await.is_none());

    assert_eq!(generator.calls(), 0);
    assert!(feed.read().await.is_empty());
}

#[tokio::test]
async fn failed_recommendations_use_fallback_list() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, THREAT_ANALYSIS)
            .fail_on(ACTIONS_PROMPT, 429),
    );

    let alert = pipeline(&generator)
        .monitor_content("I will hurt you", "general")
        .await
        .unwrap();

    assert_eq!(alert.suggested_actions, fallback_actions());
}

#[tokio::test]
async fn empty_recommendation_array_uses_fallback_list() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, THREAT_ANALYSIS)
            .on(ACTIONS_PROMPT, "[]"),
    );

    let alert = pipeline(&generator)
        .monitor_content("I will hurt you", "general")
        .await
        .unwrap();

    assert_eq!(alert.suggested_actions, fallback_actions());
}

#[tokio::test]
async fn long_recommendation_lists_are_capped() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, THREAT_ANALYSIS)
            .on(ACTIONS_PROMPT, r#"["a", "b", "c", "d", "e", "f", "g"]"#),
    );

    let alert = pipeline(&generator)
        .monitor_content("I will hurt you", "general")
        .await
        .unwrap();

    assert_eq!(alert.suggested_actions, vec!["a", "b", "c", "d", "e"]);
}

// ============================================================
// Batch runs
// ============================================================

#[tokio::test]
async fn batch_skips_blank_lines_and_records_alerts() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, BULLYING_ANALYSIS)
            .on(ACTIONS_PROMPT, ACTIONS),
    );
    let feed = MonitoringFeed::shared();
    let texts: Vec<String> = ["one", "", "two", "   ", "three", "four"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let outcome = batch::run(&pipeline(&generator), &feed, &texts, "general", 2, false).await;

    assert_eq!(outcome.submitted, 4);
    assert_eq!(outcome.alerts, 4);
    assert_eq!(outcome.skipped, 0);
    // Two calls per submitted line, none for blanks
    assert_eq!(generator.calls(), 8);

    let feed = feed.read().await;
    assert_eq!(feed.len(), 4);
    assert_eq!(feed.stats().medium, 4);
    let summary = feed.patterns().expect("summary after three alerts");
    assert_eq!(summary.risk_level, RiskLevel::Medium);
}

#[tokio::test]
async fn batch_counts_failed_analyses_as_skipped() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(ANALYSIS_PROMPT, 503));
    let feed = MonitoringFeed::shared();
    let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];

    let outcome = batch::run(&pipeline(&generator), &feed, &texts, "general", 8, false).await;

    assert_eq!(outcome.submitted, 3);
    assert_eq!(outcome.alerts, 0);
    assert_eq!(outcome.skipped, 3);
    assert!(feed.read().await.is_empty());
}

// ============================================================
// Remote patterns
// ============================================================

#[tokio::test]
async fn remote_patterns_are_used_when_available() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, THREAT_ANALYSIS)
            .on(ACTIONS_PROMPT, ACTIONS)
            .on(
                PATTERNS_PROMPT,
                r#"{"patterns": ["Escalating threats"], "riskLevel": "HIGH",
                    "recommendations": ["Contact authorities"], "urgentActions": []}"#,
            ),
    );
    let feed = MonitoringFeed::shared();
    let pipeline = pipeline(&generator);
    pipeline.submit(&feed, "I will hurt you", "general").await;

    let alerts = feed.read().await.alerts();
    let summary = RemotePatternAnalyzer::new(generator.clone(), MODEL)
        .summarize(&alerts, Timeframe::Day)
        .await;

    assert_eq!(summary.patterns, vec!["Escalating threats"]);
    assert_eq!(summary.risk_level, RiskLevel::High);
    assert!(summary.urgent_actions.is_empty());
}

#[tokio::test]
async fn remote_pattern_failure_falls_back_to_local_summary() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .on(ANALYSIS_PROMPT, THREAT_ANALYSIS)
            .on(ACTIONS_PROMPT, ACTIONS)
            .fail_on(PATTERNS_PROMPT, 500),
    );
    let feed = MonitoringFeed::shared();
    let pipeline = pipeline(&generator);
    for text in ["one", "two", "three"] {
        pipeline.submit(&feed, text, "general").await;
    }

    let alerts = feed.read().await.alerts();
    let summary = RemotePatternAnalyzer::new(generator.clone(), MODEL)
        .summarize(&alerts, Timeframe::Week)
        .await;

    assert_eq!(summary.risk_level, RiskLevel::High);
    assert!(summary
        .patterns
        .contains(&"Most common alert type: threat".to_string()));
    assert_eq!(summary.recommendations[0], "Block the sender");
}

#[tokio::test]
async fn remote_patterns_for_empty_window_make_no_call() {
    let generator = Arc::new(ScriptedGenerator::new());
    let summary = RemotePatternAnalyzer::new(generator.clone(), MODEL)
        .summarize(&[], Timeframe::Month)
        .await;

    assert!(summary.patterns.is_empty());
    assert_eq!(generator.calls(), 0);
}

// ============================================================
// Support matching
// ============================================================

#[tokio::test]
async fn generated_profiles_are_sanitized() {
    let generator = Arc::new(ScriptedGenerator::new().on(
        THERAPISTS_PROMPT,
        r#"[{"name": "Dr. A", "specialty": "Cyberbullying", "rating": 9,
             "website": "talkspace.com", "aiMatchScore": "high"}]"#,
    ));

    let profiles = SupportMatcher::new(generator, MODEL)
        .recommend("cyberbullying recovery")
        .await;

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "Dr. A");
    assert_eq!(profiles[0].rating, 5.0);
    assert_eq!(profiles[0].website, TALKSPACE_URL);
    assert_eq!(profiles[0].ai_match_score, 85.0);
}

#[tokio::test]
async fn support_failure_ranks_built_in_directory() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(THERAPISTS_PROMPT, 500));

    let profiles = SupportMatcher::new(generator, MODEL)
        .recommend("social media anxiety")
        .await;

    assert_eq!(profiles.len(), 3);
    assert_eq!(profiles[0].id, "dr-michael-chen");
}

// ============================================================
// Emergency detection
// ============================================================

#[tokio::test]
async fn explicit_true_verdict_is_an_emergency() {
    let generator = Arc::new(ScriptedGenerator::new().on(EMERGENCY_PROMPT, " True \n"));
    let detector = EmergencyDetector::new(generator.clone(), MODEL);

    assert!(detector.is_emergency("I can't get away from them").await);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn anything_but_true_is_not_an_emergency() {
    for reply in ["false", "true.", "Yes", "TRUE!"] {
        let generator = Arc::new(ScriptedGenerator::new().on(EMERGENCY_PROMPT, reply));
        let detector = EmergencyDetector::new(generator, MODEL);
        assert!(!detector.is_emergency("help").await, "{reply}");
    }
}

#[tokio::test]
async fn emergency_check_failure_reads_as_false() {
    let generator = Arc::new(ScriptedGenerator::new().fail_on(EMERGENCY_PROMPT, 500));
    let detector = EmergencyDetector::new(generator.clone(), MODEL);

    assert!(!detector.is_emergency("help").await);
    assert!(detector.fetch_verdict("help").await.is_err());
}

#[tokio::test]
async fn blank_message_skips_emergency_check() {
    let generator = Arc::new(ScriptedGenerator::new().on(EMERGENCY_PROMPT, "true"));
    let detector = EmergencyDetector::new(generator.clone(), MODEL);

    assert!(!detector.is_emergency("   ").await);
    assert_eq!(generator.calls(), 0);
}

// ============================================================
// Progress insights
// ============================================================

#[tokio::test]
async fn generated_insights_are_defaulted() {
    let generator = Arc::new(ScriptedGenerator::new().on(
        INSIGHTS_PROMPT,
        r#"Here you go: [{"type": "warning", "message": "Anxiety spiked"}, {"type": ""}]"#,
    ));

    let insights = ProgressAdvisor::new(generator, MODEL)
        .insights(&ProgressData::sample())
        .await;

    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0].kind, "warning");
    assert_eq!(insights[0].message, "Anxiety spiked");
    assert_eq!(insights[1].kind, "suggestion");
    assert_eq!(insights[1].message, "No insight available");
}

#[tokio::test]
async fn malformed_insights_use_fallback_set() {
    let generator = Arc::new(
        ScriptedGenerator::new().on(INSIGHTS_PROMPT, r#"{"type": "warning"}"#),
    );
    let advisor = ProgressAdvisor::new(generator, MODEL);

    assert!(advisor.fetch_insights(&ProgressData::sample()).await.is_err());
    assert_eq!(
        advisor.insights(&ProgressData::sample()).await,
        fallback_insights()
    );
}
