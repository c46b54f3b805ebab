// Frequency-based pattern summary.
//
// Counts alert types and severities in the window and reports the most
// common of each. Ties are broken by ascending name so the same window
// always produces the same summary. The risk level is derived from the
// mean chart weight of the window's severities.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{IncidentType, MonitoringAlert, PatternSummary, RiskLevel, Severity};

/// Fewer alerts than this produce no summary.
pub const MIN_ALERTS: usize = 3;

/// Most recommendations carried into a summary.
const MAX_RECOMMENDATIONS: usize = 3;

pub const URGENT_ACTIONS: [&str; 3] = [
    "Review and update security settings",
    "Document all recent incidents",
    "Consider implementing additional protective measures",
];

#[derive(Debug, Clone, Default)]
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Summarize a window of alerts (newest first). None below MIN_ALERTS.
    pub fn summarize(&self, alerts: &[MonitoringAlert]) -> Option<PatternSummary> {
        if alerts.len() < MIN_ALERTS {
            return None;
        }

        let dominant_type = dominant(alerts.iter().map(|a| a.incident_type), IncidentType::as_str);
        let dominant_severity = dominant(alerts.iter().map(|a| a.severity), Severity::as_str);

        let patterns = vec![
            "Increased frequency of alerts in the last period".to_string(),
            format!(
                "Most common alert type: {}",
                dominant_type.map_or("none", |t| t.as_str())
            ),
            format!(
                "Predominant severity level: {}",
                dominant_severity.map_or("none", |s| s.as_str())
            ),
        ];

        Some(PatternSummary {
            patterns,
            risk_level: risk_level(alerts),
            recommendations: frequent_actions(alerts),
            urgent_actions: URGENT_ACTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Most frequent value; ties go to the alphabetically first name.
pub fn dominant<T, I>(values: I, name: fn(&T) -> &'static str) -> Option<T>
where
    T: Copy + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| name(b).cmp(name(a))))
        .map(|(value, _)| value)
}

/// Mean severity weight: >= 0.75 high, >= 0.5 medium, else low.
pub fn risk_level(alerts: &[MonitoringAlert]) -> RiskLevel {
    if alerts.is_empty() {
        return RiskLevel::Low;
    }
    let mean = alerts
        .iter()
        .map(|a| a.severity.threat_level())
        .sum::<f64>()
        / alerts.len() as f64;

    match mean {
        m if m >= 0.75 => RiskLevel::High,
        m if m >= 0.5 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

/// Suggested actions that recur across the window, most frequent first.
/// Ties keep first-seen order (newest alert first).
fn frequent_actions(alerts: &[MonitoringAlert]) -> Vec<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for action in alerts.iter().flat_map(|a| a.suggested_actions.iter()) {
        match tally.iter_mut().find(|(a, _)| *a == action.as_str()) {
            Some((_, n)) => *n += 1,
            None => tally.push((action.as_str(), 1)),
        }
    }
    // Stable sort keeps first-seen order among equal counts
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(a, _)| a.to_string())
        .collect()
}

/// Chart series for the dashboard, oldest first.
pub fn severity_series(alerts: &[MonitoringAlert]) -> Vec<f64> {
    alerts
        .iter()
        .rev()
        .map(|a| a.severity.threat_level())
        .collect()
}
