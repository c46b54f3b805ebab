// Data models: the types that flow through the monitoring pipeline.
//
// Everything here is in-memory only. Alerts are immutable once created and
// are dropped when the process exits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary urgency classification of an alert. Ordered low to critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Map a risk score to a severity band. Thresholds are exclusive lower
    /// bounds, so a score sitting exactly on a boundary falls to the lower
    /// band. NaN fails every comparison and lands in Low.
    pub fn from_risk_score(score: f64) -> Self {
        match score {
            s if s > 0.8 => Severity::Critical,
            s if s > 0.6 => Severity::High,
            s if s > 0.4 => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Plot value used by the dashboard's threat-level chart.
    pub fn threat_level(&self) -> f64 {
        match self {
            Severity::Critical => 1.0,
            Severity::High => 0.75,
            Severity::Medium => 0.5,
            Severity::Low => 0.25,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorical label attached to an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    Harassment,
    Cyberbullying,
    Threat,
    HateSpeech,
}

impl IncidentType {
    pub const ALL: [IncidentType; 4] = [
        IncidentType::Harassment,
        IncidentType::Cyberbullying,
        IncidentType::Threat,
        IncidentType::HateSpeech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Harassment => "harassment",
            IncidentType::Cyberbullying => "cyberbullying",
            IncidentType::Threat => "threat",
            IncidentType::HateSpeech => "hate_speech",
        }
    }
}

impl std::fmt::Display for IncidentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where an alert came from. Synthetic alerts only animate the dashboard;
/// they are never derived from real content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertOrigin {
    Synthetic,
    Content,
}

impl AlertOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertOrigin::Synthetic => "synthetic",
            AlertOrigin::Content => "content",
        }
    }
}

impl std::fmt::Display for AlertOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of analyzing one piece of content. All scores are in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub toxicity: f64,
    pub threat_level: f64,
    pub harassment_probability: f64,
    pub sentiment: f64,
    pub keywords: Vec<String>,
    pub context: String,
}

/// An alert shown on the monitoring dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringAlert {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub details: String,
    pub suggested_actions: Vec<String>,
}

/// Running per-severity alert counters. Counters only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStats {
    pub total: u64,
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl AlertStats {
    pub fn record(&mut self, severity: Severity) {
        self.total += 1;
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    pub fn count(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Overall risk reported by a pattern summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Patterns derived from the recent alert window. Replaced wholesale on
/// every recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub patterns: Vec<String>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub urgent_actions: Vec<String>,
}

impl PatternSummary {
    /// Summary for an empty alert history.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            risk_level: RiskLevel::Low,
            recommendations: Vec::new(),
            urgent_actions: Vec::new(),
        }
    }
}
