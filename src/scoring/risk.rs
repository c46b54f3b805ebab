// Risk classification: maps a content analysis to severity and incident type.
//
// risk = 0.3 * toxicity + 0.4 * threat_level + 0.3 * harassment_probability
//
// The weights sum to 1, so inputs in [0, 1] give a risk score in [0, 1].
// Type selection is a fixed precedence chain: a high threat level always
// wins, then hate keywords, then bullying context, then plain harassment.

use crate::models::{ContentAnalysis, IncidentType, Severity};

/// Weights of the linear risk formula.
pub struct RiskWeights {
    pub toxicity: f64,
    pub threat_level: f64,
    pub harassment_probability: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            toxicity: 0.3,
            threat_level: 0.4,
            harassment_probability: 0.3,
        }
    }
}

/// Threat level above which an alert is always typed as a threat.
pub const THREAT_TYPE_THRESHOLD: f64 = 0.7;

/// Outcome of classifying one analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub risk_score: f64,
    pub severity: Severity,
    pub incident_type: IncidentType,
}

/// Weighted risk score of an analysis.
pub fn compute_risk_score(analysis: &ContentAnalysis, weights: &RiskWeights) -> f64 {
    analysis.toxicity * weights.toxicity
        + analysis.threat_level * weights.threat_level
        + analysis.harassment_probability * weights.harassment_probability
}

/// Pick the incident type. First match wins.
pub fn incident_type(analysis: &ContentAnalysis) -> IncidentType {
    if analysis.threat_level > THREAT_TYPE_THRESHOLD {
        IncidentType::Threat
    } else if analysis
        .keywords
        .iter()
        .any(|k| k.contains("hate") || k.contains("discriminat"))
    {
        IncidentType::HateSpeech
    } else if analysis.context.to_lowercase().contains("bully") {
        IncidentType::Cyberbullying
    } else {
        IncidentType::Harassment
    }
}

/// Classify an analysis with the default weights.
pub fn classify(analysis: &ContentAnalysis) -> Classification {
    let risk_score = compute_risk_score(analysis, &RiskWeights::default());
    Classification {
        risk_score,
        severity: Severity::from_risk_score(risk_score),
        incident_type: incident_type(analysis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(tox: f64, threat: f64, harass: f64) -> ContentAnalysis {
        ContentAnalysis {
            toxicity: tox,
            threat_level: threat,
            harassment_probability: harass,
            sentiment: 0.5,
            keywords: Vec::new(),
            context: "general".to_string(),
        }
    }

    #[test]
    fn all_max_is_one() {
        let c = classify(&analysis(1.0, 1.0, 1.0));
        assert!((c.risk_score - 1.0).abs() < 1e-9);
        assert_eq!(c.severity, Severity::Critical);
    }

    #[test]
    fn all_zero_is_low_harassment() {
        let c = classify(&analysis(0.0, 0.0, 0.0));
        assert_eq!(c.risk_score, 0.0);
        assert_eq!(c.severity, Severity::Low);
        assert_eq!(c.incident_type, IncidentType::Harassment);
    }

    #[test]
    fn threat_level_exactly_at_threshold_is_not_threat() {
        let c = classify(&analysis(0.0, 0.7, 0.0));
        assert_eq!(c.incident_type, IncidentType::Harassment);
    }

    #[test]
    fn custom_weights() {
        let weights = RiskWeights {
            toxicity: 1.0,
            threat_level: 0.0,
            harassment_probability: 0.0,
        };
        let score = compute_risk_score(&analysis(0.42, 1.0, 1.0), &weights);
        assert!((score - 0.42).abs() < 1e-9);
    }
}
