// Colored terminal output for alerts, feed stats and pattern summaries.

use colored::Colorize;

use crate::feed::RecordedAlert;
use crate::models::{AlertOrigin, AlertStats, MonitoringAlert, PatternSummary, RiskLevel, Severity};
use crate::support::progress::Insight;
use crate::support::therapists::TherapistProfile;

/// Display one alert in detail.
pub fn display_alert(alert: &MonitoringAlert) {
    println!(
        "\n{}",
        format!("=== {} alert ===", alert.incident_type).bold()
    );
    println!("  Severity:   {}", colorize_severity(alert.severity));
    println!("  Confidence: {}", super::percent(alert.confidence));
    println!("  Time:       {}", alert.timestamp.to_rfc3339());
    if !alert.details.is_empty() {
        println!("  Details:    {}", super::truncate_chars(&alert.details, 160));
    }

    if !alert.suggested_actions.is_empty() {
        println!("\n  Suggested actions:");
        for (i, action) in alert.suggested_actions.iter().enumerate() {
            println!("    {}. {}", i + 1, action);
        }
    }
}

/// One-line summary used when streaming the feed.
pub fn display_feed_line(entry: &RecordedAlert) {
    let origin = match entry.origin {
        AlertOrigin::Synthetic => "sim".dimmed(),
        AlertOrigin::Content => "live".cyan(),
    };
    println!(
        "  [{}] {} {:<10} {:<14} {:>4}",
        origin,
        entry.alert.timestamp.format("%H:%M:%S").to_string().dimmed(),
        colorize_severity(entry.alert.severity),
        entry.alert.incident_type.as_str(),
        super::percent(entry.alert.confidence),
    );
}

/// Display running severity counters.
pub fn display_stats(stats: &AlertStats) {
    println!("\n{}", format!("=== Alert Stats ({} total) ===", stats.total).bold());
    for severity in Severity::ALL.iter().rev() {
        println!(
            "  {:<10} {}",
            colorize_severity(*severity),
            stats.count(*severity)
        );
    }
}

/// Display a pattern summary.
pub fn display_patterns(summary: &PatternSummary) {
    println!("\n{}", "=== Patterns ===".bold());
    println!("  Risk level: {}", colorize_risk(summary.risk_level));
    for pattern in &summary.patterns {
        println!("  - {pattern}");
    }
    if !summary.recommendations.is_empty() {
        println!("\n  Recommendations:");
        for rec in &summary.recommendations {
            println!("    - {rec}");
        }
    }
    if !summary.urgent_actions.is_empty() {
        println!("\n  {}", "Urgent actions:".red());
        for action in &summary.urgent_actions {
            println!("    {} {action}", "!".bright_red());
        }
    }
}

/// Display therapist suggestions.
pub fn display_therapists(therapists: &[TherapistProfile]) {
    if therapists.is_empty() {
        println!("No therapists found.");
        return;
    }
    println!(
        "\n{}",
        format!("=== Suggested Support ({}) ===", therapists.len()).bold()
    );
    for (i, t) in therapists.iter().enumerate() {
        println!(
            "\n  {}. {}  {}",
            i + 1,
            t.name.bold(),
            format!("({:.1}★, match {:.0})", t.rating, t.ai_match_score).dimmed()
        );
        println!("     {}", t.specialty);
        println!("     {}", t.availability.dimmed());
        println!("     {}", t.website.underline());
    }
}

/// Display progress insights, one per line, tagged by kind.
pub fn display_insights(insights: &[Insight]) {
    println!("\n{}", "=== Progress Insights ===".bold());
    if insights.is_empty() {
        println!("  No insights available.");
        return;
    }
    for insight in insights {
        let tag = match insight.kind.as_str() {
            "improvement" => insight.kind.green(),
            "warning" => insight.kind.yellow(),
            _ => insight.kind.cyan(),
        };
        println!("  [{tag}] {}", insight.message);
    }
}

/// Display the emergency verdict for a message.
pub fn display_emergency(message: &str, emergency: bool) {
    println!("  Message: {}", super::truncate_chars(message, 80).dimmed());
    if emergency {
        println!("  {}", "EMERGENCY: immediate support recommended".red().bold());
    } else {
        println!("  {}", "No emergency detected".green());
    }
}

/// Colorize a severity tier.
fn colorize_severity(severity: Severity) -> colored::ColoredString {
    let s = severity.as_str();
    match severity {
        Severity::Critical => s.red().bold(),
        Severity::High => s.bright_red(),
        Severity::Medium => s.yellow(),
        Severity::Low => s.green(),
    }
}

fn colorize_risk(risk: RiskLevel) -> colored::ColoredString {
    let s = risk.as_str();
    match risk {
        RiskLevel::High => s.red().bold(),
        RiskLevel::Medium => s.yellow(),
        RiskLevel::Low => s.green(),
    }
}
