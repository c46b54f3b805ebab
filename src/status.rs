// Configuration status display: which keys are set and what will degrade.

use colored::Colorize;

use crate::config::Config;

/// Display configuration status to the terminal.
pub fn show(config: &Config) {
    let missing = config.validate();

    println!("{}", "=== MindfulAI Monitor ===".bold());
    println!(
        "Generation API: {}",
        if config.has_generation_key() {
            format!("configured ({})", config.cohere_api_url).green()
        } else {
            "not configured (analysis disabled, fallbacks in use)".yellow()
        }
    );
    println!("  Model: {}", config.model);
    println!("  Request timeout: {}s", config.http_timeout.as_secs());
    println!(
        "Mapping API: {}",
        if config.maps_api_key.is_empty() {
            "not configured".yellow()
        } else {
            "configured".green()
        }
    );
    println!(
        "Synthetic alert period: {}s",
        config.alert_interval.as_secs()
    );

    if !missing.is_empty() {
        println!("\nMissing: {}", missing.join(", "));
        println!("  Add them to your .env file to enable the remote features.");
    }
}
