use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use tokio::sync::broadcast::error::RecvError;
use tracing::info;

use mindful::analysis::emergency::EmergencyDetector;
use mindful::config::Config;
use mindful::feed::simulation::{start_simulation, SyntheticAlertSource};
use mindful::feed::MonitoringFeed;
use mindful::output::terminal;
use mindful::patterns::remote::{RemotePatternAnalyzer, Timeframe};
use mindful::pipeline::monitor::{MonitoringPipeline, DEFAULT_CONTEXT};
use mindful::support::progress::{ProgressAdvisor, ProgressData};
use mindful::support::therapists::SupportMatcher;

/// MindfulAI Monitor: harassment risk scoring and alerting.
///
/// Analyzes content for harassment, cyberbullying, threats and hate speech,
/// classifies it into severity tiers, and suggests what to do next.
#[derive(Parser)]
#[command(name = "mindful", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single piece of content and print the resulting alert
    Analyze {
        /// The text to analyze
        text: String,

        /// Context label attached to the submission
        #[arg(long, default_value = DEFAULT_CONTEXT)]
        context: String,
    },

    /// Analyze every line of a file concurrently and summarize the alerts
    Batch {
        /// File with one message per line
        file: PathBuf,

        /// Context label attached to every submission
        #[arg(long, default_value = DEFAULT_CONTEXT)]
        context: String,

        /// Number of analyses in flight at once (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,

        /// Ask the generation API for the pattern summary
        #[arg(long)]
        remote_patterns: bool,

        /// Timeframe for the remote pattern summary
        #[arg(long, value_enum, default_value_t = Timeframe::Week)]
        timeframe: Timeframe,
    },

    /// Stream synthetic demonstration alerts (not derived from real content)
    Monitor {
        /// Stop after this many alerts (default: 10)
        #[arg(long, default_value = "10")]
        alerts: usize,

        /// Seconds between alerts (default: MINDFUL_ALERT_INTERVAL_SECS or 5)
        #[arg(long)]
        interval_secs: Option<u64>,

        /// Seed for a reproducible alert sequence
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check whether a message indicates an emergency
    Emergency {
        /// The message to check
        message: String,
    },

    /// Generate insights from weekly progress scores
    Insights {
        /// JSON file with dates, wellbeingScores, anxietyLevels, copingScores
        /// (default: built-in sample data)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Suggest therapists for the described needs
    Therapists {
        /// What kind of support is needed
        needs: String,
    },

    /// Show configuration status
    Status,

    /// Run the JSON API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Feed synthetic demonstration alerts while the server runs
        #[arg(long)]
        simulate: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mindful=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { text, context } => {
            config.validate();
            let pipeline = MonitoringPipeline::new(config.generator(), &config.model);

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Analyzing content...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let alert = pipeline.monitor_content(&text, &context).await;
            spinner.finish_and_clear();

            match alert {
                Some(alert) => terminal::display_alert(&alert),
                None => {
                    println!("No alert produced.");
                    if !config.has_generation_key() {
                        println!(
                            "  {}",
                            "Set COHERE_API_KEY in your .env file to enable content analysis."
                                .dimmed()
                        );
                    }
                }
            }
        }

        Commands::Batch {
            file,
            context,
            concurrency,
            remote_patterns,
            timeframe,
        } => {
            config.validate();
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let texts: Vec<String> = contents.lines().map(str::to_string).collect();

            let generator = config.generator();
            let pipeline = MonitoringPipeline::new(generator.clone(), &config.model);
            let feed = MonitoringFeed::shared();

            println!("Analyzing {} lines from {}...", texts.len(), file.display());
            let outcome =
                mindful::pipeline::batch::run(&pipeline, &feed, &texts, &context, concurrency, true)
                    .await;

            println!("\n{}", "Batch complete.".bold());
            println!("  Submitted: {}", outcome.submitted);
            println!("  Alerts:    {}", outcome.alerts);
            println!("  Skipped:   {}", outcome.skipped);

            let snapshot = feed.read().await;
            if !snapshot.is_empty() {
                println!("\n{}", "Most recent alerts:".bold());
                for entry in snapshot.recent() {
                    terminal::display_feed_line(entry);
                }
            }
            terminal::display_stats(&snapshot.stats());
            let recent_alerts = snapshot.alerts();
            let local_patterns = snapshot.patterns().cloned();
            drop(snapshot);

            if remote_patterns {
                let analyzer = RemotePatternAnalyzer::new(generator, &config.model);
                let summary = analyzer.summarize(&recent_alerts, timeframe).await;
                terminal::display_patterns(&summary);
            } else if let Some(summary) = local_patterns {
                terminal::display_patterns(&summary);
            }
        }

        Commands::Monitor {
            alerts,
            interval_secs,
            seed,
        } => {
            let period = interval_secs
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(config.alert_interval);

            let feed = MonitoringFeed::shared();
            let mut events = feed.read().await.subscribe();

            let source = match seed {
                Some(seed) => SyntheticAlertSource::seeded(seed),
                None => SyntheticAlertSource::from_entropy(),
            };

            println!(
                "{}",
                format!(
                    "Simulated monitoring: one demonstration alert every {}s (Ctrl-C to stop)",
                    period.as_secs()
                )
                .bold()
            );
            println!("{}", "These alerts are synthetic, not derived from real content.".dimmed());

            let simulation = start_simulation(feed.clone(), period, source);
            let mut received = 0;
            while received < alerts {
                tokio::select! {
                    event = events.recv() => match event {
                        Ok(entry) => {
                            terminal::display_feed_line(&entry);
                            received += 1;
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            info!(skipped, "Display fell behind the feed");
                        }
                        Err(RecvError::Closed) => break,
                    },
                    _ = tokio::signal::ctrl_c() => {
                        println!();
                        break;
                    }
                }
            }
            simulation.stop();

            let feed = feed.read().await;
            terminal::display_stats(&feed.stats());
            if let Some(summary) = feed.patterns() {
                terminal::display_patterns(summary);
            }
        }

        Commands::Emergency { message } => {
            config.validate();
            let detector = EmergencyDetector::new(config.generator(), &config.model);

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Checking message...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let emergency = detector.is_emergency(&message).await;
            spinner.finish_and_clear();

            terminal::display_emergency(&message, emergency);
        }

        Commands::Insights { file } => {
            config.validate();
            let data = match file {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    serde_json::from_str::<ProgressData>(&raw)
                        .with_context(|| format!("Invalid progress data in {}", path.display()))?
                }
                None => ProgressData::sample(),
            };
            let advisor = ProgressAdvisor::new(config.generator(), &config.model);

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Generating insights...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let insights = advisor.insights(&data).await;
            spinner.finish_and_clear();

            terminal::display_insights(&insights);
        }

        Commands::Therapists { needs } => {
            config.validate();
            let matcher = SupportMatcher::new(config.generator(), &config.model);

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Finding support...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let therapists = matcher.recommend(&needs).await;
            spinner.finish_and_clear();

            terminal::display_therapists(&therapists);
        }

        Commands::Status => {
            mindful::status::show(&config);
        }

        #[cfg(feature = "web")]
        Commands::Serve {
            port,
            bind,
            simulate,
        } => {
            config.validate();
            mindful::web::run_server(config, port, &bind, simulate).await?;
        }
    }

    Ok(())
}
