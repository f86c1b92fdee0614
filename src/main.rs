//! healthguard-monitor - HealthGuard360 data flow monitoring simulator
//!
//! Usage:
//!   healthguard-monitor                      (same as `demo`)
//!   healthguard-monitor journey --user-id alice --scan-type GDPR
//!   healthguard-monitor performance --num-users 10 --operations-per-user 4
//!   healthguard-monitor --format json demo

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use healthguard::config::{LoadTestConfig, MonitorConfig};
use healthguard::flows::{
    run_complete_user_journey, run_monitoring_demo, run_performance_test, DemoReport, JourneyReport,
    PerformanceReport, RunStatus,
};
use healthguard::monitor::{FanoutObserver, JournalObserver, TracingObserver, DEFAULT_JOURNAL_CAPACITY};
use healthguard::render::{self, MonitorOutput};
use healthguard::telemetry::{FlowRecorder, HealthThresholds};

#[derive(Parser)]
#[command(name = "healthguard-monitor")]
#[command(about = "Simulated data flow monitoring for the HealthGuard360 compliance platform")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Maximum number of entries kept in the in-memory journal
    #[arg(long, default_value_t = DEFAULT_JOURNAL_CAPACITY, global = true)]
    journal_capacity: usize,

    /// Average response time below which the system is excellent
    #[arg(long, default_value_t = HealthThresholds::default().excellent_below_ms, global = true)]
    excellent_below_ms: f64,

    /// Average response time below which the system is good
    #[arg(long, default_value_t = HealthThresholds::default().good_below_ms, global = true)]
    good_below_ms: f64,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Complete user journey followed by a 3 x 2 performance test
    Demo,

    /// Complete user journey only
    Journey {
        /// Acting user (default: demo_user_123)
        #[arg(long)]
        user_id: Option<String>,

        /// Uploaded document name (default: patient_data_policy.pdf)
        #[arg(long)]
        document_name: Option<String>,

        /// Compliance framework to scan against (default: HIPAA)
        #[arg(long)]
        scan_type: Option<String>,
    },

    /// Performance test only
    Performance {
        /// Synthetic users (default: 5)
        #[arg(long)]
        num_users: Option<usize>,

        /// Operations per user (default: 3)
        #[arg(long)]
        operations_per_user: Option<usize>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report {
    Demo(DemoReport),
    Journey(JourneyReport),
    Performance(PerformanceReport),
}

impl Cli {
    fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Demo)
    }

    fn monitor_config(&self) -> MonitorConfig {
        let mut config = MonitorConfig {
            journal_capacity: self.journal_capacity,
            thresholds: HealthThresholds {
                excellent_below_ms: self.excellent_below_ms,
                good_below_ms: self.good_below_ms,
            },
            ..MonitorConfig::default()
        };

        match self.command() {
            Commands::Demo => {}
            Commands::Journey { user_id, document_name, scan_type } => {
                if let Some(user_id) = user_id {
                    config.journey.user_id = user_id;
                }
                if let Some(document_name) = document_name {
                    config.journey.document_name = document_name;
                }
                if let Some(scan_type) = scan_type {
                    config.journey.scan_type = scan_type;
                }
            }
            Commands::Performance { num_users, operations_per_user } => {
                // Standalone runs default to the full 5 x 3 load, not the demo's 3 x 2
                let defaults = LoadTestConfig::default();
                config.load_test.num_users = num_users.unwrap_or(defaults.num_users);
                config.load_test.operations_per_user = operations_per_user.unwrap_or(defaults.operations_per_user);
            }
        }

        config
    }
}

fn run<W: Write>(cli: &Cli, journal: &Arc<JournalObserver>, out: &mut W) -> Result<Report> {
    let config = cli.monitor_config();
    config.validate().context("invalid command line")?;

    let observer = FanoutObserver::new()
        .with(Arc::new(TracingObserver))
        .with(journal.clone());
    let recorder = FlowRecorder::new(Arc::new(observer)).with_thresholds(config.thresholds);

    let text = cli.format == OutputFormat::Text;
    if text {
        render::write_banner(out, &render::display_now())?;
    }

    let report = match cli.command() {
        Commands::Demo => {
            let demo = run_monitoring_demo(&recorder, &config.journey, &config.load_test);
            if text {
                render::write_section(out, 1, "Running Complete User Journey Monitoring")?;
                render::write_journey_summary(out, &demo.journey)?;
                render::write_section(out, 2, "Running Performance Testing")?;
                render::write_performance_summary(out, &demo.performance)?;
            }
            Report::Demo(demo)
        }
        Commands::Journey { .. } => {
            let journey = run_complete_user_journey(&recorder, &config.journey);
            if text {
                render::write_section(out, 1, "Running Complete User Journey Monitoring")?;
                render::write_journey_summary(out, &journey)?;
            }
            Report::Journey(journey)
        }
        Commands::Performance { .. } => {
            let performance = run_performance_test(&recorder, &config.load_test);
            if text {
                render::write_section(out, 1, "Running Performance Testing")?;
                render::write_performance_summary(out, &performance)?;
            }
            Report::Performance(performance)
        }
    };

    if text {
        render::write_completion(out, &render::display_now())?;
    }

    Ok(report)
}

fn main() -> ExitCode {
    // Logs go to stderr so `--format json` leaves stdout parseable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {}", e);
    }

    let cli = Cli::parse();
    let journal = Arc::new(JournalObserver::with_capacity(cli.journal_capacity));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &journal, &mut out) {
        Ok(report) => {
            let written = match cli.format {
                OutputFormat::Text => render::write_final_status(&mut out, RunStatus::Success),
                OutputFormat::Json => render::write_json(&mut out, &MonitorOutput::success(&report, journal.entries())),
            };
            if let Err(e) = written {
                eprintln!("Failed to write output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Monitoring run failed: {:#}", e);
            // Best effort: stdout itself may be what failed
            let message = format!("{:#}", e);
            let _ = match cli.format {
                OutputFormat::Text => render::write_failure(&mut out, &message),
                OutputFormat::Json => render::write_json(
                    &mut out,
                    &MonitorOutput::<Report>::failure(message, journal.entries()),
                ),
            };
            ExitCode::FAILURE
        }
    }
}
