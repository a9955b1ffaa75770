use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use strum_macros::Display;

use orbit_timeline::scenario::{Scenario, ScenarioOutput};
use orbit_timeline::timeline::SpinnerProfile;

#[derive(Parser)]
#[command(name = "orbit-timeline")]
#[command(about = "Orbit timeline and eclipse sample generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate { scenario: String },
    /// Generate the timeline of a scenario file
    Run {
        scenario: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Display)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario } => validate(&scenario),
        Commands::Run { scenario, format } => run(&scenario, format),
    }
}

fn load(path: &str) -> Option<Scenario> {
    match Scenario::from_file(path) {
        Ok(s) => Some(s),
        Err(e) => {
            eprintln!("Error loading {}: {}", path, e);
            None
        }
    }
}

fn validate(path: &str) -> ExitCode {
    let Some(scenario) = load(path) else {
        return ExitCode::FAILURE;
    };

    let period = match scenario.orbit_period() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid orbit: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match scenario.run() {
        Ok(output) => {
            println!(
                "Scenario {} is valid",
                scenario.name.as_deref().unwrap_or(path)
            );
            println!("  regime: {}", scenario.timeline);
            println!("  end time: {} min", scenario.end_time.0);
            if let Some(period) = period {
                println!("  orbit period: {:.3} min", period);
            }
            match output {
                ScenarioOutput::Samples(rows) => println!("  samples: {}", rows.len()),
                ScenarioOutput::SunAngles(profile) => println!(
                    "  sun angles: {} sides x {} entries",
                    profile.num_sides(),
                    profile.len()
                ),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid scenario: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, format: OutputFormat) -> ExitCode {
    let Some(scenario) = load(path) else {
        return ExitCode::FAILURE;
    };

    log::info!("Running {} scenario from {}", scenario.timeline, path);
    let output = match scenario.run() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid scenario: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rendered = match format {
        OutputFormat::Table => Ok(render_table(&output)),
        OutputFormat::Json => serde_json::to_string_pretty(&output).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(&output).map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to render {} output: {}", format, e);
            ExitCode::FAILURE
        }
    }
}

fn render_table(output: &ScenarioOutput) -> String {
    match output {
        ScenarioOutput::Samples(rows) => rows
            .iter()
            .map(|row| match row.timestamp {
                Some(ts) => format!("{} {}", ts.to_rfc3339(), row.point),
                None => row.point.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        ScenarioOutput::SunAngles(profile) => render_sun_angles(profile),
    }
}

fn render_sun_angles(profile: &SpinnerProfile) -> String {
    let mut lines = Vec::with_capacity(profile.len() + 1);
    let header: Vec<String> = (0..profile.num_sides())
        .map(|s| format!("side_{}", s))
        .collect();
    lines.push(format!("time_min {}", header.join(" ")));

    for (k, t) in profile.times().iter().enumerate() {
        let angles: Vec<String> = profile
            .sides
            .iter()
            .map(|side| format!("{:.3}", side[k]))
            .collect();
        lines.push(format!("{} {}", t, angles.join(" ")));
    }
    lines.join("\n")
}
