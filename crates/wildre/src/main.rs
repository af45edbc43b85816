use std::io::BufRead;
use std::process::ExitCode;

use anyhow::Context;
use bpaf::Bpaf;
use tracing_subscriber::prelude::*;
use wildcard_regex::{Capture, Config, Feature, Preset};

/// A comma-separated feature list, e.g. `jokers,brackets`.
#[derive(Debug, Clone)]
struct FeatureList(Vec<Feature>);

impl core::str::FromStr for FeatureList {
    type Err = wildcard_regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|name| !name.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(FeatureList)
    }
}

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
/// Convert wildcard patterns to regular expressions
struct Cli {
    /// Preset to use: unix, win32, jokers, sql; defaults to the host OS convention
    #[bpaf(long("preset"), argument("PRESET"))]
    preset: Option<Preset>,

    /// Comma-separated features: jokers, sql, commas, brackets, groups
    #[bpaf(long("features"), argument("LIST"))]
    features: Option<FeatureList>,

    /// Comma-separated capture settings: single, any, lazy, brackets
    #[bpaf(long("capture"), argument("LIST"))]
    capture: Option<Capture>,

    /// Patterns to convert; reads stdin lines when empty
    #[bpaf(positional("PATTERN"))]
    patterns: Vec<String>,
}

fn config_from_cli(cli: &Cli) -> Config {
    let mut builder = Config::builder();
    match (cli.preset, &cli.features) {
        (Some(preset), Some(features)) => {
            builder.preset(preset).features(features.0.iter().copied());
        }
        (Some(preset), None) => {
            builder.preset(preset);
        }
        (None, Some(features)) => {
            builder.features(features.0.iter().copied());
        }
        (None, None) => {
            builder.preset(Preset::host());
        }
    }
    if let Some(capture) = cli.capture {
        builder.capture(capture);
    }
    builder.build()
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = config_from_cli(cli);

    if cli.patterns.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let pattern = line.context("failed to read pattern from stdin")?;
            println!("{pattern} => {}", config.convert_str(&pattern));
        }
    } else {
        for pattern in &cli.patterns {
            println!("{pattern} => {}", config.convert_str(pattern));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Ok(filter) = tracing_subscriber::EnvFilter::try_from_env("WILDRE_LOG") {
        tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true)
                    .with_indent_lines(true)
                    .with_timer(tracing_tree::time::Uptime::default())
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }

    let cli = cli().run();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
