use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibecheck_cli::cli::{Cli, Commands};
use vibecheck_cli::output::{
    format_explain, format_json, format_pattern, format_result, format_stats, format_tables,
};
use vibecheck_core::PipelineResult;
use vibecheck_engine::{PipelineBuilder, VibeConfig};
use vibecheck_telemetry::{describe_metrics, MetricsCollector};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => VibeConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => VibeConfig::default(),
    };
    config.validate()?;

    describe_metrics();
    let collector = MetricsCollector::new();
    let pipeline = PipelineBuilder::from_config(config)
        .observer(collector.clone())
        .build()?;
    info!(patterns = pipeline.pattern_count(), "Pipeline ready");

    match cli.command {
        Commands::Check {
            texts,
            json,
            explain,
        } => {
            for text in &texts {
                print_result(&pipeline.run(text), json)?;
                if explain {
                    print!("{}", format_explain(&pipeline.explain(text)));
                }
            }
        }

        Commands::Batch { json } => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                print_result(&pipeline.run(&line), json)?;
            }
        }

        Commands::Patterns => {
            for entry in pipeline.patterns() {
                println!("{}", format_pattern(entry));
            }
            println!();
            println!(
                "{}",
                format_tables(
                    pipeline.pattern_count(),
                    pipeline.synonym_count(),
                    pipeline.lexicon()
                )
            );
        }
    }

    if cli.stats {
        println!();
        print!("{}", format_stats(&collector.snapshot()));
    }

    Ok(())
}

fn print_result(result: &PipelineResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", format_json(result)?);
    } else {
        println!("{}", format_result(result));
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "vibecheck=debug,vibecheck_engine=debug"
    } else {
        "vibecheck=info,vibecheck_engine=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
