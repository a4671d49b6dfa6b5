//! distplot CLI

mod args;
mod prompt;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use args::{DistArgs, EvalArgs, OutputFormat, StyleArgs, ValueArgs};
use report::Evaluation;

#[derive(Parser)]
#[command(name = "distplot")]
#[command(about = "distplot - probability tables and bar charts for common distributions")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate probabilities and print them
    Eval {
        #[command(flatten)]
        dist: DistArgs,

        #[command(flatten)]
        values: ValueArgs,

        #[command(flatten)]
        eval: EvalArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate probabilities and render them as a bar chart
    Plot {
        #[command(flatten)]
        dist: DistArgs,

        #[command(flatten)]
        values: ValueArgs,

        #[command(flatten)]
        eval: EvalArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Chart file; format from the extension (svg, png, pdf)
        #[arg(long)]
        out: PathBuf,

        /// Also write the chart artifact JSON here
        #[arg(long)]
        artifact: Option<PathBuf>,
    },

    /// Ask for the distribution, range and parameters on stdin
    Prompt {
        #[command(flatten)]
        eval: EvalArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Also render the chart to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Eval { dist, values, eval, format, output } => {
            cmd_eval(&dist, &values, &eval, format, output.as_ref())
        }
        Commands::Plot { dist, values, eval, style, out, artifact } => {
            cmd_plot(&dist, &values, &eval, &style, &out, artifact.as_ref())
        }
        Commands::Prompt { eval, style, out } => cmd_prompt(&eval, &style, out.as_ref()),
        Commands::Version => {
            println!("distplot {}", dp_core::VERSION);
            Ok(())
        }
    }
}

fn evaluate(dist: &DistArgs, values: &ValueArgs, eval: &EvalArgs) -> Result<Evaluation> {
    Evaluation::run(eval.evaluator(), &values.values(), || dist.resolve())
}

fn cmd_eval(
    dist: &DistArgs,
    values: &ValueArgs,
    eval: &EvalArgs,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let evaluation = evaluate(dist, values, eval)?;
    match format {
        OutputFormat::Table => write_text(output, &evaluation.table()),
        OutputFormat::Json => write_json(output, evaluation.to_json()),
    }
}

fn cmd_plot(
    dist: &DistArgs,
    values: &ValueArgs,
    eval: &EvalArgs,
    style: &StyleArgs,
    out: &Path,
    artifact: Option<&PathBuf>,
) -> Result<()> {
    let config = style.resolve()?;
    let evaluation = evaluate(dist, values, eval)?;
    render_chart(&evaluation, &config, out, artifact)
}

fn cmd_prompt(eval: &EvalArgs, style: &StyleArgs, out: Option<&PathBuf>) -> Result<()> {
    let config = style.resolve()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let (spec, values) = prompt::Prompter::new(stdin.lock(), stdout.lock()).collect()?;

    let evaluation = Evaluation::run(eval.evaluator(), &values, || Ok(spec))?;
    print!("{}", evaluation.table());
    std::io::stdout().flush()?;

    if let Some(path) = out {
        render_chart(&evaluation, &config, path, None)?;
    }
    Ok(())
}

fn render_chart(
    evaluation: &Evaluation,
    config: &dp_viz_render::config::VizConfig,
    out: &Path,
    artifact: Option<&PathBuf>,
) -> Result<()> {
    let json = serde_json::to_string(&evaluation.artifact())?;
    if let Some(path) = artifact {
        let pretty = serde_json::to_string_pretty(&evaluation.artifact())?;
        std::fs::write(path, pretty)
            .with_context(|| format!("failed to write artifact {}", path.display()))?;
    }
    dp_viz_render::render_to_file(&json, "bar", out, config)
        .with_context(|| format!("failed to render {}", out.display()))?;
    tracing::info!(path = %out.display(), "chart written");
    Ok(())
}

fn write_text(output: Option<&PathBuf>, text: &str) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, text)?;
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
