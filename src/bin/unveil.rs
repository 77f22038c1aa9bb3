use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "unveil", version)]
struct Cli {
    /// Debug-level logging for the library (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a scripted session against the simulated engine and print the state trace.
    Simulate(SimulateArgs),
    /// Print the player time display for a number of seconds.
    Format(FormatArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Presentation config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session script JSON. The built-in walkthrough runs when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Media source (overrides the config).
    #[arg(long)]
    src: Option<String>,

    /// Stop the virtual clock at this instant.
    #[arg(long, default_value_t = 20_000)]
    until_ms: u64,

    /// Virtual clock step.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Emit the trace as JSON instead of text lines.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FormatArgs {
    /// Position in seconds.
    seconds: f64,

    /// Optional total duration, printed as `current / total`.
    #[arg(long)]
    duration: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "unveil=debug".to_string()
        } else {
            "unveil=info".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Format(args) => cmd_format(args),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => unveil::PresentationConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => unveil::PresentationConfig::default(),
    };
    if let Some(src) = args.src {
        config.media_src = Some(src);
    }

    let script = match &args.script {
        Some(path) => unveil::Script::from_path(path)
            .with_context(|| format!("load script '{}'", path.display()))?,
        None => unveil::Script::demo(),
    };

    let opts = unveil::RunOpts {
        until: unveil::Millis(args.until_ms),
        tick: unveil::Millis(args.tick_ms),
    };
    let trace = unveil::run_script(&config, &script, opts).context("run script")?;

    if args.json {
        let out = serde_json::to_string_pretty(&trace).context("serialize trace")?;
        println!("{out}");
    } else {
        for entry in &trace {
            println!("{entry}");
        }
    }
    Ok(())
}

fn cmd_format(args: FormatArgs) -> anyhow::Result<()> {
    match args.duration {
        Some(d) => println!("{}", unveil::format_progress(args.seconds, Some(d))),
        None => println!("{}", unveil::format_time(args.seconds)),
    }
    Ok(())
}
