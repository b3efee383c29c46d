use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use uacompat_core::cli;
use uacompat_core::conf::resolve_config;
use uacompat_core::conf::types::BotFilterKind;
use uacompat_core::logging::init_logging;
use uacompat_core::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "uacompat",
    version,
    about = "uacompat: browser compatibility statistics from access logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read access log lines on stdin, write classified CSV rows to stdout
    Parse {
        /// Path to the config file (defaults to ./uacompat.hcl when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// How to recognize crawlers
        #[arg(long, value_enum)]
        bot_filter: Option<BotFilterKind>,

        /// Classify lines whose User-Agent is `-` instead of dropping them
        #[arg(long)]
        keep_missing_ua: bool,
    },

    /// Summarize a classified CSV file against a browser version query
    Stats {
        /// CSV produced by `uacompat parse`
        csv_file: PathBuf,

        /// e.g. "chrome>=92,safari>=14,firefox>=90"
        query: String,

        /// Path to the config file (defaults to ./uacompat.hcl when present)
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Command::Parse {
            config,
            bot_filter,
            keep_missing_ua,
        } => parse(config, bot_filter, keep_missing_ua),

        Command::Stats {
            csv_file,
            query,
            config,
            format,
        } => stats(csv_file, &query, config, format),

        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn parse(
    config: Option<PathBuf>,
    bot_filter: Option<BotFilterKind>,
    keep_missing_ua: bool,
) -> anyhow::Result<()> {
    let mut cfg = resolve_config(config.as_deref())?.parse;
    if let Some(kind) = bot_filter {
        cfg.bot_filter = kind;
    }
    if keep_missing_ua {
        cfg.skip_missing_user_agent = false;
    }

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    cli::parse::run_parse(stdin, stdout, &cfg)?;
    Ok(())
}

fn stats(
    csv_file: PathBuf,
    query: &str,
    config: Option<PathBuf>,
    format: Option<ReportFormat>,
) -> anyhow::Result<()> {
    let cfg = resolve_config(config.as_deref())?;
    let format = format.unwrap_or(cfg.report.format);

    let report = cli::stats::stats_file(&csv_file, query, format)
        .with_context(|| format!("stats over {} failed", csv_file.display()))?;
    print!("{report}");
    Ok(())
}
