use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use preflop_advisor::{Advisor, AdvisorConfig, GameInputs, HoleCards};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "preflop-advisor",
    version,
    about = "Suggests a pre-flop raise, call or fold",
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hole cards, e.g. "14 H 13 S" or "AhKs" (prompted if omitted)
    #[arg(long)]
    cards: Option<HoleCards>,

    /// Small blind amount
    #[arg(long = "small-blind")]
    small_blind: Option<f64>,

    /// Big blind amount
    #[arg(long = "big-blind")]
    big_blind: Option<f64>,

    /// Number of players who called the big blind
    #[arg(long = "callers")]
    players_called: Option<u32>,

    /// Amount needed to call
    #[arg(long = "to-call")]
    to_call: Option<f64>,

    /// Disable ANSI colors in CLI output
    #[arg(long = "no-color", default_value_t = false, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the hand strength tier for every starting hand
    Chart,
}

fn main() -> Result<()> {
    let _ = color_eyre::install();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let advisor = Advisor::new(AdvisorConfig {
        no_color: cli.no_color,
        json: cli.json,
    });
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Chart) => advisor.print_chart(&mut stdout),
        None => {
            let inputs = GameInputs {
                cards: cli.cards,
                small_blind: cli.small_blind,
                big_blind: cli.big_blind,
                players_called: cli.players_called,
                to_call: cli.to_call,
            };
            advisor.run(inputs, &mut io::stdin().lock(), &mut stdout)?;
            Ok(())
        }
    }
}
