use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{HoleCards, Rank};
use crate::decision::advise;
use crate::error::{AdvisorError, check_amount};
use crate::game::{Advice, Decision, GameContext};
use crate::strength::{HandStrength, strength_chart};

const CARDS_PROMPT: &str = "Enter your cards and suits (1-10, Jack = 11, Queen = 12, King = 13, Ace = 14, H = hearts, S = spades, D = diamonds, C = clubs): ";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub json: bool,
}

/// Values already known before prompting. Anything left as `None` is asked for.
#[derive(Debug, Clone, Default)]
pub struct GameInputs {
    pub cards: Option<HoleCards>,
    pub small_blind: Option<f64>,
    pub big_blind: Option<f64>,
    pub players_called: Option<u32>,
    pub to_call: Option<f64>,
}

pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        inputs: GameInputs,
        reader: &mut R,
        out: &mut W,
    ) -> Result<Advice> {
        let hand = match inputs.cards {
            Some(cards) => cards,
            None => prompt(reader, out, CARDS_PROMPT)?,
        };
        let small_blind = match inputs.small_blind {
            Some(value) => value,
            None => prompt::<Amount, _, _>(reader, out, "Enter the small blind amount: ")?.0,
        };
        let big_blind = match inputs.big_blind {
            Some(value) => value,
            None => prompt::<Amount, _, _>(reader, out, "Enter the big blind amount: ")?.0,
        };
        let players_called = match inputs.players_called {
            Some(value) => value,
            None => prompt(
                reader,
                out,
                "Enter the number of players who called the big blind: ",
            )?,
        };
        let to_call = match inputs.to_call {
            Some(value) => value,
            None => prompt::<Amount, _, _>(reader, out, "Enter the amount needed to call: ")?.0,
        };

        let context = GameContext::new(small_blind, big_blind, players_called, to_call)?;
        let advice = advise(&hand, &context)?;
        self.print_advice(out, &hand, &advice)?;
        Ok(advice)
    }

    pub fn print_advice<W: Write>(&self, out: &mut W, hand: &HoleCards, advice: &Advice) -> Result<()> {
        if self.config.json {
            writeln!(out, "{}", serde_json::to_string_pretty(advice)?)?;
            return Ok(());
        }

        let action = describe_decision(&advice.decision);
        if self.config.no_color {
            writeln!(out, "Hand: {} | Strength: {}", hand, advice.strength)?;
            writeln!(out, "Pot odds: {}%", format_percent(advice.pot_odds))?;
            writeln!(out, "Action: {action}")?;
        } else {
            writeln!(
                out,
                "{} {} {} {}",
                "Hand".bold().cyan(),
                hand.to_string().bold().yellow(),
                "Strength".bold().white(),
                advice.strength
            )?;
            writeln!(
                out,
                "{} {}%",
                "Pot odds:".bold().white(),
                format_percent(advice.pot_odds)
            )?;
            writeln!(out, "{} {}", "Action:".bold().white(), action.bold().green())?;
        }
        Ok(())
    }

    pub fn print_chart<W: Write>(&self, out: &mut W) -> Result<()> {
        let chart = strength_chart();
        let labels: Vec<String> = Rank::descending().map(|rank| rank.short_label()).collect();

        if self.config.json {
            let tiers: Vec<Vec<u8>> = chart
                .iter()
                .map(|row| row.iter().map(|tier| tier.value()).collect())
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&tiers)?)?;
            return Ok(());
        }

        write!(out, "   ")?;
        for label in &labels {
            write!(out, "{label:>3}")?;
        }
        writeln!(out)?;

        for (label, row) in labels.iter().zip(&chart) {
            write!(out, "{label:>3}")?;
            for tier in row {
                let cell = format!("{:>3}", tier.value());
                if self.config.no_color {
                    write!(out, "{cell}")?;
                } else {
                    match tier_band(*tier) {
                        Band::Raise => write!(out, "{}", cell.green())?,
                        Band::Marginal => write!(out, "{}", cell.yellow())?,
                        Band::Weak => write!(out, "{}", cell.red())?,
                    }
                }
            }
            writeln!(out)?;
        }
        writeln!(out, "Suited hands above the diagonal, offsuit below.")?;
        Ok(())
    }
}

enum Band {
    Raise,
    Marginal,
    Weak,
}

fn tier_band(tier: HandStrength) -> Band {
    match tier.value() {
        9.. => Band::Raise,
        6..=8 => Band::Marginal,
        _ => Band::Weak,
    }
}

/// A prompt answer that must be a finite, non-negative amount.
struct Amount(f64);

impl FromStr for Amount {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<f64>()
            .map_err(|_| AdvisorError::MalformedInput(format!("'{s}' is not a number")))?;
        check_amount("amount", value).map(Amount)
    }
}

/// Six significant digits with trailing zeros dropped, so 175.0 prints as `175`.
pub fn format_percent(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

pub fn describe_decision(decision: &Decision) -> String {
    match decision {
        Decision::Raise { amount } => format!("raise with amount: ${amount}"),
        Decision::Call => "call".to_string(),
        Decision::Fold => "fold".to_string(),
    }
}

/// Prompts until the line parses. End of input is an error.
fn prompt<T, R, W>(reader: &mut R, out: &mut W, message: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{message}")?;
        out.flush()?;
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            bail!(AdvisorError::MalformedInput(format!(
                "input ended before answering '{}'",
                message.trim_end_matches([':', ' '])
            )));
        }
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(input = line.trim(), "rejected prompt answer");
                writeln!(out, "Invalid input: {err}. Try again.")?;
            }
        }
    }
}
