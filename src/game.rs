use serde::{Deserialize, Serialize};

use crate::error::{Result, check_amount};
use crate::strength::HandStrength;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Raise,
    Call,
    Fold,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Raise => "raise",
            ActionKind::Call => "call",
            ActionKind::Fold => "fold",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    Raise { amount: f64 },
    Call,
    Fold,
}

impl Decision {
    pub fn kind(&self) -> ActionKind {
        match self {
            Decision::Raise { .. } => ActionKind::Raise,
            Decision::Call => ActionKind::Call,
            Decision::Fold => ActionKind::Fold,
        }
    }

    pub fn raise_amount(&self) -> Option<f64> {
        match self {
            Decision::Raise { amount } => Some(*amount),
            Decision::Call | Decision::Fold => None,
        }
    }
}

/// Table state supplied by the caller for one decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GameContext {
    pub small_blind: f64,
    pub big_blind: f64,
    pub players_called: u32,
    pub to_call: f64,
}

impl GameContext {
    pub fn new(small_blind: f64, big_blind: f64, players_called: u32, to_call: f64) -> Result<Self> {
        Ok(Self {
            small_blind: check_amount("small blind", small_blind)?,
            big_blind: check_amount("big blind", big_blind)?,
            players_called,
            to_call: check_amount("amount to call", to_call)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Advice {
    pub pot_size: f64,
    pub pot_odds: f64,
    pub strength: HandStrength,
    pub decision: Decision,
}
