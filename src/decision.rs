use tracing::{debug, trace};

use crate::cards::HoleCards;
use crate::error::Result;
use crate::game::{ActionKind, Advice, Decision, GameContext};
use crate::pot::{calculate_pot_odds, calculate_raise_amount, estimate_pot_size};
use crate::strength::HandStrength;

/// Pot odds must be strictly above this to count as favorable.
pub const FAVORABLE_ODDS: f64 = 50.0;

struct Rule {
    name: &'static str,
    applies: fn(HandStrength, f64, bool) -> bool,
    action: ActionKind,
}

/// Checked in order; anything that falls through folds.
static RULES: [Rule; 4] = [
    Rule {
        name: "premium pair",
        applies: |strength, _, _| strength.value() >= 12,
        action: ActionKind::Raise,
    },
    Rule {
        name: "strong hand with favorable odds",
        applies: |strength, odds, _| strength.value() >= 9 && odds > FAVORABLE_ODDS,
        action: ActionKind::Raise,
    },
    Rule {
        name: "suited hand with favorable odds",
        applies: |strength, odds, suited| {
            strength.value() >= 7 && odds > FAVORABLE_ODDS && suited
        },
        action: ActionKind::Raise,
    },
    Rule {
        name: "moderate hand with favorable odds",
        applies: |strength, odds, _| strength.value() > 5 && odds > FAVORABLE_ODDS,
        action: ActionKind::Call,
    },
];

pub fn select_action(strength: HandStrength, pot_odds: f64, is_suited: bool) -> ActionKind {
    RULES
        .iter()
        .find(|rule| (rule.applies)(strength, pot_odds, is_suited))
        .map(|rule| {
            trace!(rule = rule.name, "decision rule matched");
            rule.action
        })
        .unwrap_or(ActionKind::Fold)
}

/// Chooses an action for an already scored hand.
pub fn decide(
    strength: HandStrength,
    pot_size: f64,
    to_call: f64,
    players_called: u32,
    is_suited: bool,
) -> Result<Advice> {
    let pot_odds = calculate_pot_odds(pot_size, to_call)?;
    let decision = match select_action(strength, pot_odds, is_suited) {
        ActionKind::Raise => Decision::Raise {
            amount: calculate_raise_amount(pot_size, strength, players_called, pot_odds)?,
        },
        ActionKind::Call => Decision::Call,
        ActionKind::Fold => Decision::Fold,
    };
    debug!(
        strength = strength.value(),
        pot_odds,
        action = decision.kind().as_str(),
        "selected pre-flop action"
    );

    Ok(Advice {
        pot_size,
        pot_odds,
        strength,
        decision,
    })
}

/// Runs the whole pipeline from hole cards and table state.
pub fn advise(hand: &HoleCards, context: &GameContext) -> Result<Advice> {
    let pot_size = estimate_pot_size(
        context.small_blind,
        context.big_blind,
        context.players_called,
    )?;
    let strength = HandStrength::of(hand);
    debug!(hand = %hand, strength = %strength, "scored hole cards");
    decide(
        strength,
        pot_size,
        context.to_call,
        context.players_called,
        hand.is_suited(),
    )
}
