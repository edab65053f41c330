use tracing::debug;

use crate::error::{AdvisorError, Result, check_amount};
use crate::strength::HandStrength;

/// Pot odds as a percentage of the amount needed to call.
pub fn calculate_pot_odds(pot_size: f64, to_call: f64) -> Result<f64> {
    check_amount("pot size", pot_size)?;
    if to_call.is_nan() || to_call <= 0.0 {
        return Err(AdvisorError::ZeroCall);
    }
    check_amount("amount to call", to_call)?;
    check_amount("pot odds", (pot_size / to_call) * 100.0)
}

/// Pot before the player acts: both blinds plus one big blind per caller.
pub fn estimate_pot_size(small_blind: f64, big_blind: f64, players_called: u32) -> Result<f64> {
    check_amount("small blind", small_blind)?;
    check_amount("big blind", big_blind)?;
    let pot = small_blind + big_blind + f64::from(players_called) * big_blind;
    debug!(small_blind, big_blind, players_called, pot, "estimated pot size");
    Ok(pot)
}

/// Suggested raise, rounded to the nearest half unit.
pub fn calculate_raise_amount(
    pot_size: f64,
    strength: HandStrength,
    players_called: u32,
    pot_odds: f64,
) -> Result<f64> {
    check_amount("pot size", pot_size)?;
    check_amount("pot odds", pot_odds)?;
    let mut amount = pot_size;

    if strength.value() >= 12 {
        amount *= 3.0;
    } else if strength.value() > 7 {
        amount *= 1.5;
    }

    if pot_odds > 100.0 {
        amount *= 1.5;
    }

    // Caller adjustment scales with the unmultiplied pot.
    amount += f64::from(players_called) * 0.1 * pot_size;

    check_amount("raise amount", (amount * 2.0).round() / 2.0)
}
