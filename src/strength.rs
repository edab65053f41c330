use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{HoleCards, Rank, Suit};
use crate::error::AdvisorError;

/// Pre-flop hand quality tier. The discriminant is the score the decision
/// table and raise sizing compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum HandStrength {
    Weak = 3,
    Connected = 5,
    HighCards = 6,
    SuitedConnector = 7,
    SuitedHigh = 8,
    AceBroadway = 9,
    Pair = 10,
    PremiumPair = 12,
}

impl HandStrength {
    pub const ALL: [HandStrength; 8] = [
        HandStrength::Weak,
        HandStrength::Connected,
        HandStrength::HighCards,
        HandStrength::SuitedConnector,
        HandStrength::SuitedHigh,
        HandStrength::AceBroadway,
        HandStrength::Pair,
        HandStrength::PremiumPair,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn of(hand: &HoleCards) -> Self {
        evaluate_hand_strength(
            hand.first.rank,
            hand.second.rank,
            hand.first.suit,
            hand.second.suit,
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            HandStrength::Weak => "weak",
            HandStrength::Connected => "connected",
            HandStrength::HighCards => "high cards",
            HandStrength::SuitedConnector => "suited connector",
            HandStrength::SuitedHigh => "suited high cards",
            HandStrength::AceBroadway => "ace with broadway kicker",
            HandStrength::Pair => "pocket pair",
            HandStrength::PremiumPair => "premium pair",
        }
    }
}

impl Display for HandStrength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.value(), self.label())
    }
}

impl TryFrom<u8> for HandStrength {
    type Error = AdvisorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HandStrength::ALL
            .into_iter()
            .find(|tier| tier.value() == value)
            .ok_or_else(|| AdvisorError::MalformedInput(format!("unknown strength tier {value}")))
    }
}

impl From<HandStrength> for u8 {
    fn from(strength: HandStrength) -> u8 {
        strength.value()
    }
}

/// Scores two hole cards. Rules are checked top to bottom and the first
/// match wins, so a suited connector with a low rank sum can land below
/// an unsuited hand whose ranks add up past 12.
pub fn evaluate_hand_strength(rank1: Rank, rank2: Rank, suit1: Suit, suit2: Suit) -> HandStrength {
    let (r1, r2) = (i32::from(rank1.value()), i32::from(rank2.value()));
    let ace = i32::from(Rank::ACE.value());
    let jack = i32::from(Rank::JACK.value());
    let suited = suit1 == suit2;
    let connected = (r1 - r2).abs() == 1;

    if r1 == r2 && r1 >= i32::from(Rank::KING.value()) {
        HandStrength::PremiumPair
    } else if r1 == r2 {
        HandStrength::Pair
    } else if (r1 == ace && r2 >= jack) || (r2 == ace && r1 >= jack) {
        HandStrength::AceBroadway
    } else if suited && r1 + r2 > 15 {
        HandStrength::SuitedHigh
    } else if suited && connected {
        HandStrength::SuitedConnector
    } else if r1 + r2 > 12 {
        HandStrength::HighCards
    } else if connected {
        HandStrength::Connected
    } else {
        HandStrength::Weak
    }
}

/// One row per rank from Ace down to 2. Cells above the diagonal are the
/// suited combination, cells below are offsuit.
pub fn strength_chart() -> Vec<Vec<HandStrength>> {
    let ranks: Vec<Rank> = Rank::descending().collect();
    let cells: Vec<HandStrength> = ranks
        .iter()
        .enumerate()
        .cartesian_product(ranks.iter().enumerate())
        .map(|((row_idx, row), (col_idx, col))| {
            let second_suit = if col_idx > row_idx {
                Suit::Spades
            } else {
                Suit::Hearts
            };
            evaluate_hand_strength(*row, *col, Suit::Spades, second_suit)
        })
        .collect();
    cells.chunks(ranks.len()).map(|row| row.to_vec()).collect()
}
