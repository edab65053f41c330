use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    fn is_tag(ch: char) -> bool {
        matches!(
            ch.to_ascii_lowercase(),
            'c' | 'd' | 'h' | 's' | '♣' | '♦' | '♥' | '♠'
        )
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "♣" | "club" | "clubs" => Ok(Suit::Clubs),
            "d" | "♦" | "diamond" | "diamonds" => Ok(Suit::Diamonds),
            "h" | "♥" | "heart" | "hearts" => Ok(Suit::Hearts),
            "s" | "♠" | "spade" | "spades" => Ok(Suit::Spades),
            _ => Err(AdvisorError::InvalidSuit(s.to_string())),
        }
    }
}

/// Card rank on the 1..=14 scale, where 11 is a Jack and 14 an Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 14;

    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rank(value as u8))
        } else {
            Err(AdvisorError::InvalidRank(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Ranks 2 through Ace, highest first.
    pub fn descending() -> impl Iterator<Item = Rank> {
        (2..=Self::MAX).rev().map(Rank)
    }

    pub fn short_label(self) -> String {
        match self.0 {
            10 => "T".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            n => n.to_string(),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.short_label())
    }
}

impl TryFrom<u8> for Rank {
    type Error = AdvisorError;

    fn try_from(value: u8) -> Result<Self> {
        Rank::new(i64::from(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl FromStr for Rank {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "T" => Ok(Rank::TEN),
            "J" => Ok(Rank::JACK),
            "Q" => Ok(Rank::QUEEN),
            "K" => Ok(Rank::KING),
            "A" => Ok(Rank::ACE),
            digits => digits
                .parse::<i64>()
                .map_err(|_| AdvisorError::MalformedInput(format!("invalid rank '{trimmed}'")))
                .and_then(Rank::new),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    pub fn notation(&self) -> String {
        format!("{}{}", self.rank.short_label(), self.suit.symbol())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notation())
    }
}

impl FromStr for Card {
    type Err = AdvisorError;

    /// Parses `Ah`, `14h` or `10♠`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let suit_char = trimmed
            .chars()
            .last()
            .filter(|ch| Suit::is_tag(*ch))
            .ok_or_else(|| AdvisorError::MalformedInput(format!("invalid card '{trimmed}'")))?;
        let rank_part = &trimmed[..trimmed.len() - suit_char.len_utf8()];
        Ok(Card::new(rank_part.parse()?, suit_char.to_string().parse()?))
    }
}

/// The two private cards a player holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoleCards {
    pub first: Card,
    pub second: Card,
}

impl HoleCards {
    pub fn new(first: Card, second: Card) -> Self {
        Self { first, second }
    }

    pub fn is_suited(&self) -> bool {
        self.first.suit == self.second.suit
    }

    pub fn swapped(&self) -> Self {
        Self::new(self.second, self.first)
    }
}

impl Display for HoleCards {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

impl FromStr for HoleCards {
    type Err = AdvisorError;

    /// Accepts `14 H 13 S`, `A h K s`, `Ah Ks` or `AhKs`.
    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [rank1, suit1, rank2, suit2] => Ok(HoleCards::new(
                Card::new(rank1.parse()?, suit1.parse()?),
                Card::new(rank2.parse()?, suit2.parse()?),
            )),
            [first, second] => Ok(HoleCards::new(first.parse()?, second.parse()?)),
            [compact] => {
                let cards = split_compact(compact)?;
                match cards.as_slice() {
                    [first, second] => Ok(HoleCards::new(*first, *second)),
                    _ => Err(malformed_hole_cards(s)),
                }
            }
            _ => Err(malformed_hole_cards(s)),
        }
    }
}

fn split_compact(text: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::with_capacity(2);
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if Suit::is_tag(ch) {
            let end = idx + ch.len_utf8();
            cards.push(text[start..end].parse()?);
            start = end;
        }
    }
    if start != text.len() {
        return Err(malformed_hole_cards(text));
    }
    Ok(cards)
}

fn malformed_hole_cards(text: &str) -> AdvisorError {
    AdvisorError::MalformedInput(format!(
        "expected two cards such as '14 H 13 S' or 'AhKs', got '{}'",
        text.trim()
    ))
}
