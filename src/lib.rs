pub mod advisor;
pub mod cards;
pub mod decision;
pub mod error;
pub mod game;
pub mod pot;
pub mod strength;

pub use advisor::{Advisor, AdvisorConfig, GameInputs};
pub use cards::{Card, HoleCards, Rank, Suit};
pub use decision::{advise, decide};
pub use error::AdvisorError;
pub use game::{ActionKind, Advice, Decision, GameContext};
pub use pot::{calculate_pot_odds, calculate_raise_amount, estimate_pot_size};
pub use strength::{HandStrength, evaluate_hand_strength};
