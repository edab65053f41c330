use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use preflop_advisor::cards::{Rank, Suit};
use preflop_advisor::strength::{HandStrength, evaluate_hand_strength};

fn rank(value: i64) -> Rank {
    Rank::new(value).expect("valid rank")
}

#[test]
fn kings_and_aces_are_premium_pairs() {
    for value in 13..=14 {
        let strength = evaluate_hand_strength(rank(value), rank(value), Suit::Hearts, Suit::Spades);
        assert_eq!(strength, HandStrength::PremiumPair);
        assert_eq!(strength.value(), 12);
    }
}

#[test]
fn lower_pairs_score_ten() {
    for value in 1..13 {
        let strength = evaluate_hand_strength(rank(value), rank(value), Suit::Clubs, Suit::Diamonds);
        assert_eq!(strength.value(), 10, "pair of {value}");
    }
}

#[test]
fn ace_with_broadway_kicker_scores_nine() {
    for kicker in 11..=13 {
        assert_eq!(
            evaluate_hand_strength(rank(14), rank(kicker), Suit::Clubs, Suit::Hearts),
            HandStrength::AceBroadway
        );
    }
    // Ace-ten offsuit sums to 24 and falls through to the high card rule.
    assert_eq!(
        evaluate_hand_strength(rank(14), rank(10), Suit::Clubs, Suit::Hearts),
        HandStrength::HighCards
    );
    // Suited ace-ten takes the suited high card rule instead.
    assert_eq!(
        evaluate_hand_strength(rank(14), rank(10), Suit::Hearts, Suit::Hearts),
        HandStrength::SuitedHigh
    );
}

#[test]
fn sum_thresholds_are_strict() {
    // Suited 9-6 sums to exactly 15: not suited-high, not connected, but past 12.
    assert_eq!(
        evaluate_hand_strength(rank(9), rank(6), Suit::Spades, Suit::Spades),
        HandStrength::HighCards
    );
    // Offsuit 8-4 sums to exactly 12.
    assert_eq!(
        evaluate_hand_strength(rank(8), rank(4), Suit::Spades, Suit::Clubs),
        HandStrength::Weak
    );
    assert_eq!(
        evaluate_hand_strength(rank(5), rank(6), Suit::Spades, Suit::Clubs),
        HandStrength::Connected
    );
    assert_eq!(
        evaluate_hand_strength(rank(2), rank(4), Suit::Spades, Suit::Clubs),
        HandStrength::Weak
    );
}

#[test]
fn swapping_cards_never_changes_the_score() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..2_000 {
        let r1 = rank(rng.gen_range(1..=14));
        let r2 = rank(rng.gen_range(1..=14));
        let s1 = Suit::ALL[rng.gen_range(0..4)];
        let s2 = Suit::ALL[rng.gen_range(0..4)];
        assert_eq!(
            evaluate_hand_strength(r1, r2, s1, s2),
            evaluate_hand_strength(r2, r1, s2, s1),
            "{r1}{s1} {r2}{s2}"
        );
    }
}

#[test]
fn every_score_is_a_known_tier() {
    let known: Vec<u8> = vec![3, 5, 6, 7, 8, 9, 10, 12];
    for r1 in 1..=14 {
        for r2 in 1..=14 {
            for (s1, s2) in [(Suit::Clubs, Suit::Clubs), (Suit::Clubs, Suit::Spades)] {
                let strength = evaluate_hand_strength(rank(r1), rank(r2), s1, s2);
                assert!(known.contains(&strength.value()));
            }
        }
    }
}
