//! Properties of the rating engine.

use rating_ledger::{rating_change, round_to_tenths, GameOutcome, RatingError};

#[test]
fn draw_between_equals_changes_nothing() {
    for rating in [1400, 1550, 1888, 2700, 3500] {
        for k in [10.0, 20.0, 40.0] {
            assert_eq!(rating_change(rating, rating, GameOutcome::Draw, k), 0.0);
        }
    }
}

#[test]
fn winners_gain_equals_losers_loss() {
    let pairs = [
        (1400, 1400),
        (1500, 1700),
        (1888, 1400),
        (2000, 1850),
        (2400, 2399),
    ];
    for (a, b) in pairs {
        for k in [10.0, 20.0, 40.0] {
            assert_eq!(
                rating_change(a, b, GameOutcome::Win, k),
                -rating_change(b, a, GameOutcome::Loss, k),
            );
        }
    }
}

#[test]
fn rating_gaps_cap_at_400_points() {
    // 1000-point and 500-point gaps behave like a 400-point gap.
    let capped = rating_change(1000, 1400, GameOutcome::Win, 20.0);
    assert_eq!(rating_change(1000, 2000, GameOutcome::Win, 20.0), capped);
    assert_eq!(rating_change(1000, 1500, GameOutcome::Win, 20.0), capped);
}

#[test]
fn golden_scenario_1888_beats_1400() {
    // diff -488 caps at -400, E = 10/11, delta = 40 * (1 - 10/11) = 40/11.
    assert_eq!(rating_change(1888, 1400, GameOutcome::Win, 40.0), 3.6);
}

#[test]
fn repeated_calls_agree() {
    for _ in 0..3 {
        assert_eq!(
            rating_change(1713, 1804, GameOutcome::Draw, 20.0),
            rating_change(1713, 1804, GameOutcome::Draw, 20.0),
        );
    }
}

#[test]
fn outcome_tokens_outside_the_three_are_rejected() {
    for bad in ["tie", "WIN", "stalemate", ""] {
        assert!(matches!(
            bad.parse::<GameOutcome>(),
            Err(RatingError::InvalidOutcome(_))
        ));
    }
}

#[test]
fn tenths_rounding_is_half_away_from_zero() {
    assert_eq!(round_to_tenths(2.35), 2.4);
    assert_eq!(round_to_tenths(-2.35), -2.4);
    assert_eq!(round_to_tenths(0.1 + 0.2), 0.3);
}
