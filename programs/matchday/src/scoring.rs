//! Pure scoring rules shared by the settlement instructions.
//!
//! Everything in this module is deterministic and side-effect free: handlers
//! resolve accounts and persist, this module only computes. Draws,
//! eliminations, and busts are ordinary return values here, never errors.

use crate::constants::{
    BPS_DENOMINATOR, CORRECT_RESULT_POINTS, EXACT_SCORE_POINTS, PRIZE_POOL_BPS,
    RACE_TARGET_GOALS, TABLE_POINTS_BY_DIFF,
};

/// Result sign of a fixture, from the home side's point of view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

pub fn match_outcome(home_score: u8, away_score: u8) -> MatchOutcome {
    if home_score > away_score {
        MatchOutcome::HomeWin
    } else if home_score < away_score {
        MatchOutcome::AwayWin
    } else {
        MatchOutcome::Draw
    }
}

/// Winning team of a fixture, `None` on a draw.
pub fn fixture_winner(
    home_team: u16,
    away_team: u16,
    home_score: u8,
    away_score: u8,
) -> Option<u16> {
    match match_outcome(home_score, away_score) {
        MatchOutcome::HomeWin => Some(home_team),
        MatchOutcome::AwayWin => Some(away_team),
        MatchOutcome::Draw => None,
    }
}

/// Weekly Score Predictor: exact scoreline beats correct result sign beats
/// nothing.
pub fn score_prediction_points(
    predicted_home: u8,
    predicted_away: u8,
    actual_home: u8,
    actual_away: u8,
) -> u32 {
    if predicted_home == actual_home && predicted_away == actual_away {
        EXACT_SCORE_POINTS
    } else if match_outcome(predicted_home, predicted_away)
        == match_outcome(actual_home, actual_away)
    {
        CORRECT_RESULT_POINTS
    } else {
        0
    }
}

/// Table Predictor: points for one team given how far its predicted position
/// is from its actual position.
pub fn table_position_points(diff: usize) -> u32 {
    TABLE_POINTS_BY_DIFF.get(diff).copied().unwrap_or(0)
}

/// Table Predictor: total score of a predicted order against the actual
/// final order. A predicted team missing from the actual standings scores
/// nothing rather than failing the whole prediction.
pub fn table_score(predicted: &[u16], actual: &[u16]) -> u32 {
    predicted
        .iter()
        .enumerate()
        .map(|(predicted_index, team)| {
            match actual.iter().position(|t| t == team) {
                Some(actual_index) => {
                    table_position_points(predicted_index.abs_diff(actual_index))
                }
                None => 0,
            }
        })
        .sum()
}

/// Race to 33 verdict for a cumulative goal count.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RaceOutcome {
    /// Still under the target.
    Running,
    /// Hit the target exactly.
    Won,
    /// Overshot the target.
    Bust,
}

pub fn race_outcome(cumulative_goals: u32) -> RaceOutcome {
    if cumulative_goals < RACE_TARGET_GOALS {
        RaceOutcome::Running
    } else if cumulative_goals == RACE_TARGET_GOALS {
        RaceOutcome::Won
    } else {
        RaceOutcome::Bust
    }
}

/// Lock time of a scoring unit: the earliest child kickoff wins over the
/// nominal start date. A round's advertised start can lag its actual first
/// kickoff, and picks must close before any ball is kicked.
pub fn lock_time(start_date: i64, first_kickoff: Option<i64>) -> i64 {
    match first_kickoff {
        Some(kickoff) => start_date.min(kickoff),
        None => start_date,
    }
}

/// Deadline Guard: a pick is rejected once the current time is strictly past
/// the lock time.
pub fn is_locked(now: i64, start_date: i64, first_kickoff: Option<i64>) -> bool {
    now > lock_time(start_date, first_kickoff)
}

/// Prize pool for a paid-entry count: floor(fee * entries * 80%). The
/// remaining 20% is the platform take. Derived state, always recomputed from
/// the current count.
pub fn prize_pool(entry_fee: u64, paid_entries: u32) -> Option<u64> {
    entry_fee
        .checked_mul(paid_entries as u64)?
        .checked_mul(PRIZE_POOL_BPS)?
        .checked_div(BPS_DENOMINATOR)
}

/// Deterministic, pool-constrained team assignment for Race to 33. Each
/// entropy byte proposes a pool slot; collisions probe linearly so the result
/// is always `count` distinct teams when the pool is large enough.
pub fn select_assigned_teams(entropy: &[u8; 32], pool: &[u16], count: usize) -> Vec<u16> {
    let mut assigned: Vec<u16> = Vec::with_capacity(count);
    if pool.len() < count {
        return assigned;
    }
    let mut cursor = 0usize;
    while assigned.len() < count {
        let byte = entropy[cursor % entropy.len()];
        cursor += 1;
        let mut slot = byte as usize % pool.len();
        while assigned.contains(&pool[slot]) {
            slot = (slot + 1) % pool.len();
        }
        assigned.push(pool[slot]);
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn outcome_sign_matches_scoreline() {
        assert_eq!(match_outcome(2, 0), MatchOutcome::HomeWin);
        assert_eq!(match_outcome(0, 3), MatchOutcome::AwayWin);
        assert_eq!(match_outcome(1, 1), MatchOutcome::Draw);
    }

    #[test]
    fn draw_has_no_winner() {
        assert_eq!(fixture_winner(10, 20, 1, 1), None);
        assert_eq!(fixture_winner(10, 20, 2, 1), Some(10));
        assert_eq!(fixture_winner(10, 20, 0, 1), Some(20));
    }

    #[test]
    fn weekly_points_exact_then_sign_then_zero() {
        // Exact scoreline.
        assert_eq!(score_prediction_points(2, 1, 2, 1), 5);
        // Correct sign, wrong scoreline.
        assert_eq!(score_prediction_points(1, 0, 3, 1), 2);
        // Predicted draw, actual draw, different scoreline.
        assert_eq!(score_prediction_points(0, 0, 2, 2), 2);
        // Wrong sign entirely.
        assert_eq!(score_prediction_points(2, 0, 0, 2), 0);
    }

    #[test]
    fn table_points_step_down_with_distance() {
        assert_eq!(table_position_points(0), 25);
        assert_eq!(table_position_points(1), 15);
        assert_eq!(table_position_points(2), 10);
        assert_eq!(table_position_points(3), 5);
        assert_eq!(table_position_points(4), 0);
        assert_eq!(table_position_points(19), 0);
    }

    #[test]
    fn exact_table_prediction_scores_maximum() {
        let actual = [1u16, 2, 3, 4, 5, 6];
        assert_eq!(table_score(&actual, &actual), 25 * 6);
    }

    #[test]
    fn reversed_six_team_table_scores_boundary_diffs() {
        // Six teams reversed: diffs are 5, 3, 1, 1, 3, 5 -> 0 + 5 + 15 twice.
        let actual = [1u16, 2, 3, 4, 5, 6];
        let reversed = [6u16, 5, 4, 3, 2, 1];
        assert_eq!(table_score(&reversed, &actual), 2 * (5 + 15));
    }

    #[test]
    fn unknown_team_in_prediction_scores_nothing() {
        let actual = [1u16, 2, 3];
        let predicted = [1u16, 99, 3];
        assert_eq!(table_score(&predicted, &actual), 25 + 0 + 25);
    }

    #[test]
    fn race_verdict_is_exact_at_target() {
        assert_eq!(race_outcome(32), RaceOutcome::Running);
        assert_eq!(race_outcome(33), RaceOutcome::Won);
        assert_eq!(race_outcome(34), RaceOutcome::Bust);
        assert_eq!(race_outcome(0), RaceOutcome::Running);
    }

    #[test]
    fn lock_time_takes_earliest_kickoff() {
        assert_eq!(lock_time(1_000, Some(900)), 900);
        assert_eq!(lock_time(1_000, Some(1_100)), 1_000);
        assert_eq!(lock_time(1_000, None), 1_000);
    }

    #[test]
    fn deadline_boundary_one_second_each_way() {
        let now = 1_000;
        // First kickoff one second ago: locked.
        assert!(is_locked(now, 2_000, Some(now - 1)));
        // First kickoff one second from now: still open.
        assert!(!is_locked(now, 2_000, Some(now + 1)));
    }

    #[test]
    fn prize_pool_is_eighty_percent_floor() {
        assert_eq!(prize_pool(500, 10), Some(4_000));
        assert_eq!(prize_pool(0, 10), Some(0));
        // 3 * 125 * 0.8 = 300 exactly; 3 * 126 * 0.8 = 302.4 floors to 302.
        assert_eq!(prize_pool(126, 3), Some(302));
        assert_eq!(prize_pool(u64::MAX, 2), None);
    }

    #[test]
    fn assigned_teams_are_distinct_and_pool_constrained() {
        let pool = [10u16, 11, 12, 13, 14, 15];
        let entropy = [7u8; 32];
        let picked = select_assigned_teams(&entropy, &pool, 3);
        assert_eq!(picked.len(), 3);
        for team in &picked {
            assert!(pool.contains(team));
        }
        let mut deduped = picked.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), picked.len());
        // Same entropy, same assignment.
        assert_eq!(picked, select_assigned_teams(&entropy, &pool, 3));
    }

    proptest! {
        #[test]
        fn weekly_points_are_five_two_or_zero(ph in 0u8..10, pa in 0u8..10, ah in 0u8..10, aa in 0u8..10) {
            let points = score_prediction_points(ph, pa, ah, aa);
            prop_assert!(points == 0 || points == 2 || points == 5);
        }

        #[test]
        fn race_counter_never_regresses(start in 0u32..100, added in 0u32..20) {
            let next = start + added;
            prop_assert!(next >= start);
            // Won is only reachable from Running, never from Bust.
            if race_outcome(start) == RaceOutcome::Bust {
                prop_assert_eq!(race_outcome(next), RaceOutcome::Bust);
            }
        }

        #[test]
        fn table_score_never_exceeds_maximum(perm in proptest::sample::subsequence((0u16..20).collect::<Vec<_>>(), 6)) {
            let actual: Vec<u16> = (0..6).collect();
            prop_assert!(table_score(&perm, &actual) <= 25 * 6);
        }

        #[test]
        fn assignment_always_yields_requested_count(seed in proptest::array::uniform32(any::<u8>())) {
            let pool: Vec<u16> = (100..120).collect();
            let picked = select_assigned_teams(&seed, &pool, 3);
            prop_assert_eq!(picked.len(), 3);
        }
    }
}
