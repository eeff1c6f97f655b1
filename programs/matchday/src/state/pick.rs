use anchor_lang::prelude::*;

use crate::constants::{MAX_SETTLED_FIXTURES, MAX_TEAMS, RACE_TEAM_COUNT};
use crate::errors::MatchdayError;

/// Last Man Standing: one team per round. Unique per (entry, round) via the
/// PDA seeds; replaceable until the round locks.
#[account]
#[derive(InitSpace)]
pub struct LastManStandingPick {
    /// Entry that owns this pick.
    pub entry: Pubkey,
    /// Round this pick is for.
    pub round_id: u64,
    /// Team picked to win.
    pub picked_team: u16,
    /// Settlement verdict; null until the round's fixture is settled.
    pub is_correct: Option<bool>,
    /// Unix timestamp of first submission (0 marks a freshly created account).
    pub created_at: i64,
    /// Unix timestamp of the last resubmission.
    pub updated_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl LastManStandingPick {
    pub const SEED: &'static [u8] = b"lms_pick";
}

/// Table Predictor: one prediction per entry, write-once. A second
/// submission fails on the PDA init, preserving the audit trail.
#[account]
#[derive(InitSpace)]
pub struct TablePrediction {
    /// Entry that owns this prediction.
    pub entry: Pubkey,
    /// Predicted final order, best to worst, over the instance team pool.
    #[max_len(MAX_TEAMS)]
    pub predicted_order: Vec<u16>,
    /// Predicted season total goals; leaderboard tie-break only.
    pub predicted_total_goals: u32,
    /// Settlement score; 0 until the standings are settled.
    pub score: u32,
    /// Unix timestamp of submission.
    pub created_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl TablePrediction {
    pub const SEED: &'static [u8] = b"table_prediction";
}

/// Weekly Score Predictor: one scoreline per (entry, fixture), write-once.
#[account]
#[derive(InitSpace)]
pub struct ScorePrediction {
    /// Entry that owns this prediction.
    pub entry: Pubkey,
    /// Fixture the scoreline is predicted for.
    pub fixture_id: u64,
    pub predicted_home: u8,
    pub predicted_away: u8,
    /// Points written by settlement. Non-null doubles as the already-settled
    /// marker, so re-running a fixture pass cannot double-count.
    pub points_awarded: Option<u8>,
    /// Unix timestamp of submission.
    pub created_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl ScorePrediction {
    pub const SEED: &'static [u8] = b"score_prediction";
}

/// Race to 33: a fixed-size team subset assigned once per entry.
#[account]
#[derive(InitSpace)]
pub struct RaceAssignment {
    /// Entry that owns this assignment.
    pub entry: Pubkey,
    /// Teams whose goals count toward the race.
    #[max_len(RACE_TEAM_COUNT)]
    pub assigned_teams: Vec<u16>,
    /// Monotonically non-decreasing goal counter.
    pub cumulative_goals: u32,
    /// Fixtures already folded into the counter; the per-(entry, fixture)
    /// settlement guard.
    #[max_len(MAX_SETTLED_FIXTURES)]
    pub settled_fixtures: Vec<u64>,
    /// Unix timestamp of assignment.
    pub created_at: i64,
    /// Unix timestamp of the last settlement touch.
    pub updated_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl RaceAssignment {
    pub const SEED: &'static [u8] = b"race_assignment";

    /// Fold one fixture's goals into the counter. A fixture already on the
    /// ledger is rejected rather than double counted, and a full ledger is a
    /// capacity error, never a silent drop.
    pub fn record_fixture(&mut self, fixture_id: u64, goals: u32, now: i64) -> Result<()> {
        require!(
            !self.settled_fixtures.contains(&fixture_id),
            MatchdayError::FixtureAlreadySettled
        );
        require!(
            self.settled_fixtures.len() < MAX_SETTLED_FIXTURES,
            MatchdayError::SettledFixtureLedgerFull
        );
        self.settled_fixtures.push(fixture_id);
        self.cumulative_goals = self
            .cumulative_goals
            .checked_add(goals)
            .ok_or(MatchdayError::MathOverflow)?;
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment() -> RaceAssignment {
        RaceAssignment {
            entry: Pubkey::default(),
            assigned_teams: vec![1, 2, 3],
            cumulative_goals: 0,
            settled_fixtures: vec![],
            created_at: 0,
            updated_at: 0,
            bump: 0,
        }
    }

    #[test]
    fn fixtures_fold_in_exactly_once() {
        let mut assignment = assignment();
        assignment.record_fixture(7, 3, 10).unwrap();
        assignment.record_fixture(8, 2, 11).unwrap();
        assert_eq!(assignment.cumulative_goals, 5);
        assert!(assignment.record_fixture(7, 4, 12).is_err());
        // Rejected replay must not touch the counter.
        assert_eq!(assignment.cumulative_goals, 5);
        assert_eq!(assignment.updated_at, 11);
    }

    #[test]
    fn full_fixture_ledger_rejects_new_fixtures() {
        let mut assignment = assignment();
        for id in 0..MAX_SETTLED_FIXTURES as u64 {
            assignment.record_fixture(id, 0, 0).unwrap();
        }
        assert!(assignment.record_fixture(999, 1, 0).is_err());
        assert_eq!(assignment.settled_fixtures.len(), MAX_SETTLED_FIXTURES);
        assert_eq!(assignment.cumulative_goals, 0);
    }
}
