use anchor_lang::prelude::*;

use crate::scoring;

/// One scoring round of a game instance. Carries the Deadline Guard inputs:
/// the nominal start date and a watermark of the earliest child kickoff,
/// folded in as fixtures are created.
#[account]
#[derive(InitSpace)]
pub struct Round {
    /// Instance this round belongs to.
    pub game_instance: Pubkey,
    /// Upstream round identifier; PDA seed.
    pub round_id: u64,
    /// Nominal start date from the upstream feed.
    pub start_date: i64,
    /// Earliest kickoff among this round's fixtures, if any were posted.
    pub first_kickoff: Option<i64>,
    /// PDA bump seed.
    pub bump: u8,
}

impl Round {
    pub const SEED: &'static [u8] = b"round";

    /// Instant after which picks for this round are no longer accepted.
    pub fn lock_time(&self) -> i64 {
        scoring::lock_time(self.start_date, self.first_kickoff)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum FixtureStatus {
    /// Known schedule, no result yet.
    Scheduled,
    /// Final result posted; settlement may run against it.
    Resolved,
}

/// One match, mirrored from the upstream feed by the authority.
#[account]
#[derive(InitSpace)]
pub struct Fixture {
    /// Instance this fixture belongs to.
    pub game_instance: Pubkey,
    /// Upstream fixture identifier; PDA seed.
    pub fixture_id: u64,
    /// Round this fixture is played in.
    pub round_id: u64,
    pub home_team: u16,
    pub away_team: u16,
    /// Unix timestamp of kickoff; per-fixture pick lock time.
    pub kickoff: i64,
    pub status: FixtureStatus,
    pub home_score: u8,
    pub away_score: u8,
    /// Unix timestamp the result was posted (0 until resolved).
    pub resolved_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Fixture {
    pub const SEED: &'static [u8] = b"fixture";
}
