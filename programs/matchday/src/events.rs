use anchor_lang::prelude::*;

use crate::state::{EntryStatus, GameKind, InstanceStatus};

#[event]
pub struct GameDefinitionCreated {
    pub definition: Pubkey,
    pub slug: String,
    pub kind: GameKind,
}

#[event]
pub struct GameInstanceCreated {
    pub instance: Pubkey,
    pub index: u64,
    pub kind: GameKind,
    pub entry_fee: u64,
    pub start_date: i64,
    pub end_date: i64,
}

#[event]
pub struct InstanceStatusChanged {
    pub instance: Pubkey,
    pub prior_status: InstanceStatus,
    pub new_status: InstanceStatus,
}

#[event]
pub struct FixtureResolved {
    pub instance: Pubkey,
    pub fixture_id: u64,
    pub round_id: u64,
    pub home_score: u8,
    pub away_score: u8,
}

#[event]
pub struct StandingsPosted {
    pub instance: Pubkey,
    pub team_count: u8,
    pub total_goals: Option<u32>,
}

#[event]
pub struct EntryJoined {
    pub instance: Pubkey,
    pub entry: Pubkey,
    pub user: Pubkey,
    pub entry_fee: u64,
}

#[event]
pub struct PaymentConfirmed {
    pub instance: Pubkey,
    pub entry: Pubkey,
    pub user: Pubkey,
    pub session_id: String,
    pub amount: u64,
    pub paid_entries: u32,
    pub prize_pool: u64,
}

#[event]
pub struct EntryExpired {
    pub instance: Pubkey,
    pub entry: Pubkey,
    pub user: Pubkey,
}

#[event]
pub struct EntryRefunded {
    pub instance: Pubkey,
    pub entry: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub prize_pool: u64,
}

#[event]
pub struct PickSubmitted {
    pub entry: Pubkey,
    pub round_id: u64,
    pub picked_team: u16,
    pub resubmission: bool,
}

#[event]
pub struct TablePredictionSubmitted {
    pub entry: Pubkey,
    pub predicted_total_goals: u32,
}

#[event]
pub struct ScorePredictionSubmitted {
    pub entry: Pubkey,
    pub fixture_id: u64,
    pub predicted_home: u8,
    pub predicted_away: u8,
}

#[event]
pub struct RaceTeamsAssigned {
    pub entry: Pubkey,
    pub assigned_teams: Vec<u16>,
}

#[event]
pub struct PickSettled {
    pub entry: Pubkey,
    pub round_id: u64,
    pub fixture_id: u64,
    pub picked_team: u16,
    pub is_correct: bool,
}

#[event]
pub struct PointsAwarded {
    pub entry: Pubkey,
    pub fixture_id: u64,
    pub points: u8,
    pub new_score: u32,
}

#[event]
pub struct TablePredictionScored {
    pub entry: Pubkey,
    pub score: u32,
}

#[event]
pub struct RaceProgressed {
    pub entry: Pubkey,
    pub fixture_id: u64,
    pub goals_added: u32,
    pub cumulative_goals: u32,
    pub new_status: EntryStatus,
}

#[event]
pub struct RoundFinalized {
    pub instance: Pubkey,
    pub round_id: u64,
    pub survivors: u32,
    pub winners: u32,
}

#[event]
pub struct InstanceCompleted {
    pub instance: Pubkey,
    pub winners: u32,
}

/// Manual admin path: bypasses the scoring engine, so prior and new values
/// are both recorded to keep overrides distinguishable from engine results.
#[event]
pub struct EntryOverridden {
    pub entry: Pubkey,
    pub prior_status: EntryStatus,
    pub new_status: EntryStatus,
    pub prior_score: u32,
    pub new_score: u32,
    pub timestamp: i64,
}

#[event]
pub struct PrizeClaimed {
    pub instance: Pubkey,
    pub entry: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
}

/// Authority-attested leaderboard payout (Table Predictor, Weekly Score
/// Predictor); the running distributed total makes over-award auditable.
#[event]
pub struct PrizeAwarded {
    pub instance: Pubkey,
    pub entry: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub prize_distributed: u64,
}

#[event]
pub struct UnclaimedPoolSwept {
    pub instance: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TakeWithdrawn {
    pub instance: Pubkey,
    pub amount: u64,
}
