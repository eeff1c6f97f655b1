use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SLUG_LEN, MAX_TEAMS};
use crate::errors::MatchdayError;
use crate::scoring;

/// Scoring family a game definition belongs to.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum GameKind {
    /// Pick one winner per round; a draw or loss eliminates you.
    LastManStanding,
    /// Predict the final league table before the season starts.
    TablePredictor,
    /// Predict exact scorelines fixture by fixture.
    WeeklyScorePredictor,
    /// Assigned teams race a cumulative goal counter to exactly 33.
    RaceToThirtyThree,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum InstanceStatus {
    /// Created, not yet open for entries.
    Pending,
    /// Open: entries, picks, and settlement run against it.
    Active,
    /// Finished; terminal apart from archiving.
    Completed,
    /// Called off; paid entries become refundable.
    Cancelled,
    /// Retired from all listings.
    Archived,
}

impl InstanceStatus {
    /// Payments, settlement, and round finalization only run against a live
    /// instance; once it is Completed or Cancelled the money state is fixed.
    pub fn is_live(self) -> bool {
        matches!(self, InstanceStatus::Active)
    }

    /// Admin-driven transitions. Completed is also set automatically by
    /// settlement for Table Predictor and Last Man Standing.
    pub fn can_transition(self, to: InstanceStatus) -> bool {
        use InstanceStatus::*;
        matches!(
            (self, to),
            (Pending, Active)
                | (Pending, Cancelled)
                | (Active, Completed)
                | (Active, Cancelled)
                | (Completed, Archived)
                | (Cancelled, Archived)
        )
    }
}

/// Static catalog entry. Immutable after creation.
#[account]
#[derive(InitSpace)]
pub struct GameDefinition {
    /// Display name.
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// URL-safe identifier; PDA seed.
    #[max_len(MAX_SLUG_LEN)]
    pub slug: String,
    /// Scoring family.
    pub kind: GameKind,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl GameDefinition {
    pub const SEED: &'static [u8] = b"game_def";
}

/// One running occurrence of a game definition.
#[account]
#[derive(InitSpace)]
pub struct GameInstance {
    /// Sequential instance identifier; PDA seed.
    pub index: u64,
    /// Catalog entry this instance runs.
    pub definition: Pubkey,
    /// Scoring family, denormalized from the definition for handler checks.
    pub kind: GameKind,
    /// Display name.
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    /// Unix timestamp the instance's play starts.
    pub start_date: i64,
    /// Unix timestamp the instance's play ends.
    pub end_date: i64,
    /// Entry fee in minor currency units.
    pub entry_fee: u64,
    /// Derived prize pool; recomputed whenever the paid-entry set changes,
    /// never incremented in place.
    pub prize_pool: u64,
    /// Prize money already paid out of (or swept from) the pool.
    pub prize_distributed: u64,
    /// Current lifecycle status.
    pub status: InstanceStatus,
    /// Round count, when known at creation.
    pub number_of_rounds: Option<u8>,
    /// Teams competing in this instance's season.
    #[max_len(MAX_TEAMS)]
    pub team_pool: Vec<u16>,
    /// Entries that have paid their fee (prize pool basis).
    pub paid_entries: u32,
    /// Entries still alive (Last Man Standing survivor count).
    pub live_entries: u32,
    /// Entries that finished as winners (claim denominator).
    pub winners: u32,
    /// Entries processed by whole-instance settlement (Table Predictor).
    pub entries_settled: u32,
    /// Predictions submitted; the settlement denominator for Table
    /// Predictor. A paid entry that never predicted is not waited for.
    pub predictions_submitted: u32,
    /// Whether final standings have been posted.
    pub standings_posted: bool,
    /// Final season order, posted by the authority once the season ends.
    #[max_len(MAX_TEAMS)]
    pub final_standings: Vec<u16>,
    /// Season total goals, when the upstream feed supplies it. Tie-break
    /// data only; settlement proceeds without it.
    pub actual_total_goals: Option<u32>,
    /// PDA-owned token account holding collected fees.
    pub escrow_token_account: Pubkey,
    /// Whether the platform take has been swept to the treasury.
    pub take_withdrawn: bool,
    /// PDA bump seed.
    pub bump: u8,
}

impl GameInstance {
    pub const SEED: &'static [u8] = b"instance";

    /// Recompute the derived prize pool from the current paid-entry count.
    /// Called inside every instruction that changes that count.
    pub fn recompute_prize_pool(&mut self) -> Result<()> {
        self.prize_pool = scoring::prize_pool(self.entry_fee, self.paid_entries)
            .ok_or(MatchdayError::MathOverflow)?;
        Ok(())
    }

    /// Account for a payout leaving the prize pool. Every escrow debit that
    /// draws on the pool (claims, awarded prizes, the unclaimed sweep) goes
    /// through here, so the pool can never be overdrawn.
    pub fn register_payout(&mut self, amount: u64) -> Result<()> {
        let total = self
            .prize_distributed
            .checked_add(amount)
            .ok_or(MatchdayError::MathOverflow)?;
        require!(total <= self.prize_pool, MatchdayError::PrizePoolExhausted);
        self.prize_distributed = total;
        Ok(())
    }

    /// Whole-instance settlement has processed every submitted prediction.
    pub fn table_settlement_complete(&self) -> bool {
        self.paid_entries > 0 && self.entries_settled >= self.predictions_submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_instance(prize_pool: u64) -> GameInstance {
        GameInstance {
            index: 1,
            definition: Pubkey::default(),
            kind: GameKind::TablePredictor,
            name: String::new(),
            start_date: 0,
            end_date: 1,
            entry_fee: 0,
            prize_pool,
            prize_distributed: 0,
            status: InstanceStatus::Completed,
            number_of_rounds: None,
            team_pool: vec![],
            paid_entries: 0,
            live_entries: 0,
            winners: 0,
            entries_settled: 0,
            predictions_submitted: 0,
            standings_posted: true,
            final_standings: vec![],
            actual_total_goals: None,
            escrow_token_account: Pubkey::default(),
            take_withdrawn: false,
            bump: 0,
        }
    }

    #[test]
    fn payouts_cannot_overdraw_the_pool() {
        let mut instance = completed_instance(100);
        assert!(instance.register_payout(60).is_ok());
        assert!(instance.register_payout(40).is_ok());
        assert!(instance.register_payout(1).is_err());
        // Failed payout must not touch the running total.
        assert_eq!(instance.prize_distributed, 100);
    }

    #[test]
    fn whole_pool_sweep_cannot_repeat() {
        let mut instance = completed_instance(4_000);
        assert!(instance.register_payout(4_000).is_ok());
        assert!(instance.register_payout(4_000).is_err());
    }

    #[test]
    fn missing_predictions_do_not_stall_completion() {
        let mut instance = completed_instance(0);
        instance.paid_entries = 3;
        instance.predictions_submitted = 2;
        instance.entries_settled = 1;
        assert!(!instance.table_settlement_complete());
        // The third paid entry never predicted; two settled entries finish
        // the instance.
        instance.entries_settled = 2;
        assert!(instance.table_settlement_complete());
    }

    #[test]
    fn empty_instances_never_auto_complete() {
        let instance = completed_instance(0);
        assert!(!instance.table_settlement_complete());
    }

    #[test]
    fn only_live_instances_move_money() {
        use InstanceStatus::*;
        assert!(Active.is_live());
        for status in [Pending, Completed, Cancelled, Archived] {
            assert!(!status.is_live());
        }
    }

    #[test]
    fn admin_lifecycle_moves_forward_only() {
        use InstanceStatus::*;
        assert!(Pending.can_transition(Active));
        assert!(Pending.can_transition(Cancelled));
        assert!(Active.can_transition(Completed));
        assert!(Active.can_transition(Cancelled));
        assert!(Completed.can_transition(Archived));
        assert!(Cancelled.can_transition(Archived));
    }

    #[test]
    fn terminal_instances_cannot_be_resurrected() {
        use InstanceStatus::*;
        assert!(!Completed.can_transition(Active));
        assert!(!Cancelled.can_transition(Active));
        assert!(!Archived.can_transition(Active));
        assert!(!Archived.can_transition(Completed));
        assert!(!Active.can_transition(Pending));
    }
}
