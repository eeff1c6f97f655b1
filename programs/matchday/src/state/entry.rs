use anchor_lang::prelude::*;

use crate::constants::MAX_ROUNDS;
use crate::errors::MatchdayError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum EntryStatus {
    /// Created at checkout; deleted if the payment session expires.
    PendingPayment,
    /// Paid and playing.
    Active,
    /// Knocked out (Last Man Standing).
    Eliminated,
    /// Finished as a winner, or fully scored (Table Predictor).
    Completed,
    /// Overshot the goal target (Race to 33).
    Bust,
}

impl EntryStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            EntryStatus::Eliminated | EntryStatus::Completed | EntryStatus::Bust
        )
    }
}

/// One user's participation in one game instance. The PDA derivation over
/// (instance, user) is the uniqueness constraint: concurrent creation
/// attempts for the same pair can only ever produce one account.
#[account]
#[derive(InitSpace)]
pub struct Entry {
    /// Wallet that owns this entry.
    pub user: Pubkey,
    /// Instance this entry participates in (back reference, never owned).
    pub game_instance: Pubkey,
    /// Current ledger status.
    pub status: EntryStatus,
    /// Aggregate score (points, or cumulative goals for Race to 33).
    pub current_score: u32,
    /// Leaderboard rank, when one has been computed.
    pub current_position: Option<u16>,
    /// Teams this entry has burned across rounds (Last Man Standing
    /// team-reuse exclusion).
    #[max_len(MAX_ROUNDS)]
    pub teams_picked: Vec<u16>,
    /// Round that eliminated this entry, if any.
    pub eliminated_in_round: Option<u64>,
    /// Whether the prize share has been claimed.
    pub prize_claimed: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of the last mutation.
    pub updated_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Entry {
    pub const SEED: &'static [u8] = b"entry";

    /// Apply a status transition. Without the admin override only the
    /// forward edges of the ledger are legal; with it any state is
    /// reachable, which is what the audited manual path uses.
    pub fn transition(
        &mut self,
        new_status: EntryStatus,
        admin_override: bool,
        now: i64,
    ) -> Result<()> {
        use EntryStatus::*;
        let allowed = admin_override
            || matches!(
                (self.status, new_status),
                (PendingPayment, Active) | (Active, Eliminated) | (Active, Completed) | (Active, Bust)
            );
        require!(allowed, MatchdayError::InvalidStatusTransition);
        self.status = new_status;
        self.updated_at = now;
        Ok(())
    }

    /// Atomic (per-transaction) score increment with overflow protection.
    pub fn add_score(&mut self, delta: u32, now: i64) -> Result<()> {
        self.current_score = self
            .current_score
            .checked_add(delta)
            .ok_or(MatchdayError::MathOverflow)?;
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with(status: EntryStatus) -> Entry {
        Entry {
            user: Pubkey::default(),
            game_instance: Pubkey::default(),
            status,
            current_score: 0,
            current_position: None,
            teams_picked: vec![],
            eliminated_in_round: None,
            prize_claimed: false,
            created_at: 0,
            updated_at: 0,
            bump: 0,
        }
    }

    #[test]
    fn payment_promotes_pending_to_active() {
        let mut entry = entry_with(EntryStatus::PendingPayment);
        assert!(entry.transition(EntryStatus::Active, false, 10).is_ok());
        assert!(entry.status == EntryStatus::Active);
        assert_eq!(entry.updated_at, 10);
    }

    #[test]
    fn active_reaches_all_settlement_outcomes() {
        for target in [
            EntryStatus::Eliminated,
            EntryStatus::Completed,
            EntryStatus::Bust,
        ] {
            let mut entry = entry_with(EntryStatus::Active);
            assert!(entry.transition(target, false, 0).is_ok());
        }
    }

    #[test]
    fn terminal_entries_stay_terminal_without_override() {
        for terminal in [
            EntryStatus::Eliminated,
            EntryStatus::Completed,
            EntryStatus::Bust,
        ] {
            let mut entry = entry_with(terminal);
            assert!(entry.transition(EntryStatus::Active, false, 0).is_err());
        }
    }

    #[test]
    fn override_resurrects_any_state() {
        let mut entry = entry_with(EntryStatus::Bust);
        assert!(entry.transition(EntryStatus::Active, true, 0).is_ok());
        let mut entry = entry_with(EntryStatus::Eliminated);
        assert!(entry.transition(EntryStatus::Completed, true, 0).is_ok());
    }

    #[test]
    fn pending_cannot_jump_to_settlement_outcomes() {
        let mut entry = entry_with(EntryStatus::PendingPayment);
        assert!(entry.transition(EntryStatus::Eliminated, false, 0).is_err());
        assert!(entry.transition(EntryStatus::Bust, false, 0).is_err());
    }

    #[test]
    fn score_increments_accumulate() {
        let mut entry = entry_with(EntryStatus::Active);
        entry.add_score(5, 1).unwrap();
        entry.add_score(2, 2).unwrap();
        assert_eq!(entry.current_score, 7);
        assert!(entry.add_score(u32::MAX, 3).is_err());
        // Failed increment must not corrupt the running total.
        assert_eq!(entry.current_score, 7);
    }
}
