use anchor_lang::prelude::*;

use crate::constants::MAX_SESSION_ID_LEN;

/// Durable idempotency record for one payment-provider success event. The
/// PDA is derived from the provider session reference, so replaying the same
/// event cannot initialize a second record or re-activate anything.
#[account]
#[derive(InitSpace)]
pub struct PaymentRecord {
    /// Wallet that paid.
    pub user: Pubkey,
    /// Entry the payment activated.
    pub entry: Pubkey,
    /// Instance the fee was collected for.
    pub game_instance: Pubkey,
    /// Provider session id, kept verbatim for audit and statistics.
    #[max_len(MAX_SESSION_ID_LEN)]
    pub session_id: String,
    /// Fee amount in minor currency units.
    pub amount: u64,
    /// Unix timestamp of settlement.
    pub paid_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl PaymentRecord {
    pub const SEED: &'static [u8] = b"payment";
}
