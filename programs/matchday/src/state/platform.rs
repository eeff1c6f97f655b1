use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Platform {
    /// Admin who creates games, posts results, and drives settlement.
    pub authority: Pubkey,
    /// Treasury wallet that receives the platform take.
    pub treasury: Pubkey,
    /// Running count of game instances created.
    pub total_instances: u64,
    /// Cumulative entry fees collected across all instances (minor units).
    pub total_collected: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Platform {
    pub const SEED: &'static [u8] = b"platform";
}
