use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::EntryExpired;
use crate::state::{Entry, EntryStatus, GameInstance, Platform};

/// Payment session expired before completion: the entry never became a
/// participant, so it is deleted outright (rent back to the user).
#[derive(Accounts)]
pub struct ExpireEntry<'info> {
    #[account(
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        mut,
        close = user,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::PendingPayment @ MatchdayError::EntryNotPendingPayment,
    )]
    pub entry: Account<'info, Entry>,

    /// CHECK: Entry owner; receives the closed account's rent.
    #[account(mut, constraint = user.key() == entry.user)]
    pub user: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<ExpireEntry>) -> Result<()> {
    emit!(EntryExpired {
        instance: ctx.accounts.instance.key(),
        entry: ctx.accounts.entry.key(),
        user: ctx.accounts.user.key(),
    });

    Ok(())
}
