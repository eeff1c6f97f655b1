use anchor_lang::prelude::*;

use crate::events::EntryOverridden;
use crate::state::{Entry, EntryStatus, GameInstance, Platform};

/// Manual admin path: directly overwrite an entry's status and/or score
/// outside the scoring engine. Bypasses the normal transition rules (the
/// override flag on `Entry::transition`) and records prior and new values so
/// overridden results stay distinguishable from engine-computed ones.
#[derive(Accounts)]
pub struct OverrideEntry<'info> {
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
        seeds = [Entry::SEED, instance.key().as_ref(), entry.user.as_ref()],
        bump = entry.bump,
    )]
    pub entry: Account<'info, Entry>,

    pub authority: Signer<'info>,
}

pub fn handler(
    ctx: Context<OverrideEntry>,
    new_status: Option<EntryStatus>,
    new_score: Option<u32>,
) -> Result<()> {
    let clock = Clock::get()?;
    let entry = &mut ctx.accounts.entry;

    let prior_status = entry.status;
    let prior_score = entry.current_score;

    if let Some(status) = new_status {
        entry.transition(status, true, clock.unix_timestamp)?;
    }
    if let Some(score) = new_score {
        entry.current_score = score;
        entry.updated_at = clock.unix_timestamp;
    }

    emit!(EntryOverridden {
        entry: entry.key(),
        prior_status,
        new_status: entry.status,
        prior_score,
        new_score: entry.current_score,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
