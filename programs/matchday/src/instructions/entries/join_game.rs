use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::EntryJoined;
use crate::state::{Entry, EntryStatus, GameInstance, InstanceStatus};

/// Create the user's entry for an instance, awaiting payment. One entry per
/// (instance, user) — the PDA derivation enforces it, so racing duplicate
/// requests cannot create two.
#[derive(Accounts)]
pub struct JoinGame<'info> {
    #[account(
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status == InstanceStatus::Active @ MatchdayError::InstanceNotActive,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        init,
        payer = user,
        space = 8 + Entry::INIT_SPACE,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub entry: Account<'info, Entry>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinGame>) -> Result<()> {
    let clock = Clock::get()?;
    let instance = &ctx.accounts.instance;
    require!(
        clock.unix_timestamp < instance.end_date,
        MatchdayError::PickWindowClosed
    );

    let entry = &mut ctx.accounts.entry;
    entry.user = ctx.accounts.user.key();
    entry.game_instance = instance.key();
    entry.status = EntryStatus::PendingPayment;
    entry.current_score = 0;
    entry.current_position = None;
    entry.teams_picked = vec![];
    entry.eliminated_in_round = None;
    entry.prize_claimed = false;
    entry.created_at = clock.unix_timestamp;
    entry.updated_at = clock.unix_timestamp;
    entry.bump = ctx.bumps.entry;

    emit!(EntryJoined {
        instance: instance.key(),
        entry: entry.key(),
        user: entry.user,
        entry_fee: instance.entry_fee,
    });

    Ok(())
}
