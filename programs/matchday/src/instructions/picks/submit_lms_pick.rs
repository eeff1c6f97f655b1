use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::PickSubmitted;
use crate::scoring;
use crate::state::{
    Entry, EntryStatus, GameInstance, GameKind, InstanceStatus, LastManStandingPick, Round,
};

/// Submit or replace a Last Man Standing pick for a round. Replacing is
/// legal until the round locks; the entry's burned-team list is kept in sync
/// so a team can never be used in two different rounds.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct SubmitLmsPick<'info> {
    #[account(
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status == InstanceStatus::Active @ MatchdayError::InstanceNotActive,
        constraint = instance.kind == GameKind::LastManStanding @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        seeds = [Round::SEED, instance.key().as_ref(), round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::Active @ MatchdayError::EntryNotActive,
    )]
    pub entry: Account<'info, Entry>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + LastManStandingPick::INIT_SPACE,
        seeds = [LastManStandingPick::SEED, entry.key().as_ref(), round_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub pick: Account<'info, LastManStandingPick>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SubmitLmsPick>, round_id: u64, picked_team: u16) -> Result<()> {
    let clock = Clock::get()?;
    let instance = &ctx.accounts.instance;
    let round = &ctx.accounts.round;

    require!(
        !scoring::is_locked(clock.unix_timestamp, round.start_date, round.first_kickoff),
        MatchdayError::PickWindowClosed
    );
    require!(
        instance.team_pool.contains(&picked_team),
        MatchdayError::TeamNotInPool
    );

    let entry = &mut ctx.accounts.entry;
    let pick = &mut ctx.accounts.pick;
    let resubmission = pick.created_at != 0;

    if resubmission {
        // Replacing this round's pick frees the previously burned team.
        entry.teams_picked.retain(|t| *t != pick.picked_team);
    }

    // Team-reuse exclusion across all other rounds of this instance.
    require!(
        !entry.teams_picked.contains(&picked_team),
        MatchdayError::TeamAlreadyPicked
    );
    entry.teams_picked.push(picked_team);
    entry.updated_at = clock.unix_timestamp;

    pick.entry = entry.key();
    pick.round_id = round_id;
    pick.picked_team = picked_team;
    pick.is_correct = None;
    if !resubmission {
        pick.created_at = clock.unix_timestamp;
        pick.bump = ctx.bumps.pick;
    }
    pick.updated_at = clock.unix_timestamp;

    emit!(PickSubmitted {
        entry: entry.key(),
        round_id,
        picked_team,
        resubmission,
    });

    Ok(())
}
