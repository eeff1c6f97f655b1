use anchor_lang::prelude::*;

use crate::constants::RACE_TEAM_COUNT;
use crate::errors::MatchdayError;
use crate::events::RaceTeamsAssigned;
use crate::scoring;
use crate::state::{Entry, EntryStatus, GameInstance, GameKind, InstanceStatus, RaceAssignment};

/// Draw this entry's fixed-size team subset for Race to 33. Not a user
/// choice: teams come from a hash over the entry, instance, and current slot,
/// constrained to the instance pool. Exactly once per entry — a second call
/// fails on the PDA init.
#[derive(Accounts)]
pub struct AssignRaceTeams<'info> {
    #[account(
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status == InstanceStatus::Active @ MatchdayError::InstanceNotActive,
        constraint = instance.kind == GameKind::RaceToThirtyThree @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::Active @ MatchdayError::EntryNotActive,
    )]
    pub entry: Account<'info, Entry>,

    #[account(
        init,
        payer = user,
        space = 8 + RaceAssignment::INIT_SPACE,
        seeds = [RaceAssignment::SEED, entry.key().as_ref()],
        bump,
    )]
    pub assignment: Account<'info, RaceAssignment>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AssignRaceTeams>) -> Result<()> {
    let clock = Clock::get()?;
    let instance = &ctx.accounts.instance;

    // Season-scoped unit: assignments lock when the season starts.
    require!(
        !scoring::is_locked(clock.unix_timestamp, instance.start_date, None),
        MatchdayError::PickWindowClosed
    );
    require!(
        instance.team_pool.len() >= RACE_TEAM_COUNT,
        MatchdayError::InvalidTeamPool
    );

    let entry_key = ctx.accounts.entry.key();
    let slot_bytes = clock.slot.to_le_bytes();
    let entropy = anchor_lang::solana_program::hash::hashv(&[
        instance.key().as_ref(),
        entry_key.as_ref(),
        slot_bytes.as_ref(),
    ]);
    let assigned_teams = scoring::select_assigned_teams(
        &entropy.to_bytes(),
        &instance.team_pool,
        RACE_TEAM_COUNT,
    );

    let assignment = &mut ctx.accounts.assignment;
    assignment.entry = entry_key;
    assignment.assigned_teams = assigned_teams.clone();
    assignment.cumulative_goals = 0;
    assignment.settled_fixtures = vec![];
    assignment.created_at = clock.unix_timestamp;
    assignment.updated_at = clock.unix_timestamp;
    assignment.bump = ctx.bumps.assignment;

    emit!(RaceTeamsAssigned {
        entry: entry_key,
        assigned_teams,
    });

    Ok(())
}
