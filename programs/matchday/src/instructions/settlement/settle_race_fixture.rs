use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::RaceProgressed;
use crate::scoring::{self, RaceOutcome};
use crate::state::{
    Entry, EntryStatus, Fixture, FixtureStatus, GameInstance, GameKind, Platform, RaceAssignment,
};

/// Fold one resolved fixture into one Race to 33 assignment: goals scored by
/// the assigned teams join the cumulative counter, which only ever grows.
/// The fixture id is recorded on the assignment, so settling the same
/// fixture twice for the same entry is rejected instead of double counted.
#[derive(Accounts)]
pub struct SettleRaceFixture<'info> {
    #[account(
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.kind == GameKind::RaceToThirtyThree @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        seeds = [Fixture::SEED, instance.key().as_ref(), fixture.fixture_id.to_le_bytes().as_ref()],
        bump = fixture.bump,
        constraint = fixture.status == FixtureStatus::Resolved @ MatchdayError::FixtureNotResolved,
    )]
    pub fixture: Account<'info, Fixture>,

    #[account(
        mut,
        seeds = [Entry::SEED, instance.key().as_ref(), entry.user.as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::Active @ MatchdayError::EntryNotActive,
    )]
    pub entry: Account<'info, Entry>,

    #[account(
        mut,
        seeds = [RaceAssignment::SEED, entry.key().as_ref()],
        bump = assignment.bump,
    )]
    pub assignment: Account<'info, RaceAssignment>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SettleRaceFixture>) -> Result<()> {
    let clock = Clock::get()?;
    let fixture = &ctx.accounts.fixture;
    let assignment = &mut ctx.accounts.assignment;

    let mut goals_added: u32 = 0;
    if assignment.assigned_teams.contains(&fixture.home_team) {
        goals_added = goals_added
            .checked_add(fixture.home_score as u32)
            .ok_or(MatchdayError::MathOverflow)?;
    }
    if assignment.assigned_teams.contains(&fixture.away_team) {
        goals_added = goals_added
            .checked_add(fixture.away_score as u32)
            .ok_or(MatchdayError::MathOverflow)?;
    }

    assignment.record_fixture(fixture.fixture_id, goals_added, clock.unix_timestamp)?;

    let entry = &mut ctx.accounts.entry;
    entry.current_score = assignment.cumulative_goals;
    entry.updated_at = clock.unix_timestamp;

    // Exactly 33 wins; overshooting busts; under keeps racing.
    match scoring::race_outcome(assignment.cumulative_goals) {
        RaceOutcome::Won => {
            entry.transition(EntryStatus::Completed, false, clock.unix_timestamp)?;
            let instance = &mut ctx.accounts.instance;
            instance.winners = instance
                .winners
                .checked_add(1)
                .ok_or(MatchdayError::MathOverflow)?;
            instance.live_entries = instance.live_entries.saturating_sub(1);
        }
        RaceOutcome::Bust => {
            entry.transition(EntryStatus::Bust, false, clock.unix_timestamp)?;
            let instance = &mut ctx.accounts.instance;
            instance.live_entries = instance.live_entries.saturating_sub(1);
        }
        RaceOutcome::Running => {}
    }

    emit!(RaceProgressed {
        entry: entry.key(),
        fixture_id: fixture.fixture_id,
        goals_added,
        cumulative_goals: assignment.cumulative_goals,
        new_status: entry.status,
    });

    Ok(())
}
