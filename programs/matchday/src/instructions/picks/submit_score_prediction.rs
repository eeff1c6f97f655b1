use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::ScorePredictionSubmitted;
use crate::scoring;
use crate::state::{
    Entry, EntryStatus, Fixture, GameInstance, GameKind, InstanceStatus, ScorePrediction,
};

/// Submit a scoreline prediction for one fixture. Write-once per
/// (entry, fixture): the PDA init rejects resubmission.
#[derive(Accounts)]
pub struct SubmitScorePrediction<'info> {
    #[account(
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status == InstanceStatus::Active @ MatchdayError::InstanceNotActive,
        constraint = instance.kind == GameKind::WeeklyScorePredictor @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        seeds = [Fixture::SEED, instance.key().as_ref(), fixture.fixture_id.to_le_bytes().as_ref()],
        bump = fixture.bump,
    )]
    pub fixture: Account<'info, Fixture>,

    #[account(
        mut,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::Active @ MatchdayError::EntryNotActive,
    )]
    pub entry: Account<'info, Entry>,

    #[account(
        init,
        payer = user,
        space = 8 + ScorePrediction::INIT_SPACE,
        seeds = [ScorePrediction::SEED, entry.key().as_ref(), fixture.fixture_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub prediction: Account<'info, ScorePrediction>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SubmitScorePrediction>,
    predicted_home: u8,
    predicted_away: u8,
) -> Result<()> {
    let clock = Clock::get()?;
    let fixture = &ctx.accounts.fixture;

    // Fixture-scoped unit: its kickoff is the lock time.
    require!(
        !scoring::is_locked(clock.unix_timestamp, fixture.kickoff, None),
        MatchdayError::PickWindowClosed
    );

    let entry = &ctx.accounts.entry;
    let prediction = &mut ctx.accounts.prediction;
    prediction.entry = entry.key();
    prediction.fixture_id = fixture.fixture_id;
    prediction.predicted_home = predicted_home;
    prediction.predicted_away = predicted_away;
    prediction.points_awarded = None;
    prediction.created_at = clock.unix_timestamp;
    prediction.bump = ctx.bumps.prediction;

    emit!(ScorePredictionSubmitted {
        entry: entry.key(),
        fixture_id: fixture.fixture_id,
        predicted_home,
        predicted_away,
    });

    Ok(())
}
