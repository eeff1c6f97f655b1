use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::FixtureResolved;
use crate::state::{Fixture, FixtureStatus, GameInstance, Platform};

#[derive(Accounts)]
pub struct PostFixtureResult<'info> {
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
        seeds = [Fixture::SEED, instance.key().as_ref(), fixture.fixture_id.to_le_bytes().as_ref()],
        bump = fixture.bump,
        constraint = fixture.status == FixtureStatus::Scheduled @ MatchdayError::AlreadyResolved,
    )]
    pub fixture: Account<'info, Fixture>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<PostFixtureResult>, home_score: u8, away_score: u8) -> Result<()> {
    let clock = Clock::get()?;
    let fixture = &mut ctx.accounts.fixture;
    fixture.home_score = home_score;
    fixture.away_score = away_score;
    fixture.status = FixtureStatus::Resolved;
    fixture.resolved_at = clock.unix_timestamp;

    emit!(FixtureResolved {
        instance: ctx.accounts.instance.key(),
        fixture_id: fixture.fixture_id,
        round_id: fixture.round_id,
        home_score,
        away_score,
    });

    Ok(())
}
