use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::state::{Fixture, FixtureStatus, GameInstance, Platform, Round};

#[derive(Accounts)]
#[instruction(fixture_id: u64)]
pub struct CreateFixture<'info> {
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
        seeds = [Round::SEED, instance.key().as_ref(), round.round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        init,
        payer = authority,
        space = 8 + Fixture::INIT_SPACE,
        seeds = [Fixture::SEED, instance.key().as_ref(), fixture_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub fixture: Account<'info, Fixture>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateFixture>,
    fixture_id: u64,
    home_team: u16,
    away_team: u16,
    kickoff: i64,
) -> Result<()> {
    let instance = &ctx.accounts.instance;
    require!(
        instance.team_pool.contains(&home_team) && instance.team_pool.contains(&away_team),
        MatchdayError::TeamNotInPool
    );

    let round = &mut ctx.accounts.round;
    let fixture = &mut ctx.accounts.fixture;
    fixture.game_instance = instance.key();
    fixture.fixture_id = fixture_id;
    fixture.round_id = round.round_id;
    fixture.home_team = home_team;
    fixture.away_team = away_team;
    fixture.kickoff = kickoff;
    fixture.status = FixtureStatus::Scheduled;
    fixture.home_score = 0;
    fixture.away_score = 0;
    fixture.resolved_at = 0;
    fixture.bump = ctx.bumps.fixture;

    // Fold the kickoff into the round's Deadline Guard watermark: the round
    // locks at its earliest kickoff even when the feed's nominal start date
    // lags behind it.
    round.first_kickoff = Some(match round.first_kickoff {
        Some(existing) => existing.min(kickoff),
        None => kickoff,
    });

    Ok(())
}
