use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::StandingsPosted;
use crate::state::{GameInstance, Platform};

#[derive(Accounts)]
pub struct PostFinalStandings<'info> {
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
        constraint = !instance.standings_posted @ MatchdayError::StandingsAlreadyPosted,
    )]
    pub instance: Account<'info, GameInstance>,

    pub authority: Signer<'info>,
}

pub fn handler(
    ctx: Context<PostFinalStandings>,
    ordered_teams: Vec<u16>,
    total_goals: Option<u32>,
) -> Result<()> {
    let instance = &mut ctx.accounts.instance;

    // The posted order must cover exactly the instance team pool.
    require!(
        ordered_teams.len() == instance.team_pool.len(),
        MatchdayError::InvalidPredictedOrder
    );
    for (i, team) in ordered_teams.iter().enumerate() {
        require!(
            instance.team_pool.contains(team),
            MatchdayError::TeamNotInPool
        );
        require!(
            !ordered_teams[..i].contains(team),
            MatchdayError::InvalidPredictedOrder
        );
    }

    instance.final_standings = ordered_teams;
    // Total goals may be missing upstream; settlement degrades to running
    // without tie-break data rather than failing.
    instance.actual_total_goals = total_goals;
    instance.standings_posted = true;

    emit!(StandingsPosted {
        instance: instance.key(),
        team_count: instance.final_standings.len() as u8,
        total_goals,
    });

    Ok(())
}
