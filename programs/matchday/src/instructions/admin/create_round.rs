use anchor_lang::prelude::*;

use crate::state::{GameInstance, Platform, Round};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CreateRound<'info> {
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
        init,
        payer = authority,
        space = 8 + Round::INIT_SPACE,
        seeds = [Round::SEED, instance.key().as_ref(), round_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: Account<'info, Round>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateRound>, round_id: u64, start_date: i64) -> Result<()> {
    let round = &mut ctx.accounts.round;
    round.game_instance = ctx.accounts.instance.key();
    round.round_id = round_id;
    round.start_date = start_date;
    round.first_kickoff = None;
    round.bump = ctx.bumps.round;

    Ok(())
}
