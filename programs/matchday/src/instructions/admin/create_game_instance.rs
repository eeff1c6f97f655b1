use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_NAME_LEN, MAX_TEAMS};
use crate::errors::MatchdayError;
use crate::events::GameInstanceCreated;
use crate::state::{GameDefinition, GameInstance, InstanceStatus, Platform};

#[derive(Accounts)]
pub struct CreateGameInstance<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [GameDefinition::SEED, definition.slug.as_bytes()],
        bump = definition.bump,
    )]
    pub definition: Account<'info, GameDefinition>,

    #[account(
        init,
        payer = authority,
        space = 8 + GameInstance::INIT_SPACE,
        seeds = [GameInstance::SEED, (platform.total_instances + 1).to_le_bytes().as_ref()],
        bump,
    )]
    pub instance: Account<'info, GameInstance>,

    /// Escrow token account owned by the instance PDA; collects entry fees.
    #[account(
        init,
        payer = authority,
        associated_token::mint = fee_mint,
        associated_token::authority = instance,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    /// Mint entry fees are denominated in.
    pub fee_mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(
    ctx: Context<CreateGameInstance>,
    name: String,
    start_date: i64,
    end_date: i64,
    entry_fee: u64,
    number_of_rounds: Option<u8>,
    team_pool: Vec<u16>,
) -> Result<()> {
    require!(!name.is_empty(), MatchdayError::NameEmpty);
    require!(name.len() <= MAX_NAME_LEN, MatchdayError::NameTooLong);
    require!(end_date > start_date, MatchdayError::InvalidSchedule);
    require!(
        !team_pool.is_empty() && team_pool.len() <= MAX_TEAMS,
        MatchdayError::InvalidTeamPool
    );
    for (i, team) in team_pool.iter().enumerate() {
        require!(
            !team_pool[..i].contains(team),
            MatchdayError::InvalidTeamPool
        );
    }

    let platform = &mut ctx.accounts.platform;
    let index = platform
        .total_instances
        .checked_add(1)
        .ok_or(MatchdayError::MathOverflow)?;
    platform.total_instances = index;

    let instance = &mut ctx.accounts.instance;
    instance.index = index;
    instance.definition = ctx.accounts.definition.key();
    instance.kind = ctx.accounts.definition.kind;
    instance.name = name;
    instance.start_date = start_date;
    instance.end_date = end_date;
    instance.entry_fee = entry_fee;
    instance.prize_pool = 0;
    instance.prize_distributed = 0;
    instance.status = InstanceStatus::Pending;
    instance.number_of_rounds = number_of_rounds;
    instance.team_pool = team_pool;
    instance.paid_entries = 0;
    instance.live_entries = 0;
    instance.winners = 0;
    instance.entries_settled = 0;
    instance.predictions_submitted = 0;
    instance.standings_posted = false;
    instance.final_standings = vec![];
    instance.actual_total_goals = None;
    instance.escrow_token_account = ctx.accounts.escrow_token_account.key();
    instance.take_withdrawn = false;
    instance.bump = ctx.bumps.instance;

    emit!(GameInstanceCreated {
        instance: instance.key(),
        index,
        kind: instance.kind,
        entry_fee,
        start_date,
        end_date,
    });

    Ok(())
}
