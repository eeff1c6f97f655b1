use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::MatchdayError;
use crate::events::UnclaimedPoolSwept;
use crate::state::{GameInstance, GameKind, InstanceStatus, Platform};

/// Sweep the prize pool of a winnerless instance to the treasury. A Last Man
/// Standing or Race to 33 instance can finish with nobody to pay (every
/// entry eliminated before the last round was even played, or every racer
/// bust); its pool would otherwise sit in escrow with no claimant forever.
#[derive(Accounts)]
pub struct SweepUnclaimedPool<'info> {
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
        constraint = instance.status == InstanceStatus::Completed @ MatchdayError::InstanceNotFinished,
        constraint = (instance.kind == GameKind::LastManStanding
            || instance.kind == GameKind::RaceToThirtyThree) @ MatchdayError::WrongGameKind,
        constraint = instance.winners == 0 @ MatchdayError::WinnersRecorded,
    )]
    pub instance: Account<'info, GameInstance>,

    /// Escrow token account owned by the instance PDA.
    #[account(
        mut,
        constraint = escrow_token_account.key() == instance.escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    /// Treasury token account receiving the sweep.
    #[account(
        mut,
        constraint = treasury_token_account.owner == platform.treasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<SweepUnclaimedPool>) -> Result<()> {
    let amount = ctx.accounts.instance.prize_pool;
    // Running the sweep twice fails here: the first pass distributed the
    // whole pool.
    ctx.accounts.instance.register_payout(amount)?;

    if amount > 0 {
        let instance = &ctx.accounts.instance;
        let index_bytes = instance.index.to_le_bytes();
        let bump_bytes = [instance.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[GameInstance::SEED, &index_bytes, &bump_bytes]];

        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_token_account.to_account_info(),
                to: ctx.accounts.treasury_token_account.to_account_info(),
                authority: ctx.accounts.instance.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)?;
    }

    emit!(UnclaimedPoolSwept {
        instance: ctx.accounts.instance.key(),
        amount,
    });

    Ok(())
}
