use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::MatchdayError;
use crate::events::TakeWithdrawn;
use crate::state::{GameInstance, InstanceStatus, Platform};

/// Sweep the platform's 20% take to the treasury once an instance has
/// finished. The take is the collected fees minus the derived prize pool.
#[derive(Accounts)]
pub struct WithdrawTake<'info> {
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
        constraint = !instance.take_withdrawn @ MatchdayError::TakeAlreadyWithdrawn,
    )]
    pub instance: Account<'info, GameInstance>,

    /// Escrow token account owned by the instance PDA.
    #[account(
        mut,
        constraint = escrow_token_account.key() == instance.escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    /// Treasury token account receiving the take.
    #[account(
        mut,
        constraint = treasury_token_account.owner == platform.treasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawTake>) -> Result<()> {
    let instance = &ctx.accounts.instance;

    let collected = instance
        .entry_fee
        .checked_mul(instance.paid_entries as u64)
        .ok_or(MatchdayError::MathOverflow)?;
    let take = collected
        .checked_sub(instance.prize_pool)
        .ok_or(MatchdayError::MathOverflow)?;

    if take > 0 {
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
        token::transfer(transfer_ctx, take)?;
    }

    ctx.accounts.instance.take_withdrawn = true;

    emit!(TakeWithdrawn {
        instance: ctx.accounts.instance.key(),
        amount: take,
    });

    Ok(())
}
