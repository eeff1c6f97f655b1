use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::MatchdayError;
use crate::events::EntryRefunded;
use crate::state::{Entry, EntryStatus, GameInstance, InstanceStatus};

/// Return a paid entry's fee from escrow after its instance was cancelled,
/// then remove the entry. The prize pool is recomputed under the same
/// transaction as the paid-entry count change.
#[derive(Accounts)]
pub struct RefundEntry<'info> {
    #[account(
        mut,
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status == InstanceStatus::Cancelled @ MatchdayError::InstanceNotCancelled,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        mut,
        close = user,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::Active @ MatchdayError::EntryNotActive,
    )]
    pub entry: Account<'info, Entry>,

    /// Escrow token account owned by the instance PDA.
    #[account(
        mut,
        constraint = escrow_token_account.key() == instance.escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    /// User's token account receiving the refund.
    #[account(
        mut,
        constraint = user_token_account.owner == user.key(),
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RefundEntry>) -> Result<()> {
    let amount = ctx.accounts.instance.entry_fee;

    if amount > 0 {
        let index_bytes = ctx.accounts.instance.index.to_le_bytes();
        let bump_bytes = [ctx.accounts.instance.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[GameInstance::SEED, &index_bytes, &bump_bytes]];

        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_token_account.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.instance.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)?;
    }

    let instance = &mut ctx.accounts.instance;
    instance.paid_entries = instance
        .paid_entries
        .checked_sub(1)
        .ok_or(MatchdayError::MathOverflow)?;
    instance.live_entries = instance.live_entries.saturating_sub(1);
    instance.recompute_prize_pool()?;

    emit!(EntryRefunded {
        instance: instance.key(),
        entry: ctx.accounts.entry.key(),
        user: ctx.accounts.user.key(),
        amount,
        prize_pool: instance.prize_pool,
    });

    Ok(())
}
