use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::MatchdayError;
use crate::events::PrizeAwarded;
use crate::state::{Entry, GameInstance, GameKind, InstanceStatus, Platform};

/// Pay a leaderboard-game prize from the instance escrow. Table Predictor
/// and Weekly Score Predictor rank their whole field off-chain, so the
/// authority attests each winner's share here; the pool accounting caps the
/// sum of awards, so a wrong or replayed attestation can never overdraw the
/// escrow.
#[derive(Accounts)]
pub struct AwardPrize<'info> {
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
        constraint = (instance.kind == GameKind::TablePredictor
            || instance.kind == GameKind::WeeklyScorePredictor) @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        mut,
        seeds = [Entry::SEED, instance.key().as_ref(), entry.user.as_ref()],
        bump = entry.bump,
        constraint = !entry.prize_claimed @ MatchdayError::PrizeAlreadyClaimed,
    )]
    pub entry: Account<'info, Entry>,

    /// Escrow token account owned by the instance PDA.
    #[account(
        mut,
        constraint = escrow_token_account.key() == instance.escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    /// Winner's token account.
    #[account(
        mut,
        constraint = user_token_account.owner == entry.user,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<AwardPrize>, amount: u64) -> Result<()> {
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
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.instance.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)?;
    }

    let clock = Clock::get()?;
    let entry = &mut ctx.accounts.entry;
    entry.prize_claimed = true;
    entry.updated_at = clock.unix_timestamp;

    emit!(PrizeAwarded {
        instance: ctx.accounts.instance.key(),
        entry: entry.key(),
        user: entry.user,
        amount,
        prize_distributed: ctx.accounts.instance.prize_distributed,
    });

    Ok(())
}
