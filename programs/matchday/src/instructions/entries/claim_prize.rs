use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::MatchdayError;
use crate::events::PrizeClaimed;
use crate::state::{Entry, EntryStatus, GameInstance, GameKind, InstanceStatus};

/// A winning entry claims its share of the prize pool. Only the game kinds
/// where Completed means "won" pay out here (Last Man Standing, Race to 33);
/// leaderboard games rank their whole field off-chain.
#[derive(Accounts)]
pub struct ClaimPrize<'info> {
    #[account(
        mut,
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status == InstanceStatus::Completed @ MatchdayError::InstanceNotFinished,
        constraint = (instance.kind == GameKind::LastManStanding
            || instance.kind == GameKind::RaceToThirtyThree) @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        mut,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::Completed @ MatchdayError::NotAWinner,
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
        constraint = user_token_account.owner == user.key(),
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The winner (permissionless claim).
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimPrize>) -> Result<()> {
    let instance = &ctx.accounts.instance;
    require!(instance.winners > 0, MatchdayError::NoWinners);

    // Equal split between joint winners; integer dust stays in escrow.
    let share = instance
        .prize_pool
        .checked_div(instance.winners as u64)
        .ok_or(MatchdayError::MathOverflow)?;
    ctx.accounts.instance.register_payout(share)?;

    if share > 0 {
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
        token::transfer(transfer_ctx, share)?;
    }

    let clock = Clock::get()?;
    let entry = &mut ctx.accounts.entry;
    entry.prize_claimed = true;
    entry.updated_at = clock.unix_timestamp;

    emit!(PrizeClaimed {
        instance: ctx.accounts.instance.key(),
        entry: entry.key(),
        user: ctx.accounts.user.key(),
        amount: share,
    });

    Ok(())
}
