use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::MAX_SESSION_ID_LEN;
use crate::errors::MatchdayError;
use crate::events::PaymentConfirmed;
use crate::state::{Entry, EntryStatus, GameInstance, PaymentRecord, Platform};

/// Settle a payment-provider success event: the fee moves into escrow, the
/// entry goes Active, and the prize pool is recomputed — all in one
/// transaction. The PaymentRecord PDA is keyed by the provider session
/// reference, so a replayed event fails on the init instead of activating or
/// counting anything twice.
#[derive(Accounts)]
#[instruction(session_ref: [u8; 32])]
pub struct ConfirmPayment<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status.is_live() @ MatchdayError::InstanceNotActive,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        mut,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::PendingPayment @ MatchdayError::EntryNotPendingPayment,
    )]
    pub entry: Account<'info, Entry>,

    #[account(
        init,
        payer = user,
        space = 8 + PaymentRecord::INIT_SPACE,
        seeds = [PaymentRecord::SEED, session_ref.as_ref()],
        bump,
    )]
    pub payment_record: Account<'info, PaymentRecord>,

    /// User's token account the fee is drawn from.
    #[account(
        mut,
        constraint = user_token_account.owner == user.key(),
        constraint = user_token_account.mint == escrow_token_account.mint,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Escrow token account owned by the instance PDA.
    #[account(
        mut,
        constraint = escrow_token_account.key() == instance.escrow_token_account,
    )]
    pub escrow_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<ConfirmPayment>,
    session_ref: [u8; 32],
    session_id: String,
) -> Result<()> {
    require!(
        session_id.len() <= MAX_SESSION_ID_LEN,
        MatchdayError::SessionIdTooLong
    );
    // The reference must be the hash of the session id, binding the PDA key
    // to the audited provider reference.
    let expected = anchor_lang::solana_program::hash::hash(session_id.as_bytes());
    require!(
        expected.to_bytes() == session_ref,
        MatchdayError::SessionRefMismatch
    );

    let clock = Clock::get()?;
    let entry_fee = ctx.accounts.instance.entry_fee;

    if entry_fee > 0 {
        let transfer_ctx = CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_token_account.to_account_info(),
                to: ctx.accounts.escrow_token_account.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        );
        token::transfer(transfer_ctx, entry_fee)?;
    }

    let entry = &mut ctx.accounts.entry;
    entry.transition(EntryStatus::Active, false, clock.unix_timestamp)?;

    let instance = &mut ctx.accounts.instance;
    instance.paid_entries = instance
        .paid_entries
        .checked_add(1)
        .ok_or(MatchdayError::MathOverflow)?;
    instance.live_entries = instance
        .live_entries
        .checked_add(1)
        .ok_or(MatchdayError::MathOverflow)?;
    instance.recompute_prize_pool()?;

    let platform = &mut ctx.accounts.platform;
    platform.total_collected = platform
        .total_collected
        .checked_add(entry_fee)
        .ok_or(MatchdayError::MathOverflow)?;

    let record = &mut ctx.accounts.payment_record;
    record.user = ctx.accounts.user.key();
    record.entry = entry.key();
    record.game_instance = instance.key();
    record.session_id = session_id.clone();
    record.amount = entry_fee;
    record.paid_at = clock.unix_timestamp;
    record.bump = ctx.bumps.payment_record;

    emit!(PaymentConfirmed {
        instance: instance.key(),
        entry: entry.key(),
        user: ctx.accounts.user.key(),
        session_id,
        amount: entry_fee,
        paid_entries: instance.paid_entries,
        prize_pool: instance.prize_pool,
    });

    Ok(())
}
