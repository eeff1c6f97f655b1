use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::TablePredictionSubmitted;
use crate::scoring;
use crate::state::{Entry, EntryStatus, GameInstance, GameKind, InstanceStatus, TablePrediction};

/// Submit the one table prediction this entry gets. Write-once: the PDA init
/// fails on a second attempt, keeping the settlement audit trail stable.
#[derive(Accounts)]
pub struct SubmitTablePrediction<'info> {
    #[account(
        mut,
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.status == InstanceStatus::Active @ MatchdayError::InstanceNotActive,
        constraint = instance.kind == GameKind::TablePredictor @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        mut,
        seeds = [Entry::SEED, instance.key().as_ref(), user.key().as_ref()],
        bump = entry.bump,
        constraint = entry.status == EntryStatus::Active @ MatchdayError::EntryNotActive,
    )]
    pub entry: Account<'info, Entry>,

    #[account(
        init,
        payer = user,
        space = 8 + TablePrediction::INIT_SPACE,
        seeds = [TablePrediction::SEED, entry.key().as_ref()],
        bump,
    )]
    pub prediction: Account<'info, TablePrediction>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SubmitTablePrediction>,
    predicted_order: Vec<u16>,
    predicted_total_goals: u32,
) -> Result<()> {
    let clock = Clock::get()?;
    let instance = &ctx.accounts.instance;

    // Season-scoped unit: predictions lock when the season starts.
    require!(
        !scoring::is_locked(clock.unix_timestamp, instance.start_date, None),
        MatchdayError::PickWindowClosed
    );

    // The prediction must order exactly the instance team pool.
    require!(
        predicted_order.len() == instance.team_pool.len(),
        MatchdayError::InvalidPredictedOrder
    );
    for (i, team) in predicted_order.iter().enumerate() {
        require!(
            instance.team_pool.contains(team),
            MatchdayError::TeamNotInPool
        );
        require!(
            !predicted_order[..i].contains(team),
            MatchdayError::InvalidPredictedOrder
        );
    }

    let entry = &ctx.accounts.entry;
    let prediction = &mut ctx.accounts.prediction;
    prediction.entry = entry.key();
    prediction.predicted_order = predicted_order;
    prediction.predicted_total_goals = predicted_total_goals;
    prediction.score = 0;
    prediction.created_at = clock.unix_timestamp;
    prediction.bump = ctx.bumps.prediction;

    // Settlement waits for submitted predictions, not paid entries: a paid
    // entry that never predicts must not stall instance completion.
    let instance = &mut ctx.accounts.instance;
    instance.predictions_submitted = instance
        .predictions_submitted
        .checked_add(1)
        .ok_or(MatchdayError::MathOverflow)?;

    emit!(TablePredictionSubmitted {
        entry: entry.key(),
        predicted_total_goals,
    });

    Ok(())
}
