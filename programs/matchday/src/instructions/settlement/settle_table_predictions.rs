use anchor_lang::prelude::*;

use super::{try_load, write_back};
use crate::errors::MatchdayError;
use crate::events::{InstanceCompleted, TablePredictionScored};
use crate::scoring;
use crate::state::{
    Entry, EntryStatus, GameInstance, GameKind, InstanceStatus, Platform, TablePrediction,
};

/// One-shot, whole-instance settlement for Table Predictor: score each
/// prediction against the posted final standings, complete each entry, and
/// flip the instance to Completed once every paid entry has been processed —
/// and only then, so the completion commits after all entry updates.
/// Predictions and entries arrive as (prediction, entry) pairs in
/// `remaining_accounts`; large fields can be settled across several calls.
#[derive(Accounts)]
pub struct SettleTablePredictions<'info> {
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
        constraint = instance.kind == GameKind::TablePredictor @ MatchdayError::WrongGameKind,
        constraint = instance.standings_posted @ MatchdayError::StandingsNotPosted,
    )]
    pub instance: Account<'info, GameInstance>,

    pub authority: Signer<'info>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, SettleTablePredictions<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let instance_key = ctx.accounts.instance.key();

    require!(
        ctx.remaining_accounts.len() % 2 == 0,
        MatchdayError::UnpairedSettlementAccounts
    );

    let instance = &mut ctx.accounts.instance;

    for pair in ctx.remaining_accounts.chunks_exact(2) {
        let prediction_info = &pair[0];
        let entry_info = &pair[1];

        let Some(mut prediction) = try_load::<TablePrediction>(prediction_info) else {
            continue;
        };
        let Some(mut entry) = try_load::<Entry>(entry_info) else {
            continue;
        };

        if entry.game_instance != instance_key || prediction.entry != entry_info.key() {
            continue;
        }
        // Completed entries were settled in an earlier call of this pass.
        if entry.status != EntryStatus::Active {
            continue;
        }

        let score = scoring::table_score(&prediction.predicted_order, &instance.final_standings);
        prediction.score = score;
        entry.current_score = score;
        entry.transition(EntryStatus::Completed, false, clock.unix_timestamp)?;
        instance.entries_settled = instance
            .entries_settled
            .checked_add(1)
            .ok_or(MatchdayError::MathOverflow)?;

        write_back(prediction_info, &prediction)?;
        write_back(entry_info, &entry)?;

        emit!(TablePredictionScored {
            entry: entry_info.key(),
            score,
        });
    }

    // Whole-instance completion, strictly after all entry updates. The
    // denominator is submitted predictions: paid entries that never
    // predicted settle implicitly at zero.
    if instance.table_settlement_complete() && instance.status == InstanceStatus::Active {
        instance.status = InstanceStatus::Completed;
        emit!(InstanceCompleted {
            instance: instance_key,
            winners: instance.winners,
        });
    }

    Ok(())
}
