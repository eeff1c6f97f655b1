use anchor_lang::prelude::*;

use super::{try_load, write_back};
use crate::errors::MatchdayError;
use crate::events::PointsAwarded;
use crate::scoring;
use crate::state::{
    Entry, EntryStatus, Fixture, FixtureStatus, GameInstance, GameKind, Platform, ScorePrediction,
};

/// Score every Weekly Score Predictor prediction for one resolved fixture.
/// Points land on the prediction row AND increment the entry's running score
/// in the same transaction; the non-null `points_awarded` marker makes a
/// repeated pass for the same fixture a no-op instead of a double count.
#[derive(Accounts)]
pub struct SettleFixtureScores<'info> {
    #[account(
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [GameInstance::SEED, instance.index.to_le_bytes().as_ref()],
        bump = instance.bump,
        constraint = instance.kind == GameKind::WeeklyScorePredictor @ MatchdayError::WrongGameKind,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        seeds = [Fixture::SEED, instance.key().as_ref(), fixture.fixture_id.to_le_bytes().as_ref()],
        bump = fixture.bump,
        constraint = fixture.status == FixtureStatus::Resolved @ MatchdayError::FixtureNotResolved,
    )]
    pub fixture: Account<'info, Fixture>,

    pub authority: Signer<'info>,
}

pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, SettleFixtureScores<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let instance_key = ctx.accounts.instance.key();
    let fixture = &ctx.accounts.fixture;

    require!(
        ctx.remaining_accounts.len() % 2 == 0,
        MatchdayError::UnpairedSettlementAccounts
    );

    for pair in ctx.remaining_accounts.chunks_exact(2) {
        let prediction_info = &pair[0];
        let entry_info = &pair[1];

        let Some(mut prediction) = try_load::<ScorePrediction>(prediction_info) else {
            continue;
        };
        let Some(mut entry) = try_load::<Entry>(entry_info) else {
            continue;
        };

        if entry.game_instance != instance_key || prediction.entry != entry_info.key() {
            continue;
        }
        if prediction.fixture_id != fixture.fixture_id {
            continue;
        }
        // Already awarded: skip, never re-increment.
        if prediction.points_awarded.is_some() || entry.status != EntryStatus::Active {
            continue;
        }

        let points = scoring::score_prediction_points(
            prediction.predicted_home,
            prediction.predicted_away,
            fixture.home_score,
            fixture.away_score,
        );
        prediction.points_awarded = Some(points as u8);
        entry.add_score(points, clock.unix_timestamp)?;

        write_back(prediction_info, &prediction)?;
        write_back(entry_info, &entry)?;

        emit!(PointsAwarded {
            entry: entry_info.key(),
            fixture_id: fixture.fixture_id,
            points: points as u8,
            new_score: entry.current_score,
        });
    }

    Ok(())
}
