use anchor_lang::prelude::*;

use super::{try_load, write_back};
use crate::errors::MatchdayError;
use crate::events::PickSettled;
use crate::scoring;
use crate::state::{
    Entry, EntryStatus, Fixture, FixtureStatus, GameInstance, GameKind, LastManStandingPick,
    Platform,
};

/// Settle every Last Man Standing pick that named a side of one resolved
/// fixture. Picks and their entries are streamed as (pick, entry) pairs in
/// `remaining_accounts`; ineligible or already-settled pairs are skipped so
/// one bad account never aborts the rest of the pass.
#[derive(Accounts)]
pub struct SettleLmsFixture<'info> {
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
        constraint = instance.kind == GameKind::LastManStanding @ MatchdayError::WrongGameKind,
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

pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, SettleLmsFixture<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let instance_key = ctx.accounts.instance.key();
    let fixture = &ctx.accounts.fixture;
    let winner = scoring::fixture_winner(
        fixture.home_team,
        fixture.away_team,
        fixture.home_score,
        fixture.away_score,
    );

    require!(
        ctx.remaining_accounts.len() % 2 == 0,
        MatchdayError::UnpairedSettlementAccounts
    );

    let instance = &mut ctx.accounts.instance;
    for pair in ctx.remaining_accounts.chunks_exact(2) {
        let pick_info = &pair[0];
        let entry_info = &pair[1];

        let Some(mut pick) = try_load::<LastManStandingPick>(pick_info) else {
            continue;
        };
        let Some(mut entry) = try_load::<Entry>(entry_info) else {
            continue;
        };

        // Pair integrity and eligibility; skip, never abort.
        if entry.game_instance != instance_key || pick.entry != entry_info.key() {
            continue;
        }
        if pick.round_id != fixture.round_id {
            continue;
        }
        if pick.picked_team != fixture.home_team && pick.picked_team != fixture.away_team {
            continue;
        }
        // Already settled: re-running the pass is a no-op.
        if pick.is_correct.is_some() || entry.status != EntryStatus::Active {
            continue;
        }

        let correct = winner == Some(pick.picked_team);
        pick.is_correct = Some(correct);
        pick.updated_at = clock.unix_timestamp;

        if !correct {
            // A draw or a loss eliminates from the next round onward.
            entry.transition(EntryStatus::Eliminated, false, clock.unix_timestamp)?;
            entry.eliminated_in_round = Some(fixture.round_id);
            instance.live_entries = instance.live_entries.saturating_sub(1);
        }

        write_back(pick_info, &pick)?;
        write_back(entry_info, &entry)?;

        emit!(PickSettled {
            entry: entry_info.key(),
            round_id: fixture.round_id,
            fixture_id: fixture.fixture_id,
            picked_team: pick.picked_team,
            is_correct: correct,
        });
    }

    Ok(())
}
