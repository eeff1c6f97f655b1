use anchor_lang::prelude::*;

use super::{try_load, write_back};
use crate::errors::MatchdayError;
use crate::events::{InstanceCompleted, RoundFinalized};
use crate::state::{Entry, EntryStatus, GameInstance, GameKind, LastManStandingPick, Platform, Round};

/// Close out a Last Man Standing round after all of its fixtures have been
/// settled. Two end conditions:
///   - one survivor: that entry wins and the instance completes;
///   - zero survivors: everyone knocked out in this round is reinstated as a
///     joint winner ("last round standing wins") and the instance completes.
/// With two or more survivors the game simply continues.
/// The round's (pick, entry) pairs are streamed in `remaining_accounts`.
#[derive(Accounts)]
pub struct FinalizeLmsRound<'info> {
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
        constraint = instance.status.is_live() @ MatchdayError::InstanceNotActive,
    )]
    pub instance: Account<'info, GameInstance>,

    #[account(
        seeds = [Round::SEED, instance.key().as_ref(), round.round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    pub authority: Signer<'info>,
}

pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, FinalizeLmsRound<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let instance_key = ctx.accounts.instance.key();
    let round_id = ctx.accounts.round.round_id;

    require!(
        ctx.remaining_accounts.len() % 2 == 0,
        MatchdayError::UnpairedSettlementAccounts
    );

    let instance = &mut ctx.accounts.instance;
    let survivors = instance.live_entries;

    for pair in ctx.remaining_accounts.chunks_exact(2) {
        let pick_info = &pair[0];
        let entry_info = &pair[1];

        let Some(pick) = try_load::<LastManStandingPick>(pick_info) else {
            continue;
        };
        let Some(mut entry) = try_load::<Entry>(entry_info) else {
            continue;
        };
        if entry.game_instance != instance_key
            || pick.entry != entry_info.key()
            || pick.round_id != round_id
        {
            continue;
        }

        match survivors {
            0 => {
                // No one made it through: this round's casualties share the
                // win instead.
                if pick.is_correct == Some(false)
                    && entry.status == EntryStatus::Eliminated
                    && entry.eliminated_in_round == Some(round_id)
                {
                    entry.transition(EntryStatus::Completed, true, clock.unix_timestamp)?;
                    instance.winners = instance
                        .winners
                        .checked_add(1)
                        .ok_or(MatchdayError::MathOverflow)?;
                    write_back(entry_info, &entry)?;
                }
            }
            1 => {
                if pick.is_correct == Some(true) && entry.status == EntryStatus::Active {
                    entry.transition(EntryStatus::Completed, false, clock.unix_timestamp)?;
                    instance.winners = instance
                        .winners
                        .checked_add(1)
                        .ok_or(MatchdayError::MathOverflow)?;
                    write_back(entry_info, &entry)?;
                }
            }
            _ => {}
        }
    }

    if survivors <= 1 && instance.winners > 0 {
        instance.status = crate::state::InstanceStatus::Completed;
        emit!(InstanceCompleted {
            instance: instance_key,
            winners: instance.winners,
        });
    }

    emit!(RoundFinalized {
        instance: instance_key,
        round_id,
        survivors,
        winners: instance.winners,
    });

    Ok(())
}
