use anchor_lang::prelude::*;

use crate::errors::MatchdayError;
use crate::events::InstanceStatusChanged;
use crate::state::{GameInstance, InstanceStatus, Platform};

#[derive(Accounts)]
pub struct UpdateInstanceStatus<'info> {
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
    )]
    pub instance: Account<'info, GameInstance>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateInstanceStatus>, new_status: InstanceStatus) -> Result<()> {
    let instance = &mut ctx.accounts.instance;
    let prior_status = instance.status;
    require!(
        prior_status.can_transition(new_status),
        MatchdayError::InvalidInstanceTransition
    );
    instance.status = new_status;

    emit!(InstanceStatusChanged {
        instance: instance.key(),
        prior_status,
        new_status,
    });

    Ok(())
}
