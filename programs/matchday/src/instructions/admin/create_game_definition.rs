use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SLUG_LEN};
use crate::errors::MatchdayError;
use crate::events::GameDefinitionCreated;
use crate::state::{GameDefinition, GameKind, Platform};

#[derive(Accounts)]
#[instruction(name: String, slug: String)]
pub struct CreateGameDefinition<'info> {
    #[account(
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = authority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        init,
        payer = authority,
        space = 8 + GameDefinition::INIT_SPACE,
        seeds = [GameDefinition::SEED, slug.as_bytes()],
        bump,
    )]
    pub definition: Account<'info, GameDefinition>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateGameDefinition>,
    name: String,
    slug: String,
    kind: GameKind,
) -> Result<()> {
    require!(!name.is_empty(), MatchdayError::NameEmpty);
    require!(name.len() <= MAX_NAME_LEN, MatchdayError::NameTooLong);
    require!(!slug.is_empty(), MatchdayError::NameEmpty);
    require!(slug.len() <= MAX_SLUG_LEN, MatchdayError::SlugTooLong);

    let clock = Clock::get()?;
    let definition = &mut ctx.accounts.definition;
    definition.name = name;
    definition.slug = slug.clone();
    definition.kind = kind;
    definition.created_at = clock.unix_timestamp;
    definition.bump = ctx.bumps.definition;

    emit!(GameDefinitionCreated {
        definition: definition.key(),
        slug,
        kind,
    });

    Ok(())
}
