use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod scoring;
pub mod state;

use instructions::*;
use state::{EntryStatus, GameKind, InstanceStatus};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod matchday {
    use super::*;

    // --- PLATFORM & CATALOG ---

    /// One-time platform initialization.
    pub fn initialize_platform(ctx: Context<InitializePlatform>) -> Result<()> {
        instructions::initialize_platform::handler(ctx)
    }

    /// Register a game in the static catalog.
    pub fn create_game_definition(
        ctx: Context<CreateGameDefinition>,
        name: String,
        slug: String,
        kind: GameKind,
    ) -> Result<()> {
        instructions::create_game_definition::handler(ctx, name, slug, kind)
    }

    /// Open one running occurrence of a catalog game, with its own schedule,
    /// fee, team pool, and escrow.
    pub fn create_game_instance(
        ctx: Context<CreateGameInstance>,
        name: String,
        start_date: i64,
        end_date: i64,
        entry_fee: u64,
        number_of_rounds: Option<u8>,
        team_pool: Vec<u16>,
    ) -> Result<()> {
        instructions::create_game_instance::handler(
            ctx,
            name,
            start_date,
            end_date,
            entry_fee,
            number_of_rounds,
            team_pool,
        )
    }

    /// Admin-driven instance lifecycle transition.
    pub fn update_instance_status(
        ctx: Context<UpdateInstanceStatus>,
        new_status: InstanceStatus,
    ) -> Result<()> {
        instructions::update_instance_status::handler(ctx, new_status)
    }

    // --- SCHEDULE & RESULTS (sports-data mirror) ---

    /// Mirror one round of the upstream schedule.
    pub fn create_round(ctx: Context<CreateRound>, round_id: u64, start_date: i64) -> Result<()> {
        instructions::create_round::handler(ctx, round_id, start_date)
    }

    /// Mirror one fixture; its kickoff tightens the round's pick deadline.
    pub fn create_fixture(
        ctx: Context<CreateFixture>,
        fixture_id: u64,
        home_team: u16,
        away_team: u16,
        kickoff: i64,
    ) -> Result<()> {
        instructions::create_fixture::handler(ctx, fixture_id, home_team, away_team, kickoff)
    }

    /// Post a fixture's final score; settlement runs against resolved
    /// fixtures only.
    pub fn post_fixture_result(
        ctx: Context<PostFixtureResult>,
        home_score: u8,
        away_score: u8,
    ) -> Result<()> {
        instructions::post_fixture_result::handler(ctx, home_score, away_score)
    }

    /// Post the final season standings (and total goals when the feed has
    /// it) for Table Predictor settlement.
    pub fn post_final_standings(
        ctx: Context<PostFinalStandings>,
        ordered_teams: Vec<u16>,
        total_goals: Option<u32>,
    ) -> Result<()> {
        instructions::post_final_standings::handler(ctx, ordered_teams, total_goals)
    }

    // --- ENTRIES & PAYMENTS ---

    /// Create the caller's entry for an instance, awaiting payment.
    pub fn join_game(ctx: Context<JoinGame>) -> Result<()> {
        instructions::join_game::handler(ctx)
    }

    /// Settle a payment-provider success event: fee into escrow, entry
    /// Active, prize pool recomputed. Idempotent per provider session.
    pub fn confirm_payment(
        ctx: Context<ConfirmPayment>,
        session_ref: [u8; 32],
        session_id: String,
    ) -> Result<()> {
        instructions::confirm_payment::handler(ctx, session_ref, session_id)
    }

    /// Payment session expired: delete the never-paid entry.
    pub fn expire_entry(ctx: Context<ExpireEntry>) -> Result<()> {
        instructions::expire_entry::handler(ctx)
    }

    /// Refund a paid entry after its instance was cancelled.
    pub fn refund_entry(ctx: Context<RefundEntry>) -> Result<()> {
        instructions::refund_entry::handler(ctx)
    }

    /// Winner claims their share of the prize pool.
    pub fn claim_prize(ctx: Context<ClaimPrize>) -> Result<()> {
        instructions::claim_prize::handler(ctx)
    }

    /// Sweep the platform take to the treasury once an instance completes.
    pub fn withdraw_take(ctx: Context<WithdrawTake>) -> Result<()> {
        instructions::withdraw_take::handler(ctx)
    }

    /// Pay an authority-attested leaderboard prize (Table Predictor, Weekly
    /// Score Predictor) from the instance escrow.
    pub fn award_prize(ctx: Context<AwardPrize>, amount: u64) -> Result<()> {
        instructions::award_prize::handler(ctx, amount)
    }

    /// Sweep the prize pool of a winnerless instance to the treasury.
    pub fn sweep_unclaimed_pool(ctx: Context<SweepUnclaimedPool>) -> Result<()> {
        instructions::sweep_unclaimed_pool::handler(ctx)
    }

    // --- PICKS & PREDICTIONS ---

    /// Submit or replace a Last Man Standing pick before the round locks.
    pub fn submit_lms_pick(
        ctx: Context<SubmitLmsPick>,
        round_id: u64,
        picked_team: u16,
    ) -> Result<()> {
        instructions::submit_lms_pick::handler(ctx, round_id, picked_team)
    }

    /// Submit the entry's one table prediction (write-once).
    pub fn submit_table_prediction(
        ctx: Context<SubmitTablePrediction>,
        predicted_order: Vec<u16>,
        predicted_total_goals: u32,
    ) -> Result<()> {
        instructions::submit_table_prediction::handler(ctx, predicted_order, predicted_total_goals)
    }

    /// Submit a scoreline prediction for one fixture (write-once).
    pub fn submit_score_prediction(
        ctx: Context<SubmitScorePrediction>,
        predicted_home: u8,
        predicted_away: u8,
    ) -> Result<()> {
        instructions::submit_score_prediction::handler(ctx, predicted_home, predicted_away)
    }

    /// Draw the entry's Race to 33 team subset (assigned exactly once).
    pub fn assign_race_teams(ctx: Context<AssignRaceTeams>) -> Result<()> {
        instructions::assign_race_teams::handler(ctx)
    }

    // --- SETTLEMENT ---

    /// Settle Last Man Standing picks against one resolved fixture.
    pub fn settle_lms_fixture<'info>(
        ctx: Context<'_, '_, '_, 'info, SettleLmsFixture<'info>>,
    ) -> Result<()> {
        instructions::settle_lms_fixture::handler(ctx)
    }

    /// Close out a Last Man Standing round: declare the winner, or reinstate
    /// the round's casualties as joint winners when nobody survived.
    pub fn finalize_lms_round<'info>(
        ctx: Context<'_, '_, '_, 'info, FinalizeLmsRound<'info>>,
    ) -> Result<()> {
        instructions::finalize_lms_round::handler(ctx)
    }

    /// Score Weekly Score Predictor predictions for one resolved fixture.
    pub fn settle_fixture_scores<'info>(
        ctx: Context<'_, '_, '_, 'info, SettleFixtureScores<'info>>,
    ) -> Result<()> {
        instructions::settle_fixture_scores::handler(ctx)
    }

    /// Score table predictions against the posted final standings and
    /// complete the instance once every paid entry is processed.
    pub fn settle_table_predictions<'info>(
        ctx: Context<'_, '_, '_, 'info, SettleTablePredictions<'info>>,
    ) -> Result<()> {
        instructions::settle_table_predictions::handler(ctx)
    }

    /// Fold one resolved fixture into one Race to 33 assignment.
    pub fn settle_race_fixture(ctx: Context<SettleRaceFixture>) -> Result<()> {
        instructions::settle_race_fixture::handler(ctx)
    }

    /// Manual admin override of an entry's status/score, audited with prior
    /// and new values.
    pub fn override_entry(
        ctx: Context<OverrideEntry>,
        new_status: Option<EntryStatus>,
        new_score: Option<u32>,
    ) -> Result<()> {
        instructions::override_entry::handler(ctx, new_status, new_score)
    }
}
