use anchor_lang::prelude::*;

#[error_code]
pub enum MatchdayError {
    // --- validation ---
    #[msg("Name cannot be empty.")]
    NameEmpty,
    #[msg("Name exceeds the maximum length.")]
    NameTooLong,
    #[msg("Slug exceeds the maximum length.")]
    SlugTooLong,
    #[msg("End date must be after the start date.")]
    InvalidSchedule,
    #[msg("Team pool must be non-empty, free of duplicates, and within the size cap.")]
    InvalidTeamPool,
    #[msg("Team is not part of this game instance's team pool.")]
    TeamNotInPool,
    #[msg("Predicted order must be a permutation of the instance team pool.")]
    InvalidPredictedOrder,
    #[msg("Provider session id exceeds the maximum length.")]
    SessionIdTooLong,
    #[msg("Provider session reference does not match the session id.")]
    SessionRefMismatch,
    #[msg("Settlement accounts must be passed as (prediction, entry) pairs.")]
    UnpairedSettlementAccounts,
    #[msg("Serialized account data exceeds its allocation.")]
    SettlementAccountTooSmall,

    // --- deadline guard ---
    #[msg("The pick window for this scoring unit has closed.")]
    PickWindowClosed,

    // --- conflicts ---
    #[msg("Team was already picked by this entry in another round.")]
    TeamAlreadyPicked,
    #[msg("Fixture result has already been posted.")]
    AlreadyResolved,
    #[msg("Final standings have already been posted.")]
    StandingsAlreadyPosted,
    #[msg("This fixture has already been settled for this entry.")]
    FixtureAlreadySettled,
    #[msg("The assignment's settled-fixture ledger is full.")]
    SettledFixtureLedgerFull,
    #[msg("Prize has already been claimed for this entry.")]
    PrizeAlreadyClaimed,
    #[msg("Payout would exceed the remaining prize pool.")]
    PrizePoolExhausted,
    #[msg("Platform take has already been withdrawn for this instance.")]
    TakeAlreadyWithdrawn,

    // --- not found / mismatch ---
    #[msg("Game instance is not of the required kind.")]
    WrongGameKind,

    // --- upstream result availability ---
    #[msg("Fixture result has not been posted yet.")]
    FixtureNotResolved,
    #[msg("Final standings have not been posted yet.")]
    StandingsNotPosted,

    // --- invariants ---
    #[msg("Entry status transition is not allowed.")]
    InvalidStatusTransition,
    #[msg("Game instance status transition is not allowed.")]
    InvalidInstanceTransition,
    #[msg("Entry is not in Active status.")]
    EntryNotActive,
    #[msg("Entry is not awaiting payment.")]
    EntryNotPendingPayment,
    #[msg("Game instance is not in Active status.")]
    InstanceNotActive,
    #[msg("Game instance is not in Cancelled status.")]
    InstanceNotCancelled,
    #[msg("Game instance has not finished.")]
    InstanceNotFinished,
    #[msg("Entry is not a winner of this game instance.")]
    NotAWinner,
    #[msg("Game instance has no recorded winners.")]
    NoWinners,
    #[msg("Game instance recorded winners; the pool pays out via claims.")]
    WinnersRecorded,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
