//! Program-wide tunables. Scoring tables mirror the published game rules;
//! size caps bound account space for `InitSpace`.

/// Share of collected entry fees that forms the prize pool (basis points).
pub const PRIZE_POOL_BPS: u64 = 8_000;
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Race to 33: target the cumulative goal counter must hit exactly.
pub const RACE_TARGET_GOALS: u32 = 33;
/// Race to 33: number of teams assigned to each entry.
pub const RACE_TEAM_COUNT: usize = 3;

/// Weekly Score Predictor: exact scoreline match.
pub const EXACT_SCORE_POINTS: u32 = 5;
/// Weekly Score Predictor: correct result sign, wrong scoreline.
pub const CORRECT_RESULT_POINTS: u32 = 2;

/// Table Predictor: points by absolute position difference (0, 1, 2, 3).
/// Differences of four or more score nothing.
pub const TABLE_POINTS_BY_DIFF: [u32; 4] = [25, 15, 10, 5];

/// Largest league the program accepts as a team pool.
pub const MAX_TEAMS: usize = 24;
/// Rounds in the longest supported season; also caps an entry's pick history.
pub const MAX_ROUNDS: usize = 38;
/// Cap on the per-assignment settled-fixture ledger (3 teams x 38 rounds,
/// rounded up).
pub const MAX_SETTLED_FIXTURES: usize = 128;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_SLUG_LEN: usize = 32;
pub const MAX_SESSION_ID_LEN: usize = 64;
