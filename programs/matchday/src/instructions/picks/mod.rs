pub mod assign_race_teams;
pub mod submit_lms_pick;
pub mod submit_score_prediction;
pub mod submit_table_prediction;

pub use assign_race_teams::*;
pub use submit_lms_pick::*;
pub use submit_score_prediction::*;
pub use submit_table_prediction::*;
