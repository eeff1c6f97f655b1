pub mod award_prize;
pub mod create_fixture;
pub mod create_game_definition;
pub mod create_game_instance;
pub mod create_round;
pub mod initialize_platform;
pub mod override_entry;
pub mod post_final_standings;
pub mod post_fixture_result;
pub mod sweep_unclaimed_pool;
pub mod update_instance_status;
pub mod withdraw_take;

pub use award_prize::*;
pub use create_fixture::*;
pub use create_game_definition::*;
pub use create_game_instance::*;
pub use create_round::*;
pub use initialize_platform::*;
pub use override_entry::*;
pub use post_final_standings::*;
pub use post_fixture_result::*;
pub use sweep_unclaimed_pool::*;
pub use update_instance_status::*;
pub use withdraw_take::*;
