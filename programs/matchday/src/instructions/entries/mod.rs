pub mod claim_prize;
pub mod confirm_payment;
pub mod expire_entry;
pub mod join_game;
pub mod refund_entry;

pub use claim_prize::*;
pub use confirm_payment::*;
pub use expire_entry::*;
pub use join_game::*;
pub use refund_entry::*;
