pub mod entry;
pub mod fixture;
pub mod game;
pub mod payment;
pub mod pick;
pub mod platform;

pub use entry::*;
pub use fixture::*;
pub use game::*;
pub use payment::*;
pub use pick::*;
pub use platform::*;
