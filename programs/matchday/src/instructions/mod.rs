pub mod admin;
pub mod entries;
pub mod picks;
pub mod settlement;

pub use admin::*;
pub use entries::*;
pub use picks::*;
pub use settlement::*;
