pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::swiss_pairings;
pub use standings::standings;
pub use types::{Pairing, PlayerId, StandingEntry};
