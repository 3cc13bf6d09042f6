pub mod actions;
pub mod assertions;
pub mod builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::{play_darts, play_darts_collecting};
#[allow(unused_imports)]
pub use assertions::PlayerAssertion;
#[allow(unused_imports)]
pub use builders::{dart, roster, MatchBuilder};
