//! Rule constants for the Spider tableau.
//!
//! The engine never hardcodes these values inline - every size, count, and
//! score delta lives here so the global invariants (104 cards total, 10
//! columns, 6 reserve decks) are auditable in one place.

/// Number of full single-suit decks poured into the pool at setup.
///
/// Split evenly across the four suits: two decks per suit.
pub const NUM_DECKS: usize = 8;

/// Number of side decks held back as the reserve.
pub const NUM_SIDE_DECKS: usize = 6;

/// Number of tableau columns.
pub const NUM_COLUMNS: usize = 10;

/// Cards in a full single-suit deck (one card per rank).
pub const FULL_DECK_SIZE: usize = 13;

/// Cards in a side deck (one per column during a deal).
pub const SIDE_DECK_SIZE: usize = 10;

/// Total cards in play after setup, counting columns, reserve, and removed
/// completed runs.
pub const TOTAL_CARDS: usize = NUM_DECKS * FULL_DECK_SIZE;

/// Starting score for a fresh game.
pub const INITIAL_SCORE: i64 = 500;

/// Score awarded when a completed run is removed from a column.
pub const COMPLETED_RUN_BONUS: i64 = 100;

/// Per-move score cost.
///
/// Documented but not enforced: no operation subtracts it. Whether to apply
/// it is an open product decision.
pub const MOVE_COST: i64 = 1;

/// Deals performed by setup after distributing the pool.
pub const NUM_INITIAL_DEALS: usize = 1;
