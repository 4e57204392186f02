//! Core building blocks: rule constants and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::{
    COMPLETED_RUN_BONUS, FULL_DECK_SIZE, INITIAL_SCORE, MOVE_COST, NUM_COLUMNS, NUM_DECKS,
    NUM_INITIAL_DEALS, NUM_SIDE_DECKS, SIDE_DECK_SIZE, TOTAL_CARDS,
};
pub use rng::GameRng;
