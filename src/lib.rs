//! # spider-engine
//!
//! A rules engine for a Spider-style solitaire card game: deck pool, ten
//! tableau columns, run-sequencing rules, reveal-on-uncover semantics,
//! completed-run detection, and scoring.
//!
//! ## Design Principles
//!
//! 1. **Engine-owned state**: all card movement goes through [`GameEngine`]
//!    methods; nothing outside the engine mutates a column.
//!
//! 2. **No partial application**: every operation either applies fully or
//!    returns an [`EngineError`] with the board untouched.
//!
//! 3. **Deterministic deals**: the board layout is a pure function of one
//!    seed, so any game can be replayed.
//!
//! ## Rules at a glance
//!
//! - A candidate run may leave a column only as a face-up, same-suit,
//!   descending-by-one sequence; a lone face-up card always qualifies.
//! - A run may land on an empty column or on a face-up card ranking exactly
//!   one above the run's bottom card - destination suit is deliberately not
//!   checked.
//! - A fully exposed ace-to-king run of one suit is removed from its column
//!   and scored.
//!
//! ## Modules
//!
//! - `core`: rule constants and deterministic RNG
//! - `cards`: card and deck value types
//! - `engine`: columns, the error taxonomy, and the game orchestrator
//!
//! The interactive text loop and board renderer live in the `spider`
//! binary, outside the engine core.

pub mod cards;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, DeckKind, Rank, Suit};
pub use crate::core::{
    GameRng, COMPLETED_RUN_BONUS, FULL_DECK_SIZE, INITIAL_SCORE, MOVE_COST, NUM_COLUMNS,
    NUM_DECKS, NUM_INITIAL_DEALS, NUM_SIDE_DECKS, SIDE_DECK_SIZE, TOTAL_CARDS,
};
pub use crate::engine::{Column, EngineError, GameEngine, RunBuffer};
