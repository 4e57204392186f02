//! Game engine: setup, dealing, moves, completion bookkeeping, scoring.
//!
//! `GameEngine` owns every column and the reserve of side decks; all card
//! movement goes through its methods. Callers own engine values outright -
//! one per game session, created by `new_game`, discarded when the session
//! ends. There is no process-wide state.
//!
//! Every operation either applies fully or returns an error with the board
//! untouched.

use log::{debug, info};

use crate::cards::card::{Card, Suit};
use crate::cards::deck::Deck;
use crate::core::config::{
    COMPLETED_RUN_BONUS, FULL_DECK_SIZE, INITIAL_SCORE, NUM_COLUMNS, NUM_DECKS, NUM_SIDE_DECKS,
    SIDE_DECK_SIZE, TOTAL_CARDS,
};
use crate::core::rng::GameRng;
use crate::engine::column::{Column, RunBuffer};
use crate::engine::error::EngineError;

/// The Spider rules engine.
///
/// Tracks the ten tableau columns, the reserve of side decks, the score,
/// and how many completed runs have been removed. The conservation
/// invariant holds at every point after construction:
/// `columns + reserve + 13 * completed_runs == 104` cards.
#[derive(Clone, Debug)]
pub struct GameEngine {
    score: i64,
    columns: Vec<Column>,
    reserve: Vec<Deck>,
    completed_runs: u32,
}

impl GameEngine {
    /// Start a new game with a seed drawn from OS entropy.
    #[must_use]
    pub fn new_game() -> Self {
        Self::new_game_seeded(GameRng::from_entropy().seed())
    }

    /// Start a new game with an explicit seed.
    ///
    /// The whole board layout is a pure function of the seed, so a game can
    /// be replayed from this one value.
    #[must_use]
    pub fn new_game_seeded(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);

        // Eight full decks, two per suit, poured into one pool.
        let mut pool: Vec<Card> = Vec::with_capacity(TOTAL_CARDS);
        for suit in Suit::ALL {
            for _ in 0..NUM_DECKS / Suit::ALL.len() {
                let deck = Deck::full(suit, &mut rng);
                pool.extend_from_slice(deck.cards());
            }
        }
        rng.shuffle(&mut pool);

        // The tail of the pool becomes the reserve; the rest goes to the
        // table round-robin, face-down.
        let table = pool.len() - NUM_SIDE_DECKS * SIDE_DECK_SIZE;
        let mut reserve = Vec::with_capacity(NUM_SIDE_DECKS);
        for chunk in pool[table..].chunks(SIDE_DECK_SIZE) {
            reserve.push(Deck::side(chunk.to_vec()));
        }

        let mut columns = vec![Column::new(); NUM_COLUMNS];
        for (index, card) in pool[..table].iter().enumerate() {
            columns[index % NUM_COLUMNS].push(*card);
        }

        let mut engine = Self {
            score: INITIAL_SCORE,
            columns,
            reserve,
            completed_runs: 0,
        };
        info!("new game seeded with {seed}");

        // The initial deal bypasses the empty-column gate because the
        // reserve is still at its full count.
        if let Err(err) = engine.deal_from_reserve(true) {
            unreachable!("initial deal cannot fail: {err}");
        }
        engine
    }

    /// Construct an engine from an explicit layout.
    ///
    /// For scripted positions and test harnesses; performs no shuffling and
    /// no initial deal. Panics unless exactly [`NUM_COLUMNS`] columns are
    /// supplied.
    #[must_use]
    pub fn from_layout(columns: Vec<Vec<Card>>, reserve: Vec<Deck>) -> Self {
        assert_eq!(
            columns.len(),
            NUM_COLUMNS,
            "layout must supply exactly {NUM_COLUMNS} columns"
        );
        Self {
            score: INITIAL_SCORE,
            columns: columns.into_iter().map(Column::from_cards).collect(),
            reserve,
            completed_runs: 0,
        }
    }

    /// Deal the next side deck: one card to each column, revealed.
    ///
    /// Errors with [`EngineError::EmptySource`] when the reserve is
    /// exhausted, and with [`EngineError::ColumnEmptyViolation`] when any
    /// column is empty on a non-initial deal. New cards may not land on an
    /// empty column except during the board's first deal.
    pub fn deal(&mut self) -> Result<(), EngineError> {
        self.deal_from_reserve(true)
    }

    fn deal_from_reserve(&mut self, reveal: bool) -> Result<(), EngineError> {
        if self.reserve.is_empty() {
            return Err(EngineError::EmptySource);
        }

        // The gate is bypassed only while the reserve is still at its
        // initial count, i.e. for the very first deal.
        if self.reserve.len() < NUM_SIDE_DECKS
            && self.columns.iter().any(Column::is_empty)
        {
            return Err(EngineError::ColumnEmptyViolation);
        }

        // Stage the whole deck before touching any state so a failure
        // leaves both the board and the reserve unchanged. The back of the
        // deck is dealt first.
        let deck = self.reserve.last().ok_or(EngineError::EmptySource)?;
        let mut dealt = RunBuffer::new();
        for &card in deck.cards().iter().rev() {
            let mut card = card;
            if reveal {
                card.reveal()?;
            }
            dealt.push(card);
        }

        self.reserve.pop();
        debug!("dealing side deck ({} left in reserve)", self.reserve.len());
        for (index, card) in dealt.into_iter().enumerate() {
            self.columns[index % NUM_COLUMNS].push(card);
        }

        for index in 0..NUM_COLUMNS {
            self.settle_completed_run(index);
        }
        Ok(())
    }

    /// Move the run starting at `position` of `from` onto `to`.
    ///
    /// `position` 0 is the topmost card of the source column, increasing
    /// downward; the candidate run is that card and everything above it.
    /// The run must be a face-up same-suit descending sequence; the
    /// destination must be empty or topped by a face-up card ranking
    /// exactly one above the run's bottom card. Destination suit is not
    /// checked: cross-suit placement is allowed by design.
    ///
    /// On any failure no column is modified.
    pub fn move_card(
        &mut self,
        from: usize,
        position: usize,
        to: usize,
    ) -> Result<(), EngineError> {
        self.check_column_index(from)?;
        self.check_column_index(to)?;

        let source_len = self.columns[from].len();
        if position >= source_len {
            return Err(EngineError::IndexOutOfRange {
                index: position,
                limit: source_len,
            });
        }

        if !self.columns[from].is_movable_run(position) {
            return Err(EngineError::SourceRunInvalid {
                column: from,
                position,
            });
        }

        let Some(bottom) = self.columns[from].card_at(position) else {
            return Err(EngineError::IndexOutOfRange {
                index: position,
                limit: source_len,
            });
        };
        let bottom_rank = bottom.rank();
        let destination_fits = match self.columns[to].top() {
            None => true,
            Some(top) => top.is_face_up() && top.rank().follows(bottom_rank),
        };
        if !destination_fits {
            return Err(EngineError::DestinationMismatch { column: to });
        }

        // Detach from the source, attach to the destination, in order.
        let run = self.columns[from].take_run(position);
        let run_len = run.len();
        self.columns[to].attach_run(run);
        debug!("moved {run_len} card(s) from column {from} to column {to}");

        if self.columns[from].reveal_top()? {
            debug!("uncovered the top card of column {from}");
        }

        self.settle_completed_run(to);
        Ok(())
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The ten tableau columns, in fixed order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Side decks still waiting in the reserve.
    #[must_use]
    pub fn reserve_count(&self) -> usize {
        self.reserve.len()
    }

    /// The reserve decks themselves, next-dealt last.
    #[must_use]
    pub fn reserve(&self) -> &[Deck] {
        &self.reserve
    }

    /// Completed runs removed so far.
    #[must_use]
    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }

    /// Cards the engine currently accounts for, counting each removed
    /// completed run as 13.
    ///
    /// Equals [`TOTAL_CARDS`] at every point in a normally-constructed
    /// game.
    #[must_use]
    pub fn tracked_cards(&self) -> usize {
        let on_table: usize = self.columns.iter().map(Column::len).sum();
        let in_reserve: usize = self.reserve.iter().map(Deck::len).sum();
        on_table + in_reserve + self.completed_runs as usize * FULL_DECK_SIZE
    }

    fn check_column_index(&self, index: usize) -> Result<(), EngineError> {
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(EngineError::IndexOutOfRange {
                index,
                limit: self.columns.len(),
            })
        }
    }

    /// Remove a completed run from one column, if present, and score it.
    fn settle_completed_run(&mut self, index: usize) {
        if self.columns[index].take_completed_run() {
            self.completed_runs += 1;
            self.score += COMPLETED_RUN_BONUS;
            info!(
                "completed run removed from column {index} (score {}, {} total)",
                self.score, self.completed_runs
            );
        }
    }
}
