//! Memory match state machine.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Symbol, CARD_COUNT, PAIR_COUNT};
use crate::core::{GameError, GameKind, RandomSource};
use crate::rules::{MiniGame, Phase, Transition};

const BASE_SCORE: u32 = 40;
const MIN_SCORE: u32 = 5;

/// Points for clearing the board after `attempts` pair comparisons.
#[must_use]
pub fn memory_score(attempts: u32) -> u32 {
    BASE_SCORE.saturating_sub(attempts).max(MIN_SCORE)
}

/// Result of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned face up.
    Revealed { index: usize, symbol: Symbol },
    /// Second card matched the first; both stay face up.
    Matched {
        first: usize,
        second: usize,
        symbol: Symbol,
    },
    /// Second card differed; both go face down.
    Mismatched {
        first: usize,
        second: usize,
        first_symbol: Symbol,
        second_symbol: Symbol,
    },
    /// Card already face up or already matched; nothing changed.
    Ignored { index: usize },
}

/// How a card renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    FaceDown,
    FaceUp(Symbol),
    Matched(Symbol),
}

/// What the player can see of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryView {
    /// Empty until the board is dealt.
    pub cards: Vec<CardFace>,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub attempts: u32,
    pub won: bool,
}

/// Memory match state.
///
/// Every card index is in exactly one of face-down, `flipped` or `matched`.
#[derive(Clone, Debug, Default)]
pub struct MemoryGame {
    board: Option<Board>,
    flipped: SmallVec<[usize; 2]>,
    matched: [bool; CARD_COUNT],
    matched_count: usize,
    attempts: u32,
    won: bool,
}

impl MemoryGame {
    /// A game with no board; `start()` deals one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A game already in progress on `board`.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board: Some(board),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Face-up, unmatched cards.
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Whether `index` has been paired.
    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    /// Number of matched cards (always even).
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// Pair comparisons made so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    fn compare_pair(&mut self, board: Board) -> Transition<FlipOutcome> {
        let (first, second) = (self.flipped[0], self.flipped[1]);
        self.flipped.clear();
        self.attempts += 1;

        let (first_symbol, second_symbol) = (board.cards()[first], board.cards()[second]);
        if first_symbol != second_symbol {
            return Transition::pending(FlipOutcome::Mismatched {
                first,
                second,
                first_symbol,
                second_symbol,
            });
        }

        self.matched[first] = true;
        self.matched[second] = true;
        self.matched_count += 2;
        debug!(
            "memory pair {first}/{second} matched ({}/{PAIR_COUNT})",
            self.matched_count / 2
        );

        let outcome = FlipOutcome::Matched {
            first,
            second,
            symbol: first_symbol,
        };
        if self.matched_count == CARD_COUNT {
            self.won = true;
            Transition::completed(outcome, memory_score(self.attempts))
        } else {
            Transition::pending(outcome)
        }
    }
}

impl MiniGame for MemoryGame {
    const KIND: GameKind = GameKind::Memory;

    type Input = usize;
    type Outcome = FlipOutcome;
    type View = MemoryView;

    fn phase(&self) -> Phase {
        match (&self.board, self.won) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Active,
            (Some(_), true) => Phase::Completed,
        }
    }

    fn start<R: RandomSource>(&mut self, rng: &mut R) {
        *self = Self::with_board(Board::shuffled(rng));
    }

    fn act<R: RandomSource>(
        &mut self,
        index: usize,
        _rng: &mut R,
    ) -> Result<Transition<FlipOutcome>, GameError> {
        let board = self.board.ok_or(GameError::NotStarted(Self::KIND))?;
        if self.won {
            return Err(GameError::AlreadyCompleted(Self::KIND));
        }
        GameError::check_range("card", index as i64, 0, CARD_COUNT as i64 - 1)?;

        if self.matched[index] || self.flipped.contains(&index) {
            return Ok(Transition::pending(FlipOutcome::Ignored { index }));
        }

        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return Ok(Transition::pending(FlipOutcome::Revealed {
                index,
                symbol: board.cards()[index],
            }));
        }
        Ok(self.compare_pair(board))
    }

    fn view(&self) -> MemoryView {
        let cards = match &self.board {
            None => Vec::new(),
            Some(board) => board
                .cards()
                .iter()
                .enumerate()
                .map(|(i, &symbol)| {
                    if self.matched[i] {
                        CardFace::Matched(symbol)
                    } else if self.flipped.contains(&i) {
                        CardFace::FaceUp(symbol)
                    } else {
                        CardFace::FaceDown
                    }
                })
                .collect(),
        };

        MemoryView {
            cards,
            matched_pairs: self.matched_count / 2,
            total_pairs: PAIR_COUNT,
            attempts: self.attempts,
            won: self.won,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    fn ordered_game() -> (MemoryGame, ScriptedRng) {
        let mut rng = ScriptedRng::new(0).keep_order();
        let mut game = MemoryGame::new();
        game.start(&mut rng);
        (game, rng)
    }

    #[test]
    fn test_memory_score() {
        assert_eq!(memory_score(8), 32);
        assert_eq!(memory_score(35), 5);
        assert_eq!(memory_score(36), 5);
        assert_eq!(memory_score(1000), 5);
    }

    #[test]
    fn test_not_started() {
        let mut game = MemoryGame::new();
        let mut rng = ScriptedRng::new(0);

        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.view().cards.is_empty());
        assert_eq!(
            game.act(0, &mut rng),
            Err(GameError::NotStarted(GameKind::Memory))
        );
    }

    #[test]
    fn test_reveal_then_mismatch() {
        let (mut game, mut rng) = ordered_game();

        let first = game.act(0, &mut rng).unwrap();
        assert_eq!(
            first.outcome,
            FlipOutcome::Revealed {
                index: 0,
                symbol: Symbol::Controller
            }
        );
        assert_eq!(game.flipped(), &[0]);
        assert_eq!(game.view().cards[0], CardFace::FaceUp(Symbol::Controller));

        let second = game.act(1, &mut rng).unwrap();
        assert!(matches!(second.outcome, FlipOutcome::Mismatched { first: 0, second: 1, .. }));
        assert!(game.flipped().is_empty());
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.matched_count(), 0);
    }

    #[test]
    fn test_same_card_twice_is_ignored() {
        let (mut game, mut rng) = ordered_game();

        game.act(3, &mut rng).unwrap();
        let again = game.act(3, &mut rng).unwrap();
        assert_eq!(again.outcome, FlipOutcome::Ignored { index: 3 });
        assert_eq!(game.flipped(), &[3]);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn test_matched_card_is_ignored() {
        let (mut game, mut rng) = ordered_game();

        game.act(2, &mut rng).unwrap();
        let t = game.act(10, &mut rng).unwrap();
        assert!(matches!(t.outcome, FlipOutcome::Matched { symbol: Symbol::Die, .. }));
        assert!(game.is_matched(2) && game.is_matched(10));

        let ignored = game.act(2, &mut rng).unwrap();
        assert_eq!(ignored.outcome, FlipOutcome::Ignored { index: 2 });
        assert!(game.flipped().is_empty());
    }

    #[test]
    fn test_perfect_game_scores_32() {
        let (mut game, mut rng) = ordered_game();
        let mut completions = Vec::new();

        for i in 0..PAIR_COUNT {
            game.act(i, &mut rng).unwrap();
            let t = game.act(i + PAIR_COUNT, &mut rng).unwrap();
            if let Some(points) = t.points {
                completions.push(points);
            }
        }

        assert_eq!(completions, vec![32]);
        assert_eq!(game.phase(), Phase::Completed);
        assert!(game.view().won);
        assert_eq!(game.view().matched_pairs, 8);
    }

    #[test]
    fn test_won_game_rejects_flips() {
        let (mut game, mut rng) = ordered_game();
        for i in 0..PAIR_COUNT {
            game.act(i, &mut rng).unwrap();
            game.act(i + PAIR_COUNT, &mut rng).unwrap();
        }

        assert_eq!(
            game.act(0, &mut rng),
            Err(GameError::AlreadyCompleted(GameKind::Memory))
        );

        game.start(&mut rng);
        assert_eq!(game.phase(), Phase::Active);
        assert_eq!(game.matched_count(), 0);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn test_sloppy_game_floors_at_five() {
        let (mut game, mut rng) = ordered_game();

        // Burn 40 mismatched attempts first.
        for _ in 0..40 {
            game.act(0, &mut rng).unwrap();
            game.act(1, &mut rng).unwrap();
        }

        let mut points = None;
        for i in 0..PAIR_COUNT {
            game.act(i, &mut rng).unwrap();
            points = game.act(i + PAIR_COUNT, &mut rng).unwrap().points.or(points);
        }
        assert_eq!(game.attempts(), 48);
        assert_eq!(points, Some(5));
    }

    #[test]
    fn test_out_of_range_flip() {
        let (mut game, mut rng) = ordered_game();
        assert!(matches!(
            game.act(16, &mut rng),
            Err(GameError::OutOfRange { field: "card", .. })
        ));
        assert!(game.flipped().is_empty());
    }
}
