//! The 4x4 memory board: eight symbols, each placed twice.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Distinct symbols on a board.
pub const PAIR_COUNT: usize = 8;
/// Cards on a board.
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// A card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Controller,
    Target,
    Die,
    Palette,
    CircusTent,
    Masks,
    Guitar,
    Trumpet,
}

impl Symbol {
    pub const ALL: [Symbol; PAIR_COUNT] = [
        Symbol::Controller,
        Symbol::Target,
        Symbol::Die,
        Symbol::Palette,
        Symbol::CircusTent,
        Symbol::Masks,
        Symbol::Guitar,
        Symbol::Trumpet,
    ];

    /// Emoji used to draw the card.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Controller => "🎮",
            Symbol::Target => "🎯",
            Symbol::Die => "🎲",
            Symbol::Palette => "🎨",
            Symbol::CircusTent => "🎪",
            Symbol::Masks => "🎭",
            Symbol::Guitar => "🎸",
            Symbol::Trumpet => "🎺",
        }
    }
}

/// Board layout, fixed for the lifetime of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: [Symbol; CARD_COUNT],
}

impl Board {
    /// Unshuffled layout: every symbol in order, then again.
    ///
    /// Card `i` pairs with card `i + 8`.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = [Symbol::Controller; CARD_COUNT];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Symbol::ALL[i % PAIR_COUNT];
        }
        Self { cards }
    }

    /// A uniformly shuffled layout.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut board = Self::ordered();
        rng.shuffle(&mut board.cards);
        board
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Symbol; CARD_COUNT] {
        &self.cards
    }
}
