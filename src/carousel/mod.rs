//! The year-by-year timeline carousel.
//!
//! [`CarouselState`] is the whole state machine: a bounded index plus the direction of
//! the last move, which only exists to pick the slide-in animation. [`Carousel`] ties
//! a state to the deck it walks over.

use serde::{Deserialize, Serialize};
use snafu::Snafu;

pub use input::*;

mod input;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CarouselError {
    #[snafu(display("a slide deck needs at least one slide"))]
    EmptyDeck,
}

/// Which way the last transition moved, serialized as `-1`, `0` or `1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Backward),
            0 => Ok(Direction::Still),
            1 => Ok(Direction::Forward),
            other => Err(format!("direction must be -1, 0 or 1, got {other}")),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub direction: Direction,
}

impl CarouselState {
    /// Move forward one slide. Does nothing on the last slide, direction included.
    pub fn next(&mut self, len: usize) {
        if self.active_index + 1 >= len {
            return;
        }
        self.direction = Direction::Forward;
        self.active_index += 1;
    }

    /// Move back one slide. Does nothing on the first slide, direction included.
    pub fn prev(&mut self) {
        if self.active_index == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.active_index -= 1;
    }

    /// Jump straight to `target`, clamped to the last slide.
    ///
    /// Jumping to the current slide still sets the direction to backward.
    pub fn go_to(&mut self, target: usize, len: usize) {
        let target = target.min(len.saturating_sub(1));
        self.direction = if target > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.active_index = target;
    }

    pub fn apply(&mut self, input: &CarouselInput, len: usize) {
        match input.navigation() {
            Some(Navigation::Next) => self.next(len),
            Some(Navigation::Prev) => self.prev(),
            Some(Navigation::GoTo(target)) => self.go_to(target, len),
            None => {}
        }
    }
}

/// An ordered, non-empty list of slides fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct SlideDeck<T>(Vec<T>);

impl<T> SlideDeck<T> {
    pub fn new(slides: Vec<T>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return EmptyDeckSnafu.fail();
        }
        Ok(Self(slides))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Decks are never empty, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> TryFrom<Vec<T>> for SlideDeck<T> {
    type Error = CarouselError;

    fn try_from(slides: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(slides)
    }
}

/// A deck together with the position the view is currently showing.
///
/// Owned by a single view, dropped with it. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    deck: SlideDeck<T>,
    state: CarouselState,
}

impl<T> Carousel<T> {
    pub fn new(deck: SlideDeck<T>) -> Self {
        Self {
            deck,
            state: CarouselState::default(),
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn active_slide(&self) -> &T {
        &self.deck.0[self.state.active_index]
    }

    pub fn deck(&self) -> &SlideDeck<T> {
        &self.deck
    }

    pub fn next(&mut self) {
        self.state.next(self.deck.len());
    }

    pub fn prev(&mut self) {
        self.state.prev();
    }

    pub fn go_to(&mut self, target: usize) {
        self.state.go_to(target, self.deck.len());
    }

    pub fn apply(&mut self, input: &CarouselInput) {
        let before = self.state;
        self.state.apply(input, self.deck.len());

        if before != self.state {
            tracing::trace!(
                ?input,
                from = before.active_index,
                to = self.state.active_index,
                "carousel moved"
            );
        }
    }
}
