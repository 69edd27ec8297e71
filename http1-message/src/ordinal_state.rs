use std::{cmp::Ordering, fmt};

//
//
//
pub trait Ordinal: Copy + Ord + fmt::Debug {
    const INITIAL: Self;

    /// Next state in sequence. Terminal states return themselves, cyclic machines wrap.
    fn successor(self) -> Self;
}

/// A state value drawn from a totally ordered sequence.
///
/// Compares against bare states, so `state >= MessageState::Body` reads as
/// "at least as far along as the body".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalState<S> {
    current: S,
}

impl<S: Ordinal> Default for OrdinalState<S> {
    fn default() -> Self {
        Self {
            current: S::INITIAL,
        }
    }
}

impl<S: Ordinal> OrdinalState<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn advance(&mut self) -> S {
        self.current = self.current.successor();
        self.current
    }

    /// Jumps forward to `state`. Backward jumps are ignored.
    pub fn set(&mut self, state: S) {
        debug_assert!(state >= self.current, "{:?} -> {:?}", self.current, state);
        if state > self.current {
            self.current = state;
        }
    }
}

impl<S: Ordinal> PartialEq<S> for OrdinalState<S> {
    fn eq(&self, other: &S) -> bool {
        self.current == *other
    }
}

impl<S: Ordinal> PartialOrd<S> for OrdinalState<S> {
    fn partial_cmp(&self, other: &S) -> Option<Ordering> {
        Some(self.current.cmp(other))
    }
}
