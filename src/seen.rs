//! Tracking whether a value is newly discovered or previously seen.
//!
//! This module provides the [`Seen`] enum for distinguishing between values
//! that are encountered for the first time versus those that have been seen
//! before, as when interning vertex labels into dense indices.

/// An enum to track whether a value is newly discovered or previously seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seen<T> {
    /// A value that is being encountered for the first time
    New(T),
    /// A value that has been seen before
    Old(T),
}

impl<T> Seen<T> {
    /// Extracts the inner value regardless of whether it's new or old.
    pub fn any(self) -> T {
        match self {
            Seen::New(x) => x,
            Seen::Old(x) => x,
        }
    }
}
