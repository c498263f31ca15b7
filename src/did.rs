//! A descriptive boolean alternative for function return types.
//!
//! This module provides the [`Did`] enum as a more expressive alternative to
//! boolean return types for functions that either perform an action or don't,
//! such as a union-find merge that may find both sides already connected.

/// Descriptive enum to use instead of `bool` as return type for functions which either do something or not.
///
/// # Examples
///
/// ```no_run
/// # use arbor::did::Did;
/// # use arbor::union_find::UnionFind;
/// let mut uf = UnionFind::with_size(2);
/// if uf.union(0, 1).did_something() {
///     // the two components were merged just now
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Did {
    /// Indicates that an action was performed
    Something,
    /// Indicates that no action was performed
    Nothing,
}

impl Did {
    /// Returns `true` if the action was performed.
    pub fn did_something(&self) -> bool {
        match self {
            Did::Something => true,
            Did::Nothing => false,
        }
    }

    /// Returns `true` if no action was performed.
    pub fn did_nothing(&self) -> bool {
        !self.did_something()
    }
}
