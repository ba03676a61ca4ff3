//! Symbol type definition.
//!
//! A [`Symbol`] is the atomic unit of input the simulator processes: one
//! character of the loaded text. Symbols are compared by equality only; no
//! ordering semantics are attached.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One unit of simulated input (a single character).
///
/// Wrapping `char` keeps symbol-typed APIs distinct from ordinary character
/// handling in front ends, the same way addresses are strong-typed in
/// hardware simulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub char);

impl Symbol {
    /// Returns this symbol folded to its ASCII uppercase form.
    ///
    /// Input text is case-normalized on load so that `'a'` and `'A'` refer
    /// to the same cache entry.
    #[inline]
    pub const fn to_ascii_uppercase(self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
