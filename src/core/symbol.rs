//! Atomic symbols and the machine stack.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single symbol of the input or stack alphabet.
///
/// Symbols are atomic: a push string is a sequence of symbols, never a
/// string to be sliced. Input strings are read one `char` at a time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    pub const fn as_char(self) -> char {
        self.0
    }

    /// Split a string into symbols, one per character.
    pub fn parse(s: &str) -> Vec<Symbol> {
        s.chars().map(Symbol).collect()
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

/// Render symbols in order as a single string.
pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.0).collect()
}

/// Machine stack.
///
/// Stored bottom-first so that popping and pushing touch only the end of
/// the vector; every public view (`iter`, `Display`) is top-first.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Stack {
    symbols: Vec<Symbol>,
}

impl Stack {
    /// Stack holding only the given bottom symbol.
    pub fn with_bottom(bottom: Symbol) -> Self {
        Self {
            symbols: vec![bottom],
        }
    }

    /// Build a stack from symbols listed top-first.
    pub fn from_top_first(symbols: &[Symbol]) -> Self {
        Self {
            symbols: symbols.iter().rev().copied().collect(),
        }
    }

    pub fn top(&self) -> Option<Symbol> {
        self.symbols.last().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True when the stack holds exactly `bottom` and nothing else.
    pub fn is_exactly(&self, bottom: Symbol) -> bool {
        self.symbols.len() == 1 && self.symbols[0] == bottom
    }

    /// Iterate symbols top-first.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().rev().copied()
    }

    /// Pop the top symbol and push `push` in its place.
    ///
    /// `push` is given top-first: its first symbol becomes the new top.
    /// An empty `push` is a plain pop.
    pub fn replace_top(&self, push: &[Symbol]) -> Stack {
        let mut symbols = Vec::with_capacity(self.symbols.len() + push.len());
        symbols.extend_from_slice(&self.symbols[..self.symbols.len().saturating_sub(1)]);
        symbols.extend(push.iter().rev().copied());
        Stack { symbols }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
