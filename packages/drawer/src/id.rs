use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a drawer in the stack. Unique among live entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DrawerId(String);

impl DrawerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrawerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DrawerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DrawerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Per-caller id generator producing `{scope}-{n}` with `n` starting at 1.
///
/// Each caller holds its own sequence, so ids stay unique without a global
/// counter. Scopes are handed out by [`crate::DrawerStack::allocate_scope`].
#[derive(Debug)]
pub struct IdSequence {
    scope: String,
    counter: Cell<u64>,
}

impl IdSequence {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            counter: Cell::new(0),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn next(&self) -> DrawerId {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        DrawerId(format!("{}-{}", self.scope, n))
    }
}
