//! Identifier management using string interning
//!
//! Entity identifiers are the join keys between entities and the relations
//! that reference them. They are compared and hashed constantly by the
//! layout and export stages, so this module provides the [`Id`] type backed
//! by a global string interner.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
///
/// # Memory
///
/// Interned strings are never freed. The interner grows by every distinct
/// id seen for the life of the process, so a long-running service that
/// parses many unrelated documents keeps all their ids resident.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned entity identifier.
///
/// Two identifiers created from the same string are equal and hash the same.
/// The empty string is a valid identifier: documents with a missing `id`
/// attribute produce it.
///
/// # Examples
///
/// ```
/// use relata_core::identifier::Id;
///
/// let customer = Id::new("customer");
/// let again: Id = "customer".into();
///
/// assert_eq!(customer, again);
/// assert_eq!(customer, "customer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let symbol = interner().get_or_intern(name);
        Self(symbol)
    }

    /// Returns `true` if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        *self == ""
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
