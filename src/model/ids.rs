use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Type-safe identifier wrapper. The phantom type parameter `T` prevents
/// mixing IDs from different record types (e.g., Campaign ID vs Contact ID).
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: i64,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Parse from a decimal string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self::new(s.trim().parse()?))
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Highest value `IdGenerator::observe` will move the counter to.
pub const OBSERVE_CEILING: i64 = i64::MAX - u32::MAX as i64;

/// Hands out ids from the wall clock (milliseconds), bumped so that every id
/// is strictly greater than anything issued or observed before. An id is
/// therefore never reused, even after the record holding it is deleted.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next<T>(&mut self) -> Id<T> {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        Id::new(self.last)
    }

    /// Record an id that came from elsewhere (e.g. the server) so it is
    /// never handed out locally. Ids above `OBSERVE_CEILING` only raise the
    /// floor to the ceiling, leaving room to keep counting; callers holding
    /// such ids still check for clashes.
    pub fn observe<T>(&mut self, id: Id<T>) {
        self.last = self.last.max(id.value.min(OBSERVE_CEILING));
    }
}
