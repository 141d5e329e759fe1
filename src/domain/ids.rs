//! Record identity.
//!
//! Ids are positive integers handed out by an [`IdAllocator`]. They live only
//! as long as the allocator that produced them: decoding a file assigns fresh
//! ids rather than trusting the ones on disk.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a catalog record (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentId(u32);

impl ContentId {
    /// Wrap a raw id, rejecting zero
    pub fn new(raw: u32) -> Result<Self, ValidationError> {
        if raw == 0 {
            return Err(ValidationError::new("id", "must be greater than 0"));
        }
        Ok(Self(raw))
    }

    /// Get the raw integer value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::new("id", format!("{:?} is not a positive integer", s)))?;
        Self::new(raw)
    }
}

/// Monotonic id source. Never hands out the same id twice.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Allocator whose first id is 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocator whose first id is `first`
    pub fn starting_at(first: ContentId) -> Self {
        Self { next: first.get() }
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> ContentId {
        let id = ContentId(self.next);
        // u32 exhaustion is not a realistic catalog size
        self.next = self.next.saturating_add(1);
        id
    }

    /// Peek at the id the next call will return
    pub fn peek(&self) -> ContentId {
        ContentId(self.next)
    }

    /// Make sure `id` is never handed out later
    pub fn observe(&mut self, id: ContentId) {
        if id.get() >= self.next {
            self.next = id.get().saturating_add(1);
        }
    }
}
