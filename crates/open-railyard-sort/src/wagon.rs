//! Wagon records and the directions they are classified into.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TokenError;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Outbound direction a wagon is routed to.
///
/// The yard serves exactly two destinations. A wagon carrying any other
/// tag never gets past token validation, so routing can match on this
/// enum without a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Direction A.
    A,
    /// Direction B.
    B,
}

impl Direction {
    /// Every direction, in reporting order.
    pub const ALL: [Direction; 2] = [Direction::A, Direction::B];

    /// Look up a direction from its tag. The tag is case-insensitive;
    /// returns `None` if it names no known direction.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "A" => Some(Direction::A),
            "B" => Some(Direction::B),
            _ => None,
        }
    }

    /// Canonical single-letter tag for this direction.
    pub fn tag(&self) -> char {
        match self {
            Direction::A => 'A',
            Direction::B => 'B',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ---------------------------------------------------------------------------
// Wagon
// ---------------------------------------------------------------------------

/// A single wagon: a direction tag plus a numeric identifier.
///
/// Immutable once built. A `Wagon` can only exist with a valid
/// [`Direction`], so everything that reaches the stacks is routable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wagon {
    /// Destination the wagon is classified into.
    pub direction: Direction,
    /// Numeric identifier from the consist.
    pub number: u32,
}

impl Wagon {
    /// Create a wagon directly from its parts.
    pub fn new(direction: Direction, number: u32) -> Self {
        Self { direction, number }
    }

    /// Build a wagon from a separate tag and number, validating the tag.
    ///
    /// The tag is canonicalized to upper case before lookup; an unknown
    /// tag yields [`TokenError::UnknownDirection`] and no partially
    /// valid wagon is ever constructed.
    pub fn from_tag(tag: &str, number: u32) -> crate::Result<Self> {
        match Direction::from_tag(tag) {
            Some(direction) => Ok(Self { direction, number }),
            None => Err(TokenError::UnknownDirection(tag.to_string())),
        }
    }

    /// Parse a wagon from a `TAG-NUMBER` token such as `"A-12"`.
    ///
    /// The token is split on the first `-`; the tag is case-insensitive
    /// and the number must be a non-negative base-10 integer. This is
    /// the single validation boundary for external input. No trimming
    /// happens here — callers hand in the bare token.
    pub fn from_token(token: &str) -> crate::Result<Self> {
        let (tag, number) = token
            .split_once('-')
            .ok_or_else(|| TokenError::MissingSeparator(token.to_string()))?;
        let number: u32 = number
            .parse()
            .map_err(|_| TokenError::BadNumber(token.to_string()))?;
        Self::from_tag(tag, number)
    }
}

impl fmt::Display for Wagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.direction, self.number)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
