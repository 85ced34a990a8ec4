//! Term slots within an academic year.
//!
//! Every academic year has exactly four slots. Their declaration order is
//! the chronological order within a year, so the derived `Ord` on [`Term`]
//! is the slot rank used by ordering validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed term slots of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Regular fall term.
    #[serde(rename = "Fall")]
    Fall,
    /// Short term between fall and spring.
    #[serde(rename = "Winter Intersession")]
    WinterIntersession,
    /// Regular spring term.
    #[serde(rename = "Spring")]
    Spring,
    /// Short term after spring.
    #[serde(rename = "Summer Intersession")]
    SummerIntersession,
}

impl Term {
    /// All slots in chronological order.
    pub const ALL: [Term; 4] = [
        Term::Fall,
        Term::WinterIntersession,
        Term::Spring,
        Term::SummerIntersession,
    ];

    /// Wire / display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Fall => "Fall",
            Term::WinterIntersession => "Winter Intersession",
            Term::Spring => "Spring",
            Term::SummerIntersession => "Summer Intersession",
        }
    }

    /// Whether this is a short intersession term.
    ///
    /// Intersessions are exempt from the regular unit band.
    #[inline]
    pub fn is_intersession(&self) -> bool {
        matches!(self, Term::WinterIntersession | Term::SummerIntersession)
    }

    /// Position within the year (0-indexed).
    #[inline]
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known term name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown term {0:?} (expected Fall, Winter Intersession, Spring, or Summer Intersession)")]
pub struct UnknownTerm(pub String);

impl FromStr for Term {
    type Err = UnknownTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTerm(s.to_string()))
    }
}

/// A specific term of a specific year.
///
/// Orders by year number first, then by slot rank within the year. This is
/// the global chronological order across a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermSlot {
    /// Academic year number (1-based).
    pub year: u32,
    /// Slot within the year.
    pub term: Term,
}

impl TermSlot {
    /// Creates a slot.
    pub fn new(year: u32, term: Term) -> Self {
        Self { year, term }
    }
}

impl fmt::Display for TermSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {} {}", self.year, self.term)
    }
}
