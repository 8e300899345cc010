//! Version-availability windows
//!
//! A window is the half-open interval `[since, until)` of releases in
//! which a schema member is valid. The lower bound is inclusive, the
//! optional upper bound exclusive. Membership is evaluated against the
//! active document version at both decode and encode time.

use x12_ir::Version;

/// The release interval in which a member is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    /// First release the member appears in (inclusive).
    pub since: Version,
    /// First release the member no longer appears in (exclusive), if the
    /// member was retired.
    pub until: Option<Version>,
}

impl Availability {
    /// Available from the earliest release onward.
    pub const OPEN: Availability = Availability {
        since: Version::V3010,
        until: None,
    };

    /// Available from `since` onward.
    pub fn since(since: Version) -> Self {
        Self { since, until: None }
    }

    /// Whether the window admits the given version.
    pub fn contains(&self, version: Version) -> bool {
        version >= self.since && self.until.is_none_or(|until| version < until)
    }

    /// Whether this window admits every version the other window admits.
    pub fn covers(&self, other: Availability) -> bool {
        let upper_ok = match (self.until, other.until) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(mine), Some(theirs)) => mine >= theirs,
        };
        self.since <= other.since && upper_ok
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::OPEN
    }
}
