//! Difficulty tiers and the field-visibility policy.
//!
//! Every editable field declares a minimum tier (see
//! [`Field::required_tier`](crate::field::Field::required_tier)). A field is
//! unlocked when the session tier ranks at or above that minimum, and this
//! single comparison is the only gating mechanism in the tool. Both the
//! export and the preview consult it through [`is_visible`], so the two
//! can never disagree about what a given tier unlocks.
//!
//! The tier is session state: it is a CLI flag, never written to the store.
//! Dropping the tier hides advanced styling in the preview but leaves the
//! stored values untouched, so they reappear when the tier is raised again.

use std::fmt;
use std::str::FromStr;

/// Session difficulty tier, totally ordered by capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Basic,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Intermediate, Tier::Advanced];

    /// Capability rank: basic 0, intermediate 1, advanced 2.
    pub fn rank(self) -> u8 {
        match self {
            Tier::Basic => 0,
            Tier::Intermediate => 1,
            Tier::Advanced => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Tier::Basic),
            "intermediate" => Ok(Tier::Intermediate),
            "advanced" => Ok(Tier::Advanced),
            other => Err(format!(
                "unknown tier '{other}' (expected basic, intermediate or advanced)"
            )),
        }
    }
}

/// A field that requires `field_tier` is visible at `current` iff the
/// session tier ranks at or above it.
pub fn is_visible(field_tier: Tier, current: Tier) -> bool {
    current >= field_tier
}
