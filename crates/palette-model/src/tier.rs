//! Experience tiers and the presentation profile derived from them.
//!
//! A session has at most one active [`Tier`]. Consumers that only care about
//! layout or styling should read a [`TierProfile`] instead of matching on the
//! tier directly, so the unset case is handled in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The user's chosen experience level.
///
/// The set is closed: anything other than `novice` or `standard` is rejected
/// at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Simplified palette: fewer operations, friendlier defaults.
    Novice,
    /// Full-feature palette.
    Standard,
}

impl Tier {
    /// All tiers, in presentation order.
    pub const ALL: [Tier; 2] = [Tier::Novice, Tier::Standard];

    /// Canonical name as persisted in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Novice => "novice",
            Tier::Standard => "standard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ModelError;

    /// Parse a canonical tier name. Matching is exact: stored values are
    /// always written in canonical form, so anything else is foreign data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "novice" => Ok(Tier::Novice),
            "standard" => Ok(Tier::Standard),
            _ => Err(ModelError::TierParse(s.to_string())),
        }
    }
}

/// Which of the two section template sets to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSet {
    Novice,
    Standard,
}

impl TemplateSet {
    /// Template set for an optional tier. No selection falls back to the
    /// full-feature set so nothing is hidden from a caller that has not
    /// chosen yet.
    pub fn for_tier(tier: Option<Tier>) -> Self {
        match tier {
            Some(Tier::Novice) => TemplateSet::Novice,
            Some(Tier::Standard) | None => TemplateSet::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateSet::Novice => "novice",
            TemplateSet::Standard => "standard",
        }
    }
}

/// Palette layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Horizontal,
    Vertical,
}

/// Visual density of rendered operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    Simple,
    Advanced,
}

/// Presentation hints derived from the current tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProfile {
    pub layout: Layout,
    pub block_style: BlockStyle,
    pub template_set: TemplateSet,
}

impl TierProfile {
    pub fn for_tier(tier: Option<Tier>) -> Self {
        let novice = tier == Some(Tier::Novice);
        Self {
            layout: if novice {
                Layout::Horizontal
            } else {
                Layout::Vertical
            },
            block_style: if novice {
                BlockStyle::Simple
            } else {
                BlockStyle::Advanced
            },
            template_set: TemplateSet::for_tier(tier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_only() {
        assert_eq!("novice".parse::<Tier>(), Ok(Tier::Novice));
        assert_eq!("standard".parse::<Tier>(), Ok(Tier::Standard));
        assert!("Novice".parse::<Tier>().is_err());
        assert!("4+".parse::<Tier>().is_err());
        assert!("".parse::<Tier>().is_err());
    }

    #[test]
    fn unset_tier_uses_standard_templates() {
        assert_eq!(TemplateSet::for_tier(None), TemplateSet::Standard);
        let profile = TierProfile::for_tier(None);
        assert_eq!(profile.layout, Layout::Vertical);
        assert_eq!(profile.block_style, BlockStyle::Advanced);
    }

    #[test]
    fn novice_profile_is_horizontal_and_simple() {
        let profile = TierProfile::for_tier(Some(Tier::Novice));
        assert_eq!(profile.layout, Layout::Horizontal);
        assert_eq!(profile.block_style, BlockStyle::Simple);
        assert_eq!(profile.template_set, TemplateSet::Novice);
    }
}
