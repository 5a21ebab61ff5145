use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::TerrainError;

/// At most one secondary pattern layered over the primary type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Shen,
    Stagnation,
    Damp,
    Dry,
    #[default]
    None,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Modifier::Shen,
        Modifier::Stagnation,
        Modifier::Damp,
        Modifier::Dry,
        Modifier::None,
    ];

    /// Stable lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            Modifier::Shen => "shen",
            Modifier::Stagnation => "stagnation",
            Modifier::Damp => "damp",
            Modifier::Dry => "dry",
            Modifier::None => "none",
        }
    }

    /// Tie-break rank among equal-magnitude candidates; lower wins.
    /// Damp and dry share a rank (they can never both qualify).
    pub fn priority(self) -> u8 {
        match self {
            Modifier::Shen => 0,
            Modifier::Stagnation => 1,
            Modifier::Damp | Modifier::Dry => 2,
            Modifier::None => u8::MAX,
        }
    }

    pub fn is_none(self) -> bool {
        self == Modifier::None
    }

    /// Lenient parse for stored profiles: anything unrecognized (including
    /// absent) becomes [`Modifier::None`].
    pub fn parse_or_default(id: Option<&str>) -> Self {
        id.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Modifier {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| TerrainError::UnknownModifier { id: s.to_string() })
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
