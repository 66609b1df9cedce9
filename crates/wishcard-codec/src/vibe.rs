//! The closed catalog of vibes and their renderer metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Style identifier selecting which animation sequence plays a wish.
///
/// The codec carries vibes as plain strings; this enum is for renderers and
/// composers that need to classify or enumerate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vibe {
    #[default]
    Cosmic,
    Anime,
    Glitch,
    Love,
    Chill,
    Memory,
    Deep,
}

/// Display metadata for one vibe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeInfo {
    pub label: &'static str,
    pub sub_label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Vibe {
    /// All vibes in catalog order.
    pub const ALL: [Vibe; 7] = [
        Vibe::Cosmic,
        Vibe::Anime,
        Vibe::Glitch,
        Vibe::Love,
        Vibe::Chill,
        Vibe::Memory,
        Vibe::Deep,
    ];

    /// Wire identifier, e.g. `"COSMIC"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Vibe::Cosmic => "COSMIC",
            Vibe::Anime => "ANIME",
            Vibe::Glitch => "GLITCH",
            Vibe::Love => "LOVE",
            Vibe::Chill => "CHILL",
            Vibe::Memory => "MEMORY",
            Vibe::Deep => "DEEP",
        }
    }

    pub fn info(self) -> VibeInfo {
        match self {
            Vibe::Cosmic => VibeInfo {
                label: "Cosmic",
                sub_label: "Deep & Infinite",
                description: "Ethereal, romantic, stardust.",
                icon: "🌌",
            },
            Vibe::Anime => VibeInfo {
                label: "Anime",
                sub_label: "Hype & Power",
                description: "High energy, impact frames, speed.",
                icon: "⚔️",
            },
            Vibe::Glitch => VibeInfo {
                label: "Glitch",
                sub_label: "Edgy & Raw",
                description: "Neon, datamosh, edgy.",
                icon: "🧩",
            },
            Vibe::Love => VibeInfo {
                label: "Love",
                sub_label: "Soft & Sweet",
                description: "Pure romance, hearts, warmth.",
                icon: "💝",
            },
            Vibe::Chill => VibeInfo {
                label: "Chill",
                sub_label: "Lo-fi & Calm",
                description: "Relaxed beats, clouds, peace.",
                icon: "☕",
            },
            Vibe::Memory => VibeInfo {
                label: "Memory",
                sub_label: "Nostalgic",
                description: "Golden hour, dust, timeless.",
                icon: "🕰️",
            },
            Vibe::Deep => VibeInfo {
                label: "Deep",
                sub_label: "Underwater",
                description: "Submerged, quiet, bioluminescent.",
                icon: "🌊",
            },
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the seven vibe identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown vibe: {0}")]
pub struct UnknownVibe(pub String);

impl FromStr for Vibe {
    type Err = UnknownVibe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vibe::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVibe(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for vibe in Vibe::ALL {
            assert_eq!(vibe.as_str().parse::<Vibe>().unwrap(), vibe);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("love".parse::<Vibe>().is_err());
        assert!("Love".parse::<Vibe>().is_err());
        assert_eq!("LOVE".parse::<Vibe>().unwrap(), Vibe::Love);
    }

    #[test]
    fn unknown_vibe_reports_value() {
        let err = "SPARKLE".parse::<Vibe>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown vibe: SPARKLE");
    }

    #[test]
    fn default_is_cosmic() {
        assert_eq!(Vibe::default(), Vibe::Cosmic);
    }

    #[test]
    fn serde_uses_wire_identifier() {
        assert_eq!(serde_json::to_string(&Vibe::Memory).unwrap(), r#""MEMORY""#);
        let v: Vibe = serde_json::from_str(r#""GLITCH""#).unwrap();
        assert_eq!(v, Vibe::Glitch);
    }

    #[test]
    fn catalog_labels_match_variants() {
        for vibe in Vibe::ALL {
            assert_eq!(vibe.info().label.to_uppercase(), vibe.as_str());
        }
    }
}
