//! Mood presets
//!
//! Each mood maps to fixed hue/saturation/lightness ranges that
//! [`ColorGenerator::generate_by_mood`](super::ColorGenerator::generate_by_mood)
//! samples from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of palette moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Energetic,
    Professional,
}

/// Sampling ranges for a mood, as `(min, max)` pairs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodPreset {
    /// Hue range in degrees
    pub hue: (f64, f64),
    /// Saturation range in percent
    pub saturation: (f64, f64),
    /// Lightness range in percent
    pub lightness: (f64, f64),
}

impl Mood {
    /// All moods, in display order
    pub const ALL: [Mood; 3] = [Mood::Calm, Mood::Energetic, Mood::Professional];

    /// Ranges this mood samples from
    pub const fn preset(self) -> MoodPreset {
        match self {
            Mood::Calm => MoodPreset {
                hue: (180.0, 240.0),
                saturation: (30.0, 60.0),
                lightness: (60.0, 80.0),
            },
            Mood::Energetic => MoodPreset {
                hue: (0.0, 60.0),
                saturation: (70.0, 100.0),
                lightness: (45.0, 70.0),
            },
            Mood::Professional => MoodPreset {
                hue: (200.0, 250.0),
                saturation: (20.0, 50.0),
                lightness: (30.0, 60.0),
            },
        }
    }

    /// Lowercase name used on the command line and in JSON
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
            Mood::Professional => "professional",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown mood '{}' (expected calm, energetic or professional)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_presets() {
        assert_eq!(Mood::Calm.preset().hue, (180.0, 240.0));
        assert_eq!(Mood::Energetic.preset().saturation, (70.0, 100.0));
        assert_eq!(Mood::Professional.preset().lightness, (30.0, 60.0));
    }

    #[test]
    fn test_mood_ranges_are_ordered() {
        for mood in Mood::ALL {
            let preset = mood.preset();
            assert!(preset.hue.0 < preset.hue.1);
            assert!(preset.saturation.0 < preset.saturation.1);
            assert!(preset.lightness.0 < preset.lightness.1);
        }
    }

    #[test]
    fn test_mood_parse() {
        assert_eq!("Calm".parse::<Mood>().unwrap(), Mood::Calm);
        assert_eq!("professional".parse::<Mood>().unwrap(), Mood::Professional);
        assert!("sleepy".parse::<Mood>().is_err());
    }
}
