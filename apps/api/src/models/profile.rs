//! The learner profile captured during onboarding.
//!
//! Every tag parses permissively: an unknown value falls back to a default
//! variant instead of failing, so a stale or hand-edited profile still works.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How explanations are framed for the learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LearningStyle {
    #[default]
    Bullets,
    Steps,
    Analogy,
    Simple,
}

impl LearningStyle {
    /// Unrecognised tags map to `Simple`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bullets" => LearningStyle::Bullets,
            "steps" => LearningStyle::Steps,
            "analogy" => LearningStyle::Analogy,
            _ => LearningStyle::Simple,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Bullets => "bullets",
            LearningStyle::Steps => "steps",
            LearningStyle::Analogy => "analogy",
            LearningStyle::Simple => "simple",
        }
    }
}

impl From<String> for LearningStyle {
    fn from(tag: String) -> Self {
        LearningStyle::from_tag(&tag)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
    #[default]
    Encouraging,
    Neutral,
    Direct,
}

impl Tone {
    /// Unrecognised tags map to `Encouraging`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "neutral" => Tone::Neutral,
            "direct" => Tone::Direct,
            _ => Tone::Encouraging,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Encouraging => "encouraging",
            Tone::Neutral => "neutral",
            Tone::Direct => "direct",
        }
    }
}

impl From<String> for Tone {
    fn from(tag: String) -> Self {
        Tone::from_tag(&tag)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Pace {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Pace {
    /// Unrecognised tags map to `Normal`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "slow" => Pace::Slow,
            "fast" => Pace::Fast,
            _ => Pace::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Slow => "slow",
            Pace::Normal => "normal",
            Pace::Fast => "fast",
        }
    }
}

impl From<String> for Pace {
    fn from(tag: String) -> Self {
        Pace::from_tag(&tag)
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Learner preferences. Owned by the caller and passed by value; nothing in the
/// core mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub style: LearningStyle,
    pub tone: Tone,
    pub pace: Pace,
    pub assessed: bool,
}
