//! Style Transformer — reframes an explanation for the learner's declared style.
//!
//! Content is never rewritten: `bullets` only splits on sentence boundaries,
//! the other styles only prepend a fixed framing phrase.

use crate::explain::prompts::{ANALOGY_PREFIX, BULLET_MARKER, SIMPLE_PREFIX, STEPS_PREFIX};
use crate::models::profile::LearningStyle;
use crate::text::split_sentences;

impl LearningStyle {
    /// Applies this style to `text`. Total over all inputs.
    pub fn apply(&self, text: &str) -> String {
        match self {
            LearningStyle::Bullets => split_sentences(text)
                .into_iter()
                .map(|sentence| format!("{BULLET_MARKER}{sentence}"))
                .collect::<Vec<_>>()
                .join("\n"),
            LearningStyle::Steps => format!("{STEPS_PREFIX} {text}"),
            LearningStyle::Analogy => format!("{ANALOGY_PREFIX} {text}"),
            LearningStyle::Simple => format!("{SIMPLE_PREFIX} {text}"),
        }
    }
}

/// Transforms `text` according to a raw style tag. Unknown tags get the
/// `simple` framing.
pub fn transform_explanation(text: &str, style: &str) -> String {
    LearningStyle::from_tag(style).apply(text)
}
