// Fixed framing strings for explanations and the canned answer openers.

/// Marker placed before each sentence in the `bullets` style.
pub const BULLET_MARKER: &str = "• ";

/// Prefix for the `steps` style. Followed by a single space and the text.
pub const STEPS_PREFIX: &str = "Step 1→2→3.";

/// Prefix for the `analogy` style. Followed by a single space and the text.
pub const ANALOGY_PREFIX: &str = "Imagine a story:";

/// Prefix for the `simple` style and every unrecognised tag.
pub const SIMPLE_PREFIX: &str = "In one sentence:";

/// Used when the caller supplies no learning goal for the topic.
pub const DEFAULT_LEARNING_GOAL: &str = "Understand the topic";

/// Openers the demo answer backend prepends to the echoed request.
pub const DEMO_OPENERS: [&str; 3] = [
    "Let's break that down…",
    "Here’s an analogy…",
    "A quick summary then an example…",
];
