// Personalised explanations: request composition, the answer backend, and the
// style transform applied to every answer before it is shown.

pub mod answer;
pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod style;
