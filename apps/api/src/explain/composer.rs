//! Request Composer — folds the learner's tone and pace into the outbound question.
//!
//! The style transform is never applied here; it runs on the answer.

use crate::explain::prompts::DEFAULT_LEARNING_GOAL;
use crate::models::profile::Profile;

/// Builds the study-mode request line:
/// `(<tone> tone, <pace> pace) <subject>: <question>. Learning goal: <goal>`.
/// A missing or blank goal falls back to the default learning goal.
pub fn compose_study_request(
    profile: &Profile,
    subject: &str,
    question: &str,
    goal: Option<&str>,
) -> String {
    let goal = goal
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(DEFAULT_LEARNING_GOAL);
    format!(
        "({} tone, {} pace) {subject}: {question}. Learning goal: {goal}",
        profile.tone, profile.pace
    )
}

/// Builds the free-chat request line: `(<tone> tone, <pace> pace) <message>`.
pub fn compose_chat_request(profile: &Profile, message: &str) -> String {
    format!("({} tone, {} pace) {message}", profile.tone, profile.pace)
}
