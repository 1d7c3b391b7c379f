//! Annotator — renders CV lines as bullets, tagging each with the first JD
//! keyword it mentions.

use serde::Serialize;

use crate::text::non_empty_lines;

/// One trimmed, non-empty CV line and the first keyword found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    pub line: String,
    pub keyword: Option<String>,
}

impl AnnotatedLine {
    /// `• <line> — (<keyword>)` on a hit, `• <line>` otherwise.
    pub fn render(&self) -> String {
        match &self.keyword {
            Some(keyword) => format!("• {} — ({keyword})", self.line),
            None => format!("• {}", self.line),
        }
    }
}

/// Splits `cv_text` into trimmed non-empty lines and pairs each with the first
/// keyword, in list order, that it contains case-insensitively. Empty keywords
/// are skipped since they would match every line.
pub fn annotate_lines(cv_text: &str, keywords: &[String]) -> Vec<AnnotatedLine> {
    let lowered_keywords: Vec<(String, &String)> = keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| (k.to_lowercase(), k))
        .collect();

    non_empty_lines(cv_text)
        .into_iter()
        .map(|line| {
            let lowered_line = line.to_lowercase();
            let keyword = lowered_keywords
                .iter()
                .find(|(lowered, _)| lowered_line.contains(lowered.as_str()))
                .map(|(_, original)| (*original).clone());
            AnnotatedLine {
                line: line.to_string(),
                keyword,
            }
        })
        .collect()
}

/// Newline-joined bullet rendering of [`annotate_lines`].
pub fn render_annotated_lines(cv_text: &str, keywords: &[String]) -> String {
    annotate_lines(cv_text, keywords)
        .iter()
        .map(AnnotatedLine::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tags_first_matching_keyword_in_list_order() {
        let cv = "Built Python dashboards for reporting";
        let out = render_annotated_lines(cv, &kws(&["reporting", "python", "dashboards"]));
        assert_eq!(out, "• Built Python dashboards for reporting — (reporting)");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let out = render_annotated_lines("Led SQL ANALYST team", &kws(&["analyst"]));
        assert_eq!(out, "• Led SQL ANALYST team — (analyst)");
        let out = render_annotated_lines("led analyst team", &kws(&["Analyst"]));
        assert_eq!(out, "• led analyst team — (Analyst)");
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        let out = render_annotated_lines("Data analysts guild", &kws(&["analyst"]));
        assert_eq!(out, "• Data analysts guild — (analyst)");
    }

    #[test]
    fn test_unmatched_lines_are_plain_bullets() {
        let cv = "  Python developer  \n\n\n   \nKeen gardener\r\n";
        let out = render_annotated_lines(cv, &kws(&["python"]));
        assert_eq!(out, "• Python developer — (python)\n• Keen gardener");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(render_annotated_lines("", &kws(&["python"])), "");
        assert_eq!(render_annotated_lines("\n \n", &[]), "");
        assert_eq!(render_annotated_lines("Only line", &[]), "• Only line");
    }

    #[test]
    fn test_empty_keyword_is_ignored() {
        let lines = annotate_lines("Some line", &kws(&["", "line"]));
        assert_eq!(lines[0].keyword.as_deref(), Some("line"));
    }

    #[test]
    fn test_structured_lines() {
        let lines = annotate_lines("Rust engineer\nChess club", &kws(&["rust"]));
        assert_eq!(
            lines,
            vec![
                AnnotatedLine {
                    line: "Rust engineer".to_string(),
                    keyword: Some("rust".to_string()),
                },
                AnnotatedLine {
                    line: "Chess club".to_string(),
                    keyword: None,
                },
            ]
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let cv = "Python SQL analyst\nReporting dashboards\nHobbies: chess";
        let keywords = kws(&["analyst", "reporting", "dashboards", "python"]);
        let first = render_annotated_lines(cv, &keywords);
        let second = render_annotated_lines(cv, &keywords);
        assert_eq!(first, second);
    }
}
