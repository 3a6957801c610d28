//! Prompt templates with `{variable}` substitution.

use crate::types::{AppError, Result};
use std::collections::HashMap;

/// A reusable prompt template.
///
/// Placeholders use single braces (`{question}`); literal braces are escaped
/// by doubling (`{{` / `}}`). Templates usually come from the prompt hub but
/// can be constructed locally.
///
/// # Example
///
/// ```ignore
/// let template = PromptTemplate::new(
///     "Answer using this context:\n{context}\n\nQuestion: {question}",
///     vec!["context".to_string(), "question".to_string()],
/// );
/// let prompt = template.format(&HashMap::from([
///     ("context".to_string(), "Rust is a language.".to_string()),
///     ("question".to_string(), "What is Rust?".to_string()),
/// ]))?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    /// Hub handle this template was pulled from, when applicable.
    pub repo: Option<String>,
    /// The raw template text.
    pub template: String,
    /// Placeholder names the template expects.
    pub input_variables: Vec<String>,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>, input_variables: Vec<String>) -> Self {
        Self {
            repo: None,
            template: template.into(),
            input_variables,
        }
    }

    /// Tag the template with the hub handle it was pulled from.
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Substitute placeholders with the given inputs.
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the variable when a placeholder has no
    /// matching input, and when the template contains an unmatched brace.
    pub fn format(&self, inputs: &HashMap<String, String>) -> Result<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        out.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(AppError::Parse(format!(
                                    "Unclosed placeholder '{{{}' in template",
                                    name
                                )));
                            }
                        }
                    }

                    let value = inputs.get(&name).ok_or_else(|| {
                        AppError::Parse(format!("Missing template variable '{}'", name))
                    })?;
                    out.push_str(value);
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        out.push('}');
                    } else {
                        return Err(AppError::Parse(
                            "Unmatched '}' in template".to_string(),
                        ));
                    }
                }
                c => out.push(c),
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_format_substitutes_variables() {
        let template = PromptTemplate::new(
            "Context: {context}\nQuestion: {question}",
            vec!["context".to_string(), "question".to_string()],
        );

        let result = template
            .format(&inputs(&[("context", "some docs"), ("question", "why?")]))
            .unwrap();
        assert_eq!(result, "Context: some docs\nQuestion: why?");
    }

    #[test]
    fn test_format_missing_variable_names_it() {
        let template = PromptTemplate::new("{question}", vec!["question".to_string()]);

        let err = template.format(&HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("'question'"));
    }

    #[test]
    fn test_format_escaped_braces_are_literal() {
        let template = PromptTemplate::new("{{\"q\": \"{question}\"}}", vec![]);

        let result = template.format(&inputs(&[("question", "hi")])).unwrap();
        assert_eq!(result, "{\"q\": \"hi\"}");
    }

    #[rstest]
    #[case("start {question")]
    #[case("stray } brace")]
    fn test_format_rejects_unbalanced_braces(#[case] template: &str) {
        let template = PromptTemplate::new(template, vec![]);
        assert!(template.format(&inputs(&[("question", "x")])).is_err());
    }

    #[test]
    fn test_extra_inputs_ignored() {
        let template = PromptTemplate::new("{a}", vec!["a".to_string()]);
        let result = template
            .format(&inputs(&[("a", "1"), ("unused", "2")]))
            .unwrap();
        assert_eq!(result, "1");
    }

    #[test]
    fn test_with_repo_tags_handle() {
        let template =
            PromptTemplate::new("{q}", vec!["q".to_string()]).with_repo("rlm/rag-prompt");
        assert_eq!(template.repo.as_deref(), Some("rlm/rag-prompt"));
    }
}
