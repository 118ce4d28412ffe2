//! Form state: student field values, the AI checkbox and reflection answers.

use std::collections::BTreeMap;
use std::fmt;

use crate::template::{ReflectionQuestion, Template};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Exported in place of a blank student field.
pub const MISSING_FIELD: &str = "N/A";
/// Exported in place of a blank reflection answer.
pub const MISSING_ANSWER: &str = "No response provided";

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word count against a question's limit, shown as `12/10 words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount {
    pub words: usize,
    pub limit: usize,
}

impl WordCount {
    #[must_use]
    pub fn of(text: &str, limit: usize) -> Self {
        Self { words: count_words(text), limit }
    }

    /// Over the limit; the counter gets a warning style. Not enforced.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.words > self.limit
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} words", self.words, self.limit)
    }
}

/// Everything the user has typed or ticked, keyed by template ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    fields: BTreeMap<String, String>,
    answers: BTreeMap<String, String>,
    used_ai: bool,
}

impl FormValues {
    /// Fresh form for `template`, with date fields pre-filled with `today`
    /// (ISO `YYYY-MM-DD`).
    #[must_use]
    pub fn seeded(template: &Template, today: &str) -> Self {
        let fields = template
            .student_fields
            .iter()
            .filter(|f| f.is_date())
            .map(|f| (f.id.clone(), today.to_owned()))
            .collect();
        Self { fields, ..Self::default() }
    }

    pub fn set_field(&mut self, id: &str, value: String) {
        self.fields.insert(id.to_owned(), value);
    }

    #[must_use]
    pub fn field(&self, id: &str) -> &str {
        self.fields.get(id).map_or("", String::as_str)
    }

    /// Field value for export: [`MISSING_FIELD`] when blank.
    #[must_use]
    pub fn field_or_default(&self, id: &str) -> &str {
        non_empty_or(self.field(id), MISSING_FIELD)
    }

    pub fn set_answer(&mut self, id: &str, value: String) {
        self.answers.insert(id.to_owned(), value);
    }

    #[must_use]
    pub fn answer(&self, id: &str) -> &str {
        self.answers.get(id).map_or("", String::as_str)
    }

    /// Answer for export: [`MISSING_ANSWER`] when blank.
    #[must_use]
    pub fn answer_or_default(&self, id: &str) -> &str {
        non_empty_or(self.answer(id), MISSING_ANSWER)
    }

    #[must_use]
    pub fn word_count(&self, question: &ReflectionQuestion) -> WordCount {
        WordCount::of(self.answer(&question.id), question.word_limit)
    }

    pub fn set_used_ai(&mut self, used_ai: bool) {
        self.used_ai = used_ai;
    }

    /// The AI checkbox. Reflection questions are shown only while it is set.
    #[must_use]
    pub fn used_ai(&self) -> bool {
        self.used_ai
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
