//! Cover-sheet templates.
//!
//! A template is a JSON resource describing the student fields, the AI-usage
//! checkbox label, the radar axes and the reflection questions for one kind of
//! assignment. Templates are fetched by id from `<template_dir>/<id>.json`.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

pub const MIN_RADAR_LABELS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Display name, also the filename fallback for a blank module code.
    /// Filled with the template id when the resource omits it.
    #[serde(default)]
    pub name: String,
    pub student_fields: Vec<StudentField>,
    pub ai_checkbox_label: String,
    pub radar_labels: Vec<String>,
    #[serde(default)]
    pub reflection_questions: Vec<ReflectionQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentField {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    /// HTML input type; `text` when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl StudentField {
    #[must_use]
    pub fn input_type(&self) -> &str {
        self.kind.as_deref().unwrap_or("text")
    }

    #[must_use]
    pub fn is_date(&self) -> bool {
        self.input_type() == "date"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionQuestion {
    pub id: String,
    pub letter: String,
    pub text: String,
    #[serde(default)]
    pub placeholder: String,
    pub word_limit: usize,
}

impl Template {
    /// Parse and validate the JSON body of template `id`.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Parse`] for malformed JSON or a missing required key,
    /// [`TemplateError::TooFewAxes`] for fewer than three radar labels.
    pub fn parse(id: &str, body: &str) -> Result<Self, TemplateError> {
        let mut template: Self = serde_json::from_str(body)?;
        if template.radar_labels.len() < MIN_RADAR_LABELS {
            return Err(TemplateError::TooFewAxes { count: template.radar_labels.len() });
        }
        if template.name.trim().is_empty() {
            template.name = id.to_owned();
        }
        Ok(template)
    }

    #[must_use]
    pub fn field(&self, id: &str) -> Option<&StudentField> {
        self.student_fields.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&ReflectionQuestion> {
        self.reflection_questions.iter().find(|q| q.id == id)
    }
}

/// Somewhere templates can be fetched from.
pub trait TemplateSource {
    fn fetch(&self, id: &str) -> impl Future<Output = Result<Template, TemplateError>>;
}

/// Fetches templates over HTTP relative to the page.
#[cfg(feature = "csr")]
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    config: crate::config::AppConfig,
}

#[cfg(feature = "csr")]
impl HttpTemplateSource {
    #[must_use]
    pub fn new(config: crate::config::AppConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "csr")]
impl TemplateSource for HttpTemplateSource {
    async fn fetch(&self, id: &str) -> Result<Template, TemplateError> {
        let url = self.config.template_url(id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| TemplateError::Request { url: url.clone(), message: e.to_string() })?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(TemplateError::Status { url, status });
        }
        let body = resp
            .text()
            .await
            .map_err(|e| TemplateError::Request { url: url.clone(), message: e.to_string() })?;
        let template = Template::parse(id, &body)?;
        log::debug!("qsheet: loaded template {id} ({} axes)", template.radar_labels.len());
        Ok(template)
    }
}
