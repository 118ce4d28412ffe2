//! One cover sheet being filled in: the loaded template plus form values.
//!
//! The chart itself is owned by the host (it needs a live surface); export
//! takes a [`RadarChart`] snapshot and a [`Rasterizer`] so the whole path
//! runs headless in tests.

use radar::engine::RadarChart;
use radar::raster::Rasterizer;

use crate::config::AppConfig;
use crate::document::{ExportedDocument, build_document, export_filename};
use crate::error::{ExportError, TemplateError};
use crate::form::FormValues;
use crate::template::Template;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, Clone, Default)]
pub struct CoverSheet {
    config: AppConfig,
    template: Option<Template>,
    form: FormValues,
}

impl CoverSheet {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormValues {
        &mut self.form
    }

    /// Take the outcome of a template fetch.
    ///
    /// On success the template replaces the current one and the form starts
    /// over (date fields set to `today`). On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Hands the fetch error back for the host to report.
    pub fn load_template(&mut self, outcome: Result<Template, TemplateError>, today: &str) -> Result<(), TemplateError> {
        match outcome {
            Ok(template) => {
                self.form = FormValues::seeded(&template, today);
                self.template = Some(template);
                Ok(())
            }
            Err(err) => {
                log::warn!("qsheet: keeping previous template: {err}");
                Err(err)
            }
        }
    }

    /// Build the downloadable document from the form and `chart`.
    ///
    /// When the AI checkbox is set the chart is rasterized; if that yields
    /// nothing the document carries the usage caption alone.
    ///
    /// # Errors
    ///
    /// [`ExportError::NoTemplate`] before any template has loaded.
    pub async fn export<R: Rasterizer>(&self, chart: &RadarChart, rasterizer: &R) -> Result<ExportedDocument, ExportError> {
        let template = self.template.as_ref().ok_or(ExportError::NoTemplate)?;

        let graph = if self.form.used_ai() {
            let svg = chart.export_data_uri(&self.config.export_style);
            rasterizer.rasterize(&svg).await
        } else {
            None
        };
        if self.form.used_ai() && graph.is_none() {
            log::warn!("qsheet: exporting without graph image");
        }

        let html = build_document(template, &self.form, graph.as_ref(), &chart.usage_summary());
        Ok(ExportedDocument {
            filename: export_filename(template, &self.form),
            mime_type: self.config.mime_type.clone(),
            html,
        })
    }
}
