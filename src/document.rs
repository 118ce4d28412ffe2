//! The exported cover sheet: Office-flavoured HTML that Word opens as a `.doc`.
//!
//! Layout, top to bottom: the academic-conduct disclaimer, a two-column table
//! of student fields, the AI checkbox line and, only when AI was used, the
//! radar graph (or its caption alone when no raster is available) followed by
//! each reflection question with its answer. All user-supplied text is
//! escaped.

use radar::raster::RasterImage;

use crate::form::FormValues;
use crate::template::Template;

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

pub const STUDENT_ID_FIELD: &str = "studentId";
pub const MODULE_CODE_FIELD: &str = "moduleCode";
/// Filename stand-in for a blank student id.
pub const UNKNOWN_STUDENT: &str = "unknown";

/// Size of the embedded graph inside the document, in CSS pixels.
const GRAPH_DISPLAY_PX: u32 = 200;

const HEAD: &str = r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:w="urn:schemas-microsoft-com:office:word" xmlns="http://www.w3.org/TR/REC-html40">
<head>
<meta charset="utf-8">
<title>Qsheet</title>
<style>
body { font-family: Arial, sans-serif; font-size: 9pt; margin: 0; padding: 15pt; }
.disclaimer { font-size: 7.5pt; color: #333; margin-bottom: 10pt; line-height: 1.4; }
.disclaimer a { color: #0066ff; }
table { width: 100%; border-collapse: collapse; margin-bottom: 6pt; }
td { border: 1pt solid #bbb; padding: 3pt 6pt; font-size: 9pt; }
td:first-child { font-weight: bold; width: 28%; background: #f5f5f5; }
.checkbox { font-size: 9pt; margin: 6pt 0; }
.graph { text-align: center; margin: 8pt 0; }
.caption { font-size: 8pt; color: #555; text-align: center; margin-top: 4pt; }
.question { margin-bottom: 6pt; }
.question-title { font-weight: bold; font-size: 9pt; margin-bottom: 2pt; }
.question-answer { margin-left: 12pt; font-size: 9pt; }
</style>
</head>
<body>
"#;

const GUIDANCE_URL: &str = "https://library.soton.ac.uk/sash/what-is-academic-responsibility";
const REGULATIONS_URL: &str = "https://www.southampton.ac.uk/about/governance/regulations-policies/student-regulations/academic-responsibility-conduct";

fn disclaimer() -> String {
    let regulations = format!(
        r#"<a href="{REGULATIONS_URL}">Regulations Governing Academic Responsibility and Conduct</a>"#
    );
    format!(
        concat!(
            r#"<p class="disclaimer">By submitting this assignment, I confirm that: "#,
            r#"1) I have read and understood the University's "#,
            r#"<a href="{guidance}">Academic Responsibility and Conduct Guidance</a> "#,
            "and that in the attached submission I have worked within the expectations of the {regs}. ",
            "2) I am aware that failure to act in accordance with the {regs} may lead to the imposition of ",
            "penalties which, for the most serious cases, may include termination of programme. ",
            "3) I consent to the University copying and distributing any or all of my work in any form and ",
            "using third parties (who may be based outside the EU/EEA) to verify whether my work contains ",
            "plagiarised material, and for quality assurance purposes.</p>\n",
        ),
        guidance = GUIDANCE_URL,
        regs = regulations,
    )
}

/// A finished document ready to hand to the browser as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub filename: String,
    pub mime_type: String,
    pub html: String,
}

/// Escape text for inclusion in element content or a quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `Qsheet_<studentId>_<moduleCode>.doc`, with `unknown` for a blank student
/// id and the template name for a blank module code.
#[must_use]
pub fn export_filename(template: &Template, form: &FormValues) -> String {
    let student_id = match form.field(STUDENT_ID_FIELD) {
        "" => UNKNOWN_STUDENT,
        id => id,
    };
    let module_code = match form.field(MODULE_CODE_FIELD) {
        "" => template.name.as_str(),
        code => code,
    };
    format!("Qsheet_{student_id}_{module_code}.doc")
}

/// Render the whole document.
///
/// `graph` is the rasterized chart, if one could be produced; `summary` is
/// the usage caption. Both are ignored when the AI checkbox is clear.
#[must_use]
pub fn build_document(template: &Template, form: &FormValues, graph: Option<&RasterImage>, summary: &str) -> String {
    let mut html = String::from(HEAD);
    html.push_str(&disclaimer());

    html.push_str("<table>\n");
    for field in &template.student_fields {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&field.label),
            escape_html(form.field_or_default(&field.id)),
        ));
    }
    html.push_str("</table>\n");

    let mark = if form.used_ai() { '☑' } else { '☐' };
    html.push_str(&format!(
        "<p class=\"checkbox\">{mark} {}</p>\n",
        escape_html(&template.ai_checkbox_label)
    ));

    if form.used_ai() {
        let caption = format!("<p class=\"caption\">{}</p>", escape_html(summary));
        match graph {
            Some(image) => html.push_str(&format!(
                "<div class=\"graph\">\n<img src=\"{}\" width=\"{GRAPH_DISPLAY_PX}\" height=\"{GRAPH_DISPLAY_PX}\" />\n{caption}\n</div>\n",
                escape_html(image.data_uri()),
            )),
            None => {
                html.push_str(&caption);
                html.push('\n');
            }
        }
        for q in &template.reflection_questions {
            html.push_str(&format!(
                "<div class=\"question\">\n<p class=\"question-title\">{}) {}</p>\n<p class=\"question-answer\">{}</p>\n</div>\n",
                escape_html(&q.letter),
                escape_html(&q.text),
                escape_html(form.answer_or_default(&q.id)),
            ));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}
