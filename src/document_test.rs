use super::*;
use crate::template::{ReflectionQuestion, StudentField};

fn template() -> Template {
    let field = |id: &str, label: &str| StudentField {
        id: id.into(),
        label: label.into(),
        placeholder: String::new(),
        kind: None,
    };
    Template {
        name: "ENGL".into(),
        student_fields: vec![field("studentName", "Student Name"), field("studentId", "Student ID"), field("moduleCode", "Module Code")],
        ai_checkbox_label: "I used generative AI".into(),
        radar_labels: vec!["Conception".into(), "Research".into(), "Drafting".into()],
        reflection_questions: vec![ReflectionQuestion {
            id: "q1".into(),
            letter: "a".into(),
            text: "Which tools?".into(),
            placeholder: String::new(),
            word_limit: 100,
        }],
    }
}

fn png() -> RasterImage {
    RasterImage::from_png(&[1, 2, 3], 320, 320)
}

// =============================================================
// Escaping
// =============================================================

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html(r#"<b>"Tom" & Jerry</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; Jerry&lt;/b&gt;");
}

#[test]
fn escape_html_keeps_plain_text() {
    assert_eq!(escape_html("50% Conception — 80% Research"), "50% Conception — 80% Research");
}

// =============================================================
// Filename
// =============================================================

#[test]
fn filename_uses_student_id_and_module_code() {
    let mut form = FormValues::default();
    form.set_field("studentId", "31234567".into());
    form.set_field("moduleCode", "ENGL1001".into());
    assert_eq!(export_filename(&template(), &form), "Qsheet_31234567_ENGL1001.doc");
}

#[test]
fn filename_falls_back_for_blank_fields() {
    let form = FormValues::default();
    assert_eq!(export_filename(&template(), &form), "Qsheet_unknown_ENGL.doc");
}

// =============================================================
// Body
// =============================================================

#[test]
fn document_is_office_html_with_disclaimer() {
    let html = build_document(&template(), &FormValues::default(), None, "");
    assert!(html.starts_with("<html xmlns:o=\"urn:schemas-microsoft-com:office:office\""));
    assert!(html.contains("<p class=\"disclaimer\">By submitting this assignment"));
    assert!(html.contains("Academic Responsibility and Conduct Guidance</a>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn student_table_lists_fields_with_defaults() {
    let mut form = FormValues::default();
    form.set_field("studentName", "Ada <Lovelace>".into());
    let html = build_document(&template(), &form, None, "");
    assert!(html.contains("<tr><td>Student Name</td><td>Ada &lt;Lovelace&gt;</td></tr>"));
    assert!(html.contains("<tr><td>Student ID</td><td>N/A</td></tr>"));
}

#[test]
fn unchecked_box_omits_graph_caption_and_answers() {
    let mut form = FormValues::default();
    form.set_answer("q1", "secret answer".into());
    let html = build_document(&template(), &form, Some(&png()), "50% Conception");
    assert!(html.contains("☐ I used generative AI"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("class=\"caption\""));
    assert!(!html.contains("secret answer"));
    assert!(!html.contains("Which tools?"));
}

#[test]
fn checked_box_embeds_graph_with_caption() {
    let mut form = FormValues::default();
    form.set_used_ai(true);
    let html = build_document(&template(), &form, Some(&png()), "50% Conception — 80% Research");
    assert!(html.contains("☑ I used generative AI"));
    assert!(html.contains("<img src=\"data:image/png;base64,AQID\" width=\"200\" height=\"200\" />"));
    assert!(html.contains("<p class=\"caption\">50% Conception — 80% Research</p>"));
}

#[test]
fn missing_raster_leaves_caption_only() {
    let mut form = FormValues::default();
    form.set_used_ai(true);
    let html = build_document(&template(), &form, None, "50% Conception");
    assert!(html.contains("<p class=\"caption\">50% Conception</p>"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("class=\"graph\""));
}

#[test]
fn questions_render_with_letter_and_answer() {
    let mut form = FormValues::default();
    form.set_used_ai(true);
    form.set_answer("q1", "Copilot & ChatGPT".into());
    let html = build_document(&template(), &form, None, "");
    assert!(html.contains("<p class=\"question-title\">a) Which tools?</p>"));
    assert!(html.contains("<p class=\"question-answer\">Copilot &amp; ChatGPT</p>"));
}

#[test]
fn unanswered_questions_say_so() {
    let mut form = FormValues::default();
    form.set_used_ai(true);
    let html = build_document(&template(), &form, None, "");
    assert!(html.contains("<p class=\"question-answer\">No response provided</p>"));
}
