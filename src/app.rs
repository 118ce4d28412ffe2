//! Browser UI: the cover-sheet form wrapped around the interactive chart.
//!
//! ARCHITECTURE
//! ============
//! Form state lives in one `RwSignal<CoverSheet>`. The chart is imperative
//! (`radar::dom::RadarWidget`) and is mounted into a host `<div>` by an
//! effect, which also pushes new axis labels into it whenever a template
//! finishes loading. `template_seq` counts successful loads so that the form
//! and chart rebuild on a new template but not on every keystroke.

use leptos::prelude::*;

use crate::form::WordCount;
use crate::session::CoverSheet;
use crate::template::{ReflectionQuestion, StudentField};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use radar::dom::{CanvasRasterizer, RadarWidget};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(feature = "csr")]
use crate::document::ExportedDocument;
#[cfg(feature = "csr")]
use crate::error::ExportError;
#[cfg(feature = "csr")]
use crate::template::{HttpTemplateSource, TemplateSource};

#[component]
pub fn App() -> impl IntoView {
    let sheet = RwSignal::new(CoverSheet::default());
    let template_seq = RwSignal::new(0_u64);
    let chart_host = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "csr")]
    let widget = Rc::new(RefCell::new(None::<RadarWidget>));

    #[cfg(feature = "csr")]
    {
        let id = sheet.with_untracked(|s| s.config().default_template.clone());
        load_template(sheet, template_seq, id);
    }

    #[cfg(feature = "csr")]
    {
        let widget = Rc::clone(&widget);
        Effect::new(move || {
            let Some(host) = chart_host.get() else {
                return;
            };
            let seq = template_seq.get();
            let mut slot = widget.borrow_mut();
            if slot.is_none() {
                let config = sheet.with_untracked(|s| s.config().radar);
                match RadarWidget::mount_in(&host, config) {
                    Ok(mounted) => *slot = Some(mounted),
                    Err(err) => {
                        log::warn!("qsheet: could not mount chart: {err:?}");
                        return;
                    }
                }
            }
            if seq == 0 {
                return;
            }
            let labels = sheet.with_untracked(|s| s.template().map(|t| t.radar_labels.clone()));
            if let (Some(chart), Some(labels)) = (slot.as_ref(), labels) {
                chart.load_labels(labels);
            }
        });
    }

    let on_export = {
        #[cfg(feature = "csr")]
        {
            let widget = Rc::clone(&widget);
            move |_ev: leptos::ev::MouseEvent| {
                let chart = widget
                    .borrow()
                    .as_ref()
                    .map(RadarWidget::chart)
                    .unwrap_or_default();
                let snapshot = sheet.get_untracked();
                leptos::task::spawn_local(async move {
                    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                        return;
                    };
                    match snapshot.export(&chart, &CanvasRasterizer::new(document)).await {
                        Ok(doc) => {
                            if let Err(err) = download(&doc) {
                                log::warn!("qsheet: download failed: {err:?}");
                                alert("Could not download the cover sheet.");
                            }
                        }
                        Err(ExportError::NoTemplate) => alert("No template loaded"),
                    }
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let student_fields = move || {
        template_seq.track();
        sheet
            .with_untracked(|s| s.template().map(|t| t.student_fields.clone()))
            .unwrap_or_default()
            .into_iter()
            .map(|field| view! { <StudentFieldInput field=field sheet=sheet /> })
            .collect_view()
    };

    let questions = move || {
        template_seq.track();
        sheet
            .with_untracked(|s| s.template().map(|t| t.reflection_questions.clone()))
            .unwrap_or_default()
            .into_iter()
            .map(|question| view! { <QuestionBlock question=question sheet=sheet /> })
            .collect_view()
    };

    let used_ai = move || sheet.with(|s| s.form().used_ai());

    view! {
        <main class="qsheet">
            <h1>"AI Usage Cover Sheet"</h1>
            <section class="student-fields">{student_fields}</section>
            <label class="ai-checkbox">
                <input
                    type="checkbox"
                    id="usedAI"
                    prop:checked=used_ai
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        sheet.update(|s| s.form_mut().set_used_ai(checked));
                    }
                />
                <span>
                    {move || {
                        sheet.with(|s| s.template().map(|t| t.ai_checkbox_label.clone())).unwrap_or_default()
                    }}
                </span>
            </label>
            <section class="ai-questions" class:visible=used_ai>
                <div class="radar-container" node_ref=chart_host></div>
                <div class="reflection-questions">{questions}</div>
            </section>
            <button class="export-button" on:click=on_export>
                "Generate Cover Sheet"
            </button>
        </main>
    }
}

#[component]
fn StudentFieldInput(field: StudentField, sheet: RwSignal<CoverSheet>) -> impl IntoView {
    let initial = sheet.with_untracked(|s| s.form().field(&field.id).to_owned());
    let input_type = field.input_type().to_owned();
    let id = field.id.clone();
    view! {
        <div class="form-group">
            <label for=field.id.clone()>{format!("{}:", field.label)}</label>
            <input
                type=input_type
                id=field.id.clone()
                placeholder=field.placeholder.clone()
                prop:value=initial
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    sheet.update(|s| s.form_mut().set_field(&id, value));
                }
            />
        </div>
    }
}

#[component]
fn QuestionBlock(question: ReflectionQuestion, sheet: RwSignal<CoverSheet>) -> impl IntoView {
    let limit = question.word_limit;
    let count = RwSignal::new(sheet.with_untracked(|s| s.form().word_count(&question)));
    let id = question.id.clone();
    view! {
        <div class="question-block">
            <div class="question-label">
                <span class="question-letter">{question.letter.clone()}</span>
                <span>{question.text.clone()}</span>
            </div>
            <textarea
                id=question.id.clone()
                placeholder=question.placeholder.clone()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    count.set(WordCount::of(&text, limit));
                    sheet.update(|s| s.form_mut().set_answer(&id, text));
                }
            ></textarea>
            <p class="word-count" class:warning=move || count.get().is_over()>
                {move || count.get().to_string()}
            </p>
        </div>
    }
}

#[cfg(feature = "csr")]
fn load_template(sheet: RwSignal<CoverSheet>, template_seq: RwSignal<u64>, id: String) {
    let source = HttpTemplateSource::new(sheet.with_untracked(|s| s.config().clone()));
    leptos::task::spawn_local(async move {
        let outcome = source.fetch(&id).await;
        let today = today_iso();
        let mut result = Ok(());
        sheet.update(|s| result = s.load_template(outcome, &today));
        match result {
            Ok(()) => template_seq.update(|n| *n += 1),
            Err(_) => alert(&format!("Failed to load template: {id}")),
        }
    });
}

/// Today's date as `YYYY-MM-DD` (UTC).
#[cfg(feature = "csr")]
fn today_iso() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.get(..10).unwrap_or(&iso).to_owned()
}

#[cfg(feature = "csr")]
fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("qsheet: alert failed: {err:?}");
    }
}

/// Hand `doc` to the browser as a file download via a temporary Blob URL.
#[cfg(feature = "csr")]
fn download(doc: &ExportedDocument) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&doc.html));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&doc.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(&doc.filename);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&url)?;
    log::debug!("qsheet: downloaded {}", doc.filename);
    Ok(())
}
