//! Upload Modal Component
//!
//! Case intake form: title, prompt, code, HTML payload (pasted or loaded
//! from a local file), status and destination group.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::{AppContext, ModalKind};
use crate::models::{CaseDraft, CaseStatus};
use crate::store::{store_add_case, store_groups, use_app_store};

const NO_FILE: &str = "No file chosen";

#[component]
pub fn UploadModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (prompt, set_prompt) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (html, set_html) = signal(String::new());
    let (status, set_status) = signal(CaseStatus::Success);
    // Empty string = default destination (first group)
    let (dest, set_dest) = signal(String::new());
    let (file_name, set_file_name) = signal(NO_FILE.to_string());
    let (error, set_error) = signal(None::<String>);

    let file_input: NodeRef<html::Input> = NodeRef::new();

    let reset_fields = move || {
        set_title.set(String::new());
        set_prompt.set(String::new());
        set_code.set(String::new());
        set_html.set(String::new());
        set_status.set(CaseStatus::Success);
        set_dest.set(String::new());
        set_file_name.set(NO_FILE.to_string());
        set_error.set(None);
    };

    // Load a local .html file into the HTML field; the code field is
    // only filled from it when still empty at completion time.
    let on_file_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_file_name.set(file.name());
        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let reader_ref = reader.clone();
        let onload = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev: web_sys::ProgressEvent| {
            let Some(content) = reader_ref.result().ok().and_then(|v| v.as_string()) else {
                return;
            };
            if code.get_untracked().is_empty() {
                set_code.set(content.clone());
            }
            set_html.set(content);
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        if reader.read_as_text(&file).is_err() {
            web_sys::console::warn_1(&"[UPLOAD] read_as_text failed".into());
        }
    };

    let on_submit = move |_| {
        let draft = CaseDraft {
            title: title.get(),
            prompt: prompt.get(),
            code: code.get(),
            preview_html: html.get(),
            status: status.get(),
        };
        let dest_id = dest.get();
        let dest_id = (!dest_id.is_empty()).then_some(dest_id);
        match store_add_case(&store, dest_id.as_deref(), draft) {
            Ok(_) => {
                reset_fields();
                ctx.close_modal();
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    // Cancel discards everything entered
    let on_cancel = move |_| {
        reset_fields();
        ctx.close_modal();
    };

    view! {
        <Show when=move || ctx.active_modal.get() == Some(ModalKind::Upload)>
            <div class="modal-overlay">
                <div class="modal upload-modal">
                    <div class="modal-header">
                        <h3>"Upload Test Case"</h3>
                        <button class="modal-close" on:click=on_cancel>"×"</button>
                    </div>

                    <div class="form-field">
                        <label>"Case Title *"</label>
                        <input
                            type="text"
                            placeholder="e.g., Image Generation Test"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label>"Prompt"</label>
                        <textarea
                            placeholder="Enter the prompt used..."
                            prop:value=move || prompt.get()
                            on:input=move |ev| set_prompt.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-field">
                        <label>"Code Snippet"</label>
                        <textarea
                            class="mono"
                            placeholder="Paste relevant code snippet..."
                            prop:value=move || code.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-field">
                        <label>"HTML Preview File"</label>
                        <div class="file-row">
                            <button
                                type="button"
                                class="file-btn"
                                on:click=move |_| {
                                    if let Some(input) = file_input.get_untracked() {
                                        input.click();
                                    }
                                }
                            >
                                "Choose HTML"
                            </button>
                            <span class="file-name">{move || file_name.get()}</span>
                            <input
                                type="file"
                                accept=".html,.htm"
                                class="hidden"
                                node_ref=file_input
                                on:change=on_file_change
                            />
                        </div>
                        <textarea
                            class="mono"
                            placeholder="Or paste full HTML here..."
                            prop:value=move || html.get()
                            on:input=move |ev| set_html.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-field">
                        <label>"Status"</label>
                        <select on:change=move |ev| {
                            set_status.set(match event_target_value(&ev).as_str() {
                                "fail" => CaseStatus::Fail,
                                _ => CaseStatus::Success,
                            });
                        }>
                            <option value="success" prop:selected=move || status.get() == CaseStatus::Success>
                                "✅ Success"
                            </option>
                            <option value="fail" prop:selected=move || status.get() == CaseStatus::Fail>
                                "❌ Fail"
                            </option>
                        </select>
                    </div>

                    <div class="form-field">
                        <label>"Destination Group"</label>
                        <select on:change=move |ev| set_dest.set(event_target_value(&ev))>
                            <option value="" prop:selected=move || dest.get().is_empty()>
                                "First group (default)"
                            </option>
                            // Keyed on (id, title) so a rename refreshes the label
                            <For
                                each=move || store_groups(&store)
                                key=|g| (g.id.clone(), g.title.clone())
                                children=move |g| {
                                    let id = g.id.clone();
                                    view! {
                                        <option
                                            value=g.id.clone()
                                            prop:selected=move || dest.get() == id
                                        >
                                            {g.title.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    {move || {
                        error.get().map(|msg| view! { <p class="form-error">{msg}</p> })
                    }}

                    <div class="modal-footer">
                        <button class="primary-btn" on:click=on_submit>"✓ Add Case"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
