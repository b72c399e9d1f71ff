//! Case Card Component
//!
//! Draggable card for a single test case with status dot and action
//! buttons (code, prompt, preview, delete).

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::AppContext;
use crate::models::{CaseDragPayload, CaseStatus, DeleteTarget, TestCase, ViewerKind, ViewerPayload};

#[component]
pub fn CaseCard(case: TestCase, group_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let case_id = case.id.clone();
    let source_group_id = group_id.clone();
    let on_dragstart = move |ev: DragEvent| {
        dnd_transfer::write_payload(
            &ev,
            &CaseDragPayload {
                case_id: case_id.clone(),
                source_group_id: source_group_id.clone(),
            },
        );
    };

    let dot_class = match case.status {
        CaseStatus::Success => "status-dot success",
        CaseStatus::Fail => "status-dot fail",
    };

    let title = case.title.clone();
    let code_title = case.title.clone();
    let code_content = case.code.clone();
    let view_code = move |_| {
        ctx.open_viewer(ViewerPayload {
            kind: ViewerKind::Code,
            title: code_title.clone(),
            content: code_content.clone(),
        });
    };

    let prompt_title = case.title.clone();
    let prompt_content = case.prompt.clone();
    let view_prompt = move |_| {
        ctx.open_viewer(ViewerPayload {
            kind: ViewerKind::Prompt,
            title: prompt_title.clone(),
            content: prompt_content.clone(),
        });
    };

    // External addresses open in a new tab; inline documents go to the
    // sandboxed viewer.
    let preview_title = case.title.clone();
    let preview_content = case.preview_html.clone();
    let view_preview = move |_| {
        if preview_content.starts_with("http") {
            if let Some(win) = web_sys::window() {
                let _ = win.open_with_url_and_target(&preview_content, "_blank");
            }
        } else {
            ctx.open_viewer(ViewerPayload {
                kind: ViewerKind::Preview,
                title: preview_title.clone(),
                content: preview_content.clone(),
            });
        }
    };

    let delete_group_id = group_id.clone();
    let delete_case_id = case.id.clone();
    let delete_case = move |_| {
        ctx.initiate_delete(DeleteTarget::Case {
            group_id: delete_group_id.clone(),
            case_id: delete_case_id.clone(),
        });
    };

    view! {
        <div class="case-card" draggable="true" on:dragstart=on_dragstart>
            <div class=dot_class></div>
            <h4 class="case-title" title=title.clone()>{title.clone()}</h4>
            <div class="case-actions">
                <button class="case-btn" title="View Code" on:click=view_code>
                    "</>"
                </button>
                <button class="case-btn" title="View Prompt" on:click=view_prompt>
                    "💬"
                </button>
                <button class="case-btn" title="Preview" on:click=view_preview>
                    "👁"
                </button>
                <button class="case-btn danger" title="Delete" on:click=delete_case>
                    "×"
                </button>
            </div>
        </div>
    }
}
