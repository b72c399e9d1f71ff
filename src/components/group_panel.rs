//! Group Panel Component
//!
//! One group container: editable title, delete button, and a case area
//! that accepts drops from other groups. Panels are keyed by group id,
//! so the case list is derived from the store rather than the
//! creation-time snapshot.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::components::CaseCard;
use crate::context::AppContext;
use crate::models::{CaseDragPayload, DeleteTarget, TestGroup};
use crate::store::{store_group_cases, store_move_case, store_rename_group, use_app_store};

#[component]
pub fn GroupPanel(group: TestGroup) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let group_id = group.id.clone();
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        // Fail-closed decode: a malformed payload is an ineffective drop
        let Some(payload) = dnd_transfer::read_payload::<CaseDragPayload>(&ev) else {
            return;
        };
        store_move_case(&store, &payload.case_id, &payload.source_group_id, &group_id);
    };

    let rename_id = group.id.clone();
    let on_title_change = move |ev: web_sys::Event| {
        store_rename_group(&store, &rename_id, &event_target_value(&ev));
    };

    let delete_id = group.id.clone();
    let delete_group = move |_| {
        ctx.initiate_delete(DeleteTarget::Group {
            group_id: delete_id.clone(),
        });
    };

    let cases_id = group.id.clone();
    let cases = Memo::new(move |_| store_group_cases(&store, &cases_id));

    let case_group_id = group.id.clone();

    view! {
        <div
            class="group-panel"
            on:drop=on_drop
            on:dragover=move |ev: DragEvent| dnd_transfer::allow_drop(&ev)
        >
            <div class="group-header">
                <input
                    class="group-title"
                    type="text"
                    prop:value=group.title.clone()
                    on:change=on_title_change
                />
                <button class="group-delete-btn" title="Delete group" on:click=delete_group>
                    "🗑"
                </button>
            </div>
            <div class="group-body">
                <Show when=move || cases.with(|c| c.is_empty())>
                    <div class="group-empty-hint">"Drag items here or add new cases"</div>
                </Show>
                <For
                    each=move || cases.get()
                    key=|case| case.id.clone()
                    children=move |case| {
                        view! { <CaseCard case=case group_id=case_group_id.clone() /> }
                    }
                />
            </div>
        </div>
    }
}
