//! Delete Modal Component
//!
//! Confirmation gate for destructive operations. Nothing is deleted
//! until the Delete button dispatches the pending target.

use leptos::prelude::*;

use crate::context::{AppContext, ModalKind};
use crate::store::{store_apply_delete, use_app_store};

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_confirm = move |_| {
        if let Some(target) = ctx.delete_target.get_untracked() {
            store_apply_delete(&store, &target);
        }
        ctx.close_modal();
    };

    let subject = move || {
        match ctx.delete_target.get() {
            Some(target) if target.is_group() => "Group and all its cases",
            _ => "Test Case",
        }
    };

    let is_open = move || {
        ctx.active_modal.get() == Some(ModalKind::Delete) && ctx.delete_target.get().is_some()
    };

    view! {
        <Show when=is_open>
            <div class="modal-overlay">
                <div class="modal delete-modal">
                    <div class="delete-heading">
                        <span class="delete-icon">"⚠"</span>
                        <h3>"Confirm Deletion"</h3>
                    </div>
                    <p class="delete-message">
                        "Are you sure you want to delete this " {subject}
                        "? This action cannot be undone."
                    </p>
                    <div class="modal-footer">
                        <button class="ghost-btn" on:click=move |_| ctx.close_modal()>
                            "Cancel"
                        </button>
                        <button class="danger-btn" on:click=on_confirm>"Delete"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
