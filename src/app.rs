//! Case Board App
//!
//! Composition root: store and context provisioning, header, controls,
//! group list and the three modals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AppHeader, DeleteModal, GroupPanel, UploadModal, ViewerModal};
use crate::context::{AppContext, ModalKind};
use crate::models::{DeleteTarget, ViewerPayload};
use crate::store::{store_add_group, store_groups, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // Overlay state
    let active_modal = signal(None::<ModalKind>);
    let viewer_payload = signal(None::<ViewerPayload>);
    let delete_target = signal(None::<DeleteTarget>);

    let ctx = AppContext::new(active_modal, viewer_payload, delete_target);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <AppHeader />

            <div class="controls-row">
                <button class="ghost-btn" on:click=move |_| store_add_group(&store)>
                    "+ New Group"
                </button>
                <button class="primary-btn" on:click=move |_| ctx.open_upload()>
                    "🤖 Add Test Case"
                </button>
            </div>

            <main class="group-list">
                <For
                    each=move || store_groups(&store)
                    key=|group| group.id.clone()
                    children=move |group| view! { <GroupPanel group=group /> }
                />
            </main>

            <UploadModal />
            <ViewerModal />
            <DeleteModal />
        </div>
    }
}
