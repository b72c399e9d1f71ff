//! Application Context
//!
//! Shared overlay state provided via Leptos Context API. At most one
//! modal is active at a time; opening another replaces it.

use crate::models::{DeleteTarget, ViewerPayload};
use leptos::prelude::*;

/// Which overlay is currently open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Upload,
    Viewer,
    Delete,
}

/// App-wide overlay signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently open modal, if any - read
    pub active_modal: ReadSignal<Option<ModalKind>>,
    set_active_modal: WriteSignal<Option<ModalKind>>,
    /// Payload shown by the content viewer - read
    pub viewer_payload: ReadSignal<Option<ViewerPayload>>,
    set_viewer_payload: WriteSignal<Option<ViewerPayload>>,
    /// Deletion pending confirmation - read
    pub delete_target: ReadSignal<Option<DeleteTarget>>,
    set_delete_target: WriteSignal<Option<DeleteTarget>>,
}

impl AppContext {
    pub fn new(
        active_modal: (ReadSignal<Option<ModalKind>>, WriteSignal<Option<ModalKind>>),
        viewer_payload: (
            ReadSignal<Option<ViewerPayload>>,
            WriteSignal<Option<ViewerPayload>>,
        ),
        delete_target: (
            ReadSignal<Option<DeleteTarget>>,
            WriteSignal<Option<DeleteTarget>>,
        ),
    ) -> Self {
        Self {
            active_modal: active_modal.0,
            set_active_modal: active_modal.1,
            viewer_payload: viewer_payload.0,
            set_viewer_payload: viewer_payload.1,
            delete_target: delete_target.0,
            set_delete_target: delete_target.1,
        }
    }

    /// Open the case intake form
    pub fn open_upload(&self) {
        self.set_active_modal.set(Some(ModalKind::Upload));
    }

    /// Show a payload in the content viewer, replacing any current one
    pub fn open_viewer(&self, payload: ViewerPayload) {
        self.set_viewer_payload.set(Some(payload));
        self.set_active_modal.set(Some(ModalKind::Viewer));
    }

    /// Record a pending deletion and open the confirmation prompt
    ///
    /// Performs no deletion; only a confirmed prompt deletes.
    pub fn initiate_delete(&self, target: DeleteTarget) {
        self.set_delete_target.set(Some(target));
        self.set_active_modal.set(Some(ModalKind::Delete));
    }

    /// Close any open modal and drop its transient payloads
    ///
    /// Idempotent; closing with nothing open is a no-op.
    pub fn close_modal(&self) {
        self.set_active_modal.set(None);
        self.set_viewer_payload.set(None);
        self.set_delete_target.set(None);
    }
}
