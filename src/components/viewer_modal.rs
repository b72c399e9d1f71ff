//! Viewer Modal Component
//!
//! Full-screen viewer for a case's code, prompt or rendered HTML
//! preview. Previews go through a blob object URL into a sandboxed
//! iframe; the URL is revoked whenever the payload changes, the viewer
//! closes, or the component unmounts.

use leptos::prelude::*;

use crate::context::{AppContext, ModalKind};
use crate::models::{ViewerKind, ViewerPayload};
use crate::preview::ObjectUrl;

#[component]
pub fn ViewerModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Single slot: replacing or clearing drops (and revokes) the old URL
    let (frame_url, set_frame_url) = signal(None::<ObjectUrl>);

    Effect::new(move |_| {
        let next = match ctx.viewer_payload.get() {
            Some(payload) if payload.kind == ViewerKind::Preview => {
                match ObjectUrl::for_html(&payload.content) {
                    Ok(url) => Some(url),
                    Err(err) => {
                        web_sys::console::warn_2(&"[VIEWER] blob url failed".into(), &err);
                        None
                    }
                }
            }
            _ => None,
        };
        set_frame_url.set(next);
    });

    on_cleanup(move || set_frame_url.set(None));

    let is_open = move || {
        ctx.active_modal.get() == Some(ModalKind::Viewer) && ctx.viewer_payload.get().is_some()
    };

    view! {
        <Show when=is_open>
            <div class="modal-overlay">
                <div class="modal viewer-modal">
                    <div class="modal-header">
                        <h3>
                            {move || ctx.viewer_payload.get().map(|p| p.title).unwrap_or_default()}
                        </h3>
                        <button class="modal-close" on:click=move |_| ctx.close_modal()>
                            "×"
                        </button>
                    </div>

                    <div class="viewer-body">
                        {move || match ctx.viewer_payload.get() {
                            Some(ViewerPayload { kind: ViewerKind::Preview, .. }) => view! {
                                <iframe
                                    class="viewer-frame"
                                    sandbox="allow-scripts"
                                    src=move || {
                                        frame_url
                                            .with(|url| {
                                                url.as_ref().map(|u| u.as_str().to_string())
                                            })
                                            .unwrap_or_default()
                                    }
                                ></iframe>
                            }
                                .into_any(),
                            Some(payload) => view! {
                                <pre class="viewer-text">{payload.content}</pre>
                            }
                                .into_any(),
                            None => view! { <pre class="viewer-text"></pre> }.into_any(),
                        }}
                    </div>

                    <div class="viewer-footer">
                        <span>
                            {move || {
                                ctx.viewer_payload
                                    .get()
                                    .map(|p| format!("{} chars", p.content.chars().count()))
                                    .unwrap_or_default()
                            }}
                        </span>
                        <span>
                            {move || {
                                ctx.viewer_payload
                                    .get()
                                    .map(|p| format!("Mode: {}", p.kind.label()))
                                    .unwrap_or_default()
                            }}
                        </span>
                    </div>
                </div>
            </div>
        </Show>
    }
}
