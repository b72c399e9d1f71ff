//! App Header Component
//!
//! Avatar with change-on-click file input, report title, meta chips and
//! the stat cards row.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::StatCard;
use crate::store::{store_stats, use_app_store};

const DEFAULT_AVATAR: &str = "https://api.dicebear.com/7.x/bottts/svg?seed=GeminiProV3";

#[component]
pub fn AppHeader() -> impl IntoView {
    let store = use_app_store();
    let (avatar_url, set_avatar_url) = signal(DEFAULT_AVATAR.to_string());

    // Read the chosen image as a data URL and swap the avatar
    let on_avatar_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let reader_ref = reader.clone();
        let onload = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev: web_sys::ProgressEvent| {
            if let Some(data_url) = reader_ref.result().ok().and_then(|v| v.as_string()) {
                set_avatar_url.set(data_url);
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        if reader.read_as_data_url(&file).is_err() {
            web_sys::console::warn_1(&"[HEADER] avatar read failed".into());
        }
    };

    let stats = move || store_stats(&store);

    view! {
        <header class="app-header">
            <div class="avatar-wrap">
                <img class="avatar" src=move || avatar_url.get() alt="Avatar" />
                <label class="avatar-overlay">
                    "Change"
                    <input type="file" accept="image/*" on:change=on_avatar_change />
                </label>
            </div>

            <h1 class="app-title">"Gemini 3.0 Pro Report"</h1>
            <p class="app-subtitle">"net flying AI group"</p>

            <div class="meta-chips">
                <div class="meta-chip">
                    <span>"📅"</span>
                    <input type="text" value="2025-11-20" />
                </div>
                <div class="meta-chip">
                    <span>"🤖"</span>
                    <span class="meta-model">"gemini-3-pro-preview"</span>
                </div>
            </div>

            <div class="stats-grid">
                <StatCard
                    label="Total Cases"
                    value=Signal::derive(move || stats().total)
                    accent="stat-total"
                />
                <StatCard
                    label="Success"
                    value=Signal::derive(move || stats().success)
                    accent="stat-success"
                />
                <StatCard
                    label="Groups"
                    value=Signal::derive(move || stats().groups)
                    accent="stat-groups"
                />
            </div>
        </header>
    }
}
