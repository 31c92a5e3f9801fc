//! Per-session API key handling
//!
//! The user supplies their own key for each browser session. It lives in a
//! context signal for the lifetime of the page and is never written to
//! storage; a reload starts over with an empty field.

use leptos::prelude::*;

/// API key state stored in context
#[derive(Debug, Clone, Default)]
pub struct ApiKeyState {
    pub key: String,
}

impl ApiKeyState {
    /// True when the user has entered something usable as a key
    pub fn is_present(&self) -> bool {
        !self.key.trim().is_empty()
    }
}

/// Provide API key context for the entire app
#[component]
pub fn ApiKeyProvider(children: Children) -> impl IntoView {
    let (api_key, set_api_key) = signal(ApiKeyState::default());

    provide_context(api_key);
    provide_context(set_api_key);

    children()
}

/// Get API key read signal from context
pub fn use_api_key() -> ReadSignal<ApiKeyState> {
    expect_context::<ReadSignal<ApiKeyState>>()
}

/// Get API key write signal from context
pub fn use_set_api_key() -> WriteSignal<ApiKeyState> {
    expect_context::<WriteSignal<ApiKeyState>>()
}

/// Masked input bound to the session API key
///
/// A password field, so the key never shows on screen. There is no save
/// step: the signal updates on every keystroke.
#[component]
pub fn ApiKeyField() -> impl IntoView {
    let api_key = use_api_key();
    let set_api_key = use_set_api_key();

    view! {
        <div class="form-group api-key-group">
            <label for="api-key">"OpenAI API key"</label>
            <input
                id="api-key"
                type="password"
                placeholder="sk-..."
                autocomplete="off"
                prop:value=move || api_key.get().key
                on:input=move |ev| set_api_key.set(ApiKeyState { key: event_target_value(&ev) })
            />
            <p class="field-hint">"Kept in memory for this session only."</p>
        </div>
    }
}
