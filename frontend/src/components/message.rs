//! Status banner under the upload box

use leptos::*;
use crate::StatusMessage;

#[component]
pub fn MessageBanner(#[prop(into)] message: Signal<StatusMessage>) -> impl IntoView {
    view! {
        <Show
            when=move || message.with(|m| m.is_visible())
            fallback=|| view! { }
        >
            <div class=move || format!("upload-message {}", message.with(|m| m.kind.css_class()))>
                {move || message.with(|m| m.text.clone())}
            </div>
        </Show>
    }
}
