use leptos::*;

#[component]
pub fn AnalyzingSpinner() -> impl IntoView {
    view! {
        <div class="analyzing-spinner">
            <div class="spinner"></div>
            <p>"Analyzing..."</p>
        </div>
    }
}
