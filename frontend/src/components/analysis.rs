//! Results page, reads back the analysis written by the upload page.

use leptos::*;
use leptos_router::A;

use crate::services::SharedStore;

#[component]
pub fn AnalysisView(store: SharedStore) -> impl IntoView {
    let result = match store.load() {
        Ok(result) => result,
        Err(e) => {
            log::error!("❌ Could not read analysis result: {}", e);
            None
        }
    };

    let Some(result) = result else {
        return view! {
            <div class="analysis-page">
                <p class="empty-note">"No analysis available yet."</p>
                <A href="/" class="back-link">"Upload a document"</A>
            </div>
        };
    };

    let report = result.report_label();

    view! {
        <div class="analysis-page">
            <h1>"Document Analysis"</h1>

            <section class="analysis-summary">
                <h2>"Summary"</h2>
                <ul>
                    {result.summary.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </section>

            <section class="analysis-risks">
                <h2>"Risks"</h2>
                <ul>
                    {result.risks.into_iter().map(|risk| view! { <li>{risk}</li> }).collect_view()}
                </ul>
            </section>

            {report.map(|report| view! {
                <p class="analysis-report">"Report: " {report}</p>
            })}

            <A href="/" class="back-link">"Analyze another document"</A>
        </div>
    }
}
