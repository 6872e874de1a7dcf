//! 抽出データ表示ペイン

use leptos::*;

use crate::views::viewer_model::PaneContent;

/// 整形済みJSONをテキストノードとして表示（マークアップはエスケープされる）
#[component]
pub fn ExtractedDataPane(content: PaneContent) -> impl IntoView {
    view! {
        <div class="pane data-container">
            <h2 class="pane-header">"📋 Extracted PDF Data"</h2>
            <div class="data-card">
                {match content {
                    PaneContent::Body(text) => view! { <pre class="json-data">{text}</pre> }.into_view(),
                    PaneContent::Placeholder(text) => view! { <p class="placeholder">{text}</p> }.into_view(),
                }}
            </div>
        </div>
    }
}
