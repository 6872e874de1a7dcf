//! PDFプレビューペイン

use leptos::*;

use crate::views::viewer_model::PaneContent;

/// ドキュメント参照があればブラウザ内蔵ビューワで表示する
#[component]
pub fn DocumentPreview(content: PaneContent) -> impl IntoView {
    view! {
        <div class="pane pdf-container">
            <h2 class="pane-header">"📄 PDF Preview"</h2>
            <div class="pdf-wrapper">
                {match content {
                    PaneContent::Body(src) => view! {
                        <iframe src=src class="pdf-frame" title="PDF Preview"></iframe>
                    }.into_view(),
                    PaneContent::Placeholder(text) => view! { <p class="placeholder">{text}</p> }.into_view(),
                }}
            </div>
        </div>
    }
}
