//! 抽出データビューワ
//!
//! 起動時に一度だけ抽出データを取得し、PDFプレビューと整形JSONを並べて表示する。
//! アンマウント時はフェッチを中断し、結果を捨てる。

use gloo::file::ObjectUrl;
use leptos::*;
use serde_json::json;
use web_sys::AbortController;

use crate::components::{DocumentPreview, ExtractedDataPane, UploadDropzone};
use crate::utils::config::ViewerConfig;
use crate::utils::fetch::fetch_extracted_data;
use crate::utils::log_trace::{log_error_with_data, log_info, log_info_with_data};
use crate::views::viewer_model::{
    commit_if_alive, data_content, error_text, preview_content, Liveness, ViewerModel, ViewerView,
};

/// 起動時フェッチを開始し、コンポーネント破棄時に中断する
fn spawn_startup_fetch(endpoint: String, model: RwSignal<ViewerModel<ObjectUrl>>) {
    let liveness = Liveness::new();
    let controller = AbortController::new().ok();

    {
        let liveness = liveness.clone();
        let controller = controller.clone();
        on_cleanup(move || {
            liveness.end();
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    }

    spawn_local(async move {
        log_info_with_data("fetch", "抽出データ取得開始", json!({ "endpoint": endpoint }));
        let signal = controller.as_ref().map(AbortController::signal);
        let result = fetch_extracted_data(&endpoint, signal.as_ref()).await;

        if !liveness.is_alive() {
            log_info("fetch", "破棄済みのため取得結果を無視");
            return;
        }

        match &result {
            Ok(data) => log_info_with_data(
                "fetch",
                "抽出データ取得完了",
                json!({ "pdf_url": data.document_locator() }),
            ),
            Err(e) => log_error_with_data(
                "fetch",
                "抽出データ取得失敗",
                json!({ "kind": e.kind(), "message": e.to_string() }),
            ),
        }
        model.update(|m| {
            commit_if_alive(&liveness, m, result);
        });
    });
}

#[component]
pub fn ExtractionViewer() -> impl IntoView {
    let config = use_context::<ViewerConfig>().unwrap_or_else(ViewerConfig::load);
    let model = create_rw_signal(ViewerModel::<ObjectUrl>::new());

    spawn_startup_fetch(config.extracted_data_endpoint.clone(), model);

    // 先頭1件だけObject URLにする（古い参照はdropで解放される）
    let on_files = Callback::new(move |files: Vec<web_sys::File>| {
        let dropped = files.len();
        let name = files.first().map(|f| f.name());
        let accepted = model
            .try_update(|m| m.accept_drop(files, |file| ObjectUrl::from(gloo::file::File::from(file))))
            .unwrap_or(false);
        if accepted {
            log_info_with_data("upload", "PDFを読み込み", json!({ "name": name, "dropped": dropped }));
        }
    });

    let upload_enabled = config.upload_enabled;

    move || model.with(|m| match m.view() {
        ViewerView::Loading => view! { <p class="status loading">"Loading..."</p> }.into_view(),
        ViewerView::Error(msg) => view! { <p class="status error">{error_text(msg)}</p> }.into_view(),
        ViewerView::Panes { document_url, data } => {
            let preview = preview_content(document_url);
            let json = data_content(data);
            view! {
                <div class="viewer-container">
                    {upload_enabled.then(|| view! { <UploadDropzone on_files=on_files /> })}
                    <div class="viewer-data-container">
                        <DocumentPreview content=preview />
                        <ExtractedDataPane content=json />
                    </div>
                </div>
            }.into_view()
        }
    })
}
