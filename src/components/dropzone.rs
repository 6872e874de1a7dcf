//! PDFアップロード用ドロップゾーン
//!
//! ドラッグ&ドロップまたはクリック選択でファイルを受け取り、
//! accept に合うものだけをコールバックに渡す。

use leptos::*;
use web_sys::{File, FileList};

use crate::utils::log_trace::log_warn;

/// 受け付けるファイル種別
pub const PDF_ACCEPT: &[&str] = &["application/pdf"];

/// accept の1項目にファイルが合うか
///
/// `.pdf` のような拡張子、`application/*` のようなワイルドカード、完全一致のMIMEに対応
fn matches_accept_entry(entry: &str, mime: &str, name: &str) -> bool {
    let entry = entry.trim().to_ascii_lowercase();
    if entry.is_empty() {
        return false;
    }
    if entry.starts_with('.') {
        return name.to_ascii_lowercase().ends_with(&entry);
    }
    let mime = mime.to_ascii_lowercase();
    match entry.strip_suffix("/*") {
        Some(base) => mime.split('/').next() == Some(base),
        None => mime == entry,
    }
}

/// accept リストのどれかに合えば受け付ける（空リストなら全部受け付ける）
pub fn is_accepted(accept: &[&str], mime: &str, name: &str) -> bool {
    accept.is_empty() || accept.iter().any(|entry| matches_accept_entry(entry, mime, name))
}

fn file_list_to_vec(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// accept で振り分け、弾いたものはログに残して捨てる
fn filter_accepted(accept: &[&str], files: Vec<File>) -> Vec<File> {
    let (accepted, rejected): (Vec<File>, Vec<File>) = files
        .into_iter()
        .partition(|f| is_accepted(accept, &f.type_(), &f.name()));
    for file in &rejected {
        log_warn("upload", &format!("対象外のファイルを無視: {} ({})", file.name(), file.type_()));
    }
    accepted
}

#[component]
pub fn UploadDropzone(
    #[prop(default = PDF_ACCEPT)] accept: &'static [&'static str],
    #[prop(into)] on_files: Callback<Vec<File>>,
) -> impl IntoView {
    let (dragging, set_dragging) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| file_list_to_vec(&list))
            .unwrap_or_default();
        on_files.call(filter_accepted(accept, files));
    };

    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            on_files.call(filter_accepted(accept, file_list_to_vec(&list)));
        }
        // 同じファイルを選び直しても change が飛ぶように空にする
        input.set_value("");
    };

    let on_click = move |_: web_sys::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-container">
            <h2 class="pane-header">"📂 Upload PDF"</h2>
            <div
                class=move || if dragging.get() { "dropzone dragging" } else { "dropzone" }
                on:click=on_click
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                <input
                    type="file"
                    accept=accept.join(",")
                    style="display: none;"
                    node_ref=input_ref
                    on:change=on_change
                />
                <p>"Drag & drop a PDF file here, or click to select one"</p>
            </div>
        </div>
    }
}
