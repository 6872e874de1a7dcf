use leptos::*;

mod components;
mod error;
mod models;
mod utils;
mod views;

use utils::config::ViewerConfig;
use views::ExtractionViewer;

// ============================================
// メインアプリ（ヘッダー + ビューワ1つ）
// ============================================

#[component]
fn App() -> impl IntoView {
    provide_context(ViewerConfig::load());

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Data Extraction with Gemini AI"</h1>
            </header>
            <main>
                <ExtractionViewer />
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
