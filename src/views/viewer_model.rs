//! 抽出データビューワの状態
//!
//! フェッチ状態とドキュメント参照スロットは独立している。
//! ローカル参照のハンドルは置き換え・破棄時にdropされ、解放される。

use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;

use crate::error::FetchFailure;
use crate::models::{DocumentReference, ExtractedData, FetchState};

pub const NO_PDF_PLACEHOLDER: &str = "No PDF available";
pub const NO_DATA_PLACEHOLDER: &str = "No data available.";

/// 描画内容（優先順: 読込中 → エラー → 2ペイン）
#[derive(Debug, PartialEq)]
pub enum ViewerView<'a> {
    Loading,
    Error(&'a str),
    Panes {
        document_url: Option<&'a str>,
        data: Option<&'a ExtractedData>,
    },
}

/// ペインに出す中身（本体かプレースホルダー）
#[derive(Debug, Clone, PartialEq)]
pub enum PaneContent {
    Body(String),
    Placeholder(&'static str),
}

/// エラー表示用テキスト
pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

pub fn preview_content(document_url: Option<&str>) -> PaneContent {
    match document_url {
        Some(url) => PaneContent::Body(url.to_string()),
        None => PaneContent::Placeholder(NO_PDF_PLACEHOLDER),
    }
}

/// 空の値（null, false, 0, ""）はプレースホルダーにする
pub fn data_content(data: Option<&ExtractedData>) -> PaneContent {
    match data.filter(|d| !d.is_blank()) {
        Some(d) => PaneContent::Body(d.to_pretty_json()),
        None => PaneContent::Placeholder(NO_DATA_PLACEHOLDER),
    }
}

/// コンポーネントが生きているかのフラグ（on_cleanup で落とす）
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Liveness(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}

/// 生きている間だけフェッチ結果を反映する
pub fn commit_if_alive<H: Deref<Target = str>>(
    liveness: &Liveness,
    model: &mut ViewerModel<H>,
    result: Result<ExtractedData, FetchFailure>,
) -> bool {
    liveness.is_alive() && model.settle(result)
}

#[derive(Debug)]
pub struct ViewerModel<H> {
    fetch: FetchState,
    document: Option<DocumentReference<H>>,
}

impl<H> Default for ViewerModel<H> {
    fn default() -> Self {
        ViewerModel {
            fetch: FetchState::Initializing,
            document: None,
        }
    }
}

impl<H: Deref<Target = str>> ViewerModel<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn document(&self) -> Option<&DocumentReference<H>> {
        self.document.as_ref()
    }

    /// フェッチ結果を反映する。決着済みなら何もせず false を返す。
    ///
    /// 成功時、`pdf_url` があればドキュメント参照を上書きする。
    /// 無ければドロップ済みの参照をそのまま残す。
    pub fn settle(&mut self, result: Result<ExtractedData, FetchFailure>) -> bool {
        if self.fetch.is_settled() {
            return false;
        }
        self.fetch = match result {
            Ok(data) => {
                if let Some(locator) = data.document_locator() {
                    self.document = Some(DocumentReference::Remote(locator.to_string()));
                }
                FetchState::Ready(data)
            }
            Err(err) => FetchState::Failed(err.to_string()),
        };
        true
    }

    /// ドロップされたファイルの先頭だけを採用する
    ///
    /// `make_local` は採用したファイルにだけ呼ばれる。2件目以降は黙って捨てる。
    pub fn accept_drop<F, I>(&mut self, files: I, make_local: impl FnOnce(F) -> H) -> bool
    where
        I: IntoIterator<Item = F>,
    {
        match files.into_iter().next() {
            Some(file) => {
                self.document = Some(DocumentReference::Local(make_local(file)));
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> ViewerView<'_> {
        if self.fetch.is_loading() {
            return ViewerView::Loading;
        }
        if let Some(msg) = self.fetch.error() {
            return ViewerView::Error(msg);
        }
        ViewerView::Panes {
            document_url: self.document().map(DocumentReference::url),
            data: self.fetch.data(),
        }
    }
}
