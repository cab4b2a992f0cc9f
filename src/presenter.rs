// src/presenter.rs
use crate::store::{IndexError, ResultStore};
use std::sync::Arc;
use url::Url;

/// Host hook fired once after each search whose records were applied.
pub trait HostView: Send + Sync {
    fn notify_data_changed(&self);
}

/// Host-provided surface that shows a detail page.
pub trait BrowserSurface: Send + Sync {
    fn open_external_link(&self, uri: &Url);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowContent {
    pub title: String,
    pub image_uri: Url,
}

pub struct ListPresenter {
    store: Arc<ResultStore>,
}

impl ListPresenter {
    pub fn new(store: Arc<ResultStore>) -> Self {
        Self { store }
    }

    pub fn row_count(&self) -> usize {
        self.store.count()
    }

    pub fn row_content(&self, index: usize) -> Result<RowContent, IndexError> {
        let record = self.store.at(index)?;
        Ok(RowContent {
            title: record.name,
            image_uri: record.image,
        })
    }

    /// All rows of one snapshot, for hosts that redraw the whole list.
    pub fn rows(&self) -> Vec<RowContent> {
        self.store
            .snapshot()
            .iter()
            .map(|record| RowContent {
                title: record.name.clone(),
                image_uri: record.image.clone(),
            })
            .collect()
    }
}

pub struct DetailLauncher<B> {
    store: Arc<ResultStore>,
    browser: B,
}

impl<B: BrowserSurface> DetailLauncher<B> {
    pub fn new(store: Arc<ResultStore>, browser: B) -> Self {
        Self { store, browser }
    }

    /// Opens the link of row `index`. An out-of-range index is a caller bug;
    /// the browser is not touched in that case.
    pub fn on_row_selected(&self, index: usize) -> Result<Url, IndexError> {
        let record = self.store.at(index)?;
        self.browser.open_external_link(&record.link);
        Ok(record.link)
    }
}
