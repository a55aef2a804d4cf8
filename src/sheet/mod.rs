// src/sheet/mod.rs

use std::io::Cursor;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx};
use reqwest::Client;
use tracing::info;

use crate::config::Source;
use crate::fetch;

/// First worksheet of one spreadsheet, split into a header row and data rows.
/// Loaded once, never mutated.
#[derive(Debug)]
pub struct Sheet {
    /// Column names from row 1, in sheet order, as the file claims them.
    pub columns: Vec<String>,
    /// Data rows (row 2 onward), one cell per column.
    pub rows: Vec<Vec<Data>>,
}

impl Sheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Decode `.xlsx` bytes into a [`Sheet`]. Only the first worksheet is read
/// and row 1 is taken as the header. Legacy `.xls` payloads and anything
/// else calamine cannot parse surface here as a decode error naming `url`.
pub fn decode(bytes: Vec<u8>, url: &str) -> Result<Sheet> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))
        .with_context(|| format!("decoding spreadsheet fetched from {url}"))?;
    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("spreadsheet from {url} has no worksheets"))?
        .with_context(|| format!("reading first worksheet of spreadsheet from {url}"))?;

    let mut row_iter = range.rows();
    let columns = row_iter
        .next()
        .map(|header| header.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();
    let rows = row_iter.map(|row| row.to_vec()).collect();

    Ok(Sheet { columns, rows })
}

/// Build the raw URL for `path`, download it, and decode it.
pub async fn load(client: &Client, src: &Source, path: &str) -> Result<Sheet> {
    let url = fetch::raw_url(src, path);
    info!(%url, "downloading spreadsheet");
    let bytes = fetch::fetch_bytes(client, src, &url).await?;
    info!(bytes = bytes.len(), "downloaded, decoding");
    decode(bytes, &url)
}
