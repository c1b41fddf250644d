use std::fs::File;

use anyhow::{Error, Result};
use csv::{Reader, ReaderBuilder};

pub fn open_csv_reader(path: &str) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|_| Error::msg(format!("File not found: {}", path)))?;

    // Every line is data and rows may vary in width. Row width is judged
    // downstream, never rejected by the reader itself.
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}
