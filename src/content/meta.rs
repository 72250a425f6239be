//! `.meta` sidecar files: one `key=value` pair per line.
//!
//! Lines starting with `#` or `!` are comments. Blank lines and lines with
//! no `=`, an empty key, or an empty value are skipped. Only the first `=`
//! splits, so values may contain `=`. Keys and values are not trimmed.

use std::io::ErrorKind;
use std::path::Path;

use log::warn;

pub(crate) type Metadata = Vec<(String, String)>;

pub(crate) fn parse(text: &str) -> Metadata {
    text.lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| line.split_once('='))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// Parse the metadata file at `path`. A missing file means no metadata.
pub(crate) fn read(path: &Path) -> Metadata {
    match std::fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(e) if e.kind() == ErrorKind::NotFound => Metadata::new(),
        Err(e) => {
            warn!("ignoring unreadable metadata file {}: {e}", path.display());
            Metadata::new()
        }
    }
}
