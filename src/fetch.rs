use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("no content-length reported for {0}")]
    MissingLength(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Seam for the dialog's file-size lookup, so the dialog and the tests do not
/// depend on the network.
pub trait SizeFetcher {
    fn fetch_size(&self, src: &str) -> Result<u64>;
}

/// Production fetcher: HEAD request for http(s) sources, filesystem metadata
/// for local paths.
#[derive(Debug, Default)]
pub struct HttpSizeFetcher;

impl SizeFetcher for HttpSizeFetcher {
    fn fetch_size(&self, src: &str) -> Result<u64> {
        if src.starts_with("http://") || src.starts_with("https://") {
            let response = ureq::head(src)
                .call()
                .map_err(|error| FetchError::Request(error.to_string()))?;
            response
                .header("Content-Length")
                .and_then(|value| value.parse().ok())
                .ok_or_else(|| FetchError::MissingLength(src.to_string()))
        } else {
            Ok(std::fs::metadata(Path::new(src))?.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{FetchError, HttpSizeFetcher, SizeFetcher};

    #[test]
    fn reads_local_file_sizes_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[0u8; 1234]).expect("write");
        let size = HttpSizeFetcher
            .fetch_size(&file.path().display().to_string())
            .expect("size");
        assert_eq!(size, 1234);
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let error = HttpSizeFetcher
            .fetch_size("/no/such/file.png")
            .expect_err("missing file");
        assert!(matches!(error, FetchError::Io(_)));
    }
}
