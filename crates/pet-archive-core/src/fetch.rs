//! Resource fetching for the pet archive loader.
//!
//! Local files are read with `tokio::fs`; http(s) sources are fetched with the
//! curl crate (libcurl) on a blocking task. No retries; timeouts only when
//! configured.

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpOptions;

use std::future::Future;

use crate::source::ResourceSource;

/// Fetch capability: given a source, produce its text or fail.
pub trait Fetcher {
    fn fetch_text(
        &self,
        source: &ResourceSource,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Filesystem + libcurl fetcher.
#[derive(Debug, Clone, Default)]
pub struct DefaultFetcher {
    http: HttpOptions,
}

impl DefaultFetcher {
    pub fn new(http: HttpOptions) -> Self {
        Self { http }
    }
}

impl Fetcher for DefaultFetcher {
    async fn fetch_text(&self, source: &ResourceSource) -> Result<String, FetchError> {
        match source {
            ResourceSource::File(path) => {
                tracing::debug!(path = %path.display(), "reading pet archive from disk");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| FetchError::Io {
                        path: path.clone(),
                        source: e,
                    })
            }
            ResourceSource::Http(url) => {
                tracing::debug!(%url, "fetching pet archive over http");
                let url = url.clone();
                let opts = self.http.clone();
                tokio::task::spawn_blocking(move || http::get_text(&url, &opts)).await?
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_local_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"name\nRex\n").unwrap();
        f.flush().unwrap();
        let src = ResourceSource::File(f.path().to_path_buf());
        let text = DefaultFetcher::default().fetch_text(&src).await.unwrap();
        assert_eq!(text, "name\nRex\n");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = ResourceSource::File(dir.path().join("absent.csv"));
        let err = DefaultFetcher::default().fetch_text(&src).await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
