//! Document acquisition.
//!
//! The original tool had two divergent code paths: a blocking file read and a
//! callback-driven URL fetch. Both are unified here behind one async,
//! result-returning contract: `resolve()` may complete immediately (file) or
//! after a single awaited I/O step (URL). The caller owns the runtime and
//! blocks on it; at most one request is ever in flight.

use std::path::PathBuf;

use crate::error::GraderError;

/// Where the HTML document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Read the full contents of a local file.
    File(PathBuf),
    /// Perform one HTTP GET against a URL. No retries, no timeout override,
    /// redirects handled by the client's defaults.
    Url(String),
}

impl DocumentSource {
    /// Obtain the raw document text.
    ///
    /// The response body is taken as the document regardless of HTTP status;
    /// only transport-level failures (connection refused, DNS, protocol
    /// errors) are reported as [`GraderError::Fetch`].
    pub async fn resolve(&self) -> Result<String, GraderError> {
        match self {
            Self::File(path) => {
                tracing::debug!(path = %path.display(), "reading document from file");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| GraderError::DocumentRead {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Url(url) => {
                tracing::debug!(%url, "fetching document");
                let fetch = |source| GraderError::Fetch {
                    url: url.clone(),
                    source,
                };
                let response = reqwest::get(url).await.map_err(fetch)?;
                tracing::debug!(status = %response.status(), "fetch completed");
                response.text().await.map_err(fetch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn file_source_reads_contents() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<html><h1>hi</h1></html>").unwrap();

        let source = DocumentSource::File(file.path().to_path_buf());
        let text = source.resolve().await.unwrap();
        assert_eq!(text, "<html><h1>hi</h1></html>");
    }

    #[tokio::test]
    async fn missing_file_is_document_read_error() {
        let source = DocumentSource::File(PathBuf::from("/nonexistent/index.html"));
        let err = source.resolve().await.unwrap_err();
        assert!(matches!(err, GraderError::DocumentRead { .. }));
    }

    #[tokio::test]
    async fn refused_connection_is_fetch_error() {
        // Port 1 on loopback is essentially never listening
        let source = DocumentSource::Url("http://127.0.0.1:1/".to_string());
        let err = source.resolve().await.unwrap_err();
        assert!(matches!(err, GraderError::Fetch { .. }), "got: {err}");
    }
}
