//! Text sources for matrix descriptions
//!
//! A [`TextSource`] turns an identifier into matrix text. The core parser
//! never looks anything up itself; callers pick a source and hand the text
//! over through [`load_matrix`].

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spmat_core::{parse, DokMatrix, SparseMatrix};
use tracing::debug;

use crate::error::{Error, Result, SourceError};

/// Directory the bundled sample matrices live under
pub const SAMPLE_DIRECTORY: &str = "sample_inputs";

/// Bundled sample matrices as `(file name, text)`
pub const SAMPLES: [(&str, &str); 2] = [
    ("input1.txt", "rows=3\ncols=3\n(0,0,5)\n(1,1,-3)\n(2,2,9)"),
    ("input2.txt", "rows=3\ncols=3\n(0,1,4)\n(1,0,-2)\n(2,1,6)"),
];

/// Resolve matrix text by identifier
pub trait TextSource {
    /// Load the text behind `identifier`
    ///
    /// Fails with [`SourceError::NotFound`] when the identifier cannot be
    /// resolved.
    fn load_text(&self, identifier: &str) -> std::result::Result<String, SourceError>;
}

/// Join a directory and file name into a source identifier
pub fn join_identifier(directory: &str, filename: &str) -> String {
    format!("{}/{}", directory.trim_end_matches('/'), filename)
}

/// Load and parse a matrix, tagging parse failures with the identifier
pub fn load_matrix<S: TextSource + ?Sized>(source: &S, identifier: &str) -> Result<DokMatrix> {
    let text = source.load_text(identifier)?;
    let matrix = parse(&text).map_err(|source| Error::Parse {
        identifier: identifier.to_string(),
        source,
    })?;

    let (rows, cols) = matrix.dimensions();
    debug!(identifier, rows, cols, nnz = matrix.nnz(), "parsed matrix");
    Ok(matrix)
}

/// Reads matrix text from files relative to a base directory
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Path an identifier resolves to; absolute identifiers are used as is
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        self.base_dir.join(identifier)
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TextSource for FileSource {
    fn load_text(&self, identifier: &str) -> std::result::Result<String, SourceError> {
        let path = self.resolve(identifier);
        debug!(path = %path.display(), "reading matrix file");

        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
            _ => SourceError::Io { path, source },
        })
    }
}

/// In-memory table of matrix texts
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    texts: BTreeMap<String, String>,
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source preloaded with the bundled samples under [`SAMPLE_DIRECTORY`]
    pub fn with_samples() -> Self {
        SAMPLES
            .iter()
            .fold(Self::new(), |source, (name, text)| {
                source.with_text(join_identifier(SAMPLE_DIRECTORY, name), *text)
            })
    }

    /// Add or replace the text behind an identifier
    pub fn with_text(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(identifier.into(), text.into());
        self
    }

    /// Known identifiers in sorted order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }
}

impl TextSource for EmbeddedSource {
    fn load_text(&self, identifier: &str) -> std::result::Result<String, SourceError> {
        self.texts
            .get(identifier)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(identifier.to_string()))
    }
}

#[cfg(feature = "http")]
pub use http_impl::HttpSource;

#[cfg(feature = "http")]
mod http_impl {
    use std::collections::HashMap;

    use reqwest::{Client, StatusCode};
    use tokio::runtime::Runtime;
    use tokio::sync::RwLock;
    use tracing::debug;

    use super::TextSource;
    use crate::error::SourceError;

    /// Fetches matrix text over HTTP, relative to a base URL
    ///
    /// Responses are cached per URL for the lifetime of the source.
    pub struct HttpSource {
        client: Client,
        base_url: String,
        cache: RwLock<HashMap<String, String>>,
        runtime: Runtime,
    }

    impl HttpSource {
        /// Create a source with its own single-threaded runtime
        pub fn new(base_url: &str) -> std::io::Result<Self> {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            Ok(Self {
                client: Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                cache: RwLock::new(HashMap::new()),
                runtime,
            })
        }

        /// URL an identifier resolves to
        pub fn resolve(&self, identifier: &str) -> String {
            if identifier.starts_with("http://") || identifier.starts_with("https://") {
                identifier.to_string()
            } else {
                format!("{}/{}", self.base_url, identifier.trim_start_matches('/'))
            }
        }

        /// Fetch the text behind an identifier
        pub async fn fetch_text(&self, identifier: &str) -> Result<String, SourceError> {
            let url = self.resolve(identifier);

            {
                let cache = self.cache.read().await;
                if let Some(text) = cache.get(&url) {
                    return Ok(text.clone());
                }
            }

            debug!(%url, "fetching matrix text");
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|source| SourceError::Http {
                    url: url.clone(),
                    source,
                })?;

            match response.status() {
                StatusCode::NOT_FOUND => return Err(SourceError::NotFound(url)),
                status if !status.is_success() => {
                    return Err(SourceError::HttpStatus {
                        url,
                        status: status.as_u16(),
                    })
                }
                _ => {}
            }

            let text = response.text().await.map_err(|source| SourceError::Http {
                url: url.clone(),
                source,
            })?;

            {
                let mut cache = self.cache.write().await;
                cache.insert(url, text.clone());
            }

            Ok(text)
        }
    }

    impl TextSource for HttpSource {
        fn load_text(&self, identifier: &str) -> Result<String, SourceError> {
            self.runtime.block_on(self.fetch_text(identifier))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::{Read, Write};
        use std::net::{TcpListener, TcpStream};
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use std::thread;

        use spmat_core::SparseMatrix;

        use crate::source::load_matrix;

        const MATRIX_TEXT: &str = "rows=2\ncols=2\n(1,1,7)";

        /// Serve canned responses on a local port, counting requests per path
        fn serve(hits: Arc<AtomicUsize>) -> String {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();

            thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { break };
                    respond(stream, &hits);
                }
            });

            format!("http://{addr}")
        }

        fn respond(mut stream: TcpStream, hits: &AtomicUsize) {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let request = String::from_utf8_lossy(&request);
            let path = request.split_whitespace().nth(1).unwrap_or("/");
            let (status, body) = match path {
                "/matrices/m.txt" => {
                    hits.fetch_add(1, Ordering::SeqCst);
                    ("200 OK", MATRIX_TEXT)
                }
                "/matrices/broken.txt" => ("500 Internal Server Error", "boom"),
                _ => ("404 Not Found", "missing"),
            };

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }

        #[test]
        fn test_load_text_cached() {
            let hits = Arc::new(AtomicUsize::new(0));
            let base = serve(Arc::clone(&hits));
            let source = HttpSource::new(&format!("{base}/matrices")).unwrap();

            assert_eq!(source.load_text("m.txt").unwrap(), MATRIX_TEXT);
            assert_eq!(source.load_text("m.txt").unwrap(), MATRIX_TEXT);
            // Second load is answered from the cache
            assert_eq!(hits.load(Ordering::SeqCst), 1);

            let matrix = load_matrix(&source, "m.txt").unwrap();
            assert_eq!(matrix.get_element(1, 1), 7);
            assert_eq!(hits.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_load_text_status_errors() {
            let base = serve(Arc::new(AtomicUsize::new(0)));
            let source = HttpSource::new(&format!("{base}/matrices/")).unwrap();

            match source.load_text("absent.txt") {
                Err(SourceError::NotFound(url)) => {
                    assert_eq!(url, format!("{base}/matrices/absent.txt"))
                }
                other => panic!("expected not found, got {other:?}"),
            }

            match source.load_text("broken.txt") {
                Err(SourceError::HttpStatus { url, status }) => {
                    assert_eq!(url, format!("{base}/matrices/broken.txt"));
                    assert_eq!(status, 500);
                }
                other => panic!("expected status error, got {other:?}"),
            }

            // Failures are not cached
            assert!(matches!(
                source.load_text("absent.txt"),
                Err(SourceError::NotFound(_))
            ));
        }

        #[test]
        fn test_connection_refused() {
            // Bind then drop to get a port nothing listens on
            let port = TcpListener::bind("127.0.0.1:0")
                .unwrap()
                .local_addr()
                .unwrap()
                .port();
            let source = HttpSource::new(&format!("http://127.0.0.1:{port}")).unwrap();
            assert!(matches!(
                source.load_text("m.txt"),
                Err(SourceError::Http { .. })
            ));
        }

        #[test]
        fn test_resolve() {
            let source = HttpSource::new("http://localhost:8080/matrices/").unwrap();
            assert_eq!(
                source.resolve("a.txt"),
                "http://localhost:8080/matrices/a.txt"
            );
            assert_eq!(
                source.resolve("/sample_inputs/b.txt"),
                "http://localhost:8080/matrices/sample_inputs/b.txt"
            );
            assert_eq!(source.resolve("https://x.org/c.txt"), "https://x.org/c.txt");
        }
    }
}
