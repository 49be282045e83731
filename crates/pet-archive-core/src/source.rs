//! Where the pet archive is read from: a local asset path or an http(s) URL.

use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

use crate::fetch::FetchError;

/// A resolved, fetchable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    File(PathBuf),
    Http(Url),
}

impl ResourceSource {
    /// Resolves a configured location.
    ///
    /// - `http://` / `https://` URLs fetch over HTTP;
    /// - `file://` URLs read the referenced path;
    /// - other URL schemes are rejected;
    /// - anything else is a path under `asset_root`. Leading `/` is treated as
    ///   the asset root itself, like a web root (`/assets/a.csv` -> `<root>/assets/a.csv`).
    pub fn resolve(raw: &str, asset_root: &Path) -> Result<Self, FetchError> {
        let raw = raw.trim();
        if let Ok(url) = Url::parse(raw) {
            return match url.scheme() {
                "http" | "https" => Ok(ResourceSource::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(ResourceSource::File)
                    .map_err(|_| FetchError::UnsupportedScheme(raw.to_string())),
                _ => Err(FetchError::UnsupportedScheme(raw.to_string())),
            };
        }
        let relative = raw.trim_start_matches('/');
        Ok(ResourceSource::File(asset_root.join(relative)))
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceSource::File(path) => write!(f, "{}", path.display()),
            ResourceSource::Http(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_joins_asset_root() {
        let src = ResourceSource::resolve("assets/pets.csv", Path::new("/srv")).unwrap();
        assert_eq!(src, ResourceSource::File(PathBuf::from("/srv/assets/pets.csv")));
    }

    #[test]
    fn web_root_path_stays_under_asset_root() {
        let src =
            ResourceSource::resolve("/src/assets/pets.csv", Path::new("/srv/app")).unwrap();
        assert_eq!(
            src,
            ResourceSource::File(PathBuf::from("/srv/app/src/assets/pets.csv"))
        );
    }

    #[test]
    fn http_url() {
        let src = ResourceSource::resolve("https://example.com/pets.csv", Path::new("/srv"))
            .unwrap();
        match src {
            ResourceSource::Http(url) => assert_eq!(url.host_str(), Some("example.com")),
            other => panic!("expected http, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn file_url() {
        let src = ResourceSource::resolve("file:///tmp/pets.csv", Path::new("/srv")).unwrap();
        assert_eq!(src, ResourceSource::File(PathBuf::from("/tmp/pets.csv")));
    }

    #[test]
    fn unsupported_scheme() {
        let err = ResourceSource::resolve("ftp://example.com/pets.csv", Path::new("/srv"))
            .unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(_)));
    }
}
