// Credential bundle and its on-disk persistence.
//
// The bundle is always replaced wholesale -- after a refresh the whole
// struct is swapped, never patched field by field.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// One authenticated session: access/refresh token pair plus the
/// optional extras the identity provider returns alongside them.
///
/// Serde-compatible with both the device-code grant and the
/// refresh-token grant responses of the token endpoint, and with the
/// token file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Durable persistence for the credential bundle, bound to one path.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The token file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the bundle from disk.
    ///
    /// A missing file maps to [`AuthError::CredentialsNotFound`] so
    /// callers can distinguish "never logged in" from a broken file.
    pub fn load(&self) -> Result<AuthToken, AuthError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AuthError::CredentialsNotFound {
                    path: self.path.display().to_string(),
                });
            }
            Err(e) => {
                return Err(AuthError::TokenStore {
                    path: self.path.display().to_string(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|e| AuthError::TokenParse {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Persist the bundle, creating the parent directory if absent.
    ///
    /// Writes to a sibling temp file and renames it into place so a
    /// concurrent reader never observes a partial file.
    pub fn save(&self, token: &AuthToken) -> Result<(), AuthError> {
        let io_err = |source| AuthError::TokenStore {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| AuthError::TokenParse {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }

    /// Remove the token file. Missing file is not an error (logout is
    /// idempotent).
    pub fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::TokenStore {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample_token() -> AuthToken {
        AuthToken {
            access_token: "A1".into(),
            refresh_token: "R1".into(),
            id_token: Some("ID1".into()),
            token_type: Some("Bearer".into()),
            expires_in: Some(86400),
            scope: Some("openid profile offline_access".into()),
        }
    }

    #[test]
    fn load_missing_file_is_credentials_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, AuthError::CredentialsNotFound { .. }));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        store.save(&sample_token()).unwrap();
        assert_eq!(store.load().unwrap(), sample_token());
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("deep/nested/token.json"));

        store.save(&sample_token()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        store.save(&sample_token()).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["token.json"]);
    }

    #[test]
    fn corrupt_file_is_token_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        fs::write(&path, "not json").unwrap();

        let err = TokenStore::new(&path).load().unwrap_err();
        assert!(matches!(err, AuthError::TokenParse { .. }));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        store.save(&sample_token()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            AuthError::CredentialsNotFound { .. }
        ));
    }
}
