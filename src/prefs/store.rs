//! Thread-safe persistent preference store.
//!
//! The on-disk document is written atomically (temp file + rename) on every
//! update, from inside the state container's dispatch, so readers of the file
//! never observe a half-written document and the container never races itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::prefs::types::Prefs;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to read preferences '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write preferences '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone)]
pub struct PrefsStore {
    inner: Arc<RwLock<Prefs>>,
    path: PathBuf,
}

impl PrefsStore {
    /// Default location: `<config dir>/banyo/prefs.json`.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("banyo").join("prefs.json")
    }

    /// Load from `path`, or start from defaults when the file is absent.
    pub fn load(path: PathBuf) -> Result<Self, PrefsError> {
        let prefs = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| PrefsError::Read {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(|e| PrefsError::Parse {
                path: path.clone(),
                source: e,
            })?
        } else {
            Prefs::default()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(prefs)),
            path,
        })
    }

    /// Load, falling back to in-memory defaults on a corrupt or unreadable
    /// file. Losing stale preferences beats refusing to start.
    pub fn load_or_default(path: PathBuf) -> Self {
        match Self::load(path.clone()) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("preferences unusable, starting fresh: {err}");
                Self {
                    inner: Arc::new(RwLock::new(Prefs::default())),
                    path,
                }
            }
        }
    }

    /// Snapshot of the current preferences.
    pub fn current(&self) -> Prefs {
        self.inner.read().expect("prefs lock poisoned").clone()
    }

    /// Apply `mutate` and write the result to disk before returning.
    pub fn update<F: FnOnce(&mut Prefs)>(&self, mutate: F) -> Result<(), PrefsError> {
        let mut guard = self.inner.write().expect("prefs lock poisoned");
        mutate(&mut guard);
        self.save(&guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, prefs: &Prefs) -> Result<(), PrefsError> {
        let write_err = |source| PrefsError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(prefs).expect("prefs serialize cannot fail");
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }
}
