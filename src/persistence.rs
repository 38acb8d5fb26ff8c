// File: src/persistence.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};

/// Combo ratings read once at startup. Nothing in the application writes
/// them back; the store only exposes what was on disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsStore {
    ratings: Map<String, Value>,
}

impl RatingsStore {
    /// Reads the ratings document. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no ratings file, starting empty");
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        match serde_json::from_str::<Value>(&raw).map_err(|e| Error::json(path, e))? {
            Value::Object(ratings) => {
                info!(path = %path.display(), count = ratings.len(), "loaded combo ratings");
                Ok(Self { ratings })
            }
            _ => Err(Error::RatingsShape(path.to_path_buf())),
        }
    }

    /// Like `load`, but a broken file is logged and treated as empty.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable ratings file");
            Self::default()
        })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.ratings.get(key)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// One submitted custom request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRequest {
    pub name: String,
    pub email: String,
    pub hybrids: Vec<String>,
    pub notes: String,
}

impl CustomRequest {
    /// The log block, terminated by a blank line.
    pub fn render(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nHybrids: {:?}\nNotes: {}\n\n",
            self.name, self.email, self.hybrids, self.notes
        )
    }
}

/// Append-only request log. Writers are serialized so concurrent sessions
/// never interleave blocks.
#[derive(Debug)]
pub struct RequestLogger {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RequestLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record and syncs it. Any failure is returned; nothing is
    /// reported as logged unless the write completed.
    pub fn append(&self, request: &CustomRequest) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let mut file = File::options()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        file.write_all(request.render().as_bytes())
            .and_then(|_| file.sync_data())
            .map_err(|e| Error::io(&self.path, e))?;

        info!(
            path = %self.path.display(),
            hybrids = request.hybrids.len(),
            "logged custom request"
        );
        Ok(())
    }
}
