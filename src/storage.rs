use crate::error::{PassError, Result};
use crate::models::{Credential, CredentialStore};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "data.json";

const INDENT: &[u8] = b"    ";

/// The on-disk credential file. Every operation reads or rewrites it whole.
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole store. `Ok(None)` means the file does not exist yet.
    pub fn load(&self) -> Result<Option<CredentialStore>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("store file {:?} not found", self.path);
                return Ok(None);
            }
            Err(source) => return Err(self.io_error(source)),
        };
        let store = serde_json::from_str(&raw).map_err(|source| PassError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(store))
    }

    /// Replaces the file contents with `store`, pretty-printed.
    ///
    /// The data goes to a temporary file next to the target first and is then
    /// renamed over it, so readers never observe a half-written store.
    pub fn save(&self, store: &CredentialStore) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        store
            .serialize(&mut ser)
            .map_err(|e| self.io_error(e.into()))?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::Builder::new()
            .prefix(".passkeep.")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| self.io_error(e))?;
        tmp.write_all(&buf).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!("wrote {} entries to {:?}", store.len(), self.path);
        Ok(())
    }

    /// Load, merge one record (overwriting any previous one), write back.
    /// A missing file counts as an empty store.
    pub fn add_record(&self, website: &str, credential: Credential) -> Result<()> {
        let mut store = self.load()?.unwrap_or_default();
        let replaced = store.insert(website, credential).is_some();
        self.save(&store)?;
        info!(
            "{} credentials for {:?} in {:?}",
            if replaced { "replaced" } else { "saved" },
            website,
            self.path
        );
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> PassError {
        PassError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
