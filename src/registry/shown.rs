use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use crate::foundation::error::{SpotlightError, SpotlightResult};

/// Fixed namespace the file-backed registry stores its flags under.
pub const REGISTRY_NAMESPACE: &str = "spotlight_shown";

/// Boolean key-value store answering "has overlay `id` been shown before?".
pub trait ShownRegistry {
    fn is_shown(&self, id: &str) -> bool;

    /// Record `id` as shown. Marking an id twice is harmless.
    fn mark_shown(&self, id: &str) -> SpotlightResult<()>;
}

/// Query `registry` for `id`.
pub fn is_shown_before(registry: &dyn ShownRegistry, id: &str) -> bool {
    registry.is_shown(id)
}

/// In-process registry; forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    shown: RefCell<BTreeSet<String>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shown.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.borrow().is_empty()
    }
}

impl ShownRegistry for MemoryRegistry {
    fn is_shown(&self, id: &str) -> bool {
        self.shown.borrow().contains(id)
    }

    fn mark_shown(&self, id: &str) -> SpotlightResult<()> {
        self.shown.borrow_mut().insert(id.to_owned());
        Ok(())
    }
}

/// Registry persisted as a JSON object of `id -> bool` at `<dir>/spotlight_shown.json`.
#[derive(Debug)]
pub struct JsonFileRegistry {
    path: PathBuf,
    flags: RefCell<BTreeMap<String, bool>>,
}

impl JsonFileRegistry {
    /// Open (or lazily create) the registry inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> SpotlightResult<Self> {
        let path = dir
            .as_ref()
            .join(format!("{REGISTRY_NAMESPACE}.json"));
        let flags = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                SpotlightError::serde(format!("parse registry '{}': {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            flags: RefCell::new(flags),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, flags: &BTreeMap<String, bool>) -> SpotlightResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SpotlightError::registry(format!("create '{}': {e}", parent.display()))
            })?;
        }
        let bytes = serde_json::to_vec_pretty(flags)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)
            .map_err(|e| SpotlightError::registry(format!("write '{}': {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            SpotlightError::registry(format!("replace '{}': {e}", self.path.display()))
        })
    }
}

impl ShownRegistry for JsonFileRegistry {
    fn is_shown(&self, id: &str) -> bool {
        self.flags.borrow().get(id).copied().unwrap_or(false)
    }

    /// The in-memory flag only flips once the file has been written, so a failed write can be
    /// retried.
    fn mark_shown(&self, id: &str) -> SpotlightResult<()> {
        let mut flags = self.flags.borrow_mut();
        if flags.get(id) == Some(&true) {
            return Ok(());
        }
        let mut next = flags.clone();
        next.insert(id.to_owned(), true);
        self.persist(&next)?;
        *flags = next;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/shown.rs"]
mod tests;
