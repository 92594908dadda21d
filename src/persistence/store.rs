use super::files::{atomic_write, read_file, store_file};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Durable string slots addressed by key
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        read_file(store_file(&self.dir, key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(store_file(&self.dir, key), value)
    }
}

/// In-memory store, nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn try_load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.read(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to decode stored value for {}", key))?;
    Ok(Some(value))
}

/// Load and decode a value. Failures are logged and treated as absent.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match try_load(store, key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not load {}: {:#}", key, e);
            None
        }
    }
}

fn try_save<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("Failed to encode value for {}", key))?;
    store.write(key, &json)
}

/// Encode and write a value. Failures are logged and swallowed.
pub fn save<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    if let Err(e) = try_save(store, key, value) {
        log::warn!("Could not save {}: {:#}", key, e);
    }
}

/// A value bound to its storage key.
///
/// Only `mount` creates one, and it loads first, so a write can never land
/// before the stored value has been read.
#[derive(Debug)]
pub struct Persisted<T> {
    key: &'static str,
    value: T,
    dirty: bool,
}

impl<T: Serialize + DeserializeOwned + Default> Persisted<T> {
    /// Load the stored value, falling back to the default
    pub fn mount(store: &dyn KeyValueStore, key: &'static str) -> Self {
        let value = load(store, key).unwrap_or_default();
        Self {
            key,
            value,
            dirty: false,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mutate the value; the closure reports whether anything changed
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> (bool, R)) -> R {
        let (changed, result) = f(&mut self.value);
        self.dirty |= changed;
        result
    }

    /// Mutate state that is not persisted (never marks dirty)
    pub fn update_transient<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.value)
    }

    /// Write the value if it changed since the last flush
    pub fn flush(&mut self, store: &mut dyn KeyValueStore) {
        if self.is_dirty() {
            save(store, self.key, &self.value);
            self.dirty = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AllowedOps, Item, ItemList, ListKind};
    use pretty_assertions::assert_eq;

    /// Store whose writes always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            anyhow::bail!("disk unplugged")
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("disk unplugged")
        }
    }

    fn sample_items() -> Vec<Item> {
        vec![
            Item {
                id: "1".to_string(),
                text: "buy milk".to_string(),
                completed: false,
            },
            Item {
                id: "a-b".to_string(),
                text: "lock door".to_string(),
                completed: true,
            },
        ]
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = MemoryStore::default();
        let value = ItemList::from_items(sample_items());
        save(&mut store, "list", &value);

        let loaded: Option<ItemList> = load(&store, "list");
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());
        save(&mut store, "app_cachedTasks", &sample_items());

        let reopened = FileStore::new(temp_dir.path().to_path_buf());
        let loaded: Option<Vec<Item>> = load(&reopened, "app_cachedTasks");
        assert_eq!(loaded, Some(sample_items()));
    }

    #[test]
    fn test_load_missing_key_is_none() {
        let store = MemoryStore::default();
        let loaded: Option<Vec<Item>> = load(&store, "missing");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_corrupt_value_degrades_to_none() {
        let mut store = MemoryStore::default();
        store.write("list", "{not json").unwrap();
        let loaded: Option<Vec<Item>> = load(&store, "list");
        assert_eq!(loaded, None);

        let mounted: Persisted<ItemList> = Persisted::mount(&store, "list");
        assert!(mounted.get().is_empty());
    }

    #[test]
    fn test_broken_store_is_swallowed() {
        let mut store = BrokenStore;
        let loaded: Option<Vec<Item>> = load(&store, "list");
        assert_eq!(loaded, None);
        save(&mut store, "list", &sample_items());
    }

    #[test]
    fn test_mount_does_not_clobber_existing_data() {
        let mut store = MemoryStore::default();
        save(&mut store, "list", &sample_items());

        let mut persisted: Persisted<ItemList> = Persisted::mount(&store, "list");
        assert_eq!(persisted.get().items(), sample_items().as_slice());

        // Nothing changed, so flushing writes nothing
        persisted.flush(&mut store);
        let raw = store.read("list").unwrap().unwrap();
        assert_eq!(raw, serde_json::to_string(&sample_items()).unwrap());
    }

    #[test]
    fn test_update_marks_dirty_only_on_change() {
        let mut store = MemoryStore::default();
        let mut persisted: Persisted<ItemList> = Persisted::mount(&store, "list");
        let ops = AllowedOps::unrestricted();

        persisted.update(|list| (list.toggle_completed(&ops, "missing"), ()));
        assert!(!persisted.is_dirty());

        let added = persisted.update(|list| {
            let added = list.add(&ops, ListKind::Checklist, "keys").unwrap();
            (added, added)
        });
        assert!(added);
        assert!(persisted.is_dirty());

        persisted.flush(&mut store);
        assert!(!persisted.is_dirty());
        let loaded: Option<ItemList> = load(&store, "list");
        assert_eq!(loaded.unwrap().items()[0].text, "keys");
    }
}
