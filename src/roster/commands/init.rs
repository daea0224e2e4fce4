use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::config::RosterConfig;
use crate::error::Result;
use crate::model::SAMPLE_EMPLOYEES;
use crate::store::DataStore;
use std::fs;
use tracing::debug;

/// Seeds the sample roster if the store is empty and seeding is enabled.
///
/// A store holding unreadable data is not empty and is never seeded.
/// Returns whether anything was written.
pub fn ensure_seeded<S: DataStore>(store: &mut S, config: &RosterConfig) -> Result<bool> {
    if !config.seed_sample_data || store.has_unreadable_data() {
        return Ok(false);
    }
    if !store.load_employees()?.is_empty() {
        return Ok(false);
    }
    store.save_employees(&SAMPLE_EMPLOYEES)?;
    debug!(count = SAMPLE_EMPLOYEES.len(), "seeded sample roster");
    Ok(true)
}

pub fn run<S: DataStore>(
    store: &mut S,
    paths: &RosterPaths,
    config: &RosterConfig,
) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized roster store at {}",
        paths.data_dir.display()
    )));
    if ensure_seeded(store, config)? {
        result.add_message(CmdMessage::info(format!(
            "Seeded {} sample employees",
            SAMPLE_EMPLOYEES.len()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::tempdir;

    #[test]
    fn seeds_empty_store() {
        let mut store = InMemoryStore::new();
        assert!(ensure_seeded(&mut store, &RosterConfig::default()).unwrap());
        assert_eq!(store.load_employees().unwrap().len(), 5);
    }

    #[test]
    fn leaves_existing_roster_alone() {
        let mut store = StoreFixture::new().with_archived("EMP001", "Only One").store;
        assert!(!ensure_seeded(&mut store, &RosterConfig::default()).unwrap());
        assert_eq!(store.load_employees().unwrap().len(), 1);
    }

    #[test]
    fn unreadable_store_is_not_seeded() {
        let mut store = StoreFixture::new().with_unreadable_data().store;
        assert!(!ensure_seeded(&mut store, &RosterConfig::default()).unwrap());
        assert_eq!(store.save_count(), 0);
        assert!(store.has_unreadable_data());
    }

    #[test]
    fn respects_disabled_seeding() {
        let mut store = InMemoryStore::new();
        let config = RosterConfig {
            seed_sample_data: false,
            ..Default::default()
        };
        assert!(!ensure_seeded(&mut store, &config).unwrap());
        assert!(store.load_employees().unwrap().is_empty());
    }

    #[test]
    fn run_creates_data_dir() {
        let dir = tempdir().unwrap();
        let paths = RosterPaths {
            data_dir: dir.path().join("data"),
        };
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &paths, &RosterConfig::default()).unwrap();
        assert!(paths.data_dir.is_dir());
        assert_eq!(result.messages.len(), 2);
    }
}
