use crate::api::{RosterApi, RosterPaths};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that points roster at a data directory.
pub const HOME_ENV: &str = "ROSTER_HOME";

pub struct RosterContext {
    pub api: RosterApi<FileStore>,
    pub config: RosterConfig,
}

/// Picks the data directory: explicit flag, then `ROSTER_HOME`, then the
/// platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_home.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_dir: Option<&Path>) -> Result<RosterContext> {
    let data_dir = resolve_data_dir(data_dir, std::env::var_os(HOME_ENV).map(PathBuf::from))?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = match RosterConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not read config, using defaults");
            RosterConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone());
    let paths = RosterPaths { data_dir };
    let api = RosterApi::new(store, paths, config.clone());

    Ok(RosterContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RosterView;
    use crate::filter::FilterSpec;
    use tempfile::tempdir;

    #[test]
    fn explicit_dir_wins_over_env() {
        let dir = resolve_data_dir(Some(Path::new("/a")), Some(PathBuf::from("/b"))).unwrap();
        assert_eq!(dir, PathBuf::from("/a"));
    }

    #[test]
    fn env_dir_used_when_no_flag() {
        let dir = resolve_data_dir(None, Some(PathBuf::from("/b"))).unwrap();
        assert_eq!(dir, PathBuf::from("/b"));
    }

    #[test]
    fn initialize_builds_a_working_api() {
        let dir = tempdir().unwrap();
        let mut ctx = initialize(Some(dir.path())).unwrap();
        assert_eq!(ctx.api.paths().data_dir, dir.path());
        assert!(ctx.api.seed_if_empty().unwrap());

        let listed = ctx
            .api
            .list_employees(RosterView::Active, &FilterSpec::default())
            .unwrap();
        assert_eq!(listed.listed_employees.len(), 5);
        assert!(dir.path().join("employees.json").exists());
    }
}
