use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DATA_FILENAME: &str = "employees.json";
pub const BACKUP_FILENAME: &str = "employees.json.bak";

/// What is on disk, before degrading to an empty roster.
enum Contents {
    Missing,
    Unreadable(String),
    Roster(Vec<Employee>),
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    /// Where an unreadable data file is copied before it is overwritten.
    pub fn backup_file(&self) -> PathBuf {
        self.root.join(BACKUP_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }

    fn read(&self) -> Contents {
        let path = self.data_file();
        if !path.exists() {
            return Contents::Missing;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => return Contents::Unreadable(e.to_string()),
        };
        match serde_json::from_str::<Vec<Employee>>(&content) {
            Ok(employees) => Contents::Roster(employees),
            Err(e) => Contents::Unreadable(e.to_string()),
        }
    }
}

impl DataStore for FileStore {
    fn load_employees(&self) -> Result<Vec<Employee>> {
        let path = self.data_file();
        match self.read() {
            Contents::Missing => {
                debug!(path = %path.display(), "no roster file yet");
                Ok(Vec::new())
            }
            Contents::Unreadable(error) => {
                warn!(path = %path.display(), %error, "unreadable roster, treating as empty");
                Ok(Vec::new())
            }
            Contents::Roster(employees) => {
                debug!(path = %path.display(), count = employees.len(), "loaded roster");
                Ok(employees)
            }
        }
    }

    fn save_employees(&mut self, employees: &[Employee]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_file();
        if let Contents::Unreadable(_) = self.read() {
            let backup = self.backup_file();
            fs::copy(&path, &backup).map_err(RosterError::Io)?;
            warn!(backup = %backup.display(), "kept a copy of the unreadable roster");
        }
        let content = serde_json::to_string_pretty(employees).map_err(RosterError::Serialization)?;
        fs::write(&path, content).map_err(RosterError::Io)?;
        debug!(path = %path.display(), count = employees.len(), "saved roster");
        Ok(())
    }

    fn has_unreadable_data(&self) -> bool {
        matches!(self.read(), Contents::Unreadable(_))
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.data_file();
        if path.exists() {
            fs::remove_file(&path).map_err(RosterError::Io)?;
            debug!(path = %path.display(), "cleared roster");
        }
        Ok(())
    }
}
