use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use roster::config::ViewMode;
use roster::filter::{Choice, DateRange, FilterSpec};
use roster::model::{parse_date, Department, EmployeeDraft, EmployeeUpdate, Status};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Employee roster: list, filter, archive and export to CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding employees.json and config.json [env: ROSTER_HOME]
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Filter flags shared by list, export and stats.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name, role, department and id
    #[arg(short, long)]
    pub search: Option<String>,

    /// Department (Engineering, Marketing, HR, Sales) or "all"
    #[arg(short, long, default_value = "all")]
    pub department: Choice<Department>,

    /// Status (Active, Inactive) or "all"
    #[arg(long, default_value = "all")]
    pub status: Choice<Status>,

    /// Joined on or after this date (YYYY-MM-DD); needs --to
    #[arg(long, value_parser = parse_date_arg, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Joined on or before this date (YYYY-MM-DD); needs --from
    #[arg(long, value_parser = parse_date_arg, value_name = "DATE")]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        let date_range = if self.from.is_some() || self.to.is_some() {
            Some(DateRange::new(self.from, self.to))
        } else {
            None
        };
        FilterSpec {
            search_text: self.search.clone().unwrap_or_default(),
            department: self.department,
            status: self.status,
            date_range,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Full name (at least 2 characters)
    #[arg(long)]
    pub name: String,

    /// Engineering, Marketing, HR or Sales
    #[arg(short, long)]
    pub department: Department,

    /// Job title (at least 2 characters)
    #[arg(long)]
    pub role: String,

    /// Joining date (YYYY-MM-DD), not in the future
    #[arg(long, value_parser = parse_date_arg, value_name = "DATE")]
    pub joined: NaiveDate,

    /// Active or Inactive
    #[arg(long, default_value = "Active")]
    pub status: Status,

    /// Performance score, 1-100
    #[arg(long)]
    pub score: u8,
}

impl From<AddArgs> for EmployeeDraft {
    fn from(args: AddArgs) -> Self {
        EmployeeDraft {
            name: args.name,
            department: args.department,
            role: args.role,
            joining_date: args.joined,
            status: args.status,
            performance_score: args.score,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Employee id (e.g. EMP003)
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub department: Option<Department>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long, value_parser = parse_date_arg, value_name = "DATE")]
    pub joined: Option<NaiveDate>,

    #[arg(long)]
    pub status: Option<Status>,

    #[arg(long)]
    pub score: Option<u8>,
}

impl EditArgs {
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            name: self.name.clone(),
            department: self.department,
            role: self.role.clone(),
            joining_date: self.joined,
            status: self.status,
            performance_score: self.score,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees (the default command)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Show archived employees instead of the active roster
        #[arg(long)]
        archived: bool,

        /// Layout override: table or cards
        #[arg(long)]
        view: Option<ViewMode>,
    },

    /// Add an employee; the id is generated
    #[command(alias = "new")]
    Add(AddArgs),

    /// Change fields of an employee
    #[command(alias = "e")]
    Edit(EditArgs),

    /// Show employees in detail
    #[command(alias = "v")]
    View {
        /// Employee ids (e.g. EMP001 EMP004)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Archive employees (they stay stored and can be restored)
    #[command(alias = "rm")]
    Archive {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Restore archived employees
    Restore {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Export the displayed roster to CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Export from the archived list instead of the active roster
        #[arg(long)]
        archived: bool,

        /// Export every displayed employee, ignoring filters
        #[arg(long)]
        all: bool,

        /// Destination file (default: <export-dir>/<scope>_employees_<date>.csv)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Preview what an export would contain
    Stats {
        #[command(flatten)]
        filters: FilterArgs,

        /// Summarize the archived list instead of the active roster
        #[arg(long)]
        archived: bool,

        /// Summarize every displayed employee, ignoring filters
        #[arg(long)]
        all: bool,
    },

    /// Remove all stored employee data
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (view-mode, seed-sample-data, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}
