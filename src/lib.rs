//! Student Tracker - a terminal student performance tracker
//!
//! Core modules:
//! - `record`: Student records and their derived total score
//! - `category`: Score bands used for filtering
//! - `validate`: Field validators for typed input
//! - `manager`: The roster, id assignment and load/save
//! - `persistence`: JSON data file reading and writing
//! - `settings`: Command-line and environment configuration
//! - `cli`: The interactive menu loop

pub mod category;
pub mod cli;
pub mod error;
pub mod manager;
pub mod persistence;
pub mod record;
pub mod settings;
pub mod validate;

pub use category::Category;
pub use error::{CliError, ManagerError, StoreError, ValidationError};
pub use manager::{LoadOutcome, StudentManager};
pub use record::{Gender, Student, StudentDraft, StudentId, StudentUpdate};
pub use settings::Settings;

/// Roster constants
pub mod consts {
    /// Data file used when none is given
    pub const DEFAULT_DATA_FILE: &str = "students.json";
    /// Environment variable overriding the data file
    pub const DATA_FILE_ENV: &str = "STUDENT_TRACKER_DATA";

    /// Subject score bounds (inclusive)
    pub const MIN_SCORE: u8 = 0;
    pub const MAX_SCORE: u8 = 100;

    /// A name needs at least a first and a last name
    pub const MIN_NAME_WORDS: usize = 2;

    /// Lowest total score of each band
    pub const DISTINCTION_MIN: u16 = 380;
    pub const FIRST_CLASS_MIN: u16 = 300;
    pub const SECOND_CLASS_MIN: u16 = 240;
    pub const THIRD_CLASS_MIN: u16 = 180;
}
