//! Environment overrides for the data file.
//!
//! Kept in its own test binary: it mutates the process environment, and
//! nothing else in this process parses flags concurrently.

use std::path::PathBuf;

use clap::Parser;
use student_tracker::consts::DATA_FILE_ENV;
use student_tracker::settings::{Cli, Settings};

#[test]
fn test_data_file_from_env_and_flag_precedence() {
    // SAFETY: the only test in this binary, so no other thread reads the
    // environment while it is modified.
    unsafe { std::env::set_var(DATA_FILE_ENV, "/srv/roster/from-env.json") };

    let settings = Settings::from(Cli::try_parse_from(["student-tracker"]).unwrap());
    assert_eq!(settings.data_file, PathBuf::from("/srv/roster/from-env.json"));
    assert!(settings.load_on_start);

    // An explicit flag beats the environment
    let settings = Settings::from(
        Cli::try_parse_from(["student-tracker", "--data-file", "flag.json"]).unwrap(),
    );
    assert_eq!(settings.data_file, PathBuf::from("flag.json"));

    // SAFETY: as above.
    unsafe { std::env::remove_var(DATA_FILE_ENV) };
    let settings = Settings::from(Cli::try_parse_from(["student-tracker"]).unwrap());
    assert_eq!(settings.data_file, PathBuf::from("students.json"));
}
