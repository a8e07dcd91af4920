//! Student Tracker entry point
//!
//! Resolves settings, loads the roster and runs the menu on the terminal.

use std::io;

use anyhow::Context;
use student_tracker::cli::App;
use student_tracker::{LoadOutcome, Settings, StudentManager};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::from_args();
    log::info!("Student Tracker starting with {}", settings.data_file.display());

    let mut manager = StudentManager::new(&settings.data_file);
    if settings.load_on_start {
        match manager
            .load(&settings.data_file)
            .context("refusing to start with an unreadable data file")?
        {
            LoadOutcome::Loaded(count) => println!("Loaded {count} students."),
            LoadOutcome::Missing => println!(
                "No data file at {}, starting with an empty roster.",
                settings.data_file.display()
            ),
        }
    }

    let stdin = io::stdin();
    let mut app = App::new(&mut manager, stdin.lock(), io::stdout()).with_pause(settings.pause);
    app.run().context("session aborted")?;
    Ok(())
}
