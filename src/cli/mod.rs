//! Interactive terminal session
//!
//! Shows the menu, reads a choice and runs it against the roster until the
//! user picks Exit or input runs out. Generic over the reader and writer so
//! a whole session can be scripted.

pub mod menu;
pub mod prompt;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::category::Category;
use crate::consts::{MAX_SCORE, MIN_SCORE};
use crate::error::{CliError, ManagerError, StoreError};
use crate::manager::{LoadOutcome, StudentManager};
use crate::record::{Student, StudentDraft, StudentId, StudentUpdate};
use crate::validate;

pub use menu::{MENU, MenuChoice};
pub use prompt::Prompter;

const SEPARATOR: &str = "==================================================";
const INVALID_ID: &str = "Invalid input. Please enter a valid integer ID.";
const GOODBYE: &str = "Exiting the Student Management System. Goodbye!";

/// The menu loop bound to one roster
pub struct App<'a, R, W> {
    manager: &'a mut StudentManager,
    prompt: Prompter<R, W>,
    /// Wait for Enter after each action
    pause: bool,
}

impl<'a, R: BufRead, W: Write> App<'a, R, W> {
    pub fn new(manager: &'a mut StudentManager, input: R, output: W) -> Self {
        Self {
            manager,
            prompt: Prompter::new(input, output),
            pause: true,
        }
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn into_output(self) -> W {
        self.prompt.into_inner().1
    }

    /// Run until Exit or end of input.
    ///
    /// Only terminal and data-file write failures escape; everything else is
    /// reported to the user and the menu comes back.
    pub fn run(&mut self) -> Result<(), CliError> {
        match self.menu_loop() {
            Ok(()) | Err(CliError::InputClosed) => {
                writeln!(self.prompt.output(), "{GOODBYE}")?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn menu_loop(&mut self) -> Result<(), CliError> {
        loop {
            write!(self.prompt.output(), "{MENU}")?;
            let Some(line) = self.prompt.ask("Enter your choice: ")? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.prompt.output(), "Invalid choice. Please try again.")?,
            }

            if self.pause {
                writeln!(self.prompt.output(), "\n{SEPARATOR}\n")?;
                if self.prompt.ask("Press Enter to continue...")?.is_none() {
                    return Ok(());
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), CliError> {
        log::debug!("Menu choice {choice:?}");
        match choice {
            MenuChoice::List => self.list(),
            MenuChoice::Add => self.add(),
            MenuChoice::Update => self.update(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Search => self.search(),
            MenuChoice::Filter => self.filter(),
            MenuChoice::Import => self.import(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn list(&mut self) -> Result<(), CliError> {
        writeln!(self.prompt.output(), "\n{SEPARATOR}\n")?;
        if self.manager.is_empty() {
            writeln!(self.prompt.output(), "No students found.")?;
            return Ok(());
        }
        let out = self.prompt.output();
        for student in self.manager.list() {
            writeln!(out, "{student}")?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<(), CliError> {
        let draft = self.read_draft()?;
        match self.manager.create(draft) {
            Ok(id) => writeln!(self.prompt.output(), "Student added successfully with ID {id}.")?,
            Err(ManagerError::Store(e)) => return Err(e.into()),
            Err(e) => writeln!(self.prompt.output(), "Could not add student: {e}.")?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), CliError> {
        let Some(id) = self.ask_id("Enter student ID to update: ")? else {
            return Ok(());
        };
        let Some(current) = self.manager.get(id).cloned() else {
            return self.not_found(id);
        };

        writeln!(self.prompt.output(), "Current record: {current}")?;
        writeln!(self.prompt.output(), "Leave a field blank to keep its current value.")?;
        let update = self.read_update(&current)?;

        match self.manager.update(id, update).map(Student::to_string) {
            Ok(line) => {
                writeln!(self.prompt.output(), "Student updated: {line}")?;
                Ok(())
            }
            Err(ManagerError::Store(e)) => Err(e.into()),
            Err(ManagerError::NotFound(id)) => self.not_found(id),
            Err(e) => {
                writeln!(self.prompt.output(), "{e}")?;
                Ok(())
            }
        }
    }

    fn delete(&mut self) -> Result<(), CliError> {
        let Some(id) = self.ask_id("Enter student ID to delete: ")? else {
            return Ok(());
        };
        let Some(line) = self.manager.get(id).map(Student::to_string) else {
            return self.not_found(id);
        };
        writeln!(self.prompt.output(), "{line}")?;

        let confirm = self
            .prompt
            .answer("Are you sure you want to delete this student? Type 'yes' to confirm: ")?;
        if !confirm.trim().eq_ignore_ascii_case("yes") {
            writeln!(self.prompt.output(), "Deletion cancelled.")?;
            return Ok(());
        }

        match self.manager.delete(id) {
            Ok(_) => {
                writeln!(self.prompt.output(), "Student with ID {id} deleted successfully.")?;
                Ok(())
            }
            Err(ManagerError::Store(e)) => Err(e.into()),
            Err(ManagerError::NotFound(id)) => self.not_found(id),
            Err(e) => {
                writeln!(self.prompt.output(), "{e}")?;
                Ok(())
            }
        }
    }

    fn search(&mut self) -> Result<(), CliError> {
        let Some(id) = self.ask_id("Enter student ID to search for: ")? else {
            return Ok(());
        };
        match self.manager.get(id).map(Student::to_string) {
            Some(line) => {
                writeln!(self.prompt.output(), "{line}")?;
                Ok(())
            }
            None => self.not_found(id),
        }
    }

    fn filter(&mut self) -> Result<(), CliError> {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        let question = format!("Filter students by ({}): ", names.join(", "));
        let name = self.prompt.answer(&question)?;

        let lines: Vec<String> = self
            .manager
            .filter_by_category(&name)
            .into_iter()
            .map(Student::to_string)
            .collect();

        let out = self.prompt.output();
        if lines.is_empty() {
            writeln!(out, "No students found in category '{}'.", name.trim())?;
        }
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn import(&mut self) -> Result<(), CliError> {
        let name = self
            .prompt
            .answer("Enter the filename to import from (e.g., students.json): ")?;
        let path = PathBuf::from(name.trim());

        match self.manager.load(&path) {
            Ok(LoadOutcome::Loaded(count)) => {
                self.manager.save()?;
                writeln!(
                    self.prompt.output(),
                    "Imported {count} students from {}.",
                    path.display()
                )?;
            }
            Ok(LoadOutcome::Missing) => {
                writeln!(self.prompt.output(), "File {} not found.", path.display())?;
            }
            Err(
                e @ (StoreError::Read { .. }
                | StoreError::Parse { .. }
                | StoreError::InvalidId { .. }),
            ) => {
                log::warn!("Import failed: {e}");
                writeln!(self.prompt.output(), "Could not import: {e}")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Ask for an id; `None` after telling the user it wasn't a number
    fn ask_id(&mut self, question: &str) -> Result<Option<StudentId>, CliError> {
        let line = self.prompt.answer(question)?;
        match line.trim().parse::<StudentId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.prompt.output(), "{INVALID_ID}")?;
                Ok(None)
            }
        }
    }

    fn not_found(&mut self, id: StudentId) -> Result<(), CliError> {
        writeln!(self.prompt.output(), "Student with ID {id} not found.")?;
        Ok(())
    }

    fn read_draft(&mut self) -> Result<StudentDraft, CliError> {
        let p = &mut self.prompt;
        let range = format!("({MIN_SCORE}-{MAX_SCORE})");
        Ok(StudentDraft {
            name: p.ask_valid("Enter student name: ", validate::name)?,
            gender: p.ask_valid("Enter gender (Male/Female): ", validate::gender)?,
            english_score: p.ask_valid(&format!("Enter English score {range}: "), validate::score)?,
            math_score: p.ask_valid(&format!("Enter Math score {range}: "), validate::score)?,
            science_score: p.ask_valid(&format!("Enter Science score {range}: "), validate::score)?,
            art_score: p.ask_valid(&format!("Enter Art score {range}: "), validate::score)?,
        })
    }

    /// Blank answers keep the current value
    fn read_update(&mut self, current: &Student) -> Result<StudentUpdate, CliError> {
        let p = &mut self.prompt;
        let score = |s: &str| validate::optional(s, validate::score);
        Ok(StudentUpdate {
            name: p.ask_valid(&format!("Enter new name [{}]: ", current.name), |s| {
                validate::optional(s, validate::name)
            })?,
            gender: p.ask_valid(&format!("Enter new gender [{}]: ", current.gender), |s| {
                validate::optional(s, validate::gender)
            })?,
            english_score: p.ask_valid(
                &format!("Enter new English score [{}]: ", current.english_score),
                score,
            )?,
            math_score: p.ask_valid(
                &format!("Enter new Math score [{}]: ", current.math_score),
                score,
            )?,
            science_score: p.ask_valid(
                &format!("Enter new Science score [{}]: ", current.science_score),
                score,
            )?,
            art_score: p.ask_valid(
                &format!("Enter new Art score [{}]: ", current.art_score),
                score,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(manager: &mut StudentManager, script: &str) -> String {
        let mut app = App::new(manager, Cursor::new(script.as_bytes().to_vec()), Vec::new())
            .with_pause(false);
        app.run().unwrap();
        String::from_utf8(app.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = StudentManager::new(dir.path().join("s.json"));
        let out = session(&mut manager, "0\n");
        assert!(out.contains("Student Management System"));
        assert!(out.ends_with(&format!("{GOODBYE}\n")));
    }

    #[test]
    fn test_invalid_choice() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = StudentManager::new(dir.path().join("s.json"));
        let out = session(&mut manager, "9\n0\n");
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_non_integer_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = StudentManager::new(dir.path().join("s.json"));
        let out = session(&mut manager, "5\nabc\n3\n-1\n0\n");
        assert_eq!(out.matches(INVALID_ID).count(), 2);
    }

    #[test]
    fn test_pause_waits_for_enter() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = StudentManager::new(dir.path().join("s.json"));
        let mut app = App::new(&mut manager, Cursor::new(b"1\n\n0\n".to_vec()), Vec::new());
        app.run().unwrap();
        let out = String::from_utf8(app.into_output()).unwrap();
        assert!(out.contains("Press Enter to continue..."));
        assert_eq!(out.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn test_eof_mid_add_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = StudentManager::new(dir.path().join("s.json"));
        let out = session(&mut manager, "2\nJane Doe\nFemale\n90\n");
        assert!(out.ends_with(&format!("{GOODBYE}\n")));
        assert!(manager.is_empty());
        assert!(!manager.path().exists());
    }
}
