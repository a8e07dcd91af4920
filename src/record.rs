//! Student records
//!
//! Plain data. Field validity is checked at the prompt (see `validate`)
//! before a record is ever built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Identifier assigned by the manager, starting at 1
pub type StudentId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student on the roster, as stored in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub gender: Gender,
    pub english_score: u8,
    pub math_score: u8,
    pub science_score: u8,
    pub art_score: u8,
}

impl Student {
    pub fn from_draft(id: StudentId, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            gender: draft.gender,
            english_score: draft.english_score,
            math_score: draft.math_score,
            science_score: draft.science_score,
            art_score: draft.art_score,
        }
    }

    /// Sum of the four subject scores (0-400 for valid records)
    pub fn total_score(&self) -> u16 {
        [
            self.english_score,
            self.math_score,
            self.science_score,
            self.art_score,
        ]
        .iter()
        .map(|&s| u16::from(s))
        .sum()
    }

    pub fn category(&self) -> Category {
        Category::from_total(self.total_score())
    }

    /// Replace the fields present in `update`, keep the rest
    pub fn apply(&mut self, update: StudentUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(score) = update.english_score {
            self.english_score = score;
        }
        if let Some(score) = update.math_score {
            self.math_score = score;
        }
        if let Some(score) = update.science_score {
            self.science_score = score;
        }
        if let Some(score) = update.art_score {
            self.art_score = score;
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Gender: {}, English Score: {}, Math Score: {}, \
             Science Score: {}, Art Score: {}, Total Score: {}",
            self.id,
            self.name,
            self.gender,
            self.english_score,
            self.math_score,
            self.science_score,
            self.art_score,
            self.total_score()
        )
    }
}

/// Fields for a new student; the manager assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub gender: Gender,
    pub english_score: u8,
    pub math_score: u8,
    pub science_score: u8,
    pub art_score: u8,
}

/// Partial replacement of a student's fields (`None` = unchanged)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub english_score: Option<u8>,
    pub math_score: Option<u8>,
    pub science_score: Option<u8>,
    pub art_score: Option<u8>,
}

impl StudentUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
