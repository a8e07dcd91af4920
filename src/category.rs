//! Score bands used to filter the roster
//!
//! Every total score falls into exactly one band.

use crate::consts::{DISTINCTION_MIN, FIRST_CLASS_MIN, SECOND_CLASS_MIN, THIRD_CLASS_MIN};

/// Performance band derived from a student's total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// 380 and above
    Distinction,
    /// 300 up to 379
    FirstClass,
    /// 240 up to 299
    SecondClass,
    /// 180 up to 239
    ThirdClass,
    /// Below 180
    Fail,
}

impl Category {
    /// All bands, best first
    pub const ALL: [Category; 5] = [
        Category::Distinction,
        Category::FirstClass,
        Category::SecondClass,
        Category::ThirdClass,
        Category::Fail,
    ];

    /// Classify a total score
    pub fn from_total(total: u16) -> Self {
        if total >= DISTINCTION_MIN {
            Category::Distinction
        } else if total >= FIRST_CLASS_MIN {
            Category::FirstClass
        } else if total >= SECOND_CLASS_MIN {
            Category::SecondClass
        } else if total >= THIRD_CLASS_MIN {
            Category::ThirdClass
        } else {
            Category::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Distinction => "distinction",
            Category::FirstClass => "first class",
            Category::SecondClass => "second class",
            Category::ThirdClass => "third class",
            Category::Fail => "fail",
        }
    }

    /// Parse a band name typed by the user.
    ///
    /// Case-insensitive; words may be separated by spaces, `_` or `-`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "distinction" => Some(Category::Distinction),
            "first class" => Some(Category::FirstClass),
            "second class" => Some(Category::SecondClass),
            "third class" => Some(Category::ThirdClass),
            "fail" => Some(Category::Fail),
            _ => None,
        }
    }

    /// Inclusive lower bound of the band
    pub fn min_total(&self) -> u16 {
        match self {
            Category::Distinction => DISTINCTION_MIN,
            Category::FirstClass => FIRST_CLASS_MIN,
            Category::SecondClass => SECOND_CLASS_MIN,
            Category::ThirdClass => THIRD_CLASS_MIN,
            Category::Fail => 0,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
