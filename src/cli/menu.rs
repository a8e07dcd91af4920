//! Main menu

pub const MENU: &str = "
╔════════════════════════════════════════╗
║       Student Management System        ║
╠════════════════════════════════════════╣
║  1. List all students                  ║
║  2. Add new student                    ║
║  3. Update student                     ║
║  4. Delete student                     ║
║  5. Search students by ID              ║
║  6. Filter by Marks                    ║
║  7. Import from JSON file              ║
║  0. Exit                               ║
╚════════════════════════════════════════╝
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Update,
    Delete,
    Search,
    Filter,
    Import,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Search),
            "6" => Some(MenuChoice::Filter),
            "7" => Some(MenuChoice::Import),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
