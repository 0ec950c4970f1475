//! Menu option parsing.

use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Add a new visit record.
    Create,
    /// Show all records with a given SR-Code.
    Search,
    /// Show every record.
    List,
    /// Remove the first record with a given SR-Code.
    Delete,
    /// Overwrite the first record with a given SR-Code.
    Update,
    /// Leave the menu loop.
    Exit,
}

impl MenuOption {
    /// All options in menu order.
    pub const ALL: [MenuOption; 6] = [
        Self::Create,
        Self::Search,
        Self::List,
        Self::Delete,
        Self::Update,
        Self::Exit,
    ];

    /// The number the clerk types to select this option.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Create => 1,
            Self::Search => 2,
            Self::List => 3,
            Self::Delete => 4,
            Self::Update => 5,
            Self::Exit => 6,
        }
    }

    /// Menu text for this option.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Create => "Create a Student Record",
            Self::Search => "Search a Student Record",
            Self::List => "Display all Student Record",
            Self::Delete => "Delete a Student Record",
            Self::Update => "Update a Student Record",
            Self::Exit => "Exit ",
        }
    }
}

impl std::fmt::Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.description())
    }
}

/// Input that does not name a menu option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl FromStr for MenuOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        input
            .parse::<u8>()
            .ok()
            .and_then(|n| Self::ALL.into_iter().find(|option| option.number() == n))
            .ok_or_else(|| UnknownOption(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_numbers() {
        assert_eq!("1".parse(), Ok(MenuOption::Create));
        assert_eq!("2".parse(), Ok(MenuOption::Search));
        assert_eq!("3".parse(), Ok(MenuOption::List));
        assert_eq!("4".parse(), Ok(MenuOption::Delete));
        assert_eq!("5".parse(), Ok(MenuOption::Update));
        assert_eq!("6".parse(), Ok(MenuOption::Exit));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 3 ".parse(), Ok(MenuOption::List));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!("0".parse::<MenuOption>().is_err());
        assert!("7".parse::<MenuOption>().is_err());
        assert!("-1".parse::<MenuOption>().is_err());
    }

    #[test]
    fn test_parse_rejects_text() {
        assert_eq!(
            "list".parse::<MenuOption>(),
            Err(UnknownOption("list".to_string()))
        );
        assert!("".parse::<MenuOption>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuOption::Create.to_string(), "1. Create a Student Record");
        assert_eq!(MenuOption::List.to_string(), "3. Display all Student Record");
    }
}
