//! The single-character command vocabulary of the interactive loop.

/// One user command. Follow-up values (resistance, label) are prompted for
/// separately by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `I` — insert a resistor.
    Insert,
    /// `R` — remove a resistor by label.
    Remove,
    /// `C` — compute the circuit current.
    Current,
    /// `V` — compute the voltage across a named resistor.
    Voltage,
    /// `P` — print all resistors ascending by label.
    Print,
    /// `Q` — report and release all resistors, then terminate.
    Quit,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// Exactly one character after trimming; case-insensitive. Returns
    /// `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match first.to_ascii_uppercase() {
            'I' => Some(Command::Insert),
            'R' => Some(Command::Remove),
            'C' => Some(Command::Current),
            'V' => Some(Command::Voltage),
            'P' => Some(Command::Print),
            'Q' => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("I"), Some(Command::Insert));
        assert_eq!(Command::parse("R"), Some(Command::Remove));
        assert_eq!(Command::parse("C"), Some(Command::Current));
        assert_eq!(Command::parse("V"), Some(Command::Voltage));
        assert_eq!(Command::parse("P"), Some(Command::Print));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("  p \n"), Some(Command::Print));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("X"), None);
        assert_eq!(Command::parse("IR"), None);
        assert_eq!(Command::parse("insert"), None);
    }
}
