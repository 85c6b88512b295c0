//! Command parsing for the interactive loop.

/// A parsed input line: a verb plus whatever followed it, untokenized.
///
/// Verbs are matched case-insensitively against a bilingual synonym table;
/// argument splitting is left to each handler since the shapes differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add NAME PHONE [BIRTHDAY]`
    Add(Option<String>),

    /// `edit NAME PHONE`
    Edit(Option<String>),

    /// `show-all`
    ShowAll,

    /// `search QUERY`
    Search(Option<String>),

    /// `delete NAME`
    Delete(Option<String>),

    /// `birthday NAME`
    Birthday(Option<String>),

    /// `exit` / `quit`
    Exit,

    /// Anything else; carries the unrecognized verb
    Unknown(String),
}

impl Command {
    /// Parse one input line. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, Some(rest.trim().to_string())),
            None => (trimmed, None),
        };
        let rest = rest.filter(|r| !r.is_empty());

        let command = match verb.to_lowercase().as_str() {
            "add" | "add-contact" | "додати" => Command::Add(rest),
            "edit" | "редагувати" => Command::Edit(rest),
            "show-all" | "show" | "показати" => Command::ShowAll,
            "search" | "пошук" => Command::Search(rest),
            "delete" | "видалити" => Command::Delete(rest),
            "birthday" | "народження" => Command::Birthday(rest),
            "exit" | "quit" | "вихід" | "завершити" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \n"), None);
    }

    #[test]
    fn test_parse_verb_only() {
        assert_eq!(Command::parse("show-all"), Some(Command::ShowAll));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("add"), Some(Command::Add(None)));
    }

    #[test]
    fn test_parse_verb_with_args() {
        assert_eq!(
            Command::parse("add Олена 0501234567"),
            Some(Command::Add(Some("Олена 0501234567".to_string())))
        );
        assert_eq!(
            Command::parse("delete Олена"),
            Some(Command::Delete(Some("Олена".to_string())))
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("ADD x"), Some(Command::Add(Some("x".to_string()))));
        assert_eq!(Command::parse("Show-All"), Some(Command::ShowAll));
        assert_eq!(Command::parse("ДОДАТИ x"), Some(Command::Add(Some("x".to_string()))));
    }

    #[test]
    fn test_parse_bilingual_synonyms() {
        assert_eq!(Command::parse("додати x y"), Some(Command::Add(Some("x y".to_string()))));
        assert_eq!(Command::parse("редагувати x"), Some(Command::Edit(Some("x".to_string()))));
        assert_eq!(Command::parse("показати"), Some(Command::ShowAll));
        assert_eq!(Command::parse("пошук 050"), Some(Command::Search(Some("050".to_string()))));
        assert_eq!(Command::parse("видалити x"), Some(Command::Delete(Some("x".to_string()))));
        assert_eq!(Command::parse("народження x"), Some(Command::Birthday(Some("x".to_string()))));
        assert_eq!(Command::parse("вихід"), Some(Command::Exit));
        assert_eq!(Command::parse("завершити"), Some(Command::Exit));
        assert_eq!(Command::parse("quit"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_add_contact_alias() {
        assert_eq!(
            Command::parse("add-contact Олена 0501234567"),
            Some(Command::Add(Some("Олена 0501234567".to_string())))
        );
    }

    #[test]
    fn test_parse_unknown_verb() {
        assert_eq!(
            Command::parse("frobnicate"),
            Some(Command::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_parse_trailing_whitespace_only_args() {
        assert_eq!(Command::parse("add   "), Some(Command::Add(None)));
    }
}
