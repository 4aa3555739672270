//! Parsing of session commands, one per input line.

/// What to write with `save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget {
    Messages,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Url(String),
    File(String),
    Summarise,
    Ask(String),
    Save(SaveTarget),
    Show,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

impl Command {
    /// Parses a line. Missing arguments are passed through as empty strings
    /// so the controller can report them; unknown verbs are an error.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "" => Command::Nothing,
            "url" => Command::Url(rest.to_string()),
            "file" => Command::File(rest.to_string()),
            "summarise" | "summarize" => Command::Summarise,
            "ask" => Command::Ask(rest.to_string()),
            "save" => match rest.to_ascii_lowercase().as_str() {
                "messages" => Command::Save(SaveTarget::Messages),
                "summary" => Command::Save(SaveTarget::Summary),
                _ => return Err("Usage: save messages|summary".to_string()),
            },
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(format!("Unknown command: {verb}")),
        };
        Ok(command)
    }
}
