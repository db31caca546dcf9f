//! Shell command parsing.

use std::path::PathBuf;

use healia_core::MoodTier;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `checkin <mood> <text...>`; text may be blank, the session rejects it
    CheckIn { mood: MoodTier, text: String },
    /// `condition [<name>]`; no name clears the selection
    Condition(String),
    /// `herb <name...>`
    Herb(String),
    Journal,
    Log,
    Stats { json: bool },
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug)]
pub enum ParseError {
    /// Nothing but whitespace
    Blank,
    Unknown(String),
    Usage(&'static str),
    Mood(healia_core::Error),
}

impl ParseError {
    pub fn message(&self) -> String {
        match self {
            ParseError::Blank => String::new(),
            ParseError::Unknown(word) => {
                format!("Unknown command '{}'. Type 'help' for commands.", word)
            }
            ParseError::Usage(usage) => format!("Usage: {}", usage),
            ParseError::Mood(err) => err.user_message(),
        }
    }
}

pub const HELP: &str = "\
Commands:
  checkin <mood> <text...>   log how you feel (mood: happy, neutral, sad, anxious, angry)
  condition [<name>]         pick a condition for remedy ideas, or clear it
  herb <name...>             ask about an herb
  journal                    get a journal prompt
  log                        show this session's mood log
  stats [json]               mood score over time, frequency and distribution
  export [<path>]            save the mood log as CSV
  help                       show this help
  quit                       end the session";

impl std::str::FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ParseError::Blank),
            "checkin" | "check-in" => {
                let (mood, text) = match rest.split_once(char::is_whitespace) {
                    Some((mood, text)) => (mood, text.trim()),
                    None => (rest, ""),
                };
                if mood.is_empty() {
                    return Err(ParseError::Usage("checkin <mood> <text...>"));
                }
                let mood = mood.parse::<MoodTier>().map_err(ParseError::Mood)?;
                Ok(Command::CheckIn {
                    mood,
                    text: text.to_string(),
                })
            }
            "condition" => Ok(Command::Condition(rest.to_string())),
            "herb" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("herb <name...>"));
                }
                Ok(Command::Herb(rest.to_string()))
            }
            "journal" => Ok(Command::Journal),
            "log" => Ok(Command::Log),
            "stats" => match rest {
                "" => Ok(Command::Stats { json: false }),
                "json" => Ok(Command::Stats { json: true }),
                _ => Err(ParseError::Usage("stats [json]")),
            },
            "export" => Ok(Command::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseError::Unknown(word.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn test_parse_check_in() {
        assert_eq!(
            parse("checkin happy I feel happy today"),
            Command::CheckIn {
                mood: MoodTier::Happy,
                text: "I feel happy today".to_string()
            }
        );
        assert_eq!(
            parse("CHECKIN Sad   rainy,  cold "),
            Command::CheckIn {
                mood: MoodTier::Sad,
                text: "rainy,  cold".to_string()
            }
        );
    }

    #[test]
    fn test_check_in_without_text_reaches_session() {
        assert_eq!(
            parse("checkin angry"),
            Command::CheckIn {
                mood: MoodTier::Angry,
                text: String::new()
            }
        );
    }

    #[test]
    fn test_check_in_errors() {
        assert!(matches!(
            "checkin".parse::<Command>(),
            Err(ParseError::Usage(_))
        ));
        let err = "checkin elated yay".parse::<Command>().unwrap_err();
        assert!(err.message().contains("Unknown mood 'elated'"));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("condition insomnia"), Command::Condition("insomnia".into()));
        assert_eq!(parse("condition"), Command::Condition(String::new()));
        assert_eq!(parse("herb lemon balm"), Command::Herb("lemon balm".into()));
        assert_eq!(parse("journal"), Command::Journal);
        assert_eq!(parse("log"), Command::Log);
        assert_eq!(parse("stats"), Command::Stats { json: false });
        assert_eq!(parse("stats json"), Command::Stats { json: true });
        assert_eq!(parse("export"), Command::Export(None));
        assert_eq!(
            parse("export /tmp/out.csv"),
            Command::Export(Some(PathBuf::from("/tmp/out.csv")))
        );
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_blank_and_unknown() {
        assert!(matches!("   ".parse::<Command>(), Err(ParseError::Blank)));
        let err = "dance".parse::<Command>().unwrap_err();
        assert_eq!(
            err.message(),
            "Unknown command 'dance'. Type 'help' for commands."
        );
        assert!(matches!(
            "herb".parse::<Command>(),
            Err(ParseError::Usage(_))
        ));
    }
}
