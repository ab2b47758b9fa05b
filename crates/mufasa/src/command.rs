//! Slash commands understood by the CLI.

use std::fmt::{self, Display, Formatter};

use mufasa_core::language::{Language, UnknownLanguage};

/// A parsed slash command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `/lang <code>`
    SetLanguage(Language),
    /// `/langs`
    ListLanguages,
    /// `/translate on|off`
    SetAutoTranslate(bool),
    /// `/clear`
    Clear,
    /// `/detect <text>`
    Detect(String),
    /// `/ping`
    Ping,
    /// `/help`
    Help,
}

/// Why a slash command could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command name is not known.
    Unknown(String),
    /// The command is known but its argument is missing or invalid.
    Usage(&'static str),
    /// `/lang` was given an unsupported code.
    Language(UnknownLanguage),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(name) => {
                write!(f, "unknown command /{name}, try /help")
            }
            CommandError::Usage(usage) => write!(f, "usage: {usage}"),
            CommandError::Language(err) => {
                write!(f, "{err}, try /langs")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// One line per command, for `/help`.
pub const HELP: &[(&str, &str)] = &[
    ("/lang <code>", "switch the conversation language"),
    ("/langs", "list supported languages"),
    ("/translate on|off", "translate replies into the active language"),
    ("/clear", "forget the conversation"),
    ("/detect <text>", "guess the language of some text"),
    ("/ping", "check the API connection"),
    ("/help", "show this help"),
];

impl Command {
    /// Parses a line of input.
    ///
    /// Returns `None` if the line is not a command, i.e. does not start
    /// with `/`.
    pub fn parse(line: &str) -> Option<Result<Command, CommandError>> {
        let rest = line.trim().strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "lang" if arg.is_empty() => {
                Err(CommandError::Usage("/lang <code>"))
            }
            "lang" => arg
                .parse()
                .map(Command::SetLanguage)
                .map_err(CommandError::Language),
            "langs" => Ok(Command::ListLanguages),
            "translate" => match arg.to_ascii_lowercase().as_str() {
                "on" => Ok(Command::SetAutoTranslate(true)),
                "off" => Ok(Command::SetAutoTranslate(false)),
                _ => Err(CommandError::Usage("/translate on|off")),
            },
            "clear" => Ok(Command::Clear),
            "detect" if arg.is_empty() => {
                Err(CommandError::Usage("/detect <text>"))
            }
            "detect" => Ok(Command::Detect(arg.to_owned())),
            "ping" => Ok(Command::Ping),
            "help" => Ok(Command::Help),
            other => Err(CommandError::Unknown(other.to_owned())),
        };
        Some(command)
    }
}
