//! Operator command parsing
//!
//! A command line is an optional `!` prefix, a command word, and the rest of
//! the line as arguments:
//!
//! ```text
//! !gate open-half
//! device add AA:BB:CC:11:22:33 guest Living Room Hub
//! ```

use crate::error::CommandError;
use crate::types::{AccessLevel, GateAction};

pub const GATE_USAGE: &str = "gate <open|open-half|close>";
pub const DEVICE_ADD_USAGE: &str = "device add <mac> <guest|resident|admin> <name...>";

/// Reply text for `help`
pub const HELP_TEXT: &str = "Commands: gate <open|open-half|close> | \
device add <mac> <level> <name...> | help | quit";

/// A parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Gate(GateAction),
    AddDevice {
        mac_address: String,
        access_level: AccessLevel,
        name: String,
    },
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse one command line
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let line = line.strip_prefix('!').unwrap_or(line).trim_start();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (word, args) = split_word(line);
    match word {
        "gate" => parse_gate(args),
        "device" => parse_device(args),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_gate(args: &str) -> Result<Command, CommandError> {
    let (sub, _) = split_word(args);
    if sub.is_empty() {
        return Err(CommandError::MissingArgument { usage: GATE_USAGE });
    }
    sub.parse::<GateAction>()
        .map(Command::Gate)
        .map_err(|subcommand| CommandError::UnknownSubcommand {
            command: "gate".to_string(),
            subcommand,
        })
}

fn parse_device(args: &str) -> Result<Command, CommandError> {
    let (sub, rest) = split_word(args);
    match sub {
        "add" => {}
        "" => {
            return Err(CommandError::MissingArgument {
                usage: DEVICE_ADD_USAGE,
            })
        }
        other => {
            return Err(CommandError::UnknownSubcommand {
                command: "device".to_string(),
                subcommand: other.to_string(),
            })
        }
    }

    let missing = || CommandError::MissingArgument {
        usage: DEVICE_ADD_USAGE,
    };

    let (mac_address, rest) = split_word(rest);
    let (level, name) = split_word(rest);
    let name = name.trim();
    if mac_address.is_empty() || level.is_empty() || name.is_empty() {
        return Err(missing());
    }
    let access_level = level.parse::<AccessLevel>().map_err(|_| missing())?;

    Ok(Command::AddDevice {
        mac_address: mac_address.to_string(),
        access_level,
        name: name.to_string(),
    })
}
