use crate::errors::CommandError;
use crate::map::models::GeoPoint;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Start,
    /// Moves the marker, like clicking on the map.
    Mark(GeoPoint),
    Hint,
    /// Submits the marker's position.
    Answer,
    /// Moves the marker and submits it in one go.
    Guess(GeoPoint),
    Next,
    Reset,
    Status,
    Sites,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();
        let command = match name.as_str() {
            "start" => Command::Start,
            "mark" | "m" => Command::Mark(parse_point("mark", &args)?),
            "hint" => Command::Hint,
            "answer" | "a" => Command::Answer,
            "guess" | "g" => Command::Guess(parse_point("guess", &args)?),
            "next" | "n" => Command::Next,
            "reset" => Command::Reset,
            "status" => Command::Status,
            "sites" => Command::Sites,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };
        let takes_args = matches!(command, Command::Mark(_) | Command::Guess(_));
        if !takes_args && !args.is_empty() {
            return Err(CommandError::UnexpectedArguments(command.name()));
        }
        Ok(command)
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Mark(_) => "mark",
            Self::Hint => "hint",
            Self::Answer => "answer",
            Self::Guess(_) => "guess",
            Self::Next => "next",
            Self::Reset => "reset",
            Self::Status => "status",
            Self::Sites => "sites",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

/// Accepts `35.69 139.69` as well as `35.69, 139.69`.
fn parse_point(command: &'static str, args: &[&str]) -> Result<GeoPoint, CommandError> {
    let joined = args.join(" ");
    let numbers: Vec<&str> = joined
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [lat, lng] = numbers.as_slice() else {
        return Err(CommandError::MissingCoordinates(command));
    };
    let parse = |raw: &str| {
        raw.parse::<f64>()
            .map_err(|_| CommandError::BadNumber(raw.to_string()))
    };
    Ok(GeoPoint::new(parse(*lat)?, parse(*lng)?)?)
}
