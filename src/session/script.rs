//! Session script commands
//!
//! One command per line; blank lines and `#` comments are skipped.

use std::str::FromStr;

/// A single scripted interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Load metadata for media of the given duration in seconds
    Load(f64),

    /// Click the play/pause button
    Play,

    /// Click the video surface
    ClickVideo,

    /// Let the given seconds of wall time pass
    Tick(f64),

    /// Click the progress track at a pixel offset
    Seek(f64),

    /// Click the volume track at a pixel offset
    Volume(f64),

    /// Click the volume icon
    Mute,

    /// Pick a rate on the speed selector
    Speed(f64),

    /// Click the fullscreen button
    Fullscreen,

    /// Render the control surface
    Show,
}

impl Command {
    /// Parse a script line; `Ok(None)` for blank lines and comments
    pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

fn number(word: &str, arg: Option<&str>) -> Result<f64, String> {
    let arg = arg.ok_or_else(|| format!("'{}' needs a number", word))?;
    let value: f64 = arg
        .parse()
        .map_err(|_| format!("'{}' is not a number", arg))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{}' must be a non-negative number", arg));
    }
    Ok(value)
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().ok_or_else(|| "empty command".to_string())?;

        let command = match word {
            "load" => Command::Load(number(word, words.next())?),
            "play" => Command::Play,
            "click" => match words.next() {
                Some("video") => Command::ClickVideo,
                Some(other) => return Err(format!("cannot click '{}'", other)),
                None => return Err("'click' needs a target".to_string()),
            },
            "tick" => Command::Tick(number(word, words.next())?),
            "seek" => Command::Seek(number(word, words.next())?),
            "volume" => Command::Volume(number(word, words.next())?),
            "mute" => Command::Mute,
            "speed" => Command::Speed(number(word, words.next())?),
            "fullscreen" => Command::Fullscreen,
            "show" => Command::Show,
            other => return Err(format!("unknown command '{}'", other)),
        };

        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument '{}'", extra));
        }
        Ok(command)
    }
}
