//! Parsing of interactive commands.
//!
//! Slots are 1-based positions as printed by `look`; NPCs may be named by id
//! (`npc2`) or by their 1-based place in the roster.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Look,
    Npcs,
    Talk(NpcRef),
    Leave,
    Hint,
    Trade { npc_slot: usize, player_slot: usize },
    End,
    Reset,
    History,
    Json,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NpcRef {
    Id(String),
    Position(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    BadSlot(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("type a command, or `help`"),
            ParseError::Unknown(word) => write!(f, "unknown command `{word}`, try `help`"),
            ParseError::MissingArgument(usage) => write!(f, "usage: {usage}"),
            ParseError::BadSlot(value) => write!(f, "`{value}` is not a slot number (1, 2, ...)"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
look                       show day, quota, your goods and the current NPC
npcs                       list everyone at the market
talk <npc>                 walk up to an NPC (id like npc2, or its number)
leave                      walk away
hint                       ask the current NPC for a clue
trade <their> <yours>      offer your item in slot <yours> for their slot <their>
end                        end the day (perishables decay, quota resets)
reset                      start over
history                    show the event log
json                       dump the full state as JSON
quit                       leave the market";

pub fn parse(line: &str) -> Result<ReplCommand, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "help" | "?" => ReplCommand::Help,
        "look" | "l" => ReplCommand::Look,
        "npcs" => ReplCommand::Npcs,
        "talk" | "t" => {
            let target = words
                .next()
                .ok_or(ParseError::MissingArgument("talk <npc>"))?;
            ReplCommand::Talk(parse_npc(target))
        }
        "leave" => ReplCommand::Leave,
        "hint" => ReplCommand::Hint,
        "trade" => {
            const USAGE: &str = "trade <their-slot> <your-slot>";
            let npc_slot = parse_slot(words.next().ok_or(ParseError::MissingArgument(USAGE))?)?;
            let player_slot =
                parse_slot(words.next().ok_or(ParseError::MissingArgument(USAGE))?)?;
            ReplCommand::Trade {
                npc_slot,
                player_slot,
            }
        }
        "end" => ReplCommand::End,
        "reset" => ReplCommand::Reset,
        "history" | "log" => ReplCommand::History,
        "json" => ReplCommand::Json,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_owned())),
    };
    Ok(command)
}

fn parse_npc(word: &str) -> NpcRef {
    match word.parse::<usize>() {
        Ok(position) => NpcRef::Position(position),
        Err(_) => NpcRef::Id(word.to_owned()),
    }
}

fn parse_slot(word: &str) -> Result<usize, ParseError> {
    match word.parse::<usize>() {
        Ok(slot) if slot > 0 => Ok(slot),
        _ => Err(ParseError::BadSlot(word.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trade_slots() {
        assert_eq!(
            parse("trade 1 2"),
            Ok(ReplCommand::Trade {
                npc_slot: 1,
                player_slot: 2
            })
        );
        assert_eq!(parse("trade 0 1"), Err(ParseError::BadSlot("0".into())));
        assert_eq!(
            parse("trade 1"),
            Err(ParseError::MissingArgument("trade <their-slot> <your-slot>"))
        );
    }

    #[test]
    fn talk_accepts_ids_and_positions() {
        assert_eq!(
            parse("talk npc3"),
            Ok(ReplCommand::Talk(NpcRef::Id("npc3".into())))
        );
        assert_eq!(parse("t 2"), Ok(ReplCommand::Talk(NpcRef::Position(2))));
    }

    #[test]
    fn blank_and_unknown_input() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("dance"), Err(ParseError::Unknown("dance".into())));
        assert_eq!(parse("  END "), Ok(ReplCommand::End));
    }
}
