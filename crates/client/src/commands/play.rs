//! Interactive play loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use barter_content::MarketContent;
use barter_core::NpcId;
use barter_runtime::{GameSession, SessionError};
use clap::Parser;
use console::style;

use crate::render;
use crate::repl::{self, NpcRef, ReplCommand};

/// Play interactively
#[derive(Parser)]
pub struct Play {}

impl Play {
    pub fn execute(self, content: MarketContent) -> Result<()> {
        let mut session = GameSession::new(content)?;
        let limit = session.config().daily_trade_limit;

        println!("{}", render::look(session.state(), limit));
        println!("{}", style("输入 help 查看命令。").dim());

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut line = String::new();
        loop {
            print!("> ");
            stdout.flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let command = match repl::parse(&line) {
                Ok(command) => command,
                Err(repl::ParseError::Empty) => continue,
                Err(error) => {
                    println!("{}", style(error).red());
                    continue;
                }
            };
            if command == ReplCommand::Quit {
                break;
            }

            match run(&mut session, command) {
                Ok(output) => println!("{output}"),
                Err(error) => println!("{}", style(error).red()),
            }
        }

        tracing::debug!(day = %session.state().day, "Player left the market");
        Ok(())
    }
}

/// Applies one command and returns the text to show.
fn run(session: &mut GameSession, command: ReplCommand) -> Result<String, SessionError> {
    let limit = session.config().daily_trade_limit;
    let output = match command {
        ReplCommand::Help => repl::HELP.to_owned(),
        ReplCommand::Look => render::look(session.state(), limit),
        ReplCommand::Npcs => render::roster(session.state()),
        ReplCommand::Talk(target) => {
            let npc = resolve_npc(session, target);
            match session.select_npc(Some(npc))? {
                Some(npc) => render::npc(npc),
                None => String::new(),
            }
        }
        ReplCommand::Leave => {
            session.select_npc(None)?;
            "你离开了摊位。".to_owned()
        }
        ReplCommand::Hint => match session.state().current_npc.clone() {
            Some(npc) => format!("“{}”", session.hint(&npc)?),
            None => "先找个人说话吧（talk <npc>）。".to_owned(),
        },
        ReplCommand::Trade {
            npc_slot,
            player_slot,
        } => {
            let Some(npc) = session.current_npc() else {
                return Ok("先找个人说话吧（talk <npc>）。".to_owned());
            };
            let (Some(npc_item), Some(player_item)) = (
                npc.inventory.slot(npc_slot - 1).map(|item| item.instance),
                session
                    .state()
                    .player
                    .slot(player_slot - 1)
                    .map(|item| item.instance),
            ) else {
                return Ok("没有这个位置的物品，用 look 查看编号。".to_owned());
            };
            let outcome = session.propose_trade(npc_item, player_item)?;
            let mut text = outcome.message().to_owned();
            if session.state().is_won() {
                text.push('\n');
                text.push_str(&render::status(session.state(), limit));
            }
            text
        }
        ReplCommand::End => {
            let report = session.end_day()?;
            let mut text = session.state().message.clone();
            for item in &report.spoiled {
                text.push_str(&format!("\n{} 已经坏掉了。", item.name()));
            }
            text
        }
        ReplCommand::Reset => {
            session.reset()?;
            render::look(session.state(), limit)
        }
        ReplCommand::History => render::history(&session.state().history),
        ReplCommand::Json => session.snapshot_json()?,
        ReplCommand::Quit => String::new(),
    };
    Ok(output)
}

fn resolve_npc(session: &GameSession, target: NpcRef) -> NpcId {
    match target {
        NpcRef::Id(id) => NpcId::new(id),
        NpcRef::Position(position) => session
            .state()
            .npcs
            .get(position.wrapping_sub(1))
            .map(|npc| npc.id().clone())
            .unwrap_or_else(|| NpcId::new(position.to_string())),
    }
}
