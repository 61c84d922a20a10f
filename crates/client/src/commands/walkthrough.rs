//! Scripted replay of the hint chain.

use anyhow::{Context, Result, bail};
use barter_content::MarketContent;
use barter_core::{ItemId, NpcId};
use barter_runtime::GameSession;
use clap::Parser;
use console::style;

use crate::render;

/// Each NPC's hint points at the next link: wood → fish → shell → salt → skin → axe.
const CHAIN: [(&str, &str, &str); 5] = [
    ("npc1", "fish", "wood"),
    ("npc5", "shell", "fish"),
    ("npc4", "salt", "shell"),
    ("npc2", "skin", "salt"),
    ("npc3", "axe", "skin"),
];

/// Replay the hint chain from grain and wood to the axe
#[derive(Parser)]
pub struct Walkthrough {
    /// Print the full state after every step
    #[arg(short, long)]
    verbose: bool,
}

impl Walkthrough {
    pub fn execute(self, content: MarketContent) -> Result<()> {
        let mut session = GameSession::new(content)?;
        let limit = session.config().daily_trade_limit;

        for (npc, wanted, offered) in CHAIN {
            if session.trades_remaining() == 0 {
                session.end_day()?;
                println!("{}", style(&session.state().message).dim());
            }

            let npc_id = NpcId::from(npc);
            session.select_npc(Some(npc_id.clone()))?;
            let npc_item = session
                .npc(&npc_id)
                .and_then(|state| state.inventory.first_of(&ItemId::from(wanted)))
                .map(|item| item.instance)
                .with_context(|| format!("{npc} has no {wanted} to trade"))?;
            let player_item = session
                .state()
                .player
                .first_of(&ItemId::from(offered))
                .map(|item| item.instance)
                .with_context(|| format!("player has no {offered} to offer"))?;

            let outcome = session.propose_trade(npc_item, player_item)?;
            println!("{}", outcome.message());
            if !outcome.is_accepted() {
                bail!("{npc} turned down {offered}; the market data does not follow the chain");
            }
            if self.verbose {
                println!("{}", render::look(session.state(), limit));
            }
        }

        println!("{}", render::status(session.state(), limit));
        if !session.state().is_won() {
            bail!("chain finished without reaching the goal item");
        }
        Ok(())
    }
}
