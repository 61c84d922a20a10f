use crate::env::NpcId;
use crate::state::{Day, GameState, GameStatus, History, InstanceId, Inventory};

/// Wraps mutable access to [`GameState`] with the mutations actions need.
pub struct StateReducer<'a> {
    state: &'a mut GameState,
}

impl<'a> StateReducer<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn select(&mut self, npc: Option<NpcId>) {
        self.state.current_npc = npc;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.state.message = message.into();
    }

    /// Sets the message box and records a history line.
    pub fn narrate(&mut self, message: impl Into<String>, history: impl Into<String>) {
        self.state.message = message.into();
        self.state.history.push(history);
    }

    /// Swaps two instances between the player and an NPC.
    ///
    /// Each side receives the other's item at the end of its inventory.
    /// Returns `false` without touching anything if either instance is not
    /// where it is expected.
    pub fn exchange(
        &mut self,
        npc_id: &NpcId,
        player_gives: InstanceId,
        npc_gives: InstanceId,
    ) -> bool {
        let Some(npc) = self.state.npcs.iter_mut().find(|npc| npc.id() == npc_id) else {
            return false;
        };
        if !self.state.player.contains(player_gives) || !npc.inventory.contains(npc_gives) {
            return false;
        }

        let (Some(from_player), Some(from_npc)) = (
            self.state.player.take(player_gives),
            npc.inventory.take(npc_gives),
        ) else {
            return false;
        };
        npc.inventory.push(from_player);
        self.state.player.push(from_npc);
        true
    }

    pub fn count_trade(&mut self) {
        self.state.trades_today = self.state.trades_today.saturating_add(1);
    }

    pub fn mark_won(&mut self) {
        self.state.status = GameStatus::Won;
    }

    /// Moves to `day` with a decayed player inventory and a fresh quota.
    pub fn start_day(&mut self, day: Day, player: Inventory) {
        self.state.day = day;
        self.state.player = player;
        self.state.trades_today = 0;
    }

    /// Replaces the whole session, e.g. after a reset.
    pub fn replace(&mut self, state: GameState, history: History) {
        *self.state = state;
        self.state.history = history;
    }
}
