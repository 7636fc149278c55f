//! Talking to NPCs.

use super::SimEngine;
use crate::config::SimConfig;
use crate::rng::SimRng;
use crate::state::{Actor, EntityId, NpcRole};

/// What the dialog or shop layer should open after the player talks to an NPC.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    OpenShop,
    StartDialog(String),
    /// In range, but the NPC has nothing to offer.
    Ignored,
    OutOfRange,
}

impl Actor {
    /// Returns true if this is a live NPC within its interaction range of `player`.
    ///
    /// An NPC whose range was never set uses
    /// [`SimConfig::DEFAULT_INTERACTION_RANGE`].
    pub fn can_interact(&self, player: &Actor) -> bool {
        let Some(npc) = self.as_npc() else {
            return false;
        };
        let range = npc
            .interaction_range
            .unwrap_or(SimConfig::DEFAULT_INTERACTION_RANGE);
        self.is_alive() && player.is_alive() && self.distance_to(player) <= range
    }
}

impl<R: SimRng> SimEngine<R> {
    /// The player talks to `npc`.
    ///
    /// Merchants open their shop; anyone else with a dialog starts it.
    /// Returns `None` if there is no live player or `npc` is not an NPC.
    pub fn interact(&self, npc: EntityId) -> Option<Interaction> {
        let player = self.entities.player()?;
        let actor = self.entities.get(npc)?;
        let data = actor.as_npc()?;
        if !actor.can_interact(player) {
            return Some(Interaction::OutOfRange);
        }

        let interaction = match (&data.role, &data.dialog_id) {
            (NpcRole::Merchant, _) => Interaction::OpenShop,
            (_, Some(dialog)) => Interaction::StartDialog(dialog.clone()),
            (_, None) => Interaction::Ignored,
        };
        tracing::debug!(npc = %npc, ?interaction, "interaction");
        Some(interaction)
    }

    /// Talks to the first NPC, in spawn order, that is close enough.
    pub fn interact_nearby(&self) -> Option<(EntityId, Interaction)> {
        let player = self.entities.player()?;
        let npc = self
            .entities
            .iter()
            .find(|actor| actor.can_interact(player))?
            .id();
        self.interact(npc).map(|interaction| (npc, interaction))
    }
}
