use std::collections::VecDeque;

use crate::{
    battle::{
        MonHandle,
        StageChange,
        Status,
        Terrain,
        Weather,
    },
    common::Id,
};

/// An action handed to the host's turn resolution by an ability effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleAction {
    SetStatus {
        target: MonHandle,
        status: Status,
        source: Option<MonHandle>,
    },
    CureStatus {
        target: MonHandle,
    },
    ChangeStatStages {
        target: MonHandle,
        changes: Vec<StageChange>,
        source: Option<MonHandle>,
    },
    Damage {
        target: MonHandle,
        amount: u32,
        source: Option<MonHandle>,
    },
    Heal {
        target: MonHandle,
        amount: u32,
    },
    SetWeather {
        weather: Weather,
        turns: Option<u8>,
    },
    SetTerrain {
        terrain: Terrain,
        turns: Option<u8>,
    },
    TransferItem {
        from: MonHandle,
        to: MonHandle,
    },
    AddTag {
        target: MonHandle,
        tag: Id,
    },
}

/// Queue of actions waiting to be resolved by the host.
#[derive(Debug, Default, Clone)]
pub struct ActionQueue {
    actions: VecDeque<BattleAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action to the end of the queue.
    pub fn push(&mut self, action: BattleAction) {
        self.actions.push_back(action);
    }

    /// Inserts an action to be resolved before everything else in the queue.
    pub fn insert_next(&mut self, action: BattleAction) {
        self.actions.push_front(action);
    }

    pub fn pop_front(&mut self) -> Option<BattleAction> {
        self.actions.pop_front()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleAction> {
        self.actions.iter()
    }
}
