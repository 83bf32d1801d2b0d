use std::sync::Mutex;

use abilityfx::{
    battle::{
        AbilityObserver,
        Mon,
    },
    common::Id,
};

/// An [`AbilityObserver`] that records every notification, as `(creature name, ability)`.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    applied: Mutex<Vec<(String, Id)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far, in order.
    pub fn applied(&self) -> Vec<(String, Id)> {
        match self.applied.lock() {
            Ok(applied) => applied.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AbilityObserver for RecordingObserver {
    fn ability_applied(&self, mon: &Mon, ability: &Id) {
        let entry = (mon.name.clone(), ability.clone());
        match self.applied.lock() {
            Ok(mut applied) => applied.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}
