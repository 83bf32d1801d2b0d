use std::{
    fmt,
    sync::Arc,
};

use crate::{
    battle::{
        Field,
        Mon,
        Weather,
    },
    common::Fraction,
};

/// A pure gate over a creature and the field, checked before an effect is applied.
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&Mon, &Field) -> bool + Send + Sync>);

impl Condition {
    pub fn new<F>(condition: F) -> Self
    where
        F: Fn(&Mon, &Field) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(condition))
    }

    pub fn check(&self, mon: &Mon, field: &Field) -> bool {
        (self.0)(mon, field)
    }

    /// The field has the given weather.
    pub fn weather(weather: Weather) -> Self {
        Self::new(move |_, field| field.has_weather(weather))
    }

    /// The creature's HP is at or below the given fraction of its maximum.
    pub fn hp_at_most(fraction: Fraction) -> Self {
        Self::new(move |mon, _| {
            Fraction::from_integer(mon.hp) <= Fraction::from_integer(mon.max_hp) * fraction
        })
    }

    /// The creature has a status.
    pub fn has_status() -> Self {
        Self::new(|mon, _| mon.status.is_some())
    }

    /// It is not the first turn of the battle.
    pub fn after_first_turn() -> Self {
        Self::new(|_, field| field.turn > 0)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition")
    }
}

/// Checks every condition in order, stopping at the first that fails.
pub fn all_conditions_met(conditions: &[Condition], mon: &Mon, field: &Field) -> bool {
    conditions.iter().all(|condition| condition.check(mon, field))
}
