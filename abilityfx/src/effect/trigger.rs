use std::{
    fmt,
    sync::Arc,
};

use abilityfx_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        Field,
        Mon,
        Move,
    },
    common::{
        FastHashMap,
        Fraction,
        Id,
    },
};

/// Describes when an effect takes hold.
///
/// Content declares "always", "N% of the time", or "only if X" through the same shape, and every
/// form is resolved by [`resolve_trigger`].
pub enum Trigger<P> {
    Always(bool),
    /// Percent chance, drawn from the battle's random number generator. Values of 100 or more
    /// always take hold.
    Chance(u8),
    Predicate(P),
}

impl<P> Trigger<P> {
    pub fn always() -> Self {
        Self::Always(true)
    }

    pub fn never() -> Self {
        Self::Always(false)
    }

    pub fn chance(percent: u8) -> Self {
        Self::Chance(percent)
    }
}

impl<P> Clone for Trigger<P>
where
    P: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Always(value) => Self::Always(*value),
            Self::Chance(percent) => Self::Chance(*percent),
            Self::Predicate(predicate) => Self::Predicate(predicate.clone()),
        }
    }
}

impl<P> fmt::Debug for Trigger<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always(value) => f.debug_tuple("Always").field(value).finish(),
            Self::Chance(percent) => f.debug_tuple("Chance").field(percent).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Predicate over the user of a move, its target, and the move.
pub type AttackPredicate = Arc<dyn Fn(&Mon, Option<&Mon>, &Move) -> bool + Send + Sync>;
/// Predicate over a defender, its attacker, the move, and the move's type effectiveness.
pub type DefendPredicate = Arc<dyn Fn(&Mon, &Mon, &Move, Fraction) -> bool + Send + Sync>;
/// Predicate over a creature and an opponent it acted upon.
pub type OpponentPredicate = Arc<dyn Fn(&Mon, &Mon) -> bool + Send + Sync>;
/// Predicate over a fainted creature and what made it faint, if known.
pub type FaintPredicate = Arc<dyn Fn(&Mon, Option<&Mon>, Option<&Move>) -> bool + Send + Sync>;
/// Predicate over a creature and the field.
pub type FieldPredicate = Arc<dyn Fn(&Mon, &Field) -> bool + Send + Sync>;
/// Predicate over a victorious creature.
pub type VictoryPredicate = Arc<dyn Fn(&Mon) -> bool + Send + Sync>;

pub type AttackTrigger = Trigger<AttackPredicate>;
pub type DefendTrigger = Trigger<DefendPredicate>;
pub type KnockOutTrigger = Trigger<OpponentPredicate>;
pub type FaintTrigger = Trigger<FaintPredicate>;
pub type FieldTrigger = Trigger<FieldPredicate>;
pub type VictoryTrigger = Trigger<VictoryPredicate>;

impl Trigger<AttackPredicate> {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Mon, Option<&Mon>, &Move) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }
}

impl Trigger<DefendPredicate> {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Mon, &Mon, &Move, Fraction) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }
}

impl Trigger<OpponentPredicate> {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Mon, &Mon) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }
}

impl Trigger<FaintPredicate> {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Mon, Option<&Mon>, Option<&Move>) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }
}

impl Trigger<FieldPredicate> {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Mon, &Field) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }
}

impl Trigger<VictoryPredicate> {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Mon) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }
}

/// Resolves a trigger into whether the effect takes hold.
///
/// [`Trigger::Always`] never draws from the random number generator. [`Trigger::Chance`] draws
/// only when the outcome is uncertain.
pub fn resolve_trigger<P, F>(
    trigger: &Trigger<P>,
    prng: &mut dyn PseudoRandomNumberGenerator,
    predicate: F,
) -> bool
where
    F: FnOnce(&P) -> bool,
{
    match trigger {
        Trigger::Always(value) => *value,
        Trigger::Chance(percent) => rand_util::percent_chance(prng, *percent as u64),
        Trigger::Predicate(p) => predicate(p),
    }
}

pub fn evaluate_attack_trigger(
    trigger: &AttackTrigger,
    prng: &mut dyn PseudoRandomNumberGenerator,
    user: &Mon,
    target: Option<&Mon>,
    mv: &Move,
) -> bool {
    resolve_trigger(trigger, prng, |predicate| predicate(user, target, mv))
}

pub fn evaluate_defend_trigger(
    trigger: &DefendTrigger,
    prng: &mut dyn PseudoRandomNumberGenerator,
    defender: &Mon,
    attacker: &Mon,
    mv: &Move,
    effectiveness: Fraction,
) -> bool {
    resolve_trigger(trigger, prng, |predicate| {
        predicate(defender, attacker, mv, effectiveness)
    })
}

pub fn evaluate_knockout_trigger(
    trigger: &KnockOutTrigger,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: &Mon,
    opponent: &Mon,
) -> bool {
    resolve_trigger(trigger, prng, |predicate| predicate(mon, opponent))
}

pub fn evaluate_faint_trigger(
    trigger: &FaintTrigger,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: &Mon,
    attacker: Option<&Mon>,
    mv: Option<&Move>,
) -> bool {
    resolve_trigger(trigger, prng, |predicate| predicate(mon, attacker, mv))
}

pub fn evaluate_field_trigger(
    trigger: &FieldTrigger,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: &Mon,
    field: &Field,
) -> bool {
    resolve_trigger(trigger, prng, |predicate| predicate(mon, field))
}

pub fn evaluate_victory_trigger(
    trigger: &VictoryTrigger,
    prng: &mut dyn PseudoRandomNumberGenerator,
    mon: &Mon,
) -> bool {
    resolve_trigger(trigger, prng, |predicate| predicate(mon))
}

/// Serialized form of a [`Trigger`], as found in ability content data.
///
/// A boolean is [`Trigger::Always`], an integer is [`Trigger::Chance`], and a string names a
/// predicate in a [`PredicateLibrary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TriggerData {
    Always(bool),
    Chance(u64),
    Predicate(String),
    Unrecognized(serde_json::Value),
}

/// Named predicates that [`TriggerData`] may refer to.
pub struct PredicateLibrary<P> {
    predicates: FastHashMap<Id, P>,
}

impl<P> Default for PredicateLibrary<P> {
    fn default() -> Self {
        Self {
            predicates: FastHashMap::default(),
        }
    }
}

impl<P> PredicateLibrary<P>
where
    P: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a predicate under a name.
    pub fn register<N>(&mut self, name: N, predicate: P) -> &mut Self
    where
        N: Into<Id>,
    {
        self.predicates.insert(name.into(), predicate);
        self
    }

    /// Converts trigger data into a trigger.
    ///
    /// Data that cannot be understood never triggers.
    pub fn resolve(&self, data: &TriggerData) -> Trigger<P> {
        match data {
            TriggerData::Always(value) => Trigger::Always(*value),
            TriggerData::Chance(percent) => match u8::try_from(*percent) {
                Ok(percent) if percent <= 100 => Trigger::Chance(percent),
                _ => {
                    log::warn!("trigger chance {percent} is out of range, treating as never");
                    Trigger::never()
                }
            },
            TriggerData::Predicate(name) => match self.predicates.get(&Id::from(name.as_str())) {
                Some(predicate) => Trigger::Predicate(predicate.clone()),
                None => {
                    log::warn!("unknown trigger predicate \"{name}\", treating as never");
                    Trigger::never()
                }
            },
            TriggerData::Unrecognized(value) => {
                log::warn!("unrecognized trigger data {value}, treating as never");
                Trigger::never()
            }
        }
    }
}
