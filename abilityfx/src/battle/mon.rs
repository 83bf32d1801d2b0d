use std::fmt::{
    self,
    Display,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        BoostTable,
        Status,
        Type,
    },
    common::{
        FastHashSet,
        Id,
    },
};

/// A handle to a creature in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonHandle(usize);

impl MonHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

impl Display for MonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The slot an ability is applied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilitySlot {
    /// The creature's active ability.
    Active,
    /// The creature's secondary, always-present ability.
    Passive,
    /// An ability granted by some external effect, by grant order.
    Granted(usize),
}

impl AbilitySlot {
    pub fn is_passive(&self) -> bool {
        matches!(self, Self::Passive)
    }
}

/// An ability that may be applied for a creature, along with the slot it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySource {
    pub slot: AbilitySlot,
    pub ability: Id,
}

/// Per-creature record of abilities that produced an effect.
///
/// Insertion is idempotent and order-preserving.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AbilityLedger {
    this_turn: Vec<Id>,
    this_encounter: Vec<Id>,
}

impl AbilityLedger {
    /// Records that an ability was applied.
    pub fn record(&mut self, ability: &Id) {
        if !self.this_turn.contains(ability) {
            self.this_turn.push(ability.clone());
        }
        if !self.this_encounter.contains(ability) {
            self.this_encounter.push(ability.clone());
        }
    }

    /// Abilities applied this turn, in first-application order.
    pub fn this_turn(&self) -> &[Id] {
        &self.this_turn
    }

    /// Abilities applied this encounter, in first-application order.
    pub fn this_encounter(&self) -> &[Id] {
        &self.this_encounter
    }

    pub fn applied_this_turn(&self, ability: &Id) -> bool {
        self.this_turn.contains(ability)
    }

    pub fn applied_this_encounter(&self, ability: &Id) -> bool {
        self.this_encounter.contains(ability)
    }

    pub(crate) fn clear_turn(&mut self) {
        self.this_turn.clear();
    }

    pub(crate) fn clear_encounter(&mut self) {
        self.this_turn.clear();
        self.this_encounter.clear();
    }
}

fn default_hp() -> u32 {
    100
}

fn default_active() -> bool {
    true
}

/// Data for a single creature, used to construct a [`Mon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonData {
    pub name: String,
    #[serde(default)]
    pub side: usize,
    #[serde(default)]
    pub types: Vec<Type>,
    #[serde(default = "default_hp")]
    pub hp: u32,
    pub ability: String,
    #[serde(default)]
    pub passive_ability: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Default for MonData {
    fn default() -> Self {
        Self {
            name: String::new(),
            side: 0,
            types: Vec::new(),
            hp: default_hp(),
            ability: String::new(),
            passive_ability: None,
            item: None,
            status: None,
            active: default_active(),
        }
    }
}

/// A creature in battle, as seen by abilities.
#[derive(Debug, Clone)]
pub struct Mon {
    pub name: String,
    pub side: usize,
    /// Whether the creature is currently on the field.
    pub active: bool,
    pub hp: u32,
    pub max_hp: u32,
    pub types: Vec<Type>,
    pub status: Option<Status>,
    pub boosts: BoostTable,
    pub item: Option<Id>,
    pub tags: FastHashSet<Id>,

    pub ability: Id,
    pub passive_ability: Option<Id>,
    pub granted_abilities: Vec<Id>,
    /// Abilities of this creature are suppressed by some effect.
    pub ability_suppressed: bool,

    pub ledger: AbilityLedger,
}

impl Mon {
    pub fn new(data: MonData) -> Self {
        Self {
            name: data.name,
            side: data.side,
            active: data.active,
            hp: data.hp,
            max_hp: data.hp,
            types: data.types,
            status: data.status,
            boosts: BoostTable::default(),
            item: data.item.map(Id::from),
            tags: FastHashSet::default(),
            ability: Id::from(data.ability),
            passive_ability: data.passive_ability.map(Id::from),
            granted_abilities: Vec::new(),
            ability_suppressed: false,
            ledger: AbilityLedger::default(),
        }
    }

    /// Label for identifying the creature in battle logs.
    pub fn log_label(&self) -> String {
        format!("{},{}", self.name, self.side)
    }

    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn full_hp(&self) -> bool {
        self.hp == self.max_hp
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    pub fn has_tag(&self, tag: &Id) -> bool {
        self.tags.contains(tag)
    }

    /// Grants an additional ability, applied after the active and passive abilities.
    pub fn grant_ability<I>(&mut self, ability: I)
    where
        I: Into<Id>,
    {
        self.granted_abilities.push(ability.into());
    }

    /// All ability sources of the creature, in dispatch order.
    ///
    /// Empty slots are omitted.
    pub fn ability_sources(&self) -> Vec<AbilitySource> {
        let mut sources = Vec::with_capacity(2 + self.granted_abilities.len());
        if !self.ability.is_empty() {
            sources.push(AbilitySource {
                slot: AbilitySlot::Active,
                ability: self.ability.clone(),
            });
        }
        if let Some(passive) = self.passive_ability.as_ref().filter(|id| !id.is_empty()) {
            sources.push(AbilitySource {
                slot: AbilitySlot::Passive,
                ability: passive.clone(),
            });
        }
        sources.extend(
            self.granted_abilities
                .iter()
                .enumerate()
                .map(|(i, ability)| AbilitySource {
                    slot: AbilitySlot::Granted(i),
                    ability: ability.clone(),
                }),
        );
        sources
    }
}
