use crate::{
    abilities::AbilityFlags,
    battle::{
        Field,
        Mon,
    },
    common::{
        FastHashSet,
        Id,
        Identifiable,
    },
    effect::{
        AbilityAttr,
        Condition,
        Hook,
        HookKind,
        all_conditions_met,
    },
};

/// A single effect of an ability, along with what gates it.
#[derive(Debug, Clone)]
pub struct AttrEntry {
    attr: AbilityAttr,
    show_ability: bool,
    conditions: Vec<Condition>,
    /// Ability-level conditions followed by `conditions`.
    gates: Vec<Condition>,
}

impl AttrEntry {
    pub(crate) fn new(attr: AbilityAttr, show_ability: bool, conditions: Vec<Condition>) -> Self {
        Self {
            attr,
            show_ability,
            conditions,
            gates: Vec::new(),
        }
    }

    pub(crate) fn seal(&mut self, ability_conditions: &[Condition]) {
        self.gates = ability_conditions
            .iter()
            .chain(self.conditions.iter())
            .cloned()
            .collect();
    }

    pub fn attr(&self) -> &AbilityAttr {
        &self.attr
    }

    pub fn hook_kind(&self) -> HookKind {
        self.attr.hook_kind()
    }

    /// Should the ability be presented when this effect applies?
    pub fn show_ability(&self) -> bool {
        self.show_ability
    }

    /// Conditions specific to this effect.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Checks the ability's conditions and this effect's conditions, in that order.
    pub fn conditions_met(&self, mon: &Mon, field: &Field) -> bool {
        all_conditions_met(&self.gates, mon, field)
    }
}

/// An ability: a named creature trait composed of effects and the conditions gating them.
///
/// Definitions are immutable once built. Use [`AbilityBuilder`][`crate::abilities::AbilityBuilder`]
/// to create one.
#[derive(Debug)]
pub struct AbilityDefinition {
    pub(crate) id: Id,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) generation: u8,
    pub(crate) flags: FastHashSet<AbilityFlags>,
    pub(crate) entries: Vec<AttrEntry>,
    pub(crate) conditions: Vec<Condition>,
}

impl AbilityDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The generation the ability was introduced in.
    pub fn generation(&self) -> u8 {
        self.generation
    }

    pub fn has_flag(&self, flag: AbilityFlags) -> bool {
        self.flags.contains(&flag)
    }

    pub fn bypass_faint(&self) -> bool {
        self.has_flag(AbilityFlags::BypassFaint)
    }

    pub fn ignorable(&self) -> bool {
        self.has_flag(AbilityFlags::Ignorable)
    }

    pub fn unsuppressable(&self) -> bool {
        self.has_flag(AbilityFlags::Unsuppressable)
    }

    pub fn suppresses_field_abilities(&self) -> bool {
        self.has_flag(AbilityFlags::SuppressesFieldAbilities)
    }

    pub fn is_partial(&self) -> bool {
        self.has_flag(AbilityFlags::Partial)
    }

    pub fn is_unimplemented(&self) -> bool {
        self.has_flag(AbilityFlags::Unimplemented)
    }

    /// All effects, in declaration order.
    pub fn entries(&self) -> &[AttrEntry] {
        &self.entries
    }

    /// Ability-level conditions.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Checks if the ability has any effect for the hook kind.
    pub fn has_hook(&self, kind: HookKind) -> bool {
        self.entries.iter().any(|entry| entry.hook_kind() == kind)
    }

    /// Effects of one hook kind, in declaration order.
    pub fn attrs<H>(&self) -> impl Iterator<Item = &H>
    where
        H: Hook,
    {
        self.entries.iter().filter_map(|entry| H::select(entry.attr()))
    }
}

impl Identifiable for AbilityDefinition {
    fn id(&self) -> &Id {
        &self.id
    }
}
