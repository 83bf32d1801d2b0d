use crate::{
    abilities::{
        AbilityDefinition,
        AbilityFlags,
        AttrEntry,
    },
    common::{
        FastHashSet,
        Id,
    },
    effect::{
        AbilityAttr,
        Condition,
    },
};

/// Fluent builder for an [`AbilityDefinition`].
///
/// Effects are kept in the order they are declared, which is the order the dispatcher visits them.
pub struct AbilityBuilder {
    id: Id,
    name: String,
    description: String,
    generation: u8,
    flags: FastHashSet<AbilityFlags>,
    entries: Vec<AttrEntry>,
    conditions: Vec<Condition>,
}

impl AbilityBuilder {
    /// Starts a new ability. The ID is derived from the name.
    pub fn new<S>(name: S, generation: u8) -> Self
    where
        S: Into<String>,
    {
        let name = name.into();
        Self {
            id: Id::from(name.as_str()),
            name,
            description: String::new(),
            generation,
            flags: FastHashSet::default(),
            entries: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Overrides the derived ID.
    pub fn id<I>(mut self, id: I) -> Self
    where
        I: Into<Id>,
    {
        self.id = id.into();
        self
    }

    pub fn description<S>(mut self, description: S) -> Self
    where
        S: Into<String>,
    {
        self.description = description.into();
        self
    }

    /// Appends an effect that presents the ability when it applies.
    pub fn attr<A>(mut self, attr: A) -> Self
    where
        A: Into<AbilityAttr>,
    {
        self.entries.push(AttrEntry::new(attr.into(), true, Vec::new()));
        self
    }

    /// Appends an effect that applies without presenting the ability.
    pub fn silent_attr<A>(mut self, attr: A) -> Self
    where
        A: Into<AbilityAttr>,
    {
        self.entries
            .push(AttrEntry::new(attr.into(), false, Vec::new()));
        self
    }

    /// Appends an effect gated by a condition of its own.
    pub fn conditional_attr<A>(mut self, condition: Condition, attr: A) -> Self
    where
        A: Into<AbilityAttr>,
    {
        self.entries
            .push(AttrEntry::new(attr.into(), true, Vec::from([condition])));
        self
    }

    /// Appends a condition that gates every effect of the ability.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    fn flag(mut self, flag: AbilityFlags) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn bypass_faint(self) -> Self {
        self.flag(AbilityFlags::BypassFaint)
    }

    pub fn ignorable(self) -> Self {
        self.flag(AbilityFlags::Ignorable)
    }

    pub fn unsuppressable(self) -> Self {
        self.flag(AbilityFlags::Unsuppressable)
    }

    pub fn suppresses_field_abilities(self) -> Self {
        self.flag(AbilityFlags::SuppressesFieldAbilities)
    }

    /// Marks the ability as partially implemented. Has no effect on dispatch.
    pub fn partial(self) -> Self {
        self.flag(AbilityFlags::Partial)
    }

    /// Marks the ability as unimplemented. Has no effect on dispatch.
    pub fn unimplemented(self) -> Self {
        self.flag(AbilityFlags::Unimplemented)
    }

    pub fn build(self) -> AbilityDefinition {
        let mut entries = self.entries;
        for entry in &mut entries {
            entry.seal(&self.conditions);
        }
        AbilityDefinition {
            id: self.id,
            name: self.name,
            description: self.description,
            generation: self.generation,
            flags: self.flags,
            entries,
            conditions: self.conditions,
        }
    }
}
