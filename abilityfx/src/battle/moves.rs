use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::Type,
    common::{
        FastHashSet,
        Id,
    },
};

/// The category of a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "Physical"]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}

/// A flag describing some property of a move that abilities may react to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveFlag {
    #[string = "Contact"]
    Contact,
    #[string = "Sound"]
    Sound,
    #[string = "Punch"]
    Punch,
    #[string = "Bite"]
    Bite,
    #[string = "Bullet"]
    Bullet,
    #[string = "Powder"]
    Powder,
}

/// A move used in battle, as seen by abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: u32,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub flags: FastHashSet<MoveFlag>,
}

impl Move {
    /// Creates a new move with no flags and default priority.
    pub fn new<S>(name: S, move_type: Type, category: MoveCategory, base_power: u32) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            move_type,
            category,
            base_power,
            priority: 0,
            flags: FastHashSet::default(),
        }
    }

    /// Adds a flag to the move.
    pub fn with_flag(mut self, flag: MoveFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// The move's ID.
    pub fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }

    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Checks if the move makes contact with its target.
    pub fn makes_contact(&self) -> bool {
        self.has_flag(MoveFlag::Contact)
    }

    /// Checks if the move deals damage directly.
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }
}
