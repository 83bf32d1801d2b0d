use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A battle stat that can be modified by stages or multipliers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum BattleStat {
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
    #[string = "eva"]
    #[alias = "Evasion"]
    Evasion,
}

/// A stage change for a single stat.
pub type StageChange = (BattleStat, i8);

/// A table of stat stages for a creature.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl BoostTable {
    /// Stages are clamped to `[-MAX_STAGE, MAX_STAGE]`.
    pub const MAX_STAGE: i8 = 6;

    /// Returns the stage for the given stat.
    pub fn get(&self, stat: BattleStat) -> i8 {
        match stat {
            BattleStat::Atk => self.atk,
            BattleStat::Def => self.def,
            BattleStat::SpAtk => self.spa,
            BattleStat::SpDef => self.spd,
            BattleStat::Spe => self.spe,
            BattleStat::Accuracy => self.acc,
            BattleStat::Evasion => self.eva,
        }
    }

    fn get_mut(&mut self, stat: BattleStat) -> &mut i8 {
        match stat {
            BattleStat::Atk => &mut self.atk,
            BattleStat::Def => &mut self.def,
            BattleStat::SpAtk => &mut self.spa,
            BattleStat::SpDef => &mut self.spd,
            BattleStat::Spe => &mut self.spe,
            BattleStat::Accuracy => &mut self.acc,
            BattleStat::Evasion => &mut self.eva,
        }
    }

    /// Changes the stage for the given stat, returning the change that actually took place.
    pub fn change(&mut self, stat: BattleStat, stages: i8) -> i8 {
        let value = self.get_mut(stat);
        let before = *value;
        *value = before
            .saturating_add(stages)
            .clamp(-Self::MAX_STAGE, Self::MAX_STAGE);
        *value - before
    }

    /// Checks if the stage change would have any effect.
    pub fn can_change(&self, stat: BattleStat, stages: i8) -> bool {
        let value = self.get(stat);
        (stages > 0 && value < Self::MAX_STAGE) || (stages < 0 && value > -Self::MAX_STAGE)
    }
}
