use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a creature or move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    Normal,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Electric"]
    Electric,
    #[string = "Grass"]
    Grass,
    #[string = "Ice"]
    Ice,
    #[string = "Fighting"]
    Fighting,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Flying"]
    Flying,
    #[string = "Psychic"]
    Psychic,
    #[string = "Bug"]
    Bug,
    #[string = "Rock"]
    Rock,
    #[string = "Ghost"]
    Ghost,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Steel"]
    Steel,
    #[string = "Fairy"]
    Fairy,
}

/// A non-volatile status condition. A creature has at most one at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Status {
    #[string = "Burn"]
    #[alias = "brn"]
    Burn,
    #[string = "Freeze"]
    #[alias = "frz"]
    Freeze,
    #[string = "Paralysis"]
    #[alias = "par"]
    Paralysis,
    #[string = "Poison"]
    #[alias = "psn"]
    Poison,
    #[string = "Bad Poison"]
    #[alias = "tox"]
    BadPoison,
    #[string = "Sleep"]
    #[alias = "slp"]
    Sleep,
}

/// Battle-wide weather.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Weather {
    #[string = "Rain"]
    Rain,
    #[string = "Sun"]
    Sun,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Hail"]
    Hail,
}

/// Battle-wide terrain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Terrain {
    #[string = "Electric"]
    Electric,
    #[string = "Grassy"]
    Grassy,
    #[string = "Misty"]
    Misty,
    #[string = "Psychic"]
    Psychic,
}
