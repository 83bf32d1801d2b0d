use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Ability flags, which control when an ability can be applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum AbilityFlags {
    /// Effects still apply while the creature is fainted but not yet removed from the field.
    #[string = "BypassFaint"]
    BypassFaint,
    /// Can be negated by an effect that ignores abilities.
    #[string = "Ignorable"]
    Ignorable,
    /// Cannot be suppressed, by the creature's own state or by another creature on the field.
    #[string = "Unsuppressable"]
    Unsuppressable,
    /// Suppresses the abilities of every other creature while on the field.
    #[string = "SuppressesFieldAbilities"]
    SuppressesFieldAbilities,
    /// Only some of the ability's behavior is implemented.
    #[string = "Partial"]
    Partial,
    /// The ability's behavior is not implemented.
    #[string = "Unimplemented"]
    Unimplemented,
}
