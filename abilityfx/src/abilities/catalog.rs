use crate::{
    abilities::{
        AbilityBuilder,
        AbilityDefinition,
        AbilityRegistry,
    },
    battle::{
        BattleStat,
        MoveCategory,
        MoveFlag,
        Status,
        Terrain,
        Type,
        Weather,
    },
    common::{
        Fraction,
        Id,
    },
    effect::{
        AttackTrigger,
        CheckTrappedAttr,
        Condition,
        CriticalHitAttr,
        DefendTrigger,
        FaintTrigger,
        FieldTrigger,
        KnockOutTrigger,
        MovePriorityAttr,
        PostAttackAttr,
        PostDefendAttr,
        PostFaintAttr,
        PostKnockOutAttr,
        PostSummonAttr,
        PostTurnAttr,
        PostVictoryAttr,
        PostWeatherLapseAttr,
        PreApplyTagAttr,
        PreAttackAttr,
        PreDefendAttr,
        PreSetStatusAttr,
        PreStatStageChangeAttr,
        PreSwitchOutAttr,
        StatMultiplierAttr,
        VictoryTrigger,
    },
    error::Error,
};

/// A small catalogue of abilities covering every built-in effect.
pub fn standard_abilities() -> Vec<AbilityDefinition> {
    Vec::from([
        // Attacking.
        AbilityBuilder::new("Aerilate", 6)
            .description("Normal-type moves become Flying-type moves and are slightly stronger.")
            .attr(PreAttackAttr::MoveTypeChange {
                from: Some(Type::Normal),
                to: Type::Flying,
                power: Fraction::new(6, 5),
                trigger: AttackTrigger::always(),
            })
            .build(),
        AbilityBuilder::new("Technician", 4)
            .description("Powers up weak moves.")
            .silent_attr(PreAttackAttr::MovePowerBoost {
                multiplier: Fraction::new(3, 2),
                trigger: AttackTrigger::when(|_, _, mv| mv.is_damaging() && mv.base_power <= 60),
            })
            .build(),
        AbilityBuilder::new("Sniper", 4)
            .description("Powers up critical hits.")
            .silent_attr(CriticalHitAttr::CritDamageMultiplier {
                multiplier: Fraction::new(3, 2),
            })
            .build(),
        AbilityBuilder::new("Super Luck", 4)
            .description("Heightens the critical-hit ratio of moves.")
            .silent_attr(CriticalHitAttr::BoostCritStage { stages: 1 })
            .build(),
        AbilityBuilder::new("Prankster", 5)
            .description("Gives priority to status moves.")
            .silent_attr(MovePriorityAttr::PriorityBoost {
                amount: 1,
                trigger: AttackTrigger::when(|_, _, mv| mv.category == MoveCategory::Status),
            })
            .build(),
        AbilityBuilder::new("Magician", 6)
            .description("Steals the held item of a creature it hits with a move.")
            .attr(PostAttackAttr::StealHeldItem {
                trigger: AttackTrigger::always(),
            })
            .build(),
        AbilityBuilder::new("Poison Touch", 5)
            .description("May poison a target when making contact.")
            .attr(PostAttackAttr::InflictStatus {
                statuses: Vec::from([Status::Poison]),
                contact_required: true,
                trigger: AttackTrigger::chance(30),
            })
            .build(),
        // Defending.
        AbilityBuilder::new("Static", 3)
            .description("Contact with the creature may cause paralysis.")
            .attr(PostDefendAttr::ContactStatus {
                statuses: Vec::from([Status::Paralysis]),
                trigger: DefendTrigger::chance(30),
            })
            .build(),
        AbilityBuilder::new("Rough Skin", 3)
            .description("Inflicts damage to the attacker on contact.")
            .attr(PostDefendAttr::ContactDamage {
                fraction: Fraction::new(1, 8),
            })
            .build(),
        AbilityBuilder::new("Stamina", 7)
            .description("Boosts Defense when hit by an attack.")
            .attr(PostDefendAttr::StatStageChange {
                changes: Vec::from([(BattleStat::Def, 1)]),
                on_attacker: false,
                trigger: DefendTrigger::when(|_, _, mv, _| mv.is_damaging()),
            })
            .build(),
        AbilityBuilder::new("Levitate", 3)
            .description("Gives full immunity to all Ground-type moves.")
            .ignorable()
            .attr(PreDefendAttr::TypeImmunity {
                immune_type: Type::Ground,
                heal: None,
                boost: None,
            })
            .build(),
        AbilityBuilder::new("Volt Absorb", 3)
            .description("Restores HP if hit by an Electric-type move instead of taking damage.")
            .ignorable()
            .attr(PreDefendAttr::TypeImmunity {
                immune_type: Type::Electric,
                heal: Some(Fraction::new(1, 4)),
                boost: None,
            })
            .build(),
        AbilityBuilder::new("Motor Drive", 4)
            .description("Boosts Speed if hit by an Electric-type move instead of taking damage.")
            .ignorable()
            .attr(PreDefendAttr::TypeImmunity {
                immune_type: Type::Electric,
                heal: None,
                boost: Some((BattleStat::Spe, 1)),
            })
            .build(),
        AbilityBuilder::new("Soundproof", 3)
            .description("Gives full immunity to all sound-based moves.")
            .ignorable()
            .attr(PreDefendAttr::MoveImmunity {
                trigger: DefendTrigger::when(|_, _, mv, _| mv.has_flag(MoveFlag::Sound)),
            })
            .build(),
        AbilityBuilder::new("Filter", 4)
            .description("Reduces the power of supereffective attacks.")
            .ignorable()
            .silent_attr(PreDefendAttr::ReceivedDamageMultiplier {
                multiplier: Fraction::new(3, 4),
                trigger: DefendTrigger::when(|_, _, _, effectiveness| {
                    effectiveness > Fraction::from_integer(1)
                }),
            })
            .build(),
        AbilityBuilder::new("Sturdy", 3)
            .description("Cannot be knocked out with one hit.")
            .ignorable()
            .attr(PreDefendAttr::SurviveAtFullHp)
            .build(),
        // Immunities.
        AbilityBuilder::new("Limber", 3)
            .description("Protects the creature from paralysis.")
            .ignorable()
            .attr(PreSetStatusAttr::StatusImmunity {
                statuses: Vec::from([Status::Paralysis]),
            })
            .build(),
        AbilityBuilder::new("Comatose", 7)
            .description("Cannot be affected by any status.")
            .unsuppressable()
            .attr(PreSetStatusAttr::StatusImmunity {
                statuses: Vec::new(),
            })
            .build(),
        AbilityBuilder::new("Own Tempo", 3)
            .description("Prevents the creature from becoming confused.")
            .ignorable()
            .attr(PreApplyTagAttr::TagImmunity {
                tags: Vec::from([Id::from("confusion")]),
            })
            .build(),
        AbilityBuilder::new("Clear Body", 3)
            .description("Prevents other creatures from lowering its stats.")
            .ignorable()
            .attr(PreStatStageChangeAttr::ProtectStats { stat: None })
            .build(),
        AbilityBuilder::new("Hyper Cutter", 3)
            .description("Prevents other creatures from lowering its Attack stat.")
            .ignorable()
            .attr(PreStatStageChangeAttr::ProtectStats {
                stat: Some(BattleStat::Atk),
            })
            .build(),
        // Entering the field.
        AbilityBuilder::new("Intimidate", 3)
            .description("Lowers the foe's Attack stat upon entering battle.")
            .attr(PostSummonAttr::StatStageChangeFoes {
                changes: Vec::from([(BattleStat::Atk, -1)]),
            })
            .build(),
        AbilityBuilder::new("Drizzle", 3)
            .description("Makes it rain upon entering battle.")
            .attr(PostSummonAttr::SetWeather {
                weather: Weather::Rain,
                turns: Some(5),
            })
            .build(),
        AbilityBuilder::new("Electric Surge", 7)
            .description("Turns the ground into Electric Terrain upon entering battle.")
            .attr(PostSummonAttr::SetTerrain {
                terrain: Terrain::Electric,
                turns: Some(5),
            })
            .build(),
        AbilityBuilder::new("Pressure", 3)
            .description("Puts pressure on the foe.")
            .attr(PostSummonAttr::Announce {
                message_key: "ability.pressure",
            })
            .build(),
        AbilityBuilder::new("Mold Breaker", 4)
            .description("Moves can be used regardless of the target's abilities.")
            .attr(PostSummonAttr::Announce {
                message_key: "ability.mold_breaker",
            })
            .build(),
        AbilityBuilder::new("Neutralizing Gas", 8)
            .description("Neutralizes the abilities of all other creatures on the field.")
            .unsuppressable()
            .suppresses_field_abilities()
            .attr(PostSummonAttr::Announce {
                message_key: "ability.neutralizing_gas",
            })
            .build(),
        // Leaving the field.
        AbilityBuilder::new("Regenerator", 5)
            .description("Restores a little HP when withdrawn from battle.")
            .silent_attr(PreSwitchOutAttr::Heal {
                fraction: Fraction::new(1, 3),
            })
            .build(),
        AbilityBuilder::new("Natural Cure", 3)
            .description("Status conditions heal when withdrawn from battle.")
            .silent_attr(PreSwitchOutAttr::CureStatus)
            .build(),
        // End of turn.
        AbilityBuilder::new("Speed Boost", 3)
            .description("Speed stat is gradually boosted.")
            .conditional_attr(
                Condition::after_first_turn(),
                PostTurnAttr::StatStageChange {
                    changes: Vec::from([(BattleStat::Spe, 1)]),
                    trigger: FieldTrigger::always(),
                },
            )
            .build(),
        AbilityBuilder::new("Shed Skin", 3)
            .description("May heal its own status conditions.")
            .attr(PostTurnAttr::CureStatus {
                trigger: FieldTrigger::chance(33),
            })
            .build(),
        AbilityBuilder::new("Bad Dreams", 4)
            .description("Reduces the HP of sleeping foes.")
            .attr(PostTurnAttr::HurtStatusedFoes {
                status: Status::Sleep,
                fraction: Fraction::new(1, 8),
            })
            .build(),
        AbilityBuilder::new("Rain Dish", 3)
            .description("Gradually regains HP in rain.")
            .attr(PostWeatherLapseAttr::WeatherHeal {
                weather: Weather::Rain,
                fraction: Fraction::new(1, 16),
            })
            .build(),
        AbilityBuilder::new("Solar Power", 4)
            .description("Boosts Special Attack in harsh sunlight, but HP decreases every turn.")
            .attr(PostWeatherLapseAttr::WeatherDamage {
                weather: Weather::Sun,
                fraction: Fraction::new(1, 8),
            })
            .silent_attr(StatMultiplierAttr::Multiply {
                stat: BattleStat::SpAtk,
                multiplier: Fraction::new(3, 2),
                trigger: FieldTrigger::when(|_, field| field.has_weather(Weather::Sun)),
            })
            .build(),
        AbilityBuilder::new("Swift Swim", 4)
            .description("Boosts Speed in rain.")
            .condition(Condition::weather(Weather::Rain))
            .silent_attr(StatMultiplierAttr::Multiply {
                stat: BattleStat::Spe,
                multiplier: Fraction::from_integer(2),
                trigger: FieldTrigger::always(),
            })
            .build(),
        // Fainting.
        AbilityBuilder::new("Aftermath", 4)
            .description("Damages the attacker if it knocks out the creature with contact.")
            .bypass_faint()
            .attr(PostFaintAttr::DamageAttacker {
                fraction: Fraction::new(1, 4),
                trigger: FaintTrigger::when(|_, attacker, mv| {
                    attacker.is_some() && mv.is_some_and(|mv| mv.makes_contact())
                }),
            })
            .build(),
        AbilityBuilder::new("Soul-Heart", 7)
            .description("Boosts Special Attack every time another creature faints.")
            .attr(PostKnockOutAttr::StatStageChange {
                changes: Vec::from([(BattleStat::SpAtk, 1)]),
                trigger: KnockOutTrigger::always(),
            })
            .build(),
        AbilityBuilder::new("Moxie", 5)
            .description("Boosts Attack after knocking out any creature.")
            .attr(PostVictoryAttr::StatStageChange {
                changes: Vec::from([(BattleStat::Atk, 1)]),
                trigger: VictoryTrigger::always(),
            })
            .build(),
        // Trapping.
        AbilityBuilder::new("Arena Trap", 3)
            .description("Prevents grounded foes from fleeing.")
            .attr(CheckTrappedAttr::Trap {
                trigger: KnockOutTrigger::when(|_, opponent| !opponent.has_type(Type::Flying)),
            })
            .build(),
        // Critical hits.
        AbilityBuilder::new("Battle Armor", 3)
            .description("Protects the creature from critical hits.")
            .ignorable()
            .silent_attr(CriticalHitAttr::BlockCrits)
            .build(),
    ])
}

/// Registry of [`standard_abilities`].
pub fn standard_registry() -> Result<AbilityRegistry, Error> {
    AbilityRegistry::new(standard_abilities())
}
