use crate::{
    battle::{
        BattleAction,
        StageChange,
        Status,
        Terrain,
        Weather,
    },
    common::{
        Fraction,
        fraction_of_at_least_one,
    },
    effect::{
        Applied,
        CustomEffect,
        EffectContext,
        FieldTrigger,
        Hook,
        Outcome,
        OutcomeDetail,
    },
    error::Error,
};

/// Arguments for effects that run when the creature enters the field.
#[derive(Debug, Default, Clone)]
pub struct PostSummonArgs;

/// Effects that run when the creature enters the field.
#[derive(Debug, Clone)]
pub enum PostSummonAttr {
    SetWeather {
        weather: Weather,
        turns: Option<u8>,
    },
    SetTerrain {
        terrain: Terrain,
        turns: Option<u8>,
    },
    /// Changes stat stages of every foe on the field.
    StatStageChangeFoes { changes: Vec<StageChange> },
    /// Only announces the ability with the given message.
    Announce { message_key: &'static str },
    Custom(CustomEffect<PostSummonArgs>),
}

impl PostSummonAttr {
    fn apply_now(&self, context: &mut EffectContext<'_>) -> Result<Outcome, Error> {
        let mon = context.mon_handle();
        match self {
            Self::SetWeather { weather, turns } => {
                if context.field().has_weather(*weather) {
                    return Ok(Outcome::not_applied());
                }
                context.queue_action(BattleAction::SetWeather {
                    weather: *weather,
                    turns: *turns,
                });
                Ok(Outcome::applied().with_detail(OutcomeDetail::Weather(*weather)))
            }
            Self::SetTerrain { terrain, turns } => {
                if context.field().has_terrain(*terrain) {
                    return Ok(Outcome::not_applied());
                }
                context.queue_action(BattleAction::SetTerrain {
                    terrain: *terrain,
                    turns: *turns,
                });
                Ok(Outcome::applied().with_detail(OutcomeDetail::Terrain(*terrain)))
            }
            Self::StatStageChangeFoes { changes } => {
                let foes = context.foes()?;
                if foes.is_empty() {
                    return Ok(Outcome::not_applied());
                }
                for foe in foes {
                    context.queue_action(BattleAction::ChangeStatStages {
                        target: foe,
                        changes: changes.clone(),
                        source: Some(mon),
                    });
                }
                Ok(Outcome::applied())
            }
            Self::Announce { .. } => Ok(Outcome::applied()),
            Self::Custom(_) => Ok(Outcome::not_applied()),
        }
    }
}

impl Hook for PostSummonAttr {
    type Args = PostSummonArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostSummonArgs,
    ) -> Applied<'a> {
        match self {
            Self::Custom(effect) => effect.apply(context, args),
            _ => self.apply_now(&mut context).into(),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::SetWeather { .. } => Some("ability.set_weather"),
            Self::SetTerrain { .. } => Some("ability.set_terrain"),
            Self::StatStageChangeFoes { .. } => Some("ability.intimidate"),
            Self::Announce { message_key } => Some(*message_key),
            Self::Custom(_) => None,
        }
    }
}

fn heal_fraction(
    context: &mut EffectContext<'_>,
    fraction: Fraction,
) -> Result<Outcome, Error> {
    let mon = context.mon()?;
    if mon.full_hp() || mon.fainted() {
        return Ok(Outcome::not_applied());
    }
    let amount = fraction_of_at_least_one(mon.max_hp, fraction);
    let target = context.mon_handle();
    context.queue_action(BattleAction::Heal { target, amount });
    Ok(Outcome::on(target).with_detail(OutcomeDetail::Hp(amount)))
}

fn cure_status(context: &mut EffectContext<'_>) -> Result<Outcome, Error> {
    let status = match context.mon()?.status {
        Some(status) => status,
        None => return Ok(Outcome::not_applied()),
    };
    let target = context.mon_handle();
    context.queue_action(BattleAction::CureStatus { target });
    Ok(Outcome::on(target).with_detail(OutcomeDetail::Status(status)))
}

/// Arguments for effects that run before the creature leaves the field.
#[derive(Debug, Default, Clone)]
pub struct PreSwitchOutArgs;

/// Effects that run before the creature leaves the field.
#[derive(Debug, Clone)]
pub enum PreSwitchOutAttr {
    /// Heals a fraction of the creature's maximum HP.
    Heal { fraction: Fraction },
    CureStatus,
    Custom(CustomEffect<PreSwitchOutArgs>),
}

impl Hook for PreSwitchOutAttr {
    type Args = PreSwitchOutArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PreSwitchOutArgs,
    ) -> Applied<'a> {
        match self {
            Self::Heal { fraction } => heal_fraction(&mut context, *fraction).into(),
            Self::CureStatus => cure_status(&mut context).into(),
            Self::Custom(effect) => effect.apply(context, args),
        }
    }
}

/// Arguments for effects that run at the end of each turn.
#[derive(Debug, Default, Clone)]
pub struct PostTurnArgs;

/// Effects that run at the end of each turn.
#[derive(Debug, Clone)]
pub enum PostTurnAttr {
    StatStageChange {
        changes: Vec<StageChange>,
        trigger: FieldTrigger,
    },
    Heal {
        fraction: Fraction,
        trigger: FieldTrigger,
    },
    CureStatus {
        trigger: FieldTrigger,
    },
    /// Damages every foe with the status by a fraction of its maximum HP.
    HurtStatusedFoes {
        status: Status,
        fraction: Fraction,
    },
    Custom(CustomEffect<PostTurnArgs>),
}

impl PostTurnAttr {
    fn apply_now(&self, context: &mut EffectContext<'_>) -> Result<Outcome, Error> {
        let mon = context.mon_handle();
        match self {
            Self::StatStageChange { changes, trigger } => {
                let boosts = &context.mon()?.boosts;
                if !changes
                    .iter()
                    .any(|(stat, stages)| boosts.can_change(*stat, *stages))
                {
                    return Ok(Outcome::not_applied());
                }
                if !context.check_field_trigger(trigger)? {
                    return Ok(Outcome::not_applied());
                }
                context.queue_action(BattleAction::ChangeStatStages {
                    target: mon,
                    changes: changes.clone(),
                    source: Some(mon),
                });
                Ok(Outcome::on(mon))
            }
            Self::Heal { fraction, trigger } => {
                if context.mon()?.full_hp() || !context.check_field_trigger(trigger)? {
                    return Ok(Outcome::not_applied());
                }
                heal_fraction(context, *fraction)
            }
            Self::CureStatus { trigger } => {
                if context.mon()?.status.is_none() || !context.check_field_trigger(trigger)? {
                    return Ok(Outcome::not_applied());
                }
                cure_status(context)
            }
            Self::HurtStatusedFoes { status, fraction } => {
                let mut hurt = Vec::new();
                for foe in context.foes()? {
                    let foe_mon = context.state().mon(foe)?;
                    if foe_mon.status == Some(*status) {
                        hurt.push((foe, fraction_of_at_least_one(foe_mon.max_hp, *fraction)));
                    }
                }
                if hurt.is_empty() {
                    return Ok(Outcome::not_applied());
                }
                for (foe, amount) in hurt {
                    context.queue_action(BattleAction::Damage {
                        target: foe,
                        amount,
                        source: Some(mon),
                    });
                }
                Ok(Outcome::applied().with_detail(OutcomeDetail::Status(*status)))
            }
            Self::Custom(_) => Ok(Outcome::not_applied()),
        }
    }
}

impl Hook for PostTurnAttr {
    type Args = PostTurnArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostTurnArgs,
    ) -> Applied<'a> {
        match self {
            Self::Custom(effect) => effect.apply(context, args),
            _ => self.apply_now(&mut context).into(),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::CureStatus { .. } => Some("ability.cure_status"),
            Self::HurtStatusedFoes { .. } => Some("ability.hurt_foes"),
            _ => None,
        }
    }
}

/// Arguments for effects that run when the weather continues at the end of a turn.
#[derive(Debug, Clone)]
pub struct PostWeatherLapseArgs {
    pub weather: Weather,
}

/// Effects that run when the weather continues at the end of a turn.
#[derive(Debug, Clone)]
pub enum PostWeatherLapseAttr {
    WeatherHeal {
        weather: Weather,
        fraction: Fraction,
    },
    WeatherDamage {
        weather: Weather,
        fraction: Fraction,
    },
    Custom(CustomEffect<PostWeatherLapseArgs>),
}

impl PostWeatherLapseAttr {
    fn apply_now(
        &self,
        context: &mut EffectContext<'_>,
        args: &PostWeatherLapseArgs,
    ) -> Result<Outcome, Error> {
        match self {
            Self::WeatherHeal { weather, fraction } => {
                if args.weather != *weather {
                    return Ok(Outcome::not_applied());
                }
                heal_fraction(context, *fraction)
            }
            Self::WeatherDamage { weather, fraction } => {
                let mon = context.mon()?;
                if args.weather != *weather || mon.fainted() {
                    return Ok(Outcome::not_applied());
                }
                let amount = fraction_of_at_least_one(mon.max_hp, *fraction);
                let target = context.mon_handle();
                context.queue_action(BattleAction::Damage {
                    target,
                    amount,
                    source: None,
                });
                Ok(Outcome::on(target).with_detail(OutcomeDetail::Hp(amount)))
            }
            Self::Custom(_) => Ok(Outcome::not_applied()),
        }
    }
}

impl Hook for PostWeatherLapseAttr {
    type Args = PostWeatherLapseArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostWeatherLapseArgs,
    ) -> Applied<'a> {
        match self {
            Self::Custom(effect) => effect.apply(context, args),
            _ => self.apply_now(&mut context, args).into(),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::WeatherDamage { .. } => Some("ability.weather_damage"),
            _ => None,
        }
    }
}
