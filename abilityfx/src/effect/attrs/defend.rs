use abilityfx_prng::rand_util;

use crate::{
    battle::{
        BattleAction,
        MonHandle,
        Move,
        StageChange,
        Status,
        Type,
    },
    common::{
        Fraction,
        fraction_of_at_least_one,
    },
    effect::{
        Applied,
        CustomEffect,
        DefendTrigger,
        EffectContext,
        Hook,
        Outcome,
        OutcomeDetail,
    },
    error::Error,
};

/// Arguments for effects that run before the creature is hit by a move.
#[derive(Debug, Clone)]
pub struct PreDefendArgs {
    pub attacker: MonHandle,
    pub mv: Move,
    pub move_type: Type,
    pub effectiveness: Fraction,
    /// Damage the hit is expected to deal.
    pub damage: u32,
    pub damage_multiplier: Fraction,
    /// The move should have no effect on the creature.
    pub cancelled: bool,
}

impl PreDefendArgs {
    pub fn new(attacker: MonHandle, mv: Move) -> Self {
        Self {
            attacker,
            move_type: mv.move_type,
            mv,
            effectiveness: Fraction::from_integer(1),
            damage: 0,
            damage_multiplier: Fraction::from_integer(1),
            cancelled: false,
        }
    }
}

/// Effects that run before the creature is hit by a move.
#[derive(Debug, Clone)]
pub enum PreDefendAttr {
    /// Negates moves of a type, optionally healing or boosting the creature instead.
    TypeImmunity {
        immune_type: Type,
        heal: Option<Fraction>,
        boost: Option<StageChange>,
    },
    MoveImmunity {
        trigger: DefendTrigger,
    },
    ReceivedDamageMultiplier {
        multiplier: Fraction,
        trigger: DefendTrigger,
    },
    /// Leaves the creature with 1 HP when a hit at full HP would knock it out.
    SurviveAtFullHp,
    Custom(CustomEffect<PreDefendArgs>),
}

impl PreDefendAttr {
    fn apply_now(
        &self,
        context: &mut EffectContext<'_>,
        args: &mut PreDefendArgs,
    ) -> Result<Outcome, Error> {
        let mon = context.mon_handle();
        if args.attacker == mon {
            return Ok(Outcome::not_applied());
        }
        match self {
            Self::TypeImmunity {
                immune_type,
                heal,
                boost,
            } => {
                if args.move_type != *immune_type {
                    return Ok(Outcome::not_applied());
                }
                args.cancelled = true;
                let defender = context.mon()?;
                let heal = heal
                    .filter(|_| !defender.full_hp())
                    .map(|heal| fraction_of_at_least_one(defender.max_hp, heal));
                if let Some(amount) = heal {
                    context.queue_action(BattleAction::Heal {
                        target: mon,
                        amount,
                    });
                }
                if let Some(boost) = boost {
                    context.queue_action(BattleAction::ChangeStatStages {
                        target: mon,
                        changes: vec![*boost],
                        source: Some(mon),
                    });
                }
                Ok(Outcome::applied().with_detail(OutcomeDetail::Type(*immune_type)))
            }
            Self::MoveImmunity { trigger } => {
                if !context.check_defend_trigger(
                    trigger,
                    args.attacker,
                    &args.mv,
                    args.effectiveness,
                )? {
                    return Ok(Outcome::not_applied());
                }
                args.cancelled = true;
                Ok(Outcome::applied())
            }
            Self::ReceivedDamageMultiplier {
                multiplier,
                trigger,
            } => {
                if !args.mv.is_damaging()
                    || !context.check_defend_trigger(
                        trigger,
                        args.attacker,
                        &args.mv,
                        args.effectiveness,
                    )?
                {
                    return Ok(Outcome::not_applied());
                }
                args.damage_multiplier *= *multiplier;
                Ok(Outcome::applied())
            }
            Self::SurviveAtFullHp => {
                let defender = context.mon()?;
                if !defender.full_hp() || defender.hp <= 1 || args.damage < defender.hp {
                    return Ok(Outcome::not_applied());
                }
                args.damage = defender.hp - 1;
                Ok(Outcome::applied())
            }
            Self::Custom(_) => Ok(Outcome::not_applied()),
        }
    }
}

impl Hook for PreDefendAttr {
    type Args = PreDefendArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PreDefendArgs,
    ) -> Applied<'a> {
        match self {
            Self::Custom(effect) => effect.apply(context, args),
            _ => self.apply_now(&mut context, args).into(),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::TypeImmunity { .. } | Self::MoveImmunity { .. } => Some("ability.immune"),
            Self::SurviveAtFullHp => Some("ability.endure"),
            _ => None,
        }
    }
}

/// Arguments for effects that run after the creature is hit by a move.
#[derive(Debug, Clone)]
pub struct PostDefendArgs {
    pub attacker: MonHandle,
    pub mv: Move,
    pub damage: u32,
    pub effectiveness: Fraction,
}

impl PostDefendArgs {
    pub fn new(attacker: MonHandle, mv: Move, damage: u32) -> Self {
        Self {
            attacker,
            mv,
            damage,
            effectiveness: Fraction::from_integer(1),
        }
    }
}

/// Effects that run after the creature is hit by a move.
#[derive(Debug, Clone)]
pub enum PostDefendAttr {
    /// Inflicts one of the statuses on an attacker that made contact.
    ContactStatus {
        statuses: Vec<Status>,
        trigger: DefendTrigger,
    },
    /// Changes stat stages of the creature, or of the attacker, after a damaging hit.
    StatStageChange {
        changes: Vec<StageChange>,
        on_attacker: bool,
        trigger: DefendTrigger,
    },
    /// Damages an attacker that made contact by a fraction of its maximum HP.
    ContactDamage {
        fraction: Fraction,
    },
    Custom(CustomEffect<PostDefendArgs>),
}

impl PostDefendAttr {
    fn apply_now(
        &self,
        context: &mut EffectContext<'_>,
        args: &mut PostDefendArgs,
    ) -> Result<Outcome, Error> {
        let mon = context.mon_handle();
        if args.attacker == mon {
            return Ok(Outcome::not_applied());
        }
        match self {
            Self::ContactStatus { statuses, trigger } => {
                if !args.mv.makes_contact() {
                    return Ok(Outcome::not_applied());
                }
                let attacker = context.state().mon(args.attacker)?;
                if attacker.status.is_some() || attacker.fainted() {
                    return Ok(Outcome::not_applied());
                }
                if !context.check_defend_trigger(
                    trigger,
                    args.attacker,
                    &args.mv,
                    args.effectiveness,
                )? {
                    return Ok(Outcome::not_applied());
                }
                let status = match rand_util::sample_slice(context.prng(), statuses) {
                    Some(status) => *status,
                    None => return Ok(Outcome::not_applied()),
                };
                context.queue_action(BattleAction::SetStatus {
                    target: args.attacker,
                    status,
                    source: Some(mon),
                });
                Ok(Outcome::on(args.attacker).with_detail(OutcomeDetail::Status(status)))
            }
            Self::StatStageChange {
                changes,
                on_attacker,
                trigger,
            } => {
                let target = if *on_attacker { args.attacker } else { mon };
                if args.damage == 0 || context.state().mon(target)?.fainted() {
                    return Ok(Outcome::not_applied());
                }
                if !context.check_defend_trigger(
                    trigger,
                    args.attacker,
                    &args.mv,
                    args.effectiveness,
                )? {
                    return Ok(Outcome::not_applied());
                }
                context.queue_action(BattleAction::ChangeStatStages {
                    target,
                    changes: changes.clone(),
                    source: Some(mon),
                });
                let mut outcome = Outcome::on(target);
                if let Some((stat, stages)) = changes.first() {
                    outcome = outcome.with_detail(OutcomeDetail::Stat(*stat, *stages));
                }
                Ok(outcome)
            }
            Self::ContactDamage { fraction } => {
                if !args.mv.makes_contact() {
                    return Ok(Outcome::not_applied());
                }
                let attacker = context.state().mon(args.attacker)?;
                if attacker.fainted() {
                    return Ok(Outcome::not_applied());
                }
                let amount = fraction_of_at_least_one(attacker.max_hp, *fraction);
                context.queue_action(BattleAction::Damage {
                    target: args.attacker,
                    amount,
                    source: Some(mon),
                });
                Ok(Outcome::on(args.attacker).with_detail(OutcomeDetail::Hp(amount)))
            }
            Self::Custom(_) => Ok(Outcome::not_applied()),
        }
    }
}

impl Hook for PostDefendAttr {
    type Args = PostDefendArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostDefendArgs,
    ) -> Applied<'a> {
        match self {
            Self::Custom(effect) => effect.apply(context, args),
            _ => self.apply_now(&mut context, args).into(),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::ContactDamage { .. } => Some("ability.contact_damage"),
            _ => None,
        }
    }
}
