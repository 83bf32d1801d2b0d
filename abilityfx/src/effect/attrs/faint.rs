use crate::{
    battle::{
        BattleAction,
        MonHandle,
        Move,
        StageChange,
    },
    common::{
        Fraction,
        fraction_of_at_least_one,
    },
    effect::{
        Applied,
        CustomEffect,
        EffectContext,
        FaintTrigger,
        Hook,
        KnockOutTrigger,
        Outcome,
        OutcomeDetail,
        VictoryTrigger,
    },
    error::Error,
};

/// Arguments for effects that run when the creature faints.
#[derive(Debug, Default, Clone)]
pub struct PostFaintArgs {
    pub attacker: Option<MonHandle>,
    pub mv: Option<Move>,
}

/// Effects that run when the creature faints.
///
/// The owning ability must bypass fainting for these to apply.
#[derive(Debug, Clone)]
pub enum PostFaintAttr {
    /// Damages the attacker by a fraction of its maximum HP.
    DamageAttacker {
        fraction: Fraction,
        trigger: FaintTrigger,
    },
    Custom(CustomEffect<PostFaintArgs>),
}

impl PostFaintAttr {
    fn damage_attacker(
        context: &mut EffectContext<'_>,
        args: &PostFaintArgs,
        fraction: Fraction,
        trigger: &FaintTrigger,
    ) -> Result<Outcome, Error> {
        let mon = context.mon_handle();
        let attacker = match args.attacker {
            Some(attacker) if attacker != mon => attacker,
            _ => return Ok(Outcome::not_applied()),
        };
        if context.state().mon(attacker)?.fainted()
            || !context.check_faint_trigger(trigger, Some(attacker), args.mv.as_ref())?
        {
            return Ok(Outcome::not_applied());
        }
        let amount = fraction_of_at_least_one(context.state().mon(attacker)?.max_hp, fraction);
        context.queue_action(BattleAction::Damage {
            target: attacker,
            amount,
            source: Some(mon),
        });
        Ok(Outcome::on(attacker).with_detail(OutcomeDetail::Hp(amount)))
    }
}

impl Hook for PostFaintAttr {
    type Args = PostFaintArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostFaintArgs,
    ) -> Applied<'a> {
        match self {
            Self::DamageAttacker { fraction, trigger } => {
                Self::damage_attacker(&mut context, args, *fraction, trigger).into()
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::DamageAttacker { .. } => Some("ability.contact_damage"),
            Self::Custom(_) => None,
        }
    }
}

fn boost_self(
    context: &mut EffectContext<'_>,
    changes: &[StageChange],
) -> Result<Outcome, Error> {
    let mon = context.mon_handle();
    context.queue_action(BattleAction::ChangeStatStages {
        target: mon,
        changes: changes.to_vec(),
        source: Some(mon),
    });
    let mut outcome = Outcome::on(mon);
    if let Some((stat, stages)) = changes.first() {
        outcome = outcome.with_detail(OutcomeDetail::Stat(*stat, *stages));
    }
    Ok(outcome)
}

/// Arguments for effects that run when any other creature is knocked out.
#[derive(Debug, Clone)]
pub struct PostKnockOutArgs {
    pub knocked_out: MonHandle,
}

/// Effects that run when any other creature is knocked out.
#[derive(Debug, Clone)]
pub enum PostKnockOutAttr {
    StatStageChange {
        changes: Vec<StageChange>,
        trigger: KnockOutTrigger,
    },
    Custom(CustomEffect<PostKnockOutArgs>),
}

impl Hook for PostKnockOutAttr {
    type Args = PostKnockOutArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostKnockOutArgs,
    ) -> Applied<'a> {
        match self {
            Self::StatStageChange { changes, trigger } => {
                if args.knocked_out == context.mon_handle() {
                    return Outcome::not_applied().into();
                }
                match context.check_opponent_trigger(trigger, args.knocked_out) {
                    Ok(true) => boost_self(&mut context, changes).into(),
                    Ok(false) => Outcome::not_applied().into(),
                    Err(error) => Applied::failed(error),
                }
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }
}

/// Arguments for effects that run when the creature knocks out a target.
#[derive(Debug, Clone)]
pub struct PostVictoryArgs {
    pub target: MonHandle,
}

/// Effects that run when the creature knocks out a target.
#[derive(Debug, Clone)]
pub enum PostVictoryAttr {
    StatStageChange {
        changes: Vec<StageChange>,
        trigger: VictoryTrigger,
    },
    Custom(CustomEffect<PostVictoryArgs>),
}

impl Hook for PostVictoryAttr {
    type Args = PostVictoryArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostVictoryArgs,
    ) -> Applied<'a> {
        match self {
            Self::StatStageChange { changes, trigger } => {
                match context.check_victory_trigger(trigger) {
                    Ok(true) => boost_self(&mut context, changes).into(),
                    Ok(false) => Outcome::not_applied().into(),
                    Err(error) => Applied::failed(error),
                }
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }
}
