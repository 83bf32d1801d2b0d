use crate::{
    battle::{
        BattleStat,
        MonHandle,
        Move,
    },
    common::Fraction,
    effect::{
        Applied,
        AttackTrigger,
        CustomEffect,
        EffectContext,
        FieldTrigger,
        Hook,
        KnockOutTrigger,
        Outcome,
    },
    error::Error,
};

/// Arguments for checking whether the creature traps an opponent.
#[derive(Debug, Clone)]
pub struct CheckTrappedArgs {
    /// The creature trying to leave the field.
    pub target: MonHandle,
    pub trapped: bool,
}

impl CheckTrappedArgs {
    pub fn new(target: MonHandle) -> Self {
        Self {
            target,
            trapped: false,
        }
    }
}

/// Effects that decide whether the creature traps an opponent.
#[derive(Debug, Clone)]
pub enum CheckTrappedAttr {
    Trap { trigger: KnockOutTrigger },
    Custom(CustomEffect<CheckTrappedArgs>),
}

impl CheckTrappedAttr {
    fn trap(
        context: &mut EffectContext<'_>,
        args: &mut CheckTrappedArgs,
        trigger: &KnockOutTrigger,
    ) -> Result<Outcome, Error> {
        let mon = context.mon()?;
        let target = context.state().mon(args.target)?;
        if args.target == context.mon_handle() || target.side == mon.side || target.fainted() {
            return Ok(Outcome::not_applied());
        }
        if !context.check_opponent_trigger(trigger, args.target)? {
            return Ok(Outcome::not_applied());
        }
        args.trapped = true;
        Ok(Outcome::on(args.target))
    }
}

impl Hook for CheckTrappedAttr {
    type Args = CheckTrappedArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut CheckTrappedArgs,
    ) -> Applied<'a> {
        match self {
            Self::Trap { trigger } => Self::trap(&mut context, args, trigger).into(),
            Self::Custom(effect) => effect.apply(context, args),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::Trap { .. } => Some("ability.trapped"),
            Self::Custom(_) => None,
        }
    }
}

/// Arguments for modifying one of the creature's stats when it is calculated.
#[derive(Debug, Clone)]
pub struct StatMultiplierArgs {
    pub stat: BattleStat,
    pub multiplier: Fraction,
}

impl StatMultiplierArgs {
    pub fn new(stat: BattleStat) -> Self {
        Self {
            stat,
            multiplier: Fraction::from_integer(1),
        }
    }
}

/// Effects that modify the creature's stats when they are calculated.
#[derive(Debug, Clone)]
pub enum StatMultiplierAttr {
    Multiply {
        stat: BattleStat,
        multiplier: Fraction,
        trigger: FieldTrigger,
    },
    Custom(CustomEffect<StatMultiplierArgs>),
}

impl Hook for StatMultiplierAttr {
    type Args = StatMultiplierArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut StatMultiplierArgs,
    ) -> Applied<'a> {
        match self {
            Self::Multiply {
                stat,
                multiplier,
                trigger,
            } => {
                if *stat != args.stat {
                    return Outcome::not_applied().into();
                }
                match context.check_field_trigger(trigger) {
                    Ok(true) => {
                        args.multiplier *= *multiplier;
                        Outcome::applied().into()
                    }
                    Ok(false) => Outcome::not_applied().into(),
                    Err(error) => Applied::failed(error),
                }
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }
}

/// Arguments for modifying the priority of the creature's move.
#[derive(Debug, Clone)]
pub struct MovePriorityArgs {
    pub mv: Move,
    pub priority: i8,
}

impl MovePriorityArgs {
    pub fn new(mv: Move) -> Self {
        Self {
            priority: mv.priority,
            mv,
        }
    }
}

/// Effects that modify the priority of the creature's moves.
#[derive(Debug, Clone)]
pub enum MovePriorityAttr {
    PriorityBoost { amount: i8, trigger: AttackTrigger },
    Custom(CustomEffect<MovePriorityArgs>),
}

impl Hook for MovePriorityAttr {
    type Args = MovePriorityArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut MovePriorityArgs,
    ) -> Applied<'a> {
        match self {
            Self::PriorityBoost { amount, trigger } => {
                match context.check_attack_trigger(trigger, None, &args.mv) {
                    Ok(true) => {
                        args.priority = args.priority.saturating_add(*amount);
                        Outcome::applied().into()
                    }
                    Ok(false) => Outcome::not_applied().into(),
                    Err(error) => Applied::failed(error),
                }
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }
}

/// The side of a hit the creature is on when critical hits are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticalHitRole {
    Attacker,
    Defender,
}

/// Arguments for deciding whether a hit is critical, and how much it deals.
#[derive(Debug, Clone)]
pub struct CriticalHitArgs {
    pub role: CriticalHitRole,
    pub opponent: MonHandle,
    pub mv: Move,
    pub stage: u8,
    /// Critical hits are prevented.
    pub blocked: bool,
    pub multiplier: Fraction,
}

impl CriticalHitArgs {
    pub fn new(role: CriticalHitRole, opponent: MonHandle, mv: Move) -> Self {
        Self {
            role,
            opponent,
            mv,
            stage: 0,
            blocked: false,
            multiplier: Fraction::new(3, 2),
        }
    }
}

/// Effects on critical hits involving the creature.
#[derive(Debug, Clone)]
pub enum CriticalHitAttr {
    BoostCritStage { stages: u8 },
    BlockCrits,
    CritDamageMultiplier { multiplier: Fraction },
    Custom(CustomEffect<CriticalHitArgs>),
}

impl Hook for CriticalHitAttr {
    type Args = CriticalHitArgs;

    fn apply<'a>(
        &'a self,
        context: EffectContext<'a>,
        args: &'a mut CriticalHitArgs,
    ) -> Applied<'a> {
        match self {
            Self::BoostCritStage { stages } => {
                if args.role != CriticalHitRole::Attacker {
                    return Outcome::not_applied().into();
                }
                args.stage = args.stage.saturating_add(*stages);
                Outcome::applied().into()
            }
            Self::BlockCrits => {
                if args.role != CriticalHitRole::Defender {
                    return Outcome::not_applied().into();
                }
                args.blocked = true;
                Outcome::applied().into()
            }
            Self::CritDamageMultiplier { multiplier } => {
                if args.role != CriticalHitRole::Attacker {
                    return Outcome::not_applied().into();
                }
                args.multiplier *= *multiplier;
                Outcome::applied().into()
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }
}
