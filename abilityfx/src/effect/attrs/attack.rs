use abilityfx_prng::rand_util;

use crate::{
    battle::{
        BattleAction,
        ItemTransferRequest,
        MonHandle,
        Move,
        Status,
        Type,
    },
    common::Fraction,
    effect::{
        Applied,
        AttackTrigger,
        CustomEffect,
        EffectContext,
        Hook,
        Outcome,
        OutcomeDetail,
        SimulationFidelity,
    },
    error::Error,
};

/// Arguments for effects that run before the creature's move hits.
#[derive(Debug, Clone)]
pub struct PreAttackArgs {
    pub target: Option<MonHandle>,
    pub mv: Move,
    /// The type the move will be used as.
    pub move_type: Type,
    pub power_multiplier: Fraction,
    pub damage_multiplier: Fraction,
}

impl PreAttackArgs {
    pub fn new(target: Option<MonHandle>, mv: Move) -> Self {
        Self {
            target,
            move_type: mv.move_type,
            mv,
            power_multiplier: Fraction::from_integer(1),
            damage_multiplier: Fraction::from_integer(1),
        }
    }
}

/// Effects that run before the creature's move hits.
#[derive(Debug, Clone)]
pub enum PreAttackAttr {
    /// Changes the type of damaging moves, optionally only those of one type, and multiplies
    /// their power.
    MoveTypeChange {
        from: Option<Type>,
        to: Type,
        power: Fraction,
        trigger: AttackTrigger,
    },
    MovePowerBoost {
        multiplier: Fraction,
        trigger: AttackTrigger,
    },
    DamageBoost {
        multiplier: Fraction,
        trigger: AttackTrigger,
    },
    Custom(CustomEffect<PreAttackArgs>),
}

impl PreAttackAttr {
    fn apply_now(
        &self,
        context: &mut EffectContext<'_>,
        args: &mut PreAttackArgs,
    ) -> Result<Outcome, Error> {
        match self {
            Self::MoveTypeChange {
                from,
                to,
                power,
                trigger,
            } => {
                if !args.mv.is_damaging()
                    || args.move_type == *to
                    || from.is_some_and(|from| from != args.move_type)
                {
                    return Ok(Outcome::not_applied());
                }
                if !context.check_attack_trigger(trigger, args.target, &args.mv)? {
                    return Ok(Outcome::not_applied());
                }
                args.move_type = *to;
                args.power_multiplier *= *power;
                Ok(Outcome::applied().with_detail(OutcomeDetail::Type(*to)))
            }
            Self::MovePowerBoost {
                multiplier,
                trigger,
            } => {
                if !context.check_attack_trigger(trigger, args.target, &args.mv)? {
                    return Ok(Outcome::not_applied());
                }
                args.power_multiplier *= *multiplier;
                Ok(Outcome::applied())
            }
            Self::DamageBoost {
                multiplier,
                trigger,
            } => {
                if !args.mv.is_damaging()
                    || !context.check_attack_trigger(trigger, args.target, &args.mv)?
                {
                    return Ok(Outcome::not_applied());
                }
                args.damage_multiplier *= *multiplier;
                Ok(Outcome::applied())
            }
            Self::Custom(_) => Ok(Outcome::not_applied()),
        }
    }
}

impl Hook for PreAttackAttr {
    type Args = PreAttackArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PreAttackArgs,
    ) -> Applied<'a> {
        match self {
            Self::Custom(effect) => effect.apply(context, args),
            _ => self.apply_now(&mut context, args).into(),
        }
    }
}

/// Arguments for effects that run after the creature's move hits a target.
#[derive(Debug, Clone)]
pub struct PostAttackArgs {
    pub target: MonHandle,
    pub mv: Move,
    pub damage: u32,
}

/// Effects that run after the creature's move hits a target.
#[derive(Debug, Clone)]
pub enum PostAttackAttr {
    /// Inflicts one of the statuses on the target of a damaging hit.
    InflictStatus {
        statuses: Vec<Status>,
        contact_required: bool,
        trigger: AttackTrigger,
    },
    /// Takes the target's held item, if the creature is not holding one.
    ///
    /// The transfer must be approved by the host's item system, which may take time.
    StealHeldItem { trigger: AttackTrigger },
    Custom(CustomEffect<PostAttackArgs>),
}

impl PostAttackAttr {
    fn inflict_status(
        context: &mut EffectContext<'_>,
        args: &PostAttackArgs,
        statuses: &[Status],
        contact_required: bool,
        trigger: &AttackTrigger,
    ) -> Result<Outcome, Error> {
        if args.damage == 0
            || args.target == context.mon_handle()
            || (contact_required && !args.mv.makes_contact())
        {
            return Ok(Outcome::not_applied());
        }
        let target = context.state().mon(args.target)?;
        if target.status.is_some() || target.fainted() {
            return Ok(Outcome::not_applied());
        }
        if !context.check_attack_trigger(trigger, Some(args.target), &args.mv)? {
            return Ok(Outcome::not_applied());
        }
        let status = match rand_util::sample_slice(context.prng(), statuses) {
            Some(status) => *status,
            None => return Ok(Outcome::not_applied()),
        };
        let mon = context.mon_handle();
        context.queue_action(BattleAction::SetStatus {
            target: args.target,
            status,
            source: Some(mon),
        });
        Ok(Outcome::on(args.target).with_detail(OutcomeDetail::Status(status)))
    }

    fn steal_request(
        context: &mut EffectContext<'_>,
        args: &PostAttackArgs,
        trigger: &AttackTrigger,
    ) -> Result<Option<ItemTransferRequest>, Error> {
        let mon = context.mon_handle();
        if args.damage == 0 || args.target == mon || context.mon()?.item.is_some() {
            return Ok(None);
        }
        let item = match &context.state().mon(args.target)?.item {
            Some(item) => item.clone(),
            None => return Ok(None),
        };
        if !context.check_attack_trigger(trigger, Some(args.target), &args.mv)? {
            return Ok(None);
        }
        Ok(Some(ItemTransferRequest {
            from: args.target,
            to: mon,
            item,
        }))
    }
}

impl Hook for PostAttackAttr {
    type Args = PostAttackArgs;

    fn apply<'a>(
        &'a self,
        mut context: EffectContext<'a>,
        args: &'a mut PostAttackArgs,
    ) -> Applied<'a> {
        match self {
            Self::InflictStatus {
                statuses,
                contact_required,
                trigger,
            } => Self::inflict_status(&mut context, args, statuses, *contact_required, trigger)
                .into(),
            Self::StealHeldItem { trigger } => {
                let request = match Self::steal_request(&mut context, args, trigger) {
                    Ok(Some(request)) => request,
                    Ok(None) => return Outcome::not_applied().into(),
                    Err(error) => return Applied::failed(error),
                };
                let service = context.battle().item_transfers().clone();
                if context.simulated() {
                    if !service.can_transfer(&request) {
                        return Outcome::not_applied().into();
                    }
                    return Outcome::on(request.from)
                        .with_detail(OutcomeDetail::Item(request.item))
                        .into();
                }
                Applied::deferred(async move {
                    if !service.transfer(request.clone()).await? {
                        return Ok(Outcome::not_applied());
                    }
                    context.queue_action(BattleAction::TransferItem {
                        from: request.from,
                        to: request.to,
                    });
                    Ok(Outcome::on(request.from).with_detail(OutcomeDetail::Item(request.item)))
                })
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::StealHeldItem { .. } => Some("ability.steal_item"),
            _ => None,
        }
    }

    fn simulation_fidelity(&self) -> SimulationFidelity {
        match self {
            Self::StealHeldItem { .. } => SimulationFidelity::Provisional,
            _ => SimulationFidelity::Exact,
        }
    }
}
