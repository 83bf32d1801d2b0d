use abilityfx_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::{
        AbilitySlot,
        AbilitySource,
        Battle,
        BattleAction,
        BattleState,
        Field,
        Mon,
        MonHandle,
        Move,
    },
    common::{
        Fraction,
        Id,
    },
    effect::{
        AttackTrigger,
        DefendTrigger,
        FaintTrigger,
        FieldTrigger,
        KnockOutTrigger,
        VictoryTrigger,
        evaluate_attack_trigger,
        evaluate_defend_trigger,
        evaluate_faint_trigger,
        evaluate_field_trigger,
        evaluate_knockout_trigger,
        evaluate_victory_trigger,
    },
    error::Error,
};

/// The context an effect is applied in.
///
/// Effects only observe the battle through this context. When the dispatch is simulated, queued
/// actions are dropped and random draws come from a fork of the battle's generator, so that an
/// effect computes the same result without leaving a trace.
pub struct EffectContext<'a> {
    battle: &'a mut Battle,
    mon: MonHandle,
    source: AbilitySource,
    simulated: bool,
    suppress_presentation: bool,
    scratch_prng: Option<&'a mut Box<dyn PseudoRandomNumberGenerator>>,
}

impl<'a> EffectContext<'a> {
    pub(crate) fn new(
        battle: &'a mut Battle,
        mon: MonHandle,
        source: AbilitySource,
        simulated: bool,
        suppress_presentation: bool,
        scratch_prng: Option<&'a mut Box<dyn PseudoRandomNumberGenerator>>,
    ) -> Self {
        Self {
            battle,
            mon,
            source,
            simulated,
            suppress_presentation,
            scratch_prng,
        }
    }

    pub fn battle(&self) -> &Battle {
        &*self.battle
    }

    pub fn state(&self) -> &BattleState {
        self.battle.state()
    }

    pub fn field(&self) -> &Field {
        self.battle.field()
    }

    /// The creature the effect belongs to.
    pub fn mon_handle(&self) -> MonHandle {
        self.mon
    }

    pub fn mon(&self) -> Result<&Mon, Error> {
        self.battle.mon(self.mon)
    }

    pub fn ability(&self) -> &Id {
        &self.source.ability
    }

    pub fn slot(&self) -> AbilitySlot {
        self.source.slot
    }

    /// Is the effect applied from the creature's passive ability?
    pub fn is_passive(&self) -> bool {
        self.source.slot.is_passive()
    }

    pub fn simulated(&self) -> bool {
        self.simulated
    }

    pub fn suppress_presentation(&self) -> bool {
        self.suppress_presentation
    }

    /// Unfainted creatures on the field opposing the effect's creature.
    pub fn foes(&self) -> Result<Vec<MonHandle>, Error> {
        self.battle.state().foes_of(self.mon)
    }

    /// The random number generator effects must draw from.
    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.state_and_prng().1
    }

    /// Splits the context into battle state and the random number generator effects must draw
    /// from.
    pub fn state_and_prng(&mut self) -> (&BattleState, &mut dyn PseudoRandomNumberGenerator) {
        match &mut self.scratch_prng {
            Some(prng) => (self.battle.state(), &mut ***prng),
            None => {
                let (state, prng) = self.battle.state_and_prng();
                (state, &mut **prng)
            }
        }
    }

    /// Queues an action for the host to resolve after all currently queued actions.
    ///
    /// Dropped when simulated.
    pub fn queue_action(&mut self, action: BattleAction) {
        if self.simulated {
            log::trace!("dropping simulated action {action:?}");
            return;
        }
        self.battle.queue_mut().push(action);
    }

    /// Queues an action for the host to resolve before everything else.
    ///
    /// Dropped when simulated.
    pub fn insert_next_action(&mut self, action: BattleAction) {
        if self.simulated {
            log::trace!("dropping simulated action {action:?}");
            return;
        }
        self.battle.queue_mut().insert_next(action);
    }

    /// Checks an attack trigger, with the effect's creature as the user.
    pub fn check_attack_trigger(
        &mut self,
        trigger: &AttackTrigger,
        target: Option<MonHandle>,
        mv: &Move,
    ) -> Result<bool, Error> {
        let mon = self.mon;
        let (state, prng) = self.state_and_prng();
        let user = state.mon(mon)?;
        let target = target.map(|target| state.mon(target)).transpose()?;
        Ok(evaluate_attack_trigger(trigger, prng, user, target, mv))
    }

    /// Checks a defend trigger, with the effect's creature as the defender.
    pub fn check_defend_trigger(
        &mut self,
        trigger: &DefendTrigger,
        attacker: MonHandle,
        mv: &Move,
        effectiveness: Fraction,
    ) -> Result<bool, Error> {
        let mon = self.mon;
        let (state, prng) = self.state_and_prng();
        Ok(evaluate_defend_trigger(
            trigger,
            prng,
            state.mon(mon)?,
            state.mon(attacker)?,
            mv,
            effectiveness,
        ))
    }

    /// Checks a trigger involving the effect's creature and an opponent.
    pub fn check_opponent_trigger(
        &mut self,
        trigger: &KnockOutTrigger,
        opponent: MonHandle,
    ) -> Result<bool, Error> {
        let mon = self.mon;
        let (state, prng) = self.state_and_prng();
        Ok(evaluate_knockout_trigger(
            trigger,
            prng,
            state.mon(mon)?,
            state.mon(opponent)?,
        ))
    }

    /// Checks a faint trigger, with the effect's creature as the fainted creature.
    pub fn check_faint_trigger(
        &mut self,
        trigger: &FaintTrigger,
        attacker: Option<MonHandle>,
        mv: Option<&Move>,
    ) -> Result<bool, Error> {
        let mon = self.mon;
        let (state, prng) = self.state_and_prng();
        let attacker = attacker.map(|attacker| state.mon(attacker)).transpose()?;
        Ok(evaluate_faint_trigger(
            trigger,
            prng,
            state.mon(mon)?,
            attacker,
            mv,
        ))
    }

    pub fn check_field_trigger(&mut self, trigger: &FieldTrigger) -> Result<bool, Error> {
        let mon = self.mon;
        let (state, prng) = self.state_and_prng();
        Ok(evaluate_field_trigger(
            trigger,
            prng,
            state.mon(mon)?,
            &state.field,
        ))
    }

    pub fn check_victory_trigger(&mut self, trigger: &VictoryTrigger) -> Result<bool, Error> {
        let mon = self.mon;
        let (state, prng) = self.state_and_prng();
        Ok(evaluate_victory_trigger(trigger, prng, state.mon(mon)?))
    }
}
