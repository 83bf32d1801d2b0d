use std::{
    mem,
    sync::Arc,
};

use abilityfx_prng::PseudoRandomNumberGenerator;

use crate::{
    abilities::AbilityRegistry,
    battle::{
        AbilityObserver,
        ActionQueue,
        BattleAction,
        BattleEngineOptions,
        BattleOptions,
        Field,
        ItemTransferService,
        Localizer,
        Mon,
        MonData,
        MonHandle,
        PresentationRequest,
    },
    battle_event,
    battle_log::{
        BattleEvent,
        EventLog,
    },
    effect::{
        AttrSelector,
        PostTurnArgs,
        PostWeatherLapseArgs,
        PreApplyTagArgs,
        PreSetStatusArgs,
        PreStatStageChangeArgs,
        apply_post_turn_attrs,
        apply_post_weather_lapse_attrs,
        apply_pre_apply_tag_attrs,
        apply_pre_set_status_attrs,
        apply_pre_stat_stage_change_attrs,
    },
    error::{
        Error,
        WrapOptionError,
        WrapResultError,
    },
};

/// The creatures and field of a battle.
///
/// Split from [`Battle`] so that state can be read while the battle's random number generator is
/// borrowed mutably.
#[derive(Debug, Default, Clone)]
pub struct BattleState {
    mons: Vec<Mon>,
    pub field: Field,
}

impl BattleState {
    pub fn mon(&self, mon: MonHandle) -> Result<&Mon, Error> {
        self.mons
            .get(mon.index())
            .wrap_not_found_error_with_format(format_args!("mon {mon}"))
    }

    pub fn mon_mut(&mut self, mon: MonHandle) -> Result<&mut Mon, Error> {
        self.mons
            .get_mut(mon.index())
            .wrap_not_found_error_with_format(format_args!("mon {mon}"))
    }

    pub fn mons(&self) -> impl Iterator<Item = (MonHandle, &Mon)> {
        self.mons
            .iter()
            .enumerate()
            .map(|(i, mon)| (MonHandle::new(i), mon))
    }

    /// Creatures currently on the field.
    pub fn active_mons(&self) -> impl Iterator<Item = (MonHandle, &Mon)> {
        self.mons().filter(|(_, mon)| mon.active)
    }

    /// Unfainted creatures on the field opposing the given creature.
    pub fn foes_of(&self, mon: MonHandle) -> Result<Vec<MonHandle>, Error> {
        let side = self.mon(mon)?.side;
        Ok(self
            .active_mons()
            .filter(|(_, foe)| foe.side != side && !foe.fainted())
            .map(|(handle, _)| handle)
            .collect())
    }
}

/// A battle hosting ability effects.
///
/// This is a reference host: it owns the state abilities read, and resolves the actions they
/// queue. Turn structure is driven by the caller.
pub struct Battle {
    state: BattleState,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    registry: Arc<AbilityRegistry>,
    queue: ActionQueue,
    log: EventLog,
    presentation: Vec<PresentationRequest>,
    engine_options: BattleEngineOptions,
}

impl Battle {
    /// Creates a new battle.
    pub fn new(
        options: BattleOptions,
        engine_options: BattleEngineOptions,
        registry: Arc<AbilityRegistry>,
    ) -> Self {
        let prng = (engine_options.rng_factory)(options.seed);
        let field = Field {
            weather: options.field.weather,
            terrain: options.field.terrain,
            ..Default::default()
        };
        let mut battle = Self {
            state: BattleState {
                mons: Vec::new(),
                field,
            },
            prng,
            registry,
            queue: ActionQueue::new(),
            log: EventLog::new(),
            presentation: Vec::new(),
            engine_options,
        };
        for mon in options.mons {
            battle.add_mon(mon);
        }
        battle
    }

    /// Adds a creature to the battle.
    pub fn add_mon(&mut self, data: MonData) -> MonHandle {
        let handle = MonHandle::new(self.state.mons.len());
        self.state.mons.push(Mon::new(data));
        handle
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn mon(&self, mon: MonHandle) -> Result<&Mon, Error> {
        self.state.mon(mon)
    }

    /// Handles of all creatures, in the order they were added.
    pub fn mon_handles(&self) -> Vec<MonHandle> {
        self.state.mons().map(|(handle, _)| handle).collect()
    }

    pub fn mon_mut(&mut self, mon: MonHandle) -> Result<&mut Mon, Error> {
        self.state.mon_mut(mon)
    }

    pub fn field(&self) -> &Field {
        &self.state.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.state.field
    }

    pub fn registry(&self) -> &Arc<AbilityRegistry> {
        &self.registry
    }

    pub fn prng(&self) -> &dyn PseudoRandomNumberGenerator {
        self.prng.as_ref()
    }

    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Splits the battle into its state and its random number generator.
    pub fn state_and_prng(&mut self) -> (&BattleState, &mut Box<dyn PseudoRandomNumberGenerator>) {
        (&self.state, &mut self.prng)
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut ActionQueue {
        &mut self.queue
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// Reads out all new battle log entries.
    pub fn new_log_entries(&mut self) -> Vec<String> {
        self.log.read_out().map(|entry| entry.to_owned()).collect()
    }

    /// Adds a diagnostic entry to the battle log, if enabled.
    pub fn log_debug(&mut self, event: BattleEvent) {
        if self.engine_options.debug_logs {
            self.log.push(event);
        }
    }

    /// Presentation requests that have not been taken yet.
    pub fn presentation_requests(&self) -> &[PresentationRequest] {
        &self.presentation
    }

    /// Takes all pending presentation requests, in the order they were made.
    pub fn take_presentation_requests(&mut self) -> Vec<PresentationRequest> {
        mem::take(&mut self.presentation)
    }

    pub(crate) fn request_presentation(&mut self, request: PresentationRequest) {
        self.presentation.push(request);
    }

    pub fn localizer(&self) -> &Arc<dyn Localizer> {
        &self.engine_options.localizer
    }

    pub fn item_transfers(&self) -> &Arc<dyn ItemTransferService> {
        &self.engine_options.item_transfers
    }

    pub fn observers(&self) -> &[Arc<dyn AbilityObserver>] {
        &self.engine_options.observers
    }

    /// Starts the next turn, clearing the per-turn ability ledgers.
    pub fn next_turn(&mut self) {
        self.state.field.turn += 1;
        for mon in &mut self.state.mons {
            mon.ledger.clear_turn();
        }
        self.log
            .push(battle_event!("turn", format!("turn:{}", self.state.field.turn)));
    }

    /// Ends the encounter, clearing all ability ledgers.
    pub fn end_encounter(&mut self) {
        for mon in &mut self.state.mons {
            mon.ledger.clear_encounter();
        }
    }

    /// Runs end-of-turn effects for every active creature, resolves them, and starts the next
    /// turn.
    pub async fn end_turn(&mut self) -> Result<(), Error> {
        let active = self
            .state
            .active_mons()
            .filter(|(_, mon)| !mon.fainted())
            .map(|(handle, _)| handle)
            .collect::<Vec<_>>();
        if let Some(weather) = self.state.field.weather {
            for mon in active.iter().copied() {
                apply_post_weather_lapse_attrs(
                    self,
                    mon,
                    &mut PostWeatherLapseArgs { weather },
                    AttrSelector::Any,
                    false,
                )
                .await;
            }
        }
        for mon in active {
            apply_post_turn_attrs(self, mon, &mut PostTurnArgs, AttrSelector::Any, false).await;
        }
        self.resolve_actions().await?;
        self.next_turn();
        Ok(())
    }

    /// Resolves all queued actions in order, returning the number of actions resolved.
    ///
    /// Status and stat stage changes first run the target's immunity effects, which may cancel
    /// them.
    pub async fn resolve_actions(&mut self) -> Result<usize, Error> {
        let mut resolved = 0;
        while let Some(action) = self.queue.pop_front() {
            self.resolve_action(action)
                .await
                .wrap_error_with_message("failed to resolve queued action")?;
            resolved += 1;
        }
        Ok(resolved)
    }

    async fn resolve_action(&mut self, action: BattleAction) -> Result<(), Error> {
        match action {
            BattleAction::SetStatus {
                target,
                status,
                source,
            } => {
                let mon = self.mon(target)?;
                if mon.status.is_some() || mon.fainted() {
                    return Ok(());
                }
                let mut args = PreSetStatusArgs::new(status, source);
                apply_pre_set_status_attrs(self, target, &mut args, AttrSelector::Any, false).await;
                if args.cancelled {
                    return Ok(());
                }
                let mon = self.mon_mut(target)?;
                mon.status = Some(status);
                let event = battle_event!(
                    "status",
                    format!("mon:{}", mon.log_label()),
                    format!("status:{status}"),
                );
                self.log.push(event);
            }
            BattleAction::CureStatus { target } => {
                let mon = self.mon_mut(target)?;
                if let Some(status) = mon.status.take() {
                    let event = battle_event!(
                        "curestatus",
                        format!("mon:{}", mon.log_label()),
                        format!("status:{status}"),
                    );
                    self.log.push(event);
                }
            }
            BattleAction::ChangeStatStages {
                target,
                changes,
                source,
            } => {
                for (stat, stages) in changes {
                    if stages < 0 && source != Some(target) {
                        let mut args = PreStatStageChangeArgs::new(stat, stages, source);
                        apply_pre_stat_stage_change_attrs(
                            self,
                            target,
                            &mut args,
                            AttrSelector::Any,
                            false,
                        )
                        .await;
                        if args.cancelled {
                            continue;
                        }
                    }
                    let mon = self.mon_mut(target)?;
                    let delta = mon.boosts.change(stat, stages);
                    if delta == 0 {
                        continue;
                    }
                    let event = battle_event!(
                        if delta > 0 { "boost" } else { "unboost" },
                        format!("mon:{}", mon.log_label()),
                        format!("stat:{stat}"),
                        format!("by:{}", delta.abs()),
                    );
                    self.log.push(event);
                }
            }
            BattleAction::Damage { target, amount, .. } => {
                let mon = self.mon_mut(target)?;
                if mon.fainted() {
                    return Ok(());
                }
                mon.hp = mon.hp.saturating_sub(amount);
                let label = mon.log_label();
                let event = battle_event!(
                    "damage",
                    format!("mon:{label}"),
                    format!("health:{}/{}", mon.hp, mon.max_hp),
                );
                let fainted = mon.fainted();
                self.log.push(event);
                if fainted {
                    self.log.push(battle_event!("faint", format!("mon:{label}")));
                }
            }
            BattleAction::Heal { target, amount } => {
                let mon = self.mon_mut(target)?;
                if mon.fainted() || mon.full_hp() {
                    return Ok(());
                }
                mon.hp = mon.hp.saturating_add(amount).min(mon.max_hp);
                let event = battle_event!(
                    "heal",
                    format!("mon:{}", mon.log_label()),
                    format!("health:{}/{}", mon.hp, mon.max_hp),
                );
                self.log.push(event);
            }
            BattleAction::SetWeather { weather, turns } => {
                self.state.field.weather = Some(weather);
                self.state.field.weather_turns = turns;
                self.log
                    .push(battle_event!("weather", format!("weather:{weather}")));
            }
            BattleAction::SetTerrain { terrain, turns } => {
                self.state.field.terrain = Some(terrain);
                self.state.field.terrain_turns = turns;
                self.log
                    .push(battle_event!("terrain", format!("terrain:{terrain}")));
            }
            BattleAction::TransferItem { from, to } => {
                let item = match self.mon_mut(from)?.item.take() {
                    Some(item) => item,
                    None => return Ok(()),
                };
                let receiver = self.mon_mut(to)?;
                receiver.item = Some(item.clone());
                let label = receiver.log_label();
                let event = battle_event!(
                    "itemtransfer",
                    format!("mon:{label}"),
                    format!("item:{item}"),
                );
                self.log.push(event);
            }
            BattleAction::AddTag { target, tag } => {
                if self.mon(target)?.has_tag(&tag) {
                    return Ok(());
                }
                let mut args = PreApplyTagArgs::new(tag, None);
                apply_pre_apply_tag_attrs(self, target, &mut args, AttrSelector::Any, false).await;
                if args.cancelled {
                    return Ok(());
                }
                let mon = self.mon_mut(target)?;
                let event = battle_event!(
                    "addtag",
                    format!("mon:{}", mon.log_label()),
                    format!("tag:{}", args.tag),
                );
                mon.tags.insert(args.tag);
                self.log.push(event);
            }
        }
        Ok(())
    }
}

impl Clone for Battle {
    /// Clones the battle into independent state.
    ///
    /// The clone's random number generator continues from the same position as the original.
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            prng: self.prng.fork(),
            registry: self.registry.clone(),
            queue: self.queue.clone(),
            log: self.log.clone(),
            presentation: self.presentation.clone(),
            engine_options: self.engine_options.clone(),
        }
    }
}
