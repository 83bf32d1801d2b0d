use futures_util::FutureExt;

use crate::{
    abilities::{
        AbilityDefinition,
        AbilityRegistry,
    },
    battle::{
        AbilitySource,
        Battle,
        BattleState,
        MessageArgs,
        MonHandle,
        PresentationRequest,
    },
    battle_event,
    common::Identifiable,
    effect::{
        AttrSelector,
        EffectContext,
        Hook,
        Outcome,
        OutcomeDetail,
    },
    error::{
        Error,
        WrapResultError,
    },
};

/// Options for a single dispatch.
#[derive(Debug, Default)]
pub struct DispatchOptions<'m> {
    /// Effects compute whether they would apply, without leaving any trace on the battle.
    pub simulated: bool,
    /// Do not request presentation of abilities that apply.
    pub suppress_presentation: bool,
    /// Collects trigger messages, even when simulated.
    pub messages: Option<&'m mut Vec<String>>,
}

impl<'m> DispatchOptions<'m> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simulated(mut self, simulated: bool) -> Self {
        self.simulated = simulated;
        self
    }

    pub fn with_suppressed_presentation(mut self) -> Self {
        self.suppress_presentation = true;
        self
    }

    pub fn with_messages(mut self, messages: &'m mut Vec<String>) -> Self {
        self.messages = Some(messages);
        self
    }
}

/// Checks if an ability of the creature can currently be applied.
///
/// Ability-level conditions are not checked here, since they gate each effect individually.
pub fn can_apply_ability(
    state: &BattleState,
    registry: &AbilityRegistry,
    mon: MonHandle,
    ability: &AbilityDefinition,
) -> Result<bool, Error> {
    let creature = state.mon(mon)?;
    if state.field.ignore_abilities && ability.ignorable() {
        return Ok(false);
    }
    if creature.ability_suppressed && !ability.unsuppressable() {
        return Ok(false);
    }
    if creature.fainted() && !ability.bypass_faint() {
        return Ok(false);
    }
    if !ability.suppresses_field_abilities()
        && !ability.unsuppressable()
        && field_abilities_suppressed(state, registry, mon)?
    {
        return Ok(false);
    }
    Ok(true)
}

/// Checks if another creature on the field has an ability suppressing all other abilities.
fn field_abilities_suppressed(
    state: &BattleState,
    registry: &AbilityRegistry,
    mon: MonHandle,
) -> Result<bool, Error> {
    for (other, other_mon) in state.active_mons() {
        if other == mon {
            continue;
        }
        for source in other_mon.ability_sources() {
            let ability = match registry.get(&source.ability) {
                Some(ability) => ability,
                None => continue,
            };
            if ability.suppresses_field_abilities()
                && can_apply_ability(state, registry, other, ability)?
            {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Dispatches effects of one hook kind for a creature.
///
/// Ability sources are visited in order (active, passive, then granted), and effects within an
/// ability in declaration order. Every matching effect is visited, and an effect that completes
/// later is awaited before the next one runs.
///
/// Returns whether any effect applied. A dispatch that cannot resolve its creature is logged and
/// treated as if nothing applied.
pub async fn dispatch<H>(
    battle: &mut Battle,
    mon: MonHandle,
    args: &mut H::Args,
    selector: AttrSelector<H>,
    options: DispatchOptions<'_>,
) -> bool
where
    H: Hook,
{
    match dispatch_internal::<H>(battle, mon, args, &selector, options).await {
        Ok(applied) => applied,
        Err(error) => {
            log::error!("{} dispatch for mon {mon} aborted: {error:#}", H::KIND);
            battle.log_debug(battle_event!(
                "debug",
                "dispatchaborted",
                format!("hook:{}", H::KIND),
                format!("mon:{mon}"),
                format!("error:{error:#}"),
            ));
            false
        }
    }
}

/// Same as [`dispatch`], for hosts that cannot await.
///
/// Returns `None` if some effect could not complete immediately, in which case the remaining
/// effects were not visited.
pub fn dispatch_now<H>(
    battle: &mut Battle,
    mon: MonHandle,
    args: &mut H::Args,
    selector: AttrSelector<H>,
    options: DispatchOptions<'_>,
) -> Option<bool>
where
    H: Hook,
{
    let applied = dispatch::<H>(battle, mon, args, selector, options).now_or_never();
    if applied.is_none() {
        log::warn!(
            "{} dispatch for mon {mon} could not complete immediately; remaining effects were skipped",
            H::KIND
        );
    }
    applied
}

async fn dispatch_internal<H>(
    battle: &mut Battle,
    mon: MonHandle,
    args: &mut H::Args,
    selector: &AttrSelector<H>,
    mut options: DispatchOptions<'_>,
) -> Result<bool, Error>
where
    H: Hook,
{
    let sources = battle
        .mon(mon)
        .wrap_error_with_format(format_args!("cannot dispatch {} effects", H::KIND))?
        .ability_sources();
    // Definitions are shared, so the battle can be borrowed mutably while we iterate them.
    let registry = battle.registry().clone();
    let mut scratch_prng = options.simulated.then(|| battle.prng().fork());

    let mut applied = false;
    for source in sources {
        let ability = match registry.get(&source.ability) {
            Some(ability) => ability,
            None => {
                log::warn!("mon {mon} has unknown ability {}", source.ability);
                continue;
            }
        };
        if !can_apply_ability(battle.state(), &registry, mon, ability)? {
            log::trace!(
                "ability {} of mon {mon} cannot apply for {}",
                ability.id(),
                H::KIND
            );
            continue;
        }

        for entry in ability.entries() {
            let attr = match H::select(entry.attr()) {
                Some(attr) if selector.matches(attr) => attr,
                _ => continue,
            };
            let state = battle.state();
            if !entry.conditions_met(state.mon(mon)?, &state.field) {
                log::trace!(
                    "{} effect of ability {} for mon {mon} failed its conditions",
                    H::KIND,
                    ability.id()
                );
                continue;
            }

            log::trace!(
                "applying {} effect of ability {} for mon {mon}",
                H::KIND,
                ability.id()
            );
            let context = EffectContext::new(
                battle,
                mon,
                source.clone(),
                options.simulated,
                options.suppress_presentation,
                scratch_prng.as_mut(),
            );
            let outcome = match attr.apply(context, &mut *args).resolve().await {
                Ok(outcome) => outcome,
                Err(error) => {
                    log::error!(
                        "{} effect of ability {} for mon {mon} failed: {error:#}",
                        H::KIND,
                        ability.id()
                    );
                    continue;
                }
            };
            if !outcome.is_applied() {
                continue;
            }

            applied = true;
            record_application(
                battle,
                mon,
                AppliedEffect {
                    source: &source,
                    ability,
                    show_ability: entry.show_ability(),
                    message_key: attr.message_key(),
                    outcome,
                },
                &mut options,
            )?;
        }
    }
    Ok(applied)
}

struct AppliedEffect<'d> {
    source: &'d AbilitySource,
    ability: &'d AbilityDefinition,
    show_ability: bool,
    message_key: Option<&'static str>,
    outcome: Outcome,
}

fn record_application(
    battle: &mut Battle,
    mon: MonHandle,
    effect: AppliedEffect<'_>,
    options: &mut DispatchOptions<'_>,
) -> Result<(), Error> {
    let AppliedEffect {
        source,
        ability,
        show_ability,
        message_key,
        outcome,
    } = effect;
    log::debug!(
        "ability {} of mon {mon} applied{}",
        ability.id(),
        if options.simulated { " in simulation" } else { "" }
    );

    if !options.simulated {
        battle.mon_mut(mon)?.ledger.record(ability.id());
        if show_ability && !options.suppress_presentation {
            battle.request_presentation(PresentationRequest {
                mon,
                ability: ability.id().clone(),
                slot: source.slot,
            });
        }
        let creature = battle.mon(mon)?;
        for observer in battle.observers() {
            observer.ability_applied(creature, ability.id());
        }
    }

    let message = match message_key {
        Some(key) if !outcome.is_silent() => trigger_message(battle, mon, ability, key, &outcome)?,
        _ => None,
    };
    if let Some(message) = message {
        if !options.simulated {
            let event = battle_event!(
                "ability",
                format!("mon:{}", battle.mon(mon)?.log_label()),
                format!("ability:{}", ability.name()),
                format!("message:{message}"),
            );
            battle.log_mut().push(event);
        }
        if let Some(messages) = options.messages.as_mut() {
            messages.push(message);
        }
    }
    Ok(())
}

fn trigger_message(
    battle: &Battle,
    mon: MonHandle,
    ability: &AbilityDefinition,
    key: &str,
    outcome: &Outcome,
) -> Result<Option<String>, Error> {
    let mut args: MessageArgs = vec![
        ("mon", battle.mon(mon)?.name.clone()),
        ("ability", ability.name().to_owned()),
    ];
    if let Some(target) = outcome.target {
        args.push(("target", battle.mon(target)?.name.clone()));
    }
    match &outcome.detail {
        Some(OutcomeDetail::Status(status)) => args.push(("status", status.to_string())),
        Some(OutcomeDetail::Stat(stat, stages)) => {
            args.push(("stat", stat.to_string()));
            args.push(("stages", stages.to_string()));
        }
        Some(OutcomeDetail::Item(item)) => args.push(("item", item.to_string())),
        Some(OutcomeDetail::Weather(weather)) => args.push(("weather", weather.to_string())),
        Some(OutcomeDetail::Terrain(terrain)) => args.push(("terrain", terrain.to_string())),
        Some(OutcomeDetail::Tag(tag)) => args.push(("tag", tag.to_string())),
        Some(OutcomeDetail::Hp(amount)) => args.push(("amount", amount.to_string())),
        Some(OutcomeDetail::Type(typ)) => args.push(("type", typ.to_string())),
        None => (),
    }
    Ok(battle.localizer().translate(key, &args))
}
