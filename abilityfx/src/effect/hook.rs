use std::future::Future;

use futures_util::{
    FutureExt,
    future::BoxFuture,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::{
        BattleStat,
        MonHandle,
        Status,
        Terrain,
        Type,
        Weather,
    },
    common::Id,
    effect::{
        AbilityAttr,
        EffectContext,
    },
    error::Error,
};

/// A battle event that ability effects bind to.
///
/// Every effect variant belongs to exactly one hook kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum HookKind {
    #[string = "PreAttack"]
    PreAttack,
    #[string = "PostAttack"]
    PostAttack,
    #[string = "PreDefend"]
    PreDefend,
    #[string = "PostDefend"]
    PostDefend,
    #[string = "PreSetStatus"]
    PreSetStatus,
    #[string = "PreApplyTag"]
    PreApplyTag,
    #[string = "PreStatStageChange"]
    PreStatStageChange,
    #[string = "PostSummon"]
    PostSummon,
    #[string = "PreSwitchOut"]
    PreSwitchOut,
    #[string = "PostTurn"]
    PostTurn,
    #[string = "PostWeatherLapse"]
    PostWeatherLapse,
    #[string = "PostFaint"]
    PostFaint,
    #[string = "PostKnockOut"]
    PostKnockOut,
    #[string = "PostVictory"]
    PostVictory,
    #[string = "CheckTrapped"]
    CheckTrapped,
    #[string = "StatMultiplier"]
    StatMultiplier,
    #[string = "MovePriority"]
    MovePriority,
    #[string = "CriticalHit"]
    CriticalHit,
}

/// What took part in an effect that applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeDetail {
    Status(Status),
    Stat(BattleStat, i8),
    Item(Id),
    Weather(Weather),
    Terrain(Terrain),
    Tag(Id),
    Hp(u32),
    Type(Type),
}

/// The result of applying a single effect.
///
/// Participants are reported per call, so that messages can be formatted without storing
/// anything on the shared ability definition.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outcome {
    applied: bool,
    silent: bool,
    pub target: Option<MonHandle>,
    pub detail: Option<OutcomeDetail>,
}

impl Outcome {
    /// The effect did not take hold.
    pub fn not_applied() -> Self {
        Self::default()
    }

    /// The effect took hold.
    pub fn applied() -> Self {
        Self {
            applied: true,
            ..Default::default()
        }
    }

    /// The effect took hold on some target.
    pub fn on(target: MonHandle) -> Self {
        Self {
            applied: true,
            target: Some(target),
            ..Default::default()
        }
    }

    pub fn from_bool(applied: bool) -> Self {
        Self {
            applied,
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, detail: OutcomeDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// The effect took hold, but no trigger message should be produced.
    pub fn silently(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

/// The result of [`Hook::apply`], which may be available immediately or later.
pub enum Applied<'a> {
    Ready(Result<Outcome, Error>),
    Deferred(BoxFuture<'a, Result<Outcome, Error>>),
}

impl<'a> Applied<'a> {
    pub fn ready(outcome: Outcome) -> Self {
        Self::Ready(Ok(outcome))
    }

    pub fn failed(error: Error) -> Self {
        Self::Ready(Err(error))
    }

    /// Wraps a future that resolves to the outcome.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<Outcome, Error>> + Send + 'a,
    {
        Self::Deferred(future.boxed())
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Waits for the outcome.
    pub async fn resolve(self) -> Result<Outcome, Error> {
        match self {
            Self::Ready(result) => result,
            Self::Deferred(future) => future.await,
        }
    }
}

impl From<Outcome> for Applied<'_> {
    fn from(value: Outcome) -> Self {
        Self::ready(value)
    }
}

impl From<Result<Outcome, Error>> for Applied<'_> {
    fn from(value: Result<Outcome, Error>) -> Self {
        Self::Ready(value)
    }
}

/// How faithfully an effect's simulated run reflects its real run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationFidelity {
    /// Simulation computes exactly what the real run would.
    Exact,
    /// Simulation must rely on a provisional decision from a collaborator that the real run may
    /// overturn.
    Provisional,
}

/// Selects an effect variant out of [`AbilityAttr`].
///
/// Implemented for each hook kind's effect enum.
pub trait SelectAttr: Sized {
    const KIND: HookKind;

    fn select(attr: &AbilityAttr) -> Option<&Self>;
}

/// An effect that runs for one [`HookKind`].
pub trait Hook: SelectAttr + Send + Sync + 'static {
    /// Arguments for the hook, which effects may write results into.
    type Args: Send;

    /// Applies the effect.
    ///
    /// Side effects must be queued through the context, never performed inline.
    fn apply<'a>(&'a self, context: EffectContext<'a>, args: &'a mut Self::Args) -> Applied<'a>;

    /// The localization key of the message shown when the effect applies.
    fn message_key(&self) -> Option<&'static str> {
        None
    }

    fn simulation_fidelity(&self) -> SimulationFidelity {
        SimulationFidelity::Exact
    }
}

/// Narrows which effects of a hook kind are dispatched.
pub enum AttrSelector<H> {
    Any,
    Matching(fn(&H) -> bool),
}

impl<H> AttrSelector<H> {
    pub fn matches(&self, attr: &H) -> bool {
        match self {
            Self::Any => true,
            Self::Matching(filter) => filter(attr),
        }
    }
}
