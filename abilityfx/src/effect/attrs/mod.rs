mod attack;
mod defend;
mod faint;
mod field;
mod immunity;
mod modifiers;

use std::{
    fmt,
    sync::Arc,
};

pub use attack::{
    PostAttackArgs,
    PostAttackAttr,
    PreAttackArgs,
    PreAttackAttr,
};
pub use defend::{
    PostDefendArgs,
    PostDefendAttr,
    PreDefendArgs,
    PreDefendAttr,
};
pub use faint::{
    PostFaintArgs,
    PostFaintAttr,
    PostKnockOutArgs,
    PostKnockOutAttr,
    PostVictoryArgs,
    PostVictoryAttr,
};
pub use field::{
    PostSummonArgs,
    PostSummonAttr,
    PostTurnArgs,
    PostTurnAttr,
    PostWeatherLapseArgs,
    PostWeatherLapseAttr,
    PreSwitchOutArgs,
    PreSwitchOutAttr,
};
pub use immunity::{
    PreApplyTagArgs,
    PreApplyTagAttr,
    PreSetStatusArgs,
    PreSetStatusAttr,
    PreStatStageChangeArgs,
    PreStatStageChangeAttr,
};
pub use modifiers::{
    CheckTrappedArgs,
    CheckTrappedAttr,
    CriticalHitArgs,
    CriticalHitAttr,
    CriticalHitRole,
    MovePriorityArgs,
    MovePriorityAttr,
    StatMultiplierArgs,
    StatMultiplierAttr,
};

use crate::effect::{
    Applied,
    EffectContext,
    Hook,
    HookKind,
    SelectAttr,
    SimulationFidelity,
};

/// An effect implemented by custom code, for behavior the built-in variants do not cover.
pub struct CustomEffect<A>(
    Arc<dyn for<'a> Fn(EffectContext<'a>, &'a mut A) -> Applied<'a> + Send + Sync>,
);

impl<A> CustomEffect<A> {
    pub fn new<F>(effect: F) -> Self
    where
        F: for<'a> Fn(EffectContext<'a>, &'a mut A) -> Applied<'a> + Send + Sync + 'static,
    {
        Self(Arc::new(effect))
    }

    pub(crate) fn apply<'a>(&'a self, context: EffectContext<'a>, args: &'a mut A) -> Applied<'a> {
        (self.0)(context, args)
    }
}

impl<A> Clone for CustomEffect<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> fmt::Debug for CustomEffect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomEffect")
    }
}

// Generates the top-level attribute enum, which holds exactly one variant per hook kind.
macro_rules! ability_attrs {
    ($($kind:ident => $attr:ident($args:ty)),* $(,)?) => {
        /// A single effect of an ability, bound to exactly one [`HookKind`].
        #[derive(Debug, Clone)]
        pub enum AbilityAttr {
            $($kind($attr),)*
        }

        impl AbilityAttr {
            pub fn hook_kind(&self) -> HookKind {
                match self {
                    $(Self::$kind(_) => HookKind::$kind,)*
                }
            }

            pub fn message_key(&self) -> Option<&'static str> {
                match self {
                    $(Self::$kind(attr) => attr.message_key(),)*
                }
            }

            pub fn simulation_fidelity(&self) -> SimulationFidelity {
                match self {
                    $(Self::$kind(attr) => attr.simulation_fidelity(),)*
                }
            }
        }

        $(
            impl From<$attr> for AbilityAttr {
                fn from(value: $attr) -> Self {
                    Self::$kind(value)
                }
            }

            impl SelectAttr for $attr {
                const KIND: HookKind = HookKind::$kind;

                fn select(attr: &AbilityAttr) -> Option<&Self> {
                    match attr {
                        AbilityAttr::$kind(attr) => Some(attr),
                        _ => None,
                    }
                }
            }

            impl $attr {
                /// Creates an effect implemented by custom code.
                pub fn custom<F>(effect: F) -> Self
                where
                    F: for<'a> Fn(EffectContext<'a>, &'a mut $args) -> Applied<'a>
                        + Send
                        + Sync
                        + 'static,
                {
                    Self::Custom(CustomEffect::new(effect))
                }
            }
        )*
    };
}

ability_attrs! {
    PreAttack => PreAttackAttr(PreAttackArgs),
    PostAttack => PostAttackAttr(PostAttackArgs),
    PreDefend => PreDefendAttr(PreDefendArgs),
    PostDefend => PostDefendAttr(PostDefendArgs),
    PreSetStatus => PreSetStatusAttr(PreSetStatusArgs),
    PreApplyTag => PreApplyTagAttr(PreApplyTagArgs),
    PreStatStageChange => PreStatStageChangeAttr(PreStatStageChangeArgs),
    PostSummon => PostSummonAttr(PostSummonArgs),
    PreSwitchOut => PreSwitchOutAttr(PreSwitchOutArgs),
    PostTurn => PostTurnAttr(PostTurnArgs),
    PostWeatherLapse => PostWeatherLapseAttr(PostWeatherLapseArgs),
    PostFaint => PostFaintAttr(PostFaintArgs),
    PostKnockOut => PostKnockOutAttr(PostKnockOutArgs),
    PostVictory => PostVictoryAttr(PostVictoryArgs),
    CheckTrapped => CheckTrappedAttr(CheckTrappedArgs),
    StatMultiplier => StatMultiplierAttr(StatMultiplierArgs),
    MovePriority => MovePriorityAttr(MovePriorityArgs),
    CriticalHit => CriticalHitAttr(CriticalHitArgs),
}
