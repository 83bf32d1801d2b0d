use crate::{
    battle::{
        BattleStat,
        MonHandle,
        Status,
    },
    common::Id,
    effect::{
        Applied,
        CustomEffect,
        EffectContext,
        Hook,
        Outcome,
        OutcomeDetail,
    },
};

/// Arguments for effects that run before a status is set on the creature.
#[derive(Debug, Clone)]
pub struct PreSetStatusArgs {
    pub status: Status,
    pub source: Option<MonHandle>,
    /// The status should not be set.
    pub cancelled: bool,
    /// No message should be shown if the status is prevented.
    pub quiet: bool,
}

impl PreSetStatusArgs {
    pub fn new(status: Status, source: Option<MonHandle>) -> Self {
        Self {
            status,
            source,
            cancelled: false,
            quiet: false,
        }
    }
}

/// Effects that run before a status is set on the creature.
#[derive(Debug, Clone)]
pub enum PreSetStatusAttr {
    /// Prevents the statuses, or every status if empty.
    StatusImmunity { statuses: Vec<Status> },
    Custom(CustomEffect<PreSetStatusArgs>),
}

impl Hook for PreSetStatusAttr {
    type Args = PreSetStatusArgs;

    fn apply<'a>(
        &'a self,
        context: EffectContext<'a>,
        args: &'a mut PreSetStatusArgs,
    ) -> Applied<'a> {
        match self {
            Self::StatusImmunity { statuses } => {
                if !statuses.is_empty() && !statuses.contains(&args.status) {
                    return Outcome::not_applied().into();
                }
                args.cancelled = true;
                let outcome = Outcome::applied().with_detail(OutcomeDetail::Status(args.status));
                if args.quiet {
                    outcome.silently().into()
                } else {
                    outcome.into()
                }
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::StatusImmunity { .. } => Some("ability.status_immune"),
            Self::Custom(_) => None,
        }
    }
}

/// Arguments for effects that run before a volatile tag is applied to the creature.
#[derive(Debug, Clone)]
pub struct PreApplyTagArgs {
    pub tag: Id,
    pub source: Option<MonHandle>,
    /// The tag should not be applied.
    pub cancelled: bool,
    /// No message should be shown if the tag is prevented.
    pub quiet: bool,
}

impl PreApplyTagArgs {
    pub fn new<T>(tag: T, source: Option<MonHandle>) -> Self
    where
        T: Into<Id>,
    {
        Self {
            tag: tag.into(),
            source,
            cancelled: false,
            quiet: false,
        }
    }
}

/// Effects that run before a volatile tag is applied to the creature.
#[derive(Debug, Clone)]
pub enum PreApplyTagAttr {
    TagImmunity { tags: Vec<Id> },
    Custom(CustomEffect<PreApplyTagArgs>),
}

impl Hook for PreApplyTagAttr {
    type Args = PreApplyTagArgs;

    fn apply<'a>(
        &'a self,
        context: EffectContext<'a>,
        args: &'a mut PreApplyTagArgs,
    ) -> Applied<'a> {
        match self {
            Self::TagImmunity { tags } => {
                if !tags.contains(&args.tag) {
                    return Outcome::not_applied().into();
                }
                args.cancelled = true;
                let outcome = Outcome::applied().with_detail(OutcomeDetail::Tag(args.tag.clone()));
                if args.quiet {
                    outcome.silently().into()
                } else {
                    outcome.into()
                }
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::TagImmunity { .. } => Some("ability.tag_immune"),
            Self::Custom(_) => None,
        }
    }
}

/// Arguments for effects that run before a stat stage of the creature changes.
#[derive(Debug, Clone)]
pub struct PreStatStageChangeArgs {
    pub stat: BattleStat,
    pub stages: i8,
    pub source: Option<MonHandle>,
    /// The stage change should not happen.
    pub cancelled: bool,
}

impl PreStatStageChangeArgs {
    pub fn new(stat: BattleStat, stages: i8, source: Option<MonHandle>) -> Self {
        Self {
            stat,
            stages,
            source,
            cancelled: false,
        }
    }
}

/// Effects that run before a stat stage of the creature changes.
#[derive(Debug, Clone)]
pub enum PreStatStageChangeAttr {
    /// Prevents other creatures from lowering the stat, or every stat if unset.
    ProtectStats { stat: Option<BattleStat> },
    Custom(CustomEffect<PreStatStageChangeArgs>),
}

impl Hook for PreStatStageChangeAttr {
    type Args = PreStatStageChangeArgs;

    fn apply<'a>(
        &'a self,
        context: EffectContext<'a>,
        args: &'a mut PreStatStageChangeArgs,
    ) -> Applied<'a> {
        match self {
            Self::ProtectStats { stat } => {
                if args.stages >= 0
                    || args.source == Some(context.mon_handle())
                    || stat.is_some_and(|stat| stat != args.stat)
                {
                    return Outcome::not_applied().into();
                }
                args.cancelled = true;
                Outcome::applied()
                    .with_detail(OutcomeDetail::Stat(args.stat, args.stages))
                    .into()
            }
            Self::Custom(effect) => effect.apply(context, args),
        }
    }

    fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::ProtectStats { .. } => Some("ability.protect_stats"),
            Self::Custom(_) => None,
        }
    }
}
