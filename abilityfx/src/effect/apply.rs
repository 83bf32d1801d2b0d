use crate::{
    battle::{
        Battle,
        MonHandle,
    },
    effect::{
        AttrSelector,
        CheckTrappedArgs,
        CheckTrappedAttr,
        CriticalHitArgs,
        CriticalHitAttr,
        DispatchOptions,
        MovePriorityArgs,
        MovePriorityAttr,
        PostAttackArgs,
        PostAttackAttr,
        PostDefendArgs,
        PostDefendAttr,
        PostFaintArgs,
        PostFaintAttr,
        PostKnockOutArgs,
        PostKnockOutAttr,
        PostSummonArgs,
        PostSummonAttr,
        PostTurnArgs,
        PostTurnAttr,
        PostVictoryArgs,
        PostVictoryAttr,
        PostWeatherLapseArgs,
        PostWeatherLapseAttr,
        PreApplyTagArgs,
        PreApplyTagAttr,
        PreAttackArgs,
        PreAttackAttr,
        PreDefendArgs,
        PreDefendAttr,
        PreSetStatusArgs,
        PreSetStatusAttr,
        PreStatStageChangeArgs,
        PreStatStageChangeAttr,
        PreSwitchOutArgs,
        PreSwitchOutAttr,
        StatMultiplierArgs,
        StatMultiplierAttr,
        dispatch,
    },
};

// One entry point per hook kind, so that hosts never name the hook type directly.
macro_rules! apply_attrs {
    ($($(#[$meta:meta])* $name:ident => $attr:ty, $args:ty;)*) => {
        $(
            $(#[$meta])*
            pub async fn $name(
                battle: &mut Battle,
                mon: MonHandle,
                args: &mut $args,
                selector: AttrSelector<$attr>,
                simulated: bool,
            ) -> bool {
                dispatch(
                    battle,
                    mon,
                    args,
                    selector,
                    DispatchOptions::new().with_simulated(simulated),
                )
                .await
            }
        )*
    };
}

apply_attrs! {
    /// Applies effects before the creature's move hits.
    apply_pre_attack_attrs => PreAttackAttr, PreAttackArgs;
    /// Applies effects after the creature's move hits a target.
    apply_post_attack_attrs => PostAttackAttr, PostAttackArgs;
    /// Applies effects before the creature is hit by a move.
    apply_pre_defend_attrs => PreDefendAttr, PreDefendArgs;
    /// Applies effects after the creature is hit by a move.
    apply_post_defend_attrs => PostDefendAttr, PostDefendArgs;
    /// Applies effects before a status is set on the creature.
    apply_pre_set_status_attrs => PreSetStatusAttr, PreSetStatusArgs;
    /// Applies effects before a volatile tag is applied to the creature.
    apply_pre_apply_tag_attrs => PreApplyTagAttr, PreApplyTagArgs;
    /// Applies effects before a stat stage of the creature changes.
    apply_pre_stat_stage_change_attrs => PreStatStageChangeAttr, PreStatStageChangeArgs;
    /// Applies effects when the creature enters the field.
    apply_post_summon_attrs => PostSummonAttr, PostSummonArgs;
    /// Applies effects before the creature leaves the field.
    apply_pre_switch_out_attrs => PreSwitchOutAttr, PreSwitchOutArgs;
    /// Applies effects at the end of a turn.
    apply_post_turn_attrs => PostTurnAttr, PostTurnArgs;
    /// Applies effects when the weather continues at the end of a turn.
    apply_post_weather_lapse_attrs => PostWeatherLapseAttr, PostWeatherLapseArgs;
    /// Applies effects when the creature faints.
    apply_post_faint_attrs => PostFaintAttr, PostFaintArgs;
    /// Applies effects when another creature is knocked out.
    apply_post_knock_out_attrs => PostKnockOutAttr, PostKnockOutArgs;
    /// Applies effects when the creature knocks out a target.
    apply_post_victory_attrs => PostVictoryAttr, PostVictoryArgs;
    /// Applies effects that modify one of the creature's stats.
    apply_stat_multiplier_attrs => StatMultiplierAttr, StatMultiplierArgs;
    /// Applies effects that modify the priority of the creature's move.
    apply_move_priority_attrs => MovePriorityAttr, MovePriorityArgs;
    /// Applies effects on a critical hit decision involving the creature.
    apply_critical_hit_attrs => CriticalHitAttr, CriticalHitArgs;
}

/// Applies effects of the creature that may trap an opponent.
///
/// Trapping is usually checked while choosing actions, so trigger messages are collected into
/// `messages` whether or not the dispatch is simulated.
pub async fn apply_check_trapped_attrs(
    battle: &mut Battle,
    mon: MonHandle,
    args: &mut CheckTrappedArgs,
    selector: AttrSelector<CheckTrappedAttr>,
    messages: &mut Vec<String>,
    simulated: bool,
) -> bool {
    dispatch(
        battle,
        mon,
        args,
        selector,
        DispatchOptions::new()
            .with_simulated(simulated)
            .with_messages(messages),
    )
    .await
}
