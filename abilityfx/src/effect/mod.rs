mod apply;
mod attrs;
mod condition;
mod context;
mod dispatch;
mod hook;
mod trigger;

pub use apply::{
    apply_check_trapped_attrs,
    apply_critical_hit_attrs,
    apply_move_priority_attrs,
    apply_post_attack_attrs,
    apply_post_defend_attrs,
    apply_post_faint_attrs,
    apply_post_knock_out_attrs,
    apply_post_summon_attrs,
    apply_post_turn_attrs,
    apply_post_victory_attrs,
    apply_post_weather_lapse_attrs,
    apply_pre_apply_tag_attrs,
    apply_pre_attack_attrs,
    apply_pre_defend_attrs,
    apply_pre_set_status_attrs,
    apply_pre_stat_stage_change_attrs,
    apply_pre_switch_out_attrs,
    apply_stat_multiplier_attrs,
};
pub use attrs::{
    AbilityAttr,
    CheckTrappedArgs,
    CheckTrappedAttr,
    CriticalHitArgs,
    CriticalHitAttr,
    CriticalHitRole,
    CustomEffect,
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
};
pub use condition::{
    Condition,
    all_conditions_met,
};
pub use context::EffectContext;
pub use dispatch::{
    DispatchOptions,
    can_apply_ability,
    dispatch,
    dispatch_now,
};
pub use hook::{
    Applied,
    AttrSelector,
    Hook,
    HookKind,
    Outcome,
    OutcomeDetail,
    SelectAttr,
    SimulationFidelity,
};
pub use trigger::{
    AttackPredicate,
    AttackTrigger,
    DefendPredicate,
    DefendTrigger,
    FaintPredicate,
    FaintTrigger,
    FieldPredicate,
    FieldTrigger,
    KnockOutTrigger,
    OpponentPredicate,
    PredicateLibrary,
    Trigger,
    TriggerData,
    VictoryPredicate,
    VictoryTrigger,
    evaluate_attack_trigger,
    evaluate_defend_trigger,
    evaluate_faint_trigger,
    evaluate_field_trigger,
    evaluate_knockout_trigger,
    evaluate_victory_trigger,
    resolve_trigger,
};
