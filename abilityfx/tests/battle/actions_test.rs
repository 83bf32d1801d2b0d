use abilityfx::{
    battle::{
        Battle,
        BattleAction,
        MonData,
        Type,
    },
    common::Id,
    effect::{
        AttrSelector,
        PostSummonArgs,
        apply_post_summon_attrs,
    },
};
use abilityfx_test_utils::{
    TestBattleBuilder,
    assert_error_message,
    assert_error_message_contains,
    assert_new_logs_eq,
};
use anyhow::Result;

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_debug_logs(true)
        .add_mon(MonData {
            name: "Chansey".to_owned(),
            types: Vec::from([Type::Normal]),
            ability: "Natural Cure".to_owned(),
            ..Default::default()
        })
        .build()
}

fn foreign_mon_handle() -> abilityfx::battle::MonHandle {
    let mut larger = make_battle().unwrap();
    larger.add_mon(MonData::default());
    larger.mon_handles()[1]
}

#[tokio::test]
async fn heal_stops_at_max_hp() {
    let mut battle = make_battle().unwrap();
    let chansey = battle.mon_handles()[0];
    battle.mon_mut(chansey).unwrap().hp = 50;

    battle.queue_mut().push(BattleAction::Heal {
        target: chansey,
        amount: u32::MAX,
    });
    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert_eq!(battle.mon(chansey).unwrap().hp, 100);
    assert_new_logs_eq(&mut battle, &["heal|mon:Chansey,0|health:100/100"]);
}

#[tokio::test]
async fn action_for_unknown_mon_fails_to_resolve() {
    let mut battle = make_battle().unwrap();
    battle.queue_mut().push(BattleAction::Damage {
        target: foreign_mon_handle(),
        amount: 10,
        source: None,
    });
    assert_error_message_contains(
        battle.resolve_actions().await,
        "failed to resolve queued action: mon 1 not found",
    );
}

#[tokio::test]
async fn aborted_dispatch_leaves_debug_log() {
    let mut battle = make_battle().unwrap();
    assert!(
        !apply_post_summon_attrs(
            &mut battle,
            foreign_mon_handle(),
            &mut PostSummonArgs,
            AttrSelector::Any,
            false
        )
        .await
    );
    pretty_assertions::assert_eq!(
        battle.new_log_entries(),
        [
            "debug|dispatchaborted|hook:PostSummon|mon:1|error:cannot dispatch PostSummon effects: mon 1 not found"
        ]
    );
}

#[test]
fn unknown_ability_is_not_found() {
    let battle = make_battle().unwrap();
    assert_error_message(
        battle.registry().lookup(&Id::from("Guts")),
        "ability guts not found",
    );
}
