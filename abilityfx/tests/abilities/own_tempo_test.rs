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
        PreApplyTagArgs,
        apply_pre_apply_tag_attrs,
    },
};
use abilityfx_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
};
use anyhow::Result;

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon(MonData {
            name: "Slowpoke".to_owned(),
            side: 0,
            types: Vec::from([Type::Water, Type::Psychic]),
            ability: "Own Tempo".to_owned(),
            ..Default::default()
        })
        .build()
}

#[tokio::test]
async fn prevents_confusion_tag() {
    let mut battle = make_battle().unwrap();
    let slowpoke = battle.mon_handles()[0];

    battle.queue_mut().push(BattleAction::AddTag {
        target: slowpoke,
        tag: Id::from("confusion"),
    });
    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert!(!battle.mon(slowpoke).unwrap().has_tag(&Id::from("confusion")));
    assert_new_logs_eq(
        &mut battle,
        &["ability|mon:Slowpoke,0|ability:Own Tempo|message:Slowpoke's Own Tempo prevents confusion!"],
    );
}

#[tokio::test]
async fn allows_other_tags() {
    let mut battle = make_battle().unwrap();
    let slowpoke = battle.mon_handles()[0];

    battle.queue_mut().push(BattleAction::AddTag {
        target: slowpoke,
        tag: Id::from("taunt"),
    });
    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert!(battle.mon(slowpoke).unwrap().has_tag(&Id::from("taunt")));
    assert_new_logs_eq(&mut battle, &["addtag|mon:Slowpoke,0|tag:taunt"]);
}

#[tokio::test]
async fn quiet_prevention_shows_no_message() {
    let mut battle = make_battle().unwrap();
    let slowpoke = battle.mon_handles()[0];

    let mut args = PreApplyTagArgs::new("confusion", None);
    args.quiet = true;
    assert!(
        apply_pre_apply_tag_attrs(&mut battle, slowpoke, &mut args, AttrSelector::Any, false)
            .await
    );
    assert!(args.cancelled);
    assert_new_logs_eq(&mut battle, &[]);
}
