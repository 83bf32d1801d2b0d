use abilityfx::{
    battle::{
        Battle,
        MonData,
        Move,
        MoveCategory,
        Type,
    },
    effect::{
        AttrSelector,
        PreDefendArgs,
        apply_pre_defend_attrs,
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
            name: "Lanturn".to_owned(),
            side: 0,
            types: Vec::from([Type::Water, Type::Electric]),
            ability: "Volt Absorb".to_owned(),
            ..Default::default()
        })
        .add_mon(MonData {
            name: "Jolteon".to_owned(),
            side: 1,
            types: Vec::from([Type::Electric]),
            ability: "".to_owned(),
            ..Default::default()
        })
        .build()
}

fn thunderbolt() -> Move {
    Move::new("Thunderbolt", Type::Electric, MoveCategory::Special, 90)
}

#[tokio::test]
async fn absorbs_electric_move_and_heals() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (lanturn, jolteon) = (handles[0], handles[1]);
    battle.mon_mut(lanturn).unwrap().hp = 50;

    let mut args = PreDefendArgs::new(jolteon, thunderbolt());
    assert!(
        apply_pre_defend_attrs(&mut battle, lanturn, &mut args, AttrSelector::Any, false).await
    );
    assert!(args.cancelled);

    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Lanturn,0|ability:Volt Absorb|message:It doesn't affect Lanturn thanks to its Volt Absorb!",
            "heal|mon:Lanturn,0|health:75/100",
        ],
    );
}

#[tokio::test]
async fn still_immune_at_full_hp() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (lanturn, jolteon) = (handles[0], handles[1]);

    let mut args = PreDefendArgs::new(jolteon, thunderbolt());
    assert!(
        apply_pre_defend_attrs(&mut battle, lanturn, &mut args, AttrSelector::Any, false).await
    );
    assert!(args.cancelled);
    assert!(battle.queue().is_empty());
}

#[tokio::test]
async fn ignores_other_move_types() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (lanturn, jolteon) = (handles[0], handles[1]);

    let mut args = PreDefendArgs::new(
        jolteon,
        Move::new("Quick Attack", Type::Normal, MoveCategory::Physical, 40),
    );
    assert!(
        !apply_pre_defend_attrs(&mut battle, lanturn, &mut args, AttrSelector::Any, false).await
    );
    assert!(!args.cancelled);
}

#[tokio::test]
async fn ignored_when_field_ignores_abilities() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (lanturn, jolteon) = (handles[0], handles[1]);
    battle.field_mut().ignore_abilities = true;

    let mut args = PreDefendArgs::new(jolteon, thunderbolt());
    assert!(
        !apply_pre_defend_attrs(&mut battle, lanturn, &mut args, AttrSelector::Any, false).await
    );
}
