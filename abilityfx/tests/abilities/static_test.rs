use abilityfx::{
    battle::{
        AbilitySlot,
        Battle,
        MonData,
        MonHandle,
        Move,
        MoveCategory,
        MoveFlag,
        PresentationRequest,
        Status,
        Type,
    },
    common::Id,
    effect::{
        AttrSelector,
        PostDefendArgs,
        apply_post_defend_attrs,
    },
};
use abilityfx_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
};
use anyhow::Result;

fn pikachu() -> MonData {
    serde_json::from_str(
        r#"{
            "name": "Pikachu",
            "side": 1,
            "types": ["Electric"],
            "ability": "Static"
        }"#,
    )
    .unwrap()
}

fn rattata() -> MonData {
    serde_json::from_str(
        r#"{
            "name": "Rattata",
            "side": 0,
            "types": ["Normal"],
            "ability": ""
        }"#,
    )
    .unwrap()
}

fn tackle() -> Move {
    Move::new("Tackle", Type::Normal, MoveCategory::Physical, 40).with_flag(MoveFlag::Contact)
}

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_mon(pikachu())
        .add_mon(rattata())
        .build()
}

fn handles(battle: &Battle) -> (MonHandle, MonHandle) {
    let handles = battle.mon_handles();
    (handles[0], handles[1])
}

#[tokio::test]
async fn paralyzes_attacker_when_draw_is_below_chance() {
    let mut battle = make_battle().unwrap();
    let (pikachu, rattata) = handles(&battle);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 29);

    let mut args = PostDefendArgs::new(rattata, tackle(), 10);
    assert!(
        apply_post_defend_attrs(&mut battle, pikachu, &mut args, AttrSelector::Any, false)
            .await
    );
    assert_eq!(battle.queue().len(), 1);
    pretty_assertions::assert_eq!(
        battle.presentation_requests(),
        [PresentationRequest {
            mon: pikachu,
            ability: Id::from("static"),
            slot: AbilitySlot::Active,
        }]
    );

    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert_eq!(battle.mon(rattata).unwrap().status, Some(Status::Paralysis));
    assert_new_logs_eq(&mut battle, &["status|mon:Rattata,0|status:Paralysis"]);
}

#[tokio::test]
async fn does_not_paralyze_when_draw_meets_chance() {
    let mut battle = make_battle().unwrap();
    let (pikachu, rattata) = handles(&battle);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 30);

    let mut args = PostDefendArgs::new(rattata, tackle(), 10);
    assert!(
        !apply_post_defend_attrs(&mut battle, pikachu, &mut args, AttrSelector::Any, false)
            .await
    );
    assert!(battle.queue().is_empty());
    assert!(battle.presentation_requests().is_empty());
    assert_eq!(
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .sequence_count(),
        1
    );
}

#[tokio::test]
async fn ignores_moves_without_contact() {
    let mut battle = make_battle().unwrap();
    let (pikachu, rattata) = handles(&battle);

    let swift = Move::new("Swift", Type::Normal, MoveCategory::Special, 60);
    let mut args = PostDefendArgs::new(rattata, swift, 10);
    assert!(
        !apply_post_defend_attrs(&mut battle, pikachu, &mut args, AttrSelector::Any, false)
            .await
    );
    // No draw is made when contact is not made.
    assert_eq!(
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .sequence_count(),
        0
    );
}

#[tokio::test]
async fn does_not_replace_existing_status() {
    let mut battle = make_battle().unwrap();
    let (pikachu, rattata) = handles(&battle);
    battle.mon_mut(rattata).unwrap().status = Some(Status::Burn);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 0);

    let mut args = PostDefendArgs::new(rattata, tackle(), 10);
    assert!(
        !apply_post_defend_attrs(&mut battle, pikachu, &mut args, AttrSelector::Any, false)
            .await
    );
}

#[tokio::test]
async fn limber_prevents_paralysis() {
    let mut battle = make_battle().unwrap();
    let (pikachu, rattata) = handles(&battle);
    battle.mon_mut(rattata).unwrap().ability = Id::from("Limber");
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 0);

    let mut args = PostDefendArgs::new(rattata, tackle(), 10);
    assert!(
        apply_post_defend_attrs(&mut battle, pikachu, &mut args, AttrSelector::Any, false)
            .await
    );
    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert_eq!(battle.mon(rattata).unwrap().status, None);
    assert_new_logs_eq(
        &mut battle,
        &["ability|mon:Rattata,0|ability:Limber|message:Rattata's Limber prevents Paralysis!"],
    );
}

#[tokio::test]
async fn each_contact_draws_independently() {
    let mut battle = make_battle().unwrap();
    let (pikachu, rattata) = handles(&battle);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values([(1, 75), (2, 99), (3, 12)]);

    let results = [
        apply_post_defend_attrs(
            &mut battle,
            pikachu,
            &mut PostDefendArgs::new(rattata, tackle(), 10),
            AttrSelector::Any,
            false,
        )
        .await,
        apply_post_defend_attrs(
            &mut battle,
            pikachu,
            &mut PostDefendArgs::new(rattata, tackle(), 10),
            AttrSelector::Any,
            false,
        )
        .await,
        apply_post_defend_attrs(
            &mut battle,
            pikachu,
            &mut PostDefendArgs::new(rattata, tackle(), 10),
            AttrSelector::Any,
            false,
        )
        .await,
    ];
    assert_eq!(results, [false, false, true]);
    assert_eq!(
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .sequence_count(),
        3
    );
}
