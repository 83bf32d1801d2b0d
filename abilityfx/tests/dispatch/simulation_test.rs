use std::sync::Arc;

use abilityfx::{
    battle::{
        Battle,
        BattleStat,
        MonData,
        Move,
        MoveCategory,
        MoveFlag,
        Type,
    },
    common::Id,
    effect::{
        AttrSelector,
        DispatchOptions,
        PostDefendArgs,
        PostDefendAttr,
        PostSummonArgs,
        PostSummonAttr,
        apply_post_defend_attrs,
        apply_post_summon_attrs,
        dispatch,
    },
};
use abilityfx_test_utils::{
    RecordingObserver,
    TestBattleBuilder,
    assert_new_logs_eq,
};
use anyhow::Result;

fn make_battle(seed: u64, observer: Arc<RecordingObserver>) -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(seed)
        .with_observer(observer)
        .add_mon(MonData {
            name: "Gyarados".to_owned(),
            side: 0,
            types: Vec::from([Type::Water, Type::Flying]),
            ability: "Intimidate".to_owned(),
            ..Default::default()
        })
        .add_mon(MonData {
            name: "Pikachu".to_owned(),
            side: 1,
            types: Vec::from([Type::Electric]),
            ability: "Static".to_owned(),
            ..Default::default()
        })
        .build()
}

fn tackle() -> Move {
    Move::new("Tackle", Type::Normal, MoveCategory::Physical, 40).with_flag(MoveFlag::Contact)
}

#[tokio::test]
async fn simulated_chance_matches_real_dispatch_on_clone() {
    let mut applied_count = 0;
    for seed in 0..100 {
        let observer = Arc::new(RecordingObserver::new());
        let mut battle = make_battle(seed, observer.clone()).unwrap();
        let handles = battle.mon_handles();
        let (gyarados, pikachu) = (handles[0], handles[1]);
        let mut real = battle.clone();
        let mut reference = battle.clone();

        let mut args = PostDefendArgs::new(gyarados, tackle(), 10);
        let simulated =
            apply_post_defend_attrs(&mut battle, pikachu, &mut args, AttrSelector::Any, true)
                .await;
        let mut args = PostDefendArgs::new(gyarados, tackle(), 10);
        let applied =
            apply_post_defend_attrs(&mut real, pikachu, &mut args, AttrSelector::Any, false).await;
        assert_eq!(simulated, applied, "seed {seed}");
        if applied {
            applied_count += 1;
        }

        // The simulated battle is left untouched.
        assert!(battle.queue().is_empty());
        assert!(battle.presentation_requests().is_empty());
        assert!(battle.new_log_entries().is_empty());
        assert!(battle.mon(pikachu).unwrap().ledger.this_encounter().is_empty());
        assert_eq!(battle.prng_mut().next(), reference.prng_mut().next());
    }
    // Both outcomes were exercised.
    assert!(applied_count > 0);
    assert!(applied_count < 100);
}

#[tokio::test]
async fn simulation_leaves_no_trace() {
    let observer = Arc::new(RecordingObserver::new());
    let mut battle = make_battle(0, observer.clone()).unwrap();
    let gyarados = battle.mon_handles()[0];

    let mut messages = Vec::new();
    let applied = dispatch::<PostSummonAttr>(
        &mut battle,
        gyarados,
        &mut PostSummonArgs,
        AttrSelector::Any,
        DispatchOptions::new()
            .with_simulated(true)
            .with_messages(&mut messages),
    )
    .await;
    assert!(applied);
    // Messages are still collected for the caller.
    pretty_assertions::assert_eq!(messages, ["Gyarados's Intimidate affected its foes!"]);

    assert!(battle.queue().is_empty());
    assert!(battle.presentation_requests().is_empty());
    assert!(battle.new_log_entries().is_empty());
    assert!(observer.applied().is_empty());
    assert!(
        battle
            .mon(gyarados)
            .unwrap()
            .ledger
            .this_encounter()
            .is_empty()
    );
}

#[tokio::test]
async fn real_dispatch_records_everywhere() {
    let observer = Arc::new(RecordingObserver::new());
    let mut battle = make_battle(0, observer.clone()).unwrap();
    let handles = battle.mon_handles();
    let (gyarados, pikachu) = (handles[0], handles[1]);

    assert!(
        apply_post_summon_attrs(
            &mut battle,
            gyarados,
            &mut PostSummonArgs,
            AttrSelector::Any,
            false
        )
        .await
    );
    assert_eq!(battle.queue().len(), 1);
    assert_eq!(battle.presentation_requests().len(), 1);
    pretty_assertions::assert_eq!(
        observer.applied(),
        [("Gyarados".to_owned(), Id::from("intimidate"))]
    );
    pretty_assertions::assert_eq!(
        battle.mon(gyarados).unwrap().ledger.this_turn(),
        [Id::from("intimidate")]
    );

    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Gyarados,0|ability:Intimidate|message:Gyarados's Intimidate affected its foes!",
            "unboost|mon:Pikachu,1|stat:atk|by:1",
        ],
    );
    assert_eq!(
        battle.mon(pikachu).unwrap().boosts.get(BattleStat::Atk),
        -1
    );
}

#[tokio::test]
async fn suppressed_presentation_still_records() {
    let observer = Arc::new(RecordingObserver::new());
    let mut battle = make_battle(0, observer.clone()).unwrap();
    let gyarados = battle.mon_handles()[0];

    assert!(
        dispatch::<PostSummonAttr>(
            &mut battle,
            gyarados,
            &mut PostSummonArgs,
            AttrSelector::Any,
            DispatchOptions::new().with_suppressed_presentation(),
        )
        .await
    );
    assert!(battle.presentation_requests().is_empty());
    assert_eq!(battle.queue().len(), 1);
    assert_eq!(observer.applied().len(), 1);
}

#[tokio::test]
async fn contact_status_selector_filters_by_variant() {
    let observer = Arc::new(RecordingObserver::new());
    let mut battle = make_battle(0, observer).unwrap();
    let handles = battle.mon_handles();

    let mut args = PostDefendArgs::new(handles[0], tackle(), 10);
    assert!(
        !apply_post_defend_attrs(
            &mut battle,
            handles[1],
            &mut args,
            AttrSelector::Matching(|attr| matches!(attr, PostDefendAttr::ContactDamage { .. })),
            false,
        )
        .await
    );
}
