use abilityfx::{
    battle::{
        AbilitySlot,
        Battle,
        PresentationRequest,
        Weather,
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
    assert_new_logs_eq,
};
use anyhow::Result;

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon_json(
            r#"{
                "name": "Pelipper",
                "types": ["Water", "Flying"],
                "hp": 80,
                "ability": "Static",
                "passive_ability": "Drizzle"
            }"#,
        )
        .build()
}

#[tokio::test]
async fn passive_ability_applies_on_summon() {
    let mut battle = make_battle().unwrap();
    let pelipper = battle.mon_handles()[0];

    assert!(
        apply_post_summon_attrs(&mut battle, pelipper, &mut PostSummonArgs, AttrSelector::Any, false)
            .await
    );
    pretty_assertions::assert_eq!(
        battle.take_presentation_requests(),
        [PresentationRequest {
            mon: pelipper,
            ability: Id::from("drizzle"),
            slot: AbilitySlot::Passive,
        }]
    );
    assert!(battle.presentation_requests().is_empty());
    pretty_assertions::assert_eq!(
        battle.mon(pelipper).unwrap().ledger.this_turn(),
        [Id::from("drizzle")]
    );

    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(1));
    assert_eq!(battle.field().weather, Some(Weather::Rain));
    assert_eq!(battle.field().weather_turns, Some(5));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Pelipper,0|ability:Drizzle|message:Pelipper's Drizzle summoned Rain!",
            "weather|weather:Rain",
        ],
    );
}

#[tokio::test]
async fn does_not_apply_when_weather_is_already_set() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_weather(Some(Weather::Rain))
        .add_mon_json(r#"{"name": "Politoed", "types": ["Water"], "ability": "Drizzle"}"#)
        .build()
        .unwrap();
    let politoed = battle.mon_handles()[0];

    assert!(
        !apply_post_summon_attrs(&mut battle, politoed, &mut PostSummonArgs, AttrSelector::Any, false)
            .await
    );
    assert!(battle.queue().is_empty());
}
