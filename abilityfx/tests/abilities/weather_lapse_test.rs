use abilityfx::{
    battle::{
        Battle,
        BattleStat,
        MonData,
        Type,
        Weather,
    },
    common::Fraction,
    effect::{
        AttrSelector,
        PostWeatherLapseArgs,
        StatMultiplierArgs,
        apply_post_weather_lapse_attrs,
        apply_stat_multiplier_attrs,
    },
};
use abilityfx_test_utils::{
    TestBattleBuilder,
    assert_new_logs_eq,
};
use anyhow::Result;

fn make_battle(weather: Option<Weather>) -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_weather(weather)
        .add_mon(MonData {
            name: "Ludicolo".to_owned(),
            side: 0,
            types: Vec::from([Type::Water, Type::Grass]),
            ability: "Rain Dish".to_owned(),
            ..Default::default()
        })
        .add_mon(MonData {
            name: "Charizard".to_owned(),
            side: 1,
            types: Vec::from([Type::Fire, Type::Flying]),
            ability: "Solar Power".to_owned(),
            ..Default::default()
        })
        .build()
}

#[tokio::test]
async fn rain_dish_heals_in_rain_at_end_of_turn() {
    let mut battle = make_battle(Some(Weather::Rain)).unwrap();
    let handles = battle.mon_handles();
    let (ludicolo, charizard) = (handles[0], handles[1]);
    battle.mon_mut(ludicolo).unwrap().hp = 50;

    assert_matches::assert_matches!(battle.end_turn().await, Ok(()));
    assert_eq!(battle.mon(ludicolo).unwrap().hp, 56);
    assert_eq!(battle.mon(charizard).unwrap().hp, 100);
    assert_new_logs_eq(
        &mut battle,
        &["heal|mon:Ludicolo,0|health:56/100", "turn|turn:1"],
    );
}

#[tokio::test]
async fn solar_power_hurts_in_sun_and_rain_dish_does_not_heal() {
    let mut battle = make_battle(Some(Weather::Sun)).unwrap();
    let handles = battle.mon_handles();
    let (ludicolo, charizard) = (handles[0], handles[1]);
    battle.mon_mut(ludicolo).unwrap().hp = 50;

    assert_matches::assert_matches!(battle.end_turn().await, Ok(()));
    assert_eq!(battle.mon(ludicolo).unwrap().hp, 50);
    assert_eq!(battle.mon(charizard).unwrap().hp, 88);
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Charizard,1|ability:Solar Power|message:Charizard was hurt by its Solar Power!",
            "damage|mon:Charizard,1|health:88/100",
            "turn|turn:1",
        ],
    );
}

#[tokio::test]
async fn no_weather_effects_without_weather() {
    let mut battle = make_battle(None).unwrap();
    let ludicolo = battle.mon_handles()[0];
    battle.mon_mut(ludicolo).unwrap().hp = 50;

    assert_matches::assert_matches!(battle.end_turn().await, Ok(()));
    assert_eq!(battle.mon(ludicolo).unwrap().hp, 50);
    assert_new_logs_eq(&mut battle, &["turn|turn:1"]);
}

#[tokio::test]
async fn rain_dish_ignores_other_weather_when_applied_directly() {
    let mut battle = make_battle(Some(Weather::Rain)).unwrap();
    let ludicolo = battle.mon_handles()[0];
    battle.mon_mut(ludicolo).unwrap().hp = 50;

    let mut args = PostWeatherLapseArgs {
        weather: Weather::Sandstorm,
    };
    assert!(
        !apply_post_weather_lapse_attrs(&mut battle, ludicolo, &mut args, AttrSelector::Any, false)
            .await
    );
    assert!(battle.queue().is_empty());
}

#[tokio::test]
async fn solar_power_boosts_special_attack_only_in_sun() {
    let mut battle = make_battle(Some(Weather::Sun)).unwrap();
    let charizard = battle.mon_handles()[1];

    let mut args = StatMultiplierArgs::new(BattleStat::SpAtk);
    assert!(
        apply_stat_multiplier_attrs(&mut battle, charizard, &mut args, AttrSelector::Any, false)
            .await
    );
    assert_eq!(args.multiplier, Fraction::new(3, 2));

    battle.field_mut().weather = None;
    let mut args = StatMultiplierArgs::new(BattleStat::SpAtk);
    assert!(
        !apply_stat_multiplier_attrs(&mut battle, charizard, &mut args, AttrSelector::Any, false)
            .await
    );
    assert_eq!(args.multiplier, Fraction::from_integer(1));
}
