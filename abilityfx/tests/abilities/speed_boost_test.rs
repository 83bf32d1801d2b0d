use abilityfx::battle::{
    Battle,
    BattleStat,
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
                "name": "Ninjask",
                "types": ["Bug", "Flying"],
                "ability": "Speed Boost"
            }"#,
        )
        .build()
}

#[tokio::test]
async fn boosts_speed_at_end_of_each_turn_after_the_first() {
    let mut battle = make_battle().unwrap();
    let ninjask = battle.mon_handles()[0];

    assert_matches::assert_matches!(battle.end_turn().await, Ok(()));
    assert_new_logs_eq(&mut battle, &["turn|turn:1"]);
    assert_eq!(battle.mon(ninjask).unwrap().boosts.get(BattleStat::Spe), 0);

    assert_matches::assert_matches!(battle.end_turn().await, Ok(()));
    assert_new_logs_eq(
        &mut battle,
        &["boost|mon:Ninjask,0|stat:spe|by:1", "turn|turn:2"],
    );
    assert_eq!(battle.mon(ninjask).unwrap().boosts.get(BattleStat::Spe), 1);

    assert_matches::assert_matches!(battle.end_turn().await, Ok(()));
    assert_eq!(battle.mon(ninjask).unwrap().boosts.get(BattleStat::Spe), 2);
}

#[tokio::test]
async fn turn_ledger_clears_between_turns() {
    let mut battle = make_battle().unwrap();
    let ninjask = battle.mon_handles()[0];

    battle.next_turn();
    assert_matches::assert_matches!(battle.end_turn().await, Ok(()));
    let mon = battle.mon(ninjask).unwrap();
    assert!(mon.ledger.this_turn().is_empty());
    assert!(mon.ledger.applied_this_encounter(&"speedboost".into()));
}
