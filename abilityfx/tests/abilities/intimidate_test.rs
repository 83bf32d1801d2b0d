use abilityfx::{
    battle::{
        Battle,
        BattleStat,
        MonData,
        Type,
    },
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

fn mon(name: &str, side: usize, ability: &str) -> MonData {
    MonData {
        name: name.to_owned(),
        side,
        types: Vec::from([Type::Normal]),
        ability: ability.to_owned(),
        ..Default::default()
    }
}

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon(mon("Gyarados", 0, "Intimidate"))
        .add_mon(mon("Beldum", 1, "Clear Body"))
        .add_mon(mon("Krabby", 1, "Hyper Cutter"))
        .add_mon(mon("Snorlax", 1, ""))
        .build()
}

#[tokio::test]
async fn lowers_attack_of_unprotected_foes() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();

    assert!(
        apply_post_summon_attrs(
            &mut battle,
            handles[0],
            &mut PostSummonArgs,
            AttrSelector::Any,
            false
        )
        .await
    );
    assert_matches::assert_matches!(battle.resolve_actions().await, Ok(3));
    assert_new_logs_eq(
        &mut battle,
        &[
            "ability|mon:Gyarados,0|ability:Intimidate|message:Gyarados's Intimidate affected its foes!",
            "ability|mon:Beldum,1|ability:Clear Body|message:Beldum's Clear Body prevents its stats from being lowered!",
            "ability|mon:Krabby,1|ability:Hyper Cutter|message:Krabby's Hyper Cutter prevents its stats from being lowered!",
            "unboost|mon:Snorlax,1|stat:atk|by:1",
        ],
    );
    assert_eq!(battle.mon(handles[1]).unwrap().boosts.get(BattleStat::Atk), 0);
    assert_eq!(battle.mon(handles[2]).unwrap().boosts.get(BattleStat::Atk), 0);
    assert_eq!(battle.mon(handles[3]).unwrap().boosts.get(BattleStat::Atk), -1);
}

#[tokio::test]
async fn does_not_apply_without_foes() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_mon(mon("Gyarados", 0, "Intimidate"))
        .add_mon(mon("Snorlax", 0, ""))
        .build()
        .unwrap();
    let gyarados = battle.mon_handles()[0];

    assert!(
        !apply_post_summon_attrs(&mut battle, gyarados, &mut PostSummonArgs, AttrSelector::Any, false)
            .await
    );
}
