use abilityfx::{
    battle::{
        Battle,
        MonData,
        Move,
        MoveCategory,
        Type,
    },
    common::Fraction,
    effect::{
        AttrSelector,
        CriticalHitArgs,
        CriticalHitRole,
        apply_critical_hit_attrs,
    },
};
use abilityfx_test_utils::TestBattleBuilder;
use anyhow::Result;

fn mon(name: &str, side: usize, typ: Type, ability: &str) -> MonData {
    MonData {
        name: name.to_owned(),
        side,
        types: Vec::from([typ]),
        ability: ability.to_owned(),
        ..Default::default()
    }
}

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon(mon("Absol", 0, Type::Dark, "Super Luck"))
        .add_mon(mon("Kabutops", 1, Type::Rock, "Battle Armor"))
        .add_mon(mon("Kingdra", 0, Type::Water, "Sniper"))
        .build()
}

fn slash() -> Move {
    Move::new("Slash", Type::Normal, MoveCategory::Physical, 70)
}

#[tokio::test]
async fn super_luck_raises_stage_when_attacking() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (absol, kabutops) = (handles[0], handles[1]);

    let mut args = CriticalHitArgs::new(CriticalHitRole::Attacker, kabutops, slash());
    assert!(apply_critical_hit_attrs(&mut battle, absol, &mut args, AttrSelector::Any, false).await);
    assert_eq!(args.stage, 1);
    assert!(!args.blocked);

    let mut args = CriticalHitArgs::new(CriticalHitRole::Defender, kabutops, slash());
    assert!(
        !apply_critical_hit_attrs(&mut battle, absol, &mut args, AttrSelector::Any, false).await
    );
    assert_eq!(args.stage, 0);
}

#[tokio::test]
async fn battle_armor_blocks_crits_when_defending() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (absol, kabutops) = (handles[0], handles[1]);

    let mut args = CriticalHitArgs::new(CriticalHitRole::Defender, absol, slash());
    assert!(
        apply_critical_hit_attrs(&mut battle, kabutops, &mut args, AttrSelector::Any, false).await
    );
    assert!(args.blocked);

    let mut args = CriticalHitArgs::new(CriticalHitRole::Attacker, absol, slash());
    assert!(
        !apply_critical_hit_attrs(&mut battle, kabutops, &mut args, AttrSelector::Any, false)
            .await
    );
    assert!(!args.blocked);
}

#[tokio::test]
async fn battle_armor_is_ignored_when_field_ignores_abilities() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (absol, kabutops) = (handles[0], handles[1]);
    battle.field_mut().ignore_abilities = true;

    let mut args = CriticalHitArgs::new(CriticalHitRole::Defender, absol, slash());
    assert!(
        !apply_critical_hit_attrs(&mut battle, kabutops, &mut args, AttrSelector::Any, false)
            .await
    );
    assert!(!args.blocked);
}

#[tokio::test]
async fn sniper_multiplies_crit_damage_when_attacking() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (kabutops, kingdra) = (handles[1], handles[2]);

    let mut args = CriticalHitArgs::new(CriticalHitRole::Attacker, kabutops, slash());
    assert!(
        apply_critical_hit_attrs(&mut battle, kingdra, &mut args, AttrSelector::Any, false).await
    );
    assert_eq!(args.multiplier, Fraction::new(9, 4));
    assert_eq!(args.stage, 0);

    let mut args = CriticalHitArgs::new(CriticalHitRole::Defender, kabutops, slash());
    assert!(
        !apply_critical_hit_attrs(&mut battle, kingdra, &mut args, AttrSelector::Any, false).await
    );
    assert_eq!(args.multiplier, Fraction::new(3, 2));
}
