use abilityfx::{
    battle::{
        AbilitySlot,
        Battle,
        MonData,
        Move,
        MoveCategory,
        PresentationRequest,
        Type,
    },
    common::{
        Fraction,
        Id,
    },
    effect::{
        AttrSelector,
        PreAttackArgs,
        apply_pre_attack_attrs,
    },
};
use abilityfx_test_utils::TestBattleBuilder;
use anyhow::Result;

fn make_battle() -> Result<Battle> {
    TestBattleBuilder::new()
        .with_seed(0)
        .add_mon(MonData {
            name: "Pinsir".to_owned(),
            side: 0,
            types: Vec::from([Type::Bug]),
            ability: "Aerilate".to_owned(),
            ..Default::default()
        })
        .add_mon(MonData {
            name: "Machamp".to_owned(),
            side: 1,
            types: Vec::from([Type::Fighting]),
            ability: "".to_owned(),
            ..Default::default()
        })
        .build()
}

#[tokio::test]
async fn normal_moves_become_flying_and_stronger() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (pinsir, machamp) = (handles[0], handles[1]);

    let mut args = PreAttackArgs::new(
        Some(machamp),
        Move::new("Return", Type::Normal, MoveCategory::Physical, 102),
    );
    assert!(apply_pre_attack_attrs(&mut battle, pinsir, &mut args, AttrSelector::Any, false).await);
    assert_eq!(args.move_type, Type::Flying);
    assert_eq!(args.mv.move_type, Type::Normal);
    assert_eq!(args.power_multiplier, Fraction::new(6, 5));
    assert_eq!(args.damage_multiplier, Fraction::from_integer(1));
    pretty_assertions::assert_eq!(
        battle.take_presentation_requests(),
        [PresentationRequest {
            mon: pinsir,
            ability: Id::from("aerilate"),
            slot: AbilitySlot::Active,
        }]
    );
}

#[tokio::test]
async fn leaves_other_moves_unchanged() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (pinsir, machamp) = (handles[0], handles[1]);

    for mv in [
        Move::new("X-Scissor", Type::Bug, MoveCategory::Physical, 80),
        Move::new("Swords Dance", Type::Normal, MoveCategory::Status, 0),
    ] {
        let move_type = mv.move_type;
        let mut args = PreAttackArgs::new(Some(machamp), mv);
        assert!(
            !apply_pre_attack_attrs(&mut battle, pinsir, &mut args, AttrSelector::Any, false)
                .await
        );
        assert_eq!(args.move_type, move_type);
        assert_eq!(args.power_multiplier, Fraction::from_integer(1));
    }
    assert!(battle.presentation_requests().is_empty());
}

#[tokio::test]
async fn does_not_change_move_already_changed_to_flying() {
    let mut battle = make_battle().unwrap();
    let handles = battle.mon_handles();
    let (pinsir, machamp) = (handles[0], handles[1]);

    let mut args = PreAttackArgs::new(
        Some(machamp),
        Move::new("Return", Type::Normal, MoveCategory::Physical, 102),
    );
    args.move_type = Type::Flying;
    assert!(
        !apply_pre_attack_attrs(&mut battle, pinsir, &mut args, AttrSelector::Any, false).await
    );
    assert_eq!(args.power_multiplier, Fraction::from_integer(1));
}
