use std::sync::{
    Arc,
    Mutex,
};

use abilityfx::{
    abilities::{
        AbilityBuilder,
        AbilityDefinition,
    },
    battle::{
        Battle,
        MonData,
    },
    effect::{
        Applied,
        AttrSelector,
        Outcome,
        PostSummonArgs,
        PostSummonAttr,
        apply_post_summon_attrs,
    },
};
use abilityfx_test_utils::TestBattleBuilder;
use anyhow::Result;

type Visits = Arc<Mutex<Vec<&'static str>>>;

fn visit(visits: &Visits, name: &'static str, applied: bool) -> PostSummonAttr {
    let visits = visits.clone();
    PostSummonAttr::custom(move |_, _| {
        visits.lock().unwrap().push(name);
        Applied::ready(Outcome::from_bool(applied))
    })
}

fn alpha(visits: &Visits) -> AbilityDefinition {
    AbilityBuilder::new("Alpha", 9)
        .silent_attr(visit(visits, "alpha-1", false))
        .silent_attr(visit(visits, "alpha-2", true))
        .build()
}

fn beta(visits: &Visits) -> AbilityDefinition {
    AbilityBuilder::new("Beta", 9)
        .silent_attr(visit(visits, "beta-1", false))
        .build()
}

fn gamma(visits: &Visits) -> AbilityDefinition {
    AbilityBuilder::new("Gamma", 9)
        .silent_attr(visit(visits, "gamma-1", false))
        .silent_attr(visit(visits, "gamma-2", false))
        .build()
}

fn make_battle(visits: &Visits) -> Result<Battle> {
    TestBattleBuilder::new()
        .with_standard_abilities(false)
        .with_ability(alpha(visits))
        .with_ability(beta(visits))
        .with_ability(gamma(visits))
        .add_mon(MonData {
            name: "Porygon".to_owned(),
            ability: "Gamma".to_owned(),
            passive_ability: Some("Beta".to_owned()),
            ..Default::default()
        })
        .build()
}

#[tokio::test]
async fn visits_sources_then_declarations_in_order() {
    let visits = Visits::default();
    let mut battle = make_battle(&visits).unwrap();
    let mon = battle.mon_handles()[0];
    battle.mon_mut(mon).unwrap().grant_ability("Alpha");

    assert!(
        apply_post_summon_attrs(&mut battle, mon, &mut PostSummonArgs, AttrSelector::Any, false)
            .await
    );
    pretty_assertions::assert_eq!(
        *visits.lock().unwrap(),
        ["gamma-1", "gamma-2", "beta-1", "alpha-1", "alpha-2"]
    );
}

#[tokio::test]
async fn visits_every_attr_after_one_applies() {
    let visits = Visits::default();
    let mut battle = make_battle(&visits).unwrap();
    let mon = battle.mon_handles()[0];
    battle.mon_mut(mon).unwrap().ability = "Alpha".into();
    battle.mon_mut(mon).unwrap().grant_ability("Gamma");

    assert!(
        apply_post_summon_attrs(&mut battle, mon, &mut PostSummonArgs, AttrSelector::Any, false)
            .await
    );
    pretty_assertions::assert_eq!(
        *visits.lock().unwrap(),
        ["alpha-1", "alpha-2", "beta-1", "gamma-1", "gamma-2"]
    );
}

#[tokio::test]
async fn skips_unknown_abilities() {
    let visits = Visits::default();
    let mut battle = make_battle(&visits).unwrap();
    let mon = battle.mon_handles()[0];
    battle.mon_mut(mon).unwrap().ability = "Missing".into();

    assert!(
        !apply_post_summon_attrs(&mut battle, mon, &mut PostSummonArgs, AttrSelector::Any, false)
            .await
    );
    pretty_assertions::assert_eq!(*visits.lock().unwrap(), ["beta-1"]);
}

#[tokio::test]
async fn selector_narrows_attrs() {
    let visits = Visits::default();
    let mut battle = make_battle(&visits).unwrap();
    let mon = battle.mon_handles()[0];

    assert!(
        !apply_post_summon_attrs(
            &mut battle,
            mon,
            &mut PostSummonArgs,
            AttrSelector::Matching(|attr| !matches!(attr, PostSummonAttr::Custom(_))),
            false,
        )
        .await
    );
    assert!(visits.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unresolvable_mon_applies_nothing() {
    let visits = Visits::default();
    let mut battle = make_battle(&visits).unwrap();
    let mut larger = make_battle(&visits).unwrap();
    larger.add_mon(MonData::default());
    let mon = larger.mon_handles()[1];

    assert!(
        !apply_post_summon_attrs(&mut battle, mon, &mut PostSummonArgs, AttrSelector::Any, false)
            .await
    );
    assert!(visits.lock().unwrap().is_empty());
}
