mod common;

use buildforge::config::{Config, FilterRules, RankingLimits};
use buildforge::ranking::{CatalogFilter, Ineligible};
use buildforge::recommend;
use buildforge::recommender::{Recommender, RecommenderParams};
use common::{ids, scenario_a, CharacterBuilder, ItemBuilder};
use rstest::rstest;
use std::collections::HashSet;

#[test]
fn scenario_a_single_ap_item() {
    let (mage, rod) = scenario_a();
    let out = recommend(&mage, &[rod]);
    assert_eq!(ids(&out.primary_items), vec!["3089"]);
    assert_eq!(out.primary_items[0].score, 2.5);
    assert!(out.movement_items.is_empty());
}

#[test]
fn scenario_b_cheap_item_never_appears() {
    let (mage, rod) = scenario_a();
    let cheap = ItemBuilder::new("1052")
        .tags(&["SpellDamage"])
        .stat("ap", 500.0)
        .cost(200.0)
        .build();
    let out = recommend(&mage, &[cheap, rod]);
    assert_eq!(ids(&out.primary_items), vec!["3089"]);
}

#[test]
fn scenario_c_equal_scores_in_id_order() {
    let (mage, _) = scenario_a();
    let catalog: Vec<_> = ["3300", "3100", "3200"]
        .iter()
        .map(|id| ItemBuilder::new(id).tags(&["SpellDamage"]).build())
        .collect();
    let out = recommend(&mage, &catalog);
    assert_eq!(ids(&out.primary_items), vec!["3100", "3200", "3300"]);
}

#[test]
fn tie_break_is_bytewise_not_numeric() {
    let (mage, _) = scenario_a();
    let catalog: Vec<_> = ["10", "9", "100"]
        .iter()
        .map(|id| ItemBuilder::new(id).build())
        .collect();
    let out = recommend(&mage, &catalog);
    assert_eq!(ids(&out.primary_items), vec!["10", "100", "9"]);
}

#[test]
fn cost_threshold_is_inclusive() {
    let (mage, _) = scenario_a();
    let edge = ItemBuilder::new("1").cost(300.0).build();
    let below = ItemBuilder::new("2").cost(299.99).build();
    let out = recommend(&mage, &[edge, below]);
    assert_eq!(ids(&out.primary_items), vec!["1"]);
}

#[rstest]
#[case::not_purchasable(ItemBuilder::new("x").purchasable(false), Ineligible::NotPurchasable)]
#[case::too_cheap(ItemBuilder::new("x").cost(250.0), Ineligible::TooCheap(250.0))]
#[case::consumable(ItemBuilder::new("x").tags(&["Consumable"]), Ineligible::ExcludedTag("Consumable".into()))]
#[case::trinket(ItemBuilder::new("x").tags(&["Vision", "Trinket"]), Ineligible::ExcludedTag("Trinket".into()))]
#[case::off_map(ItemBuilder::new("x").on_map(false), Ineligible::OffMap)]
fn filter_rejects(#[case] builder: ItemBuilder, #[case] reason: Ineligible) {
    let filter = CatalogFilter::default();
    let item = builder.build();
    assert_eq!(filter.check(&item), Err(reason));
    assert!(!filter.is_eligible(&item));
}

#[test]
fn custom_filter_rules() {
    let rules = FilterRules {
        min_total_cost: 0.0,
        excluded_tags: "Boots".to_string(),
    };
    let filter = CatalogFilter::from_rules(&rules);
    assert!(filter.is_eligible(&ItemBuilder::new("1").cost(0.0).tags(&["Consumable"]).build()));
    assert!(!filter.is_eligible(&ItemBuilder::new("2").tags(&["Boots"]).build()));
}

fn big_catalog() -> Vec<buildforge::Item> {
    let mut catalog = Vec::new();
    for i in 0..15 {
        catalog.push(
            ItemBuilder::new(&format!("2{:03}", i))
                .tags(&["SpellDamage"])
                .stat("ap", 10.0)
                .build(),
        );
    }
    for i in 0..5 {
        catalog.push(
            ItemBuilder::new(&format!("1{:03}", i))
                .tags(&["Boots"])
                .stat("moveSpeed", 45.0)
                .build(),
        );
    }
    catalog
}

#[test]
fn buckets_are_bounded_and_disjoint() {
    let (mage, _) = scenario_a();
    let out = recommend(&mage, &big_catalog());
    assert_eq!(out.primary_items.len(), 10);
    assert_eq!(out.movement_items.len(), 3);

    let primary: HashSet<_> = ids(&out.primary_items).into_iter().collect();
    let movement: HashSet<_> = ids(&out.movement_items).into_iter().collect();
    assert!(primary.is_disjoint(&movement));
    assert!(out.movement_items.iter().all(|s| s.item.has_tag("Boots")));
    assert!(out.primary_items.iter().all(|s| !s.item.has_tag("Boots")));
}

#[test]
fn configured_limits_apply() {
    let (mage, _) = scenario_a();
    let mut config = Config::default();
    config.limits = RankingLimits {
        primary_limit: 2,
        movement_limit: 0,
        movement_tag: "Boots".to_string(),
    };
    let engine = RecommenderParams::builder()
        .config(config)
        .build()
        .build_recommender()
        .unwrap();
    let out = engine.recommend(&mage, &big_catalog(), None);
    assert_eq!(out.primary_items.len(), 2);
    assert!(out.movement_items.is_empty());
}

#[test]
fn empty_catalog_gives_empty_buckets() {
    let (mage, _) = scenario_a();
    let out = recommend(&mage, &[]);
    assert!(out.is_empty());
}

#[test]
fn catalog_order_does_not_matter() {
    let c = CharacterBuilder::new("Test")
        .tags(&["Fighter"])
        .spell("Dashes forward and heals.")
        .build();
    let catalog = big_catalog();
    let mut reversed = catalog.clone();
    reversed.reverse();

    let engine = Recommender::default();
    assert_eq!(
        engine.recommend(&c, &catalog, None),
        engine.recommend(&c, &reversed, None)
    );
}

#[test]
fn zero_signal_character_ranks_by_id() {
    let blank = CharacterBuilder::new("Blank").build();
    let catalog = vec![
        ItemBuilder::new("3").tags(&["SpellDamage"]).stat("ap", 99.0).build(),
        ItemBuilder::new("1").tags(&["Damage"]).build(),
        ItemBuilder::new("2").build(),
    ];
    let out = recommend(&blank, &catalog);
    assert_eq!(ids(&out.primary_items), vec!["1", "2", "3"]);
    assert!(out.primary_items.iter().all(|s| s.score == 0.0));
}
