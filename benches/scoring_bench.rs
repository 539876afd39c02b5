use buildforge::config::Config;
use buildforge::model::{Ability, Character, Item};
use buildforge::recommender::{Recommender, RecommenderParams};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const TAG_POOL: &[&str] = &[
    "SpellDamage",
    "Damage",
    "Health",
    "Armor",
    "SpellBlock",
    "AttackSpeed",
    "CooldownReduction",
    "Boots",
    "Consumable",
];

const STAT_POOL: &[&str] = &["ap", "ad", "health", "armor", "attackSpeed", "mana", "lifeSteal"];

fn setup_catalog(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| Item {
            id: format!("{:04}", i),
            name: format!("Item {}", i),
            description: "Grants ability power and magic penetration. Heals on hit, slows enemies."
                .to_string(),
            tags: [TAG_POOL[i % TAG_POOL.len()], TAG_POOL[(i * 7) % TAG_POOL.len()]]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            stats: [(STAT_POOL[i % STAT_POOL.len()].to_string(), 10.0 + i as f32)]
                .into_iter()
                .collect(),
            purchasable: i % 11 != 0,
            total_cost: (i % 40) as f32 * 100.0,
            available_on_primary_map: true,
        })
        .collect()
}

fn setup_character() -> Character {
    Character {
        id: "Bench".to_string(),
        name: "Bench".to_string(),
        tags: ["Mage".to_string(), "Support".to_string()].into(),
        passive: Some(Ability::new("P", "Spells mark enemies; attacks detonate the mark.")),
        spells: vec![
            Ability::new("Q", "Binds and deals magic damage."),
            Ability::new("W", "Shields allies and grants armor."),
            Ability::new("E", "Slows and damages enemies in an area."),
            Ability::new("R", "Fires a laser dealing magic damage. Cooldown is refunded."),
        ],
        ..Default::default()
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = setup_catalog(600);
    let character = setup_character();

    let plain = Recommender::default();
    c.bench_function("recommend (600 items, no modifiers)", |b| {
        b.iter(|| plain.recommend(black_box(&character), black_box(&catalog), None))
    });

    let mut config = Config::default();
    config.modifiers.kit_synergy = true;
    config.modifiers.team_comp = true;
    let chained = RecommenderParams::builder()
        .config(config)
        .build()
        .build_recommender()
        .expect("Failed to build recommender");
    c.bench_function("recommend (600 items, kit + team comp)", |b| {
        b.iter(|| {
            chained.recommend(
                black_box(&character),
                black_box(&catalog),
                Some(buildforge::TeamComposition::Tanky),
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
