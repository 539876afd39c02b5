#![allow(dead_code)]

use buildforge::model::{Ability, Character, Item};

/// Builder for Character to keep test setup short
pub struct CharacterBuilder {
    character: Character,
}

impl CharacterBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            character: Character {
                id: id.to_string(),
                key: String::new(),
                name: id.to_string(),
                title: String::new(),
                resource: "Mana".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.character.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn passive(mut self, description: &str) -> Self {
        self.character.passive = Some(Ability::new("Passive", description));
        self
    }

    pub fn spell(mut self, description: &str) -> Self {
        let n = self.character.spells.len();
        self.character
            .spells
            .push(Ability::new(&format!("Spell{}", n + 1), description));
        self
    }

    pub fn resource(mut self, resource: &str) -> Self {
        self.character.resource = resource.to_string();
        self
    }

    pub fn build(self) -> Character {
        self.character
    }
}

/// Builder for Item. Defaults to an eligible, untagged, statless item.
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            item: Item {
                id: id.to_string(),
                name: format!("Item {}", id),
                description: String::new(),
                tags: Default::default(),
                stats: Default::default(),
                purchasable: true,
                total_cost: 1000.0,
                available_on_primary_map: true,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.item.name = name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.item.description = description.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.item.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn stat(mut self, name: &str, value: f32) -> Self {
        self.item.stats.insert(name.to_string(), value);
        self
    }

    pub fn cost(mut self, cost: f32) -> Self {
        self.item.total_cost = cost;
        self
    }

    pub fn purchasable(mut self, purchasable: bool) -> Self {
        self.item.purchasable = purchasable;
        self
    }

    pub fn on_map(mut self, on_map: bool) -> Self {
        self.item.available_on_primary_map = on_map;
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

/// Mage with no ability text and a single AP item.
pub fn scenario_a() -> (Character, Item) {
    let mage = CharacterBuilder::new("Blank").tags(&["Mage"]).build();
    let rod = ItemBuilder::new("3089")
        .tags(&["SpellDamage"])
        .stat("ap", 50.0)
        .build();
    (mage, rod)
}

pub fn ids(items: &[buildforge::scorer::ScoredItem]) -> Vec<&str> {
    items.iter().map(|s| s.item.id.as_str()).collect()
}
