//! Human-readable reasons for a recommendation. Presentation only; nothing here feeds back
//! into scoring.

use crate::analysis::{labelled_abilities, AbilitySlot, KitProfile, PriorityVector};
use crate::loader::strip_markup;
use crate::model::{Character, Item, TeamComposition};
use crate::scorer::{ModifierContext, PreparedItem, ScoreModifier, SynergyTable, TeamCompModifier};

const MAX_ABILITY_REASONS: usize = 3;

struct ItemTraits {
    mana: bool,
    ability_power: bool,
    attack_damage: bool,
    attack_speed: bool,
    haste: bool,
    health: bool,
    resists: bool,
    sustain: bool,
    on_hit: bool,
}

impl ItemTraits {
    fn of(item: &Item, text: &str) -> Self {
        let has = |needles: &[&str], tag: &str| {
            needles.iter().any(|n| text.contains(n)) || (!tag.is_empty() && item.has_tag(tag))
        };
        Self {
            mana: has(&["mana"], "Mana"),
            ability_power: has(&["ability power"], "SpellDamage"),
            attack_damage: has(&["attack damage"], "Damage"),
            attack_speed: has(&["attack speed"], "AttackSpeed"),
            haste: has(&["ability haste", "cooldown"], "CooldownReduction"),
            health: has(&["health"], "Health"),
            resists: has(&["armor", "magic resist"], "Armor") || item.has_tag("SpellBlock"),
            sustain: has(&["lifesteal", "omnivamp", "vamp"], ""),
            on_hit: has(&["on-hit", "on hit"], ""),
        }
    }
}

fn slot_label(slot: AbilitySlot, name: &str) -> String {
    match slot {
        AbilitySlot::Passive if name.is_empty() => "Passive".to_string(),
        AbilitySlot::Passive => name.to_string(),
        _ => format!("{}: {}", slot, name),
    }
}

pub fn explain(
    character: &Character,
    kit: KitProfile,
    item: &Item,
    score: f32,
    synergy: &SynergyTable,
    team: Option<TeamComposition>,
) -> Vec<String> {
    let who = character.display_name();
    let item_text = strip_markup(&item.description).to_lowercase();
    let traits = ItemTraits::of(item, &item_text);
    let mut reasons = Vec::new();

    if kit.healing && traits.sustain {
        reasons.push(format!(
            "Healing amplification: builds on {}'s own healing for extra sustain",
            who
        ));
    }

    for (slot, ability) in labelled_abilities(character) {
        if reasons.len() >= MAX_ABILITY_REASONS {
            break;
        }
        let text = strip_markup(&ability.description).to_lowercase();
        let label = slot_label(slot, &ability.name);

        if text.contains("heal") && item_text.contains("heal") {
            reasons.push(format!("Amplifies the healing from {}", label));
        }
        if (text.contains("attack") || text.contains("auto")) && traits.on_hit {
            reasons.push(format!("Adds on-hit effects to {}", label));
        }
        if text.contains("shield") && (traits.ability_power || traits.health) {
            reasons.push(format!("Strengthens the shield from {}", label));
        }
        if (text.contains("cooldown") || text.contains("reset")) && traits.haste {
            reasons.push(format!("Lets {} come back sooner", label));
        }
    }
    reasons.truncate(MAX_ABILITY_REASONS);

    let prepared = PreparedItem::new(item);
    for entry in synergy.matching(character, &prepared, team) {
        if let Some(needle) = entry.matched(&prepared, team) {
            reasons.push(format!(
                "Known pairing for {}: '{}' ({:+.1})",
                who, needle.text, entry.bonus
            ));
        }
    }

    if let Some(comp) = team {
        let priorities = PriorityVector::default();
        let ctx = ModifierContext {
            character,
            priorities: &priorities,
            kit,
            team,
        };
        if TeamCompModifier.delta(&ctx, &prepared) > 0.0 {
            reasons.push(format!("Effective against {}", comp.describe()));
        }
    }

    if reasons.len() < 2 {
        let tagged = |tags: &[&str]| tags.iter().any(|t| character.has_tag(t));
        if traits.mana && character.uses_mana() {
            reasons.push(format!("Provides mana {} needs for ability rotations", who));
        }
        if traits.ability_power && tagged(&["Mage", "Support"]) {
            reasons.push(format!("Ability power boosts {}'s magic damage", who));
        }
        if traits.attack_damage && tagged(&["Fighter", "Marksman", "Assassin"]) {
            reasons.push(format!("Attack damage raises {}'s physical output", who));
        }
        if traits.attack_speed && tagged(&["Marksman", "Fighter"]) {
            reasons.push(format!("Attack speed suits {}'s auto-attack pattern", who));
        }
        if traits.haste {
            reasons.push(format!("Ability haste lets {} cast more often", who));
        }
        if traits.health && tagged(&["Tank", "Fighter"]) {
            reasons.push(format!("Extra health keeps {} alive longer", who));
        }
        if traits.resists && tagged(&["Tank"]) {
            reasons.push(format!("Resistances add to {}'s tankiness", who));
        }
    }

    if reasons.is_empty() {
        let generic = if score > 0.8 {
            "Very strong overall stat match for"
        } else if score > 0.6 {
            "Good balance of stats for"
        } else {
            "Useful stats and utility for"
        };
        reasons.push(format!("{} {}", generic, who));
    }
    reasons
}
