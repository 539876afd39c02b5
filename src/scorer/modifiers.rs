use super::PreparedItem;
use crate::analysis::{KitProfile, PriorityVector};
use crate::model::{Character, TeamComposition};

/// Everything a modifier may look at besides the item itself.
#[derive(Debug, Clone, Copy)]
pub struct ModifierContext<'a> {
    pub character: &'a Character,
    pub priorities: &'a PriorityVector,
    pub kit: KitProfile,
    pub team: Option<TeamComposition>,
}

/// A pluggable score adjustment applied after the base item scorer.
pub trait ScoreModifier: Send + Sync {
    fn name(&self) -> &'static str;

    fn delta(&self, ctx: &ModifierContext<'_>, item: &PreparedItem<'_>) -> f32;
}

#[derive(Debug, Clone, Copy)]
enum Needle {
    Name(&'static str),
    Desc(&'static str),
}

impl Needle {
    fn found_in(self, item: &PreparedItem<'_>) -> bool {
        match self {
            Needle::Name(n) => item.name.contains(n),
            Needle::Desc(n) => item.description.contains(n),
        }
    }
}

/// OR over clauses, AND within a clause.
fn matches_any(clauses: &[&[Needle]], item: &PreparedItem<'_>) -> bool {
    clauses
        .iter()
        .any(|clause| clause.iter().all(|n| n.found_in(item)))
}

use Needle::{Desc, Name};

const HEALING_ITEM: &[&[Needle]] = &[
    &[Desc("heal")],
    &[Desc("omnivamp")],
    &[Desc("vamp")],
    &[Desc("lifesteal")],
    &[Desc("regen")],
    &[Name("sunderer")],
];

const BURN_ITEM: &[&[Needle]] = &[&[Name("liandry")], &[Name("demonic")]];

/// Rewards items that amplify what the kit already does.
#[derive(Debug, Clone)]
pub struct KitSynergy {
    pub healing_bonus: f32,
    pub area_bonus: f32,
}

impl Default for KitSynergy {
    fn default() -> Self {
        Self {
            healing_bonus: 2.0,
            area_bonus: 1.5,
        }
    }
}

impl ScoreModifier for KitSynergy {
    fn name(&self) -> &'static str {
        "kit_synergy"
    }

    fn delta(&self, ctx: &ModifierContext<'_>, item: &PreparedItem<'_>) -> f32 {
        let mut delta = 0.0;
        if ctx.kit.healing && matches_any(HEALING_ITEM, item) {
            delta += self.healing_bonus;
        }
        if ctx.kit.area_damage && matches_any(BURN_ITEM, item) {
            delta += self.area_bonus;
        }
        delta
    }
}

struct CompRule {
    team: TeamComposition,
    /// Character must carry at least one of these class tags. Empty means anyone.
    classes: &'static [&'static str],
    clauses: &'static [&'static [Needle]],
    delta: f32,
}

const COMP_RULES: &[CompRule] = &[
    // Squishy: burst them down.
    CompRule {
        team: TeamComposition::Squishy,
        classes: &[],
        clauses: &[
            &[Desc("burst")],
            &[Name("night harvest")],
            &[Name("luden")],
            &[Name("lich bane")],
            &[Name("shadowflame")],
            &[Name("collector")],
            &[Name("infinity")],
        ],
        delta: 2.0,
    },
    CompRule {
        team: TeamComposition::Squishy,
        classes: &["Assassin", "Mage"],
        clauses: &[
            &[Desc("lethality")],
            &[Desc("armor penetration")],
            &[Desc("magic penetration")],
        ],
        delta: 2.5,
    },
    CompRule {
        team: TeamComposition::Squishy,
        classes: &[],
        clauses: &[
            &[Desc("armor")],
            &[Desc("magic resist")],
            &[Desc("health"), Name("warmog")],
        ],
        delta: -1.0,
    },
    // Tanky: shred and sustain.
    CompRule {
        team: TeamComposition::Tanky,
        classes: &[],
        clauses: &[
            &[Desc("max health")],
            &[Desc("current health")],
            &[Name("sunderer")],
            &[Name("liandry")],
            &[Name("demonic")],
            &[Name("blade of the ruined")],
            &[Name("void staff")],
            &[Name("lord dominik")],
        ],
        delta: 3.0,
    },
    CompRule {
        team: TeamComposition::Tanky,
        classes: &[],
        clauses: &[
            &[Desc("heal")],
            &[Desc("lifesteal")],
            &[Desc("omnivamp")],
            &[Desc("vamp")],
        ],
        delta: 2.0,
    },
    CompRule {
        team: TeamComposition::Tanky,
        classes: &[],
        clauses: &[&[Desc("armor penetration")], &[Desc("magic penetration")]],
        delta: 2.0,
    },
    CompRule {
        team: TeamComposition::Tanky,
        classes: &[],
        clauses: &[&[Name("lich bane")], &[Name("luden")], &[Name("collector")]],
        delta: -1.0,
    },
    // CC-heavy: stay on your feet.
    CompRule {
        team: TeamComposition::CcHeavy,
        classes: &[],
        clauses: &[
            &[Desc("tenacity")],
            &[Desc("cleanse")],
            &[Desc("slow reduction")],
            &[Name("mercurial")],
            &[Name("quicksilver")],
            &[Name("banshee")],
            &[Name("edge of night")],
        ],
        delta: 3.5,
    },
    CompRule {
        team: TeamComposition::CcHeavy,
        classes: &[],
        clauses: &[
            &[Desc("health")],
            &[Desc("armor")],
            &[Desc("magic resist")],
        ],
        delta: 1.0,
    },
    CompRule {
        team: TeamComposition::CcHeavy,
        classes: &["Assassin"],
        clauses: &[
            &[Desc("movement speed")],
            &[Name("force")],
            &[Name("youmuu")],
        ],
        delta: 2.0,
    },
];

/// Biases items towards what works against the declared enemy team.
/// Does nothing without a team composition, or for `balanced`.
#[derive(Debug, Clone, Default)]
pub struct TeamCompModifier;

impl ScoreModifier for TeamCompModifier {
    fn name(&self) -> &'static str {
        "team_comp"
    }

    fn delta(&self, ctx: &ModifierContext<'_>, item: &PreparedItem<'_>) -> f32 {
        let Some(team) = ctx.team else {
            return 0.0;
        };

        COMP_RULES
            .iter()
            .filter(|r| r.team == team)
            .filter(|r| r.classes.is_empty() || r.classes.iter().any(|c| ctx.character.has_tag(c)))
            .filter(|r| matches_any(r.clauses, item))
            .map(|r| r.delta)
            .sum()
    }
}
