use super::modifiers::{ModifierContext, ScoreModifier};
use super::PreparedItem;
use crate::error::BfResult;
use crate::model::{Character, TeamComposition};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Which lower-cased item field a synergy needle is searched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynergyTarget {
    Name,
    Description,
}

/// One alternative of a synergy row: a lower-cased substring searched in one item field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    pub target: SynergyTarget,
    pub text: String,
}

impl Needle {
    /// Parses `text`, `name:text` or `description:text`. Unprefixed text uses `default`.
    fn parse(default: SynergyTarget, raw: &str) -> Option<Self> {
        let raw = raw.trim().to_lowercase();
        let (target, text) = if let Some(rest) = raw.strip_prefix("name:") {
            (SynergyTarget::Name, rest)
        } else if let Some(rest) = raw.strip_prefix("description:") {
            (SynergyTarget::Description, rest)
        } else {
            (default, raw.as_str())
        };
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            target,
            text: text.to_string(),
        })
    }
}

/// A CSV row as written on disk.
#[derive(Debug, Deserialize)]
struct SynergyRow {
    character: String,
    target: SynergyTarget,
    needle: String,
    bonus: f32,
    #[serde(default)]
    context: Option<TeamComposition>,
}

/// One pairing: the bonus is granted once when any of its needles matches.
#[derive(Debug, Clone, PartialEq)]
pub struct SynergyEntry {
    pub character: String,
    pub needles: Vec<Needle>,
    pub bonus: f32,
    /// Only applies against this enemy composition. `None` applies always.
    pub context: Option<TeamComposition>,
}

impl SynergyEntry {
    /// `needles` is a `|`-separated list of alternatives.
    pub fn new(
        character: &str,
        target: SynergyTarget,
        needles: &str,
        bonus: f32,
        context: Option<TeamComposition>,
    ) -> Self {
        Self {
            character: character.trim().to_lowercase(),
            needles: needles
                .split('|')
                .filter_map(|n| Needle::parse(target, n))
                .collect(),
            bonus,
            context,
        }
    }

    /// First needle found in `item`, if the entry applies to `team` at all.
    pub fn matched(&self, item: &PreparedItem<'_>, team: Option<TeamComposition>) -> Option<&Needle> {
        if let Some(ctx) = self.context {
            if team != Some(ctx) {
                return None;
            }
        }
        self.needles
            .iter()
            .find(|n| item.field(n.target).contains(n.text.as_str()))
    }

    pub fn applies(&self, item: &PreparedItem<'_>, team: Option<TeamComposition>) -> bool {
        self.matched(item, team).is_some()
    }
}

impl From<SynergyRow> for SynergyEntry {
    fn from(row: SynergyRow) -> Self {
        Self::new(&row.character, row.target, &row.needle, row.bonus, row.context)
    }
}

/// Character-specific item pairings, keyed by lower-cased character id.
#[derive(Debug, Clone, Default)]
pub struct SynergyTable {
    entries: HashMap<String, Vec<SynergyEntry>>,
}

impl SynergyTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries<I: IntoIterator<Item = SynergyEntry>>(entries: I) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    fn insert(&mut self, entry: SynergyEntry) {
        if entry.needles.is_empty() || !entry.bonus.is_finite() {
            warn!(
                "Skipping synergy row for '{}': empty needle or bad bonus",
                entry.character
            );
            return;
        }
        self.entries
            .entry(entry.character.clone())
            .or_default()
            .push(entry);
    }

    /// Parses `character,target,needle,bonus,context` rows. Malformed rows are skipped.
    ///
    /// `needle` may list alternatives as `a|name:b|description:c`; a row adds its bonus once.
    pub fn from_reader<R: Read>(reader: R) -> BfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut table = Self::default();
        for (i, row) in rdr.deserialize::<SynergyRow>().enumerate() {
            match row {
                Ok(row) => table.insert(row.into()),
                Err(e) => warn!("Skipping malformed synergy row {}: {}", i + 1, e),
            }
        }
        debug!("Loaded synergy rows for {} characters", table.entries.len());
        Ok(table)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries_for(&self, character_id: &str) -> &[SynergyEntry] {
        self.entries
            .get(&character_id.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn matching(
        &self,
        character: &Character,
        item: &PreparedItem<'_>,
        team: Option<TeamComposition>,
    ) -> Vec<&SynergyEntry> {
        self.entries_for(&character.id)
            .iter()
            .filter(|e| e.applies(item, team))
            .collect()
    }
}

/// Adds the bonus of every matching row for the character being scored.
#[derive(Debug, Clone, Default)]
pub struct SynergyModifier {
    pub table: SynergyTable,
}

impl SynergyModifier {
    pub fn new(table: SynergyTable) -> Self {
        Self { table }
    }
}

impl ScoreModifier for SynergyModifier {
    fn name(&self) -> &'static str {
        "synergy"
    }

    fn delta(&self, ctx: &ModifierContext<'_>, item: &PreparedItem<'_>) -> f32 {
        self.table
            .matching(ctx.character, item, ctx.team)
            .into_iter()
            .map(|e| e.bonus)
            .sum()
    }
}
