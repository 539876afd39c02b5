use crate::taxonomy::StatCategory;
use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::EnumCount;

pub type StatArray = [f32; StatCategory::COUNT];

fn serialize_table<S: Serializer>(values: &StatArray, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(StatCategory::COUNT))?;
    for category in StatCategory::all() {
        map.serialize_entry(&category, &values[category.index()])?;
    }
    map.end()
}

fn iter_table(values: &StatArray) -> impl Iterator<Item = (StatCategory, f32)> + '_ {
    StatCategory::all().map(move |c| (c, values[c.index()]))
}

/// Unnormalized per-category evidence gathered from a character's kit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawScores(StatArray);

impl RawScores {
    pub fn from_values(values: StatArray) -> Self {
        Self(values.map(|v| v.max(0.0)))
    }

    #[inline]
    pub fn get(&self, category: StatCategory) -> f32 {
        self.0[category.index()]
    }

    #[inline]
    pub fn add(&mut self, category: StatCategory, amount: f32) {
        self.0[category.index()] += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatCategory, f32)> + '_ {
        iter_table(&self.0)
    }

    pub fn max(&self) -> f32 {
        self.0.iter().fold(0.0f32, |a, &b| a.max(b))
    }
}

impl Serialize for RawScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_table(&self.0, serializer)
    }
}

/// Per-category weights in `[0, 1]`.
///
/// Built by [`normalize`]: the strongest category sits at exactly `1.0`, or every
/// entry is `0.0` when the kit produced no signal at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriorityVector(StatArray);

impl PriorityVector {
    #[inline]
    pub fn get(&self, category: StatCategory) -> f32 {
        self.0[category.index()]
    }

    /// Overrides one entry, clamped to `[0, 1]`.
    pub fn with(mut self, category: StatCategory, priority: f32) -> Self {
        self.0[category.index()] = if priority.is_finite() {
            priority.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatCategory, f32)> + '_ {
        iter_table(&self.0)
    }

    pub fn max(&self) -> f32 {
        self.0.iter().fold(0.0f32, |a, &b| a.max(b))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&p| p == 0.0)
    }

    /// Categories sorted by priority, highest first. Equal priorities keep declaration order.
    pub fn ranked(&self) -> Vec<(StatCategory, f32)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    pub fn top(&self) -> Option<(StatCategory, f32)> {
        self.ranked().into_iter().next().filter(|(_, p)| *p > 0.0)
    }
}

impl Serialize for PriorityVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_table(&self.0, serializer)
    }
}

/// Max-normalization: every score is divided by the largest one.
pub fn normalize(raw: &RawScores) -> PriorityVector {
    let max = raw.max();
    if max > 0.0 && max.is_finite() {
        PriorityVector(raw.0.map(|v| v / max))
    } else {
        PriorityVector::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_category_is_exactly_one() {
        let mut raw = RawScores::default();
        raw.add(StatCategory::Ap, 3.0);
        raw.add(StatCategory::CrowdControl, 1.5);

        let p = normalize(&raw);
        assert_eq!(p.get(StatCategory::Ap), 1.0);
        assert_eq!(p.get(StatCategory::CrowdControl), 0.5);
        assert_eq!(p.get(StatCategory::Tank), 0.0);
    }

    #[test]
    fn zero_signal_stays_zero() {
        let p = normalize(&RawScores::default());
        assert!(p.is_zero());
        assert!(p.iter().all(|(_, v)| !v.is_nan()));
        assert_eq!(p.top(), None);
    }

    #[test]
    fn override_is_clamped() {
        let p = PriorityVector::default()
            .with(StatCategory::Ad, 4.0)
            .with(StatCategory::Tank, -1.0)
            .with(StatCategory::Healing, f32::NAN);
        assert_eq!(p.get(StatCategory::Ad), 1.0);
        assert_eq!(p.get(StatCategory::Tank), 0.0);
        assert_eq!(p.get(StatCategory::Healing), 0.0);
    }
}
