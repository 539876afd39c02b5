use crate::error::{BfResult, BuildForgeError};
use crate::model::Character;

/// All known characters, kept sorted by id.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new(mut characters: Vec<Character>) -> Self {
        characters.sort_by(|a, b| a.id.cmp(&b.id));
        Self { characters }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Finds a character by id, numeric key, name, or a partial name.
    ///
    /// Lookup order:
    /// 1. exact id
    /// 2. exact key (`"99"`)
    /// 3. case-insensitive id or name
    /// 4. first case-insensitive partial name match, in id order
    pub fn resolve(&self, query: &str) -> BfResult<&Character> {
        let query = query.trim();
        if query.is_empty() {
            return Err(BuildForgeError::Validation(
                "character query must not be empty".to_string(),
            ));
        }

        if let Some(c) = self.characters.iter().find(|c| c.id == query) {
            return Ok(c);
        }
        if let Some(c) = self.characters.iter().find(|c| c.key == query) {
            return Ok(c);
        }

        let lower = query.to_lowercase();
        if let Some(c) = self
            .characters
            .iter()
            .find(|c| c.id.to_lowercase() == lower || c.name.to_lowercase() == lower)
        {
            return Ok(c);
        }

        self.characters
            .iter()
            .find(|c| c.name.to_lowercase().contains(&lower))
            .ok_or_else(|| BuildForgeError::NotFound(format!("no character matches '{}'", query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: &str, key: &str, name: &str) -> Character {
        Character {
            id: id.to_string(),
            key: key.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn roster() -> Roster {
        Roster::new(vec![
            character("MonkeyKing", "62", "Wukong"),
            character("Lux", "99", "Lux"),
            character("Kaisa", "145", "Kai'Sa"),
            character("Kayle", "10", "Kayle"),
        ])
    }

    #[test]
    fn resolves_in_priority_order() {
        let r = roster();
        assert_eq!(r.resolve("Lux").unwrap().id, "Lux");
        assert_eq!(r.resolve("62").unwrap().id, "MonkeyKing");
        assert_eq!(r.resolve("wukong").unwrap().id, "MonkeyKing");
        assert_eq!(r.resolve("kai'sa").unwrap().id, "Kaisa");
        // partial match picks the first id alphabetically
        assert_eq!(r.resolve("ka").unwrap().id, "Kaisa");
    }

    #[test]
    fn unknown_and_empty_queries_fail() {
        let r = roster();
        assert!(matches!(r.resolve("zzz"), Err(BuildForgeError::NotFound(_))));
        assert!(matches!(r.resolve("  "), Err(BuildForgeError::Validation(_))));
    }
}
