//! Roster Registry
//!
//! The fixed set of playable character names. Membership tests go through a
//! set keyed by the lowercased form (O(1)), while the original insertion
//! order is kept separately for display.
//!
//! The registry is constant for the process lifetime; nothing mutates it
//! after construction.

use std::collections::HashMap;

use rand::seq::SliceRandom;

/// The playable character roster, in canonical display order.
pub const PLAYABLE_ROSTER: &[&str] = &[
    "Black Panther",
    "Doctor Strange",
    "Groot",
    "Hulk",
    "Iron Man",
    "Loki",
    "Luna Snow",
    "Magik",
    "Magneto",
    "Mantis",
    "Namor",
    "Peni Parker",
    "Punisher",
    "Rocket Raccoon",
    "Scarlet Witch",
    "Spider-Man",
    "Star-Lord",
    "Storm",
    "Thor",
    "Wolverine",
    "The Thing",
    "Captain America",
    "Black Widow",
    "Mr. Fantastic",
    "Human Torch",
    "Invisible Woman",
    "Psylocke",
    "Daredevil",
    "Moon Knight",
    "Jeff the landshark",
];

/// The fixed registry of valid character names.
///
/// Equality is case-insensitive; roster membership is the sole invariant a
/// `CharacterName` carries.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Names in insertion (display) order.
    names: Vec<&'static str>,
    /// Lowercased name -> index into `names`.
    index: HashMap<String, usize>,
}

impl Roster {
    /// Build the registry from the fixed playable roster.
    #[must_use]
    pub fn new() -> Self {
        Self::from_names(PLAYABLE_ROSTER)
    }

    /// Build a registry from an explicit name list.
    #[must_use]
    pub fn from_names(names: &[&'static str]) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_lowercase(), i))
            .collect();
        Self {
            names: names.to_vec(),
            index,
        }
    }

    /// Whether `name` is a playable character (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.trim().to_lowercase())
    }

    /// The canonical (display-cased) form of `name`, if it is in the roster.
    #[must_use]
    pub fn canonical(&self, name: &str) -> Option<&'static str> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| self.names[i])
    }

    /// Names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// Names sorted alphabetically, for the browsable list.
    #[must_use]
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut names = self.names.clone();
        names.sort_unstable();
        names
    }

    /// A uniform random roster member.
    #[must_use]
    pub fn random(&self) -> &'static str {
        self.names
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("")
    }

    /// Number of roster entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster is empty (never true for the fixed roster).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn membership_is_case_insensitive() {
        let roster = Roster::new();
        assert!(roster.contains("Iron Man"));
        assert!(roster.contains("iron man"));
        assert!(roster.contains("IRON MAN"));
        assert!(roster.contains("  iron man  "));
        assert!(!roster.contains("Superman"));
    }

    #[test]
    fn canonical_restores_display_casing() {
        let roster = Roster::new();
        assert_eq!(roster.canonical("spider-man"), Some("Spider-Man"));
        assert_eq!(roster.canonical("JEFF THE LANDSHARK"), Some("Jeff the landshark"));
        assert_eq!(roster.canonical("Nonexistent Hero"), None);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let roster = Roster::from_names(&["Zeta", "Alpha", "Mid"]);
        let in_order: Vec<_> = roster.iter().collect();
        assert_eq!(in_order, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(roster.sorted(), vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn random_pick_is_a_roster_member() {
        let roster = Roster::new();
        for _ in 0..50 {
            assert!(roster.contains(roster.random()));
        }
    }
}
