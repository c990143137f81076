use crate::types::Committer;
use rustc_hash::{FxHashMap, FxHashSet};

/// Display names excluded from the contributors page before the model is
/// built (bots and automation accounts).
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    names: FxHashSet<String>,
}

impl Blacklist {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Drops committers whose display name is blacklisted.
    pub fn filter(&self, committers: Vec<Committer>) -> Vec<Committer> {
        committers
            .into_iter()
            .filter(|c| !self.contains(&c.name))
            .collect()
    }
}

/// Manual corrections applied after the model is built: each name's record is
/// replaced unconditionally, whether or not the name appeared in history.
///
/// Kept as an ordered list so that overrides for names absent from history
/// land in the page in a stable position.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    entries: Vec<(String, Committer)>,
}

impl Overrides {
    pub fn new(entries: impl IntoIterator<Item = (impl Into<String>, Committer)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, committer)| (name.into(), committer))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Committer)> {
        self.entries
            .iter()
            .map(|(name, committer)| (name.as_str(), committer))
    }
}

/// The final mapping from display name to contact record, ready to render.
///
/// Insertion-ordered: the first insert of a name fixes its position, later
/// inserts for the same name replace the record in place.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    entries: Vec<Committer>,
    index: FxHashMap<String, usize>,
}

impl ViewModel {
    pub fn insert(&mut self, name: &str, committer: Committer) {
        match self.index.get(name) {
            Some(&i) => self.entries[i] = committer,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(committer);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Committer> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Committer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the view model from blacklist-filtered committers, then apply the
/// overrides.
///
/// Committers are inserted in iteration order with last write per name
/// winning. With chronological input, a name that committed under several
/// emails resolves to its most recent email while keeping the list position
/// of its first contribution.
pub fn build_view_model(committers: &[Committer], overrides: &Overrides) -> ViewModel {
    let mut model = ViewModel::default();
    for committer in committers {
        model.insert(&committer.name, committer.clone());
    }
    for (name, committer) in overrides.iter() {
        model.insert(name, committer.clone());
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_drops_matching_names() {
        let blacklist = Blacklist::new(["GitHub"]);
        let kept = blacklist.filter(vec![
            Committer::new("GitHub", "noreply@github.com"),
            Committer::new("Carol", "c@x.com"),
        ]);
        assert_eq!(kept, vec![Committer::new("Carol", "c@x.com")]);
    }

    #[test]
    fn blacklisted_names_never_reach_the_model() {
        let blacklist = Blacklist::new(["GitHub", "bors[bot]"]);
        let kept = blacklist.filter(vec![
            Committer::new("GitHub", "noreply@github.com"),
            Committer::new("bors[bot]", "bors@example.com"),
        ]);
        let model = build_view_model(&kept, &Overrides::default());
        assert!(model.is_empty());
    }

    #[test]
    fn builds_one_entry_per_name() {
        let committers = vec![
            Committer::new("Alice", "a@x.com"),
            Committer::new("Bob", "b@x.com"),
        ];
        let model = build_view_model(&committers, &Overrides::default());
        assert_eq!(model.len(), 2);
        assert_eq!(model.get("Alice"), Some(&Committer::new("Alice", "a@x.com")));
        assert_eq!(model.get("Bob"), Some(&Committer::new("Bob", "b@x.com")));
    }

    #[test]
    fn last_write_wins_for_duplicate_names() {
        let committers = vec![
            Committer::new("Alice", "old@x.com"),
            Committer::new("Bob", "b@x.com"),
            Committer::new("Alice", "new@x.com"),
        ];
        let model = build_view_model(&committers, &Overrides::default());
        assert_eq!(model.get("Alice"), Some(&Committer::new("Alice", "new@x.com")));
        // Replacement does not move Alice from her original position.
        let order: Vec<&str> = model.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(order, vec!["Alice", "Bob"]);
    }

    #[test]
    fn override_replaces_existing_record() {
        let committers = vec![Committer::new("James Munns", "old@x.com")];
        let overrides = Overrides::new([(
            "James Munns",
            Committer::new("James Munns", "james.munns@ferrous-systems.com"),
        )]);
        let model = build_view_model(&committers, &overrides);
        assert_eq!(
            model.get("James Munns"),
            Some(&Committer::new(
                "James Munns",
                "james.munns@ferrous-systems.com"
            ))
        );
    }

    #[test]
    fn override_inserts_name_absent_from_history() {
        let overrides = Overrides::new([("Ghost", Committer::new("Ghost", "ghost@x.com"))]);
        let model = build_view_model(&[], &overrides);
        assert_eq!(model.len(), 1);
        assert_eq!(model.get("Ghost"), Some(&Committer::new("Ghost", "ghost@x.com")));
    }
}
