use crate::catalog::Candidate;

/// The user-maintained ban list of attribute values.
///
/// Insertion order is preserved for display; uniqueness is enforced on
/// insert. Membership is exact string equality. The discovery loop reads
/// this set but never mutates it; `add`/`remove` belong to the surrounding
/// session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    values: Vec<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value. No-op if already present: size and order are unchanged.
    pub fn add(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.contains(&value) {
            self.values.push(value);
        }
    }

    /// Remove a value. No-op if absent.
    pub fn remove(&mut self, value: &str) {
        self.values.retain(|v| v != value);
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// True if any of the candidate's attributes (origin, life-span label,
    /// breed name) is banned.
    pub fn bans(&self, candidate: &Candidate) -> bool {
        self.contains(&candidate.origin)
            || self.contains(&candidate.life_span_label)
            || self.contains(&candidate.name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}
