/// The identity git records as the committer of a commit.
///
/// Equality and hashing are by value on both fields, so a person who
/// committed under two emails counts as two distinct committers until the
/// view model collapses them by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

impl Committer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl std::fmt::Display for Committer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
