use std::fmt;

/// Ordered list of segments naming a cached query, e.g. `["posts", "42"]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` matches the leading segments of this key.
    /// Every key starts with itself.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// A new key with one more segment.
    pub fn with(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }
}

impl From<&str> for QueryKey {
    fn from(segment: &str) -> Self {
        Self::new([segment])
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        let posts = QueryKey::from("posts");
        let user_posts = posts.with("u1");

        assert!(user_posts.starts_with(&posts));
        assert!(posts.starts_with(&posts));
        assert!(!posts.starts_with(&user_posts));
        assert!(!QueryKey::from("usersData").starts_with(&posts));
        assert!(user_posts.starts_with(&QueryKey::new(Vec::<String>::new())));
    }

    #[test]
    fn test_display() {
        assert_eq!(QueryKey::new(["posts", "u1"]).to_string(), "[posts, u1]");
    }
}
