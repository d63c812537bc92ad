//! Query key factory
//!
//! Produces ordered cache-key tuples an external query/caching layer uses to
//! deduplicate and invalidate "list" queries. Keys compare structurally: two
//! calls with structurally equal filters yield equal keys.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

/// One segment of a [`QueryKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySegment {
    /// Fixed identifying token
    Token(Cow<'static, str>),
    /// Arbitrary filter value, embedded as-is
    Filter(Value),
}

/// Ordered, immutable cache-key tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    segments: Vec<KeySegment>,
}

impl QueryKey {
    /// The key's segments, in order
    pub fn segments(&self) -> &[KeySegment] {
        &self.segments
    }

    /// Whether this key begins with all of `prefix`'s segments
    ///
    /// Caching layers use this to invalidate a whole family of queries at
    /// once, e.g. everything under `lists()`.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments
    }

    fn extended(mut self, segment: KeySegment) -> QueryKey {
        self.segments.push(segment);
        self
    }
}

/// Key factory for one entity family's "list" queries
///
/// ```
/// use query_client::QueryKeyFactory;
/// use serde_json::json;
///
/// const ARTICLE_KEYS: QueryKeyFactory = QueryKeyFactory::new("articles", "get_all_articles");
///
/// let key = ARTICLE_KEYS.list(&json!({"page": 2}))?;
/// assert!(key.starts_with(&ARTICLE_KEYS.lists()));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryKeyFactory {
    root: &'static str,
    list_op: &'static str,
}

impl QueryKeyFactory {
    /// Create a factory with the given root and list-operation segments
    pub const fn new(root: &'static str, list_op: &'static str) -> Self {
        Self { root, list_op }
    }

    /// Root tuple identifying the entity family
    pub fn all(&self) -> QueryKey {
        QueryKey {
            segments: vec![KeySegment::Token(Cow::Borrowed(self.root))],
        }
    }

    /// [`all`](Self::all) extended with the fixed list-operation segment
    pub fn lists(&self) -> QueryKey {
        self.all()
            .extended(KeySegment::Token(Cow::Borrowed(self.list_op)))
    }

    /// [`lists`](Self::lists) extended with one segment wrapping `filters`
    ///
    /// Any serializable value is accepted and embedded without transformation,
    /// so structurally equal filters produce structurally equal keys.
    pub fn list<F>(&self, filters: &F) -> Result<QueryKey, serde_json::Error>
    where
        F: Serialize + ?Sized,
    {
        let value = serde_json::to_value(filters)?;
        Ok(self.lists().extended(KeySegment::Filter(value)))
    }
}
