//! Document-store boundary: collections, filtered queries, and the async read trait.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Collections known to the store. Names are the wire contract.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Collection {
    Tournaments,
    Stages,
    Clubs,
    Players,
    Teams,
    Matches,
    Posts,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Tournaments,
        Collection::Stages,
        Collection::Clubs,
        Collection::Players,
        Collection::Teams,
        Collection::Matches,
        Collection::Posts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Tournaments => "tournaments",
            Collection::Stages => "stages",
            Collection::Clubs => "clubs",
            Collection::Players => "players",
            Collection::Teams => "teams",
            Collection::Matches => "matches",
            Collection::Posts => "posts",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored document: the store-assigned id plus its field set.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// Comparison applied by a [`Filter`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Eq,
    Gte,
    Lt,
    /// True when any value reached by the field path equals the operand.
    /// Arrays met along the path are searched element by element.
    Contains,
}

/// One predicate of a query. Fields are dotted paths (`players.A.playerId`).
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: Op,
    pub value: Value,
}

impl Filter {
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Op::Eq, value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Op::Gte, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Op::Lt, value)
    }

    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Op::Contains, value)
    }

    /// Evaluate the predicate against a document body.
    pub fn matches(&self, data: &Value) -> bool {
        match self.op {
            Op::Contains => {
                let segments: Vec<&str> = self.field.split('.').collect();
                let mut reached = Vec::new();
                collect_path(data, &segments, &mut reached);
                reached.into_iter().any(|v| *v == self.value)
            }
            op => {
                let Some(field) = lookup(data, &self.field) else {
                    return false;
                };
                match (op, compare(field, &self.value)) {
                    (Op::Eq, Some(Ordering::Equal)) => true,
                    (Op::Gte, Some(Ordering::Greater | Ordering::Equal)) => true,
                    (Op::Lt, Some(Ordering::Less)) => true,
                    _ => false,
                }
            }
        }
    }
}

fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(data, |value, key| value.get(key))
}

fn collect_path<'a>(value: &'a Value, segments: &[&str], out: &mut Vec<&'a Value>) {
    if let Value::Array(items) = value {
        for item in items {
            collect_path(item, segments, out);
        }
        return;
    }
    match segments.split_first() {
        None => out.push(value),
        Some((head, rest)) => {
            if let Some(next) = value.get(*head) {
                collect_path(next, rest, out);
            }
        }
    }
}

/// Strings order lexicographically, numbers numerically; mixed kinds never compare.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Failures raised by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("unknown collection `{0}`")]
    UnknownCollection(String),
    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

/// Read-only access to the document store. Implementations must be reentrant.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError>;

    async fn get_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Documents satisfying every filter, in store order.
    async fn query(
        &self,
        collection: Collection,
        filters: &[Filter],
    ) -> Result<Vec<Document>, StoreError>;
}

/// A typed document living in a fixed collection.
pub trait Record: DeserializeOwned {
    const COLLECTION: Collection;

    fn assign_id(&mut self, id: String);
}
