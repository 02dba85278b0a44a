//! Path addressing into a content tree.
//!
//! Draft mutations are expressed against the JSON form of the bundle: a
//! [`ContentPath`] walks object keys and array indices down to one node, and
//! [`apply`] rebuilds the tree with an update at that node while leaving the
//! input tree untouched.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// One step into the content tree: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Index(usize),
    Key(String),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => formatter.write_str(key),
            Segment::Index(index) => write!(formatter, "{index}"),
        }
    }
}

/// Ordered segments locating one node inside a content tree.
///
/// The empty path addresses the tree root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContentPath(Vec<Segment>);

impl ContentPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment, builder style.
    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        self.0.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a dotted path such as `trainingData.0.videos.2.title`.
    ///
    /// Components that parse as numbers become indices, everything else a
    /// key; empty components are skipped.
    pub fn parse(input: &str) -> Self {
        input
            .split('.')
            .filter(|component| !component.is_empty())
            .map(|component| match component.parse::<usize>() {
                Ok(index) => Segment::Index(index),
                Err(_) => Segment::Key(component.to_string()),
            })
            .collect()
    }
}

impl<S: Into<Segment>> FromIterator<S> for ContentPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ContentPath(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 {
                formatter.write_str(".")?;
            }
            write!(formatter, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for ContentPath {
    type Err = std::convert::Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(input))
    }
}

/// Errors from applying a patch to a content tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// A segment named a key or index the tree does not contain.
    #[error("path does not resolve at `{0}`")]
    PathNotFound(Segment),
}

/// Borrowing lookup of the node at `path`, if the whole path resolves.
pub fn get<'tree>(tree: &'tree Value, path: &[Segment]) -> Option<&'tree Value> {
    path.iter().try_fold(tree, |node, segment| match segment {
        Segment::Key(key) => node.as_object()?.get(key),
        Segment::Index(index) => node.as_array()?.get(*index),
    })
}

/// Applies `updater` to the node at `path`, returning a rebuilt tree.
///
/// The input tree is never mutated: containers along the path are cloned and
/// the patched child is swapped in, so the result shares no structure that a
/// previously handed-out snapshot could observe changing.
pub fn apply<F>(tree: &Value, path: &[Segment], updater: F) -> Result<Value, PatchError>
where
    F: FnOnce(&mut Value),
{
    match path.split_first() {
        None => {
            let mut node = tree.clone();
            updater(&mut node);
            Ok(node)
        }
        Some((segment, rest)) => match (tree, segment) {
            (Value::Object(entries), Segment::Key(key)) => {
                let child = entries
                    .get(key)
                    .ok_or_else(|| PatchError::PathNotFound(segment.clone()))?;
                let patched = apply(child, rest, updater)?;
                let mut entries = entries.clone();
                entries.insert(key.clone(), patched);
                Ok(Value::Object(entries))
            }
            (Value::Array(items), Segment::Index(index)) => {
                let child = items
                    .get(*index)
                    .ok_or_else(|| PatchError::PathNotFound(segment.clone()))?;
                let patched = apply(child, rest, updater)?;
                let mut items = items.clone();
                items[*index] = patched;
                Ok(Value::Array(items))
            }
            _ => Err(PatchError::PathNotFound(segment.clone())),
        },
    }
}
