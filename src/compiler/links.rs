use ahash::AHashMap;
use std::fmt;

use crate::error::CompileError;
use crate::graph::{Connection, is_execution_pin};

/// How many distinct nodes the single-letter id scheme can name.
///
/// This is a hard limit, not a soft one: the 27th participating node aborts
/// the pass with [`CompileError::TooManyNodes`].
pub const SHORT_ID_LIMIT: usize = 26;

/// Compact per-pass node tag, `a` through `z` in first-seen order.
///
/// Short ids are stable only within a single resolution pass. They must not
/// be persisted or compared across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortId(char);

impl ShortId {
    pub fn as_char(self) -> char {
        self.0
    }

    fn nth(index: usize) -> Self {
        debug_assert!(index < SHORT_ID_LIMIT);
        Self((b'a' + index as u8) as char)
    }

    fn index(self) -> usize {
        (self.0 as u8 - b'a') as usize
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bijection between node uuids and short ids for one resolution pass.
#[derive(Debug, Clone, Default)]
pub struct ShortIdMap {
    forward: AHashMap<String, ShortId>,
    reverse: Vec<String>,
}

impl ShortIdMap {
    /// Returns the short id for `uuid`, assigning the next free letter on
    /// first encounter.
    fn assign(&mut self, uuid: &str) -> Result<ShortId, CompileError> {
        if let Some(id) = self.forward.get(uuid) {
            return Ok(*id);
        }
        if self.reverse.len() >= SHORT_ID_LIMIT {
            return Err(CompileError::TooManyNodes {
                uuid: uuid.to_string(),
                limit: SHORT_ID_LIMIT,
            });
        }
        let id = ShortId::nth(self.reverse.len());
        self.forward.insert(uuid.to_string(), id);
        self.reverse.push(uuid.to_string());
        Ok(id)
    }

    pub fn get(&self, uuid: &str) -> Option<ShortId> {
        self.forward.get(uuid).copied()
    }

    pub fn uuid_of(&self, id: ShortId) -> Option<&str> {
        self.reverse.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}

/// A canonical, deduplicated dependency edge between two nodes.
///
/// `child` is the short id of the connection's `end` node, `parent` of its
/// `start` node; the pair encodes the parent -> child direction the forest
/// builder consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub child: ShortId,
    pub parent: ShortId,
}

impl fmt::Display for Link {
    /// Prints the link in its `child parent` key form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.child, self.parent)
    }
}

/// Output of one link-resolution pass over a connection list.
#[derive(Debug, Clone, Default)]
pub struct LinkResolution {
    /// Links in first-seen order.
    pub links: Vec<Link>,
    /// The representative connection for each link. When several connections
    /// collapse into one link, the latest one seen wins.
    pub representatives: AHashMap<Link, Connection>,
    /// The uuid <-> short id bijection of this pass.
    pub ids: ShortIdMap,
}

/// Resolves a connection list into canonical dependency links.
///
/// Connections are processed in input order. A connection wired between two
/// execution pins carries branching structure for the editor, not a
/// dependency edge, and is skipped. For everything else, short ids are
/// assigned to the start node and then the end node on first encounter, and
/// the `(end, start)` pair forms the link key. A repeated key keeps its
/// first-seen position in the link list but overwrites the stored
/// representative connection.
pub fn resolve_links(connections: &[Connection]) -> Result<LinkResolution, CompileError> {
    let mut resolution = LinkResolution::default();

    for conn in connections {
        if is_execution_pin(&conn.start_pin) && is_execution_pin(&conn.end_pin) {
            continue;
        }

        let parent = resolution.ids.assign(&conn.start_uuid)?;
        let child = resolution.ids.assign(&conn.end_uuid)?;
        let link = Link { child, parent };

        if !resolution.representatives.contains_key(&link) {
            resolution.links.push(link);
        }
        // Last write wins for the representative; position stays first-seen.
        resolution.representatives.insert(link, conn.clone());
    }

    Ok(resolution)
}
