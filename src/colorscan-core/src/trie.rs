//! Byte trie with longest-prefix lookup.
//!
//! Nodes live in a flat arena and refer to their children by index. Edge
//! lists are short (color names branch rarely), so each node keeps them in a
//! small inline vector and searches linearly.

use smallvec::SmallVec;

type NodeId = u32;

#[derive(Debug, Default, Clone)]
struct Node {
    edges: SmallVec<[(u8, NodeId); 4]>,
    terminal: bool,
}

impl Node {
    #[inline]
    fn child(&self, byte: u8) -> Option<NodeId> {
        self.edges
            .iter()
            .find(|(edge, _)| *edge == byte)
            .map(|(_, id)| *id)
    }
}

/// A prefix tree over byte strings.
///
/// Only inserted keys are matchable; interior nodes created on the way to a
/// key are never reported by lookups.
///
/// # Examples
///
/// ```
/// use colorscan_core::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("red");
/// trie.insert("redwood");
///
/// let line = b"redwoods";
/// assert_eq!(trie.longest_prefix(line, 0), Some("redwood"));
/// assert_eq!(trie.longest_prefix(b"re", 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    /// Creates a trie holding every key of the iterator.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for key in keys {
            trie.insert(key.as_ref());
        }
        trie
    }

    /// Inserts a key, returning `true` if it was not present before.
    ///
    /// The empty key is ignored: a zero-length match is never useful.
    pub fn insert(&mut self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }

        let mut current: usize = 0;
        for &byte in key.as_bytes() {
            current = match self.nodes[current].child(byte) {
                Some(id) => id as usize,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].edges.push((byte, id as NodeId));
                    id
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.len += 1;
            true
        }
    }

    /// Returns `true` if `key` was inserted.
    pub fn contains(&self, key: &str) -> bool {
        let mut current: usize = 0;
        for &byte in key.as_bytes() {
            match self.nodes[current].child(byte) {
                Some(id) => current = id as usize,
                None => return false,
            }
        }
        self.nodes[current].terminal
    }

    /// Finds the longest inserted key that starts at `offset` in `line`.
    ///
    /// The walk stops at the end of `line`; bytes past it are never read.
    /// Returns the matched slice of `line`, or `None` when no key matches.
    /// A key that is not valid UTF-8 on its own cannot be inserted, so the
    /// returned slice is always a complete key.
    pub fn longest_prefix<'a>(&self, line: &'a [u8], offset: usize) -> Option<&'a str> {
        let rest = line.get(offset..)?;
        let mut current: usize = 0;
        let mut longest = None;

        for (i, &byte) in rest.iter().enumerate() {
            match self.nodes[current].child(byte) {
                Some(id) => current = id as usize,
                None => break,
            }
            if self.nodes[current].terminal {
                longest = Some(i + 1);
            }
        }

        longest.and_then(|end| std::str::from_utf8(&rest[..end]).ok())
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key was inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
