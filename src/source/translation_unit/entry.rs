use super::cursor::{CodeSpan, CursorKind};
use serde::{Deserialize, Serialize};

/// One node of the extracted AST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    pub kind: CursorKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub span: Option<CodeSpan>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Entry>,
}

impl Entry {
    pub fn root(children: Vec<Entry>) -> Entry {
        Entry {
            kind: CursorKind::Root,
            span: None,
            children,
        }
    }

    pub fn new(kind: CursorKind, span: Option<CodeSpan>) -> Entry {
        Entry {
            kind,
            span,
            children: vec![],
        }
    }

    pub fn with_children(mut self, children: Vec<Entry>) -> Entry {
        self.children = children;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.kind.name()
    }

    /// Pre-order traversal yielding each node with its depth (self is depth 0)
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// First node in pre-order matching the predicate
    pub fn find<P>(&self, mut predicate: P) -> Option<&Entry>
    where
        P: FnMut(&Entry) -> bool,
    {
        self.walk()
            .map(|(_, entry)| entry)
            .find(|entry| predicate(entry))
    }

    pub fn find_all<P>(&self, mut predicate: P) -> Vec<&Entry>
    where
        P: FnMut(&Entry) -> bool,
    {
        self.walk()
            .map(|(_, entry)| entry)
            .filter(|entry| predicate(entry))
            .collect()
    }

    /// First node with the given spelling
    pub fn find_named(&self, name: &str) -> Option<&Entry> {
        self.find(|entry| entry.name() == Some(name))
    }

    /// Number of nodes in this subtree, including self
    pub fn count(&self) -> usize {
        self.walk().count()
    }
}

pub struct Walk<'a> {
    stack: Vec<(usize, &'a Entry)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;
        self.stack
            .extend(entry.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, entry))
    }
}
