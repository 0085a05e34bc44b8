//! Nesting flat heading lists into an outline.

use crate::headings::HeadingRecord;

/// Node of a document outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutlineNode {
    /// Plain heading text.
    pub content: String,
    /// Heading anchor (slug).
    pub anchor: String,
    /// Source heading level.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub level: u8,
    /// Nested headings, in source order.
    #[cfg_attr(feature = "serde", serde(rename = "nodes"))]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn leaf(record: &HeadingRecord) -> Self {
        Self {
            content: record.content.clone(),
            anchor: record.anchor.clone(),
            level: record.level,
            children: Vec::new(),
        }
    }

    /// Flatten this node and its descendants back into records, depth first.
    #[must_use]
    pub fn flatten(&self) -> Vec<HeadingRecord> {
        let mut records = Vec::new();
        self.flatten_into(&mut records);
        records
    }

    fn flatten_into(&self, records: &mut Vec<HeadingRecord>) {
        records.push(HeadingRecord::new(
            self.content.clone(),
            self.anchor.clone(),
            self.level,
        ));
        for child in &self.children {
            child.flatten_into(records);
        }
    }
}

/// Builds an [`OutlineNode`] forest from a flat heading list.
///
/// Levels may skip (an H3 directly under an H1 becomes its child). A subtree
/// that has no preceding parent at a lower level is promoted into the current
/// sequence, so no heading is ever dropped.
///
/// # Examples
///
/// ```
/// use folio_renderer::{HeadingRecord, TreeBuilder};
///
/// let records = vec![
///     HeadingRecord::new("A", "a", 1),
///     HeadingRecord::new("B", "b", 2),
///     HeadingRecord::new("C", "c", 3),
///     HeadingRecord::new("D", "d", 2),
/// ];
/// let tree = TreeBuilder::build(&records);
///
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree[0].children[0].children[0].content, "C");
/// assert_eq!(tree[0].children[1].content, "D");
/// ```
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build the outline forest for `records`.
    #[must_use]
    pub fn build(records: &[HeadingRecord]) -> Vec<OutlineNode> {
        let start_level = records.iter().map(|r| r.level).min().unwrap_or(1);
        let (forest, next) = Self::build_level(records, 0, start_level);
        debug_assert_eq!(next, records.len());
        forest
    }

    /// Build the sequence of nodes at `level` starting at index `start`.
    ///
    /// Returns the nodes and the index of the first record not consumed,
    /// which is either the end of `records` or a record shallower than
    /// `level`.
    #[must_use]
    pub fn build_level(
        records: &[HeadingRecord],
        start: usize,
        level: u8,
    ) -> (Vec<OutlineNode>, usize) {
        let mut nodes: Vec<OutlineNode> = Vec::new();
        let mut i = start;

        while let Some(record) = records.get(i) {
            if record.level < level {
                break;
            }
            if record.level == level {
                nodes.push(OutlineNode::leaf(record));
                i += 1;
                continue;
            }

            let (subtree, next) = Self::build_level(records, i, record.level);
            match nodes.last_mut() {
                Some(parent) if parent.level < record.level => parent.children.extend(subtree),
                _ => nodes.extend(subtree),
            }
            i = next;
        }

        (nodes, i)
    }

    /// Flatten a forest back into records, depth first.
    #[must_use]
    pub fn flatten(forest: &[OutlineNode]) -> Vec<HeadingRecord> {
        forest.iter().flat_map(OutlineNode::flatten).collect()
    }
}
