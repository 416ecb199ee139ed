// SPDX-License-Identifier: MPL-2.0
//! Navigation tree data.

use crate::ui::design_tokens::sizing;
use crate::ui::icons::Glyph;
use std::collections::HashSet;

/// One node of the navigation tree.
///
/// A node owns its children; the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    /// Leaf with a navigation target.
    Link {
        label: String,
        href: String,
        icon: Option<Glyph>,
    },
    /// Branch that expands to show its children.
    Group {
        label: String,
        icon: Option<Glyph>,
        children: Vec<SidebarItem>,
    },
    /// Plain entry without target or children.
    Label { label: String, icon: Option<Glyph> },
}

impl SidebarItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>, icon: Option<Glyph>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
            icon,
        }
    }

    pub fn group(label: impl Into<String>, icon: Option<Glyph>, children: Vec<SidebarItem>) -> Self {
        Self::Group {
            label: label.into(),
            icon,
            children,
        }
    }

    pub fn label(label: impl Into<String>, icon: Option<Glyph>) -> Self {
        Self::Label {
            label: label.into(),
            icon,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Group { label, .. } | Self::Label { label, .. } => {
                label
            }
        }
    }

    #[must_use]
    pub fn icon(&self) -> Option<Glyph> {
        match self {
            Self::Link { icon, .. } | Self::Group { icon, .. } | Self::Label { icon, .. } => *icon,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[SidebarItem] {
        match self {
            Self::Group { children, .. } => children,
            Self::Link { .. } | Self::Label { .. } => &[],
        }
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

/// Index path from the root list to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemPath(Vec<usize>);

impl ItemPath {
    /// Path of a top-level item.
    #[must_use]
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Nesting level; top-level items are at depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for ItemPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// Looks up the node at `path`.
#[must_use]
pub fn find<'a>(items: &'a [SidebarItem], path: &ItemPath) -> Option<&'a SidebarItem> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = items.get(*first)?;
    for index in rest {
        node = node.children().get(*index)?;
    }
    Some(node)
}

/// A node as it appears in the flattened list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub path: ItemPath,
    pub depth: usize,
    pub item: &'a SidebarItem,
}

impl VisibleRow<'_> {
    /// Left padding for this row, in pixels.
    #[must_use]
    pub fn indent(&self) -> f32 {
        indent(self.depth)
    }
}

/// Left padding for a row at `depth`.
#[must_use]
pub fn indent(depth: usize) -> f32 {
    depth as f32 * sizing::SIDEBAR_INDENT_STEP + sizing::SIDEBAR_INDENT_BASE
}

/// Flattens the tree in display order, descending only into expanded groups.
#[must_use]
pub fn visible_rows<'a>(items: &'a [SidebarItem], expanded: &HashSet<ItemPath>) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    let mut stack: Vec<(ItemPath, &SidebarItem)> = items
        .iter()
        .enumerate()
        .rev()
        .map(|(index, item)| (ItemPath::root(index), item))
        .collect();

    while let Some((path, item)) = stack.pop() {
        if item.is_group() && expanded.contains(&path) {
            stack.extend(
                item.children()
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(index, child)| (path.child(index), child)),
            );
        }
        rows.push(VisibleRow {
            depth: path.depth(),
            path,
            item,
        });
    }

    rows
}
