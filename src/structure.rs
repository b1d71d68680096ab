//! The static project skeleton.

/// One directory of the template.
///
/// Children are kept in declaration order; an empty slice marks a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderNode {
    pub name: &'static str,
    pub children: &'static [FolderNode],
}

impl FolderNode {
    /// A folder without subfolders.
    pub const fn leaf(name: &'static str) -> Self {
        Self { name, children: &[] }
    }

    /// A folder with the given subfolders.
    pub const fn branch(name: &'static str, children: &'static [FolderNode]) -> Self {
        Self { name, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Total number of nodes in a forest, descendants included.
pub fn count_nodes(tree: &[FolderNode]) -> usize {
    tree.iter().map(|node| 1 + count_nodes(node.children)).sum()
}

/// Folder layout of a media project.
pub const PROJECT_STRUCTURE: &[FolderNode] = &[
    FolderNode::leaf("00 Proj"),
    FolderNode::branch(
        "01 Video",
        &[
            FolderNode::leaf("K 1"),
            FolderNode::leaf("K 2"),
            FolderNode::leaf("K 3"),
            FolderNode::leaf("Audio"),
        ],
    ),
    FolderNode::leaf("02 Additional"),
    FolderNode::leaf("03 Music"),
    FolderNode::leaf("04 SFX"),
    FolderNode::leaf("05 Export"),
];
