//! In-memory file tree for the sidebar.
//!
//! The tree is provided data, not disk state: the app is seeded with a fixed
//! set of folders and notes. Folders collapse and expand; navigation runs
//! over the flattened projection of visible rows.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    pub name: String,
    pub kind: NodeKind,
    pub path: String,
    pub children: Vec<FileNode>,
}

impl FileNode {
    pub fn file(name: &str, path: &str) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            path: path.into(),
            children: vec![],
        }
    }

    pub fn folder(name: &str, path: &str, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            path: path.into(),
            children,
        }
    }

    pub fn is_note(&self) -> bool {
        self.kind == NodeKind::File && self.name.ends_with(".note")
    }
}

/// One row of the flattened tree as the sidebar renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow {
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub expanded: bool,
}

#[derive(Debug)]
pub struct FileTree {
    pub nodes: Vec<FileNode>,
    pub selected: usize,
    collapsed: HashSet<String>,
}

impl FileTree {
    pub fn new(nodes: Vec<FileNode>) -> Self {
        Self {
            nodes,
            selected: 0,
            collapsed: HashSet::new(),
        }
    }

    /// Flatten the tree honoring collapse state, depth-first.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        for node in &self.nodes {
            self.flatten_into(node, 0, &mut rows);
        }
        rows
    }

    fn flatten_into(&self, node: &FileNode, depth: usize, rows: &mut Vec<VisibleRow>) {
        let expanded = node.kind == NodeKind::Folder && !self.collapsed.contains(&node.path);
        rows.push(VisibleRow {
            path: node.path.clone(),
            name: node.name.clone(),
            kind: node.kind,
            depth,
            expanded,
        });
        if expanded {
            for child in &node.children {
                self.flatten_into(child, depth + 1, rows);
            }
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.visible_rows().len();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// Activate the selected row: folders toggle, files are returned for the
    /// shell to open.
    pub fn activate(&mut self) -> Option<FileNode> {
        let row = self.visible_rows().into_iter().nth(self.selected)?;
        match row.kind {
            NodeKind::Folder => {
                if !self.collapsed.remove(&row.path) {
                    self.collapsed.insert(row.path);
                }
                // Collapsing can shrink the visible list under the cursor
                let count = self.visible_rows().len();
                self.selected = self.selected.min(count.saturating_sub(1));
                None
            }
            NodeKind::File => self.find(&row.path).cloned(),
        }
    }

    fn find(&self, path: &str) -> Option<&FileNode> {
        fn walk<'a>(nodes: &'a [FileNode], path: &str) -> Option<&'a FileNode> {
            for node in nodes {
                if node.path == path {
                    return Some(node);
                }
                if let Some(found) = walk(&node.children, path) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.nodes, path)
    }

    /// All `.note` leaves in tree order, for the welcome screen lists.
    pub fn note_files(&self) -> Vec<FileNode> {
        fn walk(nodes: &[FileNode], out: &mut Vec<FileNode>) {
            for node in nodes {
                if node.is_note() {
                    out.push(node.clone());
                }
                walk(&node.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }
}

/// The workspace the app starts with.
pub fn initial_tree() -> Vec<FileNode> {
    vec![
        FileNode::folder(
            "Getting Started",
            "/getting-started",
            vec![
                FileNode::file("Welcome.note", "/getting-started/welcome.note"),
                FileNode::file("Installation.note", "/getting-started/installation.note"),
            ],
        ),
        FileNode::folder(
            "Project Files",
            "/project-files",
            vec![
                FileNode::file("ideas.note", "/project-files/ideas.note"),
                FileNode::file("ui-mockup.js", "/project-files/ui-mockup.js"),
            ],
        ),
    ]
}
