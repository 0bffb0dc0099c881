use super::fixed_tree::FixedNode;

pub type TreeIndex = usize;

#[derive(Debug)]
pub struct MutableTreeNode {
    pub taxon: Option<String>,
    pub label: Option<String>,
    pub parent: Option<TreeIndex>,
    pub children: Vec<TreeIndex>,
    pub length: Option<f64>,
}

impl MutableTreeNode {
    pub(crate) fn new(taxon: Option<String>, parent: Option<TreeIndex>) -> Self {
        MutableTreeNode {
            taxon,
            label: None,
            parent,
            children: Vec::new(),
            length: None,
        }
    }
}

pub struct MutableTree {
    pub nodes: Vec<MutableTreeNode>,
    pub external_nodes: Vec<TreeIndex>,
    root: Option<TreeIndex>,
}

impl MutableTree {
    pub fn new(root: FixedNode) -> Self {
        let mut tree = MutableTree {
            nodes: Vec::new(),
            external_nodes: Vec::new(),
            root: None,
        };
        tree.new_helper(root, None);
        tree.set_root(Some(0));
        tree
    }

    fn new_helper(&mut self, node: FixedNode, parent: Option<TreeIndex>) {
        let index = self.add_node(MutableTreeNode::new(node.taxon, parent));
        if let Some(label) = node.label {
            self.label_node(index, label);
        }
        if let Some(length) = node.length {
            self.set_length(index, length);
        }
        if node.children.is_empty() {
            self.external_nodes.push(index);
        }
        for child in node.children {
            self.new_helper(*child, Some(index));
        }
    }

    fn add_node(&mut self, node: MutableTreeNode) -> TreeIndex {
        let index = self.nodes.len();
        let parent = node.parent;
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.add_child(parent, index);
        }
        index
    }

    pub fn add_child(&mut self, parent: TreeIndex, child: TreeIndex) {
        let parent_node = self.get_node_mut(parent).expect("parent not in tree");
        parent_node.children.push(child);
    }

    pub fn remove_child(&mut self, parent: TreeIndex, child: TreeIndex) {
        let parent_node = self.get_node_mut(parent).expect("parent not in tree");
        let position = parent_node
            .children
            .iter()
            .position(|c| *c == child)
            .expect("child not attached to parent");
        parent_node.children.remove(position);
    }

    pub fn set_parent(&mut self, parent: TreeIndex, child: TreeIndex) {
        let node = self.get_node_mut(child).expect("node not in tree");
        node.parent = Some(parent);
    }

    pub fn get_node(&self, index: TreeIndex) -> Option<&MutableTreeNode> {
        self.nodes.get(index)
    }

    fn get_node_mut(&mut self, index: TreeIndex) -> Option<&mut MutableTreeNode> {
        self.nodes.get_mut(index)
    }

    pub fn get_parent(&self, index: TreeIndex) -> Option<TreeIndex> {
        self.get_node(index).expect("node not in tree").parent
    }

    pub fn get_children(&self, index: TreeIndex) -> Vec<TreeIndex> {
        self.get_node(index).expect("node not in tree").children.clone()
    }

    pub fn set_length(&mut self, index: TreeIndex, bl: f64) {
        let node = self.get_node_mut(index).expect("node not in tree");
        node.length = Some(bl);
    }

    pub fn get_length(&self, index: TreeIndex) -> Option<f64> {
        self.get_node(index).expect("node not in tree").length
    }

    pub fn get_taxon(&self, index: TreeIndex) -> Option<&str> {
        self.get_node(index).expect("node not in tree").taxon.as_deref()
    }

    pub fn get_label(&self, index: TreeIndex) -> Option<&str> {
        self.get_node(index).expect("node not in tree").label.as_deref()
    }

    pub fn label_node(&mut self, index: TreeIndex, label: String) {
        let node = self.get_node_mut(index).expect("node not in tree");
        node.label = Some(label);
    }

    pub fn is_external(&self, index: TreeIndex) -> bool {
        self.get_node(index).expect("node not in tree").children.is_empty()
    }

    pub fn get_root(&self) -> Option<TreeIndex> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<TreeIndex>) {
        self.root = root
    }

    pub fn get_node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get_external_node_count(&self) -> usize {
        self.external_nodes.len()
    }

    pub fn get_external_node(&self, index: usize) -> TreeIndex {
        self.external_nodes[index]
    }

    pub fn preorder_iter(&self) -> Vec<TreeIndex> {
        let mut order = Vec::with_capacity(self.get_node_count());
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(index) = stack.pop() {
            order.push(index);
            let node = self.get_node(index).expect("node not in tree");
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        order
    }

    /// Insert a new unnamed node on the branch joining two adjacent
    /// nodes, `from_a` along the branch measured from `a`. The two new
    /// branch lengths sum to the original one.
    pub fn split_branch(&mut self, a: TreeIndex, b: TreeIndex, from_a: f64) -> TreeIndex {
        let (child, parent) = if self.get_parent(a) == Some(b) {
            (a, b)
        } else {
            assert_eq!(self.get_parent(b), Some(a), "nodes not joined by a branch");
            (b, a)
        };
        let length = self
            .get_length(child)
            .expect("cannot split a branch without a length");
        let index = self.nodes.len();
        self.nodes.push(MutableTreeNode::new(None, None));
        self.remove_child(parent, child);
        self.add_child(parent, index);
        self.set_parent(parent, index);
        self.add_child(index, child);
        self.set_parent(index, child);
        if child == a {
            self.set_length(child, from_a);
            self.set_length(index, length - from_a);
        } else {
            self.set_length(index, from_a);
            self.set_length(child, length - from_a);
        }
        index
    }

    /// Make the given node the root by reversing the parent/child
    /// orientation of every branch between it and the current root.
    /// Each branch keeps its length; the old root is left in place as a
    /// passthrough node.
    pub fn reroot(&mut self, new_root: TreeIndex) {
        if self.root == Some(new_root) {
            return;
        }
        let mut path = vec![new_root];
        while let Some(parent) = self.get_parent(*path.last().expect("path never empty")) {
            path.push(parent);
        }
        let lengths: Vec<Option<f64>> = path.iter().map(|index| self.get_length(*index)).collect();
        for i in 0..path.len() - 1 {
            let node = path[i];
            let old_parent = path[i + 1];
            self.remove_child(old_parent, node);
            self.add_child(node, old_parent);
            self.set_parent(node, old_parent);
            let reversed = self.get_node_mut(old_parent).expect("node not in tree");
            reversed.length = lengths[i];
        }
        let root_node = self.get_node_mut(new_root).expect("node not in tree");
        root_node.parent = None;
        root_node.length = None;
        self.set_root(Some(new_root));
    }
}
