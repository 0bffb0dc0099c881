use super::mutable_tree::{MutableTree, TreeIndex};
use super::TreeError;

impl MutableTree {
    /// Re-root the tree halfway along its longest tip-to-tip path.
    ///
    /// If the midpoint falls on an existing node that node becomes the
    /// root, otherwise the branch it falls in is split and the inserted
    /// node takes over. Tip names and all pairwise tip distances are
    /// unchanged.
    pub fn root_at_midpoint(&mut self) -> Result<(), TreeError> {
        let root = self
            .get_root()
            .ok_or_else(|| TreeError::InvalidTree(String::from("tree has no root")))?;
        if self.get_external_node_count() < 2 {
            return Err(TreeError::InvalidTree(format!(
                "midpoint rooting needs at least two tips, found {}",
                self.get_external_node_count()
            )));
        }
        for node in self.preorder_iter() {
            if node != root && self.get_length(node).is_none() {
                return Err(TreeError::MissingBranchLength(self.describe_branch(node)));
            }
        }

        let (distances, _) = self.distances_from(self.get_external_node(0));
        let tip_a = self.farthest_tip(&distances);
        let (distances, towards_a) = self.distances_from(tip_a);
        let tip_b = self.farthest_tip(&distances);
        let diameter = distances[tip_b];
        if diameter <= 0.0 {
            return Err(TreeError::InvalidTree(String::from(
                "all tip-to-tip distances are zero",
            )));
        }
        let half = diameter / 2.0;

        // walk in from the far end of the longest path until half the
        // diameter is covered
        let mut node = tip_b;
        let mut walked = 0.0;
        let new_root = loop {
            let next = towards_a[node].expect("longest path walk escaped the tree");
            let step = distances[node] - distances[next];
            if walked + step >= half {
                if walked + step - half <= f64::EPSILON * diameter {
                    break next;
                }
                break self.split_branch(node, next, half - walked);
            }
            walked += step;
            node = next;
        };
        self.reroot(new_root);
        Ok(())
    }

    /// Distance from `start` to every node, ignoring branch direction,
    /// along with each node's neighbour on the path back to `start`.
    fn distances_from(&self, start: TreeIndex) -> (Vec<f64>, Vec<Option<TreeIndex>>) {
        let mut distances = vec![f64::INFINITY; self.get_node_count()];
        let mut towards_start = vec![None; self.get_node_count()];
        distances[start] = 0.0;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for (neighbour, length) in self.neighbours(node) {
                if distances[neighbour].is_finite() {
                    continue;
                }
                distances[neighbour] = distances[node] + length;
                towards_start[neighbour] = Some(node);
                stack.push(neighbour);
            }
        }
        (distances, towards_start)
    }

    fn neighbours(&self, node: TreeIndex) -> Vec<(TreeIndex, f64)> {
        let mut neighbours = Vec::new();
        if let Some(parent) = self.get_parent(node) {
            neighbours.push((parent, self.get_length(node).unwrap_or(0.0)));
        }
        for child in self.get_children(node) {
            neighbours.push((child, self.get_length(child).unwrap_or(0.0)));
        }
        neighbours
    }

    fn farthest_tip(&self, distances: &[f64]) -> TreeIndex {
        let mut best = self.get_external_node(0);
        for i in 1..self.get_external_node_count() {
            let tip = self.get_external_node(i);
            if distances[tip] > distances[best] {
                best = tip;
            }
        }
        best
    }

    fn describe_branch(&self, node: TreeIndex) -> String {
        match self.get_taxon(node) {
            Some(taxon) => format!("the branch above tip '{}'", taxon),
            None => format!("the branch above internal node {}", node),
        }
    }
}
