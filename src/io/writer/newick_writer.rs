use crate::tree::mutable_tree::{MutableTree, TreeIndex};
use std::fmt;

pub fn write_newick(tree: &MutableTree) -> String {
    let mut s = write_node(tree, tree.get_root().expect("tree has no root"));
    s.push(';');
    s
}

fn write_node(tree: &MutableTree, node_ref: TreeIndex) -> String {
    let mut s = String::new();
    if tree.is_external(node_ref) {
        if let Some(taxon) = tree.get_taxon(node_ref) {
            s.push_str(&format_name(taxon));
        }
    } else {
        s.push('(');
        let children = tree
            .get_children(node_ref)
            .iter()
            .map(|child| write_node(tree, *child))
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(&children);
        s.push(')');
        if let Some(label) = tree.get_label(node_ref) {
            s.push_str(&format_name(label));
        }
    }
    if let Some(length) = tree.get_length(node_ref) {
        s.push(':');
        s.push_str(&length.to_string());
    }
    s
}

// names with structural characters go out single quoted, embedded
// quotes doubled
fn format_name(name: &str) -> String {
    let plain = !name.is_empty()
        && !name
            .chars()
            .any(|c| "(),:;[]'\"".contains(c) || c.is_whitespace());
    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

impl fmt::Display for MutableTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", write_newick(self))
    }
}

#[cfg(test)]
mod tests {
    use super::write_newick;
    use crate::io::parser::newick_parser::NewickParser;
    use crate::tree::mutable_tree::MutableTree;

    fn tree(newick: &str) -> MutableTree {
        MutableTree::new(NewickParser::parse_tree(newick).unwrap())
    }

    #[test]
    fn plain_round_trip() {
        let newick = "(a:1,(b:0.5,c:2.25):1)root;";
        assert_eq!(write_newick(&tree(newick)), newick);
    }

    #[test]
    fn quoted_names_round_trip() {
        let newick = "('one tip':1,'it''s':2);";
        let written = write_newick(&tree(newick));
        assert_eq!(written, newick);
        let reparsed = tree(&written);
        let root = reparsed.get_root().unwrap();
        let names: Vec<&str> = reparsed
            .get_children(root)
            .iter()
            .filter_map(|child| reparsed.get_taxon(*child))
            .collect();
        assert_eq!(names, vec!["one tip", "it's"]);
    }

    #[test]
    fn rerooted_tree_round_trips() {
        let mut t = tree("(A:1,(B:1,(C:1,D:3):1):1);");
        t.root_at_midpoint().unwrap();
        let written = format!("{}", t);
        let reparsed = tree(&written);
        assert_eq!(
            reparsed.get_external_node_count(),
            t.get_external_node_count()
        );
        assert_eq!(write_newick(&reparsed), written);
    }
}
