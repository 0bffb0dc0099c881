use crate::tree::fixed_tree::FixedNode;
use pest_consume::{match_nodes, Error, Parser};

#[derive(Parser)]
#[grammar = "io/parser/newick.pest"]
pub struct NewickParser;

type Result<T> = std::result::Result<T, Error<Rule>>;
type Node<'i> = pest_consume::Node<'i, Rule, ()>;

#[pest_consume::parser]
impl NewickParser {
    fn EOI(_input: Node) -> Result<()> {
        Ok(())
    }

    fn branchlength(input: Node) -> Result<f64> {
        input
            .as_str()
            .parse::<f64>()
            // `input.error` links the error to the location in the input
            .map_err(|e| input.error(e))
    }

    fn length(input: Node) -> Result<f64> {
        Ok(match_nodes!(input.into_children();
            [branchlength(n)] => n
        ))
    }

    fn name(input: Node) -> Result<String> {
        let name = input.as_str();
        if name.starts_with('\'') && name.ends_with('\'') && name.len() >= 2 {
            Ok(name[1..name.len() - 1].replace("''", "'"))
        } else {
            Ok(name.to_string())
        }
    }

    fn leaf(input: Node) -> Result<FixedNode> {
        Ok(match_nodes!(input.into_children();
            [name(n)] => {
                let mut tip = FixedNode::new();
                tip.taxon = Some(n);
                tip
            }
        ))
    }

    fn branch(input: Node) -> Result<FixedNode> {
        Ok(match_nodes!(input.into_children();
            [subtree(mut n), length(l)] => { n.length = Some(l); n },
            [subtree(n)] => n
        ))
    }

    fn branchset(input: Node) -> Result<Vec<FixedNode>> {
        let mut children: Vec<FixedNode> = vec![];
        Ok(match_nodes!(input.into_children();
            [branch(child)] => {
                children.push(child);
                children
            },
            [branch(child), branchset(siblings)] => {
                children.push(child);
                for sibling in siblings {
                    children.push(sibling);
                }
                children
            }
        ))
    }

    fn internal(input: Node) -> Result<FixedNode> {
        let mut internal = FixedNode::new();
        Ok(match_nodes!(input.into_children();
            [branchset(children)] => {
                for child in children {
                    internal.children.push(Box::new(child));
                }
                internal
            },
            [branchset(children), name(n)] => {
                for child in children {
                    internal.children.push(Box::new(child));
                }
                internal.label = Some(n);
                internal
            }
        ))
    }

    fn subtree(input: Node) -> Result<FixedNode> {
        Ok(match_nodes!(input.into_children();
            [leaf(tip)] => tip,
            [internal(node)] => node
        ))
    }

    fn tree(input: Node) -> Result<FixedNode> {
        Ok(match_nodes!(input.into_children();
            [branch(root), EOI(_)] => root
        ))
    }
}

impl NewickParser {
    pub fn parse_tree(input: &str) -> Result<FixedNode> {
        let inputs = NewickParser::parse(Rule::tree, input)?;
        let input = inputs.single()?;
        NewickParser::tree(input)
    }
}

#[cfg(test)]
mod tests {
    use super::NewickParser;
    use crate::tree::mutable_tree::MutableTree;

    #[test]
    fn general_parse() {
        let tree = MutableTree::new(NewickParser::parse_tree("(a:1,b:4)l;").unwrap());
        let root = tree.get_root().unwrap();
        assert_eq!(tree.get_label(root), Some("l"));
        let mut names = vec![];
        for child in tree.get_children(root) {
            if let Some(t) = tree.get_taxon(child) {
                names.push(t.to_string());
            }
        }
        assert_eq!(names, vec!["a", "b"]);

        let mut bl = vec![];
        for child in tree.get_children(root) {
            if let Some(l) = tree.get_length(child) {
                bl.push(l);
            }
        }
        assert_eq!(bl, vec![1.0, 4.0]);
    }

    #[test]
    fn scientific() {
        let tree = MutableTree::new(NewickParser::parse_tree("(a:1E1,b:2e-5);").unwrap());
        let root = tree.get_root().unwrap();
        let mut bl = vec![];
        for child in tree.get_children(root) {
            if let Some(l) = tree.get_length(child) {
                bl.push(l);
            }
        }
        assert_eq!(bl, vec![10.0, 0.00002]);
    }

    #[test]
    fn quoted() {
        let tree = MutableTree::new(
            NewickParser::parse_tree("('234] ':1,'it''s a tip':1);").unwrap(),
        );
        let root = tree.get_root().unwrap();
        let names: Vec<&str> = tree
            .get_children(root)
            .iter()
            .filter_map(|child| tree.get_taxon(*child))
            .collect();
        assert_eq!(names, vec!["234] ", "it's a tip"]);
    }

    #[test]
    fn comment() {
        assert!(NewickParser::parse_tree("(a[&test=ok],b:1);").is_ok());
    }

    #[test]
    fn whitespace() {
        assert!(NewickParser::parse_tree("  (a,b:1);\t").is_ok());
    }

    #[test]
    fn root_branch_length() {
        let root = NewickParser::parse_tree("(a:1,b:2):0.5;").unwrap();
        assert_eq!(root.length, Some(0.5));
    }

    #[test]
    fn bare_tip() {
        let root = NewickParser::parse_tree("A;").unwrap();
        assert_eq!(root.taxon.as_deref(), Some("A"));
        assert!(root.children.is_empty());
    }

    #[test]
    fn should_error() {
        assert!(NewickParser::parse_tree("('234] ','here a *')").is_err());
    }

    #[test]
    fn should_error_again() {
        assert!(NewickParser::parse_tree("(a,b));").is_err());
    }

    #[test]
    fn error_carries_a_position() {
        let message = NewickParser::parse_tree("(a,b));").unwrap_err().to_string();
        assert!(message.contains("1:6"), "no position in: {}", message);
    }
}
