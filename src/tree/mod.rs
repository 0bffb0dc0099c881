use std::error::Error;
use std::fmt;

pub mod fixed_tree;
pub mod midpoint;
pub mod mutable_tree;

#[derive(Debug, Clone)]
pub enum TreeError {
    InvalidTree(String),
    MissingBranchLength(String),
}

impl Error for TreeError {}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeError::InvalidTree(msg) => write!(f, "invalid tree: {}", msg),
            TreeError::MissingBranchLength(branch) => {
                write!(f, "missing branch length on {}", branch)
            }
        }
    }
}
