use phylo::io::error::IoError;
use phylo::io::parser::tree_importer::TreeImporter;
use std::error::Error;
use std::io::Write;

pub fn run<R: std::io::Read, T: TreeImporter<R>>(mut trees: T) -> Result<(), Box<dyn Error>> {
    let stdout = std::io::stdout(); // get the global stdout entity
    let mut handle = stdout.lock(); // acquire a lock on it
    let mut count = 0;
    while trees.has_tree() {
        let mut tree = trees.read_next_tree()?;
        debug!("read tree with {} tips", tree.get_external_node_count());
        tree.root_at_midpoint()?;
        writeln!(handle, "{}", tree)?;
        count += 1;
    }
    if count == 0 {
        return Err(Box::new(IoError::Format(String::from(
            "no tree found in input",
        ))));
    }
    Ok(())
}
