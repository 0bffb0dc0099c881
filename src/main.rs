mod commands;

use phylo::io::error::IoError;
use phylo::io::parser::newick_importer::NewickImporter;
use std::error::Error;
use std::path;
use structopt::StructOpt;

#[macro_use]
extern crate log;

#[derive(Debug, StructOpt)]
#[structopt(about = "re-root a phylogenetic tree at the midpoint of its longest tip-to-tip path")]
struct Midroot {
    #[structopt(parse(from_os_str), help = "input tree file, stdin if not given")]
    infile: Option<path::PathBuf>,
}

fn run(args: Midroot) -> Result<(), Box<dyn Error>> {
    match args.infile {
        Some(path) => {
            let trees = NewickImporter::from_path(&path)
                .map_err(|e| IoError::Io(format!("{}: {}", path.display(), e)))?;
            commands::reroot::run(trees)
        }
        None => {
            let stdin = std::io::stdin();
            let trees = NewickImporter::from_console(&stdin);
            commands::reroot::run(trees)
        }
    }
}

fn main() {
    env_logger::init();
    info!("starting up");
    let args = Midroot::from_args();
    debug!("{:?}", args);
    let start = std::time::Instant::now();
    let result = run(args);
    info!("{} seconds elapsed", start.elapsed().as_secs());
    match result {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exitcode::IOERR);
        }
    }
}
