use super::newick_parser::NewickParser;
use crate::io::error::IoError;
use crate::io::parser::tree_importer::TreeImporter;
use crate::tree::mutable_tree::MutableTree;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::Path;

//https://stackoverflow.com/questions/36088116/how-to-do-polymorphic-io-from-either-a-file-or-stdin-in-rust/49964042
pub struct NewickImporter<'a> {
    source: Box<dyn BufRead + 'a>,
    buffer: String,
    pending: Option<Result<String, IoError>>,
}

impl<'a> NewickImporter<'a> {
    pub fn from_console(stdin: &'a io::Stdin) -> NewickImporter<'a> {
        Self::from_reader(stdin.lock())
    }

    pub fn from_path(path: &Path) -> io::Result<NewickImporter<'a>> {
        File::open(path).map(|file| Self::from_reader(io::BufReader::new(file)))
    }

    pub fn from_reader<R: BufRead + 'a>(source: R) -> NewickImporter<'a> {
        NewickImporter {
            source: Box::new(source),
            buffer: String::new(),
            pending: None,
        }
    }

    /// Pull input up to and including the next ';'. A tree may span
    /// several lines and several trees may share one.
    fn next_chunk(&mut self) -> Option<Result<String, IoError>> {
        loop {
            if let Some(position) = self.buffer.find(';') {
                let rest = self.buffer.split_off(position + 1);
                let chunk = std::mem::replace(&mut self.buffer, rest);
                return Some(Ok(chunk));
            }
            let mut line = String::new();
            match self.source.read_line(&mut line) {
                Ok(0) => {
                    return if self.buffer.trim().is_empty() {
                        None
                    } else {
                        // unterminated trailing text, the parser reports it
                        Some(Ok(std::mem::take(&mut self.buffer)))
                    };
                }
                Ok(_) => self.buffer.push_str(&line),
                Err(e) => return Some(Err(IoError::Io(e.to_string()))),
            }
        }
    }
}

impl<'a> TreeImporter<Box<dyn BufRead + 'a>> for NewickImporter<'a> {
    fn has_tree(&mut self) -> bool {
        if self.pending.is_none() {
            self.pending = self.next_chunk();
        }
        self.pending.is_some()
    }

    fn read_next_tree(&mut self) -> Result<MutableTree, IoError> {
        let chunk = match self.pending.take() {
            Some(chunk) => chunk,
            None => self.next_chunk().ok_or(IoError::Eof)?,
        }?;
        let start = std::time::Instant::now();
        let root = NewickParser::parse_tree(chunk.trim())
            .map_err(|e| IoError::Format(e.to_string()))?;
        trace!("tree parsed in {} milli seconds", start.elapsed().as_millis());
        Ok(MutableTree::new(root))
    }
}

impl<'a> Iterator for NewickImporter<'a> {
    type Item = Result<MutableTree, IoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_tree() {
            Some(self.read_next_tree())
        } else {
            None
        }
    }
}
