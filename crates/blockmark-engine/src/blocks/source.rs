use std::io::{self, BufRead};

use super::types::Block;

/// Lazy iterator over the blocks of a reader.
///
/// Lines are pulled from the reader only when the next block is requested.
/// The iterator is finite and not restartable; after the reader is exhausted
/// (or fails) it yields `None` forever.
pub struct Blocks<R> {
    reader: R,
    line: String,
    next_index: usize,
    done: bool,
}

/// Returns an iterator over the blank-line-delimited blocks of `reader`.
pub fn blocks<R: BufRead>(reader: R) -> Blocks<R> {
    Blocks {
        reader,
        line: String::new(),
        next_index: 0,
        done: false,
    }
}

impl<R: BufRead> Blocks<R> {
    /// Reads one line into the internal buffer. Returns false at EOF.
    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        Ok(self.reader.read_line(&mut self.line)? > 0)
    }

    fn emit(&mut self, pending: &str) -> Block {
        let block = Block::new(self.next_index, pending.trim());
        self.next_index += 1;
        block
    }
}

impl<R: BufRead> Iterator for Blocks<R> {
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut pending = String::new();
        loop {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    break;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }

            if self.line.trim().is_empty() {
                if !pending.trim().is_empty() {
                    return Some(Ok(self.emit(&pending)));
                }
                continue;
            }

            pending.push_str(self.line.trim_end_matches(['\r', '\n']));
            pending.push('\n');
        }

        if pending.trim().is_empty() {
            None
        } else {
            Some(Ok(self.emit(&pending)))
        }
    }
}
