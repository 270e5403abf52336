use log::{debug, trace};
use std::io::{self, BufRead};

use super::dictionary::Dictionary;
use crate::tools::freq_count::FreqTable;

/// What the LZW stage hands to the Huffman stage.
#[derive(Debug)]
pub struct LzwProduct {
    /// Dictionary index of every match, in the order the matches were found.
    pub indices: Vec<u16>,
    /// How often each index was emitted.
    pub freqs: FreqTable,
    /// Entries in the dictionary when the input ran out, seeds included.
    pub dict_len: usize,
    /// Bytes consumed, counting the newline appended to every line.
    pub bytes_in: usize,
}

/// Byte-at-a-time LZW coder. Feed it with push_byte() or push_line(), then call finish().
pub struct LzwEncoder {
    dict: Dictionary,
    /// Index of the longest match so far. None only before the first byte.
    current: Option<u16>,
    indices: Vec<u16>,
    freqs: FreqTable,
    bytes_in: usize,
}

impl LzwEncoder {
    pub fn new(capacity: usize) -> io::Result<Self> {
        Ok(Self {
            dict: Dictionary::new(capacity)?,
            current: None,
            indices: Vec::new(),
            freqs: FreqTable::new(capacity),
            bytes_in: 0,
        })
    }

    /// Extend the current match by one byte, or emit it and start a new one.
    pub fn push_byte(&mut self, byte: u8) {
        self.bytes_in += 1;
        let cur = match self.current {
            Some(cur) => cur,
            None => {
                self.current = Some(Dictionary::seed(byte));
                return;
            }
        };
        if let Some(next) = self.dict.child(cur, byte) {
            self.current = Some(next);
            return;
        }
        self.emit(cur);
        if self.dict.insert(cur, byte).is_some() && self.dict.is_full() {
            debug!(
                "Dictionary full at {} entries after {} bytes",
                self.dict.len(),
                self.bytes_in
            );
        }
        self.current = Some(Dictionary::seed(byte));
    }

    /// Feed one line. The line terminator, if any, is replaced by a single '\n'.
    pub fn push_line(&mut self, line: &[u8]) {
        let body = line.strip_suffix(b"\n").unwrap_or(line);
        body.iter().for_each(|&b| self.push_byte(b));
        self.push_byte(b'\n');
    }

    /// Flush the pending match and return the results. Empty input emits nothing.
    pub fn finish(mut self) -> LzwProduct {
        if let Some(cur) = self.current.take() {
            self.emit(cur);
        }
        LzwProduct {
            indices: self.indices,
            freqs: self.freqs,
            dict_len: self.dict.len(),
            bytes_in: self.bytes_in,
        }
    }

    /// The dictionary built so far.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    #[inline(always)]
    fn emit(&mut self, idx: u16) {
        self.indices.push(idx);
        self.freqs.record(idx);
    }
}

/// Run the whole source through an LZW coder with a dictionary of `capacity` entries,
/// reading it line by line.
pub fn lzw_encode<R: BufRead>(mut source: R, capacity: usize) -> io::Result<LzwProduct> {
    let mut coder = LzwEncoder::new(capacity)?;
    let mut line = Vec::with_capacity(256);
    let mut line_no = 0_usize;
    loop {
        line.clear();
        if source.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_no += 1;
        coder.push_line(&line);
        trace!(
            "Line {}: {} bytes, {} indices, {} dictionary entries",
            line_no,
            line.len(),
            coder.indices.len(),
            coder.dict.len()
        );
    }
    let product = coder.finish();
    debug!(
        "LZW: {} lines, {} bytes in, {} indices out, {} dictionary entries",
        line_no,
        product.bytes_in,
        product.indices.len(),
        product.dict_len
    );
    Ok(product)
}
