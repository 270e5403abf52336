use log::{debug, info};
use std::io::{self, BufRead};

use crate::bitstream::bitpacker::{pack_codes, TailMode};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman_code_from_weights::code_table_from_weights;
use crate::lzw::dictionary::DEFAULT_DICT_CAPACITY;
use crate::lzw::lzw_encode::lzw_encode;
use crate::tools::freq_count::FreqTable;

/// Settings the encoding pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Dictionary capacity for the LZW stage, seeds included.
    pub dict_capacity: usize,
    /// Whether the last partial byte is written.
    pub tail: TailMode,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            dict_capacity: DEFAULT_DICT_CAPACITY,
            tail: TailMode::Truncate,
        }
    }
}

/// Everything produced while encoding one input.
#[derive(Debug)]
pub struct Encoded {
    pub indices: Vec<u16>,
    pub freqs: FreqTable,
    pub codes: CodeTable,
    /// Packed code bits plus the trailing bit count byte.
    pub packed: Vec<u8>,
    pub dict_len: usize,
    pub bytes_in: usize,
}

impl Encoded {
    /// Number of code bits produced, before any were dropped from the tail.
    pub fn code_bits(&self) -> u64 {
        self.codes.weighted_length(&self.freqs)
    }

    /// Average code length per index, 0 when nothing was coded.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.indices.is_empty() {
            return 0.0;
        }
        self.code_bits() as f64 / self.indices.len() as f64
    }

    /// Output size as a fraction of the input size.
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            return 0.0;
        }
        self.packed.len() as f64 / self.bytes_in as f64
    }
}

/// Run the three stages over `source`: LZW, then Huffman coding of the indices, then bit
/// packing. Only I/O errors on the source, or a bad dictionary capacity, can fail.
pub fn encode<R: BufRead>(source: R, opts: &EncodeOptions) -> io::Result<Encoded> {
    let lzw = lzw_encode(source, opts.dict_capacity)?;
    info!(
        "LZW produced {} indices from {} bytes using {} dictionary entries",
        lzw.indices.len(),
        lzw.bytes_in,
        lzw.dict_len
    );

    let codes = code_table_from_weights(&lzw.freqs);

    let packed = pack_codes(&lzw.indices, &codes, opts.tail)?;
    debug!(
        "Packed {} code bits into {} bytes ({:?} tail)",
        codes.weighted_length(&lzw.freqs),
        packed.len(),
        opts.tail
    );

    Ok(Encoded {
        indices: lzw.indices,
        freqs: lzw.freqs,
        codes,
        packed,
        dict_len: lzw.dict_len,
        bytes_in: lzw.bytes_in,
    })
}
