//! The huffman module is the second stage of the compressor. It turns the frequency counts of
//! the LZW dictionary indices into a prefix code.
//!
//! Only indices that were actually emitted get a code. The code table is not written to the
//! output, so the packed stream can only be read back by something that already has it.
//!

pub mod code_table;
pub mod huffman_code_from_weights;
