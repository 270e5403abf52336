//! The compression module runs the whole compressor.
//!
//! Compression happens in the following steps:
//! - LZW: Replace repeated substrings with indices into a dictionary that is learned as the
//!   input is read.
//! - Huffman coding: Give frequent indices short bit codes and rare indices long ones.
//! - Bit packing: Concatenate the codes of every index, in order, and pack them into bytes.
//!
//! The last output byte holds the number of bits used in the final partial byte. Nothing about
//! the dictionary or the code table is written, and there is no decompressor.
//!

pub mod compress;
pub mod compress_block;
