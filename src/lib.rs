//! Text compressor built from an LZW dictionary coder followed by Huffman coding of the
//! dictionary indices.
//!
//! Version 0.1.0
//!
//! Input is read line by line. The LZW stage turns it into a sequence of indices into a
//! dictionary of (by default) 1024 entries, counting how often each index is used. Those
//! counts give a Huffman code, and the code of every index is packed into the output,
//! most significant bit first. The final output byte holds the number of bits used in the
//! last partial byte.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> lzhuff bible.txt`
//!
//! This will compress the file and create the file bible.txt.lzh.
//! There is no decompressor: the dictionary and the code table are not stored.
//!
pub mod bitstream;
pub mod compression;
pub mod huffman_coding;
pub mod lzw;
pub mod tools;
