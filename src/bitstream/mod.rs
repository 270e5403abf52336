//! The bitstream module forms the output side of the compressor.
//!
//! BitPacker turns the sequence of Huffman codes into bytes, most significant bit first, and
//! closes the stream with one byte giving the number of bits used in the final partial byte.
//! By default the partial byte itself is dropped and only its bit count is kept. TailMode::Pad
//! keeps it.
//!
//! BitWriter hands the packed bytes to a file or to stdout.
//!
pub mod bitpacker;
pub mod bitwriter;
