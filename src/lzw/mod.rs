//! The lzw module is the first stage of the compressor.
//!
//! Input is read a line at a time and every line is given a single trailing newline. Bytes are
//! matched against a string table that starts with the 256 single byte strings and learns one
//! new string per emitted match until it reaches its capacity (1024 entries by default). After
//! that it keeps matching against what it already knows.
//!
//! The output is the sequence of dictionary indices plus a count of how often each index was
//! used. The dictionary itself is thrown away; nothing about it is written to the output.
//!
pub mod dictionary;
pub mod lzw_encode;
