use log::{debug, error, trace};
use std::io::{self, Error};

use crate::huffman_coding::code_table::{Code, CodeTable};

/// What to do with the bits sitting in the last, incomplete byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailMode {
    /// Drop the partial byte and write only how many bits it held.
    Truncate,
    /// Write the partial byte, zero padded in its low bits, then the bit count.
    Pad,
}

/// Packs code bits into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Count of valid bits in the queue when finish() was called.
    pub last_bits: u8,
    queue: u8,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call finish() to
    /// take the packed bytes and the trailing bit count.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Put one bit on the stream.
    #[inline(always)]
    pub fn out_bit(&mut self, bit: bool) {
        if bit {
            self.queue |= 0x80 >> self.q_bits;
        }
        self.q_bits += 1;
        if self.q_bits == 8 {
            self.output.push(self.queue);
            self.queue = 0;
            self.q_bits = 0;
        }
    }

    /// Put all the bits of a code on the stream.
    pub fn out_code(&mut self, code: &Code) {
        code.bits().iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Put the code of each index on the stream, in order. Every index must have a code.
    pub fn pack(&mut self, indices: &[u16], table: &CodeTable) -> io::Result<()> {
        for (pos, &idx) in indices.iter().enumerate() {
            match table.get(idx) {
                Some(code) => self.out_code(code),
                None => {
                    error!("No code for index {} at position {}", idx, pos);
                    return Err(Error::new(
                        io::ErrorKind::InvalidData,
                        format!("No code for dictionary index {}", idx),
                    ));
                }
            }
        }
        trace!("Packed {} indices, now at {}", indices.len(), self.loc());
        Ok(())
    }

    /// Close the stream. Writes the partial byte if `tail` asks for it, then a byte holding
    /// the number of bits that were in the partial byte (0-7). Returns the packed bytes.
    pub fn finish(&mut self, tail: TailMode) -> Vec<u8> {
        self.last_bits = self.q_bits;
        if tail == TailMode::Pad && self.q_bits > 0 {
            self.output.push(self.queue);
        } else if self.q_bits > 0 {
            debug!("Dropping {} trailing bits", self.q_bits);
        }
        self.output.push(self.q_bits);
        self.queue = 0;
        self.q_bits = 0;
        std::mem::take(&mut self.output)
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]", self.output.len(), self.q_bits}
    }
}

/// Pack the codes for `indices` into bytes, followed by the trailing bit count.
pub fn pack_codes(indices: &[u16], table: &CodeTable, tail: TailMode) -> io::Result<Vec<u8>> {
    // Average code length is usually well under 16 bits
    let mut bp = BitPacker::new(indices.len() * 2 + 2);
    bp.pack(indices, table)?;
    Ok(bp.finish(tail))
}
