use std::fs::File;
use std::io::{self, BufRead, BufReader};

use log::{error, info};

use crate::bitstream::bitwriter::BitWriter;
use crate::lzw::dictionary::Dictionary;
use crate::tools::cli::{LzhOpts, Output};

use super::compress_block::{encode, Encoded};

/// Extension added to the name of every compressed file.
pub const EXTENSION: &str = ".lzh";

/*
    Each input file is compressed on its own with a fresh dictionary: the LZW, Huffman and
    bit packing stages run to completion in memory, then the packed bytes are written out.
    With no input files we read stdin and write stdout.
*/

/// Compress the input files defined in opts <LzhOpts>.
pub fn compress(opts: &LzhOpts) -> io::Result<()> {
    // Reject a bad dictionary capacity before any output file is created
    Dictionary::new(opts.dict_capacity)?;

    if opts.files.is_empty() {
        let stdin = io::stdin();
        let mut bw = BitWriter::to_stdout();
        return compress_stream("(stdin)", stdin.lock(), &mut bw, opts);
    }

    for fname in &opts.files {
        let fin = File::open(fname).map_err(|e| {
            error!("Can't open {}: {}", fname, e);
            e
        })?;
        match opts.output {
            Output::Stdout => {
                let mut bw = BitWriter::to_stdout();
                compress_stream(fname, BufReader::new(fin), &mut bw, opts)?;
            }
            Output::File => {
                let out_name = output_name(fname);
                let mut bw = BitWriter::to_file(&out_name, opts.force_overwrite)?;
                let result = compress_stream(fname, BufReader::new(fin), &mut bw, opts);
                drop(bw);
                if let Err(e) = result {
                    // Don't leave a partial output behind to block the next run
                    if let Err(rm) = std::fs::remove_file(&out_name) {
                        error!("Can't remove {}: {}", out_name, rm);
                    }
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}

/// Name of the file the compressed form of `input` is written to.
pub fn output_name(input: &str) -> String {
    let mut fname = input.to_string();
    fname.push_str(EXTENSION);
    fname
}

/// Encode one source and write the packed bytes to `bw`.
pub fn compress_stream<R: BufRead>(
    name: &str,
    source: R,
    bw: &mut BitWriter,
    opts: &LzhOpts,
) -> io::Result<()> {
    info!("Compressing {}", name);
    let encoded = encode(source, &opts.encode_options())?;
    bw.add_packed(&encoded.packed)?;
    bw.flush()?;
    report(name, &encoded);
    Ok(())
}

/// Log a summary of one compressed input.
fn report(name: &str, enc: &Encoded) {
    info!(
        "{}: {} bytes in, {} indices, {} dictionary entries, {} distinct symbols",
        name,
        enc.bytes_in,
        enc.indices.len(),
        enc.dict_len,
        enc.freqs.distinct()
    );
    info!(
        "{}: {:.3} bits/symbol, longest code {} bits, {} bytes out ({:.2}% of input)",
        name,
        enc.bits_per_symbol(),
        enc.codes.max_len(),
        enc.packed.len(),
        enc.ratio() * 100.0
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitpacker::TailMode;

    fn temp_path(tag: &str) -> String {
        std::env::temp_dir()
            .join(format!("lzhuff_{}_{}.txt", tag, std::process::id()))
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn output_name_test() {
        assert_eq!(output_name("bible.txt"), "bible.txt.lzh");
    }

    #[test]
    fn compress_file_test() {
        let input = temp_path("compress");
        std::fs::write(&input, "aaa\n").unwrap();
        let mut opts = LzhOpts::new();
        opts.files = vec![input.clone()];
        opts.tail = TailMode::Pad;
        opts.force_overwrite = true;
        compress(&opts).unwrap();

        let out = output_name(&input);
        assert_eq!(std::fs::read(&out).unwrap(), vec![0b1101_0000, 0x05]);

        // Without --force the existing output is left alone
        opts.force_overwrite = false;
        let err = compress(&opts).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&out).unwrap();
    }

    #[test]
    fn bad_capacity_leaves_no_output_test() {
        let input = temp_path("bad_capacity");
        std::fs::write(&input, "aaa\n").unwrap();
        let out = output_name(&input);
        let _ = std::fs::remove_file(&out);

        let mut opts = LzhOpts::new();
        opts.files = vec![input.clone()];
        opts.dict_capacity = 10;
        let err = compress(&opts).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!std::path::Path::new(&out).exists());

        // Once the capacity is fixed a run without --force goes through
        opts.dict_capacity = 1024;
        compress(&opts).unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), vec![0x05]);

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&out).unwrap();
    }

    #[test]
    fn failed_stream_removes_output_test() {
        // A directory opens fine but fails on read, after the output file exists
        let dir = std::env::temp_dir().join(format!("lzhuff_dir_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.to_str().unwrap().to_string();
        let out = output_name(&input);
        let _ = std::fs::remove_file(&out);

        let mut opts = LzhOpts::new();
        opts.files = vec![input];
        assert!(compress(&opts).is_err());
        assert!(!std::path::Path::new(&out).exists());

        std::fs::remove_dir(&dir).unwrap();
    }

    #[test]
    fn missing_input_test() {
        let mut opts = LzhOpts::new();
        opts.files = vec![temp_path("does_not_exist")];
        let err = compress(&opts).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
