use log::{debug, error};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

/// Writes packed bytes to the output device, a file or stdout.
pub struct BitWriter {
    /// Handle to the output stream
    writer: Box<dyn Write>,
    /// Bytes written so far
    written: usize,
}

impl BitWriter {
    /// Write into the file at `filepath`. An existing file is only replaced when `force` is set.
    pub fn to_file(filepath: &str, force: bool) -> io::Result<Self> {
        let mut options = OpenOptions::new();
        options.write(true);
        if force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let file = options.open(filepath).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                error!("Output file {} already exists. Use -f to overwrite.", filepath);
            }
            e
        })?;
        debug!("Writing to {}", filepath);
        Ok(Self::new(Box::new(file)))
    }

    /// Write to standard output.
    pub fn to_stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Write into any sink, buffered.
    pub fn new(sink: Box<dyn Write>) -> Self {
        Self {
            writer: Box::new(BufWriter::new(sink)),
            written: 0,
        }
    }

    /// Add a packed stream to the output. Returns the number of bytes written.
    pub fn add_packed(&mut self, data: &[u8]) -> io::Result<usize> {
        self.writer.write_all(data)?;
        self.written += data.len();
        Ok(data.len())
    }

    /// Bytes handed to the output so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush MUST be called before the writer is dropped, or write errors go unreported.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
