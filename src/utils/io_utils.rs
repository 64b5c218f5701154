use crate::utils::Result;
use flate2::{write::GzEncoder, Compression};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};

/// Destination of a tabular output.
pub enum OutputWriter {
    Stdout(BufWriter<Stdout>),
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl OutputWriter {
    /// Flushes all buffered data and, for gzip output, writes the stream trailer.
    pub fn finish(self) -> Result<()> {
        let flush_err = |e: io::Error| format!("Failed to flush output: {}", e);
        match self {
            OutputWriter::Stdout(mut writer) => writer.flush().map_err(flush_err),
            OutputWriter::Plain(mut writer) => writer.flush().map_err(flush_err),
            OutputWriter::Gzip(writer) => {
                let encoder = writer
                    .into_inner()
                    .map_err(|e| flush_err(e.into_error()))?;
                encoder
                    .finish()
                    .map(|_| ())
                    .map_err(|e| format!("Failed to finish gzip output: {}", e))
            }
        }
    }

    fn inner(&mut self) -> &mut dyn Write {
        match self {
            OutputWriter::Stdout(writer) => writer,
            OutputWriter::Plain(writer) => writer,
            OutputWriter::Gzip(writer) => writer,
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner().flush()
    }
}

/// `-` writes to stdout, a `.gz` suffix writes gzip-compressed output.
pub fn create_output_writer(output_path: &str) -> Result<OutputWriter> {
    if output_path == "-" {
        return Ok(OutputWriter::Stdout(BufWriter::new(io::stdout())));
    }
    let file = File::create(output_path)
        .map_err(|e| format!("Failed to create output file {}: {}", output_path, e))?;
    if output_path.ends_with(".gz") {
        Ok(OutputWriter::Gzip(BufWriter::new(GzEncoder::new(
            file,
            Compression::default(),
        ))))
    } else {
        Ok(OutputWriter::Plain(BufWriter::new(file)))
    }
}
