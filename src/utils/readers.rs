use super::Result;
use flate2::read::MultiGzDecoder;
use rust_htslib::faidx;
use std::fs::File;
use std::io::{BufReader, Read as ioRead};
use std::path::Path;

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip")
}

/// Opens a plain or gzip-compressed tab-separated input.
pub fn open_table_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

pub fn open_sequence_reader(path: &Path) -> Result<faidx::Reader> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| format!("FASTA path has no extension: {}", path.display()))?;
    let fai_path = path.with_extension(extension.to_owned() + ".fai");
    if !fai_path.exists() {
        return Err(format!(
            "FASTA index file not found: {}. Create it using 'samtools faidx {}'",
            fai_path.display(),
            path.display()
        ));
    }
    faidx::Reader::from_path(path).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::{BufRead, Write};

    #[test]
    fn test_open_plain_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.tsv");
        std::fs::write(&path, "q1\tt1\nq2\tt2\n").unwrap();
        let lines: Vec<String> = open_table_reader(&path)
            .unwrap()
            .lines()
            .map(|line| line.unwrap())
            .collect();
        assert_eq!(lines, vec!["q1\tt1", "q2\tt2"]);
    }

    #[test]
    fn test_open_gzipped_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.tsv.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"q1\tt1\n").unwrap();
        encoder.finish().unwrap();
        let lines: Vec<String> = open_table_reader(&path)
            .unwrap()
            .lines()
            .map(|line| line.unwrap())
            .collect();
        assert_eq!(lines, vec!["q1\tt1"]);
    }

    #[test]
    fn test_missing_fasta_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.fa");
        std::fs::write(&path, ">q\nACGT\n").unwrap();
        let err = open_sequence_reader(&path).err().unwrap();
        assert!(err.starts_with("FASTA index file not found"));
    }
}
