use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const BUFFER_CAPACITY: usize = 1024 * 1024;

// Smallest input niffler can sniff a compression format from.
const MAGIC_LEN: usize = 5;

/// Open `path` for buffered reading, or standard input when the path is
/// absent or `-`. gzip/bzip2/xz inputs are decompressed on the fly.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    let raw: Box<dyn Read> = match path {
        Some(p) if p != Path::new("-") => {
            debug!("Reading {}", p.display());
            Box::new(File::open(p)?)
        }
        _ => {
            debug!("Reading standard input");
            Box::new(io::stdin())
        }
    };

    let mut peek = BufReader::with_capacity(BUFFER_CAPACITY, raw);
    if peek.fill_buf()?.len() < MAGIC_LEN {
        return Ok(Box::new(peek));
    }

    let (inner, format) = niffler::get_reader(Box::new(peek))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    debug!("Input compression: {:?}", format);
    Ok(Box::new(BufReader::with_capacity(BUFFER_CAPACITY, inner)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_plain_file_is_read_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, ">seq1\nACGT\n").unwrap();

        let mut text = String::new();
        open_input(Some(file.path()))
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, ">seq1\nACGT\n");
    }

    #[test]
    fn test_tiny_file_skips_sniffing() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, ">a").unwrap();

        let mut text = String::new();
        open_input(Some(file.path()))
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, ">a");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(open_input(Some(Path::new("/nonexistent/genome.fa"))).is_err());
    }
}
