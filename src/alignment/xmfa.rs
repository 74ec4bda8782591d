use super::{Alignment, Sequence};
use anyhow::{Context, Result};
use bio::io::fasta;
use niffler::send::get_reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Streams alignment blocks out of an extended multi-FASTA (XMFA) file.
///
/// Blocks are runs of FASTA records terminated by a line starting with `=`.
/// `#` lines are format comments and are skipped. Compressed input is
/// detected from the magic bytes.
pub struct XmfaReader {
    reader: Box<dyn BufRead + Send>,
    source: PathBuf,
    line: Vec<u8>,
    block: Vec<u8>,
    blocks_read: usize,
    done: bool,
}

impl XmfaReader {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open alignment file {}", path.display()))?;
        let (inner_reader, _compression) = get_reader(Box::new(file))
            .with_context(|| format!("Failed to detect compression of {}", path.display()))?;
        Ok(Self::with_source(
            Box::new(BufReader::with_capacity(16 * 1024 * 1024, inner_reader)),
            path.to_path_buf(),
        ))
    }

    /// Wraps an already opened reader, e.g. an in-memory buffer.
    pub fn new<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::with_source(Box::new(reader), PathBuf::from("<stream>"))
    }

    fn with_source(reader: Box<dyn BufRead + Send>, source: PathBuf) -> Self {
        Self {
            reader,
            source,
            line: Vec::with_capacity(1024),
            block: Vec::new(),
            blocks_read: 0,
            done: false,
        }
    }

    /// Number of non-empty blocks yielded so far.
    pub fn blocks_read(&self) -> usize {
        self.blocks_read
    }

    fn read_block(&mut self) -> Result<Option<Alignment>> {
        loop {
            self.line.clear();
            let n = self
                .reader
                .read_until(b'\n', &mut self.line)
                .with_context(|| format!("Failed to read {}", self.source.display()))?;

            if n == 0 {
                // A final block may lack its closing '='.
                self.done = true;
                return self.decode_block();
            }

            match self.line.first() {
                Some(b'=') => {
                    if let Some(aln) = self.decode_block()? {
                        return Ok(Some(aln));
                    }
                }
                Some(b'#') => {}
                _ => {
                    if !self.line.iter().all(|b| b.is_ascii_whitespace()) {
                        self.block.extend_from_slice(&self.line);
                        if !self.line.ends_with(b"\n") {
                            self.block.push(b'\n');
                        }
                    }
                }
            }
        }
    }

    fn decode_block(&mut self) -> Result<Option<Alignment>> {
        if self.block.is_empty() {
            return Ok(None);
        }

        let text = std::mem::take(&mut self.block);
        let mut sequences = Vec::new();
        for record in fasta::Reader::new(text.as_slice()).records() {
            let record = record.with_context(|| {
                format!(
                    "Invalid FASTA record in block {} of {}",
                    self.blocks_read + 1,
                    self.source.display()
                )
            })?;
            let id = match record.desc() {
                Some(desc) => format!("{} {}", record.id(), desc),
                None => record.id().to_string(),
            };
            sequences.push(Sequence::new(id, record.seq().to_vec()));
        }

        let alignment = Alignment::from_sequences(sequences);
        if alignment.is_some() {
            self.blocks_read += 1;
        }
        Ok(alignment)
    }
}

impl Iterator for XmfaReader {
    type Item = Result<Alignment>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.read_block() {
                Ok(Some(aln)) => return Some(Ok(aln)),
                Ok(None) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Counts the alignment blocks of a file without decoding any sequence.
pub fn count_alignments(path: &Path) -> Result<usize> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open alignment file {}", path.display()))?;
    let (inner_reader, _compression) = get_reader(Box::new(file))?;
    let mut reader = BufReader::with_capacity(1024 * 1024, inner_reader);

    let mut count = 0;
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.first() == Some(&b'=') {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_blocks_on_equals_lines() {
        let text = "#FormatVersion Mauve1\n\
                    >g1 genomeA\nATGATG\nATG\n>g1 genomeB\nATGATCATG\n=\n\
                    >g2 genomeA\nCCC\n>g2 genomeB\nCCA\n=\n";
        let blocks: Vec<Alignment> = XmfaReader::new(text.as_bytes())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id, "g1");
        assert_eq!(blocks[0].sequences[0].seq, b"ATGATGATG".to_vec());
        assert_eq!(blocks[0].sequences[1].id, "g1 genomeB");
        assert_eq!(blocks[1].sequences[1].seq, b"CCA".to_vec());
    }

    #[test]
    fn keeps_unterminated_last_block_and_skips_empty_ones() {
        let text = "=\n=\n>g1 a\nAAA\n>g1 b\nAAT\n";
        let mut reader = XmfaReader::new(text.as_bytes());
        let block = reader.next().unwrap().unwrap();
        assert_eq!(block.len(), 2);
        assert!(reader.next().is_none());
        assert_eq!(reader.blocks_read(), 1);
    }

    #[test]
    fn malformed_block_is_reported_once() {
        let text = "ACGT\n=\n>g1 a\nAAA\n=\n";
        let mut reader = XmfaReader::new(text.as_bytes());
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }
}
