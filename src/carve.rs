//! JPEG recovery from raw byte streams.
//!
//! Scans a stream in fixed 512-byte blocks and splits it into sequentially
//! numbered `.jpg` files, opening a new output whenever a block starts with
//! a JPEG signature. This is plain byte plumbing: it never interprets pixel
//! data and shares nothing with the filter engine.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Scan granularity. Signatures are only recognized at block boundaries.
pub const BLOCK_SIZE: usize = 512;

#[derive(Debug, Error)]
pub enum CarveError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// True when a block opens with a JPEG start-of-image followed by an APPn
/// marker (`FF D8 FF Ex`).
fn starts_jpeg(block: &[u8]) -> bool {
    block[0] == 0xFF && block[1] == 0xD8 && block[2] == 0xFF && block[3] & 0xF0 == 0xE0
}

/// Carve embedded JPEGs out of `input`, writing `NNN.jpg` files into
/// `out_dir` (numbered from `000.jpg`).
///
/// Every block read while an output is open, including the signature block
/// itself, goes to that output; blocks before the first signature are
/// skipped. Only whole blocks are considered, so a short trailing block is
/// discarded. Returns the number of files written.
pub fn carve<R: Read>(mut input: R, out_dir: &Path) -> Result<usize, CarveError> {
    let mut block = [0u8; BLOCK_SIZE];
    let mut current: Option<BufWriter<File>> = None;
    let mut count = 0usize;

    while read_block(&mut input, &mut block)? {
        if starts_jpeg(&block) {
            if let Some(mut done) = current.take() {
                done.flush()?;
            }
            let path = out_dir.join(format!("{count:03}.jpg"));
            debug!(path = %path.display(), "found signature, starting new file");
            current = Some(BufWriter::new(File::create(&path)?));
            count += 1;
        }
        if let Some(out) = current.as_mut() {
            out.write_all(&block)?;
        }
    }
    if let Some(mut done) = current.take() {
        done.flush()?;
    }

    Ok(count)
}

/// Fill exactly one block. Returns `false` once the stream cannot supply a
/// whole block; any partial tail is dropped.
fn read_block<R: Read>(input: &mut R, block: &mut [u8; BLOCK_SIZE]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < BLOCK_SIZE {
        let n = input.read(&mut block[filled..])?;
        if n == 0 {
            return Ok(false);
        }
        filled += n;
    }
    Ok(true)
}
