//! Raw little-endian element buffers read from disk.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crc::{CRC_64_ECMA_182, Crc};
use memmap2::Mmap;
use thiserror::Error;

use crate::sum::ElementWidth;

const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_ECMA_182);

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{path}: {len} bytes is not a whole number of {width}-bit elements")]
    TrailingBytes {
        path: PathBuf,
        len: usize,
        width: ElementWidth,
    },
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// File contents, mapped when possible.
#[derive(Debug)]
pub enum Payload {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Payload {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Payload::Mapped(mmap) => &mmap[..],
            Payload::Owned(buf) => buf.as_slice(),
        }
    }

    pub fn as_i8(&self) -> &[i8] {
        let bytes = self.bytes();
        // SAFETY: i8 and u8 share size and alignment, and the slice borrows `self`.
        unsafe { std::slice::from_raw_parts(bytes.as_ptr() as *const i8, bytes.len()) }
    }

    pub fn crc64(&self) -> u64 {
        CRC64.checksum(self.bytes())
    }
}

pub fn open_payload(path: &Path) -> Result<Payload, InputError> {
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let file = File::open(path)?;
            let mut decoder = flate2::read::GzDecoder::new(file);
            let mut buf = Vec::new();
            decoder.read_to_end(&mut buf)?;
            return Ok(Payload::Owned(buf));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }

    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        return Ok(Payload::Owned(buf));
    }
    let mmap = {
        // SAFETY: mapping file read-only; the mapping is owned by the returned payload.
        unsafe { Mmap::map(&file)? }
    };
    Ok(Payload::Mapped(mmap))
}

/// Decodes little-endian i32 elements.
pub fn decode_i32(path: &Path, bytes: &[u8]) -> Result<Vec<i32>, InputError> {
    let width = ElementWidth::Bits32;
    if bytes.len() % width.bytes() != 0 {
        return Err(InputError::TrailingBytes {
            path: path.to_path_buf(),
            len: bytes.len(),
            width,
        });
    }
    Ok(bytes
        .chunks_exact(width.bytes())
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

pub fn encode_i32(values: &[i32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * ElementWidth::Bits32.bytes());
    for v in values {
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
