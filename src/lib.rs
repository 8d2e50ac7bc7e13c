//! Zero-copy decoder for canonical RIFF/WAVE buffers.
//!
//! The decoder reads the fixed 44-byte header (RIFF, WAVE, `fmt `, `data`,
//! contiguous and in that order) from a caller-owned byte buffer and returns the
//! stream description together with a slice of the sample payload borrowed from
//! that same buffer. Nothing is copied or allocated.
//!
//! ```
//! let mut bytes = Vec::new();
//! bytes.extend_from_slice(b"RIFF");
//! bytes.extend_from_slice(&40u32.to_le_bytes());
//! bytes.extend_from_slice(b"WAVEfmt ");
//! bytes.extend_from_slice(&16u32.to_le_bytes());
//! bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
//! bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
//! bytes.extend_from_slice(&44100u32.to_le_bytes());
//! bytes.extend_from_slice(&88200u32.to_le_bytes());
//! bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
//! bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
//! bytes.extend_from_slice(b"data");
//! bytes.extend_from_slice(&4u32.to_le_bytes());
//! bytes.extend_from_slice(&[0, 0, 1, 0]);
//!
//! let info = wave_view::decode(&bytes);
//! assert!(info.is_valid);
//! assert_eq!(info.num_samples, 2);
//! assert_eq!(info.sample_format, wave_view::SampleFormat::Int16);
//! assert_eq!(info.data, &[0, 0, 1, 0]);
//! ```

use std::io;

mod decoder;
mod format;
pub mod header;

pub use decoder::{decode, decode_prefix, try_decode, DecodedWaveInfo, Frames};
pub use format::{Sample, SampleFormat, WAVE_FORMAT_IEEE_FLOAT, WAVE_FORMAT_PCM};
pub use header::MINIMUM_WAVE_BYTES;

/// Reasons a buffer is rejected by [`try_decode`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Truncated wave buffer: need at least {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },
    #[error(
        "Invalid wave layout: expected tag \"{}\", found \"{}\"",
        .expected.escape_ascii(),
        .found.escape_ascii()
    )]
    TagMismatch {
        expected: header::FourCC,
        found: header::FourCC,
    },
    #[error("Unsupported sample encoding: format code {format_code:#06x} with {bits_per_sample} bits per sample")]
    UnsupportedFormat {
        format_code: u16,
        bits_per_sample: u16,
    },
    #[error("Invalid wave layout: block alignment is zero")]
    ZeroBlockAlign,
    #[error("Payload of {declared} bytes at offset {offset} exceeds buffer of {available} bytes")]
    PayloadOutOfBounds {
        offset: usize,
        declared: u32,
        available: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;

pub const VERSION_MAJOR: u32 = parse_version(env!("CARGO_PKG_VERSION_MAJOR"));
pub const VERSION_MINOR: u32 = parse_version(env!("CARGO_PKG_VERSION_MINOR"));
pub const VERSION_PATCH: u32 = parse_version(env!("CARGO_PKG_VERSION_PATCH"));

const fn parse_version(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}
