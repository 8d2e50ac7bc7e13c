//! Fixed-offset layout of the canonical 44-byte wave header.
//!
//! Every field is read explicitly as little-endian from its offset; nothing is
//! overlaid on the buffer, so alignment and host endianness never matter.

use crate::{Error, Result};

pub type FourCC = [u8; 4];

pub const RIFF_ID: FourCC = *b"RIFF";
pub const WAVE_ID: FourCC = *b"WAVE";
pub const FMT_ID: FourCC = *b"fmt ";
pub const DATA_ID: FourCC = *b"data";

/// Tag + body byte count.
pub const RIFF_HEADER_BYTES: usize = 8;
/// "WAVE" tag, then the `fmt ` chunk header and its 16-byte body.
pub const FORMAT_CHUNK_BYTES: usize = 4 + 8 + 16;
/// Tag + payload byte count.
pub const DATA_CHUNK_HEADER_BYTES: usize = 8;

/// Smallest buffer that can hold every fixed header field.
pub const MINIMUM_WAVE_BYTES: usize =
    RIFF_HEADER_BYTES + FORMAT_CHUNK_BYTES + DATA_CHUNK_HEADER_BYTES;

/// Offset of the first payload byte.
pub const DATA_OFFSET: usize = MINIMUM_WAVE_BYTES;

const WAVE_ID_OFFSET: usize = 8;
const FMT_OFFSET: usize = 12;
const DATA_HEADER_OFFSET: usize = 36;

/// Reads little-endian fields at absolute offsets of a borrowed buffer.
struct HeaderReader<'a> {
    bytes: &'a [u8],
}

impl<'a> HeaderReader<'a> {
    fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < MINIMUM_WAVE_BYTES {
            return Err(Error::Truncated {
                needed: MINIMUM_WAVE_BYTES,
                available: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    #[inline]
    fn read_exact<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut result = [0u8; N];
        result.copy_from_slice(&self.bytes[offset..offset + N]);
        result
    }

    #[inline]
    fn read_u16_le(&self, offset: usize) -> u16 {
        u16::from_le_bytes(self.read_exact::<2>(offset))
    }

    #[inline]
    fn read_u32_le(&self, offset: usize) -> u32 {
        u32::from_le_bytes(self.read_exact::<4>(offset))
    }

    fn expect_tag(&self, offset: usize, expected: FourCC) -> Result<FourCC> {
        let found = self.read_exact::<4>(offset);
        if found != expected {
            return Err(Error::TagMismatch { expected, found });
        }
        Ok(found)
    }
}

/// The leading "RIFF" tag and the byte count of everything after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffHeader {
    pub four_cc: FourCC,
    pub num_body_bytes: u32,
}

/// The "fmt " chunk describing the sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    pub four_cc: FourCC,
    pub num_chunk_bytes: u32,
    pub format_code: u16,
    pub num_channels: u16,
    pub sampling_rate: u32,
    pub byte_rate: u32,
    /// Bytes per multi-channel frame.
    pub block_align: u16,
    pub bits_per_sample: u16,
}

/// The "data" chunk header; the payload follows it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunkHeader {
    pub four_cc: FourCC,
    pub num_data_bytes: u32,
}

/// All fixed header structures of a wave buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    pub riff: RiffHeader,
    pub format: FormatChunk,
    pub data: DataChunkHeader,
}

impl WaveHeader {
    /// Parses the four tagged structures at their fixed offsets.
    ///
    /// Tags are checked in file order. Chunk sizes are read but not used to
    /// locate anything: the layout is always RIFF, WAVE, `fmt `, `data`.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let reader = HeaderReader::new(bytes)?;

        let riff = RiffHeader {
            four_cc: reader.expect_tag(0, RIFF_ID)?,
            num_body_bytes: reader.read_u32_le(4),
        };
        reader.expect_tag(WAVE_ID_OFFSET, WAVE_ID)?;

        let format = FormatChunk {
            four_cc: reader.expect_tag(FMT_OFFSET, FMT_ID)?,
            num_chunk_bytes: reader.read_u32_le(FMT_OFFSET + 4),
            format_code: reader.read_u16_le(FMT_OFFSET + 8),
            num_channels: reader.read_u16_le(FMT_OFFSET + 10),
            sampling_rate: reader.read_u32_le(FMT_OFFSET + 12),
            byte_rate: reader.read_u32_le(FMT_OFFSET + 16),
            block_align: reader.read_u16_le(FMT_OFFSET + 20),
            bits_per_sample: reader.read_u16_le(FMT_OFFSET + 22),
        };

        let data = DataChunkHeader {
            four_cc: reader.expect_tag(DATA_HEADER_OFFSET, DATA_ID)?,
            num_data_bytes: reader.read_u32_le(DATA_HEADER_OFFSET + 4),
        };

        Ok(Self { riff, format, data })
    }
}
