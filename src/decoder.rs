use std::slice::ChunksExact;
use std::time::Duration;

use tracing::{debug, trace};

use crate::format::{Sample, SampleFormat};
use crate::header::{WaveHeader, DATA_OFFSET};
use crate::{Error, Result};

/// Description of a decoded wave buffer.
///
/// `data` borrows from the buffer passed to [`decode`]; the buffer has to outlive
/// this value. When `is_valid` is false every other field holds its default and
/// carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecodedWaveInfo<'a> {
    pub is_valid: bool,
    pub num_channels: u32,
    /// Number of whole frames in the payload.
    pub num_samples: u32,
    pub sampling_rate: u32,
    pub sample_format: SampleFormat,
    /// Raw sample payload, exactly as many bytes as the `data` chunk declares.
    pub data: &'a [u8],
    frame_len: u16,
}

impl<'a> DecodedWaveInfo<'a> {
    /// The failure value: not valid, all fields zeroed, empty payload.
    pub fn invalid() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Bytes per frame across all channels (the block alignment).
    #[inline]
    pub fn frame_len(&self) -> u16 {
        self.frame_len
    }

    /// Views the payload as samples of type `S` without copying.
    ///
    /// Returns `None` when the result is invalid, `S` does not match
    /// `sample_format`, the payload is misaligned for `S` or not a whole number
    /// of samples, or the host is big-endian.
    pub fn samples<S: Sample>(&self) -> Option<&'a [S]> {
        if !self.is_valid || S::FORMAT != self.sample_format || cfg!(target_endian = "big") {
            return None;
        }
        bytemuck::try_cast_slice(self.data).ok()
    }

    /// Iterates the payload one frame at a time. A trailing partial frame is
    /// skipped, so the iterator yields exactly `num_samples` items.
    pub fn frames(&self) -> Frames<'a> {
        let data: &'a [u8] = if self.is_valid { self.data } else { &[] };
        Frames {
            inner: data.chunks_exact(usize::from(self.frame_len.max(1))),
        }
    }

    /// Playback length of the payload.
    pub fn duration(&self) -> Duration {
        if !self.is_valid || self.sampling_rate == 0 {
            return Duration::ZERO;
        }
        let nanos = u64::from(self.num_samples) * 1_000_000_000 / u64::from(self.sampling_rate);
        Duration::from_nanos(nanos)
    }
}

/// Iterator over the frames of a decoded payload.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    inner: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}

/// Decodes `bytes`, reporting why a buffer was rejected.
pub fn try_decode(bytes: &[u8]) -> Result<DecodedWaveInfo<'_>> {
    let header = WaveHeader::parse(bytes)?;
    let fmt = &header.format;

    let sample_format = SampleFormat::resolve(fmt.format_code, fmt.bits_per_sample);
    if !sample_format.is_valid() {
        return Err(Error::UnsupportedFormat {
            format_code: fmt.format_code,
            bits_per_sample: fmt.bits_per_sample,
        });
    }

    if fmt.block_align == 0 {
        return Err(Error::ZeroBlockAlign);
    }
    let num_data_bytes = header.data.num_data_bytes;
    let num_samples = num_data_bytes / u32::from(fmt.block_align);

    let data = usize::try_from(num_data_bytes)
        .ok()
        .and_then(|len| DATA_OFFSET.checked_add(len))
        .and_then(|end| bytes.get(DATA_OFFSET..end))
        .ok_or(Error::PayloadOutOfBounds {
            offset: DATA_OFFSET,
            declared: num_data_bytes,
            available: bytes.len(),
        })?;

    trace!(
        channels = fmt.num_channels,
        frames = num_samples,
        rate = fmt.sampling_rate,
        format = ?sample_format,
        "Decoded wave header"
    );

    Ok(DecodedWaveInfo {
        is_valid: true,
        num_channels: u32::from(fmt.num_channels),
        num_samples,
        sampling_rate: fmt.sampling_rate,
        sample_format,
        data,
        frame_len: fmt.block_align,
    })
}

/// Decodes `bytes`. Any failure yields [`DecodedWaveInfo::invalid`].
pub fn decode(bytes: &[u8]) -> DecodedWaveInfo<'_> {
    try_decode(bytes).unwrap_or_else(|err| {
        debug!("Rejected wave buffer: {}", err);
        DecodedWaveInfo::invalid()
    })
}

/// Decodes the first `length` bytes of `bytes`; nothing past `length` is read.
///
/// A `length` larger than the buffer is treated as truncated input.
pub fn decode_prefix(bytes: &[u8], length: usize) -> DecodedWaveInfo<'_> {
    match bytes.get(..length) {
        Some(prefix) => decode(prefix),
        None => {
            debug!(
                "Rejected wave buffer: declared length {} exceeds buffer of {} bytes",
                length,
                bytes.len()
            );
            DecodedWaveInfo::invalid()
        }
    }
}
