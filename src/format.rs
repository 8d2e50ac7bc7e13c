/// Format code for integer PCM samples.
pub const WAVE_FORMAT_PCM: u16 = 0x0001;

/// Format code for IEEE 754 floating point samples.
pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 0x0003;

/// Sample encodings the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleFormat {
    /// The `(format_code, bits_per_sample)` pair is not supported.
    #[default]
    Invalid,
    /// Signed 16-bit integer samples (little-endian).
    Int16,
    /// Signed 32-bit integer samples (little-endian).
    Int32,
    /// 32-bit IEEE float samples (little-endian).
    Float32,
}

impl SampleFormat {
    /// Maps the `fmt ` chunk's format code and bit depth to a sample format.
    ///
    /// Anything outside PCM 16/32 and float 32 resolves to [`SampleFormat::Invalid`].
    pub fn resolve(format_code: u16, bits_per_sample: u16) -> Self {
        match (format_code, bits_per_sample) {
            (WAVE_FORMAT_PCM, 16) => SampleFormat::Int16,
            (WAVE_FORMAT_PCM, 32) => SampleFormat::Int32,
            (WAVE_FORMAT_IEEE_FLOAT, 32) => SampleFormat::Float32,
            _ => SampleFormat::Invalid,
        }
    }

    /// Returns the number of bytes per sample for this format.
    #[inline]
    pub fn bytes_per_sample(&self) -> u16 {
        match self {
            SampleFormat::Invalid => 0,
            SampleFormat::Int16 => 2,
            SampleFormat::Int32 | SampleFormat::Float32 => 4,
        }
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::Float32)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, SampleFormat::Invalid)
    }
}

/// A plain sample type the payload can be viewed as without copying.
pub trait Sample: bytemuck::Pod {
    /// The sample format whose payload this type can view.
    const FORMAT: SampleFormat;
}

impl Sample for i16 {
    const FORMAT: SampleFormat = SampleFormat::Int16;
}

impl Sample for i32 {
    const FORMAT: SampleFormat = SampleFormat::Int32;
}

impl Sample for f32 {
    const FORMAT: SampleFormat = SampleFormat::Float32;
}
