//! WAV → raw frame bytes (hound)

use std::io::Read;
use std::path::Path;

use hound::{WavReader, WavSpec};
use tracing::debug;

use crate::error::{Error, Result};

/// Raw interleaved sample bytes read from the data chunk of a WAV file.
#[derive(Debug)]
pub struct RawSamples {
    /// Little-endian sample bytes exactly as stored in the file.
    pub bytes: Vec<u8>,
    /// Format of the source file.
    pub spec: WavSpec,
    /// Number of complete frames in `bytes`.
    pub frames: usize,
}

/// Bytes occupied by one frame (all channels) of the given format.
pub fn block_align(spec: &WavSpec) -> usize {
    let bytes_per_sample = usize::from(spec.bits_per_sample).div_ceil(8);
    (bytes_per_sample * usize::from(spec.channels)).max(1)
}

/// Read at most `max_frames` frames from a WAV file without decoding them.
/// Stops early without error when the file holds fewer frames.
pub fn read_frames(path: &Path, max_frames: usize) -> Result<RawSamples> {
    let reader = WavReader::open(path).map_err(|source| Error::Wav {
        path: path.to_path_buf(),
        source,
    })?;
    let spec = reader.spec();
    let available = reader.duration() as usize;
    let align = block_align(&spec);
    let wanted = available.min(max_frames).saturating_mul(align);
    debug!(
        "{}: {} ch, {} bits, {} Hz, {} frames available",
        path.display(),
        spec.channels,
        spec.bits_per_sample,
        spec.sample_rate,
        available
    );

    // The reader is positioned at the start of the data chunk once the header is parsed.
    let mut bytes = Vec::with_capacity(wanted);
    reader
        .into_inner()
        .take(wanted as u64)
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let frames = bytes.len() / align;
    bytes.truncate(frames * align);
    Ok(RawSamples {
        bytes,
        spec,
        frames,
    })
}
