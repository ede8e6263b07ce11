//! Sink interface for decoded subchannel content.

use crate::structs::pad::FPAD_LEN;

/// Receives everything the pipeline produces: format announcements, PCM
/// audio from the AAC backend, and PAD data.
///
/// All methods default to no-ops so a sink only implements what it
/// consumes. Slices passed to the callbacks are borrowed from the
/// pipeline's working buffers and are invalidated when the call returns.
pub trait SubchannelObserver {
    /// A new format byte was seen; `format` is a human-readable line such
    /// as `"HE-AAC, 32 kHz Mono @ 32 kBit/s"`. Called once per distinct
    /// format, before any audio of that format.
    fn format_change(&mut self, format: &str) {
        let _ = format;
    }

    /// The AAC backend announced its output configuration. Called
    /// synchronously during backend construction.
    fn start_audio(&mut self, sample_rate: u32, channels: u8, float_samples: bool) {
        let _ = (sample_rate, channels, float_samples);
    }

    /// One decoded PCM frame from the AAC backend.
    fn put_audio(&mut self, pcm: &[u8]) {
        let _ = pcm;
    }

    /// PAD bytes for one AU, or the reset shape `(None, true, &[0, 0])`
    /// when the AU carries no valid PAD. The reset clears continuation
    /// state in the downstream X-PAD parser and must not be skipped.
    fn process_pad(&mut self, x_pad: Option<&[u8]>, contained_in_dse: bool, f_pad: &[u8; FPAD_LEN]) {
        let _ = (x_pad, contained_in_dse, f_pad);
    }
}
