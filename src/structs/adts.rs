//! ADTS header synthesis.
//!
//! Wraps a raw AAC access unit for transports that expect ADTS framing.
//! The header mirrors what the superframe format announces: AAC LC
//! profile, the extension sample rate index and the core channel
//! configuration, with `protection_absent` set (the AU CRC is stripped
//! before framing).

use crate::structs::format::SuperframeFormat;

/// ADTS header length in bytes.
pub const ADTS_HEADER_LEN: usize = 7;

const BUFFER_FULLNESS_VBR: u16 = 0x7FF;

/// Builds the 7-byte ADTS header for an AU of `payload_len` bytes.
///
/// `frame_length` covers header plus payload; `payload_len` must fit the
/// 13-bit field, which every AU of a valid superframe does.
pub fn adts_header(format: &SuperframeFormat, payload_len: usize) -> [u8; ADTS_HEADER_LEN] {
    let frame_length = (payload_len + ADTS_HEADER_LEN) as u16;
    debug_assert!(frame_length < 1 << 13);

    let profile: u8 = 1; // AAC LC
    let sf_index = format.extension_sr_index();
    let channel_config = format.core_channel_config();

    [
        0xFF, // syncword high
        0xF1, // syncword low, MPEG-4, layer 0, protection_absent
        profile << 6 | sf_index << 2 | channel_config >> 2,
        (channel_config & 0x03) << 6 | ((frame_length >> 11) & 0x03) as u8,
        (frame_length >> 3) as u8,
        ((frame_length & 0x07) << 5) as u8 | (BUFFER_FULLNESS_VBR >> 6) as u8,
        ((BUFFER_FULLNESS_VBR & 0x3F) << 2) as u8,
    ]
}
