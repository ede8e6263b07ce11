//! Programme-Associated Data location.
//!
//! DAB+ carries PAD inside a Data Stream Element at the start of each AAC
//! raw data block. This module only locates and splits the PAD bytes; the
//! X-PAD payload (dynamic labels, slideshow) is parsed downstream.

/// Length of the fixed PAD field closing every PAD region.
pub const FPAD_LEN: usize = 2;

/// MPEG-4 syntactic element id of a Data Stream Element.
const ID_DSE: u8 = 4;

/// PAD bytes located inside an AU payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadData<'a> {
    /// X-PAD field, possibly empty.
    pub x_pad: &'a [u8],
    /// The trailing 2-byte F-PAD.
    pub f_pad: &'a [u8; FPAD_LEN],
}

/// Locates PAD inside a CRC-stripped AU payload.
///
/// Returns `None` when the AU carries no Data Stream Element or announces
/// a PAD region the payload cannot hold; the caller must then reset the
/// downstream PAD parser.
pub fn extract_pad(data: &[u8]) -> Option<PadData<'_>> {
    if data.len() < 3 || data[0] >> 5 != ID_DSE {
        return None;
    }

    let mut pad_start = 2;
    let mut pad_len = data[1] as usize;
    if pad_len == 255 {
        pad_len += data[2] as usize;
        pad_start += 1;
    }

    if pad_len < FPAD_LEN || data.len() < pad_start + pad_len {
        return None;
    }

    let pad = &data[pad_start..pad_start + pad_len];
    let (x_pad, f_pad) = pad.split_last_chunk()?;

    Some(PadData { x_pad, f_pad })
}
