//! Value types derived from the superframe bitstream.
//!
//! Contains the format descriptor decoded from the superframe header, the
//! AudioSpecificConfig and ADTS header synthesis built from it, and the
//! PAD location types.

pub mod adts;
pub mod format;
pub mod pad;
