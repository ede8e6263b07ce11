#![doc = include_str!("../README.md")]
//!
//! ## Pipeline
//!
//! Logical frames → raw window → RS-corrected working buffer → Fire-code
//! sync check → format dispatch → AU loop → AAC backend + PAD locator →
//! observer callbacks.
//!
//! 1. Feed fixed-length logical frames into a
//!    [`SuperframeAssembler`](process::assemble::SuperframeAssembler)
//! 2. Implement [`SubchannelObserver`](observer::SubchannelObserver) to
//!    receive format changes, PCM audio and PAD data
//! 3. Plug in an AAC library through
//!    [`AacDecoderBuilder`](process::aac::AacDecoderBuilder)

/// Sink interface the pipeline pushes into.
///
/// [`SubchannelObserver`](observer::SubchannelObserver) receives format
/// announcements, PCM from the AAC backend, and PAD bytes.
pub mod observer;

/// Pipeline stages.
///
/// - **Assembly** ([`process::assemble`]): superframe accumulation, sync
///   acquisition and AU demultiplexing
/// - **AAC backends** ([`process::aac`]): the external decoder seam
pub mod process;

/// Value types derived from the bitstream.
///
/// - **Format** ([`structs::format`]): the superframe format byte and the
///   AudioSpecificConfig built from it
/// - **ADTS** ([`structs::adts`]): header synthesis for ADTS framing
/// - **PAD** ([`structs::pad`]): Programme-Associated Data location
pub mod structs;

/// Supporting infrastructure.
///
/// - **Bitstream I/O** ([`utils::bitstream_io`]): big-endian bit reading
/// - **CRC validation** ([`utils::crc`]): Fire-code and CCITT CRC-16
/// - **Error correction** ([`utils::ecc`]): Reed-Solomon RS(120,110)
/// - **Error handling** ([`utils::errors`]): error types
pub mod utils;
