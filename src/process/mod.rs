//! Superframe processing pipeline.
//!
//! 1. **Assembly** ([`assemble`]): accumulates logical frames into
//!    superframes, applies Reed-Solomon correction, acquires sync and
//!    demultiplexes access units.
//!
//! 2. **AAC backends** ([`aac`]): the decoder seam through which
//!    CRC-checked access units leave the pipeline and PCM comes back.

pub mod aac;
pub mod assemble;
