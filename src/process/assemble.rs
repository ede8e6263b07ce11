//! Superframe assembly and access unit demultiplexing.
//!
//! Five consecutive logical frames form one superframe. The assembler
//! keeps the five most recent frames in a raw buffer, runs Reed-Solomon
//! correction on a working copy, and locks onto the superframe boundary
//! with the Fire-code header CRC. While out of sync the window slides by
//! one frame per feed, so every alignment of the incoming stream gets
//! tried; once locked, accumulation restarts from zero because five fresh
//! frames are exactly one superframe.
//!
//! A synced superframe is demultiplexed into access units, each gated by
//! its own CCITT CRC-16, then handed to the PAD locator and the AAC
//! backend.

use anyhow::Result;
use log::{debug, info, warn};

use crate::observer::SubchannelObserver;
use crate::process::aac::{AacDecoder, AacDecoderBuilder};
use crate::structs::format::{MAX_AUS, SuperframeFormat};
use crate::structs::pad::{FPAD_LEN, extract_pad};
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::crc::{CRC_CCITT_ALG, CRC_FIRE_CODE_ALG, Crc16};
use crate::utils::ecc::{RS_BLOCK_LEN, RS_DATA_LEN, RsDecoder};
use crate::utils::errors::{AuError, FrameError, SyncError};

/// Logical frames per superframe (120 ms).
pub const FRAMES_PER_SUPERFRAME: usize = 5;

/// Smallest logical frame the assembler accepts.
pub const MIN_FRAME_LEN: usize = 10;

const CRC_FIRE_CODE: Crc16 = Crc16::new(&CRC_FIRE_CODE_ALG);
const CRC_CCITT: Crc16 = Crc16::new(&CRC_CCITT_ALG);

/// Assembles logical frames into superframes and demultiplexes them.
///
/// Push-driven and single-threaded: the caller invokes [`feed`] once per
/// logical frame and lends the sink for the duration of the call. The
/// assembler owns both superframe buffers and the AAC decoder; the
/// decoder lives for exactly one format epoch.
///
/// [`feed`]: SuperframeAssembler::feed
pub struct SuperframeAssembler {
    rs_dec: RsDecoder,
    aac_builder: Box<dyn AacDecoderBuilder>,
    aac_dec: Option<Box<dyn AacDecoder>>,

    frame_len: Option<usize>,
    frame_count: usize,
    sync_frames: usize,

    sf_raw: Vec<u8>,
    sf: Vec<u8>,

    format: Option<SuperframeFormat>,
    format_raw: u8,

    num_aus: usize,
    au_start: [usize; MAX_AUS + 1],
}

impl SuperframeAssembler {
    pub fn new(aac_builder: Box<dyn AacDecoderBuilder>) -> Self {
        Self {
            rs_dec: RsDecoder::default(),
            aac_builder,
            aac_dec: None,

            frame_len: None,
            frame_count: 0,
            sync_frames: 0,

            sf_raw: Vec::new(),
            sf: Vec::new(),

            format: None,
            format_raw: 0,

            num_aus: 0,
            au_start: [0; MAX_AUS + 1],
        }
    }

    /// Frame length latched from the first accepted frame.
    pub fn frame_len(&self) -> Option<usize> {
        self.frame_len
    }

    /// True once a superframe boundary has been acquired and not lost.
    pub fn is_synced(&self) -> bool {
        self.format.is_some() && self.sync_frames == 0
    }

    /// Feeds one logical frame.
    ///
    /// Bad frames and out-of-sync superframes are logged and absorbed; the
    /// only error that propagates is a failing AAC decoder construction.
    pub fn feed(&mut self, frame: &[u8], observer: &mut dyn SubchannelObserver) -> Result<()> {
        match self.frame_len {
            Some(expected) => {
                if frame.len() != expected {
                    warn!(
                        "SuperframeAssembler: {}",
                        FrameError::LengthMismatch {
                            found: frame.len(),
                            expected,
                        }
                    );
                    return Ok(());
                }
            }
            None => {
                if frame.len() < MIN_FRAME_LEN {
                    warn!("SuperframeAssembler: {}", FrameError::TooShort(frame.len()));
                    return Ok(());
                }
                if (FRAMES_PER_SUPERFRAME * frame.len()) % RS_BLOCK_LEN != 0 {
                    warn!(
                        "SuperframeAssembler: {}",
                        FrameError::BadModulus(frame.len())
                    );
                    return Ok(());
                }

                self.frame_len = Some(frame.len());
                let sf_len = FRAMES_PER_SUPERFRAME * frame.len();
                self.sf_raw = vec![0; sf_len];
                self.sf = vec![0; sf_len];
            }
        }

        let frame_len = frame.len();
        if self.frame_count == FRAMES_PER_SUPERFRAME {
            // out of sync: slide the window by one frame
            self.sf_raw.copy_within(frame_len.., 0);
        } else {
            self.frame_count += 1;
        }
        let slot = (self.frame_count - 1) * frame_len;
        self.sf_raw[slot..slot + frame_len].copy_from_slice(frame);

        if self.frame_count < FRAMES_PER_SUPERFRAME {
            return Ok(());
        }

        // RS correction happens on a working copy so the raw window is
        // preserved for the next sync attempt
        self.sf.copy_from_slice(&self.sf_raw);
        self.rs_dec.decode_superframe(&mut self.sf);

        if let Err(e) = self.check_sync() {
            if self.sync_frames == 0 {
                info!("SuperframeAssembler: Superframe sync started...");
            }
            debug!("SuperframeAssembler: {e}");
            self.sync_frames += 1;
            return Ok(());
        }

        if self.sync_frames > 0 {
            info!(
                "SuperframeAssembler: Superframe sync succeeded after {} frame(s)",
                self.sync_frames
            );
            self.sync_frames = 0;
            reset_pad(observer);
        }

        if self.format.is_none() || self.format_raw != self.sf[2] {
            self.format_raw = self.sf[2];
            let format = SuperframeFormat::from_byte(self.format_raw);
            self.format = Some(format);
            self.process_format(&format, observer)?;
        }

        for i in 0..self.num_aus {
            let au = &self.sf[self.au_start[i]..self.au_start[i + 1]];
            let payload = match au_payload(au) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("SuperframeAssembler: (AU #{i}) {e}");
                    reset_pad(observer);
                    continue;
                }
            };

            match extract_pad(payload) {
                Some(pad) => observer.process_pad(Some(pad.x_pad), true, pad.f_pad),
                None => reset_pad(observer),
            }

            if let Some(aac_dec) = &mut self.aac_dec {
                if let Err(e) = aac_dec.decode_frame(payload, observer) {
                    warn!("SuperframeAssembler: (AAC) {e}");
                }
            }
        }

        // ensure the next superframe is assembled from five fresh frames
        self.frame_count = 0;
        Ok(())
    }

    /// Validates the superframe boundary and populates the AU table.
    fn check_sync(&mut self) -> Result<(), SyncError> {
        // an all-zero buffer carries a valid zero Fire CRC; refuse it
        if self.sf[3] == 0x00 && self.sf[4] == 0x00 {
            return Err(SyncError::ZeroedOffsetTable);
        }

        let read = u16::from_be_bytes([self.sf[0], self.sf[1]]);
        let calculated = CRC_FIRE_CODE.checksum(&self.sf[2..11]);
        if read != calculated {
            return Err(SyncError::FireCodeMismatch { calculated, read });
        }

        let format = SuperframeFormat::from_byte(self.sf[2]);
        let num_aus = format.num_aus();

        let mut au_start = [0usize; MAX_AUS + 1];
        au_start[0] = format.first_au_offset();
        // pseudo-next AU: end of the RS payload region
        au_start[num_aus] = self.sf.len() / RS_BLOCK_LEN * RS_DATA_LEN;

        let mut reader = BsIoSliceReader::from_slice(&self.sf[3..11]);
        for slot in au_start.iter_mut().take(num_aus).skip(1) {
            *slot = reader.get_n::<u16>(12)? as usize;
        }

        for i in 0..num_aus {
            if au_start[i] >= au_start[i + 1] {
                return Err(SyncError::OffsetsNotMonotonic {
                    index: i,
                    start: au_start[i],
                    next: au_start[i + 1],
                });
            }
        }

        self.num_aus = num_aus;
        self.au_start = au_start;
        Ok(())
    }

    fn process_format(
        &mut self,
        format: &SuperframeFormat,
        observer: &mut dyn SubchannelObserver,
    ) -> Result<()> {
        let bitrate = self.sf.len() / RS_BLOCK_LEN * 8;
        observer.format_change(&format.describe(bitrate));

        // the decoder must not outlive its format epoch
        self.aac_dec = None;
        self.aac_dec = Some(self.aac_builder.build(format, observer)?);
        Ok(())
    }
}

/// Splits the trailing CRC off an AU and validates it.
fn au_payload(au: &[u8]) -> Result<&[u8], AuError> {
    if au.len() < 3 {
        return Err(AuError::TooShort(au.len()));
    }

    let (payload, crc) = au.split_at(au.len() - 2);
    let read = u16::from_be_bytes([crc[0], crc[1]]);
    let calculated = CRC_CCITT.checksum(payload);
    if read != calculated {
        return Err(AuError::CrcMismatch { calculated, read });
    }

    Ok(payload)
}

/// Clears continuation state in the downstream X-PAD parser.
fn reset_pad(observer: &mut dyn SubchannelObserver) {
    observer.process_pad(None, true, &[0x00; FPAD_LEN]);
}
