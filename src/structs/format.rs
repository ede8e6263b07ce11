//! Superframe format descriptor.
//!
//! A single byte (byte 2 of the corrected superframe) announces the audio
//! configuration of the whole superframe: core sample rate, SBR and PS
//! signalling, channel mode and MPEG Surround layout. Everything else the
//! pipeline needs - AU count, first AU offset, sample rate indices, the
//! AudioSpecificConfig handed to the AAC decoder - derives from it.

/// Highest AU count any format announces (48 kHz without SBR).
pub const MAX_AUS: usize = 6;

/// Audio format of one superframe, decoded from its format byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuperframeFormat {
    /// false: 32 kHz core, true: 48 kHz core.
    pub dac_rate: bool,
    /// Spectral Band Replication present.
    pub sbr_flag: bool,
    /// false: mono core, true: stereo core.
    pub aac_channel_mode: bool,
    /// Parametric Stereo present (requires SBR).
    pub ps_flag: bool,
    /// 0: none, 1: 5.1, 2: 7.1, others unknown.
    pub mpeg_surround_config: u8,
}

impl SuperframeFormat {
    pub fn from_byte(raw: u8) -> Self {
        Self {
            dac_rate: raw & 0x40 != 0,
            sbr_flag: raw & 0x20 != 0,
            aac_channel_mode: raw & 0x10 != 0,
            ps_flag: raw & 0x08 != 0,
            mpeg_surround_config: raw & 0x07,
        }
    }

    /// Number of access units per superframe.
    pub fn num_aus(&self) -> usize {
        match (self.dac_rate, self.sbr_flag) {
            (true, true) => 3,
            (true, false) => 6,
            (false, true) => 2,
            (false, false) => 4,
        }
    }

    /// Byte offset of the first AU, fixed by the format.
    pub fn first_au_offset(&self) -> usize {
        match (self.dac_rate, self.sbr_flag) {
            (true, true) => 6,
            (true, false) => 11,
            (false, true) => 5,
            (false, false) => 8,
        }
    }

    /// Sample rate index of the AAC core (24/48/16/32 kHz).
    pub fn core_sr_index(&self) -> u8 {
        if self.dac_rate {
            if self.sbr_flag { 6 } else { 3 }
        } else if self.sbr_flag {
            8
        } else {
            5
        }
    }

    /// Channel configuration of the AAC core.
    pub fn core_channel_config(&self) -> u8 {
        if self.aac_channel_mode { 2 } else { 1 }
    }

    /// Sample rate index after SBR extension (48/32 kHz).
    pub fn extension_sr_index(&self) -> u8 {
        if self.dac_rate { 3 } else { 5 }
    }

    /// Output sample rate in Hz after any SBR upsampling.
    pub fn output_sample_rate(&self) -> u32 {
        if self.dac_rate { 48_000 } else { 32_000 }
    }

    /// Output channel count, counting PS-derived stereo.
    pub fn output_channels(&self) -> u8 {
        if self.aac_channel_mode || self.ps_flag { 2 } else { 1 }
    }

    /// Synthesises the AudioSpecificConfig for this format.
    ///
    /// The ASC is the only way to select the 960-sample transform. SBR and
    /// PS use backwards-compatible explicit signalling; libfaad2 does not
    /// accept AOT 29 and detects PS only this way.
    pub fn audio_specific_config(&self) -> AudioSpecificConfig {
        let mut bytes = [0u8; 7];
        let mut len = 2;

        // AudioObjectType 2 (AAC LC), core sample rate index, core channel
        // config, GASpecificConfig with the 960 transform
        bytes[0] = 0b00010 << 3 | self.core_sr_index() >> 1;
        bytes[1] = (self.core_sr_index() & 0x01) << 7 | self.core_channel_config() << 3 | 0b100;

        if self.sbr_flag {
            // sync extension 0x2B7, AudioObjectType 5 (SBR), SBR present,
            // extension sample rate index
            bytes[2] = 0x56;
            bytes[3] = 0xE5;
            bytes[4] = 0x80 | self.extension_sr_index() << 3;
            len = 5;

            if self.ps_flag {
                // sync extension 0x548, PS present
                bytes[4] |= 0x05;
                bytes[5] = 0x48;
                bytes[6] = 0x80;
                len = 7;
            }
        }

        AudioSpecificConfig { bytes, len }
    }

    /// Human-readable format line for the `format_change` callback.
    /// `bitrate` is the subchannel bitrate in kBit/s.
    pub fn describe(&self, bitrate: usize) -> String {
        let codec = if self.sbr_flag {
            if self.ps_flag { "HE-AAC v2" } else { "HE-AAC" }
        } else {
            "AAC-LC"
        };
        let rate = if self.dac_rate { 48 } else { 32 };
        let stereo_mode = if self.aac_channel_mode || self.ps_flag {
            "Stereo"
        } else {
            "Mono"
        };
        let surround_mode = match self.mpeg_surround_config {
            0 => None,
            1 => Some("Surround 5.1"),
            2 => Some("Surround 7.1"),
            _ => Some("Surround (unknown)"),
        };

        match surround_mode {
            Some(surround) => {
                format!("{codec}, {rate} kHz {surround} ({stereo_mode} core) @ {bitrate} kBit/s")
            }
            None => format!("{codec}, {rate} kHz {stereo_mode} @ {bitrate} kBit/s"),
        }
    }
}

/// MPEG-4 AudioSpecificConfig bitstream, 2, 5 or 7 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpecificConfig {
    bytes: [u8; 7],
    len: usize,
}

impl AudioSpecificConfig {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for AudioSpecificConfig {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
