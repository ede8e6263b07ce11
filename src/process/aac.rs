//! AAC decoder backend interface.
//!
//! The pipeline does not decode AAC itself. It hands each CRC-checked AU
//! to an [`AacDecoder`] built from the current [`SuperframeFormat`];
//! bindings to FAAD2, FDK-AAC or any other library implement these traits
//! outside this crate. A backend is scoped to one format: the assembler
//! drops it and builds a fresh one whenever the format byte changes.

use anyhow::Result;
use log::info;

use crate::observer::SubchannelObserver;
use crate::structs::format::SuperframeFormat;

/// One AAC decoder instance, initialised from an AudioSpecificConfig.
pub trait AacDecoder {
    /// Decodes one raw AAC access unit (CRC already stripped) and delivers
    /// PCM through `observer.put_audio`. Errors are per-frame: the caller
    /// logs them and continues with the next AU.
    fn decode_frame(&mut self, au: &[u8], observer: &mut dyn SubchannelObserver) -> Result<()>;
}

/// Constructs [`AacDecoder`] instances for successive format epochs.
pub trait AacDecoderBuilder {
    /// Backend name for the selection banner.
    fn name(&self) -> &str;

    /// Builds a decoder for `format`. Must announce the output
    /// configuration through `observer.start_audio` before returning.
    /// Construction failure is fatal for the feed that triggered it.
    fn build(
        &self,
        format: &SuperframeFormat,
        observer: &mut dyn SubchannelObserver,
    ) -> Result<Box<dyn AacDecoder>>;
}

/// Backend that announces the stream and discards every AU.
///
/// Useful for PAD-only consumers and for exercising the pipeline without
/// an AAC library.
#[derive(Debug, Default)]
pub struct NullDecoder;

impl AacDecoder for NullDecoder {
    fn decode_frame(&mut self, _au: &[u8], _observer: &mut dyn SubchannelObserver) -> Result<()> {
        Ok(())
    }
}

/// Builder for [`NullDecoder`].
#[derive(Debug, Default)]
pub struct NullDecoderBuilder;

impl AacDecoderBuilder for NullDecoderBuilder {
    fn name(&self) -> &str {
        "null"
    }

    fn build(
        &self,
        format: &SuperframeFormat,
        observer: &mut dyn SubchannelObserver,
    ) -> Result<Box<dyn AacDecoder>> {
        info!("AacDecoder: using decoder '{}'", self.name());
        observer.start_audio(format.output_sample_rate(), format.output_channels(), false);
        Ok(Box::new(NullDecoder))
    }
}
