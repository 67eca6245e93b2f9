//! Re-quantizing a wave into a different sample encoding

use crate::error::{Result, WaveError};
use crate::wave::Wave;
use crate::wave::fmt::{FormatTag, WaveFmt};

pub struct WaveConverter;

impl WaveConverter {
    /// Re-encode the decoded samples into the target format and depth,
    /// keeping the sample rate and channel count.
    pub fn convert_format(
        wave: &Wave,
        audio_format: FormatTag,
        bits_per_sample: u16,
    ) -> Result<Wave> {
        if wave.fmt.audio_format == audio_format && wave.fmt.bits_per_sample == bits_per_sample {
            return Ok(wave.clone());
        }

        let fmt = match audio_format {
            FormatTag::Pcm => {
                WaveFmt::new_pcm(wave.fmt.sample_rate, wave.fmt.num_channels, bits_per_sample)
            }
            FormatTag::IeeeFloat => WaveFmt::new_ieee_float(
                wave.fmt.sample_rate,
                wave.fmt.num_channels,
                bits_per_sample,
            ),
            other => {
                return Err(WaveError::unsupported(format!(
                    "Cannot encode into audio format {:?}",
                    other
                )));
            }
        };

        Wave::new(fmt, wave.data.samples.clone())
    }
}
