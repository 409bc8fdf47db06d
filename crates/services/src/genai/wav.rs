use super::backend::InlineMedia;

const DEFAULT_SAMPLE_RATE: u32 = 24_000;

/// Wrap raw little-endian 16-bit mono PCM in a RIFF/WAVE container.
#[must_use]
pub fn pcm16_to_wav(pcm: &[u8], sample_rate: u32) -> Vec<u8> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_len = u32::try_from(pcm.len()).unwrap_or(u32::MAX);

    let mut out = Vec::with_capacity(44 + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&36_u32.saturating_add(data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16_u32.to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);
    out
}

/// Convert raw PCM speech output into something an `<audio>` element can play.
///
/// `audio/L16` and `audio/pcm` payloads are wrapped as WAV using the `rate=`
/// parameter of the mime type. Other formats pass through untouched.
#[must_use]
pub fn playable_audio(media: InlineMedia) -> InlineMedia {
    let essence = media
        .mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if essence != "audio/l16" && essence != "audio/pcm" {
        return media;
    }
    let rate = sample_rate(&media.mime_type).unwrap_or(DEFAULT_SAMPLE_RATE);
    InlineMedia::new("audio/wav", pcm16_to_wav(&media.data, rate))
}

fn sample_rate(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("rate"))
        .and_then(|(_, value)| value.trim().parse().ok())
}
