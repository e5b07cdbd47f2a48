//! Character-encoding detection for source files.
//!
//! Project trees that mix simplified and traditional Chinese routinely mix
//! encodings too: UTF-8 with and without a BOM, GB-family files from
//! mainland tooling, Big5 files from older Taiwan tooling. Decoding tries
//! each in order and falls back to a byte-preserving Latin-1 read when
//! nothing matches. Writes do not round-trip the source encoding; converted
//! files are always written back as UTF-8.

use std::fmt;

use encoding_rs::{BIG5, GB18030};
use tracing::{debug, warn};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The encoding a file's bytes were decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Utf8Bom,
    Gb18030,
    Big5,
    /// Byte-preserving fallback: every byte mapped to the scalar with the
    /// same value. Nothing structured matched, so the text is likely not
    /// Chinese at all; the read is flagged as degraded.
    Latin1,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::Utf8Bom => "utf-8 (bom)",
            SourceEncoding::Gb18030 => "gb18030",
            SourceEncoding::Big5 => "big5",
            SourceEncoding::Latin1 => "latin-1",
        };
        f.write_str(name)
    }
}

/// Result of decoding a file's raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: SourceEncoding,
    /// True when only the byte-preserving fallback accepted the input.
    pub degraded: bool,
}

/// Decode file bytes, trying UTF-8 (BOM-aware), GB18030, then Big5.
///
/// The final Latin-1 tier accepts any byte sequence, so decoding is total;
/// reaching it is logged as a degraded read.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    if let Some(stripped) = bytes.strip_prefix(&UTF8_BOM) {
        if let Ok(text) = std::str::from_utf8(stripped) {
            return DecodedText {
                text: text.to_owned(),
                encoding: SourceEncoding::Utf8Bom,
                degraded: false,
            };
        }
    } else if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_owned(),
            encoding: SourceEncoding::Utf8,
            degraded: false,
        };
    }

    for (encoding, source) in [(GB18030, SourceEncoding::Gb18030), (BIG5, SourceEncoding::Big5)] {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if !had_errors {
            debug!(encoding = %source, "decoded legacy CJK file");
            return DecodedText {
                text: text.into_owned(),
                encoding: source,
                degraded: false,
            };
        }
    }

    warn!("no structured encoding matched; reading byte-for-byte as latin-1");
    DecodedText {
        text: bytes.iter().map(|&b| char::from(b)).collect(),
        encoding: SourceEncoding::Latin1,
        degraded: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_utf8() {
        let decoded = decode_text("简体中文".as_bytes());
        assert_eq!(decoded.text, "简体中文");
        assert_eq!(decoded.encoding, SourceEncoding::Utf8);
        assert!(!decoded.degraded);
    }

    #[test]
    fn test_decode_utf8_bom_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("带标记".as_bytes());
        let decoded = decode_text(&bytes);
        assert_eq!(decoded.text, "带标记");
        assert_eq!(decoded.encoding, SourceEncoding::Utf8Bom);
    }

    #[test]
    fn test_decode_gb18030() {
        let (bytes, _, _) = GB18030.encode("简体中文测试");
        let decoded = decode_text(&bytes);
        assert_eq!(decoded.text, "简体中文测试");
        assert_eq!(decoded.encoding, SourceEncoding::Gb18030);
        assert!(!decoded.degraded);
    }

    #[test]
    fn test_decode_empty_input() {
        let decoded = decode_text(b"");
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_degraded_fallback_preserves_bytes() {
        // 0x80 alone is invalid in UTF-8, GB18030, and Big5.
        let bytes = [b'a', 0x80, b'b'];
        let decoded = decode_text(&bytes);
        assert!(decoded.degraded);
        assert_eq!(decoded.encoding, SourceEncoding::Latin1);
        assert_eq!(decoded.text.chars().count(), 3);
        let round_trip: Vec<u8> = decoded.text.chars().map(|c| c as u8).collect();
        assert_eq!(round_trip, bytes);
    }
}
