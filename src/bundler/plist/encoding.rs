//! Text encoding detection for XML templates.
//!
//! Detection follows the XML autodetection rules: a byte order mark wins,
//! otherwise the first four bytes tell UTF-16 apart from ASCII-compatible
//! input, and for the latter the `encoding` pseudo-attribute of the XML
//! declaration decides. No declaration means UTF-8.

use regex::bytes::Regex;
use std::{fmt, sync::LazyLock};

/// Encodings supported for manifest templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8
    Utf8,
    /// UTF-16, big endian
    Utf16Be,
    /// UTF-16, little endian
    Utf16Le,
    /// ISO-8859-1 (Latin-1)
    Iso8859_1,
    /// 7-bit US-ASCII
    UsAscii,
}

/// Encoding failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The document declares or implies an encoding that is not supported.
    #[error("unsupported encoding {0}")]
    Unsupported(String),

    /// The bytes are not valid in the detected encoding.
    #[error("malformed {encoding} input: {reason}")]
    Malformed {
        /// Encoding being decoded
        encoding: Encoding,
        /// What was wrong
        reason: String,
    },

    /// A character cannot be represented in the target encoding.
    #[error("character {ch:?} cannot be encoded as {encoding}")]
    Unmappable {
        /// Offending character
        ch: char,
        /// Target encoding
        encoding: Encoding,
    },
}

/// Outcome of [`detect_xml_encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detected {
    /// Detected encoding
    pub encoding: Encoding,
    /// Length of the byte order mark at the start of the input, 0 if none
    pub bom_len: usize,
}

impl Detected {
    fn new(encoding: Encoding, bom_len: usize) -> Self {
        Self { encoding, bom_len }
    }

    /// Returns true if the input started with a byte order mark.
    pub fn has_bom(&self) -> bool {
        self.bom_len > 0
    }
}

static XML_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<\?xml\s[^>]*?\bencoding\s*=\s*["']([A-Za-z][A-Za-z0-9._\-]*)["']"#)
        .expect("XML declaration pattern is valid")
});

/// Determines the encoding of an XML document from its leading bytes.
pub fn detect_xml_encoding(bytes: &[u8]) -> Result<Detected, EncodingError> {
    match bytes {
        [0x00, 0x00, 0xFE, 0xFF, ..] => Err(EncodingError::Unsupported("UTF-32BE".into())),
        [0xFF, 0xFE, 0x00, 0x00, ..] => Err(EncodingError::Unsupported("UTF-32LE".into())),
        [0xEF, 0xBB, 0xBF, ..] => Ok(Detected::new(Encoding::Utf8, 3)),
        [0xFE, 0xFF, ..] => Ok(Detected::new(Encoding::Utf16Be, 2)),
        [0xFF, 0xFE, ..] => Ok(Detected::new(Encoding::Utf16Le, 2)),
        [0x00, 0x3C, 0x00, 0x3F, ..] => Ok(Detected::new(Encoding::Utf16Be, 0)),
        [0x3C, 0x00, 0x3F, 0x00, ..] => Ok(Detected::new(Encoding::Utf16Le, 0)),
        [0x4C, 0x6F, 0xA7, 0x94, ..] => Err(EncodingError::Unsupported("EBCDIC".into())),
        _ => declared_encoding(bytes).map(|encoding| Detected::new(encoding, 0)),
    }
}

/// Reads the declared encoding of ASCII-compatible input.
fn declared_encoding(bytes: &[u8]) -> Result<Encoding, EncodingError> {
    let Some(captures) = XML_DECLARATION.captures(bytes) else {
        return Ok(Encoding::Utf8);
    };
    let label = String::from_utf8_lossy(&captures[1]);
    match Encoding::for_label(&label) {
        Some(Encoding::Utf16Be | Encoding::Utf16Le) => Err(EncodingError::Unsupported(format!(
            "{label} declared in an 8-bit document"
        ))),
        Some(encoding) => Ok(encoding),
        None => Err(EncodingError::Unsupported(label.into_owned())),
    }
}

impl Encoding {
    /// Canonical name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::UsAscii => "US-ASCII",
        }
    }

    /// Looks up an encoding by one of its common labels, case-insensitively.
    ///
    /// Plain `UTF-16` maps to big endian.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase().replace('_', "-");
        let encoding = match label.as_str() {
            "utf-8" | "utf8" => Self::Utf8,
            "utf-16" | "utf16" | "utf-16be" | "utf16be" => Self::Utf16Be,
            "utf-16le" | "utf16le" => Self::Utf16Le,
            "iso-8859-1" | "iso8859-1" | "iso-latin-1" | "latin1" | "latin-1" | "l1"
            | "cp819" => Self::Iso8859_1,
            "us-ascii" | "ascii" | "iso646-us" => Self::UsAscii,
            _ => return None,
        };
        Some(encoding)
    }

    /// Byte order mark for this encoding.
    pub fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Iso8859_1 | Self::UsAscii => &[],
        }
    }

    /// Decodes `bytes`, which must not include a byte order mark.
    pub fn decode(self, bytes: &[u8]) -> Result<String, EncodingError> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| self.malformed(e)),
            Self::Utf16Be | Self::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(self.malformed("odd number of bytes"));
                }
                let units = bytes.chunks_exact(2).map(|pair| {
                    let pair = [pair[0], pair[1]];
                    if self == Self::Utf16Be {
                        u16::from_be_bytes(pair)
                    } else {
                        u16::from_le_bytes(pair)
                    }
                });
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|e| self.malformed(e))
            }
            Self::Iso8859_1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::UsAscii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(at) => Err(self.malformed(format!("non-ASCII byte at offset {at}"))),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
        }
    }

    /// Encodes `text` without a byte order mark.
    ///
    /// Fails on the first character the encoding cannot represent.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Self::Iso8859_1 | Self::UsAscii => text
                .chars()
                .map(|ch| {
                    self.single_byte(ch)
                        .ok_or(EncodingError::Unmappable { ch, encoding: self })
                })
                .collect(),
            _ => Ok(self.encode_unicode(text)),
        }
    }

    /// Encodes XML text without a byte order mark, writing characters the
    /// encoding cannot represent as numeric character references
    /// (`&#x20AC;`).
    pub fn encode_xml(self, text: &str) -> Vec<u8> {
        match self {
            Self::Iso8859_1 | Self::UsAscii => {
                let mut out = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    match self.single_byte(ch) {
                        Some(byte) => out.push(byte),
                        None => out.extend(format!("&#x{:X};", u32::from(ch)).bytes()),
                    }
                }
                out
            }
            _ => self.encode_unicode(text),
        }
    }

    fn encode_unicode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            _ => text.as_bytes().to_vec(),
        }
    }

    fn single_byte(self, ch: char) -> Option<u8> {
        let limit = if self == Self::UsAscii { 0x7F } else { 0xFF };
        u8::try_from(u32::from(ch)).ok().filter(|&b| b <= limit)
    }

    fn malformed(self, reason: impl fmt::Display) -> EncodingError {
        EncodingError::Malformed {
            encoding: self,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    #[test]
    fn byte_order_marks() {
        let utf8 = detect_xml_encoding(b"\xEF\xBB\xBF<?xml version=\"1.0\"?>").unwrap();
        assert_eq!(utf8, Detected::new(Encoding::Utf8, 3));

        let be = detect_xml_encoding(&[0xFE, 0xFF, 0x00, 0x3C]).unwrap();
        assert_eq!(be, Detected::new(Encoding::Utf16Be, 2));

        let le = detect_xml_encoding(&[0xFF, 0xFE, 0x3C, 0x00]).unwrap();
        assert_eq!(le.encoding, Encoding::Utf16Le);
        assert!(le.has_bom());
    }

    #[test]
    fn utf16_without_bom() {
        let detected = detect_xml_encoding(&utf16le("<?xml version=\"1.0\"?>")).unwrap();
        assert_eq!(detected, Detected::new(Encoding::Utf16Le, 0));
    }

    #[test]
    fn declaration_decides_for_ascii_compatible_input() {
        let latin = detect_xml_encoding(b"<?xml version='1.0' encoding='iso-8859-1'?><plist/>")
            .unwrap();
        assert_eq!(latin.encoding, Encoding::Iso8859_1);
        assert_eq!(latin.encoding.name(), "ISO-8859-1");

        let utf8 = detect_xml_encoding(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>").unwrap();
        assert_eq!(utf8.encoding, Encoding::Utf8);
    }

    #[test]
    fn no_declaration_defaults_to_utf8() {
        assert_eq!(
            detect_xml_encoding(b"<plist/>").unwrap().encoding,
            Encoding::Utf8
        );
        assert_eq!(
            detect_xml_encoding(b"<?xml version=\"1.0\"?>").unwrap().encoding,
            Encoding::Utf8
        );
        assert_eq!(detect_xml_encoding(b"").unwrap().encoding, Encoding::Utf8);
    }

    #[test]
    fn unknown_declared_encoding_is_unsupported() {
        let err = detect_xml_encoding(b"<?xml version=\"1.0\" encoding=\"Shift_JIS\"?>")
            .unwrap_err();
        assert_eq!(err, EncodingError::Unsupported("Shift_JIS".into()));
    }

    #[test]
    fn codecs_preserve_text() {
        let text = "<string>Caf\u{e9}</string>";
        for encoding in [Encoding::Utf8, Encoding::Utf16Be, Encoding::Utf16Le, Encoding::Iso8859_1] {
            let bytes = encoding.encode(text).unwrap();
            assert_eq!(encoding.decode(&bytes).unwrap(), text, "{encoding}");
        }
        assert_eq!(Encoding::Iso8859_1.encode("\u{e9}").unwrap(), vec![0xE9]);
    }

    #[test]
    fn unmappable_and_malformed() {
        assert!(matches!(
            Encoding::UsAscii.encode("\u{e9}"),
            Err(EncodingError::Unmappable { ch: '\u{e9}', .. })
        ));
        assert!(Encoding::UsAscii.decode(&[0x41, 0xE9]).is_err());
        assert!(Encoding::Utf16Le.decode(&[0x41]).is_err());
        assert!(Encoding::Utf8.decode(&[0xC3]).is_err());
    }

    #[test]
    fn xml_encoding_falls_back_to_character_references() {
        assert_eq!(
            Encoding::Iso8859_1.encode_xml("Caf\u{e9} \u{20ac}"),
            b"Caf\xE9 &#x20AC;".to_vec()
        );
        assert_eq!(
            Encoding::UsAscii.encode_xml("\u{e9}\u{1f600}"),
            b"&#xE9;&#x1F600;".to_vec()
        );
        assert_eq!(
            Encoding::Utf16Be.encode_xml("\u{20ac}"),
            Encoding::Utf16Be.encode("\u{20ac}").unwrap()
        );
    }
}
