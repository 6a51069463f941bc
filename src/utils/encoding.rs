//! Text of a file name as the converter sees it.
//!
//! Only base names are decoded; directories keep their OS bytes. File names
//! are normally UTF-8 and are used unchanged. On Unix a name that
//! is not valid UTF-8 most likely comes from a legacy 8-bit code page; it is
//! read as Windows-1252 so umlauts survive as letters the converter can
//! transliterate instead of being dropped.

use std::borrow::Cow;
use std::ffi::OsStr;

/// Windows-1252 code points for bytes 0x80..=0x9F; the rest match Latin-1.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{FFFD}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{FFFD}', '\u{017D}', '\u{FFFD}',
    '\u{FFFD}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{FFFD}', '\u{017E}', '\u{0178}',
];

pub fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
            _ => char::from(b),
        })
        .collect()
}

#[cfg(unix)]
pub fn decode_file_name(name: &OsStr) -> Cow<'_, str> {
    use std::os::unix::ffi::OsStrExt;

    let bytes = name.as_bytes();
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(decode_windows_1252(bytes)),
    }
}

#[cfg(not(unix))]
pub fn decode_file_name(name: &OsStr) -> Cow<'_, str> {
    name.to_string_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_latin1_umlaut() {
        assert_eq!(decode_windows_1252(b"test_\xE4.txt"), "test_ä.txt");
    }

    #[test]
    fn decodes_cp1252_specials() {
        assert_eq!(decode_windows_1252(b"\x80 \x8A\x9F"), "€ ŠŸ");
        assert_eq!(decode_windows_1252(b"\x81"), "\u{FFFD}");
    }

    #[test]
    fn utf8_name_is_borrowed() {
        let name = OsStr::new("test_ä.txt");
        assert!(matches!(decode_file_name(name), Cow::Borrowed("test_ä.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_read_as_cp1252() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"\xDCbel \xDF.txt");
        assert_eq!(decode_file_name(name), "Übel ß.txt");
    }
}
