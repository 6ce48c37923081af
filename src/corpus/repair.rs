//! Byte-level repair of the mangled apostrophe in messenger exports
//!
//! The exporter writes U+2019 as three Latin-1 code points that are the
//! UTF-8 bytes of the real character. The repair runs on raw bytes, before
//! UTF-8 decoding and JSON parsing.

use memchr::memmem;

const APOSTROPHE: u8 = b'\'';

/// Byte patterns that all stand for a right single quotation mark
const MANGLED_QUOTES: &[&[u8]] = &[
    // JSON escape text, as written by the exporter
    br"\u00e2\u0080\u0099",
    // the same three code points, already UTF-8 encoded
    b"\xc3\xa2\xc2\x80\xc2\x99",
    // a correctly encoded U+2019
    b"\xe2\x80\x99",
];

/// Replace every mangled quote in `raw` with an ASCII apostrophe.
pub fn repair_bytes(raw: &[u8]) -> Vec<u8> {
    MANGLED_QUOTES
        .iter()
        .fold(raw.to_vec(), |buf, needle| replace_all(&buf, needle, APOSTROPHE))
}

fn replace_all(haystack: &[u8], needle: &[u8], with: u8) -> Vec<u8> {
    let finder = memmem::Finder::new(needle);
    let mut out = Vec::with_capacity(haystack.len());
    let mut last = 0;
    for start in finder.find_iter(haystack) {
        out.extend_from_slice(&haystack[last..start]);
        out.push(with);
        last = start + needle.len();
    }
    out.extend_from_slice(&haystack[last..]);
    out
}
