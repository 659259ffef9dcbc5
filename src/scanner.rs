/// The ASN.1 universal SEQUENCE tag. Every DER certificate is an outer
/// SEQUENCE, and its first inner element (the to-be-signed body) is another.
const SEQUENCE: u8 = 0x30;
/// The ASN.1 universal INTEGER tag, the other element that can legitimately
/// follow a certificate's outer header.
const INTEGER: u8 = 0x02;

/// Content lengths outside this window are treated as false positives:
/// real leaf and intermediate certificates are rarely under 128 or over
/// 10000 bytes.
const MIN_PLAUSIBLE_LENGTH: usize = 128;
const MAX_PLAUSIBLE_LENGTH: usize = 10000;

/// A decoded ASN.1 length field: the number of content bytes and the size
/// of the header (tag byte plus length-encoding bytes) preceding them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct LengthField {
    length: usize,
    header_size: usize,
}

/// Reads the length field that follows the tag byte at `data[at]`.
///
/// Exactly four encodings are supported: the short form and the
/// 0x81/0x82/0x83 long forms. Any other marker byte (0x80 indefinite,
/// 0x84 and up), and any encoding whose length bytes run past the end of
/// `data`, is a non-match rather than an error.
fn read_length(data: &[u8], at: usize) -> Option<LengthField> {
    let b = *data.get(at + 1)?;
    if b & 0x80 == 0 {
        return Some(LengthField {
            length: b as usize,
            header_size: 2,
        });
    }
    match b {
        0x81 => Some(LengthField {
            length: *data.get(at + 2)? as usize,
            header_size: 3,
        }),
        0x82 => {
            let hi = *data.get(at + 2)? as usize;
            let lo = *data.get(at + 3)? as usize;
            Some(LengthField {
                length: hi << 8 | lo,
                header_size: 4,
            })
        }
        0x83 => {
            let hi = *data.get(at + 2)? as usize;
            let mid = *data.get(at + 3)? as usize;
            let lo = *data.get(at + 4)? as usize;
            Some(LengthField {
                length: hi << 16 | mid << 8 | lo,
                header_size: 5,
            })
        }
        _ => None,
    }
}

/// A contiguous byte range believed to hold one complete DER certificate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CertificateSpan {
    /// Offset of the outer SEQUENCE tag within the scanned buffer.
    pub start: usize,
    /// Header and content bytes together.
    pub total_size: usize,
}

impl CertificateSpan {
    /// The offset one past the last byte of the span.
    pub fn end(&self) -> usize {
        self.start + self.total_size
    }
}

/// Scans `data` for DER-encoded certificates and returns their spans,
/// strictly increasing in offset and non-overlapping.
///
/// This is a boundary locator, not a DER parser: a candidate is accepted on
/// exactly five conditions: an outer SEQUENCE tag, a supported length
/// encoding, a content length of 128 to 10000 bytes inclusive, the whole
/// structure fitting in the buffer, and an inner SEQUENCE or INTEGER tag
/// immediately after the header. A rejected candidate advances the cursor
/// a single byte; an accepted one advances past the entire span, so
/// structures nested inside an accepted certificate are never reported as
/// additional certificates.
///
/// Garbage, truncated tails, and padding never cause an error or an
/// out-of-bounds read; a buffer with no plausible certificate yields an
/// empty vector. Known limitation: candidates starting within the last 4
/// bytes of the buffer are never attempted.
pub fn scan(data: &[u8]) -> Vec<CertificateSpan> {
    let mut spans = vec![];
    let mut i = 0;
    while i + 4 < data.len() {
        if data[i] != SEQUENCE {
            i += 1;
            continue;
        }
        let field = match read_length(data, i) {
            Some(field) => field,
            None => {
                i += 1;
                continue;
            }
        };
        let total_size = field.header_size + field.length;
        if (MIN_PLAUSIBLE_LENGTH..=MAX_PLAUSIBLE_LENGTH).contains(&field.length)
            && i + total_size <= data.len()
            && matches!(data[i + field.header_size], SEQUENCE | INTEGER)
        {
            spans.push(CertificateSpan {
                start: i,
                total_size,
            });
            i += total_size;
        } else {
            i += 1;
        }
    }
    spans
}
