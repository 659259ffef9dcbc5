use crate::scanner::CertificateSpan;

/// One certificate sliced out of a chain buffer, paired with its assigned
/// sequential index and name.
#[derive(Debug, PartialEq, Eq)]
pub struct ExtractedCertificate<'a> {
    pub index: u32,
    pub name: String,
    pub data: &'a [u8],
}

/// Slices each span out of `data` and assigns sequential names.
///
/// Position `idx` in the span list gets index `start_index + idx`, so
/// naming order reflects byte-offset order in the source buffer. Spans
/// must have been produced by scanning `data`.
pub fn extract<'a>(
    data: &'a [u8],
    spans: &[CertificateSpan],
    prefix: &str,
    start_index: u32,
) -> Vec<ExtractedCertificate<'a>> {
    spans
        .iter()
        .enumerate()
        .map(|(idx, span)| {
            let index = start_index + idx as u32;
            ExtractedCertificate {
                index,
                name: certificate_name(prefix, index),
                data: &data[span.start..span.end()],
            }
        })
        .collect()
}

/// The prefix followed by the decimal index, with no separator and no
/// zero-padding.
pub fn certificate_name(prefix: &str, index: u32) -> String {
    let mut buf = itoa::Buffer::new();
    let digits = buf.format(index);
    let mut name = String::with_capacity(prefix.len() + digits.len());
    name.push_str(prefix);
    name.push_str(digits);
    name
}
