use std::io;

use dechain::{CertificateSpan, ExtractedCertificate};

/// Renders the verbose detail line for one accepted span: where it starts
/// in the source buffer and a hex preview of its header bytes.
pub fn render_detail(
    span: &CertificateSpan,
    cert: &ExtractedCertificate<'_>,
    out: &mut dyn io::Write,
) -> io::Result<()> {
    let preview = &cert.data[..cert.data.len().min(8)];
    writeln!(
        out,
        "  offset {:#x}, header {}",
        span.start,
        hex::encode(preview)
    )
}

/// Renders the end-of-run summary: the count and the assigned names, or an
/// explicit message when the scan found nothing.
pub fn render_summary(
    certs: &[ExtractedCertificate<'_>],
    out: &mut dyn io::Write,
) -> io::Result<()> {
    if certs.is_empty() {
        writeln!(out, "No certificates found in the input file")?;
        return Ok(());
    }
    writeln!(out, "Successfully extracted {} certificates", certs.len())?;
    for cert in certs {
        writeln!(out, "  {}", cert.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render_detail, render_summary};
    use dechain::{extract, scan};

    fn chain(count: usize) -> Vec<u8> {
        let mut data = vec![];
        for _ in 0..count {
            let start = data.len();
            data.extend([0x30, 0x81, 0x80, 0x30]);
            data.resize(start + 131, 0xaa);
        }
        data
    }

    #[test]
    fn test_render_summary() {
        let data = chain(2);
        let certs = extract(&data, &scan(&data), "intel-int", 3);

        let mut output = vec![];
        render_summary(&certs, &mut output).unwrap();
        assert_eq!(
            std::str::from_utf8(&output).unwrap(),
            "Successfully extracted 2 certificates\n  intel-int3\n  intel-int4\n"
        );
    }

    #[test]
    fn test_render_summary_empty() {
        let mut output = vec![];
        render_summary(&[], &mut output).unwrap();
        assert_eq!(
            std::str::from_utf8(&output).unwrap(),
            "No certificates found in the input file\n"
        );
    }

    #[test]
    fn test_render_detail() {
        let data = chain(2);
        let spans = scan(&data);
        let certs = extract(&data, &spans, "intel-int", 3);

        let mut output = vec![];
        render_detail(&spans[1], &certs[1], &mut output).unwrap();
        assert_eq!(
            std::str::from_utf8(&output).unwrap(),
            "  offset 0x83, header 30818030aaaaaaaa\n"
        );
    }
}
