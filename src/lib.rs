//! Splits a concatenated DER certificate chain ("chain blob") into its
//! individual certificates by locating ASN.1 tag/length boundaries in the
//! raw bytes. There is no container format to rely on: boundaries are found
//! heuristically and candidates that do not look like real certificates are
//! skipped, so arbitrary input is tolerated without errors.
//!
//! ```
//! let mut chain = vec![0x30, 0x81, 0x80, 0x30];
//! chain.resize(131, 0);
//!
//! let spans = dechain::scan(&chain);
//! assert_eq!(spans.len(), 1);
//!
//! let certs = dechain::extract(&chain, &spans, "cert", 3);
//! assert_eq!(certs[0].name, "cert3");
//! assert_eq!(certs[0].data.len(), 131);
//! ```

mod convert;
mod extract;
mod scanner;

pub use crate::convert::{
    BuiltinEncoder, ConversionError, ConversionResult, OpensslEncoder, PemEncoder,
};
pub use crate::extract::{certificate_name, extract, ExtractedCertificate};
pub use crate::scanner::{scan, CertificateSpan};
