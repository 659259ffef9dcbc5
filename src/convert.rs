use std::fmt;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// `ConversionError` is returned when a DER certificate cannot be turned
/// into PEM text.
#[derive(Debug)]
pub enum ConversionError {
    /// The external conversion tool is not installed or cannot be run.
    ToolUnavailable,
    /// Both the primary and the fallback invocation reported failure.
    Failed { detail: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::ToolUnavailable => write!(f, "conversion tool not available"),
            ConversionError::Failed { detail } => write!(f, "conversion failed: {detail}"),
        }
    }
}

impl std::error::Error for ConversionError {}

pub type ConversionResult<T = String> = Result<T, ConversionError>;

/// Capability to turn one DER-encoded certificate into PEM text.
///
/// A failure for one certificate is local to it; callers are expected to
/// keep processing the rest of the chain.
pub trait PemEncoder {
    fn encode(&self, der: &[u8]) -> ConversionResult;
}

/// Encoder that shells out to the `openssl` tool.
///
/// The explicit DER-input invocation is tried first; when the tool rejects
/// it, one fallback invocation letting the tool detect the format itself is
/// attempted before the certificate is given up on.
pub struct OpensslEncoder {
    program: String,
}

impl OpensslEncoder {
    pub fn new() -> OpensslEncoder {
        OpensslEncoder::with_program("openssl")
    }

    /// Uses `program` instead of `openssl` on the search path.
    pub fn with_program(program: &str) -> OpensslEncoder {
        OpensslEncoder {
            program: program.to_string(),
        }
    }

    /// Whether the tool can be run at all. Callers that get `false` should
    /// skip conversion for the run rather than fail certificate by
    /// certificate.
    pub fn available(&self) -> bool {
        Command::new(&self.program)
            .arg("version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run(&self, args: &[&str], der: &[u8]) -> ConversionResult<Output> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConversionError::ToolUnavailable,
                _ => ConversionError::Failed {
                    detail: e.to_string(),
                },
            })?;
        if let Some(stdin) = child.stdin.as_mut() {
            // The tool may exit before reading everything; that shows up as
            // a broken pipe here and as a failure status below.
            let _ = stdin.write_all(der);
        }
        child.wait_with_output().map_err(|e| ConversionError::Failed {
            detail: e.to_string(),
        })
    }
}

impl Default for OpensslEncoder {
    fn default() -> OpensslEncoder {
        OpensslEncoder::new()
    }
}

impl PemEncoder for OpensslEncoder {
    fn encode(&self, der: &[u8]) -> ConversionResult {
        let primary = self.run(&["x509", "-inform", "DER", "-outform", "PEM"], der)?;
        if primary.status.success() {
            return pem_text(primary.stdout);
        }
        let fallback = self.run(&["x509"], der)?;
        if fallback.status.success() {
            return pem_text(fallback.stdout);
        }
        Err(ConversionError::Failed {
            detail: String::from_utf8_lossy(&fallback.stderr).trim().to_string(),
        })
    }
}

fn pem_text(stdout: Vec<u8>) -> ConversionResult {
    String::from_utf8(stdout).map_err(|_| ConversionError::Failed {
        detail: "tool produced non-UTF-8 output".to_string(),
    })
}

/// In-process encoder producing standard PEM framing without any external
/// tool.
///
/// Unlike [`OpensslEncoder`] it wraps the bytes as given; it cannot reject
/// a structure that is not actually a certificate.
pub struct BuiltinEncoder;

impl PemEncoder for BuiltinEncoder {
    fn encode(&self, der: &[u8]) -> ConversionResult {
        let block = pem::Pem::new("CERTIFICATE", der);
        Ok(pem::encode_config(
            &block,
            pem::EncodeConfig::new().set_line_ending(pem::LineEnding::LF),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{BuiltinEncoder, ConversionError, OpensslEncoder, PemEncoder};

    #[test]
    fn test_builtin_framing() {
        let der = [0x30, 0x82, 0x01, 0x0a, 0x02, 0x01, 0x01];
        let text = BuiltinEncoder.encode(&der).unwrap();
        assert!(text.starts_with("-----BEGIN CERTIFICATE-----\n"));
        assert!(text.ends_with("-----END CERTIFICATE-----\n"));
        assert!(text.lines().all(|line| line.len() <= 64));
    }

    #[test]
    fn test_builtin_roundtrip() {
        let mut der = vec![0x30, 0x81, 0x80, 0x30];
        der.resize(131, 0xaa);
        let text = BuiltinEncoder.encode(&der).unwrap();
        let parsed = pem::parse(text).unwrap();
        assert_eq!(parsed.tag(), "CERTIFICATE");
        assert_eq!(parsed.contents(), &der[..]);
    }

    #[test]
    fn test_missing_tool() {
        let encoder = OpensslEncoder::with_program("openssl-does-not-exist");
        assert!(!encoder.available());
        assert!(matches!(
            encoder.encode(b"\x30\x00"),
            Err(ConversionError::ToolUnavailable)
        ));
    }

    #[test]
    fn test_openssl_rejects_garbage() {
        let encoder = OpensslEncoder::new();
        if !encoder.available() {
            eprintln!("openssl not available, skipping test_openssl_rejects_garbage");
            return;
        }
        // Not a certificate under either invocation mode.
        assert!(matches!(
            encoder.encode(&[0xde, 0xad, 0xbe, 0xef]),
            Err(ConversionError::Failed { .. })
        ));
    }
}
