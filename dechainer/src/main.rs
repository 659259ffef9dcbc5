use clap::Parser;
use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use dechain::{extract, scan, BuiltinEncoder, OpensslEncoder, PemEncoder};
use dechainer::{render_detail, render_summary};

#[derive(Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
enum Converter {
    /// Convert with the openssl tool (skipped with a warning if absent)
    Openssl,
    /// Convert in-process without any external tool
    Builtin,
    /// Do not write PEM files at all
    None,
}

#[derive(clap::Parser)]
#[clap(about = "Extract certificates from a DER chain file")]
struct Args {
    /// Path to the input DER chain file
    #[clap()]
    input_file: PathBuf,

    /// Directory to save extracted certificates (default: current directory)
    #[clap(short, long)]
    output_dir: Option<PathBuf>,

    /// Prefix for certificate filenames
    #[clap(short, long, default_value = "intel-int")]
    prefix: String,

    /// Starting index for certificate numbering
    #[clap(short, long, default_value_t = 3)]
    start_index: u32,

    /// How to produce the PEM companion files
    #[clap(long, value_enum, default_value = "openssl")]
    converter: Converter,

    /// Print the offset and header bytes of each certificate found
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if !args.input_file.is_file() {
        return Err(format!("input file {} not found", args.input_file.display()).into());
    }

    let output_dir = match args.output_dir {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .map_err(|e| format!("cannot create output directory {}: {e}", dir.display()))?;
            dir
        }
        None => std::env::current_dir()?,
    };

    let data = fs::read(&args.input_file)?;
    let spans = scan(&data);
    let certs = extract(&data, &spans, &args.prefix, args.start_index);

    if certs.is_empty() {
        render_summary(&certs, &mut io::stdout().lock())?;
        return Ok(());
    }

    let encoder: Option<Box<dyn PemEncoder>> = match args.converter {
        Converter::Openssl => {
            let openssl = OpensslEncoder::new();
            if openssl.available() {
                Some(Box::new(openssl))
            } else {
                eprintln!("warning: openssl tool not found, skipping PEM conversion");
                None
            }
        }
        Converter::Builtin => Some(Box::new(BuiltinEncoder)),
        Converter::None => None,
    };

    for (position, cert) in certs.iter().enumerate() {
        let der_path = output_dir.join(format!("{}.der", cert.name));
        fs::write(&der_path, cert.data)?;
        println!(
            "Extracted certificate {} ({} bytes) to {}",
            position + 1,
            cert.data.len(),
            der_path.display()
        );
        if args.verbose {
            render_detail(&spans[position], cert, &mut io::stdout().lock())?;
        }

        let Some(encoder) = &encoder else { continue };
        let pem_path = output_dir.join(format!("{}.pem", cert.name));
        match encoder.encode(cert.data) {
            Ok(text) => {
                fs::write(&pem_path, text)?;
                println!("Converted to PEM format: {}", pem_path.display());
            }
            Err(e) => eprintln!("error converting {} to PEM: {e}", cert.name),
        }
    }

    render_summary(&certs, &mut io::stdout().lock())?;

    Ok(())
}
