//! NDR Inspect
//!
//! Dumps the headers of a type-serialized NDR buffer and, optionally, the
//! first conformant varying string of its payload.
//!
//! USAGE:
//!   ndr-inspect [OPTIONS] <INPUT>
//!
//! EXAMPLES:
//!   ndr-inspect blob.bin                  # Raw binary file
//!   ndr-inspect --hex blob.txt            # Hex text file
//!   xxd -p blob.bin | ndr-inspect --hex - # Hex text on stdin
//!   ndr-inspect --string -vv blob.bin     # Decode a string, trace logging

use clap::{ArgAction, Parser};
use ndr::{Decoder, DecoderConfig, DEFAULT_MAX_STRING_ELEMENTS};
use std::io::{self, Read};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ndr-inspect")]
#[command(version)]
#[command(about = "Inspect an NDR type serialization buffer")]
struct Args {
    /// Input file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Treat the input as hex text (whitespace ignored)
    #[arg(long)]
    hex: bool,

    /// Decode a conformant varying string at the start of the payload
    #[arg(short, long)]
    string: bool,

    /// Do not limit the payload to the declared object buffer length
    #[arg(long)]
    no_enforce_length: bool,

    /// Largest string element count accepted
    #[arg(long, default_value_t = DEFAULT_MAX_STRING_ELEMENTS)]
    max_string_elements: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn read_input(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        std::fs::read(path)
    }
}

fn parse_hex(text: &[u8]) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    hex::decode(digits)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let raw = read_input(&args.input)?;
    let data = if args.hex { parse_hex(&raw)? } else { raw };
    info!("Read {} bytes from {}", data.len(), args.input);

    let config = DecoderConfig::default()
        .with_enforce_object_length(!args.no_enforce_length)
        .with_max_string_elements(args.max_string_elements);
    let mut decoder = Decoder::with_config(&data, config)?;

    let common = *decoder.common_header();
    println!("Common header:");
    println!("  version:              {}", common.version);
    println!("  byte order:           {:?}", common.byte_order);
    println!("  character encoding:   {:?}", common.character_encoding);
    println!("  float representation: {:?}", common.float_representation);
    println!("  header length:        {}", common.header_length);
    println!("  filler:               {:02x?}", common.filler);

    let private = *decoder.private_header();
    println!("Private header:");
    println!("  object buffer length: {}", private.object_buffer_length);
    println!("  filler:               {:02x?}", private.filler);
    println!("Payload: {} bytes", decoder.remaining());

    if args.string {
        let s = decoder.read_conformant_varying_string()?;
        println!("String ({} code units):", s.len());
        println!("  {:?}", String::from_utf16_lossy(s.trim_terminator()));
        println!("Payload remaining: {} bytes", decoder.remaining());
    }

    Ok(())
}
