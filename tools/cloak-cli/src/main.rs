//! Cloak Command Line Tool
//!
//! Provides commands for working with Cloak payloads:
//! - canonicalize: Generate canonical JSON representation
//! - encode: Encode every top-level property of a payload
//! - decode: Decode decodable properties, leave the rest unchanged
//! - sign: Compute the HMAC-SHA256 signature of a JSON value
//! - verify: Check a signature against a JSON value

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cloak_canonical::to_canonical_string;
use cloak_core::{
    select_codec, select_signer, CodecAlgorithm, PayloadTransformer, SecretKey, SignatureService,
    SignerAlgorithm,
};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloak")]
#[command(version)]
#[command(about = "Cloak Command Line Tool - Canonicalize, encode, decode, and sign JSON payloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Output canonical JSON representation
    #[command(about = "Output canonical JSON representation")]
    Canonicalize {
        /// Path to the JSON file to canonicalize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Encode a payload field by field
    #[command(about = "Encode every top-level property of a JSON object")]
    Encode {
        /// Path to the JSON payload file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Codec identifier (base64, rot13)
        #[arg(long, short, default_value = "base64")]
        algorithm: String,
    },

    /// Decode a payload field by field
    #[command(about = "Decode decodable top-level properties of a JSON object")]
    Decode {
        /// Path to the JSON payload file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Codec identifier (base64, rot13)
        #[arg(long, short, default_value = "base64")]
        algorithm: String,
    },

    /// Sign a JSON value
    #[command(about = "Compute the HMAC-SHA256 signature of a JSON value")]
    Sign {
        /// Path to the JSON file to sign
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Signing key
        #[arg(long, short, env = "CLOAK_SECRET_KEY")]
        key: String,
    },

    /// Verify a signature
    #[command(about = "Check a signature against a JSON value (exit 1 on mismatch)")]
    Verify {
        /// Path to the JSON file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Signing key
        #[arg(long, short, env = "CLOAK_SECRET_KEY")]
        key: String,

        /// The signature tag to check
        #[arg(long, short)]
        signature: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { file } => handle_canonicalize(&file),
        Commands::Encode { file, algorithm } => handle_transform(&file, &algorithm, true),
        Commands::Decode { file, algorithm } => handle_transform(&file, &algorithm, false),
        Commands::Sign { file, key } => handle_sign(&file, &key),
        Commands::Verify {
            file,
            key,
            signature,
        } => handle_verify(&file, &key, &signature),
    }
}

fn read_json(file: &PathBuf) -> Result<Value> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    serde_json::from_str(&json).with_context(|| format!("Failed to parse {} as JSON", file.display()))
}

fn handle_canonicalize(file: &PathBuf) -> Result<()> {
    let value = read_json(file)?;
    println!("{}", to_canonical_string(&value));
    Ok(())
}

fn handle_transform(file: &PathBuf, algorithm: &str, encode: bool) -> Result<()> {
    let algorithm: CodecAlgorithm = algorithm.parse()?;
    let transformer = PayloadTransformer::new(select_codec(algorithm));

    let value = read_json(file)?;
    let Some(payload) = value.as_object() else {
        bail!("{} is not a JSON object", file.display());
    };

    let result = if encode {
        transformer.encode_payload(payload)
    } else {
        transformer.decode_payload(payload)
    };

    println!("{}", Value::Object(result));
    Ok(())
}

fn handle_sign(file: &PathBuf, key: &str) -> Result<()> {
    let value = read_json(file)?;

    let service = SignatureService::new(select_signer(
        SignerAlgorithm::HmacSha256,
        SecretKey::from(key),
    ));
    println!("{}", service.sign_value(&value));
    Ok(())
}

fn handle_verify(file: &PathBuf, key: &str, signature: &str) -> Result<()> {
    let value = read_json(file)?;

    let service = SignatureService::new(select_signer(
        SignerAlgorithm::HmacSha256,
        SecretKey::from(key),
    ));

    if !service.verify_value(&value, signature) {
        bail!("Signature is invalid");
    }

    println!("Signature is valid");
    Ok(())
}
