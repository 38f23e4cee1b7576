//! Thin CLI front end over the `chunkforge` library: inspect a container's
//! segments, rewrite it under a retention policy, run the pixel pipeline, or
//! apply the RSA block-cipher modes to its raster.

use std::path::PathBuf;
use std::process::ExitCode;

use chunkforge::chunk::attrs::HeaderInfo;
use chunkforge::chunk::SegmentTag;
use chunkforge::crypto::{decrypt_cbc, decrypt_ecb, encrypt_cbc, encrypt_ecb, KeyPair};
use chunkforge::{defilter, encode_raster, open_container, write_container, ChunkForgeResult, WritePolicy};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;

#[derive(Parser)]
#[command(name = "chunkforge", about = "Inspect, rewrite, and re-cipher a chunked raster container")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print one line per segment: type, length, critical/ancillary, CRC status.
  Inspect { path: PathBuf },
  /// Rewrite a container, keeping all critical segments plus the named ancillary tags.
  Strip {
    input: PathBuf,
    output: PathBuf,
    #[arg(long = "keep", value_name = "TAG")]
    keep: Vec<String>,
  },
  /// Run the pixel pipeline and write the raw raster bytes.
  Defilter { input: PathBuf, output: PathBuf },
  /// Generate a key, RSA-ECB-encrypt the raster, and re-encode the file.
  EncryptEcb {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    bits: u64,
  },
  /// Decrypt a file previously produced by `encrypt-ecb`.
  DecryptEcb {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    bits: u64,
    #[arg(long)]
    n: String,
    #[arg(long)]
    d: String,
  },
  /// Generate a key, RSA-CBC-encrypt the raster, and re-encode the file.
  EncryptCbc {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    bits: u64,
  },
  /// Decrypt a file previously produced by `encrypt-cbc`.
  DecryptCbc {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    bits: u64,
    #[arg(long)]
    n: String,
    #[arg(long)]
    d: String,
  },
}

fn main() -> ExitCode {
  env_logger::init();
  let cli = Cli::parse();
  match run(cli.command) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("chunkforge: {e}");
      ExitCode::FAILURE
    }
  }
}

fn run(command: Command) -> ChunkForgeResult<()> {
  match command {
    Command::Inspect { path } => inspect(&path),
    Command::Strip { input, output, keep } => strip(&input, &output, &keep),
    Command::Defilter { input, output } => {
      let container = open_container(&input)?;
      let raster = defilter(&container)?;
      std::fs::write(&output, raster)?;
      Ok(())
    }
    Command::EncryptEcb { input, output, bits } => encrypt(&input, &output, bits, false),
    Command::EncryptCbc { input, output, bits } => encrypt(&input, &output, bits, true),
    Command::DecryptEcb { input, output, bits, n, d } => decrypt(&input, &output, bits, &n, &d, false),
    Command::DecryptCbc { input, output, bits, n, d } => decrypt(&input, &output, bits, &n, &d, true),
  }
}

fn inspect(path: &PathBuf) -> ChunkForgeResult<()> {
  let container = open_container(path)?;
  for segment in container.chunks() {
    println!(
      "{tag}  len={len:<8} {critical}  crc={status}",
      tag = segment.tag(),
      len = segment.length(),
      critical = if segment.is_critical() { "critical " } else { "ancillary" },
      status = if segment.crc_is_valid() { "ok" } else { "MISMATCH" },
    );
  }
  if !container.trailing_bytes().is_empty() {
    println!("trailing: {} byte(s)", container.trailing_bytes().len());
  }
  Ok(())
}

fn strip(input: &PathBuf, output: &PathBuf, keep: &[String]) -> ChunkForgeResult<()> {
  let container = open_container(input)?;
  let tags: Vec<SegmentTag> = keep
    .iter()
    .filter_map(|s| s.as_bytes().try_into().ok())
    .map(SegmentTag::from_bytes)
    .collect();
  let policy = if tags.is_empty() { WritePolicy::CriticalOnly } else { WritePolicy::CriticalPlus(tags) };
  write_container(&container, output, &policy)
}

fn header_of(container: &chunkforge::Container) -> ChunkForgeResult<HeaderInfo> {
  let segment = container.first(SegmentTag::IHDR).ok_or(chunkforge::ChunkForgeError::BadPayload)?;
  HeaderInfo::parse(segment.payload()).ok_or(chunkforge::ChunkForgeError::BadPayload)
}

fn encrypt(input: &PathBuf, output: &PathBuf, bits: u64, cbc: bool) -> ChunkForgeResult<()> {
  let container = open_container(input)?;
  let header = header_of(&container)?;
  let raster = defilter(&container)?;

  let key = KeyPair::generate(bits, &mut rand::thread_rng());
  let (ciphertext, overflow) = if cbc {
    encrypt_cbc(&key, &raster, &mut rand::thread_rng())
  } else {
    encrypt_ecb(&key, &raster)
  };

  encode_raster(header.width.to_u32(), header.height.to_u32(), header.color_type, header.bit_depth, &ciphertext, output, Some(&overflow))?;

  println!("n = {}", key.n.to_str_radix(16));
  println!("e = {}", key.e.to_str_radix(16));
  println!("d = {}", key.d.to_str_radix(16));
  Ok(())
}

fn decrypt(input: &PathBuf, output: &PathBuf, bits: u64, n: &str, d: &str, cbc: bool) -> ChunkForgeResult<()> {
  let n = BigUint::parse_bytes(n.as_bytes(), 16).ok_or(chunkforge::ChunkForgeError::BadPayload)?;
  let d = BigUint::parse_bytes(d.as_bytes(), 16).ok_or(chunkforge::ChunkForgeError::BadPayload)?;
  let key = KeyPair { n, e: BigUint::from(0u32), d, k: bits };

  let container = open_container(input)?;
  let header = header_of(&container)?;
  let ciphertext = defilter(&container)?;
  let overflow = container.trailing_bytes();

  let raster = if cbc { decrypt_cbc(&key, &ciphertext, overflow) } else { decrypt_ecb(&key, &ciphertext, overflow) };

  encode_raster(header.width.to_u32(), header.height.to_u32(), header.color_type, header.bit_depth, &raster, output, None)
}
