use std::path::PathBuf;

use anyhow::Result;
use ark_bn254::Bn254;
use ark_groth16::VerifyingKey;
use clap::{Parser, Subcommand, ValueEnum};

use prover::circuit::{Mul3Circuit, MulCircuit};
use prover::export::{export_blob_calldata, export_point_calldata, proof_to_json, signals_to_json};
use prover::ProofBundle;
use zk_calldata::{decompose_blob, decompose_points, normalize_json, tokenize, ProofNode};
use zk_verifier::{BlobVerifier, PointVerifier};

mod patch;

/// zkcli: zkSNARK proof and calldata tool
#[derive(Parser)]
#[command(name = "zkcli")]
#[command(about = "Run the prove -> normalize -> calldata -> verify pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    /// Expanded points: a, b, c plus the public input vector
    Points,
    /// Opaque proof blob plus packed public signals
    Blob,
}

#[derive(Clone, Copy, ValueEnum)]
enum CircuitKind {
    /// a * b = c
    Mul,
    /// in1 * in2 * in3 = out
    Mul3,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate circuit parameters and save them as on-disk artifacts
    Setup {
        #[arg(long, value_enum)]
        circuit: CircuitKind,

        #[arg(long, default_value = "proving_key.bin")]
        pk_out: PathBuf,
        #[arg(long, default_value = "verifying_key.bin")]
        vk_out: PathBuf,
    },
    /// Prove a * b = c and check the exported calldata
    Prove {
        #[arg(long)]
        a: u64,
        #[arg(long)]
        b: u64,

        /// Proving key artifact; runs a fresh setup when omitted
        #[arg(long)]
        pk: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "points")]
        layout: Layout,
    },
    /// Prove in1 * in2 * in3 = out and check the exported calldata
    Prove3 {
        #[arg(long)]
        in1: u64,
        #[arg(long)]
        in2: u64,
        #[arg(long)]
        in3: u64,

        /// Proving key artifact; runs a fresh setup when omitted
        #[arg(long)]
        pk: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "points")]
        layout: Layout,
    },
    /// Patch generated verifier source: bump the pragma, rename the contract
    Patch {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        contract: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup { circuit, pk_out, vk_out } => {
            let pk = match circuit {
                CircuitKind::Mul => prover::setup(MulCircuit::blank())?,
                CircuitKind::Mul3 => prover::setup(Mul3Circuit::blank())?,
            };
            prover::keys::save_proving_key(&pk, &pk_out)?;
            prover::keys::save_verifying_key(&pk.vk, &vk_out)?;
            println!("✅ Keys saved to {} and {}", pk_out.display(), vk_out.display());
            Ok(())
        }
        Commands::Prove { a, b, pk, layout } => {
            let pk = match pk {
                Some(path) => prover::keys::load_proving_key(path)?,
                None => prover::setup(MulCircuit::blank())?,
            };
            let bundle = prover::prove_mul(a, b, &pk)?;
            report(&format!("{a} x {b}"), bundle, pk.vk, layout)
        }
        Commands::Prove3 { in1, in2, in3, pk, layout } => {
            let pk = match pk {
                Some(path) => prover::keys::load_proving_key(path)?,
                None => prover::setup(Mul3Circuit::blank())?,
            };
            let bundle = prover::prove_mul3(in1, in2, in3, &pk)?;
            report(&format!("{in1} x {in2} x {in3}"), bundle, pk.vk, layout)
        }
        Commands::Patch { file, contract } => {
            patch::patch_verifier_file(&file, &contract)?;
            println!("✅ Patched {}", file.display());
            Ok(())
        }
    }
}

/// Normalize, export, decompose, verify, and print the verdict.
fn report(
    statement: &str,
    bundle: ProofBundle,
    vk: VerifyingKey<Bn254>,
    layout: Layout,
) -> Result<()> {
    let proof = normalize_json(&proof_to_json(&bundle.proof));
    let signals = normalize_json(&signals_to_json(&bundle.public_signals));

    if let Some(first) = signals.as_seq().and_then(|s| s.first()).and_then(ProofNode::as_int) {
        println!("{statement} = {first}");
    }

    let accepted = match layout {
        Layout::Points => {
            let calldata = export_point_calldata(&proof, &signals)?;
            let args = decompose_points(&tokenize(&calldata))?;
            PointVerifier::new(vk).verify(&args)
        }
        Layout::Blob => {
            let calldata = export_blob_calldata(&proof, &signals)?;
            let args = decompose_blob(&tokenize(&calldata))?;
            BlobVerifier::new(vk).verify(&args)
        }
    };

    if accepted {
        println!("✅ Proof accepted");
    } else {
        println!("❌ Proof rejected");
    }
    Ok(())
}
