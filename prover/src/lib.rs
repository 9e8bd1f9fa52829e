// Core zkSNARK logic for proof generation and calldata export.
// Stands in for the external proving engine the test harness consumes.

// Includes:
// - `setup`: generates Groth16 parameters for a circuit
// - `prove_mul` / `prove_mul3`: produce a proof and public-signal list
//   from the named circuit inputs
// - `export`: snarkjs-shaped proof JSON and the two calldata encodings
// - `keys`: proving/verifying key persistence (the on-disk artifacts)

pub mod circuit;
pub mod export;
pub mod keys;

use anyhow::Result;
use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, Proof, ProvingKey};
use ark_relations::r1cs::ConstraintSynthesizer;
use rand::thread_rng;

use crate::circuit::{Mul3Circuit, MulCircuit};

/// A proof together with its ordered public signals. Signal order is
/// semantically significant: it fixes the positional meaning of the
/// verifier arguments downstream.
pub struct ProofBundle {
    pub proof: Proof<Bn254>,
    pub public_signals: Vec<Fr>,
}

/// Generate Groth16 parameters for a circuit.
pub fn setup<C: ConstraintSynthesizer<Fr>>(circuit: C) -> Result<ProvingKey<Bn254>> {
    let mut rng = thread_rng();
    let pk = Groth16::<Bn254>::generate_random_parameters_with_reduction(circuit, &mut rng)?;
    Ok(pk)
}

/// Prove a * b = c for the two-input multiplier.
pub fn prove_mul(a: u64, b: u64, pk: &ProvingKey<Bn254>) -> Result<ProofBundle> {
    let instance = MulCircuit::with_inputs(a, b);
    let public_signals = instance.public_signals();
    prove_instance(instance, public_signals, pk)
}

/// Prove in1 * in2 * in3 = out for the three-input multiplier.
pub fn prove_mul3(in1: u64, in2: u64, in3: u64, pk: &ProvingKey<Bn254>) -> Result<ProofBundle> {
    let instance = Mul3Circuit::with_inputs(in1, in2, in3);
    let public_signals = instance.public_signals();
    prove_instance(instance, public_signals, pk)
}

fn prove_instance<C: ConstraintSynthesizer<Fr>>(
    instance: C,
    public_signals: Vec<Fr>,
    pk: &ProvingKey<Bn254>,
) -> Result<ProofBundle> {
    let mut rng = thread_rng();
    let proof = Groth16::<Bn254>::create_random_proof_with_reduction(instance, pk, &mut rng)?;
    Ok(ProofBundle { proof, public_signals })
}
