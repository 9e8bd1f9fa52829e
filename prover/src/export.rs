// Proof serialization for the marshalling pipeline: the snarkjs-shaped
// JSON tree the normalizer consumes, and the two calldata encodings the
// decomposer parses back apart.
//
// Point-layout calldata carries each G2 coordinate pair with c1 before c0.
// That ordering is what the expanded-point check function expects on the
// wire and is undone when the points are rebuilt.

use anyhow::{anyhow, Result};
use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ff::{BigInt, PrimeField};
use ark_groth16::Proof;
use ark_serialize::CanonicalSerialize;
use num_bigint::BigUint;
use serde_json::{json, Value};
use zk_calldata::ProofNode;

fn field_decimal<F: PrimeField>(x: &F) -> String {
    let n: BigUint = x.into_bigint().into();
    n.to_string()
}

/// Emit a proof as the stringly JSON tree a JS prover would produce:
/// projective G1 coordinates, G2 coordinate pairs in (c0, c1) order, every
/// field element a decimal string.
pub fn proof_to_json(proof: &Proof<Bn254>) -> Value {
    json!({
        "pi_a": [field_decimal(&proof.a.x), field_decimal(&proof.a.y), "1"],
        "pi_b": [
            [field_decimal(&proof.b.x.c0), field_decimal(&proof.b.x.c1)],
            [field_decimal(&proof.b.y.c0), field_decimal(&proof.b.y.c1)],
            ["1", "0"],
        ],
        "pi_c": [field_decimal(&proof.c.x), field_decimal(&proof.c.y), "1"],
        "protocol": "groth16",
        "curve": "bn128",
    })
}

/// Emit public signals as an ordered list of decimal strings.
pub fn signals_to_json(signals: &[Fr]) -> Value {
    Value::Array(signals.iter().map(|s| json!(field_decimal(s))).collect())
}

fn seq_int<'a>(node: &'a ProofNode, key: &str, idx: usize) -> Result<&'a BigUint> {
    node.get(key)
        .and_then(ProofNode::as_seq)
        .and_then(|s| s.get(idx))
        .and_then(ProofNode::as_int)
        .ok_or_else(|| anyhow!("proof tree missing integer at {key}[{idx}]"))
}

fn pair_int<'a>(node: &'a ProofNode, key: &str, i: usize, j: usize) -> Result<&'a BigUint> {
    node.get(key)
        .and_then(ProofNode::as_seq)
        .and_then(|s| s.get(i))
        .and_then(ProofNode::as_seq)
        .and_then(|s| s.get(j))
        .and_then(ProofNode::as_int)
        .ok_or_else(|| anyhow!("proof tree missing integer at {key}[{i}][{j}]"))
}

fn signal_ints(signals: &ProofNode) -> Result<Vec<&BigUint>> {
    signals
        .as_seq()
        .ok_or_else(|| anyhow!("public signals are not a sequence"))?
        .iter()
        .map(|s| s.as_int().ok_or_else(|| anyhow!("public signal is not an integer")))
        .collect()
}

/// Serialize a normalized proof and signal tree into the expanded-point
/// calldata string: `[a0,a1],[[b01,b00],[b11,b10]],[c0,c1],[s0,...]` as
/// quoted 0x-hex literals. Flattens to exactly 8 + N tokens.
pub fn export_point_calldata(proof: &ProofNode, signals: &ProofNode) -> Result<String> {
    let hex = |n: &BigUint| format!("\"0x{n:064x}\"");
    let inputs: Vec<String> = signal_ints(signals)?.into_iter().map(hex).collect();
    Ok(format!(
        "[{},{}],[[{},{}],[{},{}]],[{},{}],[{}]",
        hex(seq_int(proof, "pi_a", 0)?),
        hex(seq_int(proof, "pi_a", 1)?),
        hex(pair_int(proof, "pi_b", 0, 1)?),
        hex(pair_int(proof, "pi_b", 0, 0)?),
        hex(pair_int(proof, "pi_b", 1, 1)?),
        hex(pair_int(proof, "pi_b", 1, 0)?),
        hex(seq_int(proof, "pi_c", 0)?),
        hex(seq_int(proof, "pi_c", 1)?),
        inputs.join(","),
    ))
}

/// Serialize a normalized proof and signal tree into the opaque-blob
/// calldata string: the uncompressed proof bytes as one hex literal,
/// followed by all public signals packed into a single hex literal.
/// Flattens to exactly 2 tokens.
pub fn export_blob_calldata(proof: &ProofNode, signals: &ProofNode) -> Result<String> {
    let proof = proof_from_node(proof)?;
    let mut bytes = Vec::new();
    proof.serialize_uncompressed(&mut bytes)?;
    let packed: String = signal_ints(signals)?
        .into_iter()
        .map(|n| format!("{n:064x}"))
        .collect();
    Ok(format!("0x{},[\"0x{}\"]", hex::encode(bytes), packed))
}

fn fq_exact(n: &BigUint) -> Result<Fq> {
    let repr = BigInt::try_from(n.clone()).map_err(|_| anyhow!("coordinate exceeds 256 bits"))?;
    Fq::from_bigint(repr).ok_or_else(|| anyhow!("coordinate exceeds the base field modulus"))
}

/// Rebuild the typed proof from its normalized JSON tree.
fn proof_from_node(node: &ProofNode) -> Result<Proof<Bn254>> {
    let a = G1Affine::new_unchecked(fq_exact(seq_int(node, "pi_a", 0)?)?, fq_exact(seq_int(node, "pi_a", 1)?)?);
    let b = G2Affine::new_unchecked(
        Fq2::new(
            fq_exact(pair_int(node, "pi_b", 0, 0)?)?,
            fq_exact(pair_int(node, "pi_b", 0, 1)?)?,
        ),
        Fq2::new(
            fq_exact(pair_int(node, "pi_b", 1, 0)?)?,
            fq_exact(pair_int(node, "pi_b", 1, 1)?)?,
        ),
    );
    let c = G1Affine::new_unchecked(fq_exact(seq_int(node, "pi_c", 0)?)?, fq_exact(seq_int(node, "pi_c", 1)?)?);
    Ok(Proof { a, b, c })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::MulCircuit;
    use zk_calldata::{normalize_json, tokenize};

    fn proved() -> crate::ProofBundle {
        let pk = crate::setup(MulCircuit::blank()).unwrap();
        crate::prove_mul(3, 4, &pk).unwrap()
    }

    /// The emitted tree has the snarkjs field layout with decimal strings.
    #[test]
    fn proof_json_shape() {
        let bundle = proved();
        let value = proof_to_json(&bundle.proof);
        assert_eq!(value["pi_a"].as_array().unwrap().len(), 3);
        assert_eq!(value["pi_b"][2], json!(["1", "0"]));
        assert_eq!(value["protocol"], json!("groth16"));
        let a0 = value["pi_a"][0].as_str().unwrap();
        assert!(a0.bytes().all(|b| b.is_ascii_digit()));
    }

    /// Point calldata flattens to 8 proof tokens plus one per signal.
    #[test]
    fn point_calldata_arity() {
        let bundle = proved();
        let proof = normalize_json(&proof_to_json(&bundle.proof));
        let signals = normalize_json(&signals_to_json(&bundle.public_signals));
        let calldata = export_point_calldata(&proof, &signals).unwrap();
        assert_eq!(tokenize(&calldata).len(), 9);
    }

    /// Blob calldata flattens to exactly two tokens, and the blob decodes
    /// back to the proof that produced it.
    #[test]
    fn blob_calldata_round_trips() {
        use ark_serialize::CanonicalDeserialize;

        let bundle = proved();
        let proof = normalize_json(&proof_to_json(&bundle.proof));
        let signals = normalize_json(&signals_to_json(&bundle.public_signals));
        let calldata = export_blob_calldata(&proof, &signals).unwrap();
        let tokens = tokenize(&calldata);
        assert_eq!(tokens.len(), 2);

        let bytes = hex::decode(tokens[0].strip_prefix("0x").unwrap()).unwrap();
        let decoded = Proof::<Bn254>::deserialize_uncompressed(bytes.as_slice()).unwrap();
        assert_eq!(decoded, bundle.proof);
    }
}
