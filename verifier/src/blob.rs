// Check function for the opaque-blob calldata layout: hex-decode the
// proof blob, deserialize it with validation, unpack the combined signal
// value, then run the pairing check. Any decode failure means the proof
// is invalid, so the answer is false rather than an error.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{prepare_verifying_key, Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use ark_serialize::CanonicalDeserialize;
use num_bigint::BigUint;
use zk_calldata::BlobArgs;

use crate::field::field_from;

pub struct BlobVerifier {
    pvk: PreparedVerifyingKey<Bn254>,
    /// Public input count declared by the verifying key; fixes how many
    /// 32-byte words the packed signal value must unpack into.
    input_len: usize,
}

impl BlobVerifier {
    pub fn new(vk: VerifyingKey<Bn254>) -> Self {
        let input_len = vk.gamma_abc_g1.len().saturating_sub(1);
        Self { pvk: prepare_verifying_key(&vk), input_len }
    }

    pub fn verify(&self, args: &BlobArgs) -> bool {
        let Some(hex_digits) = args.proof.strip_prefix("0x") else {
            return false;
        };
        let Ok(bytes) = hex::decode(hex_digits) else {
            return false;
        };
        let Ok(proof) = Proof::<Bn254>::deserialize_uncompressed(bytes.as_slice()) else {
            return false;
        };
        let Some(inputs) = unpack_signals(&args.inputs[0], self.input_len) else {
            return false;
        };
        Groth16::<Bn254>::verify_proof(&self.pvk, &proof, &inputs).unwrap_or(false)
    }
}

/// Split a packed signal value back into `count` big-endian 32-byte words.
fn unpack_signals(packed: &BigUint, count: usize) -> Option<Vec<Fr>> {
    let bytes = packed.to_bytes_be();
    let width = count.checked_mul(32)?;
    if bytes.len() > width {
        return None;
    }
    let mut buf = vec![0u8; width - bytes.len()];
    buf.extend_from_slice(&bytes);
    buf.chunks(32)
        .map(|word| field_from::<Fr>(&BigUint::from_bytes_be(word)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prover::circuit::MulCircuit;

    fn verifier() -> BlobVerifier {
        let pk = prover::setup(MulCircuit::blank()).unwrap();
        BlobVerifier::new(pk.vk)
    }

    /// A structurally valid pair with a garbage blob is rejected, not an
    /// error.
    #[test]
    fn arbitrary_blob_verifies_false() {
        let args = BlobArgs {
            proof: "0x7980".to_owned(),
            inputs: [BigUint::from(4u32)],
        };
        assert!(!verifier().verify(&args));
    }

    /// Blobs without the hex prefix or with odd digits are rejected.
    #[test]
    fn malformed_blob_verifies_false() {
        let v = verifier();
        for proof in ["7980", "0xabc", "0x", ""] {
            let args = BlobArgs {
                proof: proof.to_owned(),
                inputs: [BigUint::from(4u32)],
            };
            assert!(!v.verify(&args));
        }
    }

    /// A packed value wider than the declared signal count is rejected
    /// even when the blob itself decodes to a genuine proof.
    #[test]
    fn oversized_packed_signal_verifies_false() {
        use prover::export::{export_blob_calldata, proof_to_json, signals_to_json};
        use zk_calldata::{decompose_blob, normalize_json, tokenize};

        let pk = prover::setup(MulCircuit::blank()).unwrap();
        let bundle = prover::prove_mul(3, 4, &pk).unwrap();
        let calldata = export_blob_calldata(
            &normalize_json(&proof_to_json(&bundle.proof)),
            &normalize_json(&signals_to_json(&bundle.public_signals)),
        )
        .unwrap();
        let mut args = decompose_blob(&tokenize(&calldata)).unwrap();
        args.inputs[0] = BigUint::from(1u8) << 300;
        assert!(!BlobVerifier::new(pk.vk).verify(&args));
    }
}
