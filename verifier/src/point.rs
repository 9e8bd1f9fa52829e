// Check function for the expanded-point calldata layout: rebuild the
// three proof points from their coordinate integers and run the pairing
// check against the public input vector.

use ark_bn254::{Bn254, Fq2, Fr, G1Affine, G2Affine};
use ark_groth16::{prepare_verifying_key, Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use num_bigint::BigUint;
use zk_calldata::PointArgs;

use crate::field::field_from;

pub struct PointVerifier {
    pvk: PreparedVerifyingKey<Bn254>,
}

impl PointVerifier {
    pub fn new(vk: VerifyingKey<Bn254>) -> Self {
        Self { pvk: prepare_verifying_key(&vk) }
    }

    /// Evaluate the proof points against the public inputs. Returns false
    /// for anything that does not decode to valid curve points, including
    /// the all-zero argument set, without erroring.
    pub fn verify(&self, args: &PointArgs) -> bool {
        let Some(a) = g1_from_coords(&args.a[0], &args.a[1]) else {
            return false;
        };
        let Some(b) = g2_from_coords(&args.b) else {
            return false;
        };
        let Some(c) = g1_from_coords(&args.c[0], &args.c[1]) else {
            return false;
        };
        let mut inputs = Vec::with_capacity(args.inputs.len());
        for n in &args.inputs {
            match field_from::<Fr>(n) {
                Some(x) => inputs.push(x),
                None => return false,
            }
        }
        let proof = Proof { a, b, c };
        Groth16::<Bn254>::verify_proof(&self.pvk, &proof, &inputs).unwrap_or(false)
    }
}

fn g1_from_coords(x: &BigUint, y: &BigUint) -> Option<G1Affine> {
    let p = G1Affine::new_unchecked(field_from(x)?, field_from(y)?);
    (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()).then_some(p)
}

/// The calldata carries each G2 coordinate pair as (c1, c0); swap back
/// when assembling the extension-field elements.
fn g2_from_coords(b: &[[BigUint; 2]; 2]) -> Option<G2Affine> {
    let x = Fq2::new(field_from(&b[0][1])?, field_from(&b[0][0])?);
    let y = Fq2::new(field_from(&b[1][1])?, field_from(&b[1][0])?);
    let p = G2Affine::new_unchecked(x, y);
    (p.is_on_curve() && p.is_in_correct_subgroup_assuming_on_curve()).then_some(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::PrimeField;
    use prover::circuit::MulCircuit;

    fn zero_args() -> PointArgs {
        let z = || BigUint::from(0u32);
        PointArgs {
            a: [z(), z()],
            b: [[z(), z()], [z(), z()]],
            c: [z(), z()],
            inputs: vec![z()],
        }
    }

    /// The all-zero argument set is structurally valid and must evaluate
    /// to false rather than raise.
    #[test]
    fn zeroed_args_verify_false() {
        let pk = prover::setup(MulCircuit::blank()).unwrap();
        let verifier = PointVerifier::new(pk.vk);
        assert!(!verifier.verify(&zero_args()));
    }

    /// A coordinate at the base field modulus is rejected, not reduced.
    #[test]
    fn out_of_range_coordinate_verifies_false() {
        let pk = prover::setup(MulCircuit::blank()).unwrap();
        let verifier = PointVerifier::new(pk.vk);
        let mut args = zero_args();
        args.a[0] = ark_bn254::Fq::MODULUS.into();
        assert!(!verifier.verify(&args));
    }

    /// An input count that disagrees with the verifying key is a rejection,
    /// not a panic. Generator points keep the pairing check reachable.
    #[test]
    fn wrong_input_count_verifies_false() {
        use ark_ec::AffineRepr;

        let coord = |f: ark_bn254::Fq| -> BigUint { f.into_bigint().into() };
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        let args = PointArgs {
            a: [coord(g1.x), coord(g1.y)],
            b: [
                [coord(g2.x.c1), coord(g2.x.c0)],
                [coord(g2.y.c1), coord(g2.y.c0)],
            ],
            c: [coord(g1.x), coord(g1.y)],
            inputs: vec![BigUint::from(0u32); 3],
        };

        let pk = prover::setup(MulCircuit::blank()).unwrap();
        let verifier = PointVerifier::new(pk.vk);
        assert!(!verifier.verify(&args));
    }
}
