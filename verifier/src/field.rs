// Exact conversion from calldata integers into field elements. Values at
// or above the modulus are rejected, not reduced: an on-chain verifier
// refuses such encodings, so the harness must too.

use ark_ff::PrimeField;
use num_bigint::BigUint;

pub(crate) fn field_from<F: PrimeField>(n: &BigUint) -> Option<F> {
    let repr = F::BigInt::try_from(n.clone()).ok()?;
    F::from_bigint(repr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;

    /// The scalar field modulus itself is out of range.
    #[test]
    fn rejects_modulus() {
        let r: BigUint = Fr::MODULUS.into();
        assert_eq!(field_from::<Fr>(&r), None);
        assert_eq!(field_from::<Fr>(&(r - 1u32)), Some(-Fr::from(1u64)));
    }
}
