// R1CS circuits for the verifier test fixtures: a two-input and a
// three-input multiplier, each exposing the product as the sole public
// signal. Implements ConstraintSynthesizer to add constraints to the
// circuit.

use ark_bn254::Fr;
use ark_r1cs_std::alloc::AllocVar;
use ark_r1cs_std::eq::EqGadget;
use ark_r1cs_std::fields::fp::FpVar;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// a * b = c with private a, b and public c.
#[derive(Clone)]
pub struct MulCircuit {
    pub a: Option<Fr>,
    pub b: Option<Fr>,
    pub c: Option<Fr>,
}

impl MulCircuit {
    /// Unassigned instance for parameter generation.
    pub fn blank() -> Self {
        Self { a: None, b: None, c: None }
    }

    /// Witness assignment from the named circuit inputs; the public
    /// product is derived here, as a witness calculator would.
    pub fn with_inputs(a: u64, b: u64) -> Self {
        let a = Fr::from(a);
        let b = Fr::from(b);
        Self { a: Some(a), b: Some(b), c: Some(a * b) }
    }

    /// Declared public outputs, in signal order.
    pub fn public_signals(&self) -> Vec<Fr> {
        self.c.into_iter().collect()
    }
}

impl ConstraintSynthesizer<Fr> for MulCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let a = FpVar::new_witness(cs.clone(), || self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b = FpVar::new_witness(cs.clone(), || self.b.ok_or(SynthesisError::AssignmentMissing))?;
        let c = FpVar::new_input(cs, || self.c.ok_or(SynthesisError::AssignmentMissing))?;

        let ab = &a * &b;
        ab.enforce_equal(&c)?;

        Ok(())
    }
}

/// in1 * in2 * in3 = out with private inputs and public out.
#[derive(Clone)]
pub struct Mul3Circuit {
    pub in1: Option<Fr>,
    pub in2: Option<Fr>,
    pub in3: Option<Fr>,
    pub out: Option<Fr>,
}

impl Mul3Circuit {
    pub fn blank() -> Self {
        Self { in1: None, in2: None, in3: None, out: None }
    }

    pub fn with_inputs(in1: u64, in2: u64, in3: u64) -> Self {
        let in1 = Fr::from(in1);
        let in2 = Fr::from(in2);
        let in3 = Fr::from(in3);
        Self {
            in1: Some(in1),
            in2: Some(in2),
            in3: Some(in3),
            out: Some(in1 * in2 * in3),
        }
    }

    pub fn public_signals(&self) -> Vec<Fr> {
        self.out.into_iter().collect()
    }
}

impl ConstraintSynthesizer<Fr> for Mul3Circuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let in1 =
            FpVar::new_witness(cs.clone(), || self.in1.ok_or(SynthesisError::AssignmentMissing))?;
        let in2 =
            FpVar::new_witness(cs.clone(), || self.in2.ok_or(SynthesisError::AssignmentMissing))?;
        let in3 =
            FpVar::new_witness(cs.clone(), || self.in3.ok_or(SynthesisError::AssignmentMissing))?;
        let out = FpVar::new_input(cs, || self.out.ok_or(SynthesisError::AssignmentMissing))?;

        let product = &(&in1 * &in2) * &in3;
        product.enforce_equal(&out)?;

        Ok(())
    }
}
