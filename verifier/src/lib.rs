// Groth16 check functions over BN254, one per calldata layout.
//
// Both verifiers treat well-typed garbage as an invalid proof, never as an
// error: zeroed points, off-curve coordinates, out-of-range values, and
// undecodable blobs all verify to false. Each verifier is a per-test-case
// value built from a verifying key.

mod field;

pub mod blob;
pub mod point;

pub use blob::BlobVerifier;
pub use point::PointVerifier;
