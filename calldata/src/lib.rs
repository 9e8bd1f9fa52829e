// Proof-to-calldata marshalling for zkSNARK verifier testing.
//
// Includes:
// - `normalize`: recursive conversion of decimal/hex string leaves in a
//   proof/public-signal tree into exact big integers
// - `decompose`: parsing an exported calldata string into the positional
//   arguments of a verifier check function, for two incompatible layouts
//   (expanded points and opaque blob)

pub mod decompose;
pub mod normalize;

pub use decompose::{decompose_blob, decompose_points, tokenize, BlobArgs, CalldataError, PointArgs};
pub use normalize::{normalize_json, parse_integer_token, ProofNode};
