// Splits an exported calldata string into the positional argument set a
// verifier's check function expects. Two layouts exist:
//
// - expanded points: ["a0","a1"],[["b00","b01"],["b10","b11"]],["c0","c1"],
//   ["s0",...]: 8 proof tokens followed by one token per public signal
// - opaque blob:   0x<proof bytes>,["0x<packed signals>"]: exactly 2 tokens
//
// The decomposer does shape conversion only. A wrong token count is a typed
// error; semantic judgement (is the proof valid?) belongs to the verifier.

use num_bigint::BigUint;
use thiserror::Error;

use crate::normalize::parse_integer_token;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalldataError {
    /// The token sequence does not match the layout's fixed arity. This is a
    /// precondition failure, not a "proof rejected" outcome.
    #[error("expected {expected} calldata tokens, found {found}")]
    TokenCount { expected: usize, found: usize },
    /// A token that should be numeric is not a decimal or 0x-hex integer.
    #[error("calldata token {token:?} is not a decimal or hex integer")]
    InvalidToken { token: String },
}

/// Verifier arguments in the expanded point layout: two G1 points, one G2
/// point as coordinate pairs, and the public input vector. Field ordering
/// inside each `b` pair is exactly as exported and must not be reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointArgs {
    pub a: [BigUint; 2],
    pub b: [[BigUint; 2]; 2],
    pub c: [BigUint; 2],
    pub inputs: Vec<BigUint>,
}

/// Verifier arguments in the opaque blob layout: the proof blob passed
/// through untouched, plus the packed public signals wrapped in a
/// single-element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobArgs {
    pub proof: String,
    pub inputs: [BigUint; 1],
}

/// Strip quotes, brackets, and whitespace from an exported calldata string
/// and split the remainder on commas.
pub fn tokenize(calldata: &str) -> Vec<String> {
    let stripped: String = calldata
        .chars()
        .filter(|c| !matches!(c, '"' | '[' | ']') && !c.is_whitespace())
        .collect();
    stripped.split(',').map(str::to_owned).collect()
}

fn numeric(token: &str) -> Result<BigUint, CalldataError> {
    parse_integer_token(token).ok_or_else(|| CalldataError::InvalidToken {
        token: token.to_owned(),
    })
}

/// Decompose an expanded-point token sequence of length `8 + N`:
/// `a` = tokens 0-1, `b` = tokens 2-5 as two pairs, `c` = tokens 6-7,
/// `inputs` = the remaining N tokens in order.
pub fn decompose_points(tokens: &[String]) -> Result<PointArgs, CalldataError> {
    if tokens.len() < 8 {
        return Err(CalldataError::TokenCount {
            expected: 8,
            found: tokens.len(),
        });
    }
    let a = [numeric(&tokens[0])?, numeric(&tokens[1])?];
    let b = [
        [numeric(&tokens[2])?, numeric(&tokens[3])?],
        [numeric(&tokens[4])?, numeric(&tokens[5])?],
    ];
    let c = [numeric(&tokens[6])?, numeric(&tokens[7])?];
    let inputs = tokens[8..]
        .iter()
        .map(|t| numeric(t))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PointArgs { a, b, c, inputs })
}

/// Decompose an opaque-blob token sequence of exactly 2 tokens. The first
/// token is kept verbatim; the second token's integer value becomes the
/// sole packed-signal entry.
pub fn decompose_blob(tokens: &[String]) -> Result<BlobArgs, CalldataError> {
    if tokens.len() != 2 {
        return Err(CalldataError::TokenCount {
            expected: 2,
            found: tokens.len(),
        });
    }
    Ok(BlobArgs {
        proof: tokens[0].clone(),
        inputs: [numeric(&tokens[1])?],
    })
}
