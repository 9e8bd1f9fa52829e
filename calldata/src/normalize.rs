// Recursive numeric normalization of snarkjs-style proof trees.
//
// Proof and public-signal JSON emitted by the prover carries every field
// element as a decimal (or 0x-hex) string. `normalize` walks the tree and
// replaces each such leaf with an exact BigUint, leaving the container
// shape, key set, and ordering untouched.

use num_bigint::BigUint;
use serde_json::Value;

/// A node of a proof/public-signal value tree.
///
/// Mappings keep their entries in insertion order; `Other` carries any leaf
/// that is not an integer string (booleans, plain numbers, tag strings such
/// as `"groth16"`).
#[derive(Debug, Clone, PartialEq)]
pub enum ProofNode {
    Int(BigUint),
    Other(Value),
    Seq(Vec<ProofNode>),
    Map(Vec<(String, ProofNode)>),
    Null,
}

impl ProofNode {
    /// Structural lift from JSON. No numeric conversion happens here;
    /// string leaves stay `Other` until `normalize` runs.
    pub fn from_json(value: &Value) -> ProofNode {
        match value {
            Value::Null => ProofNode::Null,
            Value::Array(items) => {
                ProofNode::Seq(items.iter().map(ProofNode::from_json).collect())
            }
            Value::Object(map) => ProofNode::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), ProofNode::from_json(v)))
                    .collect(),
            ),
            other => ProofNode::Other(other.clone()),
        }
    }

    /// Convert every decimal or `0x`-hex string leaf into an exact integer,
    /// rebuilding containers with identical length, key set, and order.
    ///
    /// Non-numeric leaves pass through unchanged; this is permissive by
    /// design, not a validator. Pure and idempotent.
    pub fn normalize(self) -> ProofNode {
        match self {
            ProofNode::Other(Value::String(s)) => match parse_integer_token(&s) {
                Some(n) => ProofNode::Int(n),
                None => ProofNode::Other(Value::String(s)),
            },
            ProofNode::Seq(items) => {
                ProofNode::Seq(items.into_iter().map(ProofNode::normalize).collect())
            }
            ProofNode::Map(entries) => ProofNode::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, v.normalize()))
                    .collect(),
            ),
            leaf => leaf,
        }
    }

    /// Look up a mapping entry by key.
    pub fn get(&self, key: &str) -> Option<&ProofNode> {
        match self {
            ProofNode::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[ProofNode]> {
        match self {
            ProofNode::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<&BigUint> {
        match self {
            ProofNode::Int(n) => Some(n),
            _ => None,
        }
    }
}

/// Lift a JSON value and normalize it in one step.
pub fn normalize_json(value: &Value) -> ProofNode {
    ProofNode::from_json(value).normalize()
}

/// Parse a string as an exact unsigned integer if it is strictly decimal
/// (`^[0-9]+$`) or `0x`-prefixed hex (`^0x[0-9a-fA-F]+$`).
pub fn parse_integer_token(s: &str) -> Option<BigUint> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return BigUint::parse_bytes(s.as_bytes(), 10);
    }
    if let Some(digits) = s.strip_prefix("0x") {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return BigUint::parse_bytes(digits.as_bytes(), 16);
        }
    }
    None
}
