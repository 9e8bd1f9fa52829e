// Patches generated Solidity verifier source before compilation: bump the
// compiler pragma and rename the generic `Verifier` contract.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Apply the two substitutions to the source text. Each is a single-pass,
/// fixed-pattern replacement; text that matches neither pattern is left
/// untouched.
pub fn patch_verifier_source(text: &str, contract: &str) -> Result<String> {
    let pragma = Regex::new(r"pragma solidity \^\d+\.\d+\.\d+")?;
    let name = Regex::new(r"contract Verifier")?;
    let bumped = pragma.replace(text, "pragma solidity ^0.8");
    Ok(name
        .replace(&bumped, format!("contract {contract}"))
        .into_owned())
}

/// Read a verifier source file, patch it, and write it back in place.
pub fn patch_verifier_file(path: &Path, contract: &str) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading verifier source {}", path.display()))?;
    let patched = patch_verifier_source(&text, contract)?;
    fs::write(path, patched)
        .with_context(|| format!("writing verifier source {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::patch_verifier_source;

    const SOURCE: &str = "\
// SPDX-License-Identifier: GPL-3.0
pragma solidity ^0.6.11;
contract Verifier {
    function verifyProof() public pure returns (bool) {}
}
";

    /// Both substitutions land; the rest of the source is untouched.
    #[test]
    fn bumps_pragma_and_renames_contract() {
        let patched = patch_verifier_source(SOURCE, "HelloWorldVerifier").unwrap();
        assert!(patched.contains("pragma solidity ^0.8;"));
        assert!(patched.contains("contract HelloWorldVerifier {"));
        assert!(patched.contains("function verifyProof() public pure returns (bool) {}"));
        assert!(!patched.contains("^0.6.11"));
    }

    /// Source without either pattern passes through unchanged.
    #[test]
    fn unmatched_source_unchanged() {
        let text = "contract HelloWorldVerifier {}\n";
        let patched = patch_verifier_source(text, "Other").unwrap();
        assert_eq!(patched, text);
    }
}
