// Proving/verifying key persistence. These files play the role of the
// circuit artifacts an external prover would load from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Result;
use ark_bn254::Bn254;
use ark_groth16::{ProvingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

pub fn save_proving_key(pk: &ProvingKey<Bn254>, path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path)?;
    pk.serialize_uncompressed(&mut file)?;
    Ok(())
}

pub fn load_proving_key(path: impl AsRef<Path>) -> Result<ProvingKey<Bn254>> {
    let file = File::open(path)?;
    let pk = ProvingKey::<Bn254>::deserialize_uncompressed(BufReader::new(file))?;
    Ok(pk)
}

pub fn save_verifying_key(vk: &VerifyingKey<Bn254>, path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path)?;
    vk.serialize_uncompressed(&mut file)?;
    Ok(())
}

pub fn load_verifying_key(path: impl AsRef<Path>) -> Result<VerifyingKey<Bn254>> {
    let file = File::open(path)?;
    let vk = VerifyingKey::<Bn254>::deserialize_uncompressed(BufReader::new(file))?;
    Ok(vk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::MulCircuit;

    /// Keys written to disk load back identical.
    #[test]
    fn verifying_key_round_trips() {
        let pk = crate::setup(MulCircuit::blank()).unwrap();
        let path = std::env::temp_dir().join(format!("vk-roundtrip-{}.bin", std::process::id()));
        save_verifying_key(&pk.vk, &path).unwrap();
        let loaded = load_verifying_key(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, pk.vk);
    }
}
