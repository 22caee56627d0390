use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/// Leaf hash of a (claimant, amount) allocation.
///
/// The entry is hashed twice so a leaf can never be confused with the
/// 64-byte preimage of an interior node.
pub fn hash_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    let entry = hashv(&[&claimant.to_bytes(), &amount.to_le_bytes()]);
    hashv(&[&entry.to_bytes()]).to_bytes()
}

/// Parent of two nodes, hashed in ascending byte order.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `leaf` up through `proof` and returns the resulting root.
pub fn process_proof(proof: &[[u8; 32]], leaf: [u8; 32]) -> [u8; 32] {
    proof
        .iter()
        .fold(leaf, |computed, sibling| hash_pair(&computed, sibling))
}

/// Returns true when `proof` carries `leaf` to `root`.
pub fn verify(proof: &[[u8; 32]], root: &[u8; 32], leaf: [u8; 32]) -> bool {
    process_proof(proof, leaf) == *root
}
