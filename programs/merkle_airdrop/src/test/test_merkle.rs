use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::merkle::{hash_leaf, hash_pair, verify};

#[derive(Debug, Clone, Copy)]
pub struct Allocation {
    pub claimant: Pubkey,
    pub amount: u64,
}

/// Test-only tree builder; production trees are generated off-chain
pub struct SimpleMerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl SimpleMerkleTree {
    pub fn new(allocations: &[Allocation]) -> Self {
        let nodes = allocations
            .iter()
            .map(|a| hash_leaf(&a.claimant, a.amount))
            .collect();

        let mut tree = SimpleMerkleTree {
            nodes,
            leaf_count: allocations.len(),
        };
        tree.build_tree();
        tree
    }

    fn build_tree(&mut self) {
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let next_len = (level_len + 1) / 2;
            for i in 0..next_len {
                let left = self.nodes[level_start + 2 * i];
                // Odd levels pair the last node with itself
                let right = if 2 * i + 1 < level_len {
                    self.nodes[level_start + 2 * i + 1]
                } else {
                    left
                };
                self.nodes.push(hash_pair(&left, &right));
            }
            level_start += level_len;
            level_len = next_len;
        }
    }

    pub fn root(&self) -> [u8; 32] {
        *self.nodes.last().expect("tree has no leaves")
    }

    pub fn proof(&self, index: usize) -> Vec<[u8; 32]> {
        assert!(index < self.leaf_count, "leaf index out of bounds");

        let mut proof = Vec::new();
        let mut current = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling = if current % 2 == 0 {
                if current + 1 < level_len {
                    current + 1
                } else {
                    current
                }
            } else {
                current - 1
            };
            proof.push(self.nodes[level_start + sibling]);

            current /= 2;
            level_start += level_len;
            level_len = (level_len + 1) / 2;
        }

        proof
    }
}

pub fn fixture_allocations(count: u8) -> Vec<Allocation> {
    (1..=count)
        .map(|i| Allocation {
            claimant: Pubkey::new_from_array([i; 32]),
            amount: i as u64 * 1000,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_is_double_hashed() {
        let leaf = hash_leaf(&Pubkey::new_from_array([1; 32]), 1000);
        let expected = [
            192, 109, 183, 81, 52, 243, 235, 142, 183, 50, 44, 244, 225, 78, 47, 68, 174, 228,
            88, 83, 255, 74, 27, 94, 255, 25, 238, 43, 124, 111, 33, 156,
        ];
        assert_eq!(leaf, expected);
    }

    #[test]
    fn test_merkle_root_matches_reference() {
        let tree = SimpleMerkleTree::new(&fixture_allocations(4));
        let expected = [
            78, 95, 53, 67, 186, 226, 14, 246, 62, 0, 55, 246, 158, 6, 143, 39, 102, 105, 66,
            108, 123, 76, 140, 236, 70, 14, 106, 63, 96, 44, 153, 196,
        ];
        assert_eq!(tree.root(), expected);
    }

    #[test]
    fn test_odd_tree_root_matches_reference() {
        let tree = SimpleMerkleTree::new(&fixture_allocations(5));
        let expected = [
            243, 28, 91, 37, 137, 201, 214, 139, 250, 187, 253, 225, 73, 123, 94, 38, 102, 115,
            127, 69, 237, 236, 64, 241, 167, 248, 12, 83, 35, 56, 160, 217,
        ];
        assert_eq!(tree.root(), expected);
    }

    #[test]
    fn test_every_leaf_verifies() {
        for count in 1..=7 {
            let allocations = fixture_allocations(count);
            let tree = SimpleMerkleTree::new(&allocations);
            let root = tree.root();

            for (index, a) in allocations.iter().enumerate() {
                let leaf = hash_leaf(&a.claimant, a.amount);
                assert!(
                    verify(&tree.proof(index), &root, leaf),
                    "leaf {} of {} failed to verify",
                    index,
                    count
                );
            }
        }
    }

    #[test]
    fn test_single_leaf_has_empty_proof() {
        let allocations = fixture_allocations(1);
        let tree = SimpleMerkleTree::new(&allocations);
        let proof = tree.proof(0);
        assert!(proof.is_empty());

        let leaf = hash_leaf(&allocations[0].claimant, allocations[0].amount);
        assert_eq!(tree.root(), leaf);
        assert!(verify(&proof, &tree.root(), leaf));
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_wrong_leaf_rejected() {
        let allocations = fixture_allocations(4);
        let tree = SimpleMerkleTree::new(&allocations);
        let proof = tree.proof(0);

        let wrong_amount = hash_leaf(&allocations[0].claimant, allocations[0].amount + 1);
        assert!(!verify(&proof, &tree.root(), wrong_amount));

        let wrong_claimant = hash_leaf(&allocations[1].claimant, allocations[0].amount);
        assert!(!verify(&proof, &tree.root(), wrong_claimant));
    }

    #[test]
    fn test_tampered_proof_rejected() {
        let allocations = fixture_allocations(4);
        let tree = SimpleMerkleTree::new(&allocations);
        let leaf = hash_leaf(&allocations[0].claimant, allocations[0].amount);

        let mut tampered = tree.proof(0);
        tampered[0][0] = tampered[0][0].wrapping_add(1);
        assert!(!verify(&tampered, &tree.root(), leaf));

        let mut truncated = tree.proof(0);
        truncated.pop();
        assert!(!verify(&truncated, &tree.root(), leaf));
    }
}
