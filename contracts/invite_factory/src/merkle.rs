use soroban_sdk::{Address, Bytes, BytesN, Env, Vec, xdr::ToXdr};

/// Admission value that opens an invite to every claimant.
pub const ALL: [u8; 32] = [0xff; 32];

/// Stateless allowlist check shared by every collection.
pub struct MerkleVerifier;

impl MerkleVerifier {
    pub fn all(env: &Env) -> BytesN<32> {
        BytesN::from_array(env, &ALL)
    }

    /// Returns true when `claimant` is admitted under `admission`.
    ///
    /// Siblings are combined in ascending byte order, so the proof carries no
    /// left/right flags and any tree shape verifies the same way. Proof length
    /// is not capped here; the host's CPU budget bounds what a caller can pay
    /// for.
    pub fn verify(
        env: &Env,
        admission: &BytesN<32>,
        claimant: &Address,
        proof: &Vec<BytesN<32>>,
    ) -> bool {
        if admission.to_array() == ALL {
            return true;
        }
        let mut node = Self::leaf(env, claimant);
        for sibling in proof.iter() {
            node = Self::hash_pair(env, &node, &sibling);
        }
        node == *admission
    }

    /// Leaf committed to for one allowlisted account.
    pub fn leaf(env: &Env, account: &Address) -> BytesN<32> {
        let encoded = account.clone().to_xdr(env);
        env.crypto().keccak256(&encoded).to_bytes()
    }

    pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
        let (a, b) = (a.to_array(), b.to_array());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let mut buf = Bytes::from_array(env, &lo);
        buf.extend_from_array(&hi);
        env.crypto().keccak256(&buf).to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec};

    struct Tree {
        root: BytesN<32>,
        leaves: [BytesN<32>; 4],
        left: BytesN<32>,
        right: BytesN<32>,
    }

    fn four_leaf_tree(env: &Env, members: &[Address; 4]) -> Tree {
        let leaves = [
            MerkleVerifier::leaf(env, &members[0]),
            MerkleVerifier::leaf(env, &members[1]),
            MerkleVerifier::leaf(env, &members[2]),
            MerkleVerifier::leaf(env, &members[3]),
        ];
        let left = MerkleVerifier::hash_pair(env, &leaves[0], &leaves[1]);
        let right = MerkleVerifier::hash_pair(env, &leaves[2], &leaves[3]);
        let root = MerkleVerifier::hash_pair(env, &left, &right);
        Tree {
            root,
            leaves,
            left,
            right,
        }
    }

    #[test]
    fn all_sentinel_ignores_proof() {
        let env = Env::default();
        let anyone = Address::generate(&env);
        let junk = vec![&env, BytesN::from_array(&env, &[7u8; 32])];

        assert!(MerkleVerifier::verify(
            &env,
            &MerkleVerifier::all(&env),
            &anyone,
            &Vec::new(&env)
        ));
        assert!(MerkleVerifier::verify(
            &env,
            &MerkleVerifier::all(&env),
            &anyone,
            &junk
        ));
    }

    #[test]
    fn members_verify_against_root() {
        let env = Env::default();
        let members = [
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
        ];
        let tree = four_leaf_tree(&env, &members);

        let proof_0 = vec![&env, tree.leaves[1].clone(), tree.right.clone()];
        let proof_3 = vec![&env, tree.leaves[2].clone(), tree.left.clone()];

        assert!(MerkleVerifier::verify(&env, &tree.root, &members[0], &proof_0));
        assert!(MerkleVerifier::verify(&env, &tree.root, &members[3], &proof_3));
        // proof belongs to someone else
        assert!(!MerkleVerifier::verify(&env, &tree.root, &members[1], &proof_3));
    }

    #[test]
    fn outsider_is_rejected() {
        let env = Env::default();
        let members = [
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
        ];
        let tree = four_leaf_tree(&env, &members);
        let outsider = Address::generate(&env);
        let proof = vec![&env, tree.leaves[1].clone(), tree.right.clone()];

        assert!(!MerkleVerifier::verify(&env, &tree.root, &outsider, &proof));
        assert!(!MerkleVerifier::verify(
            &env,
            &tree.root,
            &outsider,
            &Vec::new(&env)
        ));
    }

    #[test]
    fn empty_proof_only_matches_single_member_tree() {
        let env = Env::default();
        let member = Address::generate(&env);
        let other = Address::generate(&env);
        let root = MerkleVerifier::leaf(&env, &member);

        assert!(MerkleVerifier::verify(&env, &root, &member, &Vec::new(&env)));
        assert!(!MerkleVerifier::verify(&env, &root, &other, &Vec::new(&env)));
    }

    #[test]
    fn pair_hash_is_order_independent() {
        let env = Env::default();
        let a = BytesN::from_array(&env, &[1u8; 32]);
        let b = BytesN::from_array(&env, &[2u8; 32]);

        assert_eq!(
            MerkleVerifier::hash_pair(&env, &a, &b),
            MerkleVerifier::hash_pair(&env, &b, &a)
        );
    }

    #[test]
    fn deep_unbalanced_tree_verifies() {
        let env = Env::default();
        let member = Address::generate(&env);

        // a chain-shaped tree 40 levels deep
        let mut proof = Vec::new(&env);
        let mut root = MerkleVerifier::leaf(&env, &member);
        for level in 0..40u8 {
            let sibling = BytesN::from_array(&env, &[level; 32]);
            root = MerkleVerifier::hash_pair(&env, &root, &sibling);
            proof.push_back(sibling);
        }

        assert!(MerkleVerifier::verify(&env, &root, &member, &proof));

        let mut tampered = proof.clone();
        tampered.set(20, BytesN::from_array(&env, &[0xaa; 32]));
        assert!(!MerkleVerifier::verify(&env, &root, &member, &tampered));

        proof.pop_back();
        assert!(!MerkleVerifier::verify(&env, &root, &member, &proof));
    }
}
