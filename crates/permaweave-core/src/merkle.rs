//! Merkle commitments over chunked payloads.
//!
//! Leaves are built 1:1 from chunks, folded bottom-up into a single root,
//! and walked root-to-leaf to produce one inclusion proof per chunk. Nodes
//! form an immutable value tree: built once, never mutated, no sharing.
//!
//! Node ids compose as hash-of-hashes:
//!
//! - leaf:   `H(H(data_hash) ‖ H(note(max_byte_range)))`
//! - branch: `H(H(left_id) ‖ H(right_id) ‖ H(note(byte_range)))`
//!
//! where `note(n)` is the 32-byte big-endian encoding of `n`. The lone node
//! left after folding (a single leaf included) is re-wrapped into a
//! sole-child branch with a computed id, so the data root is never a bare
//! leaf id.

use crate::chunk::{chunk_data, Chunk};
use crate::codec::note_bytes;
use crate::error::CoreError;
use crate::hash::Sha256Hash;

/// A leaf committing to one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `H(H(data_hash) ‖ H(note(max_byte_range)))`.
    pub id: Sha256Hash,
    /// Hash of the chunk's payload slice.
    pub data_hash: Sha256Hash,
    /// Inclusive lower bound of the chunk.
    pub min_byte_range: usize,
    /// Exclusive upper bound of the chunk.
    pub max_byte_range: usize,
}

/// An interior node committing to its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchNode {
    /// `H(H(left_id) ‖ H(right_id) ‖ H(note(byte_range)))`; for the
    /// sole-child root wrap, `H(H(child_id) ‖ H(note(byte_range)))`.
    pub id: Sha256Hash,
    /// The split point: the left child's `max_byte_range`.
    pub byte_range: usize,
    /// The right child's `max_byte_range` (the left's own when sole child).
    pub max_byte_range: usize,
    /// Left child.
    pub left_child: Box<MerkleNode>,
    /// Right child; `None` only for the root wrap.
    pub right_child: Option<Box<MerkleNode>>,
}

/// A node in the chunk tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleNode {
    /// A leaf committing to one chunk.
    Leaf(LeafNode),
    /// An interior node committing to its children.
    Branch(BranchNode),
}

impl MerkleNode {
    /// The node id.
    pub fn id(&self) -> &Sha256Hash {
        match self {
            MerkleNode::Leaf(leaf) => &leaf.id,
            MerkleNode::Branch(branch) => &branch.id,
        }
    }

    /// Exclusive upper bound of the byte range this node commits to.
    pub fn max_byte_range(&self) -> usize {
        match self {
            MerkleNode::Leaf(leaf) => leaf.max_byte_range,
            MerkleNode::Branch(branch) => branch.max_byte_range,
        }
    }
}

/// An inclusion proof for one chunk.
///
/// The proof is the concatenation, root to leaf, of each ancestor branch's
/// `(left_id, right_id, note(byte_range))` followed by the leaf's own
/// `(data_hash, note(max_byte_range))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    /// The last byte index covered by the chunk: `max_byte_range - 1`.
    pub offset: usize,
    /// The serialized path bytes.
    pub proof: Vec<u8>,
}

/// The aggregate commitment for one payload: data root plus index-correlated
/// chunks and proofs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionChunks {
    /// Root id committing to the entire payload.
    pub data_root: Sha256Hash,
    /// Ordered chunks covering the payload.
    pub chunks: Vec<Chunk>,
    /// One inclusion proof per chunk, same order.
    pub proofs: Vec<Proof>,
}

impl TransactionChunks {
    /// The aggregate for an empty payload: no chunks, no proofs, zero root.
    pub fn empty() -> Self {
        Self {
            data_root: Sha256Hash::ZERO,
            chunks: Vec::new(),
            proofs: Vec::new(),
        }
    }

    /// Whether this commits to an empty payload.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Build one leaf per chunk.
pub fn generate_leaves(chunks: &[Chunk]) -> Vec<LeafNode> {
    chunks
        .iter()
        .map(|chunk| LeafNode {
            id: Sha256Hash::hash_all(&[
                chunk.data_hash.as_bytes(),
                &note_bytes(chunk.max_byte_range as u64),
            ]),
            data_hash: chunk.data_hash,
            min_byte_range: chunk.min_byte_range,
            max_byte_range: chunk.max_byte_range,
        })
        .collect()
}

/// Hash a pair of sibling nodes into their parent branch.
fn hash_branch(left: MerkleNode, right: MerkleNode) -> MerkleNode {
    let byte_range = left.max_byte_range();
    let max_byte_range = right.max_byte_range();
    let id = Sha256Hash::hash_all(&[
        left.id().as_bytes(),
        right.id().as_bytes(),
        &note_bytes(byte_range as u64),
    ]);
    MerkleNode::Branch(BranchNode {
        id,
        byte_range,
        max_byte_range,
        left_child: Box::new(left),
        right_child: Some(Box::new(right)),
    })
}

/// Re-hash the lone remaining node into the sole-child root branch.
///
/// Applied for every leaf count, so a single-chunk payload still gets a
/// computed root distinct from its leaf id.
fn wrap_root(node: MerkleNode) -> MerkleNode {
    let max_byte_range = node.max_byte_range();
    let id = Sha256Hash::hash_all(&[node.id().as_bytes(), &note_bytes(max_byte_range as u64)]);
    MerkleNode::Branch(BranchNode {
        id,
        byte_range: max_byte_range,
        max_byte_range,
        left_child: Box::new(node),
        right_child: None,
    })
}

/// Fold nodes bottom-up into a single root.
///
/// Adjacent nodes pair left-to-right per level; an unpaired trailing node is
/// promoted unchanged to the next level. The final lone node is wrapped via
/// [`wrap_root`].
pub fn build_layers(mut nodes: Vec<MerkleNode>) -> Result<MerkleNode, CoreError> {
    if nodes.is_empty() {
        return Err(CoreError::MalformedTree(
            "at least one node is required".into(),
        ));
    }

    while nodes.len() > 1 {
        let mut next_layer = Vec::with_capacity(nodes.len().div_ceil(2));
        let mut iter = nodes.into_iter();
        while let Some(left) = iter.next() {
            match iter.next() {
                Some(right) => next_layer.push(hash_branch(left, right)),
                None => next_layer.push(left),
            }
        }
        nodes = next_layer;
    }

    let lone = nodes
        .pop()
        .ok_or_else(|| CoreError::MalformedTree("folding consumed every node".into()))?;
    Ok(wrap_root(lone))
}

/// Produce one proof per leaf, left-to-right.
pub fn resolve_proofs(root: &MerkleNode) -> Vec<Proof> {
    let mut proofs = Vec::new();
    resolve_node(root, Vec::new(), &mut proofs);
    proofs
}

fn resolve_node(node: &MerkleNode, path: Vec<u8>, out: &mut Vec<Proof>) {
    match node {
        MerkleNode::Leaf(leaf) => {
            let mut proof = path;
            proof.extend_from_slice(leaf.data_hash.as_bytes());
            proof.extend_from_slice(&note_bytes(leaf.max_byte_range as u64));
            out.push(Proof {
                offset: leaf.max_byte_range.saturating_sub(1),
                proof,
            });
        }
        MerkleNode::Branch(branch) => match &branch.right_child {
            Some(right) => {
                let mut extended = path;
                extended.extend_from_slice(branch.left_child.id().as_bytes());
                extended.extend_from_slice(right.id().as_bytes());
                extended.extend_from_slice(&note_bytes(branch.byte_range as u64));
                resolve_node(&branch.left_child, extended.clone(), out);
                resolve_node(right, extended, out);
            }
            // The root wrap has no sibling and contributes nothing to paths.
            None => resolve_node(&branch.left_child, path, out),
        },
    }
}

/// Chunk a payload and commit to it: data root, chunks, and proofs.
///
/// An empty payload yields the empty aggregate, never an error. A payload
/// that is an exact multiple of [`crate::MAX_CHUNK_SIZE`] produces a trailing
/// zero-length chunk; the root still commits to it, but the chunk/proof pair
/// is pruned from the result.
pub fn transaction_chunks(data: &[u8]) -> Result<TransactionChunks, CoreError> {
    if data.is_empty() {
        return Ok(TransactionChunks::empty());
    }

    let mut chunks = chunk_data(data);
    let leaves = generate_leaves(&chunks);
    let root = build_layers(leaves.into_iter().map(MerkleNode::Leaf).collect())?;
    let mut proofs = resolve_proofs(&root);

    if chunks.last().is_some_and(Chunk::is_empty) {
        chunks.pop();
        proofs.pop();
    }

    Ok(TransactionChunks {
        data_root: *root.id(),
        chunks,
        proofs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::{MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
    use crate::codec::NOTE_SIZE;
    use crate::hash::HASH_SIZE;

    const BRANCH_BYTES: usize = 2 * HASH_SIZE + NOTE_SIZE;
    const LEAF_BYTES: usize = HASH_SIZE + NOTE_SIZE;

    fn pattern(len: usize, mul: usize) -> Vec<u8> {
        (0..len).map(|i| (i * mul % 256) as u8).collect()
    }

    #[test]
    fn test_empty_payload_empty_aggregate() {
        let result = transaction_chunks(b"").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.chunks.len(), 0);
        assert_eq!(result.proofs.len(), 0);
        assert_eq!(result.data_root, Sha256Hash::ZERO);
    }

    #[test]
    fn test_single_chunk_commitment() {
        let payload = b"<h1>Hello World!</h1>";
        let result = transaction_chunks(payload).unwrap();

        assert_eq!(result.chunks.len(), 1);
        assert_eq!(result.proofs.len(), 1);
        assert_eq!(result.chunks[0].min_byte_range, 0);
        assert_eq!(result.chunks[0].max_byte_range, payload.len());

        // The proof is the leaf's own commitment, no branch contribution.
        let proof = &result.proofs[0];
        assert_eq!(proof.offset, payload.len() - 1);
        assert_eq!(proof.proof.len(), LEAF_BYTES);
        let data_hash = Sha256Hash::hash(payload);
        assert_eq!(&proof.proof[..HASH_SIZE], data_hash.as_bytes());
        assert_eq!(
            &proof.proof[HASH_SIZE..],
            &note_bytes(payload.len() as u64)
        );

        // The root is the wrapped hash of the leaf, not the bare leaf id.
        let leaf_id = Sha256Hash::hash_all(&[
            data_hash.as_bytes(),
            &note_bytes(payload.len() as u64),
        ]);
        assert_ne!(result.data_root, leaf_id);
        assert_eq!(
            result.data_root.to_hex(),
            "fb5c0b829f77e8df26c93253d52c83fec39a28d2400d41e8f360ba3ec235fd90"
        );
        assert_eq!(
            result.data_root.to_base64url(),
            "-1wLgp936N8myTJT1SyD_sOaKNJADUHo82C6PsI1_ZA"
        );
    }

    #[test]
    fn test_two_chunk_root_golden() {
        let payload = pattern(300_000, 1);
        let result = transaction_chunks(&payload).unwrap();

        assert_eq!(result.chunks.len(), 2);
        assert_eq!(result.proofs.len(), 2);
        assert_eq!(result.chunks[0].max_byte_range, MAX_CHUNK_SIZE);
        assert_eq!(result.chunks[1].max_byte_range, 300_000);
        assert_eq!(
            result.data_root.to_base64url(),
            "p4XGpkCo3555G2bsh2fCqMBDIo4rI6r2ihTzbYYYK0w"
        );

        // Each proof: one branch record plus the leaf record.
        for proof in &result.proofs {
            assert_eq!(proof.proof.len(), BRANCH_BYTES + LEAF_BYTES);
        }
        assert_eq!(result.proofs[0].offset, MAX_CHUNK_SIZE - 1);
        assert_eq!(result.proofs[1].offset, 299_999);
    }

    #[test]
    fn test_exact_max_prunes_terminal_pair_but_root_commits() {
        let payload = pattern(MAX_CHUNK_SIZE, 7);
        let result = transaction_chunks(&payload).unwrap();

        // The zero-length terminal chunk is pruned from chunks and proofs.
        assert_eq!(result.chunks.len(), 1);
        assert_eq!(result.proofs.len(), 1);
        assert_eq!(result.chunks[0].max_byte_range, MAX_CHUNK_SIZE);

        // ...but the root still commits to the two-leaf tree.
        assert_eq!(
            result.data_root.to_base64url(),
            "DVHpR8xqb-OHGFdv264bMMcw0vkWYurxeIMwhGQjThQ"
        );
        assert_eq!(result.proofs[0].proof.len(), BRANCH_BYTES + LEAF_BYTES);
    }

    #[test]
    fn test_count_parity_and_order() {
        for len in [1, MIN_CHUNK_SIZE, 300_000, 3 * MAX_CHUNK_SIZE, 4 * MAX_CHUNK_SIZE + 1] {
            let payload = pattern(len, 11);
            let result = transaction_chunks(&payload).unwrap();
            assert_eq!(result.chunks.len(), result.proofs.len(), "len={len}");
            for (chunk, proof) in result.chunks.iter().zip(&result.proofs) {
                assert_eq!(proof.offset, chunk.max_byte_range - 1, "len={len}");
            }
        }
    }

    #[test]
    fn test_determinism() {
        let payload = pattern(3 * MAX_CHUNK_SIZE + 5000, 13);
        let a = transaction_chunks(&payload).unwrap();
        let b = transaction_chunks(&payload).unwrap();
        assert_eq!(a.data_root, b.data_root);
        assert_eq!(a.proofs, b.proofs);
    }

    #[test]
    fn test_unbalanced_tree_proof_depths() {
        // Five leaves: the promoted trailing leaf has a shorter path.
        let payload = pattern(4 * MAX_CHUNK_SIZE + 1, 3);
        let result = transaction_chunks(&payload).unwrap();
        assert_eq!(result.proofs.len(), 5);
        for proof in &result.proofs[..4] {
            assert_eq!(proof.proof.len(), 3 * BRANCH_BYTES + LEAF_BYTES);
        }
        assert_eq!(result.proofs[4].proof.len(), BRANCH_BYTES + LEAF_BYTES);
    }

    #[test]
    fn test_branch_metadata_invariants() {
        let chunks = chunk_data(&pattern(300_000, 1));
        let leaves = generate_leaves(&chunks);
        let root = build_layers(leaves.into_iter().map(MerkleNode::Leaf).collect()).unwrap();

        // Root wrap: sole child, byte_range == max_byte_range == payload len.
        let MerkleNode::Branch(wrap) = &root else {
            panic!("root must be a branch");
        };
        assert!(wrap.right_child.is_none());
        assert_eq!(wrap.byte_range, 300_000);
        assert_eq!(wrap.max_byte_range, 300_000);

        // Its child is the two-leaf branch split at the first chunk boundary.
        let MerkleNode::Branch(branch) = wrap.left_child.as_ref() else {
            panic!("wrap child must be a branch");
        };
        assert_eq!(branch.byte_range, MAX_CHUNK_SIZE);
        assert_eq!(branch.max_byte_range, 300_000);
        assert!(branch.right_child.is_some());
    }

    #[test]
    fn test_build_layers_rejects_zero_nodes() {
        let result = build_layers(Vec::new());
        assert!(matches!(result, Err(CoreError::MalformedTree(_))));
    }
}
