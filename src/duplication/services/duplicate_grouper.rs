use crate::duplication::domain::{CodeBlock, DuplicateGroup};
use std::collections::HashMap;

/// DuplicateGrouper service for finding exact duplicates
///
/// Blocks are bucketed by content hash. Every bucket holding two or more
/// blocks becomes a group; single-block buckets are dropped.
pub struct DuplicateGrouper;

impl DuplicateGrouper {
    /// Groups blocks with identical normalized content
    ///
    /// # Returns
    /// Groups in the order their content first appears in `blocks`, with
    /// members in input order
    pub fn group(blocks: &[CodeBlock]) -> Vec<DuplicateGroup> {
        let mut buckets: HashMap<&str, Vec<&CodeBlock>> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for block in blocks {
            let hash = block.content_hash();
            buckets
                .entry(hash)
                .or_insert_with(|| {
                    first_seen.push(hash);
                    Vec::new()
                })
                .push(block);
        }

        first_seen
            .into_iter()
            .filter_map(|hash| DuplicateGroup::exact(hash, &buckets[hash]))
            .collect()
    }
}
