//! This helper function is the Huffman stage of the compressor.
//!
//! It takes the frequency counts the LZW stage gathered for each dictionary index and builds a
//! prefix code for the indices that were used. Nodes are merged bottom up, two at a time. While
//! merging we append a bit to the code of every index under each of the two nodes, so the codes
//! come out leaf to root and are reversed at the end.
//!

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::code_table::{Code, CodeTable};
use crate::tools::freq_count::FreqTable;

/// A subtree while the tree is being built: its total weight and the indices below it.
#[derive(Debug, Clone)]
pub struct MergeNode {
    pub weight: u64,
    /// Creation order, used to break ties between equal weights.
    pub order: usize,
    pub members: Vec<u16>,
}

impl MergeNode {
    pub fn new(weight: u64, order: usize, members: Vec<u16>) -> Self {
        MergeNode {
            weight,
            order,
            members,
        }
    }

    /// Fold other into self. Weights add, members are joined.
    fn combine(mut self, other: MergeNode, order: usize) -> MergeNode {
        self.weight += other.weight;
        self.members.extend(other.members);
        self.order = order;
        self
    }
}

impl PartialEq for MergeNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}
impl Eq for MergeNode {}

impl Ord for MergeNode {
    /// Reversed so the max-heap pops the lightest node first, oldest first among equals.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}
impl PartialOrd for MergeNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build Huffman codes for every index with a nonzero count in `freqs`.
///
/// A single used index gets the code "0" so it still costs a bit per occurrence. An empty
/// frequency table gives an empty code table.
pub fn code_table_from_weights(freqs: &FreqTable) -> CodeTable {
    let mut codes = vec![Code::new(); freqs.capacity()];
    let mut order = 0_usize;

    let mut heap = freqs
        .used()
        .map(|(idx, weight)| {
            order += 1;
            MergeNode::new(weight, order, vec![idx])
        })
        .collect::<BinaryHeap<MergeNode>>();
    let symbols = heap.len();

    while heap.len() > 1 {
        // Both pops succeed, we just checked the length
        let (first, second) = match (heap.pop(), heap.pop()) {
            (Some(first), Some(second)) => (first, second),
            _ => break,
        };
        first
            .members
            .iter()
            .for_each(|&idx| codes[idx as usize].push(false));
        second
            .members
            .iter()
            .for_each(|&idx| codes[idx as usize].push(true));
        order += 1;
        heap.push(first.combine(second, order));
    }

    let mut table = CodeTable::new(freqs.capacity());
    for (idx, _) in freqs.used() {
        let mut code = std::mem::take(&mut codes[idx as usize]);
        if code.is_empty() {
            // Only one symbol, so no merge ever gave it a bit
            code.push(false);
        }
        code.reverse();
        trace!("Code for {}: {}", idx, code);
        table.insert(idx, code);
    }

    debug!(
        "Huffman: {} symbols, longest code {} bits",
        symbols,
        table.max_len()
    );
    table
}
