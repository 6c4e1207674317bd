use std::fmt;

use crate::error::Error;
use crate::frequency::{FrequencyTable, Symbol};
use crate::heap::{HeapOrder, Identity, LocatorBinaryHeap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: Symbol,
        frequency: usize,
    },
    Internal {
        frequency: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn frequency(&self) -> usize {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }

    fn merge(left: HuffmanNode, right: HuffmanNode) -> HuffmanNode {
        HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Min-priority queue of nodes keyed by frequency.
///
/// Every pushed node gets a fresh identity and is parked in `nodes` under it,
/// so a node is always recovered by the identity the heap hands back, never by
/// its frequency.
struct NodeQueue {
    heap: LocatorBinaryHeap<usize>,
    nodes: Vec<Option<HuffmanNode>>,
}

impl NodeQueue {
    fn with_capacity(capacity: usize) -> Self {
        NodeQueue {
            heap: LocatorBinaryHeap::with_capacity(capacity, HeapOrder::Min),
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, node: HuffmanNode) {
        let identity: Identity = self.nodes.len();
        let added = self.heap.add(identity, node.frequency());
        debug_assert!(added, "identity {} must be fresh and in range", identity);
        self.nodes.push(Some(node));
    }

    fn pop(&mut self) -> Option<HuffmanNode> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.extract_top();
        self.nodes[top.identity].take()
    }
}

/// Prefix code tree. Left edges stand for `0`, right edges for `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Greedily merges the two least frequent nodes until one is left.
    ///
    /// Leaves are queued in ascending symbol order; on equal frequencies the
    /// node queued first is taken first. The first node taken becomes the left
    /// child. Symbols with a zero count are skipped. Returns `None` if no
    /// symbol remains.
    pub fn build(frequencies: &FrequencyTable) -> Option<HuffmanTree> {
        let leaves: Vec<HuffmanNode> = frequencies
            .iter()
            .filter(|&(_, &frequency)| frequency > 0)
            .map(|(&symbol, &frequency)| HuffmanNode::Leaf { symbol, frequency })
            .collect();
        if leaves.is_empty() {
            return None;
        }

        let mut queue = NodeQueue::with_capacity(2 * leaves.len() - 1);
        for leaf in leaves {
            queue.push(leaf);
        }
        while queue.len() > 1 {
            let left = queue.pop()?;
            let right = queue.pop()?;
            queue.push(HuffmanNode::merge(left, right));
        }
        let root = queue.pop()?;
        log::debug!("built tree with root frequency {}", root.frequency());
        Some(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Walks the tree once per codeword of `bits`.
    pub fn decode(&self, bits: &[bool]) -> crate::Result<String> {
        if let HuffmanNode::Leaf { symbol, .. } = &self.root {
            return bits
                .iter()
                .enumerate()
                .map(|(position, &bit)| match bit {
                    false => Ok(*symbol),
                    true => Err(Error::UnknownCodeword(position)),
                })
                .collect();
        }

        let mut text = String::new();
        let mut node = &self.root;
        let mut codeword_start = 0;
        for (position, &bit) in bits.iter().enumerate() {
            if let HuffmanNode::Internal { left, right, .. } = node {
                node = if bit { right.as_ref() } else { left.as_ref() };
            }
            if let HuffmanNode::Leaf { symbol, .. } = node {
                text.push(*symbol);
                node = &self.root;
                codeword_start = position + 1;
            }
        }
        if codeword_start != bits.len() {
            return Err(Error::IncompleteCodeword(codeword_start));
        }
        Ok(text)
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn center_of(line: &str) -> usize {
    let indent = line.chars().position(|c| c != ' ').unwrap_or(0);
    (indent * 2 + line.trim().chars().count()) / 2
}

// Tree visualization
impl HuffmanNode {
    fn get_string(&self) -> Vec<String> {
        match self {
            HuffmanNode::Leaf { symbol, frequency } => {
                vec![format!("(s:{:?},f:{})", symbol, frequency)]
            }
            HuffmanNode::Internal { left, right, .. } => {
                let left_box = left.get_string();
                let right_box = right.get_string();
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_of(&left_box[0]);
                let right_pos = center_of(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..left_box.len().max(right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.root.get_string() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
