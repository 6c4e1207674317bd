use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::tree::{HuffmanNode, HuffmanTree};
use crate::error::Error;
use crate::frequency::Symbol;

/// Ordered sequence of bits, written as `0`/`1` text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits(Vec<bool>);

pub type Codeword = Bits;

impl Bits {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn append(&mut self, other: &Bits) {
        self.0.extend_from_slice(&other.0);
    }

    pub fn starts_with(&self, prefix: &Bits) -> bool {
        self.0.starts_with(&prefix.0)
    }

    fn with(&self, bit: bool) -> Bits {
        let mut bits = self.clone();
        bits.push(bit);
        bits
    }
}

impl From<Vec<bool>> for Bits {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromStr for Bits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::InvalidBitCharacter(other)),
            })
            .collect::<Result<Vec<bool>, Error>>()
            .map(Bits)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Codeword per symbol. Prefix-free by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Codeword>,
}

impl CodeTable {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Codeword)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Concatenates the codewords of every symbol of `text`.
    pub fn encode(&self, text: &str) -> crate::Result<Bits> {
        let mut bits = Bits::new();
        for symbol in text.chars() {
            let code = self
                .get(symbol)
                .ok_or(Error::SymbolNotInCodeTable(symbol))?;
            bits.append(code);
        }
        Ok(bits)
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{}:{}", symbol, code)?;
        }
        Ok(())
    }
}

/// Assigns `0` to every left and `1` to every right edge and collects the path
/// to each leaf. A tree made of a single leaf gets the codeword `0`, since an
/// empty codeword could not be decoded.
pub fn generate_codes(tree: &HuffmanTree) -> CodeTable {
    let mut codes = BTreeMap::new();
    if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
        codes.insert(*symbol, Codeword::from(vec![false]));
        return CodeTable { codes };
    }

    let mut stack = vec![(tree.root(), Codeword::new())];
    while let Some((node, prefix)) = stack.pop() {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, prefix);
            }
            HuffmanNode::Internal { left, right, .. } => {
                stack.push((right.as_ref(), prefix.with(true)));
                stack.push((left.as_ref(), prefix.with(false)));
            }
        }
    }
    CodeTable { codes }
}

#[cfg(test)]
mod test {
    use super::{generate_codes, Bits, CodeTable};
    use crate::error::Error;
    use crate::frequency::FrequencyTable;
    use crate::huffman::tree::HuffmanTree;

    fn code_table(frequencies: &[(char, usize)]) -> CodeTable {
        let tree = HuffmanTree::build(&FrequencyTable::from_iter(frequencies.iter().copied()))
            .expect("Frequencies must not be empty");
        generate_codes(&tree)
    }

    fn code_of(table: &CodeTable, symbol: char) -> String {
        table
            .get(symbol)
            .unwrap_or_else(|| panic!("Symbol {:?} missing in code table", symbol))
            .to_string()
    }

    #[test]
    fn test_bits_parse_and_display() {
        let bits: Bits = "0110".parse().unwrap();
        assert_eq!(bits.as_slice(), &[false, true, true, false]);
        assert_eq!(bits.to_string(), "0110");
    }

    #[test]
    fn test_bits_parse_rejects_other_characters() {
        let result = "01x".parse::<Bits>();
        assert!(matches!(result, Err(Error::InvalidBitCharacter('x'))));
    }

    #[test]
    fn test_codes_of_demo_frequencies() {
        let table = code_table(&[('a', 4), ('b', 3), ('c', 2), ('x', 1)]);
        assert_eq!(code_of(&table, 'a'), "0");
        assert_eq!(code_of(&table, 'b'), "10");
        assert_eq!(code_of(&table, 'x'), "110");
        assert_eq!(code_of(&table, 'c'), "111");
    }

    #[test]
    fn test_single_symbol_gets_non_empty_code() {
        let table = code_table(&[('a', 4)]);
        assert_eq!(table.len(), 1);
        assert_eq!(code_of(&table, 'a'), "0");
    }

    #[test]
    fn test_display_lists_one_code_per_line() {
        let table = code_table(&[('a', 4), ('b', 3), ('c', 2), ('x', 1)]);
        assert_eq!(table.to_string(), "a:0\nb:10\nc:111\nx:110\n");
    }

    #[test]
    fn test_encode_concatenates_codewords() {
        let table = code_table(&[('a', 4), ('b', 3), ('c', 2), ('x', 1)]);
        let bits = table.encode("aaaabbbccx").unwrap();
        assert_eq!(bits.to_string(), "0000101010111111110");
    }

    #[test]
    fn test_encode_rejects_unknown_symbol() {
        let table = code_table(&[('a', 1), ('b', 1)]);
        let result = table.encode("abz");
        assert!(matches!(result, Err(Error::SymbolNotInCodeTable('z'))));
    }
}
