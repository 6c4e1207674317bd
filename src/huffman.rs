//! Huffman codes built on the locator-indexed heap.

mod code;
mod tree;

pub use code::{generate_codes, Bits, CodeTable, Codeword};
pub use tree::{HuffmanNode, HuffmanTree};

use crate::frequency::count_frequencies;

/// Codeword table for the symbols of `text`; empty for empty text.
pub fn huffman_encode(text: &str) -> CodeTable {
    HuffmanTree::build(&count_frequencies(text))
        .map(|tree| generate_codes(&tree))
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use test_case::test_case;

    use super::{huffman_encode, CodeTable};

    fn assert_prefix_free(table: &CodeTable) {
        for (symbol, code) in table.iter() {
            assert!(!code.is_empty(), "Symbol {:?} has an empty codeword", symbol);
            for (other_symbol, other_code) in table.iter() {
                if symbol != other_symbol {
                    assert!(
                        !other_code.starts_with(code),
                        "Codeword {} of {:?} is a prefix of codeword {} of {:?}",
                        code,
                        symbol,
                        other_code,
                        other_symbol
                    );
                }
            }
        }
    }

    #[test_case("aaaabbbccx" ; "demo text")]
    #[test_case("aaaa" ; "single symbol")]
    #[test_case("abcdefghijklmnopqrstuvwxyz" ; "uniform alphabet")]
    #[test_case("mississippi river" ; "repeated letters")]
    fn test_codes_are_prefix_free(text: &str) {
        assert_prefix_free(&huffman_encode(text));
    }

    #[test]
    fn test_empty_text_has_empty_code_table() {
        assert!(huffman_encode("").is_empty());
    }

    #[test]
    fn test_single_symbol_text() {
        let table = huffman_encode("aaaa");
        assert_eq!(table.to_string(), "a:0\n");
    }

    #[test]
    fn test_most_frequent_symbol_has_shortest_code() {
        let table = huffman_encode("aaaabbbccx");
        let length_of = |symbol| table.get(symbol).map(|code| code.len()).unwrap();
        for other in ['b', 'c', 'x'] {
            assert!(length_of('a') <= length_of(other));
        }
        assert!(length_of('x') >= length_of('b'));
        assert!(length_of('c') >= length_of('b'));
    }
}
