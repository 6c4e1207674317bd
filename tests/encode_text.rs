use binheap_huffman::huffman::{huffman_encode, HuffmanTree};
use binheap_huffman::{encode_input, CLIParser, Error};
use std::path::PathBuf;
use std::{env, fs};

const INPUT_TEXT_PATH: &str = "tests/sample.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_input_text_path() -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(INPUT_TEXT_PATH);
    root_path
}

#[test]
fn test_encode_demo_text() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", "aaaabbbccx", "--verify"]);
    let encoding = encode_input(&arguments).expect("Encoding failed");
    assert_eq!(encoding.code_table().to_string(), "a:0\nb:10\nc:111\nx:110\n");
    assert_eq!(encoding.encoded().to_string(), "0000101010111111110");
}

#[test]
fn test_encode_input_file() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "--input_file",
        get_input_text_path().to_str().unwrap(),
        "--threads",
        "3",
        "--verify",
    ]);
    let encoding = encode_input(&arguments).expect("Encoding failed");
    let text = fs::read_to_string(get_input_text_path()).expect("Reading sample failed");
    let tree = encoding.tree().expect("Sample text must produce a tree");
    assert_eq!(tree.root().frequency(), text.chars().count());
    assert_eq!(tree.decode(encoding.encoded().as_slice()).unwrap(), text);
    assert_eq!(encoding.code_table(), &huffman_encode(&text));
}

#[test]
fn test_encode_single_symbol() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", "aaaa", "--verify"]);
    let encoding = encode_input(&arguments).expect("Encoding failed");
    assert_eq!(encoding.code_table().to_string(), "a:0\n");
    assert_eq!(encoding.encoded().to_string(), "0000");
}

#[test]
fn test_encode_empty_text() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", "", "--verify"]);
    let encoding = encode_input(&arguments).expect("Encoding failed");
    assert!(encoding.tree().is_none());
    assert!(encoding.code_table().is_empty());
    assert!(encoding.encoded().is_empty());
}

#[test]
fn test_missing_input_file() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", "-i", "tests/does_not_exist.txt"]);
    let result = encode_input(&arguments);
    assert!(matches!(
        result,
        Err(Error::UnableToOpenInputFileForReading(_, _))
    ));
}

#[test]
fn test_tree_of_sample_is_printable() {
    let text = fs::read_to_string(get_input_text_path()).expect("Reading sample failed");
    let frequencies = binheap_huffman::frequency::count_frequencies(&text);
    let tree = HuffmanTree::build(&frequencies).expect("Sample text must produce a tree");
    let drawing = tree.to_string();
    assert!(drawing.contains("(s:'w',f:"));
}
