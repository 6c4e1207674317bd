use std::env::args_os;

use binheap_huffman::{encode_input, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match encode_input(&arguments) {
        Ok(encoding) => {
            if let (true, Some(tree)) = (arguments.print_tree(), encoding.tree()) {
                println!("Huffman tree:\n{}", tree);
            }
            println!("Symbol codes:");
            print!("{}", encoding.code_table());
            println!("\nConcatenated code: {}", encoding.encoded());
        }
        Err(e) => eprintln!("Encoding failed because of: {}", e),
    }
}
