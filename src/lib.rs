use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
use frequency::count_frequencies_parallel;
use huffman::{generate_codes, Bits, CodeTable, HuffmanTree};
use threadpool::ThreadPool;

mod cli;
mod error;
pub mod frequency;
pub mod heap;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

pub struct Arguments {
    input: InputSource,
    number_of_threads: usize,
    print_tree: bool,
    verify: bool,
}

impl Arguments {
    pub fn print_tree(&self) -> bool {
        self.print_tree
    }
}

/// Result of encoding one input text.
pub struct HuffmanEncoding {
    tree: Option<HuffmanTree>,
    code_table: CodeTable,
    encoded: Bits,
}

impl HuffmanEncoding {
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn encoded(&self) -> &Bits {
        &self.encoded
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn read_input_text(input: &InputSource) -> Result<String> {
    match input {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(file_path) => {
            let mut text = String::new();
            BufReader::new(open_input_file(file_path)?)
                .read_to_string(&mut text)
                .map_err(|e| {
                    Error::UnableToReadInputFile(file_path.to_string_lossy().into_owned(), e)
                })?;
            Ok(text)
        }
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(Error::UnableToReadStandardInput)?;
            Ok(text)
        }
    }
}

pub fn encode_input(arguments: &Arguments) -> Result<HuffmanEncoding> {
    let text = read_input_text(&arguments.input)?;
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let frequencies = count_frequencies_parallel(&text, &threadpool);
    log::info!(
        "Counted {} distinct symbols in {} characters",
        frequencies.len(),
        frequencies.values().sum::<usize>()
    );

    let tree = HuffmanTree::build(&frequencies);
    let code_table = tree.as_ref().map(generate_codes).unwrap_or_default();
    logger::log_code_table(&code_table);
    let encoded = code_table.encode(&text)?;
    log::info!("Encoded text into {} bits", encoded.len());

    if arguments.verify {
        let decoded = match &tree {
            Some(tree) => tree.decode(encoded.as_slice())?,
            None => String::new(),
        };
        if decoded != text {
            return Err(Error::RoundTripMismatch);
        }
        log::info!("Decoded text matches the input");
    }

    Ok(HuffmanEncoding {
        tree,
        code_table,
        encoded,
    })
}
