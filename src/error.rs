use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    UnableToReadStandardInput(std::io::Error),
    SymbolNotInCodeTable(char),
    InvalidBitCharacter(char),
    UnknownCodeword(usize),
    IncompleteCodeword(usize),
    RoundTripMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}' as text: {}", path, error)
            }
            Self::UnableToReadStandardInput(error) => {
                write!(f, "Unable to read text from standard input: {}", error)
            }
            Self::SymbolNotInCodeTable(symbol) => {
                write!(f, "Symbol {:?} not present in code table", symbol)
            }
            Self::InvalidBitCharacter(character) => {
                write!(
                    f,
                    "Character {:?} is not a bit. Expected '0' or '1'.",
                    character
                )
            }
            Self::UnknownCodeword(position) => {
                write!(f, "No codeword matches the bits at position {}", position)
            }
            Self::IncompleteCodeword(position) => {
                write!(
                    f,
                    "Encoded bits end inside the codeword starting at position {}",
                    position
                )
            }
            Self::RoundTripMismatch => {
                write!(f, "Decoded text differs from the input text")
            }
        }
    }
}

impl std::error::Error for Error {}
