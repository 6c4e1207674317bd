use crate::{Arguments, InputSource};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_text_argument(command);
        let command = Self::register_input_file_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_print_tree_argument(command);
        Self::register_verify_argument(command)
    }

    fn register_text_argument(command: Command) -> Command {
        command.arg(Self::create_text_argument())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_print_tree_argument(command: Command) -> Command {
        command.arg(Self::create_print_tree_argument())
    }

    fn register_verify_argument(command: Command) -> Command {
        command.arg(Self::create_verify_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_text_argument() -> Arg {
        Arg::new("text")
            .help("Text to encode. Read from standard input if neither text nor input file is given")
            .value_parser(value_parser!(String))
            .conflicts_with("input_file")
    }

    fn create_input_file_argument() -> Arg {
        arg!(input_file: -i --input_file <FILE> "Path to a UTF-8 text file to encode")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of threads counting symbol frequencies")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_print_tree_argument() -> Arg {
        arg!(print_tree: --print_tree "Draw the Huffman tree").action(ArgAction::SetTrue)
    }

    fn create_verify_argument() -> Arg {
        arg!(verify: --verify "Decode the concatenated code and compare it with the input")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input: Self::extract_input_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            print_tree: Self::extract_print_tree_argument(matches),
            verify: Self::extract_verify_argument(matches),
        }
    }

    fn extract_input_argument(matches: &ArgMatches) -> InputSource {
        if let Some(text) = matches.get_one::<String>("text") {
            InputSource::Text(text.clone())
        } else if let Some(input_file) = matches.get_one::<PathBuf>("input_file") {
            InputSource::File(input_file.clone())
        } else {
            InputSource::Stdin
        }
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_print_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_tree")
    }

    fn extract_verify_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("verify")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
