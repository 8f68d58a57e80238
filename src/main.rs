//! Morse encode/decode command-line front end.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use lanewise::morse::io as morse_io;

const USAGE: &str = "\
usage: morse <input-path> <-Decode|-Encode> [<output-path>]

  -Decode    read a Morse token file and print the plain text
  -Encode    read a plain-text file and print the Morse tokens
  -Help      print this message

With no output path the result goes to standard output.";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "-Help" || a == "-help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let (input, mode) = match (args.first(), args.get(1)) {
        (Some(input), Some(mode)) => (Path::new(input), mode.as_str()),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let output = args.get(2).map(Path::new);

    match mode {
        "-Decode" => {
            let plain = morse_io::decode_file(input);
            match output {
                Some(path) => morse_io::write_plain_text_file(path, &plain),
                None => {
                    let stdout = io::stdout();
                    let mut lock = stdout.lock();
                    if morse_io::write_plain_text(&mut lock, &plain).is_ok() {
                        let _ = writeln!(lock);
                    }
                }
            }
        }
        "-Encode" => {
            let symbols = morse_io::encode_file(input);
            match output {
                Some(path) => morse_io::write_symbols_file(path, &symbols),
                None => {
                    let stdout = io::stdout();
                    let mut lock = stdout.lock();
                    if morse_io::write_symbols(&mut lock, &symbols).is_ok() {
                        let _ = writeln!(lock);
                    }
                }
            }
        }
        _ => {
            eprintln!("unknown mode {mode}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
