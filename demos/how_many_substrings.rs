use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use substrings_rs::{Event, StreamController};

/// Answers "how many distinct substrings so far?" for every `?` in the input.
///
/// Each line is an independent string of `a`..`z`; a `?` asks for the count of
/// the letters seen so far on that line. Other bytes are ignored.
///
/// Usage: cargo run --example how_many_substrings [filename]
fn main() {
    let args: Vec<String> = env::args().collect();

    let input: Box<dyn Read> = match args.get(1) {
        Some(filename) => Box::new(File::open(filename).unwrap_or_else(|_| {
            eprintln!("File \"{}\" not found.", filename);
            std::process::exit(1);
        })),
        None => Box::new(io::stdin()),
    };

    let mut controller: StreamController = StreamController::default();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut line_started = false;

    for byte_result in BufReader::new(input).bytes() {
        let byte = byte_result.expect("Error reading input");

        let event = match byte {
            b'\n' | b'\r' if line_started => {
                line_started = false;
                Event::NewString
            }
            b'?' => Event::Query,
            b'a'..=b'z' => Event::Append(byte),
            _ => continue,
        };
        if matches!(event, Event::Query | Event::Append(_)) {
            line_started = true;
        }

        match controller.handle(event) {
            Ok(Some(answer)) => writeln!(out, "{}", answer).expect("Error writing output"),
            Ok(None) => {}
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }

    out.flush().expect("Error writing output");
}
