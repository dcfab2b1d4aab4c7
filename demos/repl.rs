use std::{
    env,
    io::{self, Write},
    path::Path,
};

use symcorrect::dictionary::SpaceDelimitedFileIterator;
use symcorrect::SymSpell;

const MAX_EDIT_DISTANCE: i64 = 2;
const PREFIX_LENGTH: usize = 7;

fn main() -> io::Result<()> {
    let dict_path = env::args().nth(1).unwrap_or_else(|| "words_100k.txt".into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        std::process::exit(1);
    }

    let mut corrector = SymSpell::new(16, MAX_EDIT_DISTANCE, PREFIX_LENGTH, 1)
        .expect("default construction parameters are valid");
    let entries =
        SpaceDelimitedFileIterator::new(&dict_path, 0, 1, None).expect("dictionary file must be readable");
    corrector
        .load_dictionary(entries)
        .expect("dictionary file must be readable");

    println!(
        "SymSpell REPL - dictionary: {}\n:type text, :q to quit",
        dict_path
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        match corrector.lookup_compound(input.trim(), MAX_EDIT_DISTANCE, true) {
            Ok(suggestions) => {
                for suggestion in suggestions {
                    println!("  {}  ->  {}", suggestion.input, suggestion.term);
                }
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }
    Ok(())
}
