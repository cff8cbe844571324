use std::process;

use foxhist::errors::{EXIT_ERROR, EXIT_SUCCESS, FoxhistError};
use foxhist::{cli, logging};

fn main() {
    logging::init();
    let args = cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match foxhist::run(&args, &mut out) {
        Ok(_) => process::exit(EXIT_SUCCESS),
        Err(err) => {
            match &err {
                FoxhistError::Usage => eprintln!("{err}"),
                _ => {
                    eprintln!("foxhist: {err}");
                    if let Some(hint) = err.hint() {
                        eprintln!("hint: {hint}");
                    }
                }
            }
            process::exit(EXIT_ERROR);
        }
    }
}
