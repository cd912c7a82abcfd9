use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mini_edit::{terminal, SingleBufferEditor};

/// A minimal terminal text editor.
#[derive(Debug, Parser)]
#[command(name = "mini-edit", version, about)]
struct Cli {
    /// File to edit.
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut editor = match SingleBufferEditor::open(&cli.file) {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("mini-edit: {}: {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    // Errors inside the loop are reported only after the terminal guard has
    // restored the screen, or the message would be lost with the alternate
    // screen.
    if let Err(err) = terminal::run(&mut editor) {
        eprintln!("mini-edit: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
