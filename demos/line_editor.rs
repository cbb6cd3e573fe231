//! Line-mode editor host.
//!
//! Demonstrates driving `linedit` from a prompt loop: user input is mapped to
//! `Command`s, results are rendered as a numbered listing.
//! Run with: cargo run --example line_editor -- notes.txt
//! Set `RUST_LOG=linedit=debug` to see the edit log on stderr.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use linedit::{Command, Direction, EditError, Editor};
use tracing_subscriber::EnvFilter;

const MENU: &str = "\nCommands:
 1. Insert line
 2. Delete line
 3. Search and replace
 4. Undo
 5. Redo
 6. Move cursor
 7. Insert character at cursor
 8. Delete character at cursor
 9. Save
10. Quit";

/// Prompt-and-read helper over any line source.
struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    /// `None` on end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        print!("{question}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn ask_number(&mut self, question: &str) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => println!("Please enter a number."),
            }
        }
    }
}

fn display(editor: &Editor) {
    for (i, line) in editor.lines().iter().enumerate() {
        println!("{}: {}", i + 1, line);
    }
    let cursor = editor.cursor();
    println!(
        "\nCursor at line {}, column {}",
        cursor.line + 1,
        cursor.column + 1
    );
}

fn open(editor: &mut Editor, path: &Path, prompt: &mut Prompt<impl BufRead>) -> io::Result<()> {
    match File::open(path) {
        Ok(file) => editor.read_from(BufReader::new(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let question = format!(
                "File not found. Create a new file named '{}'? (y/n): ",
                path.display()
            );
            let answer = prompt.ask(&question)?.unwrap_or_default();
            if answer.trim().eq_ignore_ascii_case("y") {
                editor.load(Vec::<String>::new());
                save(editor, path)?;
                println!("New file created: {}", path.display());
            }
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn save(editor: &mut Editor, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    editor.write_to(BufWriter::new(file))?;
    editor.mark_saved();
    Ok(())
}

/// Map one menu choice to a command, asking for its arguments.
fn read_command(choice: u32, prompt: &mut Prompt<impl BufRead>) -> io::Result<Option<Command>> {
    let command = match choice {
        1 => {
            let Some(line) = prompt.ask_number("Enter line number to insert at: ")? else {
                return Ok(None);
            };
            let Some(text) = prompt.ask("Enter text to insert: ")? else {
                return Ok(None);
            };
            Command::InsertLine { line, text }
        }
        2 => match prompt.ask_number("Enter line number to delete: ")? {
            Some(line) => Command::DeleteLine { line },
            None => return Ok(None),
        },
        3 => {
            let Some(search) = prompt.ask("Enter text to search: ")? else {
                return Ok(None);
            };
            let Some(replace) = prompt.ask("Enter text to replace with: ")? else {
                return Ok(None);
            };
            Command::Replace { search, replace }
        }
        4 => Command::Undo,
        5 => Command::Redo,
        6 => {
            let Some(answer) = prompt.ask("Move cursor (w=up, s=down, a=left, d=right): ")?
            else {
                return Ok(None);
            };
            match answer.parse::<Direction>() {
                Ok(direction) => Command::Move(direction),
                Err(err) => {
                    eprintln!("{err}");
                    return Ok(None);
                }
            }
        }
        7 => {
            let Some(answer) = prompt.ask("Enter character to insert at cursor: ")? else {
                return Ok(None);
            };
            match answer.chars().next() {
                Some(ch) => Command::InsertChar(ch),
                None => return Ok(None),
            }
        }
        8 => Command::DeleteChar,
        _ => return Ok(None),
    };
    Ok(Some(command))
}

fn report(result: Result<linedit::Outcome, EditError>) {
    match result {
        Ok(outcome) => {
            if let Some(n) = outcome.replacements {
                println!("{n} replacement(s)");
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut prompt = Prompt {
        input: stdin.lock(),
    };

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match prompt.ask("Enter the filename to open: ")? {
            Some(name) if !name.trim().is_empty() => PathBuf::from(name.trim()),
            _ => return Ok(()),
        },
    };

    let mut editor = Editor::new();
    open(&mut editor, &path, &mut prompt)?;
    display(&editor);

    loop {
        println!("{MENU}");
        let Some(answer) = prompt.ask("> ")? else {
            break;
        };
        let choice: u32 = match answer.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid command!");
                continue;
            }
        };

        match choice {
            9 => match save(&mut editor, &path) {
                Ok(()) => println!("Saved {}", path.display()),
                Err(err) => eprintln!("Failed to save file: {err}"),
            },
            10 => {
                if editor.is_modified() {
                    println!("Quitting with unsaved changes.");
                }
                break;
            }
            1..=8 => {
                if let Some(command) = read_command(choice, &mut prompt)? {
                    report(editor.execute(command));
                }
                display(&editor);
            }
            _ => println!("Invalid command!"),
        }
    }

    Ok(())
}
