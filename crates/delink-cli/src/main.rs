use anyhow::Result;
use delink_config::{Config, OutputMode};
use delink_engine::{Cmd, Host, apply, io, strip_links};
use std::io::Read;
use std::{env, path::PathBuf, process};

/// Host backed by the in-memory buffer the CLI is working on.
///
/// A CLI buffer has no selection, so only the whole-document commands are
/// dispatched against it. Notices surface on stderr so stdout stays clean
/// for the stripped text.
struct BufferHost {
    text: String,
}

impl Host for BufferHost {
    fn selection(&self) -> String {
        String::new()
    }

    fn full_text(&self) -> String {
        self.text.clone()
    }

    fn replace_selection(&mut self, _text: &str) {
        // No selection to replace in a CLI buffer
    }

    fn set_full_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        cli_clipboard::set_contents(text.to_owned())
            .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {e}"))
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut mode_flag: Option<OutputMode> = None;
    let mut file: Option<PathBuf> = None;
    let mut positional_seen = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            "-o" | "--stdout" => set_mode(&mut mode_flag, OutputMode::Stdout, &args[0]),
            "-c" | "--copy" => set_mode(&mut mode_flag, OutputMode::Clipboard, &args[0]),
            "-i" | "--in-place" => set_mode(&mut mode_flag, OutputMode::InPlace, &args[0]),
            "-" => {
                reject_second_positional(positional_seen, &args[0]);
                positional_seen = true;
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown option '{flag}'");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                reject_second_positional(positional_seen, &args[0]);
                positional_seen = true;
                file = Some(PathBuf::from(path));
            }
        }
    }

    // Flags win; otherwise fall back to the config file, then stdout
    let mode = match mode_flag {
        Some(mode) => mode,
        None => match Config::load() {
            Ok(Some(config)) => config.output,
            Ok(None) => OutputMode::Stdout,
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        },
    };

    if mode == OutputMode::InPlace && file.is_none() {
        eprintln!("Error: --in-place needs a file to rewrite, not stdin");
        process::exit(1);
    }

    let text = match &file {
        Some(path) => match io::read_file(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => read_stdin()?,
    };

    match mode {
        OutputMode::Stdout => {
            print!("{}", strip_links(&text));
        }
        OutputMode::Clipboard => {
            let mut host = BufferHost { text };
            apply(&mut host, Cmd::StripDocumentToClipboard)?;
        }
        OutputMode::InPlace => {
            // Presence of the file was checked above
            if let Some(path) = &file {
                let mut host = BufferHost { text };
                apply(&mut host, Cmd::StripDocumentInPlace)?;
                io::write_file(path, &host.text)?;
            }
        }
    }

    Ok(())
}

fn set_mode(mode_flag: &mut Option<OutputMode>, mode: OutputMode, program: &str) {
    if mode_flag.is_some() {
        eprintln!("Error: Only one of --stdout, --copy, --in-place may be given");
        print_usage(program);
        process::exit(1);
    }
    *mode_flag = Some(mode);
}

fn reject_second_positional(positional_seen: bool, program: &str) {
    if positional_seen {
        eprintln!("Error: More than one input file given");
        print_usage(program);
        process::exit(1);
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [--stdout|--copy|--in-place] [file]");
    eprintln!();
    eprintln!("Strips internal wiki-links from markdown text.");
    eprintln!("Reads from stdin when no file (or '-') is given.");
    eprintln!();
    eprintln!("  -o, --stdout    print the stripped text (default)");
    eprintln!("  -c, --copy      put the stripped text on the system clipboard");
    eprintln!("  -i, --in-place  rewrite the input file");
    eprintln!();
    eprintln!(
        "The default output mode can be set in {}",
        Config::config_path().display()
    );
}
