//! Interactive policy acquisition: pasted JSON or a file picked from the
//! current directory. Thin I/O wrapper; validation lives in policylens-core.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use policylens_core::PolicyDocument;

/// Top-level menu: paste JSON or pick a `.json` file from the current
/// directory. Returns `None` when file selection was chosen but the
/// directory holds no JSON files.
pub fn choose_source() -> anyhow::Result<Option<PolicyDocument>> {
    println!("Choose how to provide the IAM policy:");
    println!("1. Paste JSON");
    println!("2. Choose JSON file from current folder");

    loop {
        let choice = prompt_line("Enter your choice (1 or 2): ")?;
        match choice.trim() {
            "1" => return read_pasted().map(Some),
            "2" => return pick_file(),
            _ => println!("Invalid choice. Try again."),
        }
    }
}

/// Load and parse a policy file.
pub fn load_file(path: &Path) -> anyhow::Result<PolicyDocument> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    PolicyDocument::parse(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Read a pasted policy terminated by an empty line. Malformed input
/// re-prompts rather than aborting.
fn read_pasted() -> anyhow::Result<PolicyDocument> {
    loop {
        println!("Paste your IAM JSON policy below. End your input with an empty line:");

        let mut lines = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }

        match PolicyDocument::parse(&lines.join("\n")) {
            Ok(policy) => return Ok(policy),
            Err(e) => println!("That was not valid JSON ({e}). Try again."),
        }
    }
}

/// Numbered picker over `.json` files in the current directory.
fn pick_file() -> anyhow::Result<Option<PolicyDocument>> {
    let files = json_files_in(Path::new("."))?;

    if files.is_empty() {
        println!("No JSON files found in the current directory.");
        return Ok(None);
    }

    println!("Select a JSON file from the list below:");
    for (idx, file) in files.iter().enumerate() {
        println!("{}. {}", idx + 1, file.display());
    }

    loop {
        let choice = prompt_line("Enter the number of the file to load: ")?;
        match choice.trim().parse::<usize>() {
            Ok(n) if (1..=files.len()).contains(&n) => {
                return load_file(&files[n - 1]).map(Some);
            }
            _ => println!("Invalid choice. Try again."),
        }
    }
}

fn json_files_in(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flushing stdout")?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf).context("reading stdin")?;
    Ok(buf)
}
