//! Interactive prompts for tag and level selection.
//!
//! Only the binary talks to the terminal; the library crates stay
//! prompt-free.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use esplog_common::error::Error;

/// Numbered tag menu. Accepts a list number or a literal tag; the
/// literal need not be in the list, since the device may know tags the
/// scan missed.
pub fn pick_tag(tags: &[String]) -> Result<String, Error> {
    if tags.is_empty() {
        return Err(Error::NoTagsFound);
    }

    println!("{}", "Discovered log tags:".bold());
    for (index, tag) in tags.iter().enumerate() {
        println!("  {:>3}) {}", index + 1, tag);
    }

    let stdin = io::stdin();
    loop {
        print!("Pick a tag number or type an exact tag: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a tag was chosen",
            )));
        }

        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        if value.chars().all(|c| c.is_ascii_digit()) {
            match value.parse::<usize>() {
                Ok(index) if (1..=tags.len()).contains(&index) => {
                    return Ok(tags[index - 1].clone());
                }
                _ => {
                    println!("{}", "Invalid number.".red());
                    continue;
                }
            }
        }

        return Ok(value.to_string());
    }
}

/// Ask for the desired level; normalization happens in the caller.
pub fn ask_level() -> Result<String, Error> {
    print!("Level [NONE|ERROR|WARN|INFO|DEBUG|VERBOSE]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag_list_is_no_tags_found() {
        let err = pick_tag(&[]).unwrap_err();
        assert!(matches!(err, Error::NoTagsFound));
    }
}
