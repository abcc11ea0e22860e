//! Prompting and input parsing helpers
//!
//! The parse functions are pure so they can be unit tested; the prompt
//! functions are thin stdin wrappers around them.

use std::io::{self, BufRead, Write};

use core_kernel::Money;
use domain_banking::AccountType;

/// Reads one trimmed line from stdin after printing a prompt
///
/// A zero-byte read means stdin is exhausted (closed terminal or a piped
/// script that ran dry); that surfaces as `UnexpectedEof` so the retry
/// loops and the application exit instead of re-prompting forever.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    read_trimmed_line(&mut io::stdin().lock())
}

fn read_trimmed_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Parses a 1-based menu choice within `1..=max`
pub fn parse_choice(input: &str, max: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n),
        _ => None,
    }
}

/// Prompts until the user enters a valid 1-based choice
pub fn prompt_choice(label: &str, max: usize) -> io::Result<usize> {
    loop {
        let line = prompt(label)?;
        match parse_choice(&line, max) {
            Some(choice) => return Ok(choice),
            None => println!("Please enter a number between 1 and {max}."),
        }
    }
}

/// Prompts until the user enters a well-formed amount
///
/// Only the format is checked here; sign and balance rules belong to the
/// domain and are reported through its errors.
pub fn prompt_amount(label: &str) -> io::Result<Money> {
    loop {
        let line = prompt(label)?;
        match line.parse::<Money>() {
            Ok(amount) => return Ok(amount),
            Err(err) => println!("{err}"),
        }
    }
}

/// Prompts for an account type from the fixed menu
pub fn prompt_account_type() -> io::Result<AccountType> {
    for (i, account_type) in AccountType::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, account_type.label());
    }
    let choice = prompt_choice("Account type", AccountType::ALL.len())?;
    Ok(AccountType::ALL[choice - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims_input() {
        let mut reader = Cursor::new("  2  \n");
        assert_eq!(read_trimmed_line(&mut reader).unwrap(), "2");
    }

    #[test]
    fn test_exhausted_input_is_eof_not_empty_string() {
        let mut reader = Cursor::new("");
        let err = read_trimmed_line(&mut reader).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_eof_after_last_line() {
        let mut reader = Cursor::new("3\n");
        assert_eq!(read_trimmed_line(&mut reader).unwrap(), "3");
        assert!(read_trimmed_line(&mut reader).is_err());
    }

    #[test]
    fn test_parse_choice_accepts_in_range() {
        assert_eq!(parse_choice("1", 5), Some(1));
        assert_eq!(parse_choice(" 5 ", 5), Some(5));
    }

    #[test]
    fn test_parse_choice_rejects_out_of_range() {
        assert_eq!(parse_choice("0", 5), None);
        assert_eq!(parse_choice("6", 5), None);
        assert_eq!(parse_choice("x", 5), None);
        assert_eq!(parse_choice("", 5), None);
    }
}
