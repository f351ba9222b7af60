use std::io::{self, Write};
use std::str::FromStr;

/// Prompts until the input line parses as the requested integer type. Bad
/// input never aborts the session, it just asks again.
pub fn prompt_number<T: FromStr>(message: &str) -> anyhow::Result<T> {
    let mut input = String::new();
    loop {
        print!("{message}");
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("input stream closed");
        }

        let trimmed = input.trim();
        match trimmed.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid number: '{trimmed}'. Must be a non-negative integer.\n"),
        }
    }
}
