mod assert_err;
mod csv;
mod domain;

use crate::domain::column_sum::sum_column;
use anyhow::{Error, Result};
use std::{env, io::stdout};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let csv_path = csv_path_from_args(&args)?;

    let total = sum_column(csv_path, &mut stdout())?;

    println!("The sum of the second column is: {}", total);

    Ok(())
}

fn csv_path_from_args(args: &[String]) -> Result<&str> {
    args.get(1).map(String::as_str).ok_or(Error::msg(
        "Missing CSV path argument. Example: cargo run -- values.csv",
    ))
}

#[cfg(test)]
mod tests {
    use super::csv_path_from_args;
    use crate::assert_err::assert_err;
    use anyhow::Result;

    #[test]
    fn reads_the_csv_path_argument() -> Result<()> {
        let args = vec!["column-sum".to_string(), "values.csv".to_string()];

        assert_eq!("values.csv", csv_path_from_args(&args)?);
        Ok(())
    }

    #[test]
    fn fails_without_a_csv_path_argument() -> Result<()> {
        let args = vec!["column-sum".to_string()];

        assert_err!(
            csv_path_from_args(&args),
            "Missing CSV path argument. Example: cargo run -- values.csv"
        );
        Ok(())
    }
}
