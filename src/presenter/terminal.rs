use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use colored::Colorize;

use crate::domain::{Choice, Matchup, PointSet};

use super::Presenter;

/// Interactive participant on stdin/stdout.
///
/// Prints a numeric summary per side (point count and extents; the plots
/// themselves come from the surrounding experiment materials) and reads
/// `1`, `2` or `u` as the answer, re-prompting on anything else.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for TerminalPresenter {
    fn present(
        &mut self,
        matchup: Matchup,
        first: &PointSet,
        second: &PointSet,
        comparison_count: usize,
    ) -> Result<Choice> {
        println!();
        println!(
            "{}",
            "Which scatterplot looks more fine-grained?".bold()
        );
        println!("Comparisons so far: {comparison_count}");
        println!("  [1] {}", describe(matchup.first, first));
        println!("  [2] {}", describe(matchup.second, second));

        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            print!("{} ", "Choose [1/2/u=unsure]:".green().bold());
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                bail!("Input stream closed before the session finished");
            }

            match parse_choice(&line) {
                Some(choice) => return Ok(choice),
                None => println!("{}", "Please answer 1, 2 or u.".yellow()),
            }
        }
    }
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_lowercase().as_str() {
        "1" => Some(Choice::First),
        "2" => Some(Choice::Second),
        "u" | "unsure" => Some(Choice::Unsure),
        _ => None,
    }
}

fn describe(index: usize, pointset: &PointSet) -> String {
    let label = format!("Scatterplot {}", index + 1);
    match (pointset.x_extent(), pointset.y_extent()) {
        (Some((x_min, x_max)), Some((y_min, y_max))) => format!(
            "{label}: {} points, x {x_min:.2}..{x_max:.2}, y {y_min:.2}..{y_max:.2}",
            pointset.len()
        ),
        _ => format!("{label}: empty"),
    }
}

/// Final standings with the two-decimal display used throughout the
/// experiment pages (the exported artifact keeps raw values instead).
pub fn print_final_table(ratings: &[f64]) {
    println!();
    println!("{}", "Final ratings".bold());
    for (index, rating) in ratings.iter().enumerate() {
        println!("  Scatterplot {}: {rating:.2}", index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_accepts_all_answers() {
        assert_eq!(parse_choice("1\n"), Some(Choice::First));
        assert_eq!(parse_choice(" 2 "), Some(Choice::Second));
        assert_eq!(parse_choice("u\n"), Some(Choice::Unsure));
        assert_eq!(parse_choice("UNSURE"), Some(Choice::Unsure));
    }

    #[test]
    fn test_parse_choice_rejects_anything_else() {
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("3"), None);
        assert_eq!(parse_choice("first"), None);
    }

    #[test]
    fn test_describe_mentions_point_count() {
        let points = PointSet(vec![[0.0, 1.0], [0.5, 0.25]]);
        let text = describe(4, &points);
        assert!(text.contains("Scatterplot 5"));
        assert!(text.contains("2 points"));
    }

    #[test]
    fn test_describe_empty_pointset() {
        assert_eq!(describe(0, &PointSet::default()), "Scatterplot 1: empty");
    }
}
