use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use console::{Style, Term};
use gigapan_core::angle::AngularPoint;
use gigapan_core::spec::PanSpec;

use crate::commands::input::USAGE;

/// Give up on a question after this many unparsable answers.
const MAX_ATTEMPTS: usize = 5;

/// Asks questions on `out` and reads answers line by line from `input`, so
/// the dialog works the same from a terminal, a pipe or a file.
struct Prompter<R, W> {
    input: R,
    out: W,
    question: Style,
    hint: Style,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            question: Style::new().cyan().bold(),
            hint: Style::new().dim(),
        }
    }

    fn ask(&mut self, title: &str, hints: &[&str], count: usize) -> Result<Vec<f64>> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.question.apply_to(title))?;
        for line in hints {
            writeln!(self.out, "{}", self.hint.apply_to(line))?;
        }
        for _ in 0..MAX_ATTEMPTS {
            self.out.flush()?;
            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                bail!("Input ended before an answer to \"{title}\"");
            }
            match parse_numbers(&answer, count) {
                Some(values) => return Ok(values),
                None => writeln!(
                    self.out,
                    "Please enter {count} number(s) separated by spaces."
                )?,
            }
        }
        bail!("No usable answer to \"{title}\"")
    }
}

/// Ask for every job parameter, reading answers from stdin.
pub fn prompt_spec(optimize: bool) -> Result<PanSpec> {
    let stdin = io::stdin();
    prompt_spec_from(stdin.lock(), Term::stdout(), optimize)
}

fn prompt_spec_from(input: impl BufRead, out: impl Write, optimize: bool) -> Result<PanSpec> {
    let mut prompter = Prompter::new(input, out);

    let geometry = prompter.ask(
        "What are the camera's focal length, image sensor width and height?",
        &[
            "Enter 3 numbers greater than 0. The unit of length doesn't matter",
            "as long as all 3 values use the same one.",
        ],
        3,
    )?;
    let start = prompter.ask(
        "Where is the gigapan going to start?",
        &["Enter a yaw and a pitch in degrees (-180 <= yaw <= 180, -90 <= pitch <= 90)."],
        2,
    )?;
    let right = prompter.ask(
        "How far right should the gigapan go?",
        &["Enter a positive number of degrees (0 to 180)."],
        1,
    )?;
    let left = prompter.ask(
        "How far left should the gigapan go?",
        &["Enter a negative number of degrees (0 to -180)."],
        1,
    )?;
    let up = prompter.ask(
        "How far up should the gigapan go?",
        &["Enter a positive number of degrees (0 to 90)."],
        1,
    )?;
    let down = prompter.ask(
        "How far down should the gigapan go?",
        &["Enter a negative number of degrees (0 to -90)."],
        1,
    )?;
    let overlap = prompter.ask(
        "Percent horizontal and vertical overlap between images?",
        &[
            "This is the minimum amount by which a picture overlaps its neighbour.",
            "A negative percentage puts space between images. Enter horizontal",
            "(-100 to 100) then vertical (-100 to 50).",
        ],
        2,
    )?;

    let out = &mut prompter.out;
    writeln!(out)?;
    writeln!(out, "{}", prompter.hint.apply_to(USAGE))?;
    writeln!(out)?;

    Ok(PanSpec {
        focal_length: geometry[0],
        sensor_width: geometry[1],
        sensor_height: geometry[2],
        start: AngularPoint::new(start[0], start[1]),
        right_limit: right[0],
        left_limit: left[0],
        up_limit: up[0],
        down_limit: down[0],
        horizontal_overlap_pct: overlap[0],
        vertical_overlap_pct: overlap[1],
        optimize,
    })
}

/// Parse exactly `count` whitespace-separated numbers.
fn parse_numbers(input: &str, count: usize) -> Option<Vec<f64>> {
    let values = input
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .ok()?;
    (values.len() == count).then_some(values)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers("50 36 24", 3), Some(vec![50.0, 36.0, 24.0]));
        assert_eq!(parse_numbers("  -30.5\t", 1), Some(vec![-30.5]));
    }

    #[test]
    fn test_parse_numbers_rejects_wrong_count_or_text() {
        assert_eq!(parse_numbers("50 36", 3), None);
        assert_eq!(parse_numbers("", 1), None);
        assert_eq!(parse_numbers("ten", 1), None);
    }

    const ANSWERS: &str = "50 36 24\n0 0\n30\n-30\n20\n-20\n0 0\n";

    #[test]
    fn test_dialog_reads_piped_answers() {
        let mut out = Vec::new();
        let spec = prompt_spec_from(Cursor::new(ANSWERS), &mut out, false).unwrap();

        let expected = PanSpec {
            horizontal_overlap_pct: 0.0,
            vertical_overlap_pct: 0.0,
            optimize: false,
            ..PanSpec::default()
        };
        assert_eq!(spec, expected);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("How far down should the gigapan go?"));
        assert!(!shown.contains("Please enter"));
    }

    #[test]
    fn test_dialog_reprompts_on_unparsable_line() {
        let input = format!("fifty\n50 36\n{ANSWERS}");
        let mut out = Vec::new();
        let spec = prompt_spec_from(Cursor::new(input), &mut out, true).unwrap();

        assert_eq!(spec.focal_length, 50.0);
        assert_eq!(spec.down_limit, -20.0);
        assert!(spec.optimize);
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Please enter 3 number(s)").count(), 2);
    }

    #[test]
    fn test_dialog_fails_when_input_ends() {
        let err = prompt_spec_from(Cursor::new("50 36 24\n0 0\n"), Vec::new(), false)
            .unwrap_err();
        assert!(err.to_string().contains("How far right"));
    }

    #[test]
    fn test_dialog_gives_up_after_repeated_garbage() {
        let input = "x\n".repeat(MAX_ATTEMPTS);
        let err = prompt_spec_from(Cursor::new(input), Vec::new(), false).unwrap_err();
        assert!(err.to_string().starts_with("No usable answer"));
    }
}
