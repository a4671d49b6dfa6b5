//! Interactive question/answer front end.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use dp_prob::{DistributionKind, DistributionSpec, Parameters, inclusive_range};

use crate::report::format_list;

/// Asks for a distribution, an integer range and the kind's parameters.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input while waiting for: {}", question.trim_end_matches([':', ' ']));
        }
        Ok(line.trim().to_string())
    }

    fn ask_parsed<T>(&mut self, question: &str, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.ask(question)?;
        answer
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("expected {} for {}, got '{}'", type_name::<T>(), what, answer))
    }

    /// Run the questionnaire.
    ///
    /// The distribution name is checked as soon as it is entered. Parameter
    /// values are only parsed here; range checks happen in the core.
    pub fn collect(&mut self) -> Result<(DistributionSpec, Vec<f64>)> {
        let name = self
            .ask("Enter the name of the distribution (geometric, binomial, poisson, uniform): ")?
            .to_lowercase();
        let kind: DistributionKind = name.parse()?;

        let start: i64 =
            self.ask_parsed("Enter the start of the range of x values (integer): ", "the range start")?;
        let end: i64 =
            self.ask_parsed("Enter the end of the range of x values (integer): ", "the range end")?;
        let values = inclusive_range(start, end);
        writeln!(self.out, "Range of x values: {}", format_list(&values))?;

        let mut parameters = Parameters::new();
        match kind {
            DistributionKind::Geometric => {
                let p: f64 = self.ask_parsed("Enter the probability of success (p): ", "p")?;
                parameters.insert("p".into(), p);
            }
            DistributionKind::Binomial => {
                let n: i64 = self.ask_parsed("Enter the number of trials (n): ", "n")?;
                let p: f64 = self.ask_parsed("Enter the probability of success (p): ", "p")?;
                parameters.insert("n".into(), n as f64);
                parameters.insert("p".into(), p);
            }
            DistributionKind::Poisson => {
                let mu: f64 = self.ask_parsed("Enter the mean (mu): ", "mu")?;
                parameters.insert("mu".into(), mu);
            }
            DistributionKind::Uniform => {
                let low: f64 = self.ask_parsed("Enter the lower bound (low): ", "low")?;
                let high: f64 = self.ask_parsed("Enter the upper bound (high): ", "high")?;
                parameters.insert("low".into(), low);
                parameters.insert("high".into(), high);
            }
        }

        let spec = DistributionSpec::from_named(kind.as_str(), &parameters)?;
        Ok((spec, values))
    }
}

fn type_name<T>() -> &'static str {
    match std::any::type_name::<T>() {
        "i64" => "an integer",
        "f64" => "a number",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_core::Error;
    use std::io::Cursor;

    fn collect(stdin: &str) -> (Result<(DistributionSpec, Vec<f64>)>, String) {
        let mut out = Vec::new();
        let res = Prompter::new(Cursor::new(stdin.as_bytes()), &mut out).collect();
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn binomial_session() {
        let (res, transcript) = collect("Binomial\n-1\n3\n5\n0.5\n");
        let (spec, values) = res.unwrap();
        assert_eq!(spec, DistributionSpec::binomial(5, 0.5).unwrap());
        assert_eq!(values, vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
        assert!(transcript.contains("Enter the number of trials (n): "));
        assert!(transcript.contains("Range of x values: [-1, 0, 1, 2, 3]"));
    }

    #[test]
    fn uniform_session() {
        let (res, _) = collect("uniform\n0\n4\n0\n4\n");
        let (spec, values) = res.unwrap();
        assert_eq!(spec, DistributionSpec::uniform(0.0, 4.0).unwrap());
        assert_eq!(values.len(), 5);
    }

    #[test]
    fn unknown_distribution_stops_early() {
        let (res, transcript) = collect("gaussian\n0\n3\n");
        let err = res.unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::UnsupportedDistribution("gaussian".into()))
        );
        assert!(!transcript.contains("start of the range"));
    }

    #[test]
    fn non_numeric_answer() {
        let (res, _) = collect("poisson\nabc\n");
        let msg = format!("{:#}", res.unwrap_err());
        assert!(msg.contains("expected an integer for the range start, got 'abc'"), "{msg}");
    }

    #[test]
    fn invalid_parameter_reported_by_core() {
        let (res, _) = collect("geometric\n1\n3\n1.5\n");
        let err = res.unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidParameter { .. })));
    }

    #[test]
    fn eof() {
        let (res, _) = collect("geometric\n1\n");
        assert!(res.unwrap_err().to_string().contains("unexpected end of input"));
    }
}
