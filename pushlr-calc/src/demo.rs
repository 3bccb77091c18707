//! # Demonstration drivers
//!
//! Hardcoded token scripts that exercise the calculator parser the way a
//! hand-written driver would: every token is built by the driver and pushed
//! in order, with no lexer involved.
//!
//! - [`Demo::Example2`]: three sentences, each on a fresh parser.
//! - [`Demo::Example3`]: four sentences including an integer division.
//! - [`Demo::Example4`]: newline-separated statements on a single parser.
//! - [`Demo::Recovery`]: a script with a failing division and a malformed
//!   line, to be run with resynchronization enabled.

use crate::{CalcParseError, CalcParser, CalcToken, TokenID};
use pushlr::{ParserOptions, ParserStatus, Step};

const T0: i64 = 4;
const T1: i64 = 13;

/// A script item: a number or a punctuation token.
#[derive(Debug, Clone, Copy)]
enum Item {
    N(i64),
    T(TokenID),
}

use Item::{N, T};

/// One parser session: a title and the tokens pushed into a fresh parser.
#[derive(Debug, Clone)]
pub struct Session {
    pub title: &'static str,
    pub tokens: Vec<CalcToken>,
}

impl Session {
    fn new(title: &'static str, items: &[Item]) -> Self {
        let tokens = items
            .iter()
            .enumerate()
            .map(|(seq, item)| match *item {
                N(n) => CalcToken::num(n, seq),
                T(token_id) => CalcToken::punct(token_id, seq),
            })
            .collect();
        Self { title, tokens }
    }

    /// Pushes every token and records each completed statement or error.
    ///
    /// Stops early once the parser is finished.
    pub fn run(&self, options: ParserOptions) -> Outcome {
        let mut parser = CalcParser::with_options(options);
        let mut results = Vec::new();
        for token in self.tokens.iter().copied() {
            match parser.feed(token) {
                Ok(Step::Statement(stat)) | Ok(Step::Accept(stat)) => results.push(Ok(stat)),
                Ok(Step::Shifted | Step::Skipped | Step::Resynced) => (),
                Err(err) => results.push(Err(err)),
            }
            if parser.status() == ParserStatus::Finished {
                break;
            }
        }
        Outcome {
            title: self.title,
            results,
        }
    }
}

/// What a session produced, in order.
#[derive(Debug)]
pub struct Outcome {
    pub title: &'static str,
    pub results: Vec<Result<CalcToken, CalcParseError>>,
}

impl Outcome {
    /// Values of the completed statements; `None` for an empty statement.
    pub fn values(&self) -> Vec<Option<i64>> {
        self.results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|stat| stat.number())
            .collect()
    }

    pub fn errors(&self) -> impl Iterator<Item = &CalcParseError> {
        self.results.iter().filter_map(|r| r.as_ref().err())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Demo {
    Example2,
    Example3,
    Example4,
    Recovery,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::Example2, Demo::Example3, Demo::Example4, Demo::Recovery];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Example2 => "example2",
            Demo::Example3 => "example3",
            Demo::Example4 => "example4",
            Demo::Recovery => "recovery",
        }
    }

    pub fn sessions(&self) -> Vec<Session> {
        match self {
            Demo::Example2 => vec![
                Session::new("4 + 13", &[N(T0), T(TokenID::Plus), N(T1), T(TokenID::End)]),
                Session::new("4 - 13", &[N(T0), T(TokenID::Minus), N(T1), T(TokenID::End)]),
                Session::new(
                    "4 * 13 + 13 + 13",
                    &[
                        N(T0),
                        T(TokenID::Times),
                        N(T1),
                        T(TokenID::Plus),
                        N(T1),
                        T(TokenID::Plus),
                        N(T1),
                        T(TokenID::End),
                    ],
                ),
            ],
            Demo::Example3 => vec![
                Session::new("4 + 13", &[N(T0), T(TokenID::Plus), N(T1), T(TokenID::End)]),
                Session::new("4 / 13", &[N(T0), T(TokenID::Divide), N(T1), T(TokenID::End)]),
                Session::new(
                    "4 * 13 + 13 + 13",
                    &[
                        N(T0),
                        T(TokenID::Times),
                        N(T1),
                        T(TokenID::Plus),
                        N(T1),
                        T(TokenID::Plus),
                        N(T1),
                        T(TokenID::End),
                    ],
                ),
                Session::new("13 + 4", &[N(T1), T(TokenID::Plus), N(T0), T(TokenID::End)]),
            ],
            Demo::Example4 => vec![Session::new(
                "4 + 13 \\n 4 * 13 \\n",
                &[
                    N(T0),
                    T(TokenID::Plus),
                    N(T1),
                    T(TokenID::Newline),
                    N(T0),
                    T(TokenID::Times),
                    N(T1),
                    T(TokenID::Newline),
                    T(TokenID::End),
                ],
            )],
            Demo::Recovery => vec![Session::new(
                "4 / 0 \\n 4 4 \\n 4 + 13 \\n",
                &[
                    N(T0),
                    T(TokenID::Divide),
                    N(0),
                    T(TokenID::Newline),
                    N(T0),
                    N(T0),
                    T(TokenID::Newline),
                    N(T0),
                    T(TokenID::Plus),
                    N(T1),
                    T(TokenID::Newline),
                    T(TokenID::End),
                ],
            )],
        }
    }

    pub fn run(&self, options: ParserOptions) -> Vec<Outcome> {
        self.sessions()
            .iter()
            .map(|session| session.run(options))
            .collect()
    }
}
