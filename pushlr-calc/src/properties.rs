use crate::{CalcError, CalcParseError, CalcParser, CalcToken, TokenID};
use proptest::{collection, prelude::*};
use pushlr::{ParseError, ParserOptions, Step};

fn tokens(first: i64, rest: &[(TokenID, i64)], end: bool) -> Vec<CalcToken> {
    let mut out = vec![CalcToken::num(first, 0)];
    for &(op, n) in rest {
        let seq = out.len();
        out.push(CalcToken::punct(op, seq));
        out.push(CalcToken::num(n, seq + 1));
    }
    if end {
        let seq = out.len();
        out.push(CalcToken::punct(TokenID::End, seq));
    }
    out
}

fn eval(tokens: Vec<CalcToken>) -> Result<Option<i64>, CalcParseError> {
    let stats = CalcParser::new().feed_all(tokens)?;
    Ok(stats.last().and_then(CalcToken::number))
}

/// Two-level evaluation: products and quotients first, then sums and
/// differences, each left to right.
fn reference(first: i64, rest: &[(TokenID, i64)]) -> i64 {
    let mut terms = vec![(TokenID::Plus, first)];
    for &(op, n) in rest {
        match op {
            TokenID::Times | TokenID::Divide => {
                let Some((_, term)) = terms.last_mut() else {
                    unreachable!()
                };
                *term = if op == TokenID::Times { *term * n } else { *term / n };
            }
            _ => terms.push((op, n)),
        }
    }
    terms.into_iter().fold(0, |acc, (op, term)| match op {
        TokenID::Minus => acc - term,
        _ => acc + term,
    })
}

fn operator() -> impl Strategy<Value = TokenID> {
    prop_oneof![
        Just(TokenID::Plus),
        Just(TokenID::Minus),
        Just(TokenID::Times),
        Just(TokenID::Divide),
    ]
}

fn terminal() -> impl Strategy<Value = TokenID> {
    prop_oneof![
        Just(TokenID::Num),
        Just(TokenID::Plus),
        Just(TokenID::Minus),
        Just(TokenID::Times),
        Just(TokenID::Divide),
        Just(TokenID::Newline),
        Just(TokenID::End),
    ]
}

fn arbitrary_tokens() -> impl Strategy<Value = Vec<CalcToken>> {
    collection::vec((terminal(), -5i64..5), 0..24).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(seq, (token_id, n))| match token_id {
                TokenID::Num => CalcToken::num(n, seq),
                _ => CalcToken::punct(token_id, seq),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sum_of_two(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let result = eval(tokens(a, &[(TokenID::Plus, b)], true)).unwrap();
        prop_assert_eq!(result, Some(a + b));
    }

    #[test]
    fn product_then_sum(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
        let result = eval(tokens(a, &[(TokenID::Times, b), (TokenID::Plus, c)], true)).unwrap();
        prop_assert_eq!(result, Some(a * b + c));
        let result = eval(tokens(a, &[(TokenID::Plus, b), (TokenID::Times, c)], true)).unwrap();
        prop_assert_eq!(result, Some(a + b * c));
    }

    #[test]
    fn difference_is_left_associative(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
        let result = eval(tokens(a, &[(TokenID::Minus, b), (TokenID::Minus, c)], true)).unwrap();
        prop_assert_eq!(result, Some((a - b) - c));
    }

    #[test]
    fn division_by_zero_never_yields_a_value(a in any::<i64>()) {
        let err = eval(tokens(a, &[(TokenID::Divide, 0)], true)).unwrap_err();
        let is_div_zero = matches!(
            err,
            ParseError::Semantic { source: CalcError::DivisionByZero { .. }, .. }
        );
        prop_assert!(is_div_zero);
    }

    #[test]
    fn matches_reference_evaluation(
        first in -100i64..100,
        rest in collection::vec((operator(), 1i64..100), 0..6),
    ) {
        let result = eval(tokens(first, &rest, true)).unwrap();
        prop_assert_eq!(result, Some(reference(first, &rest)));
    }

    #[test]
    fn truncated_input_is_never_accepted(
        first in -100i64..100,
        rest in collection::vec((operator(), 1i64..100), 0..6),
    ) {
        let mut parser = CalcParser::new();
        for token in tokens(first, &rest, false) {
            let step = parser.feed(token).unwrap();
            prop_assert_eq!(step, Step::Shifted);
        }
        prop_assert_eq!(parser.stats().accepts, 0);
    }

    #[test]
    fn arbitrary_input_is_deterministic(input in arbitrary_tokens(), resync in any::<bool>()) {
        let run = |input: Vec<CalcToken>| {
            let mut parser = CalcParser::with_options(ParserOptions::default().resync(resync));
            let steps: Vec<_> = input.into_iter().map(|t| format!("{:?}", parser.feed(t))).collect();
            (steps, parser.stats())
        };
        let (steps1, stats1) = run(input.clone());
        let (steps2, stats2) = run(input);
        prop_assert_eq!(steps1, steps2);
        prop_assert_eq!(stats1, stats2);
    }

    #[test]
    fn accept_only_on_end(input in arbitrary_tokens()) {
        let mut parser = CalcParser::with_options(ParserOptions::default().resync(true));
        for token in input {
            let token_id = token.token_id;
            if let Ok(Step::Accept(_)) = parser.feed(token) {
                prop_assert_eq!(token_id, TokenID::End);
            }
        }
    }
}
