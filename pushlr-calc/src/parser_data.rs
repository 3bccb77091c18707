/*
Automaton tables for the calculator grammar

    Start -> Stat
    Stat  ->
    Stat  -> Expr
    Expr  -> num
    Expr  -> Expr + Expr
    Expr  -> Expr - Expr
    Expr  -> Expr * Expr
    Expr  -> Expr / Expr

    %left + -
    %left * /

`end` terminates the input, `newline` terminates a statement. Shift/reduce
conflicts in states 8..11 are resolved by the precedence declarations above.
*/

use pushlr::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);
impl ParserStateID for StateID {
    const COUNT: usize = 12;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProdID {
    Start = 0,
    Stat1 = 1,
    Stat2 = 2,
    Expr1 = 3,
    Expr2 = 4,
    Expr3 = 5,
    Expr4 = 6,
    Expr5 = 7,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 8;

    fn label(&self) -> &'static str {
        ProdID::LABELS[Into::<usize>::into(*self)]
    }
    fn lhs_token_id(&self) -> Self::TokenID {
        ProdID::LHS_TOKENS[Into::<usize>::into(*self)]
    }
    fn size(&self) -> usize {
        ProdID::SIZES[Into::<usize>::into(*self)]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

impl ProdID {
    pub const LABELS: &'static [&str] = &[
        "start", // 0
        "stat1", // 1
        "stat2", // 2
        "expr1", // 3
        "expr2", // 4
        "expr3", // 5
        "expr4", // 6
        "expr5", // 7
    ];

    pub const LHS_TOKENS: &[TokenID] = &[
        TokenID::Start, // 0
        TokenID::Stat,  // 1
        TokenID::Stat,  // 2
        TokenID::Expr,  // 3
        TokenID::Expr,  // 4
        TokenID::Expr,  // 5
        TokenID::Expr,  // 6
        TokenID::Expr,  // 7
    ];

    pub const SIZES: &[usize] = &[
        1, // 0
        0, // 1
        1, // 2
        1, // 3
        3, // 4
        3, // 5
        3, // 6
        3, // 7
    ];

    /// Binary operator of the production, if any.
    pub const OPERATORS: &[Option<TokenID>] = &[
        None,                  // 0
        None,                  // 1
        None,                  // 2
        None,                  // 3
        Some(TokenID::Plus),   // 4
        Some(TokenID::Minus),  // 5
        Some(TokenID::Times),  // 6
        Some(TokenID::Divide), // 7
    ];

    pub fn operator(&self) -> Option<TokenID> {
        ProdID::OPERATORS[Into::<usize>::into(*self)]
    }

    /// Precedence of the production, taken from its operator.
    pub fn precedence(&self) -> Option<u8> {
        self.operator()
            .and_then(|op| op.precedence())
            .map(|(prec, _)| prec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    Stat = 1,
    Expr = 2,

    // Terminals:
    End = 3,
    Num = 4,
    Plus = 5,
    Minus = 6,
    Times = 7,
    Divide = 8,
    Newline = 9,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 3;
    const COUNT_TERMINALS: usize = 7;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS;

    fn label(&self) -> &'static str {
        TokenID::LABELS[Into::<usize>::into(*self)]
    }
    fn is_end(&self) -> bool {
        *self == TokenID::End
    }
    fn is_sync(&self) -> bool {
        *self == TokenID::Newline
    }
}

impl From<TokenID> for usize {
    fn from(t: TokenID) -> Self {
        t as usize
    }
}

impl TokenID {
    pub const LABELS: &'static [&str] = &[
        "Start",   // 0
        "Stat",    // 1
        "Expr",    // 2
        "end",     // 3
        "num",     // 4
        "+",       // 5
        "-",       // 6
        "*",       // 7
        "/",       // 8
        "newline", // 9
    ];

    /// Operator precedence declarations; higher binds tighter.
    pub fn precedence(&self) -> Option<(u8, Assoc)> {
        match self {
            TokenID::Plus | TokenID::Minus => Some((1, Assoc::Left)),
            TokenID::Times | TokenID::Divide => Some((2, Assoc::Left)),
            _ => None,
        }
    }
}

/// Grouping of operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Assoc {
    None = 0,
    Left = 1,
    Right = 2,
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT_TERMINALS]] = &[
        /* STATE 0 */ [
            Action::Reduce(ProdID::Stat1), /* 3(end) */
            Action::Shift(StateID(3)),     /* 4(num) */
            Action::Error,                 /* 5(+) */
            Action::Error,                 /* 6(-) */
            Action::Error,                 /* 7(*) */
            Action::Error,                 /* 8(/) */
            Action::Reduce(ProdID::Stat1), /* 9(newline) */
        ],
        /* STATE 1 */ [
            Action::Accept, /* 3(end) */
            Action::Error,  /* 4(num) */
            Action::Error,  /* 5(+) */
            Action::Error,  /* 6(-) */
            Action::Error,  /* 7(*) */
            Action::Error,  /* 8(/) */
            Action::Accept, /* 9(newline) */
        ],
        /* STATE 2 */ [
            Action::Reduce(ProdID::Stat2), /* 3(end) */
            Action::Error,                 /* 4(num) */
            Action::Shift(StateID(4)),     /* 5(+) */
            Action::Shift(StateID(5)),     /* 6(-) */
            Action::Shift(StateID(6)),     /* 7(*) */
            Action::Shift(StateID(7)),     /* 8(/) */
            Action::Reduce(ProdID::Stat2), /* 9(newline) */
        ],
        /* STATE 3 */ [
            Action::Reduce(ProdID::Expr1), /* 3(end) */
            Action::Error,                 /* 4(num) */
            Action::Reduce(ProdID::Expr1), /* 5(+) */
            Action::Reduce(ProdID::Expr1), /* 6(-) */
            Action::Reduce(ProdID::Expr1), /* 7(*) */
            Action::Reduce(ProdID::Expr1), /* 8(/) */
            Action::Reduce(ProdID::Expr1), /* 9(newline) */
        ],
        /* STATE 4 */ [
            Action::Error,             /* 3(end) */
            Action::Shift(StateID(3)), /* 4(num) */
            Action::Error,             /* 5(+) */
            Action::Error,             /* 6(-) */
            Action::Error,             /* 7(*) */
            Action::Error,             /* 8(/) */
            Action::Error,             /* 9(newline) */
        ],
        /* STATE 5 */ [
            Action::Error,             /* 3(end) */
            Action::Shift(StateID(3)), /* 4(num) */
            Action::Error,             /* 5(+) */
            Action::Error,             /* 6(-) */
            Action::Error,             /* 7(*) */
            Action::Error,             /* 8(/) */
            Action::Error,             /* 9(newline) */
        ],
        /* STATE 6 */ [
            Action::Error,             /* 3(end) */
            Action::Shift(StateID(3)), /* 4(num) */
            Action::Error,             /* 5(+) */
            Action::Error,             /* 6(-) */
            Action::Error,             /* 7(*) */
            Action::Error,             /* 8(/) */
            Action::Error,             /* 9(newline) */
        ],
        /* STATE 7 */ [
            Action::Error,             /* 3(end) */
            Action::Shift(StateID(3)), /* 4(num) */
            Action::Error,             /* 5(+) */
            Action::Error,             /* 6(-) */
            Action::Error,             /* 7(*) */
            Action::Error,             /* 8(/) */
            Action::Error,             /* 9(newline) */
        ],
        /* STATE 8 */ [
            Action::Reduce(ProdID::Expr2), /* 3(end) */
            Action::Error,                 /* 4(num) */
            Action::Reduce(ProdID::Expr2), /* 5(+) */
            Action::Reduce(ProdID::Expr2), /* 6(-) */
            Action::Shift(StateID(6)),     /* 7(*) */
            Action::Shift(StateID(7)),     /* 8(/) */
            Action::Reduce(ProdID::Expr2), /* 9(newline) */
        ],
        /* STATE 9 */ [
            Action::Reduce(ProdID::Expr3), /* 3(end) */
            Action::Error,                 /* 4(num) */
            Action::Reduce(ProdID::Expr3), /* 5(+) */
            Action::Reduce(ProdID::Expr3), /* 6(-) */
            Action::Shift(StateID(6)),     /* 7(*) */
            Action::Shift(StateID(7)),     /* 8(/) */
            Action::Reduce(ProdID::Expr3), /* 9(newline) */
        ],
        /* STATE 10 */ [
            Action::Reduce(ProdID::Expr4), /* 3(end) */
            Action::Error,                 /* 4(num) */
            Action::Reduce(ProdID::Expr4), /* 5(+) */
            Action::Reduce(ProdID::Expr4), /* 6(-) */
            Action::Reduce(ProdID::Expr4), /* 7(*) */
            Action::Reduce(ProdID::Expr4), /* 8(/) */
            Action::Reduce(ProdID::Expr4), /* 9(newline) */
        ],
        /* STATE 11 */ [
            Action::Reduce(ProdID::Expr5), /* 3(end) */
            Action::Error,                 /* 4(num) */
            Action::Reduce(ProdID::Expr5), /* 5(+) */
            Action::Reduce(ProdID::Expr5), /* 6(-) */
            Action::Reduce(ProdID::Expr5), /* 7(*) */
            Action::Reduce(ProdID::Expr5), /* 8(/) */
            Action::Reduce(ProdID::Expr5), /* 9(newline) */
        ],
    ];

    const GOTO: &'static [[Option<StateID>; TokenID::COUNT_NONTERMINALS]] = &[
        /* STATE 0 */ [None, Some(StateID(1)), Some(StateID(2))],
        /* STATE 1 */ [None, None, None],
        /* STATE 2 */ [None, None, None],
        /* STATE 3 */ [None, None, None],
        /* STATE 4 */ [None, None, Some(StateID(8))],
        /* STATE 5 */ [None, None, Some(StateID(9))],
        /* STATE 6 */ [None, None, Some(StateID(10))],
        /* STATE 7 */ [None, None, Some(StateID(11))],
        /* STATE 8 */ [None, None, None],
        /* STATE 9 */ [None, None, None],
        /* STATE 10 */ [None, None, None],
        /* STATE 11 */ [None, None, None],
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> Self::StateID {
        StateID(0)
    }
    #[inline]
    fn lookup(state_id: StateID, token_id: TokenID) -> Action {
        let Some(column) = Into::<usize>::into(token_id).checked_sub(TokenID::COUNT_NONTERMINALS)
        else {
            return Action::Error;
        };
        Self::TAB[Into::<usize>::into(state_id)][column]
    }
    #[inline]
    fn goto(state_id: StateID, token_id: TokenID) -> Option<StateID> {
        Self::GOTO[Into::<usize>::into(state_id)]
            .get(Into::<usize>::into(token_id))
            .copied()
            .flatten()
    }
}
