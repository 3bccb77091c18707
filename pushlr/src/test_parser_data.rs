/*
Tables for the grammar

    Start -> Seq
    Seq   -> x
    Seq   -> Seq x

with `end` as end of input and `sep` as sentence separator.
*/

use crate::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);
impl ParserStateID for StateID {
    const COUNT: usize = 4;
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
    Seq1 = 1,
    Seq2 = 2,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 3;

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
        "seq1",  // 1
        "seq2",  // 2
    ];

    pub const LHS_TOKENS: &[TokenID] = &[
        TokenID::Start, // 0
        TokenID::Seq,   // 1
        TokenID::Seq,   // 2
    ];

    pub const SIZES: &[usize] = &[
        1, // 0
        1, // 1
        2, // 2
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Start = 0,
    Seq = 1,

    // Terminals:
    End = 2,
    X = 3,
    Sep = 4,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 2;
    const COUNT_TERMINALS: usize = 3;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS;

    fn label(&self) -> &'static str {
        TokenID::LABELS[Into::<usize>::into(*self)]
    }
    fn is_end(&self) -> bool {
        *self == TokenID::End
    }
    fn is_sync(&self) -> bool {
        *self == TokenID::Sep
    }
}

impl From<TokenID> for usize {
    fn from(t: TokenID) -> Self {
        t as usize
    }
}

impl TokenID {
    pub const LABELS: &'static [&str] = &[
        "Start", // 0
        "Seq",   // 1
        "end",   // 2
        "x",     // 3
        "sep",   // 4
    ];
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT_TERMINALS]] = &[
        /* STATE 0 */ [
            Action::Error,              /* 2(end) */
            Action::Shift(StateID(2)), /* 3(x) */
            Action::Error,              /* 4(sep) */
        ],
        /* STATE 1 */ [
            Action::Accept,             /* 2(end) */
            Action::Shift(StateID(3)), /* 3(x) */
            Action::Accept,             /* 4(sep) */
        ],
        /* STATE 2 */ [
            Action::Reduce(ProdID::Seq1), /* 2(end) */
            Action::Reduce(ProdID::Seq1), /* 3(x) */
            Action::Reduce(ProdID::Seq1), /* 4(sep) */
        ],
        /* STATE 3 */ [
            Action::Reduce(ProdID::Seq2), /* 2(end) */
            Action::Reduce(ProdID::Seq2), /* 3(x) */
            Action::Reduce(ProdID::Seq2), /* 4(sep) */
        ],
    ];

    const GOTO: &'static [[Option<StateID>; TokenID::COUNT_NONTERMINALS]] = &[
        /* STATE 0 */ [None, Some(StateID(1))],
        /* STATE 1 */ [None, None],
        /* STATE 2 */ [None, None],
        /* STATE 3 */ [None, None],
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

/// The same automaton with the `Seq` entry of state 0 missing from the goto
/// table.
pub struct NoGotoParData;
impl NoGotoParData {
    const GOTO: &'static [[Option<StateID>; TokenID::COUNT_NONTERMINALS]] = &[
        /* STATE 0 */ [None, None],
        /* STATE 1 */ [None, None],
        /* STATE 2 */ [None, None],
        /* STATE 3 */ [None, None],
    ];
}

impl ParserData for NoGotoParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> Self::StateID {
        StateID(0)
    }
    #[inline]
    fn lookup(state_id: StateID, token_id: TokenID) -> Action {
        ParData::lookup(state_id, token_id)
    }
    #[inline]
    fn goto(state_id: StateID, token_id: TokenID) -> Option<StateID> {
        Self::GOTO[Into::<usize>::into(state_id)]
            .get(Into::<usize>::into(token_id))
            .copied()
            .flatten()
    }
}
