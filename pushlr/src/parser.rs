use crate::ParseError;
use smartstring::alias::String;
use std::fmt::Debug;

/// A single cell of the action table.
///
/// Unmapped cells are [`ParserAction::Error`]; there is no "absent" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP>
where
    US: ParserStateID,
    UP: ParserProdID,
{
    Error,
    Accept,
    Shift(US),
    Reduce(UP),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type TokenID: ParserTokenID;

    const COUNT: usize;

    fn label(&self) -> &'static str;
    fn lhs_token_id(&self) -> Self::TokenID;
    fn size(&self) -> usize;
}

pub trait ParserTokenID: Copy + Debug + Eq + Into<usize> {
    const COUNT_NONTERMINALS: usize;
    const COUNT_TERMINALS: usize;
    const COUNT: usize;

    fn label(&self) -> &'static str;

    /// The end-of-input marker. Accepting on it finishes the session.
    fn is_end(&self) -> bool;

    /// A sentence separator. Accepting on it completes one statement and the
    /// session goes on; it is also where resynchronization resumes.
    fn is_sync(&self) -> bool;
}

pub type Action<D> = ParserAction<<D as ParserData>::StateID, <D as ParserData>::ProdID>;

/// Precomputed automaton tables.
pub trait ParserData {
    type StateID: ParserStateID;
    type TokenID: ParserTokenID;
    type ProdID: ParserProdID<TokenID = Self::TokenID>;

    fn start_state() -> Self::StateID;

    /// Action for a terminal in the given state. Never fails.
    fn lookup(state_id: Self::StateID, token_id: Self::TokenID) -> Action<Self>;

    /// Successor state after reducing to a nonterminal.
    fn goto(state_id: Self::StateID, token_id: Self::TokenID) -> Option<Self::StateID>;
}

pub trait Token: Debug {
    type TokenID: ParserTokenID;

    fn token_id(&self) -> Self::TokenID;
}

/// Semantic hooks invoked by the [`Parser`] engine.
pub trait ParserDriver {
    type ParserData: ParserData;
    type Token: Token<TokenID = <Self::ParserData as ParserData>::TokenID>;
    type Error: std::error::Error + 'static;

    /// Computes the value of `prod_id` from its right-hand side.
    ///
    /// `rhs` holds exactly `prod_id.size()` tokens in left-to-right order.
    /// `lookahead` is the token that triggered the reduction; it is not
    /// consumed.
    fn reduce(
        &mut self,
        prod_id: <Self::ParserData as ParserData>::ProdID,
        rhs: Vec<Self::Token>,
        lookahead: &Self::Token,
    ) -> Result<Self::Token, Self::Error>;
}

type StateID<D> = <<D as ParserDriver>::ParserData as ParserData>::StateID;
type ProdID<D> = <<D as ParserDriver>::ParserData as ParserData>::ProdID;
type DriverError<D> = ParseError<<D as ParserDriver>::Token, <D as ParserDriver>::Error>;

/// Outcome of feeding one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The token was shifted; the sentence is not complete yet.
    Shifted,
    /// The token was discarded while looking for a synchronizing token.
    Skipped,
    /// A synchronizing token ended recovery; the stack was reset.
    Resynced,
    /// A sentence terminated by a synchronizing token was reduced.
    Statement(T),
    /// The end-of-input token was consumed in the accepting state.
    Accept(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserStatus {
    Running,
    Recovering,
    Finished,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Discard tokens up to the next synchronizing token after an error
    /// instead of finishing the session.
    pub resync: bool,
    /// Upper bound on the number of stack entries, the initial one included.
    pub max_depth: Option<usize>,
}

impl ParserOptions {
    pub fn resync(mut self, resync: bool) -> Self {
        self.resync = resync;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub statements: usize,
    pub accepts: usize,
    pub errors: usize,
    pub skipped: usize,
}

/// Push-driven shift-reduce engine.
///
/// The caller hands tokens to [`Parser::feed`] one at a time. Each call runs
/// as many reductions as the token triggers and then shifts, accepts or fails.
pub struct Parser<D>
where
    D: ParserDriver,
{
    driver: D,
    options: ParserOptions,
    tokens: Vec<D::Token>,
    states: Vec<StateID<D>>,
    status: ParserStatus,
    position: usize,
    stats: ParserStats,
}

impl<D> Parser<D>
where
    D: ParserDriver,
{
    pub fn new(driver: D) -> Self {
        Self::with_options(driver, ParserOptions::default())
    }

    pub fn with_options(driver: D, options: ParserOptions) -> Self {
        Self {
            driver,
            options,
            tokens: Vec::new(),
            states: vec![<D::ParserData as ParserData>::start_state()],
            status: ParserStatus::Running,
            position: 0,
            stats: ParserStats::default(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn status(&self) -> ParserStatus {
        self.status
    }

    /// Zero-based index of the next token to be fed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of stack entries, the initial one included.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    /// Brings the engine back to its freshly created state.
    pub fn reset(&mut self) {
        self.clear();
        self.status = ParserStatus::Running;
        self.position = 0;
        self.stats = ParserStats::default();
    }

    /// Feeds one token.
    ///
    /// Without resynchronization the first error finishes the session and
    /// every later call returns [`ParseError::Finished`]. Refused tokens do
    /// not advance [`Parser::position`].
    ///
    /// An end-of-input token on an empty stack is a syntax error unless a
    /// statement was completed earlier in the session. So is an end-of-input
    /// token that arrives while a malformed sentence is being skipped.
    pub fn feed(&mut self, token: D::Token) -> Result<Step<D::Token>, DriverError<D>> {
        if self.status == ParserStatus::Finished {
            return Err(ParseError::Finished {
                position: self.position,
            });
        }
        let position = self.position;
        self.position += 1;
        self.stats.tokens += 1;
        let token_id = token.token_id();

        match self.status {
            ParserStatus::Recovering if token_id.is_sync() => {
                log::debug!("Resync on {:?} at {}", token_id, position);
                self.clear();
                self.status = ParserStatus::Running;
                return Ok(Step::Resynced);
            }
            ParserStatus::Recovering if token_id.is_end() => {
                // the sentence being skipped is left unfinished
                let err = ParseError::Syntax {
                    token,
                    state: self.top_state().into(),
                    position,
                };
                log::debug!("{}", err);
                self.stats.errors += 1;
                self.status = ParserStatus::Finished;
                self.clear();
                return Err(err);
            }
            ParserStatus::Recovering => {
                log::trace!("Skip {:?}", token);
                self.stats.skipped += 1;
                return Ok(Step::Skipped);
            }
            ParserStatus::Running | ParserStatus::Finished => (),
        }

        match self.step(token, position) {
            Ok(step) => Ok(step),
            Err(err) => {
                log::debug!("{}", err);
                self.stats.errors += 1;
                self.status = if !self.options.resync || !err.is_recoverable() || token_id.is_end()
                {
                    ParserStatus::Finished
                } else if token_id.is_sync() {
                    self.clear();
                    ParserStatus::Running
                } else {
                    ParserStatus::Recovering
                };
                Err(err)
            }
        }
    }

    /// Feeds every token in order and collects the completed sentences.
    ///
    /// Stops at the first error, or after the end-of-input token is accepted.
    pub fn feed_all<I>(&mut self, tokens: I) -> Result<Vec<D::Token>, DriverError<D>>
    where
        I: IntoIterator<Item = D::Token>,
    {
        let mut out = Vec::new();
        for token in tokens {
            match self.feed(token)? {
                Step::Statement(t) => out.push(t),
                Step::Accept(t) => {
                    out.push(t);
                    break;
                }
                Step::Shifted | Step::Skipped | Step::Resynced => (),
            }
        }
        Ok(out)
    }

    fn step(&mut self, token: D::Token, position: usize) -> Result<Step<D::Token>, DriverError<D>> {
        let token_id = token.token_id();
        if log::log_enabled!(log::Level::Trace) {
            self.dump_state(&token);
        }
        if token_id.is_end() && self.tokens.is_empty() && self.stats.statements == 0 {
            // an empty sentence may only close a session that completed a statement
            return Err(ParseError::Syntax {
                token,
                state: self.top_state().into(),
                position,
            });
        }
        loop {
            let state = self.top_state();
            match <D::ParserData as ParserData>::lookup(state, token_id) {
                ParserAction::Shift(new_state) => {
                    log::trace!("Shift {:?}", new_state);
                    self.push(new_state, token)?;
                    self.stats.shifts += 1;
                    return Ok(Step::Shifted);
                }

                ParserAction::Reduce(prod_id) => {
                    log::trace!("Reduce {:?}({})", prod_id, prod_id.label());
                    self.reduce(prod_id, &token, position)?;
                    self.stats.reductions += 1;
                    if log::log_enabled!(log::Level::Trace) {
                        self.dump_state(&token);
                    }
                }

                ParserAction::Accept => {
                    log::trace!("Accept on {:?}", token_id);
                    debug_assert_eq!(self.tokens.len(), 1);
                    let value = self.tokens.pop().ok_or(ParseError::StackUnderflow)?;
                    self.clear();
                    if token_id.is_end() {
                        self.status = ParserStatus::Finished;
                        self.stats.accepts += 1;
                        return Ok(Step::Accept(value));
                    }
                    self.stats.statements += 1;
                    return Ok(Step::Statement(value));
                }

                ParserAction::Error => {
                    return Err(ParseError::Syntax {
                        token,
                        state: state.into(),
                        position,
                    });
                }
            }
        }
    }

    fn reduce(
        &mut self,
        prod_id: ProdID<D>,
        lookahead: &D::Token,
        position: usize,
    ) -> Result<(), DriverError<D>> {
        let size = prod_id.size();
        let at = self
            .tokens
            .len()
            .checked_sub(size)
            .ok_or(ParseError::StackUnderflow)?;
        let rhs = self.tokens.split_off(at);
        self.states.truncate(self.states.len() - size);

        let value = self
            .driver
            .reduce(prod_id, rhs, lookahead)
            .map_err(|source| ParseError::Semantic {
                prod: prod_id.label(),
                position,
                source,
            })?;

        let state = self.top_state();
        let lhs_id = prod_id.lhs_token_id();
        let Some(new_state) = <D::ParserData as ParserData>::goto(state, lhs_id) else {
            return Err(ParseError::MissingGoto {
                state: state.into(),
                nonterminal: lhs_id.label(),
            });
        };
        self.push(new_state, value)
    }

    fn push(&mut self, state: StateID<D>, token: D::Token) -> Result<(), DriverError<D>> {
        if let Some(max_depth) = self.options.max_depth {
            if self.states.len() >= max_depth {
                return Err(ParseError::StackOverflow { max_depth });
            }
        }
        self.tokens.push(token);
        self.states.push(state);
        Ok(())
    }

    fn top_state(&self) -> StateID<D> {
        self.states
            .last()
            .copied()
            .unwrap_or_else(<D::ParserData as ParserData>::start_state)
    }

    fn clear(&mut self) {
        self.tokens.clear();
        self.states.clear();
        self.states.push(<D::ParserData as ParserData>::start_state());
    }

    fn dump_state(&self, incoming: &D::Token) {
        let mut output = String::new();
        for (i, state) in self.states.iter().enumerate() {
            output.push_str(&format!("<{:?}>  ", state));
            if let Some(token) = self.tokens.get(i) {
                output.push_str(&format!("{:?}  ", token));
            }
        }
        output.push_str(&format!("<-  {:?}", incoming));
        log::trace!("{}", output);
    }
}
