use crate::model::{Model, Operation, StateId, StateMatch};
use crate::{Log, ParseError, Parser, Token};
use once_cell::sync::OnceCell;

/// A stack frame opened by a PUSH transition: the state to resume in after
/// the matching POP, the token that owns the nested construct, the child
/// accumulator saved from the outer context, and whether the pushing state
/// emits tokens.
struct Frame<'m> {
    resume: StateId,
    token: Token<'m>,
    saved: Vec<Token<'m>>,
    emit: bool,
}

impl Parser {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            log: OnceCell::new(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Set a log label to debug the parser.
    /// Based on the level of the [Log], the parser will trace each step.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Tokenize a command line into the raw token forest.
    ///
    /// The driver matches the current state's compound pattern at the
    /// cursor, emits a token for the matched group, resolves a transition
    /// and applies its stack operation, until an END transition fires. On
    /// success the stack is empty and the cursor sits at the end of the
    /// line; a non-empty stack reports [ParseError::EndOfLine] and leftover
    /// input reports [ParseError::IncompleteParsing].
    pub fn tokenize<'p>(&'p self, line: &str) -> Result<Vec<Token<'p>>, ParseError> {
        let mut state_id = self.model.start();
        let mut stack: Vec<Frame<'p>> = Vec::new();
        let mut children: Vec<Token<'p>> = Vec::new();
        let mut cursor: usize = 0;

        #[cfg(debug_assertions)]
        let debug = self.log.get().map_or(Log::None, |s| *s);

        loop {
            let state = self.model.state(state_id);
            let StateMatch {
                length,
                group,
                text,
            } = match state.match_at(&line[cursor..]) {
                Some(matched) => matched,
                None => {
                    #[cfg(debug_assertions)]
                    if debug.order() >= Log::Default(()).order() {
                        println!("{}: no group matched at {} of {:?}", debug, cursor, line);
                    }
                    return Err(ParseError::invalid_token(line, cursor));
                }
            };
            let token = Token::new(text, group, Vec::new());

            let transition = state
                .find_transition(group, stack.last().map(|frame| frame.resume), state_id)
                .ok_or_else(|| ParseError::non_existent_transition(line, cursor + length))?;

            // A zero-width match that changes neither the state nor the
            // stack would loop forever.
            if length == 0
                && transition.target == Some(state_id)
                && !matches!(
                    transition.operation,
                    Operation::Push | Operation::Pop | Operation::End
                )
            {
                return Err(ParseError::invalid_token(line, cursor));
            }
            cursor += length;

            #[cfg(debug_assertions)]
            if debug.order() >= Log::Verbose(()).order() {
                println!(
                    "{}: group '{}' matched {:?} ({} -> {:?})",
                    debug,
                    group.name(),
                    token.matched(),
                    transition.operation,
                    transition.target
                );
            }

            match transition.operation {
                Operation::Push => {
                    stack.push(Frame {
                        resume: transition.value,
                        token,
                        saved: std::mem::take(&mut children),
                        emit: state.tokenize(),
                    });
                }
                Operation::Pop => {
                    if state.tokenize() {
                        children.push(token);
                    }
                    let frame = match stack.pop() {
                        Some(frame) => frame,
                        None => return Err(ParseError::end_of_line(line, cursor)),
                    };
                    let mut opened = frame.token;
                    opened.push_children(std::mem::replace(&mut children, frame.saved));
                    if frame.emit {
                        children.push(opened);
                    }
                }
                Operation::End => {
                    if state.tokenize() {
                        children.push(token);
                    }
                    break;
                }
                Operation::None | Operation::Peek => {
                    if state.tokenize() {
                        children.push(token);
                    }
                }
            }

            if let Some(target) = transition.target {
                state_id = target;
            }
        }

        if !stack.is_empty() {
            #[cfg(debug_assertions)]
            if debug.order() >= Log::Default(()).order() {
                println!("{}: {} frames left open at end of line", debug, stack.len());
            }
            return Err(ParseError::end_of_line(line, cursor));
        }
        if cursor < line.len() {
            return Err(ParseError::incomplete_parsing(line, cursor));
        }

        #[cfg(debug_assertions)]
        if debug.order() >= Log::Success(()).order() {
            println!("[{}; Tokenization success]", debug);
        }
        Ok(children)
    }
}
