//! Function signature tracker.
//!
//! A small state machine layered on top of the classifier. It recognizes
//! the punctuation of `def name(params) -> (returns):` headers so hosts
//! can tell parameter-list commas and parentheses apart from ordinary
//! grouping. It is independent of the bracket context stack.
//!
//! # Transitions
//!
//! ```text
//! Idle                   --def-->           ExpectName
//! ExpectName             --word-->          ExpectOpenAfterName
//! ExpectOpenAfterName    --(-->             InParameterList { 0 }     ParameterOpen
//! InParameterList { 0 }  --,-->             InParameterList { 0 }     ParameterSeparator
//! InParameterList { 0 }  --)-->             AfterParameters           ParameterClose
//! AfterParameters        --'->'|returns-->  ExpectOpenAfterReturns
//! ExpectOpenAfterReturns --(-->             InReturnClause { 0 }      ReturnOpen
//! InReturnClause { 0 }   --,-->             InReturnClause { 0 }      ReturnSeparator
//! InReturnClause { 0 }   --)-->             Idle                      ReturnClose
//! ```
//!
//! Nested brackets inside a list raise and lower its depth. Any signal
//! not listed sends the tracker back to `Idle`; the tracker never blocks
//! scanning and does not check arity or types.

use crate::category::PunctRole;

/// Progress through a function header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Signature {
    #[default]
    Idle,
    /// Saw `def`, waiting for the function name.
    ExpectName,
    /// Saw the name, waiting for `(`.
    ExpectOpenAfterName,
    /// Inside the parameter list; `depth` counts nested brackets.
    InParameterList { depth: u8 },
    /// Parameter list closed; a return marker may follow.
    AfterParameters,
    /// Saw `->` (or `returns`), waiting for `(` or a single return type.
    ExpectOpenAfterReturns,
    /// Inside a parenthesized return clause.
    InReturnClause { depth: u8 },
}

/// The part of a token's spelling the tracker cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenHint {
    /// The `def` keyword.
    Def,
    /// A word that can name a function.
    Name,
    /// A value-type word; `(` right after it is a conversion call.
    Type,
    /// `->` or the word `returns`.
    Returns,
}

/// Tracker state plus the hint left by the previous token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignatureTracker {
    state: Signature,
    last_hint: Option<TokenHint>,
}

impl SignatureTracker {
    /// Current state.
    #[inline]
    pub fn state(&self) -> Signature {
        self.state
    }

    /// Hint recorded for the most recent non-punctuation token.
    #[inline]
    pub fn last_hint(&self) -> Option<TokenHint> {
        self.last_hint
    }

    /// Feed a non-punctuation token.
    ///
    /// `hint` is `None` for tokens the tracker does not distinguish
    /// (numbers, strings, ordinary operators, other keywords).
    pub fn observe_token(&mut self, hint: Option<TokenHint>) {
        self.state = match (self.state, hint) {
            (state @ (Signature::InParameterList { .. } | Signature::InReturnClause { .. }), _) => {
                state
            }
            (_, Some(TokenHint::Def)) => Signature::ExpectName,
            (Signature::ExpectName, Some(TokenHint::Name | TokenHint::Type)) => {
                Signature::ExpectOpenAfterName
            }
            (Signature::AfterParameters, Some(TokenHint::Returns)) => {
                Signature::ExpectOpenAfterReturns
            }
            _ => Signature::Idle,
        };
        self.last_hint = hint;
    }

    /// Feed a punctuation character and return how it was interpreted.
    pub fn observe_punct(&mut self, ch: char) -> PunctRole {
        let after_type = self.last_hint == Some(TokenHint::Type);
        self.last_hint = None;

        let (next, role) = match self.state {
            Signature::Idle | Signature::ExpectName | Signature::AfterParameters => {
                let role = if ch == '(' && after_type {
                    PunctRole::ConversionOpen
                } else {
                    PunctRole::Grouping
                };
                (Signature::Idle, role)
            }
            Signature::ExpectOpenAfterName => match ch {
                '(' => (
                    Signature::InParameterList { depth: 0 },
                    PunctRole::ParameterOpen,
                ),
                _ => (Signature::Idle, PunctRole::Grouping),
            },
            Signature::ExpectOpenAfterReturns => match ch {
                '(' => (
                    Signature::InReturnClause { depth: 0 },
                    PunctRole::ReturnOpen,
                ),
                _ => (Signature::Idle, PunctRole::Grouping),
            },
            Signature::InParameterList { depth } => step_list(
                depth,
                ch,
                after_type,
                ListRoles {
                    separator: PunctRole::ParameterSeparator,
                    close: PunctRole::ParameterClose,
                    nested: |depth| Signature::InParameterList { depth },
                    closed: Signature::AfterParameters,
                },
            ),
            Signature::InReturnClause { depth } => step_list(
                depth,
                ch,
                after_type,
                ListRoles {
                    separator: PunctRole::ReturnSeparator,
                    close: PunctRole::ReturnClose,
                    nested: |depth| Signature::InReturnClause { depth },
                    closed: Signature::Idle,
                },
            ),
        };
        self.state = next;
        role
    }
}

/// How one kind of parenthesized list maps onto states and roles.
struct ListRoles {
    separator: PunctRole,
    close: PunctRole,
    nested: fn(u8) -> Signature,
    closed: Signature,
}

/// Shared transition for parameter lists and return clauses.
fn step_list(depth: u8, ch: char, after_type: bool, roles: ListRoles) -> (Signature, PunctRole) {
    match ch {
        '(' | '[' | '{' => {
            let role = if ch == '(' && after_type {
                PunctRole::ConversionOpen
            } else {
                PunctRole::Grouping
            };
            match depth.checked_add(1) {
                Some(depth) => ((roles.nested)(depth), role),
                None => (Signature::Idle, role),
            }
        }
        ')' | ']' | '}' if depth > 0 => ((roles.nested)(depth - 1), PunctRole::Grouping),
        ')' => (roles.closed, roles.close),
        ',' if depth == 0 => ((roles.nested)(depth), roles.separator),
        ']' | '}' | ';' => (Signature::Idle, PunctRole::Grouping),
        _ => ((roles.nested)(depth), PunctRole::Grouping),
    }
}

#[cfg(test)]
mod tests;
