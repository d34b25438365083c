//! Brace matching: folds the flat token sequence into a tree where
//! every matched `{ ... }` pair becomes one [`GroupedNode::Group`].

use std::fmt;

use crate::options::ParseOptions;
use crate::token::{Span, Token, TokenKind};

/// Classifies a grouping error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupErrorKind {
    /// `{` with no `}` before the end of input.
    UnmatchedOpeningBrace,
    /// `}` with no `{` open at that level.
    UnmatchedClosingBrace,
    /// Braces nested deeper than the configured limit.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for GroupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedOpeningBrace => {
                write!(f, "no matching '}}' for '{{'")
            }
            Self::UnmatchedClosingBrace => {
                write!(f, "unexpected '}}' with no open block")
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "blocks nested deeper than {limit} levels")
            }
        }
    }
}

/// Error produced while matching braces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct GroupError {
    pub kind: GroupErrorKind,
    pub span: Span,
}

/// A token, or the contents of one matched brace pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupedNode {
    /// Any token other than a brace.
    Leaf(Token),
    /// Nodes between a matched `{` and `}`; the braces themselves are
    /// kept only as locations.
    Group {
        nodes: Vec<Self>,
        open: Span,
        close: Span,
    },
}

impl GroupedNode {
    /// Location of the leaf token, or of the opening brace of a group.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Leaf(token) => token.span,
            Self::Group { open, .. } => *open,
        }
    }

    /// Short description used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Leaf(token) => token.kind.to_string(),
            Self::Group { .. } => "'{ ... }'".to_string(),
        }
    }
}

/// Group a token sequence using the default [`ParseOptions`].
///
/// # Errors
///
/// Returns `GroupError` on unbalanced braces or excessive nesting.
pub fn group(tokens: &[Token]) -> Result<Vec<GroupedNode>, GroupError> {
    group_with(tokens, &ParseOptions::default())
}

/// Group a token sequence, folding each matched brace pair into a
/// [`GroupedNode::Group`].
///
/// # Errors
///
/// Returns `GroupError` on unbalanced braces or when nesting exceeds
/// `options.max_depth`.
pub fn group_with(
    tokens: &[Token],
    options: &ParseOptions,
) -> Result<Vec<GroupedNode>, GroupError> {
    let result = group_from(tokens, 0, 0, options.max_depth).and_then(|(nodes, end)| {
        // The only reason a scan stops early is a `}`.
        match tokens.get(end) {
            Some(stray) => Err(GroupError {
                kind: GroupErrorKind::UnmatchedClosingBrace,
                span: stray.span,
            }),
            None => Ok(nodes),
        }
    });

    #[cfg(feature = "tracing")]
    {
        match &result {
            Ok(nodes) => tracing::debug!(nodes = nodes.len(), "grouped tokens"),
            Err(e) => tracing::debug!(error = %e, "grouping failed"),
        }
    }

    result
}

/// Scan from `pos` until a `}` or the end of `tokens`.
///
/// Returns the collected nodes and the index where scanning stopped:
/// either the index of the unconsumed `}` or `tokens.len()`.
fn group_from(
    tokens: &[Token],
    mut pos: usize,
    depth: usize,
    max_depth: usize,
) -> Result<(Vec<GroupedNode>, usize), GroupError> {
    let mut nodes = Vec::new();

    while let Some(token) = tokens.get(pos) {
        match token.kind {
            TokenKind::CloseBrace => break,
            TokenKind::OpenBrace => {
                if depth >= max_depth {
                    return Err(GroupError {
                        kind: GroupErrorKind::NestingTooDeep { limit: max_depth },
                        span: token.span,
                    });
                }
                let (inner, end) = group_from(tokens, pos + 1, depth + 1, max_depth)?;
                let Some(close) = tokens.get(end) else {
                    return Err(GroupError {
                        kind: GroupErrorKind::UnmatchedOpeningBrace,
                        span: token.span,
                    });
                };
                nodes.push(GroupedNode::Group {
                    nodes: inner,
                    open: token.span,
                    close: close.span,
                });
                pos = end + 1;
            }
            TokenKind::Semicolon | TokenKind::StringLiteral(_) => {
                nodes.push(GroupedNode::Leaf(token.clone()));
                pos += 1;
            }
        }
    }

    Ok((nodes, pos))
}
