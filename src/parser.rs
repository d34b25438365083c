use std::fmt;

use crate::ast::{Block, Directive};
use crate::group::GroupedNode;
use crate::options::ParseOptions;
use crate::token::{Span, TokenKind};

/// Classifies a block-building error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// A directive must start with a string, found something else.
    ExpectedDirectiveName { found: String },
    /// The block ended before the directive saw `;` or `{ ... }`.
    UnterminatedDirective { name: String },
    /// After the name and arguments, neither `;` nor `{ ... }` followed.
    ExpectedTerminatorOrBlock { found: String },
    /// Blocks nested deeper than the configured limit.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for BuildErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedDirectiveName { found } => {
                write!(f, "expected directive name, got {found}")
            }
            Self::UnterminatedDirective { name } => {
                write!(
                    f,
                    "unexpected end of block in directive '{name}', \
                     expected ';' or '{{'"
                )
            }
            Self::ExpectedTerminatorOrBlock { found } => {
                write!(f, "expected ';' or '{{', got {found}")
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "blocks nested deeper than {limit} levels")
            }
        }
    }
}

/// Error produced while interpreting grouped nodes as directives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct BuildError {
    pub kind: BuildErrorKind,
    pub span: Span,
}

/// Build a directive tree using the default [`ParseOptions`].
///
/// # Errors
///
/// Returns `BuildError` when the nodes do not follow
/// `STRING STRING* ( ';' | '{' Block '}' )`.
pub fn build_block(nodes: &[GroupedNode]) -> Result<Block, BuildError> {
    build_block_with(nodes, &ParseOptions::default())
}

/// Interpret grouped nodes as a block of directives.
///
/// Each group that ends a directive is built recursively into that
/// directive's body.
///
/// # Errors
///
/// Returns `BuildError` on grammar violations or when nested bodies
/// exceed `options.max_depth`.
pub fn build_block_with(
    nodes: &[GroupedNode],
    options: &ParseOptions,
) -> Result<Block, BuildError> {
    let result = BlockBuilder::new(nodes, 0, options.max_depth).build();

    #[cfg(feature = "tracing")]
    {
        match &result {
            Ok(block) => tracing::debug!(directives = block.len(), "built block"),
            Err(e) => tracing::debug!(error = %e, "block building failed"),
        }
    }

    result
}

/// A directive whose name has been read but whose end has not.
struct Pending {
    name: String,
    span: Span,
    args: Vec<String>,
}

impl Pending {
    fn finish(self, body: Option<Block>) -> Directive {
        Directive {
            name: self.name,
            args: self.args,
            body,
        }
    }
}

enum State {
    ExpectName,
    ExpectArgsOrTerminator(Pending),
}

struct BlockBuilder<'a> {
    nodes: &'a [GroupedNode],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> BlockBuilder<'a> {
    const fn new(nodes: &'a [GroupedNode], depth: usize, max_depth: usize) -> Self {
        Self {
            nodes,
            pos: 0,
            depth,
            max_depth,
        }
    }

    fn next_node(&mut self) -> Option<&'a GroupedNode> {
        let node = self.nodes.get(self.pos)?;
        self.pos += 1;
        Some(node)
    }

    fn build(mut self) -> Result<Block, BuildError> {
        let mut directives = Vec::new();
        let mut state = State::ExpectName;

        loop {
            state = match state {
                State::ExpectName => {
                    let Some(node) = self.next_node() else {
                        break;
                    };
                    State::ExpectArgsOrTerminator(Self::start_directive(node)?)
                }
                State::ExpectArgsOrTerminator(mut pending) => {
                    let Some(node) = self.next_node() else {
                        return Err(BuildError {
                            kind: BuildErrorKind::UnterminatedDirective { name: pending.name },
                            span: pending.span,
                        });
                    };
                    match node {
                        GroupedNode::Leaf(token) => match &token.kind {
                            TokenKind::StringLiteral(arg) => {
                                pending.args.push(arg.clone());
                                State::ExpectArgsOrTerminator(pending)
                            }
                            TokenKind::Semicolon => {
                                directives.push(pending.finish(None));
                                State::ExpectName
                            }
                            TokenKind::OpenBrace | TokenKind::CloseBrace => {
                                return Err(BuildError {
                                    kind: BuildErrorKind::ExpectedTerminatorOrBlock {
                                        found: token.kind.to_string(),
                                    },
                                    span: token.span,
                                });
                            }
                        },
                        GroupedNode::Group { nodes, open, .. } => {
                            let body = self.build_nested(nodes, *open)?;
                            directives.push(pending.finish(Some(body)));
                            State::ExpectName
                        }
                    }
                }
            };
        }

        Ok(Block { directives })
    }

    fn start_directive(node: &GroupedNode) -> Result<Pending, BuildError> {
        match node {
            GroupedNode::Leaf(token) => match &token.kind {
                TokenKind::StringLiteral(name) => Ok(Pending {
                    name: name.clone(),
                    span: token.span,
                    args: Vec::new(),
                }),
                _ => Err(BuildError {
                    kind: BuildErrorKind::ExpectedDirectiveName {
                        found: token.kind.to_string(),
                    },
                    span: token.span,
                }),
            },
            GroupedNode::Group { .. } => Err(BuildError {
                kind: BuildErrorKind::ExpectedDirectiveName {
                    found: node.describe(),
                },
                span: node.span(),
            }),
        }
    }

    fn build_nested(&self, nodes: &[GroupedNode], open: Span) -> Result<Block, BuildError> {
        if self.depth >= self.max_depth {
            return Err(BuildError {
                kind: BuildErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                span: open,
            });
        }
        BlockBuilder::new(nodes, self.depth + 1, self.max_depth).build()
    }
}
