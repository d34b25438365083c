//! Tokenizer, brace grouper, and directive-tree parser for
//! nginx-style configuration files.
//!
//! Parsing runs in three stages, each usable on its own:
//!
//! 1. [`tokenize`] turns text into `;`, `{`, `}` and string tokens,
//!    dropping whitespace and `#` comments.
//! 2. [`group()`] folds every matched `{ ... }` pair into a nested node.
//! 3. [`build_block`] reads the grouped nodes as directives: a name,
//!    zero or more arguments, then `;` or a nested block.
//!
//! # Quick start
//!
//! ```
//! use nginxconf_rs::{Block, Directive, parse_str};
//!
//! let block = parse_str("server {\n    listen 80;\n}\n").unwrap();
//! let expected = Block::new().directive(
//!     Directive::new("server")
//!         .body(Block::new().directive(Directive::new("listen").arg("80"))),
//! );
//! assert_eq!(block, expected);
//! ```
//!
//! ## Running the stages separately
//!
//! ```
//! use nginxconf_rs::{build_block, group, tokenize};
//!
//! let tokens = tokenize("location / { index index.html; }");
//! let nodes = group(&tokens).unwrap();
//! let block = build_block(&nodes).unwrap();
//! assert_eq!(block.directives[0].args, vec!["/"]);
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod group;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod token;

pub use ast::{Block, Directive};
pub use group::{GroupError, GroupErrorKind, GroupedNode, group, group_with};
pub use lexer::tokenize;
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
pub use parser::{BuildError, BuildErrorKind, build_block, build_block_with};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering grouping and block building.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unbalanced or too deeply nested braces.
    #[error("{0}")]
    Group(#[from] GroupError),
    /// Directive grammar violation.
    #[error("{0}")]
    Build(#[from] BuildError),
}

impl Error {
    /// Location the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Group(e) => e.span,
            Self::Build(e) => e.span,
        }
    }
}

/// Tokenize, group and build a configuration in one step.
pub fn parse_str(input: &str) -> Result<Block, Error> {
    parse_str_with(input, &ParseOptions::default())
}

/// Like [`parse_str`], with explicit options.
pub fn parse_str_with(input: &str, options: &ParseOptions) -> Result<Block, Error> {
    let tokens = tokenize(input);
    let nodes = group_with(&tokens, options)?;
    Ok(build_block_with(&nodes, options)?)
}
