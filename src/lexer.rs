use crate::token::{Span, Token, TokenKind};

/// Tokenize configuration source into a flat sequence of tokens.
///
/// Whitespace and `#` line comments are dropped. Every other byte
/// belongs to a `;`, `{`, `}` or string literal token, so this never
/// fails; empty input yields an empty sequence.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens = Lexer::new(input).tokenize();

    #[cfg(feature = "tracing")]
    tracing::debug!(tokens = tokens.len(), bytes = input.len(), "tokenized input");

    tokens
}

struct Lexer<'a> {
    source: &'a str,
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

const fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}

const fn is_delimiter(ch: u8) -> bool {
    is_whitespace(ch) || matches!(ch, b'#' | b';' | b'{' | b'}')
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let start = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            source,
            input: bytes,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                b'#' => self.skip_comment(),
                ch if is_whitespace(ch) => self.advance(),
                b';' => tokens.push(self.punct(TokenKind::Semicolon)),
                b'{' => tokens.push(self.punct(TokenKind::OpenBrace)),
                b'}' => tokens.push(self.punct(TokenKind::CloseBrace)),
                _ => tokens.push(self.read_literal()),
            }
        }

        tokens
    }

    const fn span(&self) -> Span {
        Span::new(self.pos, self.line, self.col)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            if ch == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn punct(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.span());
        self.advance();
        token
    }

    /// Skip from `#` up to, but not including, the next newline.
    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|ch| ch != b'\n') {
            self.advance();
        }
    }

    fn read_literal(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;

        while self.peek().is_some_and(|ch| !is_delimiter(ch)) {
            self.advance();
        }

        // Delimiters are ASCII, so both ends fall on char boundaries.
        let text = self.source[start..self.pos].to_string();
        Token::new(TokenKind::StringLiteral(text), span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(input: &str) -> Vec<String> {
        tokenize(input)
            .into_iter()
            .filter_map(|t| t.kind.as_str().map(str::to_string))
            .collect()
    }

    #[test]
    fn simple_words() {
        let tokens = tokenize("listen 80");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral("listen".into()));
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral("80".into()));
    }

    #[test]
    fn punctuation() {
        let kinds: Vec<_> = tokenize("a{;}").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::StringLiteral("a".into()),
                TokenKind::OpenBrace,
                TokenKind::Semicolon,
                TokenKind::CloseBrace,
            ]
        );
    }

    #[test]
    fn comment_and_whitespace_elided() {
        assert_eq!(
            literals("# comment\n   hello world\ngoodbye"),
            vec!["hello", "world", "goodbye"]
        );
    }

    #[test]
    fn comment_ends_literal() {
        assert_eq!(literals("abc#def\nghi"), vec!["abc", "ghi"]);
    }

    #[test]
    fn comment_at_end_of_input() {
        assert!(tokenize("   # trailing").is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn crlf_is_whitespace() {
        assert_eq!(literals("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn bom_stripping() {
        assert_eq!(literals("\u{FEFF}server"), vec!["server"]);
    }

    #[test]
    fn non_ascii_literal() {
        assert_eq!(literals("server_name café.example;"), vec!["server_name", "café.example"]);
    }

    #[test]
    fn span_tracking() {
        let tokens = tokenize("a\n  b;");
        assert_eq!(tokens[0].span, Span::new(0, 1, 1));
        assert_eq!(tokens[1].span, Span::new(4, 2, 3));
        assert_eq!(tokens[2].span, Span::new(5, 2, 4));
    }
}
