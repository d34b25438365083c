use crate::ast::{Block, Directive};

impl Block {
    /// Create a new empty block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Append a directive.
    #[must_use]
    pub fn directive(mut self, d: Directive) -> Self {
        self.directives.push(d);
        self
    }
}

impl FromIterator<Directive> for Block {
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        Self {
            directives: iter.into_iter().collect(),
        }
    }
}

impl Directive {
    /// Create a new `;`-terminated directive with no arguments.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            args: Vec::new(),
            body: None,
        }
    }

    /// Add one argument.
    #[must_use]
    pub fn arg(mut self, value: &str) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Add several arguments in order.
    #[must_use]
    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Give this directive a nested block instead of a terminator.
    #[must_use]
    pub fn body(mut self, block: Block) -> Self {
        self.body = Some(block);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_nested() {
        let block = Block::new().directive(
            Directive::new("server").body(
                Block::new()
                    .directive(Directive::new("listen").arg("80"))
                    .directive(Directive::new("allowed_methods").args(["GET", "POST"])),
            ),
        );

        let server = block.get("server").expect("server directive");
        assert!(server.has_body());
        let body = server.body.as_ref().expect("body");
        assert_eq!(body.len(), 2);
        assert_eq!(body.directives[1].args, vec!["GET", "POST"]);
    }

    #[test]
    fn collect_into_block() {
        let block: Block = ["a", "b"].into_iter().map(Directive::new).collect();
        assert_eq!(block.len(), 2);
        assert!(block.iter().all(|d| !d.has_body()));
    }

    #[test]
    fn build_default() {
        assert_eq!(Block::default(), Block::new());
        assert!(Block::new().is_empty());
    }
}
