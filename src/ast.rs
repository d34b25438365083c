/// Ordered sequence of directives: the whole file, or one directive's body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub directives: Vec<Directive>,
}

/// A named statement with arguments, ended by `;` or by a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub args: Vec<String>,
    /// Present iff the directive was written with `{ ... }` instead of `;`.
    pub body: Option<Block>,
}

impl Block {
    #[must_use]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }

    /// First directive with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }

    /// All directives with the given name, in source order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Directive> + 'a {
        self.directives.iter().filter(move |d| d.name == name)
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}

impl IntoIterator for Block {
    type Item = Directive;
    type IntoIter = std::vec::IntoIter<Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}

impl Directive {
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Argument at `index`, if present.
    #[must_use]
    pub fn arg_at(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
