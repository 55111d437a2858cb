/// Parser core type and top-level production.
///
/// This chunk defines the [`Parser`] type and `parse_program`, the production
/// for a whole source file.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Parser state.
///
/// Owns the lexer and pulls tokens on demand. `lookahead` holds tokens that
/// have been scanned but not yet consumed; declaration disambiguation needs up
/// to two of them.
pub struct Parser {
    lexer: Lexer,
    lookahead: VecDeque<Token>,
}

impl Parser {
    /// Create a new parser over a source buffer.
    pub fn new(source: Arc<Source>) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: VecDeque::new(),
        }
    }

    /// Parse a whole source file: any number of classes and interfaces, in any
    /// order, until end of input.
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] encountered; there is no recovery.
    pub fn parse_program(&mut self) -> Result<Program, CompileError> {
        let token = self.peek()?.clone();
        let mut classes = Vec::new();
        let mut interfaces = Vec::new();
        while !self.at_eof()? {
            // The declaration's token is its first token, before any access
            // modifier.
            let first = self.peek()?.clone();
            let access = self.parse_access()?;
            if self.check_keyword(KeywordId::Class)? {
                classes.push(self.parse_class(first, access)?);
            } else if self.check_keyword(KeywordId::Interface)? {
                interfaces.push(self.parse_interface(first, access)?);
            } else {
                let found = self.peek()?.clone();
                return Err(CompileError::new("Expected class or interface", &[found]));
            }
        }
        Ok(Program {
            token,
            classes,
            interfaces,
        })
    }
}
