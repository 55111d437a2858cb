/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_next`, `advance`)
/// - Matching / expecting keywords, symbols, and data-bearing kinds
/// - Contextual word matching for the non-reserved `extends`/`implements`
///
/// Every primitive returns `Result` because tokens are scanned on demand and
/// the lexer itself can fail mid-stream.
impl Parser {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn fill(&mut self, depth: usize) -> Result<(), CompileError> {
        while self.lookahead.len() < depth {
            let token = self.lexer.advance()?;
            self.lookahead.push_back(token);
        }
        Ok(())
    }

    /// Current token without consuming it.
    fn peek(&mut self) -> Result<&Token, CompileError> {
        self.fill(1)?;
        Ok(&self.lookahead[0])
    }

    /// Token after the current one without consuming anything. Needed only to
    /// tell declarations (`TYPENAME NAME ...`) from expressions.
    fn peek_next(&mut self) -> Result<&Token, CompileError> {
        self.fill(2)?;
        Ok(&self.lookahead[1])
    }

    /// Consume and return the current token.
    fn advance(&mut self) -> Result<Token, CompileError> {
        self.fill(1)?;
        Ok(self.lookahead.pop_front().expect("lookahead was just filled"))
    }

    fn at_eof(&mut self) -> Result<bool, CompileError> {
        Ok(matches!(self.peek()?.kind, TokenKind::Eof))
    }

    fn check_keyword(&mut self, id: KeywordId) -> Result<bool, CompileError> {
        Ok(matches!(self.peek()?.kind, TokenKind::Keyword(k) if k == id))
    }

    fn check_symbol(&mut self, id: SymbolId) -> Result<bool, CompileError> {
        Ok(matches!(self.peek()?.kind, TokenKind::Symbol(s) if s == id))
    }

    fn match_keyword(&mut self, id: KeywordId) -> Result<bool, CompileError> {
        if self.check_keyword(id)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn match_symbol(&mut self, id: SymbolId) -> Result<bool, CompileError> {
        if self.check_symbol(id)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Match a contextual word: a NAME token whose payload is `word`. Used for
    /// `extends` and `implements`, which are not reserved.
    fn match_contextual(&mut self, word: &str) -> Result<bool, CompileError> {
        let matched = matches!(&self.peek()?.kind, TokenKind::Name(name) if name == word);
        if matched {
            self.advance()?;
        }
        Ok(matched)
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Token, CompileError> {
        if self.check_keyword(id)? {
            return self.advance();
        }
        Err(self.expected(keywords::as_str(id))?)
    }

    fn expect_symbol(&mut self, id: SymbolId) -> Result<Token, CompileError> {
        if self.check_symbol(id)? {
            return self.advance();
        }
        Err(self.expected(symbols::as_str(id))?)
    }

    /// Consume a NAME token, returning it with its payload.
    fn expect_name(&mut self) -> Result<(Token, String), CompileError> {
        if let TokenKind::Name(name) = &self.peek()?.kind {
            let name = name.clone();
            let token = self.advance()?;
            return Ok((token, name));
        }
        Err(self.expected("NAME")?)
    }

    /// Consume a TYPENAME token, returning it with its payload.
    fn expect_type_name(&mut self) -> Result<(Token, String), CompileError> {
        if let TokenKind::TypeName(name) = &self.peek()?.kind {
            let name = name.clone();
            let token = self.advance()?;
            return Ok((token, name));
        }
        Err(self.expected("TYPENAME")?)
    }

    /// Build the standard mismatch error, attributing the unconsumed current
    /// token. Wrapped in `Result` because rendering it needs a `peek`, which
    /// can itself fail on a lexer error.
    fn expected(&mut self, what: &str) -> Result<CompileError, CompileError> {
        let found = self.peek()?.clone();
        Ok(CompileError::new(
            format!("Expected {what} but got {found}"),
            &[found],
        ))
    }
}
