/// Statement parsing.
///
/// `this_class` is the name of the enclosing class; it flows into expression
/// parsing so unqualified calls can be resolved against it.
impl Parser {
    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_block(&mut self, this_class: &str) -> Result<Block, CompileError> {
        let token = self.expect_symbol(SymbolId::LBrace)?;
        let mut statements = Vec::new();
        while !self.match_symbol(SymbolId::RBrace)? {
            statements.push(self.parse_statement(this_class)?);
        }
        Ok(Block { token, statements })
    }

    fn parse_statement(&mut self, this_class: &str) -> Result<Stmt, CompileError> {
        if self.check_symbol(SymbolId::LBrace)? {
            return Ok(Stmt::Block(self.parse_block(this_class)?));
        }
        if self.check_keyword(KeywordId::If)? {
            return Ok(Stmt::If(self.parse_if(this_class)?));
        }
        if self.check_keyword(KeywordId::While)? {
            return Ok(Stmt::While(self.parse_while(this_class)?));
        }
        if self.check_keyword(KeywordId::For)? {
            return Ok(Stmt::For(self.parse_for(this_class)?));
        }
        if self.check_keyword(KeywordId::Break)? {
            let token = self.advance()?;
            self.expect_symbol(SymbolId::Semicolon)?;
            return Ok(Stmt::Break { token });
        }
        if self.check_keyword(KeywordId::Continue)? {
            let token = self.advance()?;
            self.expect_symbol(SymbolId::Semicolon)?;
            return Ok(Stmt::Continue { token });
        }
        if self.check_keyword(KeywordId::Return)? {
            let token = self.advance()?;
            let value = if self.check_symbol(SymbolId::Semicolon)? {
                None
            } else {
                Some(self.parse_expression(Some(this_class))?)
            };
            self.expect_symbol(SymbolId::Semicolon)?;
            return Ok(Stmt::Return { token, value });
        }
        if self.at_declaration()? {
            return Ok(Stmt::Declaration(self.parse_declaration(this_class)?));
        }
        let token = self.peek()?.clone();
        let expr = self.parse_expression(Some(this_class))?;
        self.expect_symbol(SymbolId::Semicolon)?;
        Ok(Stmt::Expr(ExprStmt { token, expr }))
    }

    /// Declaration disambiguation, the one spot that needs two tokens of
    /// lookahead: `TYPENAME NAME` starts a declaration, while `TYPENAME .`
    /// starts a static-access expression.
    fn at_declaration(&mut self) -> Result<bool, CompileError> {
        if !matches!(self.peek()?.kind, TokenKind::TypeName(_)) {
            return Ok(false);
        }
        Ok(matches!(self.peek_next()?.kind, TokenKind::Name(_)))
    }

    /// `TYPENAME NAME (= Expression)? ;`
    fn parse_declaration(&mut self, this_class: &str) -> Result<Declaration, CompileError> {
        let (token, type_name) = self.expect_type_name()?;
        let (_, name) = self.expect_name()?;
        let value = if self.match_symbol(SymbolId::Eq)? {
            Some(self.parse_expression(Some(this_class))?)
        } else {
            None
        };
        self.expect_symbol(SymbolId::Semicolon)?;
        Ok(Declaration {
            token,
            type_name,
            name,
            value,
        })
    }

    fn parse_if(&mut self, this_class: &str) -> Result<If, CompileError> {
        let token = self.expect_keyword(KeywordId::If)?;
        self.expect_symbol(SymbolId::LParen)?;
        let condition = self.parse_expression(Some(this_class))?;
        self.expect_symbol(SymbolId::RParen)?;
        let body = self.parse_block(this_class)?;
        let alternate = if self.match_keyword(KeywordId::Else)? {
            if self.check_keyword(KeywordId::If)? {
                Some(Else::If(Box::new(self.parse_if(this_class)?)))
            } else {
                Some(Else::Block(self.parse_block(this_class)?))
            }
        } else {
            None
        };
        Ok(If {
            token,
            condition,
            body,
            alternate,
        })
    }

    fn parse_while(&mut self, this_class: &str) -> Result<While, CompileError> {
        let token = self.expect_keyword(KeywordId::While)?;
        self.expect_symbol(SymbolId::LParen)?;
        let condition = self.parse_expression(Some(this_class))?;
        self.expect_symbol(SymbolId::RParen)?;
        let body = self.parse_block(this_class)?;
        Ok(While {
            token,
            condition,
            body,
        })
    }

    /// `for ( init? ; cond? ; incr? ) Block` where `init` is a declaration or
    /// an expression statement, each consuming its own `;`.
    fn parse_for(&mut self, this_class: &str) -> Result<For, CompileError> {
        let token = self.expect_keyword(KeywordId::For)?;
        self.expect_symbol(SymbolId::LParen)?;
        let init = if self.match_symbol(SymbolId::Semicolon)? {
            None
        } else if self.at_declaration()? {
            Some(Box::new(Stmt::Declaration(self.parse_declaration(this_class)?)))
        } else {
            let token = self.peek()?.clone();
            let expr = self.parse_expression(Some(this_class))?;
            self.expect_symbol(SymbolId::Semicolon)?;
            Some(Box::new(Stmt::Expr(ExprStmt { token, expr })))
        };
        let condition = if self.check_symbol(SymbolId::Semicolon)? {
            None
        } else {
            Some(self.parse_expression(Some(this_class))?)
        };
        self.expect_symbol(SymbolId::Semicolon)?;
        let increment = if self.check_symbol(SymbolId::RParen)? {
            None
        } else {
            Some(self.parse_expression(Some(this_class))?)
        };
        self.expect_symbol(SymbolId::RParen)?;
        let body = self.parse_block(this_class)?;
        Ok(For {
            token,
            init,
            condition,
            increment,
            body,
        })
    }
}
