/// Declaration parsing: classes, interfaces, fields, methods, stubs.
impl Parser {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// Optional access modifier; absence means public.
    fn parse_access(&mut self) -> Result<Access, CompileError> {
        if self.match_keyword(KeywordId::Private)? {
            Ok(Access::Private)
        } else {
            self.match_keyword(KeywordId::Public)?;
            Ok(Access::Public)
        }
    }

    /// `class TYPENAME (extends TYPENAME)? (implements TYPENAME (, TYPENAME)*)?
    /// { member* }`. The class name becomes the enclosing class for every
    /// member body, which is what unqualified calls resolve against.
    fn parse_class(&mut self, token: Token, access: Access) -> Result<Class, CompileError> {
        self.expect_keyword(KeywordId::Class)?;
        let (_, name) = self.expect_type_name()?;
        let base = if self.match_contextual("extends")? {
            self.expect_type_name()?.1
        } else {
            "Object".to_string()
        };
        let mut interfaces = Vec::new();
        if self.match_contextual("implements")? {
            interfaces.push(self.expect_type_name()?.1);
            while self.match_symbol(SymbolId::Comma)? {
                interfaces.push(self.expect_type_name()?.1);
            }
        }
        self.expect_symbol(SymbolId::LBrace)?;
        let mut fields = Vec::new();
        let mut methods = Vec::new();
        while !self.match_symbol(SymbolId::RBrace)? {
            self.parse_member(&name, &mut fields, &mut methods)?;
        }
        Ok(Class {
            token,
            access,
            name,
            base,
            interfaces,
            fields,
            methods,
        })
    }

    /// One class member. Fields and methods share a prefix
    /// (`access? static? TYPENAME NAME`); a `(` after the name makes it a
    /// method.
    fn parse_member(
        &mut self,
        this_class: &str,
        fields: &mut Vec<Field>,
        methods: &mut Vec<Method>,
    ) -> Result<(), CompileError> {
        let token = self.peek()?.clone();
        let access = self.parse_access()?;
        let is_static = self.match_keyword(KeywordId::Static)?;
        let (_, type_name) = self.expect_type_name()?;
        let (_, name) = self.expect_name()?;
        if self.check_symbol(SymbolId::LParen)? {
            let args = self.parse_argument_list()?;
            let body = self.parse_block(this_class)?;
            methods.push(Method {
                token,
                access,
                is_static,
                return_type: type_name,
                name,
                args,
                body,
            });
        } else {
            let value = if self.match_symbol(SymbolId::Eq)? {
                Some(self.parse_expression(Some(this_class))?)
            } else {
                None
            };
            self.expect_symbol(SymbolId::Semicolon)?;
            fields.push(Field {
                token,
                access,
                is_static,
                type_name,
                name,
                value,
            });
        }
        Ok(())
    }

    /// `interface TYPENAME (extends TYPENAME (, TYPENAME)*)? { stub* }`
    fn parse_interface(&mut self, token: Token, access: Access) -> Result<Interface, CompileError> {
        self.expect_keyword(KeywordId::Interface)?;
        let (_, name) = self.expect_type_name()?;
        let mut bases = Vec::new();
        if self.match_contextual("extends")? {
            bases.push(self.expect_type_name()?.1);
            while self.match_symbol(SymbolId::Comma)? {
                bases.push(self.expect_type_name()?.1);
            }
        }
        self.expect_symbol(SymbolId::LBrace)?;
        let mut stubs = Vec::new();
        while !self.match_symbol(SymbolId::RBrace)? {
            stubs.push(self.parse_method_stub()?);
        }
        Ok(Interface {
            token,
            access,
            name,
            bases,
            stubs,
        })
    }

    fn parse_method_stub(&mut self) -> Result<MethodStub, CompileError> {
        let token = self.peek()?.clone();
        let access = self.parse_access()?;
        if access == Access::Private {
            return Err(CompileError::new(
                "interface methods can't be private",
                &[token],
            ));
        }
        let (_, return_type) = self.expect_type_name()?;
        let (_, name) = self.expect_name()?;
        let args = self.parse_argument_list()?;
        self.expect_symbol(SymbolId::Semicolon)?;
        Ok(MethodStub {
            token,
            access,
            return_type,
            name,
            args,
        })
    }

    /// Typed parameter list: `( (TYPENAME NAME (, TYPENAME NAME)*)? )`
    fn parse_argument_list(&mut self) -> Result<Vec<Argument>, CompileError> {
        self.expect_symbol(SymbolId::LParen)?;
        let mut args = Vec::new();
        if !self.check_symbol(SymbolId::RParen)? {
            loop {
                let (token, type_name) = self.expect_type_name()?;
                let (_, name) = self.expect_name()?;
                args.push(Argument {
                    token,
                    type_name,
                    name,
                });
                if !self.match_symbol(SymbolId::Comma)? {
                    break;
                }
            }
        }
        self.expect_symbol(SymbolId::RParen)?;
        Ok(args)
    }
}
