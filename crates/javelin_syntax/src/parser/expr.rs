/// Expression parsing methods.
///
/// This chunk implements the expression grammar as a precedence ladder, low to
/// high: assignment → ternary → `||` → `&&` → equality → relational →
/// additive → multiplicative → unary → postfix `++`/`--` → `.`-access →
/// primary.
///
/// ## Notes
/// - Plain `=` is not parsed as an operator: the assignment level parses its
///   target as an ordinary expression and then rewrites the node (`Name` →
///   `Assign`, `GetAttribute` → `SetAttribute`, `GetStaticAttribute` →
///   `SetStaticAttribute`). Anything else is an invalid assignment target.
/// - `this_class` is `Some` inside class bodies and `None` for standalone
///   expressions; unqualified calls need it to resolve.
impl Parser {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        self.parse_assignment(this_class)
    }

    fn parse_assignment(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let target = self.parse_ternary(this_class)?;
        if self.match_symbol(SymbolId::Eq)? {
            let value = Box::new(self.parse_assignment(this_class)?);
            return rewrite_assignment(target, value);
        }
        const COMPOUND: [(SymbolId, Op); 5] = [
            (SymbolId::PlusEq, Op::AddAssign),
            (SymbolId::MinusEq, Op::SubAssign),
            (SymbolId::StarEq, Op::MulAssign),
            (SymbolId::SlashEq, Op::DivAssign),
            (SymbolId::PercentEq, Op::RemAssign),
        ];
        for (symbol, op) in COMPOUND {
            if self.match_symbol(symbol)? {
                let value = self.parse_assignment(this_class)?;
                return Ok(binary(op, target, value));
            }
        }
        Ok(target)
    }

    /// Right-associative `cond ? consequent : alternate`, one operator node
    /// with three operands.
    fn parse_ternary(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let condition = self.parse_or(this_class)?;
        if self.match_symbol(SymbolId::Question)? {
            let consequent = self.parse_expression(this_class)?;
            self.expect_symbol(SymbolId::Colon)?;
            let alternate = self.parse_ternary(this_class)?;
            let token = condition.token().clone();
            return Ok(Expr::Operator {
                token,
                op: Op::Ternary,
                args: vec![condition, consequent, alternate],
            });
        }
        Ok(condition)
    }

    fn parse_or(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut left = self.parse_and(this_class)?;
        while self.match_symbol(SymbolId::PipePipe)? {
            let right = self.parse_and(this_class)?;
            left = binary(Op::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut left = self.parse_equality(this_class)?;
        while self.match_symbol(SymbolId::AmpAmp)? {
            let right = self.parse_equality(this_class)?;
            left = binary(Op::And, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut left = self.parse_relational(this_class)?;
        loop {
            let op = if self.match_symbol(SymbolId::EqEq)? {
                Op::Eq
            } else if self.match_symbol(SymbolId::NotEq)? {
                Op::Ne
            } else {
                return Ok(left);
            };
            let right = self.parse_relational(this_class)?;
            left = binary(op, left, right);
        }
    }

    fn parse_relational(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut left = self.parse_additive(this_class)?;
        loop {
            let op = if self.match_symbol(SymbolId::Lt)? {
                Op::Lt
            } else if self.match_symbol(SymbolId::LtEq)? {
                Op::Le
            } else if self.match_symbol(SymbolId::Gt)? {
                Op::Gt
            } else if self.match_symbol(SymbolId::GtEq)? {
                Op::Ge
            } else {
                return Ok(left);
            };
            let right = self.parse_additive(this_class)?;
            left = binary(op, left, right);
        }
    }

    fn parse_additive(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut left = self.parse_multiplicative(this_class)?;
        loop {
            let op = if self.match_symbol(SymbolId::Plus)? {
                Op::Add
            } else if self.match_symbol(SymbolId::Minus)? {
                Op::Sub
            } else {
                return Ok(left);
            };
            let right = self.parse_multiplicative(this_class)?;
            left = binary(op, left, right);
        }
    }

    fn parse_multiplicative(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut left = self.parse_unary(this_class)?;
        loop {
            let op = if self.match_symbol(SymbolId::Star)? {
                Op::Mul
            } else if self.match_symbol(SymbolId::Slash)? {
                Op::Div
            } else if self.match_symbol(SymbolId::Percent)? {
                Op::Rem
            } else {
                return Ok(left);
            };
            let right = self.parse_unary(this_class)?;
            left = binary(op, left, right);
        }
    }

    /// Prefix `!` and `-`, right-recursive. Unary minus reuses `Op::Sub` with
    /// a single operand.
    fn parse_unary(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let op = if self.check_symbol(SymbolId::Not)? {
            Op::Not
        } else if self.check_symbol(SymbolId::Minus)? {
            Op::Sub
        } else {
            return self.parse_postfix(this_class);
        };
        let token = self.advance()?;
        let operand = self.parse_unary(this_class)?;
        Ok(Expr::Operator {
            token,
            op,
            args: vec![operand],
        })
    }

    fn parse_postfix(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut expr = self.parse_access_chain(this_class)?;
        loop {
            let op = if self.match_symbol(SymbolId::PlusPlus)? {
                Op::Inc
            } else if self.match_symbol(SymbolId::MinusMinus)? {
                Op::Dec
            } else {
                return Ok(expr);
            };
            let token = expr.token().clone();
            expr = Expr::Operator {
                token,
                op,
                args: vec![expr],
            };
        }
    }

    /// `.`-access chain on a primary: `expr.name(args)` is a method call,
    /// `expr.name` an attribute read. Attribute writes are produced later by
    /// the assignment rewrite.
    fn parse_access_chain(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let mut expr = self.parse_primary(this_class)?;
        while self.check_symbol(SymbolId::Dot)? {
            let token = self.advance()?;
            let (_, name) = self.expect_name()?;
            if self.check_symbol(SymbolId::LParen)? {
                let args = self.parse_expression_list(this_class)?;
                expr = Expr::MethodCall {
                    token,
                    owner: Box::new(expr),
                    name,
                    args,
                };
            } else {
                expr = Expr::GetAttribute {
                    token,
                    owner: Box::new(expr),
                    name,
                };
            }
        }
        Ok(expr)
    }

    fn parse_primary(&mut self, this_class: Option<&str>) -> Result<Expr, CompileError> {
        let token = self.advance()?;
        match token.kind.clone() {
            TokenKind::Keyword(KeywordId::This) => Ok(Expr::This { token }),
            TokenKind::Keyword(KeywordId::Null) => Ok(Expr::Null { token }),
            TokenKind::Keyword(KeywordId::True) => Ok(Expr::Bool { token, value: true }),
            TokenKind::Keyword(KeywordId::False) => Ok(Expr::Bool {
                token,
                value: false,
            }),
            TokenKind::Int(text) => {
                let value = text.parse::<i64>().map_err(|_| {
                    CompileError::new("Integer literal out of range", &[token.clone()])
                })?;
                Ok(Expr::Int { token, value })
            }
            TokenKind::Float(text) => {
                let value = text.parse::<f64>().map_err(|_| {
                    CompileError::new("Invalid float literal", &[token.clone()])
                })?;
                Ok(Expr::Float { token, value })
            }
            TokenKind::Str(value) => Ok(Expr::Str { token, value }),
            TokenKind::Name(name) => {
                if self.check_symbol(SymbolId::LParen)? {
                    let args = self.parse_expression_list(this_class)?;
                    match this_class {
                        Some(class_name) => Ok(Expr::StaticMethodCall {
                            token,
                            class_name: class_name.to_string(),
                            name,
                            args,
                        }),
                        None => Err(CompileError::new(
                            "Unqualified call outside of a class",
                            &[token],
                        )),
                    }
                } else {
                    Ok(Expr::Name { token, name })
                }
            }
            TokenKind::TypeName(class_name) => {
                if self.check_symbol(SymbolId::LParen)? {
                    let args = self.parse_expression_list(this_class)?;
                    Ok(Expr::New {
                        token,
                        class_name,
                        args,
                    })
                } else if self.match_symbol(SymbolId::Dot)? {
                    let (_, name) = self.expect_name()?;
                    if self.check_symbol(SymbolId::LParen)? {
                        let args = self.parse_expression_list(this_class)?;
                        Ok(Expr::StaticMethodCall {
                            token,
                            class_name,
                            name,
                            args,
                        })
                    } else {
                        Ok(Expr::GetStaticAttribute {
                            token,
                            class_name,
                            name,
                        })
                    }
                } else {
                    Err(CompileError::new("Expected expression", &[token]))
                }
            }
            TokenKind::Symbol(SymbolId::LParen) => {
                let expr = self.parse_expression(this_class)?;
                self.expect_symbol(SymbolId::RParen)?;
                Ok(expr)
            }
            _ => Err(CompileError::new("Expected expression", &[token])),
        }
    }

    /// Untyped call arguments: `( (Expression (, Expression)*)? )`
    fn parse_expression_list(
        &mut self,
        this_class: Option<&str>,
    ) -> Result<Vec<Expr>, CompileError> {
        self.expect_symbol(SymbolId::LParen)?;
        let mut args = Vec::new();
        if !self.check_symbol(SymbolId::RParen)? {
            loop {
                args.push(self.parse_expression(this_class)?);
                if !self.match_symbol(SymbolId::Comma)? {
                    break;
                }
            }
        }
        self.expect_symbol(SymbolId::RParen)?;
        Ok(args)
    }
}

/// Fold two operands into an operator node; the node's token is the left
/// operand's.
fn binary(op: Op, left: Expr, right: Expr) -> Expr {
    let token = left.token().clone();
    Expr::Operator {
        token,
        op,
        args: vec![left, right],
    }
}

/// Rewrite the target of a plain `=` into the matching assignment node.
fn rewrite_assignment(target: Expr, value: Box<Expr>) -> Result<Expr, CompileError> {
    match target {
        Expr::Name { token, name } => Ok(Expr::Assign { token, name, value }),
        Expr::GetAttribute { token, owner, name } => Ok(Expr::SetAttribute {
            token,
            owner,
            name,
            value,
        }),
        Expr::GetStaticAttribute {
            token,
            class_name,
            name,
        } => Ok(Expr::SetStaticAttribute {
            token,
            class_name,
            name,
            value,
        }),
        other => Err(CompileError::new(
            "Invalid assignment target",
            &[other.token().clone()],
        )),
    }
}
