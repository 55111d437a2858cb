#[cfg(test)]
/// Parser unit tests.
///
/// Whole-program tests go through [`parse`]; expression-shape tests go through
/// [`parse_expression`], which has no enclosing class.
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse_str(source: &str) -> Program {
        parse("<test>", source).unwrap()
    }

    fn parse_err(source: &str) -> CompileError {
        parse("<test>", source).unwrap_err()
    }

    fn expr_str(source: &str) -> Expr {
        parse_expression(source).unwrap()
    }

    #[test]
    fn test_empty_program() {
        let program = parse_str("");
        assert!(program.classes.is_empty());
        assert!(program.interfaces.is_empty());
    }

    #[test]
    fn test_parse_interface() {
        let program = parse_str(
            "
            public interface MyInterface {
              public void myMethodStub(String message);
              public String stub2(int x, float y);
            }
            ",
        );
        assert_eq!(program.interfaces.len(), 1);
        let iface = &program.interfaces[0];
        assert_eq!(iface.name, "MyInterface");
        assert_eq!(iface.access, Access::Public);
        assert_eq!(iface.stubs.len(), 2);

        let stub = &iface.stubs[0];
        assert_eq!(stub.name, "myMethodStub");
        assert_eq!(stub.return_type, "void");
        assert_eq!(stub.args.len(), 1);
        assert_eq!(stub.args[0].type_name, "String");
        assert_eq!(stub.args[0].name, "message");

        let stub = &iface.stubs[1];
        assert_eq!(stub.name, "stub2");
        assert_eq!(stub.return_type, "String");
        assert_eq!(stub.args.len(), 2);
        assert_eq!(stub.args[0].type_name, "int");
        assert_eq!(stub.args[1].type_name, "float");
        assert_eq!(stub.args[1].name, "y");
    }

    #[test]
    fn test_parse_class() {
        let program = parse_str(
            "
            public class MyClass {
              public static void main() {
                print(\"Hi\");
                this.someMethod();
              }
            }
            ",
        );
        assert_eq!(program.classes.len(), 1);
        let class = &program.classes[0];
        assert_eq!(class.name, "MyClass");
        assert_eq!(class.base, "Object");
        assert!(class.interfaces.is_empty());
        assert_eq!(class.methods.len(), 1);

        let method = &class.methods[0];
        assert_eq!(method.name, "main");
        assert!(method.is_static);
        assert_eq!(method.return_type, "void");
        assert!(method.args.is_empty());
        assert_eq!(method.body.statements.len(), 2);

        // Unqualified calls resolve against the enclosing class.
        let Stmt::Expr(stmt) = &method.body.statements[0] else {
            panic!("expected an expression statement");
        };
        let Expr::StaticMethodCall {
            class_name,
            name,
            args,
            ..
        } = &stmt.expr
        else {
            panic!("expected a static method call, got {}", stmt.expr);
        };
        assert_eq!(class_name, "MyClass");
        assert_eq!(name, "print");
        assert_eq!(args.len(), 1);

        let Stmt::Expr(stmt) = &method.body.statements[1] else {
            panic!("expected an expression statement");
        };
        let Expr::MethodCall { owner, name, .. } = &stmt.expr else {
            panic!("expected a method call, got {}", stmt.expr);
        };
        assert!(matches!(**owner, Expr::This { .. }));
        assert_eq!(name, "someMethod");
    }

    #[test]
    fn test_extends_and_implements() {
        let program = parse_str("class Dog extends Animal implements Walker, Barker { }");
        let class = &program.classes[0];
        assert_eq!(class.access, Access::Public);
        assert_eq!(class.base, "Animal");
        assert_eq!(class.interfaces, vec!["Walker", "Barker"]);
    }

    #[test]
    fn test_interface_extends_list() {
        let program = parse_str("interface Child extends Mother, Father { }");
        assert_eq!(program.interfaces[0].bases, vec!["Mother", "Father"]);
    }

    #[test]
    fn test_fields() {
        let program = parse_str(
            "
            class Counter {
              private static int total = 0;
              public int value;
            }
            ",
        );
        let class = &program.classes[0];
        assert_eq!(class.fields.len(), 2);
        let field = &class.fields[0];
        assert_eq!(field.access, Access::Private);
        assert!(field.is_static);
        assert_eq!(field.type_name, "int");
        assert_eq!(field.name, "total");
        assert!(matches!(field.value, Some(Expr::Int { value: 0, .. })));
        let field = &class.fields[1];
        assert!(!field.is_static);
        assert!(field.value.is_none());
    }

    #[test]
    fn test_private_interface_method_rejected() {
        let error = parse_err("interface Sneaky { private void hide(); }");
        assert_eq!(error.message(), "interface methods can't be private");
    }

    #[test]
    fn test_expected_class_or_interface() {
        let error = parse_err("static");
        assert_eq!(error.message(), "Expected class or interface");
    }

    #[test]
    fn test_statements() {
        let program = parse_str(
            "
            class Demo {
              int run(int n) {
                int total = 0;
                for (int i = 0; i < n; i++) {
                  total += i;
                }
                while (false) { }
                if (total > 10) {
                  return total;
                } else if (total > 5) {
                  total--;
                } else {
                  continue;
                }
                break;
                return 0;
              }
            }
            ",
        );
        let body = &program.classes[0].methods[0].body;
        assert_eq!(body.statements.len(), 6);
        assert!(matches!(body.statements[0], Stmt::Declaration(_)));

        let Stmt::For(node) = &body.statements[1] else {
            panic!("expected a for statement");
        };
        assert!(matches!(node.init.as_deref(), Some(Stmt::Declaration(_))));
        assert!(node.condition.is_some());
        assert!(node.increment.is_some());

        assert!(matches!(body.statements[2], Stmt::While(_)));

        let Stmt::If(node) = &body.statements[3] else {
            panic!("expected an if statement");
        };
        let Some(Else::If(chained)) = &node.alternate else {
            panic!("expected a chained else-if");
        };
        assert!(matches!(chained.alternate, Some(Else::Block(_))));

        assert!(matches!(body.statements[4], Stmt::Break { .. }));
        assert!(matches!(
            body.statements[5],
            Stmt::Return { value: Some(_), .. }
        ));
    }

    #[test]
    fn test_for_with_empty_clauses() {
        let program = parse_str("class Demo { void spin() { for (;;) { break; } } }");
        let Stmt::For(node) = &program.classes[0].methods[0].body.statements[0] else {
            panic!("expected a for statement");
        };
        assert!(node.init.is_none());
        assert!(node.condition.is_none());
        assert!(node.increment.is_none());
    }

    #[test]
    fn test_declaration_vs_static_access() {
        // TYPENAME NAME is a declaration; TYPENAME . is an expression.
        let program = parse_str(
            "
            class Demo {
              void run() {
                Point origin = Point(0, 0);
                Console.log(origin);
              }
            }
            ",
        );
        let body = &program.classes[0].methods[0].body;
        let Stmt::Declaration(decl) = &body.statements[0] else {
            panic!("expected a declaration");
        };
        assert_eq!(decl.type_name, "Point");
        assert_eq!(decl.name, "origin");
        assert!(matches!(decl.value, Some(Expr::New { .. })));
        let Stmt::Expr(stmt) = &body.statements[1] else {
            panic!("expected an expression statement");
        };
        assert!(matches!(stmt.expr, Expr::StaticMethodCall { .. }));
    }

    #[test]
    fn test_parse_add_expression() {
        let Expr::Operator { op, args, .. } = expr_str("5 + 6") else {
            panic!("expected an operator node");
        };
        assert_eq!(op, Op::Add);
        assert_eq!(args.len(), 2);
        assert!(matches!(args[0], Expr::Int { value: 5, .. }));
        assert!(matches!(args[1], Expr::Int { value: 6, .. }));
    }

    #[test]
    fn test_parse_post_increment() {
        let Expr::Operator { op, args, .. } = expr_str("x++") else {
            panic!("expected an operator node");
        };
        assert_eq!(op, Op::Inc);
        assert_eq!(args.len(), 1);
        assert!(matches!(&args[0], Expr::Name { name, .. } if name == "x"));
    }

    #[test]
    fn test_parse_ternary() {
        let Expr::Operator { op, args, .. } = expr_str("1 ? 2 : 3") else {
            panic!("expected an operator node");
        };
        assert_eq!(op, Op::Ternary);
        assert_eq!(args.len(), 3);
        assert!(matches!(args[2], Expr::Int { value: 3, .. }));
    }

    #[test]
    fn test_parse_assign() {
        let Expr::Assign { name, value, .. } = expr_str("x = 1") else {
            panic!("expected an assignment");
        };
        assert_eq!(name, "x");
        assert!(matches!(*value, Expr::Int { value: 1, .. }));
    }

    #[test]
    fn test_parse_attribute_assign() {
        let Expr::SetAttribute {
            owner, name, value, ..
        } = expr_str("a.x = 1")
        else {
            panic!("expected an attribute assignment");
        };
        assert!(matches!(&*owner, Expr::Name { name, .. } if name == "a"));
        assert_eq!(name, "x");
        assert!(matches!(*value, Expr::Int { value: 1, .. }));
    }

    #[test]
    fn test_parse_static_attribute_assign() {
        let Expr::SetStaticAttribute {
            class_name, name, ..
        } = expr_str("Config.debug = true")
        else {
            panic!("expected a static attribute assignment");
        };
        assert_eq!(class_name, "Config");
        assert_eq!(name, "debug");
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let Expr::Assign { name, value, .. } = expr_str("a = b = 1") else {
            panic!("expected an assignment");
        };
        assert_eq!(name, "a");
        assert!(matches!(&*value, Expr::Assign { name, .. } if name == "b"));
    }

    #[test]
    fn test_invalid_assignment_target() {
        let error = parse_expression("1 = 2").unwrap_err();
        assert_eq!(error.message(), "Invalid assignment target");
    }

    #[test]
    fn test_compound_assignment() {
        let Expr::Operator { op, args, .. } = expr_str("x += 2") else {
            panic!("expected an operator node");
        };
        assert_eq!(op, Op::AddAssign);
        assert!(matches!(&args[0], Expr::Name { name, .. } if name == "x"));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(expr_str("1 + 2 * 3").to_string(), "(1 + (2 * 3))");
        assert_eq!(expr_str("(1 + 2) * 3").to_string(), "((1 + 2) * 3)");
        assert_eq!(expr_str("1 < 2 == true").to_string(), "((1 < 2) == true)");
        assert_eq!(
            expr_str("a || b && !c").to_string(),
            "(a || (b && !c))"
        );
        assert_eq!(expr_str("-x++").to_string(), "-x++");
        assert_eq!(expr_str("1 - -2").to_string(), "(1 - -2)");
    }

    #[test]
    fn test_new_and_static_access() {
        let Expr::New {
            class_name, args, ..
        } = expr_str("Point(1, 2)")
        else {
            panic!("expected a constructor call");
        };
        assert_eq!(class_name, "Point");
        assert_eq!(args.len(), 2);

        let Expr::StaticMethodCall {
            class_name, name, ..
        } = expr_str("Math.abs(-1)")
        else {
            panic!("expected a static method call");
        };
        assert_eq!(class_name, "Math");
        assert_eq!(name, "abs");

        let Expr::GetStaticAttribute {
            class_name, name, ..
        } = expr_str("Math.pi")
        else {
            panic!("expected a static attribute read");
        };
        assert_eq!(class_name, "Math");
        assert_eq!(name, "pi");
    }

    #[test]
    fn test_method_call_chain() {
        let Expr::MethodCall { owner, name, .. } = expr_str("a.b().c(1)") else {
            panic!("expected a method call");
        };
        assert_eq!(name, "c");
        assert!(matches!(&*owner, Expr::MethodCall { name, .. } if name == "b"));
    }

    #[test]
    fn test_literals() {
        assert!(matches!(expr_str("null"), Expr::Null { .. }));
        assert!(matches!(expr_str("this"), Expr::This { .. }));
        assert!(matches!(expr_str("true"), Expr::Bool { value: true, .. }));
        assert!(matches!(expr_str("2.5"), Expr::Float { value, .. } if value == 2.5));
        assert!(matches!(expr_str("'hi'"), Expr::Str { value, .. } if value == "hi"));
    }

    #[test]
    fn test_integer_literal_out_of_range() {
        let error = parse_expression("99999999999999999999").unwrap_err();
        assert_eq!(error.message(), "Integer literal out of range");
    }

    #[test]
    fn test_unqualified_call_outside_class() {
        let error = parse_expression("print(1)").unwrap_err();
        assert_eq!(error.message(), "Unqualified call outside of a class");
    }

    #[test]
    fn test_expression_requires_full_input() {
        let error = parse_expression("1 + 2 3").unwrap_err();
        assert_eq!(
            error.message(),
            "Expected EOF but got Token(INT, 3)"
        );
    }

    #[test]
    fn test_expect_error_attribution() {
        let error = parse_err("class lower { }");
        assert_eq!(
            error.to_string(),
            "Expected TYPENAME but got Token(NAME, lower)\nin <test>, line 1\nclass lower { }\n      *"
        );
    }

    #[test]
    fn test_bare_typename_is_not_an_expression() {
        let error = parse_expression("Point").unwrap_err();
        assert_eq!(error.message(), "Expected expression");
    }

    #[test]
    fn test_reparse_of_rendered_program_is_identical() {
        let program = parse_str(
            "
            interface Greeter { String greet(String name); }
            class Demo extends Base implements Greeter {
              private static int count = 0;
              String greet(String name) {
                count += 1;
                if (count > 1) {
                  return 'again: ' + name;
                }
                return helper(name, count * 2);
              }
            }
            ",
        );
        let rendered = program.to_string();
        let reparsed = parse("<rendered>", &rendered).unwrap();
        assert_eq!(reparsed.to_string(), rendered);
    }

    proptest! {
        #[test]
        fn prop_parsing_never_panics(input in "\\PC{0,80}") {
            let _ = parse("<prop>", &input);
        }

        #[test]
        fn prop_int_literals_round_trip(value in 0i64..=i64::MAX) {
            let expr = parse_expression(&value.to_string()).unwrap();
            prop_assert!(
                matches!(expr, Expr::Int { value: parsed, .. } if parsed == value),
                "expected integer literal to round-trip: {:?}",
                expr
            );
        }
    }
}
