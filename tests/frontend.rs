use swiftlet::ast::ast::{Expr, Stmt};
use swiftlet::errors::errors::Reporter;
use swiftlet::lexer::tokens::{LiteralValue, TokenKind};
use swiftlet::parse_source;

fn parse(source: &str) -> (Vec<Stmt>, Reporter) {
    let mut reporter = Reporter::new();
    let statements = parse_source(source, &mut reporter);
    (statements, reporter)
}

#[test]
fn test_parses_a_small_program() {
    let source = "\
var total = 0
for i in 1..10 {
    total = total + 1
}
print total";

    let (statements, reporter) = parse(source);

    assert!(
        !reporter.had_error(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    assert_eq!(statements.len(), 3);
    assert!(matches!(&statements[0], Stmt::Var(_)));
    // The for loop comes out as a plain while over the range expression.
    assert!(matches!(&statements[1], Stmt::While(_)));
    assert!(matches!(&statements[2], Stmt::Print(_)));
}

#[test]
fn test_spaced_compound_assignment_program() {
    let source = "\
var x = 1
x + = 2
print x";

    let (statements, reporter) = parse(source);

    assert!(
        !reporter.had_error(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    assert_eq!(statements.len(), 3);
    let Stmt::Expression(statement) = &statements[1] else {
        panic!("expected an expression statement")
    };
    let Expr::Binary(binary) = &statement.expression else {
        panic!("expected a binary expression")
    };
    assert_eq!(binary.operator.kind, TokenKind::Plus);
}

#[test]
fn test_repeat_while_program() {
    let (statements, reporter) = parse("repeat { x = x + 1 } while (x < 10)");

    assert!(
        !reporter.had_error(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    assert_eq!(statements.len(), 1);
    let Stmt::RepeatWhile(repeat) = &statements[0] else {
        panic!("expected a repeat-while statement")
    };
    assert!(matches!(&repeat.body, Stmt::Block(_)));
    let Expr::Binary(condition) = &repeat.condition else {
        panic!("expected a binary condition")
    };
    assert_eq!(condition.operator.kind, TokenKind::Less);
}

#[test]
fn test_else_if_chain_program() {
    let source = "\
if x < 1 {
    print 1
} else if x < 2 {
    print 2
} else {
    print 3
}";

    let (statements, reporter) = parse(source);

    assert!(
        !reporter.had_error(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    assert_eq!(statements.len(), 1);
    let Stmt::If(outer) = &statements[0] else {
        panic!("expected an if statement")
    };
    let Some(Stmt::If(inner)) = &outer.else_branch else {
        panic!("expected the else-branch to nest another if")
    };
    assert!(matches!(&inner.else_branch, Some(Stmt::Block(_))));
}

#[test]
fn test_reports_and_recovers_across_statements() {
    let source = "\
var = 1
print 2
var x";

    let (statements, reporter) = parse(source);

    // The middle statement survives both of its broken neighbours.
    assert_eq!(statements.len(), 1);
    assert!(matches!(&statements[0], Stmt::Print(_)));

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[0].to_string(),
        "[line 1] Error at '=': Expect variable name."
    );
    assert_eq!(
        diagnostics[1].to_string(),
        "[line 3] Error at 'x': Variable should be initialised."
    );
}

#[test]
fn test_every_bad_statement_gets_a_diagnostic() {
    let (statements, reporter) = parse(") ; )");

    assert!(statements.is_empty());
    assert_eq!(reporter.diagnostics().len(), 2);
}

#[test]
fn test_unterminated_comment_is_reported() {
    let (statements, reporter) = parse("print 1 /* trailing\ncomment");

    assert_eq!(statements.len(), 1);
    assert!(matches!(&statements[0], Stmt::Print(_)));

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "[line 2] Error: Unterminated '/*' comment."
    );
}

#[test]
fn test_multiline_string_keeps_line_numbers() {
    let source = "var s = \"one\ntwo\"\nprint s";

    let (statements, reporter) = parse(source);

    assert!(
        !reporter.had_error(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    assert_eq!(statements.len(), 2);
    let Stmt::Var(var) = &statements[0] else {
        panic!("expected a var declaration")
    };
    let Expr::Literal(literal) = &var.initializer else {
        panic!("expected a literal initialiser")
    };
    assert_eq!(
        literal.value,
        LiteralValue::String(String::from("one\ntwo"))
    );

    let Stmt::Print(print) = &statements[1] else {
        panic!("expected a print statement")
    };
    let Expr::Variable(variable) = &print.expression else {
        panic!("expected a variable expression")
    };
    assert_eq!(variable.name.line, 3);
}

#[test]
fn test_diagnostics_point_at_end_of_input() {
    let (statements, reporter) = parse("(1");

    assert!(statements.is_empty());
    assert_eq!(
        reporter.diagnostics()[0].to_string(),
        "[line 1] Error at end: Expect ')' after expression."
    );
}

#[test]
fn test_parsing_is_deterministic() {
    let source = "var x = 1 print x + @ 2";

    let (first_statements, first_reporter) = parse(source);
    let (second_statements, second_reporter) = parse(source);

    assert_eq!(first_statements, second_statements);
    assert_eq!(first_reporter.diagnostics(), second_reporter.diagnostics());
}
