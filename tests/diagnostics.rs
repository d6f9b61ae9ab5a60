use pretty_assertions::assert_eq;
use sprig::{
    Options, interpret,
    interpreter::evaluator::RecordingBridge,
    io::{BufferSink, Segment},
};

fn run(src: &str, options: &Options) -> (bool, BufferSink, RecordingBridge) {
    let mut sink = BufferSink::new();
    let mut bridge = RecordingBridge::new();
    let ok = interpret(src, options, &mut sink, &mut bridge);
    (ok, sink, bridge)
}

#[test]
fn successful_runs_write_nothing_to_the_sink() {
    let (ok, sink, bridge) = run("print('hi')", &Options::default());
    assert!(ok);
    assert_eq!(sink.text(), "");
    assert_eq!(bridge.output(), "hi\n");
}

#[test]
fn runtime_error_highlights_the_failing_node() {
    let (ok, sink, _) = run("var a\nvar a", &Options::default());
    assert!(!ok);

    assert_eq!(sink.text(),
               "var a\nvar a\nruntime error: while executing the program\n  runtime error: variable \
                already declared: `a`\n");
    assert_eq!(sink.segments()[0],
               Segment { text:  "var a\n".into(),
                         error: false, });
    assert_eq!(sink.segments()[1],
               Segment { text:  "var a".into(),
                         error: true, });
}

#[test]
fn errors_inside_calls_keep_the_innermost_span() {
    let src = "function f() { print(x) }\nf()";
    let (ok, sink, _) = run(src, &Options::default());
    assert!(!ok);

    assert_eq!(sink.segments()[1].text, "x");
    assert_eq!(sink.error_text(),
               "x\
                runtime error: while executing the program\n  \
                runtime error: in call to `f`\n    \
                runtime error: variable not declared: `x`\n");
    assert!(sink.text().ends_with(") }\nf()"));
}

#[test]
fn errors_at_end_of_input_use_a_placeholder() {
    let (ok, sink, _) = run("var a =", &Options::default());
    assert!(!ok);
    assert_eq!(sink.segments()[1].text, "<end of input>");
    assert!(sink.error_text().contains("syntax error: while building the syntax tree"));
    assert!(sink.error_text().contains("unexpected end of input"));
}

#[test]
fn unclosed_calls_point_at_the_open_paren() {
    let (ok, sink, _) = run("print(1,", &Options::default());
    assert!(!ok);
    assert_eq!(sink.segments()[1].text, "(");
    assert!(sink.error_text().contains("unclosed call, missing `)`"));
}

#[test]
fn lexical_errors_are_reported_before_building() {
    let (ok, sink, bridge) = run("print(1)\nvar 9lives = 1", &Options::default());
    assert!(!ok);
    assert!(bridge.lines().is_empty());
    assert!(sink.error_text().contains("lexical error: while scanning the source"));
    assert_eq!(sink.segments()[1].text, "9l");
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let (ok, _, bridge) = run("print(1)\nprint(missing)\nprint(2)", &Options::default());
    assert!(!ok);
    assert_eq!(bridge.lines(), ["1"]);
}

#[test]
fn token_dump() {
    let options = Options { dump_tokens: true,
                            ..Options::default() };
    let (ok, sink, _) = run("var a", &options);
    assert!(ok);
    assert_eq!(sink.text(), "TOKENS\nVariableDeclaration \"var\" @0..3\nIdentifier \"a\" @4..5\n");
}

#[test]
fn ast_dump() {
    let options = Options { dump_ast: true,
                            ..Options::default() };
    let (ok, sink, _) = run("var a = 5", &options);
    assert!(ok);
    assert_eq!(sink.text(),
               "AST\nRoot @0..9\n  VariableDeclaration name=\"a\" @0..5\n  Assignment @4..9\n    \
                Reference name=\"a\" @4..5\n    Number value=5 @8..9\n");
}

#[test]
fn dumps_precede_diagnostics() {
    let options = Options { dump_tokens: true,
                            dump_ast:    true, };
    let (ok, sink, _) = run("x", &options);
    assert!(!ok);
    assert_eq!(sink.text(),
               "TOKENS\nIdentifier \"x\" @0..1\nAST\nRoot @0..1\n  Reference name=\"x\" @0..1\nx\n\
                runtime error: while executing the program\n  runtime error: variable not \
                declared: `x`\n");
}
