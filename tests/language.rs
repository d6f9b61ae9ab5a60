use std::fs;

use pretty_assertions::assert_eq;
use sprig::{
    error::{Error, ErrorKind},
    execute,
    interpreter::evaluator::{Printed, RecordingBridge},
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "sprig")
                                      })
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                           panic!("Missing expected output for {path:?}: {e}")
                       });

        count += 1;
        let mut bridge = RecordingBridge::new();
        if let Err(e) = execute(&code, &mut bridge) {
            panic!("Demo {path:?} failed:\n{code}\nError: {:?}", e.chain().collect::<Vec<_>>());
        }
        assert_eq!(bridge.output(), expected, "output of {path:?}");
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn run(src: &str) -> RecordingBridge {
    let mut bridge = RecordingBridge::new();
    if let Err(e) = execute(src, &mut bridge) {
        panic!("Script failed: {:?}", e.chain().collect::<Vec<_>>());
    }
    bridge
}

fn failure(src: &str) -> Error {
    let mut bridge = RecordingBridge::new();
    match execute(src, &mut bridge) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_failure(src: &str, kind: ErrorKind, message: &str) {
    let error = failure(src);
    let chain: Vec<_> = error.chain().collect();
    assert_eq!(error.kind, kind, "kind of {chain:?}");
    assert!(chain.iter().any(|m| m.contains(message)),
            "expected {message:?} in {chain:?}");
}

#[test]
fn declared_variable_is_printed() {
    let bridge = run("var a = 5; print(a);");
    assert_eq!(bridge.calls(), [vec![Printed::Number(5.0)]]);
}

#[test]
fn declaration_then_assignment() {
    assert_eq!(run("var a; a = 3; print(a);").lines(), ["3"]);
    assert_eq!(run("var a\nprint(a)").lines(), ["unknown"]);
}

#[test]
fn redeclaration_in_same_scope_fails() {
    assert_failure("var a; var a;", ErrorKind::Runtime, "variable already declared");
    assert_failure("var a = 1\nfunction a() {}", ErrorKind::Runtime, "variable already declared");
}

#[test]
fn shadowing_in_a_new_scope_is_allowed() {
    let bridge = run("var a = 1\nfunction f() { var a = 2; print(a) }\nf()\nprint(a)");
    assert_eq!(bridge.lines(), ["2", "1"]);
}

#[test]
fn currying_allocates_a_scope_per_call() {
    let bridge = run("function sum(first){ return function sum(second){ print(first+second) } } sum(5)(8)");
    assert_eq!(bridge.lines(), ["13"]);

    let bridge = run("function sum(first){ return function sum(second){ return first+second } }\n\
                      var five = sum(5)\nvar two = sum(2)\nprint(five(1), two(1))");
    assert_eq!(bridge.lines(), ["6 3"]);
}

#[test]
fn closures_resolve_through_the_defining_scope() {
    let bridge = run("var first=4; var second=10; function bar(){ var second=3; print(first+second) } bar()");
    assert_eq!(bridge.lines(), ["7"]);
}

#[test]
fn lookup_ignores_the_callers_scope() {
    assert_failure("function show() { print(local) }\nfunction caller() { var local = 1; show() }\ncaller()",
                   ErrorKind::Runtime,
                   "variable not declared: `local`");
}

#[test]
fn mixed_types_are_concatenated() {
    let bridge = run("var boolean=true; var string=\"3\"; var number=5; var result=boolean+string+number; print(result)");
    assert_eq!(bridge.lines(), ["true35"]);
    assert_eq!(bridge.calls(), [vec![Printed::String("true35".into())]]);
}

#[test]
fn numbers_are_formatted_with_six_decimals() {
    assert_eq!(run("print(3.5/2.25)").lines(), ["1.555556"]);
    assert_eq!(run("print(1/3)").lines(), ["0.333333"]);
    assert_eq!(run("print(2.5 * 2)").lines(), ["5"]);
}

#[test]
fn calling_the_result_of_a_void_call_fails() {
    let mut bridge = RecordingBridge::new();
    let error = execute("function welcome(){ print(\"Hi\") } welcome(\"Hi\")(\"Tleng\")", &mut bridge)
        .expect_err("second call has no function to call");

    assert_eq!(bridge.lines(), ["Hi"]);
    assert_eq!(error.kind, ErrorKind::Runtime);
    assert!(error.innermost().message.contains("no reference to a function"));
}

#[test]
fn calling_a_non_function_fails() {
    assert_failure("var a = 1; a()", ErrorKind::Runtime, "no reference to a function");
    assert_failure("\"text\"()", ErrorKind::Runtime, "no reference to a function");
}

#[test]
fn sequential_operators_group_to_the_right() {
    assert_eq!(run("print(10 - 5 - 2)").lines(), ["7"]);
    assert_eq!(run("print(2 * 3 + 4)").lines(), ["14"]);
    assert_eq!(run("print((10 - 5) - 2)").lines(), ["3"]);
}

#[test]
fn missing_arguments_stay_unknown() {
    let bridge = run("function f(a, b) { print(a, b) }\nf(1)\nf(1, 2, 3)");
    assert_eq!(bridge.calls(),
               [vec![Printed::Number(1.0), Printed::Unknown],
                vec![Printed::Number(1.0), Printed::Number(2.0)]]);
}

#[test]
fn functions_are_first_class() {
    let bridge = run("function twice(f, x) { return f(f(x)) }\n\
                      function inc(n) { return n + 1 }\n\
                      print(twice(inc, 5))\n\
                      print(inc)\n\
                      print(print)");
    assert_eq!(bridge.lines(), ["7", "<function inc>", "<native print>"]);
}

#[test]
fn unbounded_recursion_is_reported() {
    assert_failure("function loop() { return loop() }\nloop()",
                   ErrorKind::Runtime,
                   "maximum call depth");
}

#[test]
fn return_ends_the_block() {
    let bridge = run("function f() { print(1)\nreturn 2\nprint(3) }\nprint(f())");
    assert_eq!(bridge.lines(), ["1", "2"]);
}

#[test]
fn bare_return_yields_nothing() {
    assert_failure("function f() { return }\nprint(f())",
                   ErrorKind::Runtime,
                   "expression yields no value");
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_eq!(run("var a; var b; a = b = 4; print(a + b)").lines(), ["8"]);
}

#[test]
fn assigning_undeclared_names_fails() {
    assert_failure("a = 3", ErrorKind::Runtime, "variable not declared: `a`");
    assert_failure("var a; 1 = a", ErrorKind::Runtime, "cannot assign to a Number");
}

#[test]
fn non_numeric_operators_fail() {
    assert_failure("print(\"a\" - 1)", ErrorKind::Runtime, "operator `-` requires two numbers");
    assert_failure("var a; print(a + 1)", ErrorKind::Runtime, "cannot convert a unknown to text");
    assert_failure("function f() {}\nprint(f + \"x\")",
                   ErrorKind::Runtime,
                   "cannot convert a function to text");
}

#[test]
fn property_reads_are_rejected_at_run_time() {
    assert_failure("var s = \"abc\"; print(s.length)",
                   ErrorKind::Runtime,
                   "cannot read property `length` of a string");
}

#[test]
fn frames_holding_only_their_own_functions_are_released() {
    let src = "function a() {\n\
               var x = 1\n\
               function b() {\n\
               function c() { print(x) }\n\
               return c\n\
               }\n\
               return b()\n\
               }\n\
               a()()";
    assert_failure(src, ErrorKind::Runtime, "missing closure reference");
}

#[test]
fn returned_functions_keep_their_frame_alive() {
    let bridge = run("function make() {\n\
                      var x = 7\n\
                      function get() { return x }\n\
                      return get\n\
                      }\n\
                      var get = make()\n\
                      print(get(), make()())");
    assert_eq!(bridge.lines(), ["7 7"]);
}

#[test]
fn numbers_glued_to_letters_are_lexical_errors() {
    assert_failure("var a = 4abc", ErrorKind::Lexical, "identifiers must not start with a digit");
}

#[test]
fn digits_inside_identifiers_are_lexical_errors() {
    assert_failure("var ab = 1; print(ab2)", ErrorKind::Lexical, "identifiers must not contain digits: `ab2`");
    assert_failure("var a2", ErrorKind::Lexical, "identifiers must not contain digits: `a2`");
}

#[test]
fn syntax_errors_are_reported() {
    assert_failure("print(1 2)", ErrorKind::Syntax, "expected `,` or `)`");
    assert_failure("{ var a", ErrorKind::Syntax, "unclosed block");
    assert_failure("+ 1", ErrorKind::Syntax, "missing left operand");
    assert_failure("true + 1", ErrorKind::Syntax, "missing left operand");
}

#[test]
fn long_operator_chains_run_and_are_released() {
    let src = format!("print({})", vec!["1"; 20_000].join(" + "));
    assert_eq!(run(&src).lines(), ["20000"]);
}
