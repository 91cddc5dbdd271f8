use linecalc::{
    CalcError, CommandResult, Session, UpdateResult,
    ast::Name,
    error::{ParseError, RuntimeError},
};

fn name(text: &str) -> Name {
    Name::new(text).unwrap()
}

fn run(session: &mut Session, line: &str) -> CommandResult {
    session.run_line(line)
           .unwrap_or_else(|e| panic!("Line {line:?} failed: {e}"))
}

fn assert_value(session: &mut Session, line: &str, expected: f64) {
    match run(session, line) {
        CommandResult::Eval(v) => assert_eq!(v, expected, "line {line:?}"),
        other => panic!("Line {line:?} produced {other:?}, expected a value"),
    }
}

fn assert_runtime_error(session: &mut Session, line: &str, expected: &RuntimeError) {
    match session.run_line(line) {
        Err(CalcError::Runtime(e)) => assert_eq!(&e, expected, "line {line:?}"),
        other => panic!("Line {line:?} produced {other:?}, expected {expected:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let mut session = Session::new();
    assert_value(&mut session, "1 + 2 * 3", 7.0);
    assert_value(&mut session, "(1 + 2) * 3", 9.0);
    assert_value(&mut session, "10 - 4 - 3", 3.0);
    assert_value(&mut session, "100 / 10 / 5", 2.0);
}

#[test]
fn power_is_right_associative() {
    let mut session = Session::new();
    assert_value(&mut session, "2 ^ 3 ^ 2", 512.0);
    assert_value(&mut session, "(2 ^ 3) ^ 2", 64.0);
    assert_value(&mut session, "2 * 3 ^ 2", 18.0);
}

#[test]
fn unary_minus() {
    let mut session = Session::new();
    assert_value(&mut session, "-3 + 5", 2.0);
    assert_value(&mut session, "--4", 4.0);
    assert_value(&mut session, "2 ^ -1", 0.5);
    assert_value(&mut session, "-2 ^ 2", 4.0);
    assert_value(&mut session, "3 - -2", 5.0);
}

#[test]
fn assignments_see_earlier_updates_on_the_same_line() {
    let mut session = Session::new();
    let result = run(&mut session, "x = 5, y = x + 1");
    assert_eq!(result,
               CommandResult::Updates(vec![UpdateResult::Assignment(name("x"), 5.0),
                                           UpdateResult::Assignment(name("y"), 6.0)]));
    assert_value(&mut session, "y", 6.0);
}

#[test]
fn single_update_returns_bare_result() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "x = 2 * pi"),
               CommandResult::Assignment(name("x"), 6.28318));
    assert_eq!(run(&mut session, "del x"), CommandResult::Deletion(name("x")));
    assert_runtime_error(&mut session, "x", &RuntimeError::undefined_variable("x"));
}

#[test]
fn reassignment_overwrites() {
    let mut session = Session::new();
    run(&mut session, "a = 1");
    run(&mut session, "a = a + 10");
    assert_value(&mut session, "a", 11.0);
}

#[test]
fn deleting_missing_variable_is_error() {
    let mut session = Session::new();
    assert_runtime_error(&mut session, "del z", &RuntimeError::undefined_variable("z"));
}

#[test]
fn sqrt_of_negative_is_nan() {
    let mut session = Session::new();
    match run(&mut session, "sqrt(-4)") {
        CommandResult::Eval(v) => assert!(v.is_nan()),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(session.respond("sqrt(-4)"), "= NaN");
}

#[test]
fn builtin_functions_use_radians() {
    let mut session = Session::new();
    assert_value(&mut session, "sin(0)", 0.0);
    assert_value(&mut session, "cos(0)", 1.0);
    assert_value(&mut session, "tan(0)", 0.0);
    assert_value(&mut session, "sqrt(16) + 1", 5.0);

    let CommandResult::Eval(v) = run(&mut session, "sin(pi / 2)") else {
        panic!("expected a value");
    };
    assert!((v - 1.0).abs() < 1e-9);
}

#[test]
fn unknown_function_is_error() {
    let mut session = Session::new();
    assert_runtime_error(&mut session, "foo(1)", &RuntimeError::unknown_function("foo"));
    assert_eq!(session.respond("foo(1)"), "unknown function 'foo'");
}

#[test]
fn variables_and_functions_have_separate_namespaces() {
    let mut session = Session::new();
    run(&mut session, "f = 3");
    assert_value(&mut session, "f * 2", 6.0);
    assert_runtime_error(&mut session, "f(2)", &RuntimeError::unknown_function("f"));
}

#[test]
fn division_by_zero_is_deferred_to_evaluation() {
    let mut session = Session::new();
    assert_runtime_error(&mut session, "1 / 0", &RuntimeError::DivisionByZero);
    assert_runtime_error(&mut session, "1 / (2 - 2)", &RuntimeError::DivisionByZero);
    assert_runtime_error(&mut session, "1 / -0", &RuntimeError::DivisionByZero);
    assert_value(&mut session, "0 / 5", 0.0);
}

#[test]
fn power_follows_ieee_rules() {
    let mut session = Session::new();
    let CommandResult::Eval(v) = run(&mut session, "(-8) ^ 0.5") else {
        panic!("expected a value");
    };
    assert!(v.is_nan());
    assert_eq!(session.respond("0 ^ -1"), "= Infinity");
}

#[test]
fn missing_operand_is_parse_error() {
    let mut session = Session::new();
    match session.run_line("1 +") {
        Err(CalcError::Parse(ParseError::UnexpectedEndOfInput { expected })) => {
            assert_eq!(expected, "expression after '+'");
        },
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(session.respond("1 +"), "expected expression after '+' at end of input");
}

#[test]
fn last_result_register_tracks_expressions() {
    let mut session = Session::new();
    run(&mut session, "3 + 4");
    assert_value(&mut session, "_", 7.0);
    assert_value(&mut session, "_ * 2", 14.0);
    assert_value(&mut session, "_", 14.0);
}

#[test]
fn updates_do_not_touch_last_result() {
    let mut session = Session::new();
    run(&mut session, "1 + 1");
    run(&mut session, "x = 40");
    assert_value(&mut session, "_", 2.0);
}

#[test]
fn last_result_assignment_hides_its_name() {
    let mut session = Session::new();
    assert_eq!(session.respond("_ = 9"), "= 9");
    assert_eq!(session.respond("_ = 1, q = _ + 1"), "= 1\nq = 2");
}

#[test]
fn evaluation_is_deterministic() {
    let mut session = Session::new();
    run(&mut session, "k = 0.1");
    let first = run(&mut session, "sin(k) * 3 ^ k / 7 - sqrt(k)");
    let second = run(&mut session, "sin(k) * 3 ^ k / 7 - sqrt(k)");
    match (first, second) {
        (CommandResult::Eval(a), CommandResult::Eval(b)) => assert_eq!(a.to_bits(), b.to_bits()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn failed_update_keeps_earlier_commits() {
    let mut session = Session::new();
    assert_runtime_error(&mut session,
                         "a = 1, b = missing, c = 3",
                         &RuntimeError::undefined_variable("missing"));
    assert_value(&mut session, "a", 1.0);
    assert_runtime_error(&mut session, "b", &RuntimeError::undefined_variable("b"));
    assert_runtime_error(&mut session, "c", &RuntimeError::undefined_variable("c"));
}

#[test]
fn failed_deletion_keeps_earlier_commits() {
    let mut session = Session::new();
    run(&mut session, "a = 1");
    assert_runtime_error(&mut session, "del a, del a", &RuntimeError::undefined_variable("a"));
    assert_runtime_error(&mut session, "a", &RuntimeError::undefined_variable("a"));
}

#[test]
fn seeded_defaults() {
    let mut session = Session::new();
    assert_value(&mut session, "pi", 3.14159);

    let mut session = Session::with_defaults([(name("e"), 2.71828), (name("pi"), 3.0)]);
    assert_value(&mut session, "e", 2.71828);
    assert_value(&mut session, "pi", 3.0);
}

#[test]
fn transcript_lines() {
    let mut session = Session::new();
    assert_eq!(session.respond("1.5 * 2"), "= 3");
    assert_eq!(session.respond("x = 0.25"), "x = 0.25");
    assert_eq!(session.respond("x = 1, del x"), "x = 1\nx deleted");
    assert_eq!(session.respond("del x"), "undefined variable 'x'");
    assert_eq!(session.respond("2 $ 3"), "unrecognized character '$' at column 3");
}
