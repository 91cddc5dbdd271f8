use std::{cell::RefCell, collections::BTreeMap};

use linecalc::{
    CalcError, CommandResult, Session,
    ast::{Command, Name},
    error::RuntimeError,
    interpreter::{
        evaluator::{eval, function::BUILTIN_FUNCTIONS},
        executor::execute,
        store::{Host, HostStore, MemoryStore, NotFound, VariableStore},
    },
    parse_line,
    util::num::format_number,
};

/// A host that keeps its own variables and logs every capability call.
#[derive(Default)]
struct RecordingHost {
    variables: BTreeMap<String, f64>,
    calls:     RefCell<Vec<String>>,
}

impl RecordingHost {
    fn log(&self, entry: String) {
        self.calls.borrow_mut().push(entry);
    }
}

impl Host for RecordingHost {
    fn get_variable(&self, name: &str) -> Result<f64, NotFound> {
        self.log(format!("get {name}"));
        self.variables.get(name).copied().ok_or(NotFound)
    }

    fn set_variable(&mut self, name: &str, value: f64) {
        self.log(format!("set {name} {value}"));
        self.variables.insert(name.to_string(), value);
    }

    fn clear_variable(&mut self, name: &str) -> Result<(), NotFound> {
        self.log(format!("clear {name}"));
        self.variables.remove(name).map(|_| ()).ok_or(NotFound)
    }

    fn invoke_function(&self, name: &str, value: f64) -> Result<f64, NotFound> {
        self.log(format!("invoke {name} {value}"));
        match name {
            "sqrt" => Ok(value.sqrt()),
            "half" => Ok(value / 2.0),
            _ => Err(NotFound),
        }
    }
}

fn name(text: &str) -> Name {
    Name::new(text).unwrap()
}

#[test]
fn memory_store_get_set_remove() {
    let mut store = MemoryStore::empty();
    let x = name("x");

    assert!(store.is_empty());
    assert_eq!(store.get(&x), Err(RuntimeError::undefined_variable("x")));

    store.set(&x, 1.5);
    store.set(&x, 2.5);
    assert_eq!(store.get(&x), Ok(2.5));
    assert_eq!(store.len(), 1);

    assert_eq!(store.remove(&x), Ok(()));
    assert_eq!(store.remove(&x), Err(RuntimeError::undefined_variable("x")));
    assert!(!store.contains("x"));
}

#[test]
fn memory_store_starts_with_pi() {
    let store = MemoryStore::new();
    assert!(store.contains("pi"));
    assert_eq!(store.sorted(), vec![(&name("pi"), 3.14159)]);
}

#[test]
fn memory_store_lists_sorted() {
    let store: MemoryStore = [(name("b"), 2.0), (name("a"), 1.0), (name("_"), 0.0)].into_iter()
                                                                                  .collect();
    let names: Vec<&str> = store.sorted().into_iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["_", "a", "b"]);
}

#[test]
fn names_are_validated() {
    for valid in ["x", "_", "_tmp", "rate2", "CamelCase", "delta"] {
        assert!(Name::new(valid).is_some(), "{valid} should be valid");
    }
    for invalid in ["", "2x", "a-b", "a b", "del", "é", "x!"] {
        assert!(Name::new(invalid).is_none(), "{invalid} should be invalid");
    }
    assert!(name("_").is_last_result());
    assert!(!name("x").is_last_result());
}

#[test]
fn builtin_table_is_fixed() {
    assert_eq!(BUILTIN_FUNCTIONS, &["sin", "cos", "tan", "sqrt"]);

    let store = MemoryStore::new();
    assert_eq!(store.invoke_function(&name("sqrt"), 81.0), Ok(9.0));
    assert_eq!(store.invoke_function(&name("ln"), 1.0),
               Err(RuntimeError::unknown_function("ln")));
}

#[test]
fn host_store_routes_through_capabilities() {
    let mut session = Session::with_store(HostStore::new(RecordingHost::default()));

    assert_eq!(session.respond("r = half(10)"), "r = 5");
    assert_eq!(session.respond("r * 4"), "= 20");
    assert_eq!(session.respond("del r"), "r deleted");

    let host = session.into_store().into_inner();
    assert_eq!(host.calls.into_inner(),
               vec!["get pi",
                    "set pi 3.14159",
                    "invoke half 10",
                    "set r 5",
                    "get r",
                    "set _ 20",
                    "clear r"]);
    assert_eq!(host.variables.get("_"), Some(&20.0));
    assert!(!host.variables.contains_key("r"));
}

#[test]
fn host_values_survive_session_start() {
    let mut host = RecordingHost::default();
    host.variables.insert("pi".to_string(), 3.0);

    let mut session = Session::with_store(HostStore::new(host));
    assert_eq!(session.respond("pi * 2"), "= 6");
    assert_eq!(*session.store().host().calls.borrow(), ["get pi", "get pi", "set _ 6"]);
}

#[test]
fn host_can_be_changed_between_lines() {
    let mut session = Session::with_store(HostStore::new(RecordingHost::default()));
    session.store_mut()
           .host_mut()
           .variables
           .insert("width".to_string(), 7.0);

    assert_eq!(session.respond("width * 3"), "= 21");
    assert_eq!(session.store().host().variables.get("_"), Some(&21.0));
}

#[test]
fn memory_store_can_be_changed_between_lines() {
    let mut session = Session::new();
    session.store_mut().set(&name("rate"), 0.5);
    assert_eq!(session.respond("rate * 10"), "= 5");

    session.store_mut().remove(&name("pi")).unwrap();
    assert_eq!(session.respond("pi"), "undefined variable 'pi'");
}

#[test]
fn host_not_found_maps_to_runtime_errors() {
    let mut session = Session::with_store(HostStore::new(RecordingHost::default()));

    assert_eq!(session.run_line("missing"),
               Err(CalcError::Runtime(RuntimeError::undefined_variable("missing"))));
    assert_eq!(session.run_line("del missing"),
               Err(CalcError::Runtime(RuntimeError::undefined_variable("missing"))));
    assert_eq!(session.run_line("cos(0)"),
               Err(CalcError::Runtime(RuntimeError::unknown_function("cos"))));
}

#[test]
fn execute_and_eval_work_on_borrowed_stores() {
    let mut store = MemoryStore::new();
    let command = parse_line("w = 4, h = w / 2").unwrap();
    execute(&mut store, &command).unwrap();

    let boxed: Box<dyn VariableStore> = Box::new(store.clone());
    let Command::Eval(expr) = parse_line("w * h").unwrap() else {
        panic!("expected an expression");
    };
    assert_eq!(eval(&expr, &boxed), Ok(8.0));
    assert_eq!(eval(&expr, &store), Ok(8.0));

    let command = parse_line("w + h").unwrap();
    assert_eq!(execute(&mut &mut store, &command), Ok(CommandResult::Eval(6.0)));
    assert_eq!(store.get(&name("_")), Ok(6.0));
}

#[test]
fn numbers_format_invariantly() {
    assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_number(1e6), "1000000");
    assert_eq!(format_number(-2.0), "-2");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
}
