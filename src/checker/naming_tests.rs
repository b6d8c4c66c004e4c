use super::*;

fn messages(source: &str) -> Vec<String> {
    NamingValidator::new()
        .check(source)
        .into_warnings()
        .into_iter()
        .map(|issue| issue.message)
        .collect()
}

#[test]
fn snake_case_names() {
    assert!(is_snake_case("foo"));
    assert!(is_snake_case("foo_bar"));
    assert!(is_snake_case("load2"));
    assert!(is_snake_case("_Private"));
    assert!(is_snake_case("__init__"));
    assert!(!is_snake_case("Bar"));
    assert!(!is_snake_case("camelCase"));
    assert!(!is_snake_case("foo__bar"));
}

#[test]
fn names_without_cased_characters_are_not_snake_case() {
    assert!(!is_snake_case("123"));
    assert!(!is_snake_case(""));
    assert!(is_snake_case("_1"));
}

#[test]
fn pascal_case_names() {
    assert!(is_pascal_case("MyClass"));
    assert!(is_pascal_case("HTTPServer"));
    assert!(!is_pascal_case("myClass"));
    assert!(!is_pascal_case("_Hidden"));
    assert!(!is_pascal_case(""));
}

#[test]
fn conforming_module_is_valid() {
    let outcome = NamingValidator::new().check("class Good:\n    def method(self):\n        pass\n");
    assert!(outcome.is_valid());
    assert!(outcome.warnings().is_empty());
}

#[test]
fn class_and_method_violations_in_document_order() {
    let source = "\"\"\"Module doc.\"\"\"\nclass myClass:\n    \"\"\"doc\"\"\"\n    def Bar(self):\n        \"\"\"doc\"\"\"\n        pass\n";
    assert_eq!(
        messages(source),
        vec![
            "Class 'myClass' does not follow PascalCase",
            "Function 'Bar' does not follow snake_case",
        ]
    );
}

#[test]
fn nested_functions_are_checked() {
    let source = "def outer():\n    def innerHelper():\n        pass\n";
    assert_eq!(
        messages(source),
        vec!["Function 'innerHelper' does not follow snake_case"]
    );
}

#[test]
fn async_functions_are_not_checked() {
    let source = "\"\"\"M.\"\"\"\nasync def Fetch():\n    \"\"\"d\"\"\"\n";
    let outcome = NamingValidator::new().check(source);
    assert!(outcome.is_valid(), "{:?}", outcome.warnings());
}

#[test]
fn functions_inside_async_functions_are_checked() {
    let source = "async def run():\n    def Step():\n        pass\n";
    assert_eq!(
        messages(source),
        vec!["Function 'Step' does not follow snake_case"]
    );
}

#[test]
fn dunder_and_private_methods_are_accepted() {
    let source = "class A:\n    def __init__(self):\n        pass\n    def _Helper(self):\n        pass\n";
    assert!(messages(source).is_empty());
}

#[test]
fn warnings_carry_kind_and_location() {
    let outcome = NamingValidator::new().check("x = 1\n\ndef Bad():\n    pass\n");
    let issue = &outcome.warnings()[0];
    assert_eq!(issue.kind, IssueKind::NamingWarning);
    assert_eq!(issue.location, Some(crate::analyzer::Location::new(3, 1)));
}

#[test]
fn parse_failure_yields_single_warning() {
    let outcome = NamingValidator::new().check("def foo(:\n");
    assert!(!outcome.is_valid());
    assert_eq!(outcome.warnings().len(), 1);

    let issue = &outcome.warnings()[0];
    assert_eq!(issue.kind, IssueKind::NamingFailure);
    assert!(
        issue.message.starts_with("Failed to validate naming: "),
        "got: {}",
        issue.message
    );
}

#[test]
fn malformed_parameter_list_blocks_naming() {
    let outcome = NamingValidator::new().check("def Bad(a b):\n    pass\n");
    assert!(!outcome.is_valid());
    assert_eq!(outcome.warnings().len(), 1);
    assert_eq!(outcome.warnings()[0].kind, IssueKind::NamingFailure);
}
