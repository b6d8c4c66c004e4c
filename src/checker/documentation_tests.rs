use super::*;

fn messages(source: &str) -> Vec<String> {
    DocumentationValidator::new()
        .check(source)
        .into_warnings()
        .into_iter()
        .map(|issue| issue.message)
        .collect()
}

#[test]
fn undocumented_function_without_header() {
    assert_eq!(
        messages("def foo():\n    pass\n"),
        vec!["Function 'foo' has no docstring", MISSING_HEADER_MESSAGE]
    );
}

#[test]
fn fully_documented_module_is_valid() {
    let source = "\"\"\"Module doc.\"\"\"\nclass Thing:\n    \"\"\"A thing.\"\"\"\n\n    def run(self):\n        '''Run it.'''\n";
    let outcome = DocumentationValidator::new().check(source);
    assert!(outcome.is_valid(), "{:?}", outcome.warnings());
}

#[test]
fn undocumented_class_and_nested_function() {
    let source = "'''Header.'''\nclass Thing:\n    def run(self):\n        '''Run it.'''\n        def inner():\n            pass\n";
    assert_eq!(
        messages(source),
        vec![
            "Class 'Thing' has no docstring",
            "Function 'inner' has no docstring",
        ]
    );
}

#[test]
fn empty_docstring_is_missing() {
    let source = "'''Header.'''\ndef f():\n    \"\"\"\"\"\"\n";
    assert_eq!(messages(source), vec!["Function 'f' has no docstring"]);
}

#[test]
fn header_must_be_at_first_byte() {
    assert!(has_header("\"\"\"Doc.\"\"\"\n"));
    assert!(has_header("'''Doc.'''\n"));
    assert!(!has_header("\n\"\"\"Doc.\"\"\"\n"));
    assert!(!has_header("# coding: utf-8\n'''Doc.'''\n"));
    assert!(!has_header("r'''Doc.'''\n"));
    assert!(!has_header(""));
}

#[test]
fn empty_file_only_lacks_header() {
    assert_eq!(messages(""), vec![MISSING_HEADER_MESSAGE]);
}

#[test]
fn header_warning_has_no_location() {
    let outcome = DocumentationValidator::new().check("x = 1\n");
    let issue = &outcome.warnings()[0];
    assert_eq!(issue.kind, IssueKind::DocumentationWarning);
    assert_eq!(issue.location, None);
}

#[test]
fn parse_failure_yields_single_warning() {
    let outcome = DocumentationValidator::new().check("def foo(:\n");
    assert!(!outcome.is_valid());
    assert_eq!(outcome.warnings().len(), 1);

    let issue = &outcome.warnings()[0];
    assert_eq!(issue.kind, IssueKind::DocumentationWarning);
    assert!(
        issue
            .message
            .starts_with("Failed to validate documentation: "),
        "got: {}",
        issue.message
    );
}

#[test]
fn parenthesized_docstring_is_accepted() {
    let source = "'''Header.'''\ndef f():\n    (\"Does f.\")\n";
    assert!(messages(source).is_empty());
}

#[test]
fn async_functions_need_no_docstring() {
    assert!(messages("'''Header.'''\nasync def fetch():\n    pass\n").is_empty());
}
