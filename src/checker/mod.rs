mod documentation;
mod file;
mod issue;
mod naming;
mod report;
mod result;
mod syntax;
mod system;

pub use documentation::{
    DocumentationOutcome, DocumentationValidator, MISSING_HEADER_MESSAGE, has_header,
};
pub use file::FileValidator;
pub use issue::{IssueKind, ValidationIssue};
pub use naming::{NamingOutcome, NamingValidator, is_pascal_case, is_snake_case};
pub use report::{Summary, SystemReport};
pub use result::FileResult;
pub use syntax::{SYNTAX_VALID_MESSAGE, SyntaxOutcome, SyntaxValidator};
pub use system::SystemValidator;
