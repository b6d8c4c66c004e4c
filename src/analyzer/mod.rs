//! Python source analysis: parsing and the structural syntax tree.
//!
//! Source text goes through the full Python grammar, so anything the grammar
//! rejects (bad tokens, broken indentation, malformed expressions or
//! statements) is a [`ParseFailure`]. The accepted AST is then reduced to the
//! structure the validators need: definitions, compound statement bodies and
//! docstrings.

mod failure;
mod parser;
mod tree;

pub use failure::{Location, ParseFailure};
pub use parser::{PythonParser, SourceParser};
pub use tree::{
    Block, Declaration, DeclarationKind, Statement, StatementKind, SyntaxTree, clean_docstring,
};
