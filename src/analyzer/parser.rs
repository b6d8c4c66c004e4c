use rustpython_parser::ast::{self, Constant, ExceptHandler, Expr, Ranged, Stmt};
use rustpython_parser::{Parse, ParseError};

use super::failure::{Location, ParseFailure};
use super::tree::{Block, Statement, StatementKind, SyntaxTree};

/// Name reported to the grammar for the text being parsed.
const SOURCE_PATH: &str = "<module>";

/// Trait for turning source text into a structural syntax tree.
pub trait SourceParser {
    /// Parse `source` as a whole module.
    ///
    /// # Errors
    /// Returns a [`ParseFailure`] when the text is not well-formed. No partial
    /// tree is ever returned.
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseFailure>;
}

/// Python module parser backed by the full Python grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonParser;

impl PythonParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SourceParser for PythonParser {
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseFailure> {
        if source.contains('\0') {
            return Err(ParseFailure::processing(
                "source code string cannot contain null bytes",
            ));
        }

        let suite = ast::Suite::parse(source, SOURCE_PATH)
            .map_err(|error| syntax_failure(source, &error))?;
        Ok(SyntaxTree::new(Lowering { source }.block(&suite)))
    }
}

fn syntax_failure(source: &str, error: &ParseError) -> ParseFailure {
    ParseFailure::syntax(
        error.error.to_string(),
        Location::from_offset(source, usize::from(error.offset)),
    )
}

/// Reduces the full AST to the statements the validators look at.
struct Lowering<'s> {
    source: &'s str,
}

impl Lowering<'_> {
    fn block(&self, statements: &[Stmt]) -> Block {
        Block::new(statements.iter().map(|stmt| self.statement(stmt)).collect())
    }

    fn clauses(&self, keyword: &'static str, clauses: &[&[Stmt]]) -> StatementKind {
        StatementKind::Compound {
            keyword,
            clauses: clauses.iter().map(|clause| self.block(clause)).collect(),
        }
    }

    fn handlers(&self, handlers: &[ExceptHandler]) -> Vec<Block> {
        handlers
            .iter()
            .map(|handler| match handler {
                ExceptHandler::ExceptHandler(handler) => self.block(&handler.body),
            })
            .collect()
    }

    fn try_clauses(
        &self,
        body: &[Stmt],
        handlers: &[ExceptHandler],
        orelse: &[Stmt],
        finalbody: &[Stmt],
    ) -> StatementKind {
        let mut clauses = vec![self.block(body)];
        clauses.extend(self.handlers(handlers));
        clauses.push(self.block(orelse));
        clauses.push(self.block(finalbody));
        StatementKind::Compound {
            keyword: "try",
            clauses,
        }
    }

    fn statement(&self, stmt: &Stmt) -> Statement {
        let kind = match stmt {
            Stmt::FunctionDef(def) => StatementKind::FunctionDef {
                name: def.name.as_str().to_string(),
                is_async: false,
                body: self.block(&def.body),
            },
            Stmt::AsyncFunctionDef(def) => StatementKind::FunctionDef {
                name: def.name.as_str().to_string(),
                is_async: true,
                body: self.block(&def.body),
            },
            Stmt::ClassDef(def) => StatementKind::ClassDef {
                name: def.name.as_str().to_string(),
                body: self.block(&def.body),
            },
            Stmt::If(s) => self.clauses("if", &[s.body.as_slice(), s.orelse.as_slice()]),
            Stmt::For(s) => self.clauses("for", &[s.body.as_slice(), s.orelse.as_slice()]),
            Stmt::AsyncFor(s) => {
                self.clauses("async for", &[s.body.as_slice(), s.orelse.as_slice()])
            }
            Stmt::While(s) => self.clauses("while", &[s.body.as_slice(), s.orelse.as_slice()]),
            Stmt::With(s) => self.clauses("with", &[s.body.as_slice()]),
            Stmt::AsyncWith(s) => self.clauses("async with", &[s.body.as_slice()]),
            Stmt::Try(s) => self.try_clauses(&s.body, &s.handlers, &s.orelse, &s.finalbody),
            Stmt::TryStar(s) => self.try_clauses(&s.body, &s.handlers, &s.orelse, &s.finalbody),
            Stmt::Match(s) => StatementKind::Compound {
                keyword: "match",
                clauses: s.cases.iter().map(|case| self.block(&case.body)).collect(),
            },
            Stmt::Expr(s) => expression_statement(&s.value),
            _ => StatementKind::Simple,
        };

        Statement {
            kind,
            location: Location::from_offset(self.source, usize::from(stmt.start())),
        }
    }
}

/// Only a `str` constant can be a docstring. Implicitly concatenated and
/// parenthesized literals arrive here already folded into one constant;
/// f-strings and bytes do not qualify.
fn expression_statement(value: &Expr) -> StatementKind {
    match value {
        Expr::Constant(constant) => match &constant.value {
            Constant::Str(value) => StatementKind::StringLiteral {
                value: value.clone(),
            },
            _ => StatementKind::Simple,
        },
        _ => StatementKind::Simple,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
