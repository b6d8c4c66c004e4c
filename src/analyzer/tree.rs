use super::failure::Location;

/// Structural view of one parsed Python module.
///
/// Only the shape the validators need is kept: definitions, the clause bodies
/// of compound statements, and string-constant expression statements
/// (docstring candidates). Everything else collapses into
/// [`StatementKind::Simple`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxTree {
    body: Block,
}

impl SyntaxTree {
    #[must_use]
    pub const fn new(body: Block) -> Self {
        Self { body }
    }

    #[must_use]
    pub const fn body(&self) -> &Block {
        &self.body
    }

    /// Module-level docstring, if any.
    #[must_use]
    pub fn docstring(&self) -> Option<String> {
        self.body.docstring()
    }

    /// Every function and class definition in the tree, depth-first in
    /// document order. Definitions nested in functions, classes and compound
    /// statements are included. `async def` is not a declaration, but
    /// definitions inside it are.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        collect_declarations(&self.body, &mut declarations);
        declarations
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// The cleaned docstring of this body: its first statement when that is a
    /// lone `str` constant. Empty docstrings count as absent.
    #[must_use]
    pub fn docstring(&self) -> Option<String> {
        let first = self.statements.first()?;
        let StatementKind::StringLiteral { value } = &first.kind else {
            return None;
        };
        let cleaned = clean_docstring(value);
        (!cleaned.is_empty()).then_some(cleaned)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    FunctionDef {
        name: String,
        is_async: bool,
        body: Block,
    },
    ClassDef {
        name: String,
        body: Block,
    },
    /// `if`, `for`, `while`, `try`, `with`, `match` (and their `async`
    /// forms), one block per clause in source order.
    Compound {
        keyword: &'static str,
        clauses: Vec<Block>,
    },
    /// An expression statement whose value is a `str` constant.
    StringLiteral {
        value: String,
    },
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Function,
    Type,
}

/// A function-like or type-like definition found while walking a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub docstring: Option<String>,
    pub location: Location,
}

impl Declaration {
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self.kind, DeclarationKind::Function)
    }

    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self.kind, DeclarationKind::Type)
    }
}

fn collect_declarations(block: &Block, out: &mut Vec<Declaration>) {
    for statement in &block.statements {
        match &statement.kind {
            StatementKind::FunctionDef {
                name,
                is_async,
                body,
            } => {
                if !is_async {
                    out.push(Declaration {
                        kind: DeclarationKind::Function,
                        name: name.clone(),
                        docstring: body.docstring(),
                        location: statement.location,
                    });
                }
                collect_declarations(body, out);
            }
            StatementKind::ClassDef { name, body } => {
                out.push(Declaration {
                    kind: DeclarationKind::Type,
                    name: name.clone(),
                    docstring: body.docstring(),
                    location: statement.location,
                });
                collect_declarations(body, out);
            }
            StatementKind::Compound { clauses, .. } => {
                for clause in clauses {
                    collect_declarations(clause, out);
                }
            }
            StatementKind::StringLiteral { .. } | StatementKind::Simple => {}
        }
    }
}

/// Normalize a raw docstring: the first line is stripped, the remaining lines
/// lose their common indentation, and leading/trailing blank lines go away.
#[must_use]
pub fn clean_docstring(raw: &str) -> String {
    let expanded = raw.replace('\t', "        ");
    let mut lines = expanded.lines();
    let first = lines.next().unwrap_or("").trim();
    let rest: Vec<&str> = lines.collect();

    let margin = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = Vec::with_capacity(rest.len() + 1);
    cleaned.push(first);
    for line in &rest {
        let dedented = line.get(margin..).unwrap_or_else(|| line.trim_start());
        cleaned.push(dedented.trim_end());
    }

    while cleaned.first().is_some_and(|line| line.trim().is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|line| line.trim().is_empty()) {
        cleaned.pop();
    }

    cleaned.join("\n")
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
