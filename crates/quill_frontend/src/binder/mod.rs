
use quill_diagnostic::{Diagnostic, IntoDiagnostic};
use quill_utils::keyvec::KeyVec;

use crate::ast::*;
use crate::symbols::{Symbol, Table};

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BindError {
    pub kind: BindErrorKind,
    /// The redeclared name.
    pub pos: usize,
    /// The name of the declaration it clashes with.
    pub first: usize,
}

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BindErrorKind {
    #[error("duplicate declaration of `{0}`")]
    DuplicateDeclaration(String),

    #[error("conflicting declaration of `{0}`")]
    ConflictingDeclaration(String),
}

impl IntoDiagnostic for BindError {
    fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::binding(self.pos, self.kind.to_string())
            .with_label(self.first, "first declared here")
    }
}

/// Builds the module-level symbol table.
///
/// Values and type aliases share one namespace. The first `var` of a name
/// stays its value declaration; every later declaration is still recorded on
/// the symbol, but reported.
pub struct Binder<'m> {
    statements: &'m KeyVec<StmtId, Stmt>,
    locals: Table,
    errors: Vec<BindError>,
}

impl<'m> Binder<'m> {
    pub fn new(statements: &'m KeyVec<StmtId, Stmt>) -> Self {
        Self {
            statements,
            locals: Table::default(),
            errors: vec![],
        }
    }

    pub fn run(mut self) -> (Table, Vec<BindError>) {
        let statements = self.statements;

        for (id, stmt) in statements.iter_keyed() {
            match stmt.as_declaration() {
                Some(decl) => self.declare(id, decl),
                None => {
                    if let Stmt::Expression(stmt) = stmt {
                        self.bind_expr(&stmt.expression);
                    }
                }
            }
        }

        tracing::debug!(
            symbols = self.locals.len(),
            errors = self.errors.len(),
            "bound module"
        );

        (self.locals, self.errors)
    }

    fn declare(&mut self, id: StmtId, decl: Declaration<'m>) {
        let name = decl.name();
        tracing::trace!(name = %name.text, kind = decl.kind().describe(), "declare");

        let statements = self.statements;
        let kind_of = |id| {
            statements
                .get(id)
                .and_then(Stmt::as_declaration)
                .map(|decl| decl.kind())
        };

        let Some(symbol) = self.locals.get_mut(&name.text) else {
            self.locals
                .insert(name.text.clone(), Symbol::new(id, decl.is_value()));
            return;
        };

        let duplicate = || BindErrorKind::DuplicateDeclaration(name.text.clone());
        let conflicting = || BindErrorKind::ConflictingDeclaration(name.text.clone());
        let earliest = symbol.declarations.first().copied();

        let clash = match decl.kind() {
            DeclarationKind::Var => match symbol.value_declaration {
                Some(first) => Some((duplicate(), first)),

                // only type aliases so far
                None => {
                    symbol.value_declaration = Some(id);
                    earliest.map(|first| (conflicting(), first))
                }
            },

            DeclarationKind::TypeAlias => {
                let first_alias = symbol
                    .declarations
                    .iter()
                    .copied()
                    .find(|&other| kind_of(other) == Some(DeclarationKind::TypeAlias));

                match first_alias {
                    Some(first) => Some((duplicate(), first)),
                    None => earliest.map(|first| (conflicting(), first)),
                }
            }
        };

        symbol.declarations.push(id);

        if let Some((kind, first)) = clash {
            let first = statements
                .get(first)
                .and_then(Stmt::as_declaration)
                .map_or(name.pos, |decl| decl.name().pos);

            self.errors.push(BindError {
                kind,
                pos: name.pos,
                first,
            });
        }
    }

    /// Expressions never declare. Assignment targets are identifiers by
    /// construction, so there is nothing to report here yet.
    fn bind_expr(&self, mut expr: &Expr) {
        while let Expr::Assignment(assignment) = expr {
            tracing::trace!(name = %assignment.name.text, "assignment");
            expr = &assignment.value;
        }
    }
}

/// Fill in `module.locals` from its declarations.
pub(crate) fn bind(mut module: Module) -> (Module, Vec<BindError>) {
    let (locals, errors) = Binder::new(&module.statements).run();
    module.locals = locals;

    (module, errors)
}
