use quill_utils::declare_key_type;
use quill_utils::keyvec::KeyVec;

use crate::symbols::Table;
use crate::{Node, NodeCopy};

declare_key_type! {
    #[derive(serde::Serialize)]
    pub struct StmtId;
}

/// The root of one compilation unit.
#[derive(Node!)]
pub struct Module {
    pub locals: Table,
    pub statements: KeyVec<StmtId, Stmt>,
}

impl Module {
    pub fn statement(&self, id: StmtId) -> Option<&Stmt> {
        self.statements.get(id)
    }

    pub fn declaration(&self, id: StmtId) -> Option<Declaration<'_>> {
        self.statements.get(id)?.as_declaration()
    }
}

#[derive(Node!)]
pub enum Stmt {
    Expression(ExpressionStatement),
    Var(Var),
    TypeAlias(TypeAlias),
}

impl Stmt {
    pub fn pos(&self) -> usize {
        match self {
            Stmt::Expression(stmt) => stmt.pos,
            Stmt::Var(var) => var.pos,
            Stmt::TypeAlias(alias) => alias.pos,
        }
    }

    pub fn as_declaration(&self) -> Option<Declaration<'_>> {
        match self {
            Stmt::Var(var) => Some(Declaration::Var(var)),
            Stmt::TypeAlias(alias) => Some(Declaration::TypeAlias(alias)),
            Stmt::Expression(_) => None,
        }
    }
}

#[derive(Node!)]
pub struct ExpressionStatement {
    pub expression: Expr,
    pub pos: usize,
}

#[derive(Node!)]
pub struct Var {
    pub name: Identifier,
    /// An unresolved type name; nothing checks that it names a type.
    pub typename: Option<Identifier>,
    pub init: Expr,
    pub pos: usize,
}

#[derive(Node!)]
pub struct TypeAlias {
    pub name: Identifier,
    pub typename: Identifier,
    pub pos: usize,
}

#[derive(Node!)]
pub enum Expr {
    Identifier(Identifier),
    Literal(Literal),
    StringLiteral(StringLiteral),
    Assignment(Assignment),
}

impl Expr {
    pub fn pos(&self) -> usize {
        match self {
            Expr::Identifier(ident) => ident.pos,
            Expr::Literal(literal) => literal.pos,
            Expr::StringLiteral(literal) => literal.pos,
            Expr::Assignment(assignment) => assignment.pos,
        }
    }
}

#[derive(Node!)]
pub struct Identifier {
    pub text: String,
    pub pos: usize,
}

#[derive(Node!)]
pub struct Literal {
    pub value: f64,
    pub pos: usize,
}

#[derive(Node!)]
pub struct StringLiteral {
    pub value: String,
    pub pos: usize,
}

/// `name = value`. Assigns to an existing binding; never declares one.
#[derive(Node!)]
pub struct Assignment {
    pub name: Identifier,
    pub value: Box<Expr>,
    pub pos: usize,
}

impl Drop for Assignment {
    // unlinks nested assignments one at a time so long chains don't drop recursively
    fn drop(&mut self) {
        let leaf = || Expr::Literal(Literal { value: 0.0, pos: 0 });

        let mut next = std::mem::replace(self.value.as_mut(), leaf());
        while let Expr::Assignment(inner) = &mut next {
            let value = std::mem::replace(inner.value.as_mut(), leaf());
            next = value;
        }
    }
}

/// A statement that introduces a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'a> {
    Var(&'a Var),
    TypeAlias(&'a TypeAlias),
}

impl<'a> Declaration<'a> {
    pub fn name(&self) -> &'a Identifier {
        match self {
            Declaration::Var(var) => &var.name,
            Declaration::TypeAlias(alias) => &alias.name,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Var(_) => DeclarationKind::Var,
            Declaration::TypeAlias(_) => DeclarationKind::TypeAlias,
        }
    }

    /// Whether this declaration binds a runtime value.
    pub fn is_value(&self) -> bool {
        self.kind() == DeclarationKind::Var
    }
}

#[derive(NodeCopy!)]
pub enum DeclarationKind {
    Var,
    TypeAlias,
}

impl DeclarationKind {
    pub fn describe(&self) -> &'static str {
        match self {
            DeclarationKind::Var => "variable",
            DeclarationKind::TypeAlias => "type alias",
        }
    }
}
