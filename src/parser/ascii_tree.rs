/*! Functions that return an ASCII representation of pattern ASTs. */

use ::ascii_tree::Tree;
use ::ascii_tree::Tree::{Leaf, Node};

use crate::parser::ast::Ast;

/// Returns a representation of the AST node as an ASCII tree.
pub(crate) fn ast_ascii_tree(ast: &Ast) -> Tree {
    match ast {
        Ast::Literal(c) => Leaf(vec![format!("literal `{}`", c)]),
        Ast::Star(child) => {
            Node("star".to_owned(), vec![ast_ascii_tree(child)])
        }
        Ast::Union(left, right) => Node(
            "union".to_owned(),
            vec![ast_ascii_tree(left), ast_ascii_tree(right)],
        ),
        Ast::Concat(children) => Node(
            "concat".to_owned(),
            children.iter().map(ast_ascii_tree).collect(),
        ),
    }
}
