/*! A recursive-descent parser for patterns.

The grammar, in EBNF:

```text
re        = simple-re , [ "|" , re ] ;
simple-re = basic-re , { basic-re } ;
basic-re  = elem-re , [ "*" ] ;
elem-re   = "(" , re , ")"
          | "\" , metacharacter
          | ordinary character ;
```

Alternation and concatenation associate to the right, following the recursive
structure of the grammar, and `*` binds to the immediately preceding
`elem-re` only. The parser is a single left-to-right pass with one character
of lookahead and no backtracking: the `simple-re` repetition keeps consuming
elements while the lookahead can begin one, and stops (without erroring) at
`|`, `)` or the end of the pattern. Errors found *inside* an element, like an
unclosed group or a bad escape, always surface.

Parsing is pure. No automaton state is allocated until the whole pattern has
been accepted.
*/

pub use errors::ParseError;

pub mod ast;

mod errors;

#[cfg(feature = "ascii-tree")]
mod ascii_tree;


use std::iter::Peekable;
use std::str::CharIndices;

use crate::parser::ast::Ast;

/// The characters with syntactic meaning. Using one literally requires a
/// backslash escape, and nothing else may be escaped.
const METACHARACTERS: [char; 5] = ['*', '(', ')', '|', '\\'];

#[inline]
fn is_metacharacter(c: char) -> bool {
    METACHARACTERS.contains(&c)
}

/// Parses a pattern string into its [`Ast`].
pub struct Parser<'src> {
    input: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Parser<'src> {
    /// Creates a parser for the given pattern.
    pub fn new(input: &'src str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    /// Parses the pattern and returns the root of its AST.
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let ast = self.alternation()?;

        // The top-level production must consume the pattern in full. A `)`
        // without a matching opener is the usual way to end up here.
        if self.chars.peek().is_some() {
            return Err(ParseError::TrailingInput { offset: self.offset() });
        }

        Ok(ast)
    }

    // re = simple-re , [ "|" , re ]
    fn alternation(&mut self) -> Result<Ast, ParseError> {
        let left = self.sequence()?;

        if self.eat('|') {
            let right = self.alternation()?;
            return Ok(Ast::union(left, right));
        }

        Ok(left)
    }

    // simple-re = basic-re , { basic-re }
    //
    // At least one element is required; the rest are accumulated greedily
    // until the lookahead can no longer begin an element.
    fn sequence(&mut self) -> Result<Ast, ParseError> {
        let mut nodes = vec![self.quantified()?];

        while matches!(self.peek(), Some(c) if !matches!(c, '*' | '|' | ')')) {
            nodes.push(self.quantified()?);
        }

        Ok(Ast::Concat(nodes))
    }

    // basic-re = elem-re , [ "*" ]
    fn quantified(&mut self) -> Result<Ast, ParseError> {
        let node = self.element()?;

        if self.eat('*') {
            return Ok(Ast::star(node));
        }

        Ok(node)
    }

    // elem-re = "(" , re , ")" | "\" , metacharacter | ordinary character
    fn element(&mut self) -> Result<Ast, ParseError> {
        match self.peek() {
            Some('(') => {
                self.bump();
                let node = self.alternation()?;
                if !self.eat(')') {
                    return Err(ParseError::UnclosedGroup {
                        offset: self.offset(),
                    });
                }
                Ok(node)
            }
            Some('\\') => {
                self.bump();
                match self.peek() {
                    Some(c) if is_metacharacter(c) => {
                        self.bump();
                        Ok(Ast::Literal(c))
                    }
                    Some(c) => Err(ParseError::InvalidEscape {
                        offset: self.offset(),
                        escaped: c,
                    }),
                    None => Err(ParseError::TruncatedEscape {
                        offset: self.offset(),
                    }),
                }
            }
            Some(c) if !is_metacharacter(c) => {
                self.bump();
                Ok(Ast::Literal(c))
            }
            _ => Err(ParseError::EmptyExpression { offset: self.offset() }),
        }
    }

    /// Returns the next character without consuming it.
    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character if it is exactly `c`.
    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    /// Byte offset of the next unconsumed character, or the pattern length
    /// once the input is exhausted.
    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(offset, _)| offset)
    }
}
