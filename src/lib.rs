/*! Compiles a small regular-expression language into deterministic finite
automata (DFAs) for whole-string matching.

The supported syntax is concatenation, alternation (`|`), the Kleene star
(`*`), parenthesized grouping, and literal characters. The five
metacharacters `*`, `(`, `)`, `|` and `\` match literally when preceded by a
backslash; everything else stands for itself. There are no character classes,
anchors or bounded repetitions.

Matching is exact: a compiled [`Pattern`] accepts a string if and only if the
automaton consumes *every* character and ends in an accepting state. This is
not substring search, and there is nothing to configure.

Compilation runs in three stages: a recursive-descent [`Parser`] produces an
AST, Thompson's construction turns the AST into an NFA, and the subset
construction turns the NFA into the DFA that [`Pattern`] keeps for matching.
All three stages run eagerly inside [`compile`]; a pattern either compiles
completely or fails with a [`ParseError`].

# Example

```rust
let pattern = fullmatch::compile(r"a(bc|d*)*e").unwrap();

assert!(pattern.is_match("abce"));
assert!(pattern.is_match("adddde"));
assert!(!pattern.is_match("abcd"));
```
*/

#![deny(missing_docs)]

pub use parser::ParseError;
pub use parser::Parser;

use std::fmt;
use std::fmt::{Debug, Formatter};

use log::debug;

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;

pub mod parser;

mod automaton;

#[cfg(test)]
mod tests;

/// Compiles `pattern` into a [`Pattern`] that matches whole strings.
///
/// Parsing, NFA construction and DFA construction all happen here, eagerly.
/// On success the returned [`Pattern`] holds only the DFA (plus the pattern
/// source); on failure no automaton is produced at all.
pub fn compile(pattern: &str) -> Result<Pattern, ParseError> {
    let ast = Parser::new(pattern).parse()?;

    let nfa = Nfa::from_ast(&ast);
    let dfa = Dfa::from(&nfa);

    debug!(
        "compiled `{}`: {} NFA states, {} DFA states",
        pattern,
        nfa.state_count(),
        dfa.state_count()
    );

    Ok(Pattern { source: pattern.to_owned(), dfa })
}

/// A pattern compiled into a DFA.
///
/// Obtained from [`compile`]. A `Pattern` is immutable once built and can be
/// shared freely across threads; any number of callers may run [`is_match`]
/// concurrently.
///
/// [`is_match`]: Pattern::is_match
pub struct Pattern {
    source: String,
    dfa: Dfa,
}

impl Pattern {
    /// Returns `true` if `input`, taken as a whole, matches the pattern.
    ///
    /// Total over any input, including the empty string: characters the
    /// pattern never mentions simply have no outgoing edge in the DFA and
    /// cause a rejection, not an error.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.dfa.accepts(input)
    }

    /// Returns the pattern source the `Pattern` was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.source.as_str()
    }
}

impl Debug for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}
