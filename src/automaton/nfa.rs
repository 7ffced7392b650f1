/*! Nondeterministic finite automata (NFAs) and Thompson's construction.

[`Nfa::from_ast`] translates each AST node into a small fragment with one
entry and one exit state, composed with its children's fragments through
ε-edges. The fragments for `*` deliberately create ε-cycles, so the states
are owned by an arena inside [`Nfa`] and refer to each other through
[`StateId`] handles rather than owning pointers.
*/

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::automaton::StateId;
use crate::parser::ast::Ast;

/// A state of an [`Nfa`].
#[derive(Debug, Default)]
struct State {
    /// Labeled edges. Each character maps to the *set* of states reachable
    /// by consuming it.
    moves: FxHashMap<char, FxHashSet<StateId>>,
    /// ε-edges: states reachable without consuming input.
    epsilon: FxHashSet<StateId>,
    /// True if the automaton accepts when the input ends in this state.
    accepting: bool,
}

/// A nondeterministic finite automaton.
#[derive(Debug)]
pub(crate) struct Nfa {
    states: Vec<State>,
    start: StateId,
}

impl Nfa {
    /// Creates an automaton with no states. The first state added becomes
    /// the start state.
    pub fn new() -> Self {
        Self { states: Vec::new(), start: StateId(0) }
    }

    /// Builds the NFA for `ast` using Thompson's construction.
    ///
    /// The returned automaton has exactly one accepting state, marked once
    /// the whole tree has been translated.
    pub fn from_ast(ast: &Ast) -> Self {
        let mut nfa = Self::new();
        let (start, end) = nfa.fragment(ast);
        nfa.start = start;
        nfa.set_accepting(end);
        nfa
    }

    /// Translates one AST node into a fragment, returning its entry and
    /// exit states.
    fn fragment(&mut self, ast: &Ast) -> (StateId, StateId) {
        match ast {
            Ast::Literal(c) => self.literal_fragment(*c),
            Ast::Star(child) => self.star_fragment(child),
            Ast::Union(left, right) => self.union_fragment(left, right),
            Ast::Concat(children) => self.concat_fragment(children),
        }
    }

    fn literal_fragment(&mut self, c: char) -> (StateId, StateId) {
        let start = self.add_state();
        let end = self.add_state();

        self.add_move(start, c, end);

        (start, end)
    }

    fn star_fragment(&mut self, child: &Ast) -> (StateId, StateId) {
        let start = self.add_state();
        let end = self.add_state();
        let (child_start, child_end) = self.fragment(child);

        // Skip the body entirely, or enter it; after one pass through the
        // body, either leave or loop back for another.
        self.add_epsilon(start, end);
        self.add_epsilon(start, child_start);
        self.add_epsilon(child_end, end);
        self.add_epsilon(child_end, child_start);

        (start, end)
    }

    fn union_fragment(&mut self, left: &Ast, right: &Ast) -> (StateId, StateId) {
        let start = self.add_state();
        let end = self.add_state();
        let (left_start, left_end) = self.fragment(left);
        let (right_start, right_end) = self.fragment(right);

        self.add_epsilon(start, left_start);
        self.add_epsilon(start, right_start);
        self.add_epsilon(left_end, end);
        self.add_epsilon(right_end, end);

        (start, end)
    }

    fn concat_fragment(&mut self, children: &[Ast]) -> (StateId, StateId) {
        // The parser never produces an empty sequence; the wiring below has
        // no meaning for one.
        debug_assert!(!children.is_empty());

        let start = self.add_state();
        let end = self.add_state();

        let mut cursor = start;
        for child in children {
            let (child_start, child_end) = self.fragment(child);
            self.add_epsilon(cursor, child_start);
            cursor = child_end;
        }
        self.add_epsilon(cursor, end);

        (start, end)
    }

    /// Adds a state and returns its identifier. Identifiers are sequential.
    pub fn add_state(&mut self) -> StateId {
        self.states.push(State::default());
        StateId(self.states.len() - 1)
    }

    /// Adds the edge `from --label--> to`.
    pub fn add_move(&mut self, from: StateId, label: char, to: StateId) {
        self.states[from.0].moves.entry(label).or_default().insert(to);
    }

    /// Adds the edge `from --ε--> to`.
    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from.0].epsilon.insert(to);
    }

    /// Marks `state` as accepting.
    pub fn set_accepting(&mut self, state: StateId) {
        self.states[state.0].accepting = true;
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states[state.0].accepting
    }

    /// Returns the smallest superset of `states` closed under ε-edges.
    pub fn epsilon_closure(
        &self,
        states: impl IntoIterator<Item = StateId>,
    ) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        let mut pending: Vec<StateId> = states.into_iter().collect();

        while let Some(state) = pending.pop() {
            if !closure.insert(state) {
                continue;
            }
            for &next in &self.states[state.0].epsilon {
                if !closure.contains(&next) {
                    pending.push(next);
                }
            }
        }

        closure
    }

    /// Returns the set of states reachable from `states` by consuming
    /// `label`, without following any ε-edges.
    pub fn move_on(
        &self,
        states: &BTreeSet<StateId>,
        label: char,
    ) -> BTreeSet<StateId> {
        let mut result = BTreeSet::new();

        for &state in states {
            if let Some(targets) = self.states[state.0].moves.get(&label) {
                result.extend(targets.iter().copied());
            }
        }

        result
    }

    /// Returns every non-ε label on an edge leaving any state in `states`,
    /// in sorted order.
    pub fn labels_from(&self, states: &BTreeSet<StateId>) -> BTreeSet<char> {
        let mut labels = BTreeSet::new();

        for &state in states {
            labels.extend(self.states[state.0].moves.keys().copied());
        }

        labels
    }

    /// Runs the automaton over `input`, branching into every possible path
    /// and following ε-closures at every step.
    ///
    /// This is a direct existential simulation with no memoization, so it is
    /// exponential in the worst case. It exists for cross-checking the DFA
    /// and for debugging; matching a compiled pattern always goes through
    /// [`Dfa::accepts`].
    ///
    /// [`Dfa::accepts`]: crate::automaton::dfa::Dfa::accepts
    #[allow(dead_code)]
    pub fn accepts(&self, input: &str) -> bool {
        self.accepts_from(self.start, input)
    }

    fn accepts_from(&self, state: StateId, input: &str) -> bool {
        let closure = self.epsilon_closure([state]);

        let mut chars = input.chars();
        let Some(label) = chars.next() else {
            return closure.iter().any(|&s| self.is_accepting(s));
        };

        let rest = chars.as_str();
        closure.iter().any(|&s| {
            self.states[s.0].moves.get(&label).is_some_and(|targets| {
                targets.iter().any(|&t| self.accepts_from(t, rest))
            })
        })
    }
}
