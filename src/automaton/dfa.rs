/*! Deterministic finite automata (DFAs) and the subset construction.

A [`Dfa`] is built from an [`Nfa`] by the standard worklist algorithm: every
reachable, non-empty *set* of NFA states becomes one DFA state. The sorted
set itself is the deduplication key, so two steps of the construction that
reach the same set always resolve to the same DFA state, no matter the order
in which they were reached. No minimization runs afterwards; the automaton
may keep states a minimizer would merge.
*/

use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::automaton::nfa::Nfa;
use crate::automaton::StateId;

/// Identifies a state of a [`Dfa`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DfaStateId(usize);

/// A state of a [`Dfa`].
#[derive(Debug)]
struct State {
    /// The set of NFA states this DFA state stands for. Doubles as the
    /// state's canonical name, rendered as `{q0,q2,q5}`.
    subset: BTreeSet<StateId>,
    /// At most one successor per label. A label with no entry rejects.
    moves: FxHashMap<char, DfaStateId>,
    /// True iff any member of `subset` is accepting.
    accepting: bool,
}

/// A deterministic finite automaton. Built from an [`Nfa`], then used
/// directly for matching.
#[derive(Debug)]
pub(crate) struct Dfa {
    states: Vec<State>,
    start: DfaStateId,
}

impl From<&Nfa> for Dfa {
    fn from(nfa: &Nfa) -> Self {
        let mut dfa = Dfa { states: Vec::new(), start: DfaStateId(0) };

        // Maps each materialized set of NFA states to its DFA state. This
        // table is what collapses converging construction paths: a set is
        // looked up by value, never by the identity of who computed it.
        let mut state_ids: FxHashMap<BTreeSet<StateId>, DfaStateId> =
            FxHashMap::default();

        let start_subset = nfa.epsilon_closure([nfa.start()]);
        let start = dfa.add_state(nfa, start_subset.clone());
        state_ids.insert(start_subset.clone(), start);
        dfa.start = start;

        let mut queue = VecDeque::new();
        queue.push_back((start, start_subset));

        while let Some((from, subset)) = queue.pop_front() {
            for label in nfa.labels_from(&subset) {
                let target = nfa.epsilon_closure(nfa.move_on(&subset, label));
                if target.is_empty() {
                    // An empty set is never materialized as a state; the
                    // missing edge rejects instead.
                    continue;
                }
                let to = match state_ids.get(&target) {
                    Some(&id) => id,
                    None => {
                        let id = dfa.add_state(nfa, target.clone());
                        state_ids.insert(target.clone(), id);
                        queue.push_back((id, target));
                        id
                    }
                };
                let previous = dfa.states[from.0].moves.insert(label, to);
                debug_assert!(
                    previous.is_none(),
                    "duplicate DFA edge for {label:?}"
                );
            }
        }

        dfa
    }
}

impl Dfa {
    /// Adds the state for `subset`, accepting iff any member accepts.
    fn add_state(
        &mut self,
        nfa: &Nfa,
        subset: BTreeSet<StateId>,
    ) -> DfaStateId {
        let accepting = subset.iter().any(|&s| nfa.is_accepting(s));
        self.states.push(State {
            subset,
            moves: FxHashMap::default(),
            accepting,
        });
        DfaStateId(self.states.len() - 1)
    }

    /// Returns `true` if the automaton consumes the whole of `input` and
    /// ends in an accepting state.
    ///
    /// Total over any input: a character with no edge out of the current
    /// state rejects, it doesn't fail. The walk is iterative, so input
    /// length never translates into stack depth.
    pub fn accepts(&self, input: &str) -> bool {
        let mut state = self.start;

        for label in input.chars() {
            match self.states[state.0].moves.get(&label) {
                Some(&next) => state = next,
                None => return false,
            }
        }

        self.states[state.0].accepting
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

impl Display for Dfa {
    /// Renders every state in creation order under its canonical name, with
    /// its outgoing edges sorted by label and accepting states marked with
    /// `*`. The start state is always the first one listed.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in &self.states {
            writeln!(
                f,
                "{}{}",
                canonical_name(&state.subset),
                if state.accepting { " *" } else { "" }
            )?;
            for (label, to) in
                state.moves.iter().sorted_by_key(|(label, _)| **label)
            {
                writeln!(
                    f,
                    "  {:?} -> {}",
                    label,
                    canonical_name(&self.states[to.0].subset)
                )?;
            }
        }
        Ok(())
    }
}

/// The canonical name of a set of NFA states: the member names, sorted and
/// joined inside braces, e.g. `{q0,q2,q5}`.
fn canonical_name(subset: &BTreeSet<StateId>) -> String {
    format!("{{{}}}", subset.iter().join(","))
}
