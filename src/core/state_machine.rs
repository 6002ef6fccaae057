//! Validated state machine shared by both games.
//!
//! Each game drives a small state enum (menu, playing, paused, ...) through
//! an explicit transition table. Only listed transitions are legal; every
//! successful change is recorded in a bounded history and queued as a
//! [`Transition`] event for the caller to drain and react to.

use chrono::Utc;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// History is trimmed back to this size once it exceeds [`MAX_HISTORY`].
const TRIMMED_HISTORY: usize = 50;
const MAX_HISTORY: usize = 100;

/// A completed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S> {
    pub from: S,
    pub to: S,
}

/// One entry in the transition history.
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry<S> {
    /// Unix timestamp of the change.
    pub timestamp: i64,
    pub from: Option<S>,
    pub to: S,
}

/// A validated finite-state machine with transition history and a drainable
/// event queue.
pub struct StateMachine<S> {
    current: S,
    previous: Option<S>,
    valid_transitions: HashMap<S, Vec<S>>,
    history: Vec<HistoryEntry<S>>,
    events: Vec<Transition<S>>,
}

impl<S: Copy + Eq + Hash + Debug> StateMachine<S> {
    /// Create a machine in `initial` with the given transition table.
    pub fn new(initial: S, table: Vec<(S, Vec<S>)>) -> Self {
        let mut machine = Self {
            current: initial,
            previous: None,
            valid_transitions: table.into_iter().collect(),
            history: Vec::new(),
            events: Vec::new(),
        };
        machine.record(None, initial);
        machine
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    pub fn is_in_state(&self, state: S) -> bool {
        self.current == state
    }

    /// Check whether a transition from the current state to `target` is listed.
    pub fn is_valid_transition(&self, target: S) -> bool {
        self.valid_transitions
            .get(&self.current)
            .map(|targets| targets.contains(&target))
            .unwrap_or(false)
    }

    /// States reachable from the current state.
    pub fn valid_transitions(&self) -> &[S] {
        self.valid_transitions
            .get(&self.current)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Change to `new_state` if the transition table allows it.
    ///
    /// Returns false (and changes nothing) for unlisted transitions. On
    /// success the change is appended to the history and queued as an event.
    pub fn change_state(&mut self, new_state: S) -> bool {
        if !self.is_valid_transition(new_state) {
            return false;
        }

        let old_state = self.current;
        self.previous = Some(old_state);
        self.current = new_state;
        self.record(Some(old_state), new_state);
        self.events.push(Transition {
            from: old_state,
            to: new_state,
        });
        true
    }

    /// Return to the previous state if the table allows it.
    pub fn go_back(&mut self) -> bool {
        match self.previous {
            Some(prev) => self.change_state(prev),
            None => false,
        }
    }

    /// Force the machine into `state` regardless of the transition table.
    ///
    /// Used for "return to menu no matter what". Recorded in history and
    /// queued like a normal transition.
    pub fn force_reset(&mut self, state: S) {
        let old_state = self.current;
        self.previous = Some(old_state);
        self.current = state;
        self.record(Some(old_state), state);
        if old_state != state {
            self.events.push(Transition {
                from: old_state,
                to: state,
            });
        }
    }

    /// Take all pending transition events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Transition<S>> {
        std::mem::take(&mut self.events)
    }

    /// Most recent history entries, newest last.
    pub fn history(&self, limit: usize) -> &[HistoryEntry<S>] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    pub fn total_transitions(&self) -> usize {
        // The initial state record is not a transition.
        self.history.len().saturating_sub(1)
    }

    fn record(&mut self, from: Option<S>, to: S) {
        self.history.push(HistoryEntry {
            timestamp: Utc::now().timestamp(),
            from,
            to,
        });
        if self.history.len() > MAX_HISTORY {
            self.history.drain(..self.history.len() - TRIMMED_HISTORY);
        }
    }
}
