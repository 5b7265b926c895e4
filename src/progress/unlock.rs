use std::collections::HashSet;

/// A completed unit: an entire module (all topics plus its assessment, if
/// any) or a single topic within a module. Indices are positions within
/// the loaded course, not backend ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKey {
    Module(usize),
    Topic { module: usize, topic: usize },
}

/// Session-local completion set, rebuilt from the resume payload on load
/// and pushed back to the backend on every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionState {
    done: HashSet<CompletionKey>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_topic(&mut self, module: usize, topic: usize) {
        self.done.insert(CompletionKey::Topic { module, topic });
    }

    pub fn mark_module(&mut self, module: usize) {
        self.done.insert(CompletionKey::Module(module));
    }

    pub fn is_topic_complete(&self, module: usize, topic: usize) -> bool {
        self.done.contains(&CompletionKey::Topic { module, topic })
    }

    pub fn is_module_complete(&self, module: usize) -> bool {
        self.done.contains(&CompletionKey::Module(module))
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CompletionKey> {
        self.done.iter()
    }
}

/// A topic is reachable only through the sequence: all earlier topics in
/// its module done, and the previous module done. Out-of-order completion
/// (replayed payloads, URL edits) never unlocks ahead.
pub fn is_topic_locked(state: &CompletionState, module: usize, topic: usize) -> bool {
    if module == 0 && topic == 0 {
        return false;
    }
    if module > 0 && !state.is_module_complete(module - 1) {
        return true;
    }
    (0..topic).any(|earlier| !state.is_topic_complete(module, earlier))
}

pub fn is_module_locked(state: &CompletionState, module: usize) -> bool {
    module > 0 && !state.is_module_complete(module - 1)
}

/// Marks a module complete once every topic in it is done, for modules
/// without an assessment. Modules with an assessment only complete when
/// the assessment is passed.
pub fn derive_module_completion(
    state: &mut CompletionState,
    module: usize,
    topic_count: usize,
    has_assessment: bool,
) {
    if has_assessment || topic_count == 0 {
        return;
    }
    if (0..topic_count).all(|topic| state.is_topic_complete(module, topic)) {
        state.mark_module(module);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_topic_never_locked() {
        let state = CompletionState::new();
        assert!(!is_topic_locked(&state, 0, 0));
    }

    #[test]
    fn test_module_locked_until_previous_complete() {
        let mut state = CompletionState::new();
        assert!(!is_module_locked(&state, 0));
        assert!(is_module_locked(&state, 1));

        state.mark_module(0);
        assert!(!is_module_locked(&state, 1));
        assert!(is_module_locked(&state, 2));
    }

    #[test]
    fn test_topics_unlock_sequentially() {
        let mut state = CompletionState::new();
        assert!(is_topic_locked(&state, 0, 1));

        state.mark_topic(0, 0);
        assert!(!is_topic_locked(&state, 0, 1));
        assert!(is_topic_locked(&state, 0, 2));
    }

    #[test]
    fn test_out_of_order_completion_does_not_unlock_ahead() {
        let mut state = CompletionState::new();
        // Topic 2 somehow marked without topics 0 and 1.
        state.mark_topic(0, 2);
        assert!(is_topic_locked(&state, 0, 2));
        assert!(is_topic_locked(&state, 0, 3));
    }

    #[test]
    fn test_later_module_topics_need_previous_module() {
        let mut state = CompletionState::new();
        state.mark_topic(1, 0);
        assert!(is_topic_locked(&state, 1, 0));
        assert!(is_topic_locked(&state, 1, 1));

        state.mark_module(0);
        assert!(!is_topic_locked(&state, 1, 0));
        assert!(!is_topic_locked(&state, 1, 1));
    }

    #[test]
    fn test_module_completion_derived_without_assessment() {
        let mut state = CompletionState::new();
        state.mark_topic(0, 0);
        derive_module_completion(&mut state, 0, 2, false);
        assert!(!state.is_module_complete(0));

        state.mark_topic(0, 1);
        derive_module_completion(&mut state, 0, 2, false);
        assert!(state.is_module_complete(0));
        assert!(!is_module_locked(&state, 1));
    }

    #[test]
    fn test_module_with_assessment_not_derived_from_topics() {
        let mut state = CompletionState::new();
        state.mark_topic(0, 0);
        state.mark_topic(0, 1);
        derive_module_completion(&mut state, 0, 2, true);
        assert!(!state.is_module_complete(0));
    }
}
