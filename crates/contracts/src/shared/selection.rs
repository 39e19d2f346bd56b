//! Bounded selection that silently refuses inserts once full.

/// Result of [`SaturatingSelection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection already full, nothing changed.
    Saturated,
}

/// Set of ids with a fixed capacity, kept in first-selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaturatingSelection<T> {
    ids: Vec<T>,
    capacity: usize,
}

impl<T: PartialEq + Clone> SaturatingSelection<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Remove `id` if selected, otherwise add it while there is room.
    pub fn toggle(&mut self, id: T) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() < self.capacity {
            self.ids.push(id);
            return ToggleOutcome::Added;
        }
        ToggleOutcome::Saturated
    }

    pub fn contains(&self, id: &T) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected ids in the order they were first selected.
    pub fn ids(&self) -> &[T] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut sel = SaturatingSelection::new(3);
        assert_eq!(sel.toggle("a"), ToggleOutcome::Added);
        assert_eq!(sel.toggle("b"), ToggleOutcome::Added);
        assert_eq!(sel.ids(), &["a", "b"]);
        assert_eq!(sel.toggle("a"), ToggleOutcome::Removed);
        assert_eq!(sel.ids(), &["b"]);
    }

    #[test]
    fn test_fourth_id_is_ignored() {
        let mut sel = SaturatingSelection::new(3);
        for id in ["1", "2", "3"] {
            sel.toggle(id);
        }
        assert!(sel.is_full());
        assert_eq!(sel.toggle("4"), ToggleOutcome::Saturated);
        assert_eq!(sel.ids(), &["1", "2", "3"]);

        // Removal still works at capacity
        assert_eq!(sel.toggle("2"), ToggleOutcome::Removed);
        assert_eq!(sel.toggle("4"), ToggleOutcome::Added);
        assert_eq!(sel.ids(), &["1", "3", "4"]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut sel = SaturatingSelection::new(0);
        assert_eq!(sel.toggle(1), ToggleOutcome::Saturated);
        assert!(sel.is_empty());
    }
}
