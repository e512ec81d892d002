use std::collections::VecDeque;

pub const DEFAULT_HISTORY_SIZE: usize = 14;

/// The names of the most recently executed commands, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `name`, evicting the oldest entry when full.
    pub fn push(&mut self, name: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(name.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut history = History::default();
        for i in 1..=16 {
            history.push(format!("c{}", i));
        }

        let expected: Vec<String> = (3..=16).map(|i| format!("c{}", i)).collect();
        let actual: Vec<&str> = history.iter().collect();
        assert_eq!(actual, expected);
        assert_eq!(history.len(), 14);
    }

    #[test]
    fn keeps_everything_below_capacity() {
        let mut history = History::new(3);
        history.push("show");
        history.push("info");
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["show", "info"]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = History::new(0);
        history.push("show");
        assert!(history.is_empty());
    }
}
