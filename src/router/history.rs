//! Session history stack.

/// Ordered list of visited locations with a cursor
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location under the cursor
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    /// Add an entry after the cursor, dropping any forward entries
    pub fn push(&mut self, location: impl Into<String>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(location.into());
        self.index = self.entries.len() - 1;
    }

    /// Overwrite the entry under the cursor
    pub fn replace(&mut self, location: impl Into<String>) {
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = location.into(),
            None => self.push(location),
        }
    }

    /// Location `delta` steps away from the cursor
    pub fn peek(&self, delta: isize) -> Option<&str> {
        let target = self.index.checked_add_signed(delta)?;
        self.entries.get(target).map(String::as_str)
    }

    /// Move the cursor; returns false when out of range
    pub fn go(&mut self, delta: isize) -> bool {
        match self.index.checked_add_signed(delta) {
            Some(target) if target < self.entries.len() => {
                self.index = target;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
