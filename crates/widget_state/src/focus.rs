//! Focus containment
//!
//! While the widget is open, keyboard focus cycles within its focusable
//! elements: forward past the last wraps to the first and backward past the
//! first wraps to the last. The ring is pure; the host performs the actual
//! focus move.

/// Wrap-around cursor over the widget's focusable element ids.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    targets: Vec<String>,
    index: usize,
}

impl FocusRing {
    pub fn new(targets: Vec<String>) -> Self {
        Self { targets, index: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Element currently holding focus, if any targets are registered.
    pub fn current(&self) -> Option<&str> {
        self.targets.get(self.index).map(String::as_str)
    }

    /// Move focus forward, wrapping from the last element to the first.
    pub fn next(&mut self) -> Option<&str> {
        if self.targets.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.targets.len();
        self.current()
    }

    /// Move focus backward, wrapping from the first element to the last.
    pub fn prev(&mut self) -> Option<&str> {
        if self.targets.is_empty() {
            return None;
        }
        self.index = if self.index == 0 {
            self.targets.len() - 1
        } else {
            self.index - 1
        };
        self.current()
    }

    /// Point the ring at a specific element, e.g. after the host moved focus
    /// directly. Unknown ids leave the ring unchanged.
    pub fn focus(&mut self, target: &str) {
        if let Some(i) = self.targets.iter().position(|t| t == target) {
            self.index = i;
        }
    }
}
