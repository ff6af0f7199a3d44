//! FAQ accordion
//!
//! Panels registered in display order with an exclusive-open invariant:
//! at most one panel is expanded at any time, enforced on every toggle.
//! Transitions return the full set of deltas so the host can update its
//! visual and ARIA state in one pass, with no observation layer.

use serde::{Deserialize, Serialize};

/// One FAQ panel.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Panel {
    pub id: String,
    pub label: String,
    pub expanded: bool,
}

impl Panel {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            expanded: false,
        }
    }
}

/// A panel whose expansion state changed during a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDelta {
    pub panel_id: String,
    pub label: String,
    pub expanded: bool,
}

/// Exclusive-open accordion over a registered panel set.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Accordion {
    panels: Vec<Panel>,
}

impl Accordion {
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    pub fn register(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn is_expanded(&self, panel_id: &str) -> bool {
        self.panels
            .iter()
            .any(|p| p.id == panel_id && p.expanded)
    }

    /// Number of currently expanded panels. 0 or 1 by invariant.
    pub fn expanded_count(&self) -> usize {
        self.panels.iter().filter(|p| p.expanded).count()
    }

    /// Toggle a panel.
    ///
    /// Expanding a panel first collapses every other panel unconditionally;
    /// toggling the expanded panel just collapses it. Unknown panel ids are
    /// a no-op (host precondition) and return no deltas.
    pub fn toggle(&mut self, panel_id: &str) -> Vec<PanelDelta> {
        if !self.panels.iter().any(|p| p.id == panel_id) {
            tracing::warn!(%panel_id, "toggle for unregistered accordion panel ignored");
            return Vec::new();
        }

        let was_expanded = self.is_expanded(panel_id);
        let mut deltas = Vec::new();

        for panel in &mut self.panels {
            if panel.id != panel_id && panel.expanded {
                panel.expanded = false;
                deltas.push(PanelDelta {
                    panel_id: panel.id.clone(),
                    label: panel.label.clone(),
                    expanded: false,
                });
            }
        }

        let panel = self
            .panels
            .iter_mut()
            .find(|p| p.id == panel_id)
            .expect("presence checked above");
        panel.expanded = !was_expanded;
        deltas.push(PanelDelta {
            panel_id: panel.id.clone(),
            label: panel.label.clone(),
            expanded: panel.expanded,
        });

        deltas
    }
}
