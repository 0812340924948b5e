//! Exit-intent trigger for the lead popup.
//!
//! The popup opens at most once per page visit: the first time the pointer
//! leaves through the top or a side edge of the viewport, or the page
//! becomes hidden, whichever happens first.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Browser signals the trigger listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// The pointer left an element.
    PointerOut {
        /// Pointer x in viewport coordinates
        x: i32,
        /// Pointer y in viewport coordinates
        y: i32,
        /// Viewport width in pixels
        viewport_width: u32,
        /// The pointer moved onto another element of the page
        has_related_target: bool,
    },
    /// The page visibility changed to hidden (tab switch, minimise).
    VisibilityHidden,
}

/// Once-per-visit popup trigger.
#[derive(Debug, Clone)]
pub struct ExitIntent {
    enabled: bool,
    edge_tolerance_px: u32,
    triggered: bool,
    visible: bool,
}

impl ExitIntent {
    /// Create an armed trigger.
    #[must_use]
    pub fn new(edge_tolerance_px: u32) -> Self {
        Self {
            enabled: true,
            edge_tolerance_px,
            triggered: false,
            visible: false,
        }
    }

    /// A trigger that never fires.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(0)
        }
    }

    /// Feed a page event; returns `true` when this event opened the popup.
    pub fn observe(&mut self, event: PageEvent) -> bool {
        if !self.enabled || self.triggered || self.visible {
            return false;
        }

        let leaving = match event {
            PageEvent::PointerOut {
                x,
                y,
                viewport_width,
                has_related_target,
            } => !has_related_target && self.crosses_edge(x, y, viewport_width),
            PageEvent::VisibilityHidden => true,
        };

        if leaving {
            self.triggered = true;
            self.visible = true;
            info!(?event, "exit intent detected, showing popup");
        }
        leaving
    }

    fn crosses_edge(&self, x: i32, y: i32, viewport_width: u32) -> bool {
        let right_edge = i64::from(viewport_width) - i64::from(self.edge_tolerance_px);
        y <= 0 || x <= 0 || i64::from(x) >= right_edge
    }

    /// Hide the popup. It will not open again during this visit.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Whether the popup is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the popup has opened at some point during this visit.
    #[must_use]
    pub fn has_triggered(&self) -> bool {
        self.triggered
    }
}

impl Default for ExitIntent {
    fn default() -> Self {
        Self::new(1)
    }
}
