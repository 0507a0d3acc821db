use crate::config::{LayeringConfig, ViewportConfig};
use crate::models::Position;

/// How a drawer is presented on the current viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Bottom-anchored sheet for small viewports.
    Sheet,
    /// Positioned dialog with backdrop.
    #[default]
    Dialog,
}

impl Layout {
    pub fn for_width(width: f64, viewport: &ViewportConfig) -> Self {
        if width < f64::from(viewport.mobile_max_width) {
            Layout::Sheet
        } else {
            Layout::Dialog
        }
    }

    pub fn is_sheet(self) -> bool {
        self == Layout::Sheet
    }
}

/// z-index arithmetic for stacked drawers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layering {
    pub base: u32,
    pub step: u32,
}

impl Default for Layering {
    fn default() -> Self {
        Self::from(&LayeringConfig::default())
    }
}

impl From<&LayeringConfig> for Layering {
    fn from(config: &LayeringConfig) -> Self {
        Self {
            base: config.base_z_index,
            step: config.step,
        }
    }
}

impl Layering {
    /// z-index of the dialog at `index` in the stack.
    pub fn dialog(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(index))
    }

    /// z-index of the sheet at `index`, placed above `external_sheets` sheets
    /// that were opened outside the drawer stack.
    pub fn sheet(&self, index: usize, external_sheets: usize) -> u32 {
        let above = u32::try_from(external_sheets.saturating_add(index)).unwrap_or(u32::MAX);
        self.base.saturating_add(above)
    }

    pub fn for_layout(&self, layout: Layout, index: usize, external_sheets: usize) -> u32 {
        match layout {
            Layout::Sheet => self.sheet(index, external_sheets),
            Layout::Dialog => self.dialog(index),
        }
    }
}

/// CSS class anchoring a dialog container for `position`.
pub fn placement_class(position: Position) -> &'static str {
    match position {
        Position::Left => "drawer-backdrop drawer-at-left",
        Position::Right => "drawer-backdrop drawer-at-right",
        Position::Top => "drawer-backdrop drawer-at-top",
        Position::Bottom => "drawer-backdrop drawer-at-bottom",
        Position::Center => "drawer-backdrop drawer-at-center",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_classification() {
        let viewport = ViewportConfig::default();
        assert_eq!(Layout::for_width(375.0, &viewport), Layout::Sheet);
        assert_eq!(Layout::for_width(767.9, &viewport), Layout::Sheet);
        assert_eq!(Layout::for_width(768.0, &viewport), Layout::Dialog);
        assert_eq!(Layout::for_width(1440.0, &viewport), Layout::Dialog);
    }

    #[test]
    fn test_dialog_z_increases_with_index() {
        let layering = Layering::default();
        assert_eq!(layering.dialog(0), 1000);
        assert_eq!(layering.dialog(1), 1010);
        assert!(layering.dialog(2) > layering.dialog(1));
    }

    #[test]
    fn test_sheets_stack_above_external_sheets() {
        let layering = Layering::default();
        assert_eq!(layering.sheet(0, 0), 1000);
        assert_eq!(layering.sheet(0, 2), 1002);
        assert!(layering.sheet(0, 2) > layering.base + 1);
        assert_eq!(layering.for_layout(Layout::Sheet, 1, 2), 1003);
        assert_eq!(layering.for_layout(Layout::Dialog, 1, 2), 1010);
    }

    #[test]
    fn test_large_config_values_saturate() {
        let layering = Layering { base: u32::MAX - 5, step: u32::MAX };
        assert_eq!(layering.dialog(0), u32::MAX - 5);
        assert_eq!(layering.dialog(3), u32::MAX);
        assert_eq!(layering.sheet(10, 10), u32::MAX);
        assert_eq!(layering.sheet(usize::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_placement_class() {
        assert!(placement_class(Position::default()).ends_with("drawer-at-center"));
        assert!(placement_class(Position::Left).ends_with("drawer-at-left"));
    }
}
