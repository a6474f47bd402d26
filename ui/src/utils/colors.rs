//! Shared color constants for the UI.

use egui::Color32;

/// Background behind the part of a cell that matched its filter.
pub const COLOR_HIGHLIGHT: Color32 = Color32::from_rgb(254, 240, 138);

/// Text drawn on top of [`COLOR_HIGHLIGHT`]; dark so it reads in both themes.
pub const COLOR_HIGHLIGHT_TEXT: Color32 = Color32::from_rgb(33, 33, 33);

/// Red color for error/unavailable/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
