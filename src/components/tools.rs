use egui::{Color32, RichText, Vec2};

use crate::ops::shapes::ShapeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Fill,
    ColorPicker,
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[
            Tool::Pencil,
            Tool::Eraser,
            Tool::Line,
            Tool::Rectangle,
            Tool::Circle,
            Tool::Fill,
            Tool::ColorPicker,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Fill => "Fill",
            Tool::ColorPicker => "Picker",
        }
    }

    /// Single-letter keyboard shortcut.
    pub fn shortcut(&self) -> char {
        match self {
            Tool::Pencil => 'P',
            Tool::Eraser => 'E',
            Tool::Line => 'L',
            Tool::Rectangle => 'R',
            Tool::Circle => 'C',
            Tool::Fill => 'F',
            Tool::ColorPicker => 'I',
        }
    }

    /// Case-insensitive inverse of [`Tool::shortcut`].
    pub fn from_shortcut(key: char) -> Option<Tool> {
        let key = key.to_ascii_uppercase();
        Tool::all().iter().copied().find(|t| t.shortcut() == key)
    }

    /// Drag-to-draw tools commit on release; the rest act on every cell the
    /// pointer crosses.
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            _ => None,
        }
    }
}

// ============================================================================
// Toolbar strip
// ============================================================================

/// One button per tool. Returns the tool the user clicked, if any.
pub fn show_tool_buttons(ui: &mut egui::Ui, active: Tool) -> Option<Tool> {
    let mut clicked = None;
    for &tool in Tool::all() {
        let text = RichText::new(tool.shortcut().to_string()).size(16.0).strong();
        let text = if tool == active {
            text.color(Color32::WHITE)
        } else {
            text.color(Color32::LIGHT_GRAY)
        };
        let button = egui::Button::new(text)
            .min_size(Vec2::splat(36.0))
            .selected(tool == active);
        let resp = ui
            .add(button)
            .on_hover_text(format!("{} ({})", tool.label(), tool.shortcut()));
        if resp.clicked() {
            clicked = Some(tool);
        }
    }
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_shortcuts_round_trip() {
        for &tool in Tool::all() {
            assert_eq!(Tool::from_shortcut(tool.shortcut()), Some(tool));
            assert_eq!(
                Tool::from_shortcut(tool.shortcut().to_ascii_lowercase()),
                Some(tool)
            );
        }
        assert_eq!(Tool::from_shortcut('Z'), None);
    }

    #[test]
    fn test_tool_shapes() {
        assert_eq!(Tool::Line.shape(), Some(ShapeKind::Line));
        assert_eq!(Tool::Rectangle.shape(), Some(ShapeKind::Rectangle));
        assert_eq!(Tool::Circle.shape(), Some(ShapeKind::Circle));
        assert_eq!(Tool::Pencil.shape(), None);
        assert_eq!(Tool::Fill.shape(), None);
        assert_eq!(Tool::default(), Tool::Pencil);
    }
}
