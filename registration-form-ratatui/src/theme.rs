use ratatui::style::Color;

/// Color theme for the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub placeholder: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            placeholder: Color::DarkGray,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}
