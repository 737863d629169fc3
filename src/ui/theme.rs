use crate::config::ThemeConfig;
use crate::ui::style::{Color, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub card_border: Style,
    pub card_value: Style,
    pub placeholder: Style,
    pub label: Style,
    pub focused_label: Style,
    pub input_border: Style,
    pub focused: Style,
    pub error: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub heading: Style,
    pub muted: Style,
    pub hint: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self::from_config(&ThemeConfig::default())
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            card_border: Style::new().color(config.accent),
            card_value: Style::new().color(config.text).bold(),
            placeholder: Style::new().color(config.placeholder),
            label: Style::new().bold(),
            focused_label: Style::new().color(config.accent).bold().underline(),
            input_border: Style::new().color(config.placeholder),
            focused: Style::new().color(config.accent).bold(),
            error: Style::new().color(config.error),
            button: Style::new().color(config.text).background(config.accent).bold(),
            button_disabled: Style::new().color(config.placeholder).dim(),
            heading: Style::new().color(config.accent).bold(),
            muted: Style::new().color(config.placeholder),
            hint: Style::new().color(Color::DarkGrey),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
