use agenda::api::MessageLevel;
use console::Style;
use once_cell::sync::Lazy;

pub struct AgendaTheme {
    pub title: Style,
    pub section: Style,
    pub table_header: Style,
    pub info: Style,
    pub success: Style,
    pub error: Style,
}

impl AgendaTheme {
    pub fn for_level(&self, level: MessageLevel) -> &Style {
        match level {
            MessageLevel::Info => &self.info,
            MessageLevel::Success => &self.success,
            MessageLevel::Error => &self.error,
        }
    }
}

pub static AGENDA_THEME: Lazy<AgendaTheme> = Lazy::new(|| AgendaTheme {
    title: Style::new().bold().cyan(),
    section: Style::new().bold(),
    table_header: Style::new().bold(),
    info: Style::new().dim(),
    success: Style::new().green(),
    error: Style::new().red(),
});
