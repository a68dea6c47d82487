//! # Rendering
//!
//! Turns `CmdResult` values into terminal text. Everything here returns a
//! `String`; the menu decides where it is written.
//!
//! Tables use fixed column widths. Numbers are right-aligned, text left-aligned,
//! columns are joined with ` | ` and the header is followed by a dash rule as wide
//! as the table. Padding is computed on display width so accented names line up.
//! Values wider than their column are printed in full.

use super::menu::MenuOption;
use super::styles::AGENDA_THEME;
use agenda::api::CmdMessage;
use agenda::error::AgendaError;
use agenda::model::{Appointment, Person};
use unicode_width::UnicodeWidthStr;

pub const MENU_TITLE: &str = "==== AgendaPro - Gestión de Personas y Citas ====";
pub const MENU_PROMPT: &str = "Seleccione una opción: ";
pub const INVALID_OPTION: &str = "Opción inválida. Intente nuevamente.";
pub const FAREWELL: &str = "Saliendo... ¡Hasta luego!";
pub const PAUSE_PROMPT: &str = "Presione una tecla para continuar...";

const COLUMN_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    title: &'static str,
    width: usize,
    align: Align,
}

const PEOPLE_COLUMNS: &[Column] = &[
    Column {
        title: "Id",
        width: 6,
        align: Align::Right,
    },
    Column {
        title: "Nombre",
        width: 25,
        align: Align::Left,
    },
    Column {
        title: "Teléfono",
        width: 15,
        align: Align::Left,
    },
];

const APPOINTMENT_COLUMNS: &[Column] = &[
    Column {
        title: "PersonaId",
        width: 9,
        align: Align::Right,
    },
    Column {
        title: "Fecha",
        width: 19,
        align: Align::Left,
    },
    Column {
        title: "Descripción",
        width: 40,
        align: Align::Left,
    },
];

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

fn table_width(columns: &[Column]) -> usize {
    let widths: usize = columns.iter().map(|c| c.width).sum();
    widths + COLUMN_SEPARATOR.len() * columns.len().saturating_sub(1)
}

fn render_row(columns: &[Column], cells: &[String]) -> String {
    columns
        .iter()
        .zip(cells)
        .map(|(col, cell)| pad(cell, col.width, col.align))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

fn render_table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let titles: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        AGENDA_THEME
            .table_header
            .apply_to(render_row(columns, &titles))
    ));
    out.push_str(&"-".repeat(table_width(columns)));
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(columns, row));
        out.push('\n');
    }
    out
}

pub fn render_people(people: &[Person]) -> String {
    let rows: Vec<Vec<String>> = people
        .iter()
        .map(|p| vec![p.id.to_string(), p.name.clone(), p.phone.clone()])
        .collect();
    render_table(PEOPLE_COLUMNS, &rows)
}

pub fn render_appointments(appointments: &[Appointment]) -> String {
    let rows: Vec<Vec<String>> = appointments
        .iter()
        .map(|a| {
            vec![
                a.person_id.to_string(),
                a.formatted_datetime(),
                a.description.clone(),
            ]
        })
        .collect();
    render_table(APPOINTMENT_COLUMNS, &rows)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            format!(
                "{}\n",
                AGENDA_THEME.for_level(m.level).apply_to(&m.content)
            )
        })
        .collect()
}

/// The user-facing line for an error that aborts a command, if it is one.
pub fn domain_message(err: &AgendaError) -> Option<CmdMessage> {
    match err {
        AgendaError::DuplicatePerson(_) => Some(CmdMessage::error(
            "❌ Ya existe una persona con ese Id. Intente nuevamente.",
        )),
        AgendaError::PersonNotFound(_) => {
            Some(CmdMessage::error("❌ No existe una persona con ese Id."))
        }
        _ => None,
    }
}

pub fn render_section(title: &str) -> String {
    format!("\n{}\n", AGENDA_THEME.section.apply_to(title))
}

pub fn render_menu() -> String {
    let mut out = format!("{}\n", AGENDA_THEME.title.apply_to(MENU_TITLE));
    for option in MenuOption::ALL {
        out.push_str(&format!("{}) {}\n", option.key(), option.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use console::strip_ansi_codes;
    use pretty_assertions::assert_eq;

    fn plain(s: String) -> String {
        strip_ansi_codes(&s).into_owned()
    }

    #[test]
    fn people_table_layout() {
        let people = vec![
            Person::new(1, "Ana", "555-1111"),
            Person::new(-20, "José Ñúñez", "555-2222"),
        ];

        let expected = concat!(
            "    Id | Nombre                    | Teléfono       \n",
            "----------------------------------------------------\n",
            "     1 | Ana                       | 555-1111       \n",
            "   -20 | José Ñúñez                | 555-2222       \n",
        );
        assert_eq!(plain(render_people(&people)), expected);
    }

    #[test]
    fn rule_matches_table_width() {
        assert_eq!(table_width(PEOPLE_COLUMNS), 52);
        assert_eq!(table_width(APPOINTMENT_COLUMNS), 74);
    }

    #[test]
    fn appointments_table_layout() {
        let when = NaiveDate::from_ymd_opt(2025, 10, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let out = plain(render_appointments(&[Appointment::new(1, when, "Checkup")]));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PersonaId | Fecha               | Descripción"));
        assert_eq!(lines[1], "-".repeat(74));
        assert!(lines[2].starts_with("        1 | 2025-10-15 14:30    | Checkup"));
        assert_eq!(lines[2].len(), 74);
    }

    #[test]
    fn long_values_are_not_truncated() {
        let long_name = "N".repeat(40);
        let out = plain(render_people(&[Person::new(1, long_name.clone(), "1")]));
        assert!(out.contains(&long_name));
    }

    #[test]
    fn domain_messages() {
        let dup = domain_message(&AgendaError::DuplicatePerson(1)).unwrap();
        assert_eq!(
            dup.content,
            "❌ Ya existe una persona con ese Id. Intente nuevamente."
        );
        let missing = domain_message(&AgendaError::PersonNotFound(9)).unwrap();
        assert_eq!(missing.content, "❌ No existe una persona con ese Id.");
        assert!(domain_message(&AgendaError::InputClosed).is_none());
    }

    #[test]
    fn menu_lists_six_options() {
        let menu = plain(render_menu());
        assert!(menu.starts_with(MENU_TITLE));
        assert!(menu.contains("a) Registrar persona (Id único)\n"));
        assert!(menu.contains("f) Salir\n"));
        assert_eq!(menu.lines().count(), 7);
    }
}
