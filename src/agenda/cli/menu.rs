//! # Menu Loop
//!
//! A two-state machine. `Running` loops: show the menu, read a choice, dispatch,
//! pause. `Terminated` is reached on `f` (after the farewell) or when stdin
//! closes. Domain errors and unknown options print a message and keep running.

use super::handlers::{
    handle_create_appointment, handle_list_all_appointments, handle_list_for_person,
    handle_list_people, handle_register_person,
};
use super::render::{
    domain_message, render_menu, render_messages, FAREWELL, INVALID_OPTION, MENU_PROMPT,
    PAUSE_PROMPT,
};
use agenda::api::AgendaApi;
use agenda::error::{AgendaError, Result};
use agenda::input::Prompter;
use agenda::store::DataStore;
use console::Term;
use log::{debug, info};
use std::io::{BufRead, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    RegisterPerson,
    ListPeople,
    CreateAppointment,
    ListForPerson,
    ListAllAppointments,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        MenuOption::RegisterPerson,
        MenuOption::ListPeople,
        MenuOption::CreateAppointment,
        MenuOption::ListForPerson,
        MenuOption::ListAllAppointments,
        MenuOption::Exit,
    ];

    /// Parses a menu choice. Case-insensitive, surrounding whitespace ignored.
    pub fn from_input(input: &str) -> Option<Self> {
        let choice = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|opt| opt.key() == choice)
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuOption::RegisterPerson => "a",
            MenuOption::ListPeople => "b",
            MenuOption::CreateAppointment => "c",
            MenuOption::ListForPerson => "d",
            MenuOption::ListAllAppointments => "e",
            MenuOption::Exit => "f",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::RegisterPerson => "Registrar persona (Id único)",
            MenuOption::ListPeople => "Listar personas",
            MenuOption::CreateAppointment => "Crear cita para una persona",
            MenuOption::ListForPerson => "Listar citas por PersonaId",
            MenuOption::ListAllAppointments => "Mostrar todas las citas",
            MenuOption::Exit => "Salir",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

/// What happens on screen between two commands.
pub trait Screen {
    /// Whether `wait_and_clear` actually blocks for a key press.
    fn pauses(&self) -> bool;

    fn wait_and_clear(&mut self) -> Result<()>;
}

/// The real terminal. Pausing and clearing only happen when both stdin and
/// stdout are attached to a terminal.
pub struct TermScreen {
    term: Term,
    pause: bool,
    clear: bool,
}

impl TermScreen {
    pub fn new(pause: bool, clear: bool) -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && std::io::stdin().is_terminal();
        Self {
            term,
            pause: pause && interactive,
            clear: clear && interactive,
        }
    }
}

impl Screen for TermScreen {
    fn pauses(&self) -> bool {
        self.pause
    }

    fn wait_and_clear(&mut self) -> Result<()> {
        if self.pause {
            self.term.read_key()?;
        }
        if self.clear {
            self.term.clear_screen()?;
        }
        Ok(())
    }
}

/// Runs one iteration of the menu.
pub fn step<S, R, W, T>(
    api: &mut AgendaApi<S>,
    io: &mut Prompter<R, W>,
    screen: &mut T,
) -> Result<MenuState>
where
    S: DataStore,
    R: BufRead,
    W: Write,
    T: Screen,
{
    write!(io.output(), "{}", render_menu())?;
    let choice = io.read_line(MENU_PROMPT)?;

    let outcome = match MenuOption::from_input(&choice) {
        Some(MenuOption::Exit) => {
            debug!("menu option: exit");
            writeln!(io.output(), "{}", FAREWELL)?;
            return Ok(MenuState::Terminated);
        }
        Some(option) => {
            debug!("menu option: {:?}", option);
            dispatch(option, api, io)
        }
        None => {
            debug!("invalid menu option {:?}", choice.trim());
            writeln!(io.output(), "{}", INVALID_OPTION)?;
            Ok(())
        }
    };

    if let Err(err) = outcome {
        match domain_message(&err) {
            Some(message) => write!(io.output(), "{}", render_messages(&[message]))?,
            None => return Err(err),
        }
    }

    if screen.pauses() {
        write!(io.output(), "\n{}", PAUSE_PROMPT)?;
        io.output().flush()?;
        screen.wait_and_clear()?;
    } else {
        writeln!(io.output())?;
    }
    Ok(MenuState::Running)
}

fn dispatch<S, R, W>(
    option: MenuOption,
    api: &mut AgendaApi<S>,
    io: &mut Prompter<R, W>,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    match option {
        MenuOption::RegisterPerson => handle_register_person(api, io),
        MenuOption::ListPeople => handle_list_people(api, io),
        MenuOption::CreateAppointment => handle_create_appointment(api, io),
        MenuOption::ListForPerson => handle_list_for_person(api, io),
        MenuOption::ListAllAppointments => handle_list_all_appointments(api, io),
        MenuOption::Exit => Ok(()),
    }
}

/// Drives the menu until it terminates. A closed stdin ends the session cleanly.
pub fn run_menu<S, R, W, T>(
    api: &mut AgendaApi<S>,
    io: &mut Prompter<R, W>,
    screen: &mut T,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
    T: Screen,
{
    info!("session started");
    let mut state = MenuState::Running;
    while state == MenuState::Running {
        state = match step(api, io, screen) {
            Ok(next) => next,
            Err(AgendaError::InputClosed) => {
                info!("input closed, leaving the menu");
                writeln!(io.output())?;
                MenuState::Terminated
            }
            Err(err) => return Err(err),
        };
    }
    info!("session ended");
    Ok(())
}
