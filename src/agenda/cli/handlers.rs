//! One handler per menu option.
//!
//! Handlers collect input through the [`Prompter`], call the API and write the
//! rendered result. Domain errors (`DuplicatePerson`, `PersonNotFound`) are
//! returned as-is: the menu turns them into a message and the command is over.
//! Input is not retried at that point; the user picks the option again.

use super::render::{render_appointments, render_messages, render_people, render_section};
use agenda::api::{AgendaApi, CmdResult};
use agenda::error::Result;
use agenda::input::Prompter;
use agenda::store::DataStore;
use std::io::{BufRead, Write};

fn write_result<R: BufRead, W: Write>(io: &mut Prompter<R, W>, result: &CmdResult) -> Result<()> {
    let out = io.output();
    if !result.listed_people.is_empty() {
        write!(out, "{}", render_people(&result.listed_people))?;
    }
    if !result.listed_appointments.is_empty() {
        write!(out, "{}", render_appointments(&result.listed_appointments))?;
    }
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}

pub fn handle_register_person<S, R, W>(
    api: &mut AgendaApi<S>,
    io: &mut Prompter<R, W>,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    write!(io.output(), "{}", render_section("-- Registrar persona --"))?;

    let id = io.read_int("Id (entero): ")?;
    api.ensure_person_available(id)?;

    let name = io.read_text("Nombre: ")?;
    let phone = io.read_text("Teléfono: ")?;

    let result = api.register_person(id, name, phone)?;
    write_result(io, &result)
}

pub fn handle_list_people<S, R, W>(api: &mut AgendaApi<S>, io: &mut Prompter<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    write!(io.output(), "{}", render_section("-- Lista de personas --"))?;
    let result = api.list_people()?;
    write_result(io, &result)
}

pub fn handle_create_appointment<S, R, W>(
    api: &mut AgendaApi<S>,
    io: &mut Prompter<R, W>,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    write!(io.output(), "{}", render_section("-- Crear cita --"))?;

    let person_id = io.read_int("PersonaId: ")?;
    api.find_person(person_id)?;

    let datetime = io.read_datetime("Fecha y hora (ej. 2025-10-15 14:30): ")?;
    let description = io.read_text("Descripción: ")?;

    let result = api.create_appointment(person_id, datetime, description)?;
    write_result(io, &result)
}

pub fn handle_list_for_person<S, R, W>(
    api: &mut AgendaApi<S>,
    io: &mut Prompter<R, W>,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    write!(
        io.output(),
        "{}",
        render_section("-- Listar citas por PersonaId --")
    )?;

    let person_id = io.read_int("PersonaId: ")?;
    let result = api.list_appointments_for(person_id)?;
    write_result(io, &result)
}

pub fn handle_list_all_appointments<S, R, W>(
    api: &mut AgendaApi<S>,
    io: &mut Prompter<R, W>,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    write!(io.output(), "{}", render_section("-- Todas las citas --"))?;
    let result = api.list_all_appointments()?;
    write_result(io, &result)
}
