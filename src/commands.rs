//! Dispatch of commands to the note service

use std::io::Write;

use crate::cli::Command;
use crate::error::Error;
use crate::error::Result;
use crate::input::InputSource;
use crate::notes::NoteField;
use crate::presenter::Presenter;
use crate::presenter::RenderOptions;
use crate::service::FieldUpdate;
use crate::service::NoteService;
use crate::storage::Storage;

/// Everything a command needs to do its work
pub struct Context<'a, S, I, W> {
    pub service: &'a NoteService<S>,
    pub presenter: &'a Presenter,
    pub input: &'a mut I,
    pub out: &'a mut W,
}

/// Run a single command, no command lists the notes without their text
///
/// # Errors
///
/// Will return `Err` for invalid IDs, unknown notes and failing storage
pub async fn dispatch<S, I, W>(
    command: Option<Command>,
    context: Context<'_, S, I, W>,
) -> Result<()>
where
    S: Storage,
    I: InputSource,
    W: Write,
{
    let Context {
        service,
        presenter,
        input,
        out,
    } = context;

    match command {
        None => {
            let notes = service.list().await?;
            presenter.render(
                out,
                &notes,
                RenderOptions {
                    show_text: false,
                    show_total: true,
                },
            )?;
        }
        Some(Command::Get { id }) => {
            let note = service.get(id.as_deref()).await?;
            presenter.render(
                out,
                &[note],
                RenderOptions {
                    show_text: true,
                    show_total: false,
                },
            )?;
        }
        Some(Command::Add) => {
            let id = service.add(input).await?;
            writeln!(out, "Note {id} created!")?;
        }
        Some(Command::Update { id }) => {
            let report = service.update(id.as_deref(), input).await?;

            for (field, outcome) in report.fields() {
                match (field, outcome) {
                    (_, FieldUpdate::Skipped | FieldUpdate::Unanswered(_)) => {}
                    (NoteField::Title, FieldUpdate::Updated) => writeln!(out, "Title updated!")?,
                    (NoteField::Body, FieldUpdate::Updated) => writeln!(out, "Text updated!")?,
                    (field, FieldUpdate::Failed(_)) => {
                        writeln!(out, "Could not update the note {field}.")?;
                    }
                }
            }

            let has_failures = report.has_failures();

            if let FieldUpdate::Unanswered(err) = report.body {
                return Err(Error::Io(err));
            }

            if has_failures {
                return Err(Error::UpdateIncomplete);
            }
        }
        Some(Command::List) => {
            let notes = service.list().await?;
            presenter.render(
                out,
                &notes,
                RenderOptions {
                    show_text: true,
                    show_total: true,
                },
            )?;
        }
        Some(Command::Remove { id }) => {
            let id = service.remove(id.as_deref()).await?;
            writeln!(out, "Note {id} removed.")?;
        }
    }

    Ok(())
}
