//! The read–dispatch–print loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use archive_client::download;
use archive_client::{Controller, Notice, Session};

use crate::Result;
use crate::command::{Command, SaveTarget};
use crate::render;

pub struct Repl {
    controller: Controller,
    session: Session,
    download_dir: PathBuf,
}

impl Repl {
    pub fn new(controller: Controller, session: Session, download_dir: PathBuf) -> Self {
        Self {
            controller,
            session,
            download_dir,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(msg) => {
                    writeln!(out, "{}", Notice::error(msg))?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.dispatch(command, out).await?;
            out.flush()?;
        }
        Ok(())
    }

    async fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        let session = &mut self.session;
        match command {
            Command::Nothing | Command::Quit => {}
            Command::Help => write!(out, "{}", render::help(session.controls()))?,
            Command::Url(url) => {
                let notice = self.controller.ingest_url(session, &url).await;
                print_with(out, &notice, || session.messages().map(render::messages))?;
            }
            Command::File(path) => {
                let notice = self.controller.ingest_file(session, Path::new(&path)).await;
                print_with(out, &notice, || session.messages().map(render::messages))?;
            }
            Command::Summarise => {
                let notice = self.controller.summarise(session).await;
                print_with(out, &notice, || session.summary().map(render::summary))?;
            }
            Command::Ask(question) => {
                let before = session.transcript().len();
                let notice = self.controller.ask(session, &question).await;
                let new_turns = &session.transcript()[before..];
                if !new_turns.is_empty() {
                    write!(out, "{}", render::transcript(new_turns))?;
                }
                writeln!(out, "{notice}")?;
            }
            Command::Save(SaveTarget::Messages) => {
                let notice = download::download_messages(session, &self.download_dir);
                writeln!(out, "{notice}")?;
            }
            Command::Save(SaveTarget::Summary) => {
                let notice = download::download_summary(session, &self.download_dir);
                writeln!(out, "{notice}")?;
            }
            Command::Show => {
                match session.messages() {
                    Some(messages) => write!(out, "{}", render::messages(messages))?,
                    None => writeln!(out, "{}", Notice::info("Nothing ingested yet"))?,
                }
                if let Some(summary) = session.summary() {
                    write!(out, "{}", render::summary(summary))?;
                }
                write!(out, "{}", render::transcript(session.transcript()))?;
            }
        }
        Ok(())
    }
}

/// Prints the rendered state on success, then the notice.
fn print_with<W: Write>(
    out: &mut W,
    notice: &Notice,
    rendered: impl FnOnce() -> Option<String>,
) -> Result<()> {
    if !notice.is_error() {
        if let Some(text) = rendered() {
            write!(out, "{text}")?;
        }
    }
    writeln!(out, "{notice}")?;
    Ok(())
}
