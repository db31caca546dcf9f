//! Line-oriented check-in loop over one [`Session`].

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use healia_core::mood_log::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use healia_core::{Analysis, RandomSource, Session};

use crate::command::{Command, ParseError, HELP};
use crate::render;

const PROMPT: &str = "healia> ";

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R: RandomSource> {
    session: Session<R>,
    export_dir: PathBuf,
}

impl<R: RandomSource> Shell<R> {
    pub fn new(session: Session<R>, export_dir: PathBuf) -> Self {
        Self {
            session,
            export_dir,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        interactive: bool,
    ) -> io::Result<()> {
        render::welcome(out)?;

        let mut input = input;
        let mut buf = Vec::new();
        loop {
            if interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\r', '\n']);

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.handle(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(ParseError::Blank) => {}
                Err(err) => writeln!(out, "{}", err.message())?,
            }
        }

        writeln!(
            out,
            "Session ended after {} check-in(s).",
            self.session.mood_log().len()
        )?;
        out.flush()
    }

    /// Apply one command. Domain errors are shown and the session continues.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::CheckIn { mood, text } => match self.session.analyze(&text, mood) {
                Analysis::Recorded(check_in) => render::check_in(out, &check_in)?,
                Analysis::Rejected { error, plan } => {
                    writeln!(out, "{}", error.user_message())?;
                    render::plan(out, &plan)?;
                }
            },
            Command::Condition(key) => match self.session.select_condition_by_key(&key) {
                Ok(selection) => {
                    match &selection.suggestion {
                        Some(suggestion) => render::suggestion(out, suggestion)?,
                        None => writeln!(out, "Condition cleared.")?,
                    }
                    if let Some(plan) = &selection.plan {
                        render::plan(out, plan)?;
                    }
                }
                Err(err) => writeln!(out, "{}", err.user_message())?,
            },
            Command::Herb(query) => match self.session.lookup_herb(&query) {
                Ok(info) => render::herb(out, &info)?,
                Err(err) => writeln!(out, "{}", err.user_message())?,
            },
            Command::Journal => writeln!(out, "{}", self.session.journal_prompt())?,
            Command::Log => render::mood_log(out, self.session.mood_log().entries())?,
            Command::Stats { json: false } => render::stats(out, &self.session.summary())?,
            Command::Stats { json: true } => {
                let json = serde_json::to_string_pretty(&self.session.summary())
                    .map_err(io::Error::from)?;
                writeln!(out, "{}", json)?;
            }
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.export_dir.join(EXPORT_FILE_NAME));
                match self.export(&path) {
                    Ok(()) => writeln!(
                        out,
                        "Exported {} entries to {} ({})",
                        self.session.mood_log().len(),
                        path.display(),
                        EXPORT_MIME_TYPE
                    )?,
                    Err(err) => {
                        tracing::warn!(path = %path.display(), error = %err, "Export failed");
                        writeln!(out, "Export failed: {}", err)?;
                    }
                }
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn export(&self, path: &Path) -> healia_core::Result<()> {
        let csv = self.session.export_csv()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, csv)?;
        Ok(())
    }
}
