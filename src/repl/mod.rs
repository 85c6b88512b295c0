//! Interactive read-eval-print loop.
//!
//! Blocking and single-threaded: read one line, dispatch, print the reply,
//! repeat until the exit verb or end of input. The loop is generic over its
//! input and output streams so whole sessions can be scripted in tests;
//! `main` runs it over locked stdin/stdout.

pub mod command;
pub mod handlers;
pub mod messages;

pub use command::Command;

use crate::error::{CommandError, ReplError};
use crate::models::AddressBook;
use crate::storage::JsonStore;
use chrono::Local;
use handlers::AddReply;
use std::io::{BufRead, Write};
use tracing::debug;

/// The interactive session: the in-memory book, its backing store, and the
/// console streams. Every mutating command is persisted before its reply is
/// printed.
pub struct Repl<R, W> {
    book: AddressBook,
    store: JsonStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a session over the given streams.
    pub fn new(book: AddressBook, store: JsonStore, input: R, output: W) -> Self {
        Self {
            book,
            store,
            input,
            output,
        }
    }

    /// The current in-memory book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until the exit verb or end of input.
    ///
    /// # Errors
    ///
    /// Console I/O failures and storage failures are fatal; user mistakes
    /// (bad input, unknown contacts) are rendered as messages and the loop
    /// continues.
    pub fn run(&mut self) -> Result<(), ReplError> {
        loop {
            write!(self.output, "{}", messages::PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // EOF behaves like the exit verb
                break;
            }

            let Some(cmd) = Command::parse(&line) else {
                continue;
            };
            debug!(?cmd, "dispatching");

            match cmd {
                Command::Exit => break,
                Command::Unknown(_) => self.say(messages::UNKNOWN_COMMAND)?,
                Command::ShowAll => {
                    let listing = handlers::handle_show_all(&self.book);
                    self.say(&listing)?;
                }
                Command::Search(args) => {
                    let reply = handlers::handle_search(&self.book, args.as_deref());
                    self.report(reply)?;
                }
                Command::Birthday(args) => {
                    let today = Local::now().date_naive();
                    let reply = handlers::handle_birthday(&self.book, args.as_deref(), today);
                    self.report(reply)?;
                }
                Command::Edit(args) => {
                    let reply = handlers::handle_edit(&mut self.book, args.as_deref());
                    if reply.is_ok() {
                        self.persist()?;
                    }
                    self.report(reply)?;
                }
                Command::Delete(args) => {
                    let reply = handlers::handle_delete(&mut self.book, args.as_deref());
                    if reply.is_ok() {
                        self.persist()?;
                    }
                    self.report(reply)?;
                }
                Command::Add(args) => self.run_add(args.as_deref())?,
            }
        }
        Ok(())
    }

    /// The add command, including the overwrite confirmation dialogue.
    fn run_add(&mut self, args: Option<&str>) -> Result<(), ReplError> {
        match handlers::handle_add(&mut self.book, args) {
            Ok(AddReply::Done(text)) => {
                self.persist()?;
                self.say(&text)
            }
            Ok(AddReply::Confirm { name, phone }) => {
                write!(self.output, "{}", messages::CONFIRM_OVERWRITE)?;
                self.output.flush()?;

                let mut answer = String::new();
                self.input.read_line(&mut answer)?;

                match answer.trim().to_lowercase().as_str() {
                    "так" => {
                        let reply = handlers::apply_overwrite(&mut self.book, &name, &phone);
                        if reply.is_ok() {
                            self.persist()?;
                        }
                        self.report(reply)
                    }
                    "ні" => self.say(messages::OVERWRITE_DECLINED),
                    _ => self.say(messages::OVERWRITE_BAD_ANSWER),
                }
            }
            Err(err) => self.say(handlers::render_error(&err)),
        }
    }

    fn say(&mut self, text: &str) -> Result<(), ReplError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn report(&mut self, reply: Result<String, CommandError>) -> Result<(), ReplError> {
        match reply {
            Ok(text) => self.say(&text),
            Err(err) => self.say(handlers::render_error(&err)),
        }
    }

    fn persist(&mut self) -> Result<(), ReplError> {
        self.store.save(&self.book)?;
        Ok(())
    }
}
