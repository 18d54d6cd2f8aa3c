use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::api::{RecordApi, Resource};
use crate::model::Id;
use crate::ops::Collection;
use crate::view::ViewEvent;

pub struct CLIContext<R: Resource, A: RecordApi<R>> {
    pub collection: Collection<R, A>,
    pub title: &'static str,
    stale: Rc<Cell<bool>>,
}

impl<R: Resource, A: RecordApi<R>> CLIContext<R, A> {
    /// Wraps a collection and subscribes to it so the REPL knows when the
    /// list needs redrawing.
    pub fn new(mut collection: Collection<R, A>, title: &'static str) -> Self {
        let stale = Rc::new(Cell::new(true));
        let flag = Rc::clone(&stale);
        collection
            .view_mut()
            .subscribe(move |_event: &ViewEvent<R>| flag.set(true));
        Self {
            collection,
            title,
            stale,
        }
    }

    /// True once per batch of changes.
    pub fn take_stale(&self) -> bool {
        self.stale.replace(false)
    }

    pub fn mark_stale(&self) {
        self.stale.set(true);
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    pub fn confirm(&self, prompt: &str) -> bool {
        matches!(self.prompt(prompt).as_deref(), Some(s) if s.eq_ignore_ascii_case("y"))
    }

    /// Parses an id argument, printing usage on failure.
    pub fn parse_id(&self, args: &str, usage: &str) -> Option<Id<R>> {
        match Id::parse(args) {
            Ok(id) => Some(id),
            Err(_) => {
                println!("Usage: {}", usage);
                None
            }
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::MktError) {
        println!("Error: {}", e);
    }
}
