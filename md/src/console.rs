//! Line-oriented output shared by the client, components, and mediator

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::error::Result;

enum Sink {
    Stdout,
    Capture(Vec<String>),
}

/// Cloneable handle to the output every participant prints to
///
/// All clones write to the same sink, so lines appear in exactly the order the
/// calls were made.
#[derive(Clone)]
pub struct Console {
    sink: Rc<RefCell<Sink>>,
}

impl Console {
    /// Console that writes to standard output
    pub fn stdout() -> Self {
        Self {
            sink: Rc::new(RefCell::new(Sink::Stdout)),
        }
    }

    /// Console that keeps every line in memory
    pub fn capture() -> Self {
        Self {
            sink: Rc::new(RefCell::new(Sink::Capture(Vec::new()))),
        }
    }

    /// Write one line of text
    pub fn line(&self, text: impl AsRef<str>) -> Result<()> {
        let text = text.as_ref();
        match &mut *self.sink.borrow_mut() {
            Sink::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", text)?;
                out.flush()?;
            }
            Sink::Capture(lines) => lines.push(text.to_string()),
        }
        Ok(())
    }

    /// Write an empty line
    pub fn blank(&self) -> Result<()> {
        self.line("")
    }

    /// Lines written so far (always empty for a stdout console)
    pub fn lines(&self) -> Vec<String> {
        match &*self.sink.borrow() {
            Sink::Stdout => Vec::new(),
            Sink::Capture(lines) => lines.clone(),
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &*self.sink.borrow() {
            Sink::Stdout => "stdout",
            Sink::Capture(_) => "capture",
        };
        f.debug_struct("Console").field("sink", &kind).finish()
    }
}
