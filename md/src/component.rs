//! Components that never talk to each other directly
//!
//! A component does its own work, prints one line about it, and then hands
//! control to whichever mediator it was wired to. The mediator reference is a
//! weak back reference: the mediator owns the components, never the reverse.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::console::Console;
use crate::error::{Error, Result};
use crate::event::EventId;
use crate::mediator::Mediator;

/// Behaviour shared by every component: holding a replaceable mediator
pub trait Component {
    /// Stable identifier, e.g. `Component1`
    fn name(&self) -> &'static str;

    /// Replace the stored mediator reference
    ///
    /// Can be called at any time; setting the same mediator twice is a no-op.
    fn set_mediator(&self, mediator: Weak<dyn Mediator>);

    /// The currently wired mediator, if any and still alive
    fn mediator(&self) -> Option<Rc<dyn Mediator>>;
}

struct ComponentBase {
    name: &'static str,
    number: u8,
    console: Console,
    mediator: RefCell<Option<Weak<dyn Mediator>>>,
}

impl ComponentBase {
    fn new(name: &'static str, number: u8, console: Console) -> Self {
        Self {
            name,
            number,
            console,
            mediator: RefCell::new(None),
        }
    }

    fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        debug!("{}::set_mediator", self.name);
        *self.mediator.borrow_mut() = Some(mediator);
    }

    fn mediator(&self) -> Option<Rc<dyn Mediator>> {
        self.mediator.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn require_mediator(&self) -> Result<Rc<dyn Mediator>> {
        match self.mediator.borrow().as_ref() {
            None => Err(Error::MediatorNotConfigured { component: self.name }),
            Some(weak) => weak.upgrade().ok_or(Error::MediatorReleased { component: self.name }),
        }
    }

    /// Print the operation line, then notify the mediator
    ///
    /// The mediator is resolved before anything is printed, so a failed
    /// precondition leaves no output behind.
    fn operate(&self, sender: &dyn Component, event: EventId) -> Result<()> {
        let mediator = self.require_mediator()?;
        debug!("{}::operate: event={}", self.name, event);
        self.console.line(format!("Component {} does {}.", self.number, event))?;
        mediator.notify(sender, event)
    }
}

/// Component offering operations A and B
pub struct Component1 {
    base: ComponentBase,
}

impl Component1 {
    pub const NAME: &'static str = "Component1";

    pub fn new(console: Console) -> Self {
        Self {
            base: ComponentBase::new(Self::NAME, 1, console),
        }
    }

    pub fn do_a(&self) -> Result<()> {
        self.base.operate(self, EventId::A)
    }

    pub fn do_b(&self) -> Result<()> {
        self.base.operate(self, EventId::B)
    }
}

impl Component for Component1 {
    fn name(&self) -> &'static str {
        self.base.name
    }

    fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        self.base.set_mediator(mediator);
    }

    fn mediator(&self) -> Option<Rc<dyn Mediator>> {
        self.base.mediator()
    }
}

/// Component offering operations C and D
pub struct Component2 {
    base: ComponentBase,
}

impl Component2 {
    pub const NAME: &'static str = "Component2";

    pub fn new(console: Console) -> Self {
        Self {
            base: ComponentBase::new(Self::NAME, 2, console),
        }
    }

    pub fn do_c(&self) -> Result<()> {
        self.base.operate(self, EventId::C)
    }

    pub fn do_d(&self) -> Result<()> {
        self.base.operate(self, EventId::D)
    }
}

impl Component for Component2 {
    fn name(&self) -> &'static str {
        self.base.name
    }

    fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        self.base.set_mediator(mediator);
    }

    fn mediator(&self) -> Option<Rc<dyn Mediator>> {
        self.base.mediator()
    }
}
