//! The mediator and the reaction table that coordinates both components

use std::rc::{Rc, Weak};

use log::debug;

use crate::component::{Component, Component1, Component2};
use crate::console::Console;
use crate::error::Result;
use crate::event::EventId;

/// Receives notifications from components and decides what happens next
pub trait Mediator {
    /// Called by a component after it finished the operation named by `event`
    ///
    /// `sender` identifies the calling component. Reactions may call back
    /// into components, which notify again before this call returns.
    fn notify(&self, sender: &dyn Component, event: EventId) -> Result<()>;
}

/// Mediator wired to exactly one [`Component1`] and one [`Component2`]
pub struct ConcreteMediator {
    component1: Rc<Component1>,
    component2: Rc<Component2>,
    console: Console,
}

impl ConcreteMediator {
    /// Take ownership of both components and wire this mediator into each
    ///
    /// This is the only place components get their mediator.
    pub fn new(component1: Rc<Component1>, component2: Rc<Component2>, console: Console) -> Rc<Self> {
        let mediator = Rc::new(Self {
            component1,
            component2,
            console,
        });

        let weak: Weak<Self> = Rc::downgrade(&mediator);
        let handle: Weak<dyn Mediator> = weak;
        mediator.component1.set_mediator(handle.clone());
        mediator.component2.set_mediator(handle);
        debug!("ConcreteMediator::new: wired Component1 and Component2");

        mediator
    }

    /// Operations triggered in response to `event`, in execution order
    ///
    /// The graph formed by these rules must stay acyclic, otherwise a
    /// notification would never finish.
    pub fn reactions(event: EventId) -> &'static [EventId] {
        match event {
            EventId::A => &[EventId::C],
            EventId::D => &[EventId::B, EventId::C],
            EventId::B | EventId::C => &[],
        }
    }

    pub fn component1(&self) -> &Rc<Component1> {
        &self.component1
    }

    pub fn component2(&self) -> &Rc<Component2> {
        &self.component2
    }

    /// Invoke the operation named by `event` on the component that owns it
    pub fn perform(&self, event: EventId) -> Result<()> {
        match event {
            EventId::A => self.component1.do_a(),
            EventId::B => self.component1.do_b(),
            EventId::C => self.component2.do_c(),
            EventId::D => self.component2.do_d(),
        }
    }
}

impl Mediator for ConcreteMediator {
    fn notify(&self, sender: &dyn Component, event: EventId) -> Result<()> {
        let reactions = Self::reactions(event);
        debug!(
            "ConcreteMediator::notify: sender={} event={} reactions={}",
            sender.name(),
            event,
            reactions.len()
        );

        if reactions.is_empty() {
            return Ok(());
        }

        self.console
            .line(format!("Mediator reacts on {} and triggers following operations:", event))?;
        for &reaction in reactions {
            self.perform(reaction)?;
        }
        Ok(())
    }
}
