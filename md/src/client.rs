//! Client that builds the components, wires the mediator, and triggers operations

use std::rc::Rc;

use log::info;

use crate::component::{Component1, Component2};
use crate::console::Console;
use crate::error::Result;
use crate::event::EventId;
use crate::mediator::ConcreteMediator;

/// Operations triggered when nothing else is asked for
pub const DEFAULT_SCENARIO: [EventId; 2] = [EventId::A, EventId::D];

/// Entry point of the demo; the components it creates belong to the mediator
pub struct Client {
    mediator: Rc<ConcreteMediator>,
    console: Console,
}

impl Client {
    /// Create both components first, then the mediator that binds them
    pub fn wire(console: Console) -> Self {
        let component1 = Rc::new(Component1::new(console.clone()));
        let component2 = Rc::new(Component2::new(console.clone()));
        let mediator = ConcreteMediator::new(component1, component2, console.clone());
        info!("Client::wire: components wired to mediator");

        Self { mediator, console }
    }

    pub fn mediator(&self) -> &Rc<ConcreteMediator> {
        &self.mediator
    }

    /// Announce and invoke the operation named by `event` on its component
    pub fn trigger(&self, event: EventId) -> Result<()> {
        info!("Client::trigger: event={}", event);
        self.console.line(format!("Client triggers operation {}.", event))?;
        self.mediator.perform(event)
    }

    /// Trigger each operation in order, one blank line between them
    pub fn run(&self, events: &[EventId]) -> Result<()> {
        for (i, &event) in events.iter().enumerate() {
            if i > 0 {
                self.console.blank()?;
            }
            self.trigger(event)?;
        }
        Ok(())
    }
}
