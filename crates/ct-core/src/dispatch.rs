//! Explicit event subscription between a host and a lifecycle handler.
//!
//! The host constructs a handler, registers it with a [`Dispatcher`], and
//! pushes events through [`Dispatcher::dispatch`] one at a time, on its own
//! thread. Routes are plain function pointers chosen at subscription time, so
//! a single handler method may serve several event names.

use std::collections::HashMap;

use crate::event::{LifecycleEvent, TaskEventName};

/// Route target for per-task events.
pub type TaskHook<H> = fn(&mut H, &str);

/// Route target for run completion.
pub type RunHook<H> = fn(&mut H) -> Result<(), <H as LifecycleHandler>::Error>;

/// The capability set a lifecycle subscriber provides.
pub trait LifecycleHandler {
    /// Error raised when finishing the run fails.
    type Error;

    /// A task has started.
    fn on_task_start(&mut self, task: &str);

    /// A task has finished, whatever its outcome.
    fn on_task_end(&mut self, task: &str);

    /// All task events for the run have been delivered.
    fn on_run_end(&mut self) -> Result<(), Self::Error>;

    /// Subscribes this handler's methods to their event names.
    ///
    /// `on_task_end` is registered once for each end outcome.
    fn register(dispatcher: &mut Dispatcher<Self>)
    where
        Self: Sized,
    {
        dispatcher.subscribe(TaskEventName::Start, Self::on_task_start);
        dispatcher.subscribe(TaskEventName::Ok, Self::on_task_end);
        dispatcher.subscribe(TaskEventName::Failed, Self::on_task_end);
        dispatcher.subscribe(TaskEventName::Skipped, Self::on_task_end);
        dispatcher.subscribe_run_end(Self::on_run_end);
    }
}

/// Owns a handler and routes lifecycle events to it.
pub struct Dispatcher<H: LifecycleHandler> {
    handler: H,
    task_routes: HashMap<TaskEventName, TaskHook<H>>,
    run_end: Option<RunHook<H>>,
}

impl<H: LifecycleHandler> Dispatcher<H> {
    /// Creates a dispatcher with no routes.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            task_routes: HashMap::new(),
            run_end: None,
        }
    }

    /// Creates a dispatcher with the handler's own [`LifecycleHandler::register`] routes.
    pub fn with_default_routes(handler: H) -> Self {
        let mut dispatcher = Self::new(handler);
        H::register(&mut dispatcher);
        dispatcher
    }

    /// Routes `name` to `hook`, replacing any previous route for that name.
    pub fn subscribe(&mut self, name: TaskEventName, hook: TaskHook<H>) {
        self.task_routes.insert(name, hook);
    }

    /// Routes run completion to `hook`.
    pub fn subscribe_run_end(&mut self, hook: RunHook<H>) {
        self.run_end = Some(hook);
    }

    /// Delivers one event. Events without a route are dropped.
    pub fn dispatch(&mut self, event: &LifecycleEvent) -> Result<(), H::Error> {
        if let Some((name, task)) = event.task_event() {
            self.route_task(name, task);
            return Ok(());
        }

        match self.run_end {
            Some(hook) => hook(&mut self.handler),
            None => {
                tracing::trace!("no subscriber for run end");
                Ok(())
            }
        }
    }

    pub const fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_inner(self) -> H {
        self.handler
    }

    fn route_task(&mut self, name: TaskEventName, task: &str) {
        if let Some(&hook) = self.task_routes.get(&name) {
            hook(&mut self.handler, task);
        } else {
            tracing::trace!(event = %name, task, "no subscriber for event");
        }
    }
}
