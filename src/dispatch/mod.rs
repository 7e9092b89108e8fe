//! Routing of verified interactions to command handlers.
//!
//! A [`Dispatcher`] is built once at startup from a set of [`CommandHandler`]s and is immutable
//! afterwards. For every inbound interaction it produces exactly one synchronous response; a
//! handler that needs longer than Discord's initial response deadline returns
//! [`Outcome::Deferred`], whose task is handed to the [`TaskSupervisor`] while the placeholder is
//! returned immediately.

mod supervisor;

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio::time::Instant;
use tracing::{debug, info, warn};

pub use self::supervisor::TaskSupervisor;
use crate::builder::{acknowledge, defer_reply, CreateInteractionResponse};
use crate::constants;
use crate::http::{FollowUpTarget, Http};
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// Everything a handler gets to see about the invocation it serves.
///
/// A context is owned, so it can be moved into the background task of a deferred command.
#[derive(Clone, Debug)]
pub struct Context {
    pub interaction: CommandInteraction,
    pub http: Arc<Http>,
}

impl Context {
    /// Value of the first option named `name`, or `None` if the user did not supply it.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.interaction.data.get_value(name)
    }

    /// String value of the option named `name`.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get_value(name).and_then(Value::as_str)
    }

    /// The user who invoked the command.
    #[must_use]
    pub fn actor(&self) -> Option<&User> {
        self.interaction.actor()
    }

    /// Where follow-ups for this interaction go.
    #[must_use]
    pub fn followup_target(&self) -> FollowUpTarget {
        FollowUpTarget::from_interaction(&self.interaction)
    }
}

/// What a handler decided to answer.
pub enum Outcome {
    /// The response is complete and is sent back synchronously.
    Reply(CreateInteractionResponse),
    /// `response` is sent back now; `task` runs in the background and is expected to deliver the
    /// real answer through a follow-up.
    Deferred { response: CreateInteractionResponse, task: BoxFuture<'static, ()> },
}

impl Outcome {
    /// Defers with a plain [`defer_reply`] placeholder and runs `task` in the background.
    pub fn deferred<F>(task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self::Deferred {
            response: defer_reply(None),
            task: Box::pin(task),
        }
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reply(response) => f.debug_tuple("Reply").field(response).finish(),
            Self::Deferred {
                response, ..
            } => f.debug_struct("Deferred").field("response", response).finish_non_exhaustive(),
        }
    }
}

impl From<CreateInteractionResponse> for Outcome {
    fn from(response: CreateInteractionResponse) -> Self {
        Self::Reply(response)
    }
}

/// A slash command implementation.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// The name the command is registered under.
    fn name(&self) -> &str;

    /// Runs the command. Must return within Discord's initial response deadline; slow work
    /// belongs in [`Outcome::Deferred`].
    async fn invoke(&self, ctx: Context) -> Outcome;
}

/// The synchronous result of dispatching one interaction.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Dispatch {
    Respond(CreateInteractionResponse),
    /// No handler exists for the interaction; answered with a 400.
    Unknown,
}

/// Builds a [`Dispatcher`].
#[must_use]
pub struct DispatcherBuilder {
    http: Arc<Http>,
    supervisor: Option<TaskSupervisor>,
    commands: HashMap<String, Arc<dyn CommandHandler>>,
}

impl DispatcherBuilder {
    /// Registers a handler under its [`CommandHandler::name`]. A later handler with the same name
    /// replaces an earlier one.
    pub fn command<H: CommandHandler + 'static>(mut self, handler: H) -> Self {
        let name = handler.name().to_string();
        if self.commands.insert(name.clone(), Arc::new(handler)).is_some() {
            warn!("Command {} registered twice, keeping the last handler", name);
        }
        self
    }

    /// Uses the given supervisor for deferred tasks instead of a fresh one.
    pub fn supervisor(mut self, supervisor: TaskSupervisor) -> Self {
        self.supervisor = Some(supervisor);
        self
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            http: self.http,
            supervisor: self.supervisor.unwrap_or_default(),
            commands: self.commands,
        }
    }
}

/// Routes interactions to their handlers.
pub struct Dispatcher {
    http: Arc<Http>,
    supervisor: TaskSupervisor,
    commands: HashMap<String, Arc<dyn CommandHandler>>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.commands.keys().collect();
        names.sort();

        f.debug_struct("Dispatcher")
            .field("commands", &names)
            .field("supervisor", &self.supervisor)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn builder(http: Arc<Http>) -> DispatcherBuilder {
        DispatcherBuilder {
            http,
            supervisor: None,
            commands: HashMap::new(),
        }
    }

    #[must_use]
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }

    #[must_use]
    pub fn supervisor(&self) -> &TaskSupervisor {
        &self.supervisor
    }

    #[must_use]
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Produces the synchronous answer to `interaction`, spawning the background half of deferred
    /// commands.
    pub async fn dispatch(&self, interaction: &Interaction) -> Dispatch {
        match interaction {
            Interaction::Ping(_) => {
                info!("Handling Ping request");
                Dispatch::Respond(acknowledge())
            },
            Interaction::Command(command) => self.dispatch_command(command).await,
            Interaction::Unsupported(kind, _) => {
                debug!(?kind, "No handler for interaction type");
                Dispatch::Unknown
            },
        }
    }

    async fn dispatch_command(&self, command: &CommandInteraction) -> Dispatch {
        let name = command.data.name.as_str();
        let Some(handler) = self.commands.get(name) else {
            warn!(command = name, "Unknown command");
            return Dispatch::Unknown;
        };

        let ctx = Context {
            interaction: command.clone(),
            http: Arc::clone(&self.http),
        };

        let started = Instant::now();
        let outcome = handler.invoke(ctx).await;
        let elapsed = started.elapsed();

        if elapsed > constants::INITIAL_RESPONSE_DEADLINE {
            warn!(command = name, ?elapsed, "Handler exceeded the initial response deadline");
        }

        match outcome {
            Outcome::Reply(response) => Dispatch::Respond(response),
            Outcome::Deferred {
                response,
                task,
            } => {
                debug!(command = name, "Deferring response");
                self.supervisor.spawn(name, task);
                Dispatch::Respond(response)
            },
        }
    }
}
