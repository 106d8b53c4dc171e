//! The Executor - single entry point for command-shaped requests.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! session and wraps results in [`Output`] variants.

use std::sync::Arc;

use crate::{Command, Output, Result, Session};

/// The command executor.
///
/// All state lives in the [`Session`]; the executor only holds a reference.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use quotesearch_executor::{Command, Executor, SearchMode, Session};
/// use std::sync::Arc;
///
/// let executor = Executor::new(Arc::new(Session::open("/path/to/data")?));
///
/// let result = executor.execute(Command::Search {
///     mode: SearchMode::Author,
///     query: "Twain".into(),
///     exact: false,
///     limit: None,
/// })?;
/// ```
pub struct Executor {
    session: Arc<Session>,
}

impl Executor {
    /// Create a new executor over a session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = match cmd {
            Command::Search {
                mode,
                query,
                exact,
                limit,
            } => self
                .session
                .search(mode, &query, exact, limit)
                .map(Output::SearchResults),
            Command::AuthorThemes { author } => self
                .session
                .author_themes(&author)
                .map(Output::AuthorThemes),
            Command::Stats { top_n } => self.session.stats(top_n).map(Output::Stats),
            Command::Topics { terms_per_topic } => {
                self.session.topics(terms_per_topic).map(Output::Topics)
            }
        };

        if let Err(e) = &result {
            tracing::debug!(
                target: "quotesearch::session",
                command = name,
                error = %e,
                "Command failed"
            );
        }
        result
    }

    /// Execute commands in order; one failure does not stop the rest.
    ///
    /// ```ignore
    /// let results = executor.execute_many(vec![cmd1, cmd2, cmd3]);
    /// // results[0] corresponds to cmd1, etc.
    /// ```
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The underlying session.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }
}
