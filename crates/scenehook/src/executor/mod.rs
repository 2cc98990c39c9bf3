//! Script execution seam
//!
//! scenehook never interprets script bodies. The host supplies a
//! [`ScriptExecutor`] that hands a [`ScriptEntry`] to its own evaluator,
//! honouring the entry's display and undo options.
//!
//! # Examples
//!
//! ```ignore
//! struct EchoExecutor;
//!
//! impl ScriptExecutor for EchoExecutor {
//!     fn execute(&self, script: &ScriptEntry) -> Result<()> {
//!         println!("{}", script.body);
//!         Ok(())
//!     }
//!
//!     fn evaluate(&self, script: &ScriptEntry) -> Result<bool> {
//!         Ok(!script.body.trim().is_empty())
//!     }
//! }
//! ```

use crate::{error::Result, types::ScriptEntry};

/// Runs script bodies on behalf of the dispatcher
///
/// Implementations may re-enter the dispatcher, for example when a script
/// makes the host fire another event. The dispatcher holds no locks while
/// calling into the executor.
pub trait ScriptExecutor: Send + Sync {
    /// Run a script for its side effects
    fn execute(&self, script: &ScriptEntry) -> Result<()>;

    /// Run a script and interpret its result as a truth value
    fn evaluate(&self, script: &ScriptEntry) -> Result<bool>;
}

/// Executor built from two closures
pub struct FnExecutor<E, V>
where
    E: Fn(&ScriptEntry) -> Result<()> + Send + Sync,
    V: Fn(&ScriptEntry) -> Result<bool> + Send + Sync,
{
    execute: E,
    evaluate: V,
}

impl<E, V> FnExecutor<E, V>
where
    E: Fn(&ScriptEntry) -> Result<()> + Send + Sync,
    V: Fn(&ScriptEntry) -> Result<bool> + Send + Sync,
{
    /// Wrap an execute closure and an evaluate closure
    pub fn new(execute: E, evaluate: V) -> Self {
        Self { execute, evaluate }
    }
}

impl<E, V> ScriptExecutor for FnExecutor<E, V>
where
    E: Fn(&ScriptEntry) -> Result<()> + Send + Sync,
    V: Fn(&ScriptEntry) -> Result<bool> + Send + Sync,
{
    fn execute(&self, script: &ScriptEntry) -> Result<()> {
        (self.execute)(script)
    }

    fn evaluate(&self, script: &ScriptEntry) -> Result<bool> {
        (self.evaluate)(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneHookError;

    #[test]
    fn test_fn_executor() {
        let executor = FnExecutor::new(
            |script: &ScriptEntry| {
                if script.body.is_empty() {
                    Err(SceneHookError::ExecutionFailed("empty".to_string()))
                } else {
                    Ok(())
                }
            },
            |script: &ScriptEntry| Ok(script.body == "1"),
        );

        assert!(executor.execute(&ScriptEntry::new("a", "x")).is_ok());
        assert!(executor.execute(&ScriptEntry::new("a", "")).is_err());
        assert!(executor.evaluate(&ScriptEntry::new("a", "1")).unwrap());
        assert!(!executor.evaluate(&ScriptEntry::new("a", "0")).unwrap());
    }
}
