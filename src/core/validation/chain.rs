//! Ordered validation chains
//!
//! A chain is the list of checks a request passes through before its terminal
//! handler runs. Steps run in registration order against one shared
//! [`RequestContext`]; the first failing step ends the run and its error is
//! what the client sees.

use crate::core::Entity;
use crate::core::context::RequestContext;
use crate::core::error::ApiResult;
use std::sync::Arc;

/// A single validation step
pub type Step<T> = Arc<dyn Fn(&mut RequestContext<T>) -> ApiResult<()> + Send + Sync>;

/// Named, ordered sequence of validation steps for one operation
pub struct Chain<T> {
    name: &'static str,
    steps: Vec<Step<T>>,
}

impl<T: Entity> Chain<T> {
    /// Create an empty chain; `name` shows up in logs (e.g. "dishes.update")
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a step
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: Fn(&mut RequestContext<T>) -> ApiResult<()> + Send + Sync + 'static,
    {
        self.steps.push(Arc::new(step));
        self
    }

    /// Chain name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, stopping at the first error
    pub fn run(&self, ctx: &mut RequestContext<T>) -> ApiResult<()> {
        for (index, step) in self.steps.iter().enumerate() {
            if let Err(err) = step(ctx) {
                tracing::debug!(
                    chain = self.name,
                    step = index,
                    status = err.status_code().as_u16(),
                    message = %err,
                    "validation chain short-circuited"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            steps: self.steps.clone(),
        }
    }
}
