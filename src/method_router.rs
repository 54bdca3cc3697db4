use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use crate::method::{HTTP_METHOD_COUNT, HttpMethod};
use crate::router::{Router, RouterResult};
use crate::types::RouteMatch;

/// HTTP-method-aware dispatcher: one isolated route table per verb.
///
/// A pattern registered under one verb has no visibility from another verb's
/// resolution. All seven tables exist from construction.
#[derive(Debug)]
pub struct MethodRouter<H> {
    routers: [Router<H>; HTTP_METHOD_COUNT],
    group_prefix: Vec<String>,
}

impl<H> Default for MethodRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> MethodRouter<H> {
    pub fn new() -> Self {
        Self {
            routers: std::array::from_fn(|_| Router::new()),
            group_prefix: Vec::new(),
        }
    }

    /// Resolves `path` against the table registered for `method`.
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<RouteMatch<'_, H>> {
        self.routers[method as usize].find(path)
    }

    /// Resolves against a verb given as a string; an unrecognized verb is an
    /// ordinary no-match, not an error.
    pub fn find_named(&self, verb: &str, path: &str) -> Option<RouteMatch<'_, H>> {
        HttpMethod::parse(verb).and_then(|method| self.find(method, path))
    }
}

impl<H: Clone> MethodRouter<H> {
    fn on(&mut self, method: HttpMethod, path: &str, handler: H) -> RouterResult<()> {
        if self.group_prefix.is_empty() {
            self.routers[method as usize].on(path, handler)
        } else {
            let prefix = self.group_prefix.join("/");
            self.routers[method as usize].group(&prefix, |scoped| scoped.on(path, handler))
        }
    }

    pub fn get(&mut self, path: &str, handler: H) -> RouterResult<()> {
        self.on(HttpMethod::Get, path, handler)
    }

    pub fn post(&mut self, path: &str, handler: H) -> RouterResult<()> {
        self.on(HttpMethod::Post, path, handler)
    }

    pub fn put(&mut self, path: &str, handler: H) -> RouterResult<()> {
        self.on(HttpMethod::Put, path, handler)
    }

    pub fn delete(&mut self, path: &str, handler: H) -> RouterResult<()> {
        self.on(HttpMethod::Delete, path, handler)
    }

    pub fn patch(&mut self, path: &str, handler: H) -> RouterResult<()> {
        self.on(HttpMethod::Patch, path, handler)
    }

    pub fn options(&mut self, path: &str, handler: H) -> RouterResult<()> {
        self.on(HttpMethod::Options, path, handler)
    }

    pub fn head(&mut self, path: &str, handler: H) -> RouterResult<()> {
        self.on(HttpMethod::Head, path, handler)
    }

    /// Applies `prefix` to every registration made inside `setup`, across all
    /// verbs. Nestable; the prefix is restored on every exit path.
    pub fn group<F>(&mut self, prefix: &str, setup: F) -> RouterResult<()>
    where
        F: FnOnce(&mut Self) -> RouterResult<()>,
    {
        self.group_prefix.push(prefix.to_string());

        let outcome = catch_unwind(AssertUnwindSafe(|| setup(self)));
        self.group_prefix.pop();

        match outcome {
            Ok(result) => result,
            Err(panic) => resume_unwind(panic),
        }
    }
}
