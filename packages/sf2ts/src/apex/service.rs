/**
 * Apex parser service
 *
 * Two-phase lifecycle around the parser: `warm_up` builds the scanner
 * keyword index and the type mapping table on a background thread and
 * resolves a readiness handle; `parse` fails with a not-ready condition
 * until that handle resolves.
 */
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread;
use thiserror::Error;

use super::ast::CompilationUnit;
use super::lexer;
use super::parser::{self, ParseError};
use super::types;

#[derive(Debug)]
struct ReadyState {
    ready: Mutex<bool>,
    signal: Condvar,
}

fn lock(mutex: &Mutex<bool>) -> MutexGuard<'_, bool> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Cloneable handle resolved when warm-up completes.
#[derive(Debug, Clone)]
pub struct Readiness {
    state: Arc<ReadyState>,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        *lock(&self.state.ready)
    }

    /// Blocks until the service is usable.
    pub fn wait(&self) {
        let mut ready = lock(&self.state.ready);
        while !*ready {
            ready = self
                .state
                .signal
                .wait(ready)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }
}

/// Failures raised by `parse`.
#[derive(Debug, Error)]
pub enum ParserServiceError {
    #[error("apex parser not ready")]
    NotReady(Readiness),
    #[error(transparent)]
    Syntax(#[from] ParseError),
}

/// Owns the warm-up state; one instance per converter.
pub struct ApexParserService {
    state: Arc<ReadyState>,
    started: AtomicBool,
}

impl ApexParserService {
    pub fn new() -> Self {
        ApexParserService {
            state: Arc::new(ReadyState {
                ready: Mutex::new(false),
                signal: Condvar::new(),
            }),
            started: AtomicBool::new(false),
        }
    }

    /// Starts warm-up on first call and returns the readiness handle.
    /// Subsequent calls only hand out the handle.
    pub fn warm_up(&self) -> Readiness {
        if !self.started.swap(true, Ordering::SeqCst) {
            let state = Arc::clone(&self.state);
            thread::spawn(move || {
                Lazy::force(&lexer::KEYWORDS);
                Lazy::force(&types::TYPE_OVERRIDES);
                let mut ready = lock(&state.ready);
                *ready = true;
                state.signal.notify_all();
            });
        }
        self.readiness()
    }

    pub fn readiness(&self) -> Readiness {
        Readiness {
            state: Arc::clone(&self.state),
        }
    }

    pub fn is_ready(&self) -> bool {
        *lock(&self.state.ready)
    }

    /// Parses one compilation unit, failing with a not-ready condition
    /// before warm-up completes. A not-ready call starts the warm-up if
    /// nothing else has, so the handle it carries always resolves.
    pub fn parse(&self, source: &str) -> Result<CompilationUnit, ParserServiceError> {
        if !self.is_ready() {
            return Err(ParserServiceError::NotReady(self.warm_up()));
        }
        Ok(parser::parse(source)?)
    }
}

impl Default for ApexParserService {
    fn default() -> Self {
        Self::new()
    }
}
