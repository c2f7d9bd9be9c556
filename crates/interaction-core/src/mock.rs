//! # Mock Commands
//!
//! [`MockCommand<R>`] stands in for business logic when testing resources.
//! Expectations are queued up front, each call pops the next one, and
//! [`MockCommand::verify`] checks that every expectation was consumed.
//!
//! ```rust
//! use interaction_core::mock::MockCommand;
//! use interaction_core::{ResourceInteractionModel, Status, TransientResource, Verb};
//!
//! let mut mock = MockCommand::<String>::new();
//! mock.expect_execute(None).return_ok(Status::Created, "saved".to_string());
//!
//! let mut resource = TransientResource::new("Note", "/notes");
//! resource.register(Verb::Post, mock.mutation()).unwrap();
//!
//! let response = resource.post(None, "draft".to_string());
//! assert_eq!(response.status, Status::Created);
//! assert_eq!(mock.received(), vec!["draft".to_string()]);
//! mock.verify();
//! ```
//!
//! A call with no matching expectation panics, which fails the test at the
//! point the unexpected transition happened.

use crate::command::{Command, MutationCommand, RetrievalCommand};
use crate::message::RestResponse;
use crate::status::Status;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Expectation<R> {
    Get {
        id: Option<String>,
        response: RestResponse<R>,
    },
    Execute {
        id: Option<String>,
        response: RestResponse<R>,
    },
}

struct Shared<R> {
    expectations: Mutex<VecDeque<Expectation<R>>>,
    received: Mutex<Vec<R>>,
}

/// A command double with an expectation queue.
pub struct MockCommand<R> {
    shared: Arc<Shared<R>>,
}

impl<R: Send + 'static> Default for MockCommand<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Send + 'static> MockCommand<R> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                expectations: Mutex::new(VecDeque::new()),
                received: Mutex::new(Vec::new()),
            }),
        }
    }

    /// A retrieval command backed by this mock's queue.
    pub fn retrieval(&self) -> Command<R> {
        Command::retrieval(MockHandle {
            shared: Arc::clone(&self.shared),
        })
    }

    /// A mutation command backed by this mock's queue.
    pub fn mutation(&self) -> Command<R> {
        Command::mutation(MockHandle {
            shared: Arc::clone(&self.shared),
        })
    }

    /// Expects a retrieval with identifier `id`.
    pub fn expect_get(&mut self, id: Option<&str>) -> ExpectationBuilder<R> {
        ExpectationBuilder {
            id: id.map(str::to_string),
            retrieval: true,
            shared: Arc::clone(&self.shared),
        }
    }

    /// Expects a mutation with identifier `id`.
    pub fn expect_execute(&mut self, id: Option<&str>) -> ExpectationBuilder<R> {
        ExpectationBuilder {
            id: id.map(str::to_string),
            retrieval: false,
            shared: Arc::clone(&self.shared),
        }
    }

    /// Payloads passed to mutation calls so far, in call order.
    pub fn received(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.shared.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.shared.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for one queued expectation.
pub struct ExpectationBuilder<R> {
    id: Option<String>,
    retrieval: bool,
    shared: Arc<Shared<R>>,
}

impl<R> ExpectationBuilder<R> {
    /// The command returns `result` as-is.
    pub fn return_result(self, response: RestResponse<R>) {
        let expectation = if self.retrieval {
            Expectation::Get {
                id: self.id,
                response,
            }
        } else {
            Expectation::Execute {
                id: self.id,
                response,
            }
        };
        self.shared
            .expectations
            .lock()
            .unwrap()
            .push_back(expectation);
    }

    /// The command returns `status` with `resource`.
    pub fn return_ok(self, status: Status, resource: R) {
        self.return_result(RestResponse::ok(status, resource));
    }

    /// The command returns a bare `status`.
    pub fn return_status(self, status: Status) {
        self.return_result(RestResponse::bare(status));
    }
}

struct MockHandle<R> {
    shared: Arc<Shared<R>>,
}

impl<R> MockHandle<R> {
    fn next(&self) -> Option<Expectation<R>> {
        self.shared.expectations.lock().unwrap().pop_front()
    }
}

impl<R: Send> RetrievalCommand<R> for MockHandle<R> {
    fn get(&self, id: Option<&str>) -> RestResponse<R> {
        match self.next() {
            Some(Expectation::Get {
                id: expected,
                response,
            }) => {
                assert_eq!(expected.as_deref(), id, "retrieval called with wrong id");
                response
            }
            _ => panic!("Unexpected retrieval or expectation mismatch"),
        }
    }
}

impl<R: Send> MutationCommand<R> for MockHandle<R> {
    fn execute(&self, id: Option<&str>, resource: R) -> RestResponse<R> {
        match self.next() {
            Some(Expectation::Execute {
                id: expected,
                response,
            }) => {
                assert_eq!(expected.as_deref(), id, "mutation called with wrong id");
                self.shared.received.lock().unwrap().push(resource);
                response
            }
            _ => panic!("Unexpected mutation or expectation mismatch"),
        }
    }
}
