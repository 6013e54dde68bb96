//! Test doubles shared by the client and flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::flow::PanelStore;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::notify::Notification;
use crate::panel::PanelState;
use crate::resource::Resource;

/// Records every request and answers from a scripted queue.
/// Clones share the same script and log.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    script: Rc<RefCell<VecDeque<ApiResult<HttpResponse>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.script.borrow_mut().push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.script
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

/// Panel state behind a shared cell; `unmount` drops it like a closed screen.
pub struct TestStore<R: Resource> {
    state: Rc<RefCell<Option<PanelState<R>>>>,
}

impl<R: Resource> Clone for TestStore<R> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<R: Resource> TestStore<R> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(Some(PanelState::new()))),
        }
    }

    pub fn snapshot(&self) -> PanelState<R> {
        self.state.borrow().clone().expect("panel unmounted")
    }

    pub fn unmount(&self) {
        self.state.borrow_mut().take();
    }
}

impl<R: Resource> PanelStore<R> for TestStore<R> {
    fn with_state<O>(&self, f: impl FnOnce(&mut PanelState<R>) -> O) -> Option<O> {
        self.state.borrow_mut().as_mut().map(f)
    }
}

/// Transport that records whether the panel's in-flight guard was raised
/// when each request went out, then defers to a `MockTransport`.
pub struct GuardRecorder<R: Resource> {
    pub inner: MockTransport,
    pub store: TestStore<R>,
    pub guard_seen: Rc<RefCell<Vec<bool>>>,
}

#[async_trait(?Send)]
impl<R: Resource> Transport for GuardRecorder<R> {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let raised = self.store.with_state(|s| s.in_flight).unwrap_or(false);
        self.guard_seen.borrow_mut().push(raised);
        self.inner.send(request).await
    }
}

/// Notification sink collecting everything emitted
#[derive(Clone, Default)]
pub struct Toasts(Rc<RefCell<Vec<Notification>>>);

impl Toasts {
    pub fn sink(&self) -> impl Fn(Notification) + '_ {
        move |n| self.0.borrow_mut().push(n)
    }

    pub fn all(&self) -> Vec<Notification> {
        self.0.borrow().clone()
    }
}
