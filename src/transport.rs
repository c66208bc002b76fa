//! In-process model of the host messaging runtime.
//!
//! The browser runtime hands a handler each message together with a one-shot
//! response callback and expects the answer to arrive asynchronously. Here
//! that contract is explicit in the types: a [`Responder`] that fires at most
//! once, and a [`Dispatcher`] that answers from a continuation scheduled after
//! the upstream call settles, never from the handler's initial invocation.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument, warn};

use crate::source::WallpaperSource;
use crate::{Relay, Request, Response};

/// One-shot handle delivering the response for a single message.
///
/// Consuming `self` makes "at most once" a compile-time property. If the
/// caller went away before the response settled, sending is a tolerated
/// no-op.
#[derive(Debug)]
pub struct Responder {
    sender: oneshot::Sender<Response>,
}

impl Responder {
    pub fn channel() -> (Self, oneshot::Receiver<Response>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    pub fn respond(self, response: Response) {
        if self.sender.send(response).is_err() {
            warn!("response dropped: caller no longer listening");
        }
    }
}

/// Dispatches incoming messages to the relay, one spawned task per message.
///
/// Registered once at startup. No ordering is promised across distinct
/// messages; each task settles independently. Messages the relay does not
/// recognize drop their responder without sending, which the caller observes
/// as no response.
pub struct Dispatcher<S> {
    relay: Arc<Relay<S>>,
}

impl<S> Dispatcher<S>
where
    S: WallpaperSource + Send + Sync + 'static,
{
    pub fn new(relay: Relay<S>) -> Self {
        Self { relay: Arc::new(relay) }
    }

    /// Consumes the message stream until the sending side closes.
    pub async fn run(&self, mut messages: mpsc::Receiver<(Request, Responder)>) {
        while let Some((request, responder)) = messages.recv().await {
            self.dispatch(request, responder);
        }
    }

    /// Hands one message to the relay without blocking the event loop.
    #[instrument(name = "Dispatcher:dispatch", level = "trace", skip(self, responder))]
    pub fn dispatch(&self, request: Request, responder: Responder) {
        let relay = Arc::clone(&self.relay);
        tokio::spawn(async move {
            match relay.handle(request).await {
                Some(response) => responder.respond(response),
                None => debug!("message not recognized, leaving it for other handlers"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use tokio::sync::mpsc;

    use super::*;
    use crate::Error;

    struct StubSource {
        body: Value,
    }

    impl WallpaperSource for StubSource {
        async fn fetch_archive(&self) -> Result<Value, Error> {
            Ok(self.body.clone())
        }
    }

    fn dispatcher() -> Dispatcher<StubSource> {
        let source = StubSource { body: json!({ "images": [{ "url": "a.jpg" }] }) };
        Dispatcher::new(Relay::new(source))
    }

    #[tokio::test]
    async fn response_arrives_after_the_fetch_settles() {
        let dispatcher = dispatcher();
        let (responder, receiver) = Responder::channel();

        dispatcher.dispatch(Request::GetBingWallpaper, responder);

        let response = receiver.await.unwrap();
        assert_eq!(response, Response::success(json!({ "images": [{ "url": "a.jpg" }] })));
    }

    #[tokio::test]
    async fn unrecognized_message_produces_no_response() {
        let dispatcher = dispatcher();
        let (responder, receiver) = Responder::channel();

        dispatcher.dispatch(Request::Unknown, responder);

        // The responder is dropped without sending, so the caller sees the
        // channel close instead of a response.
        assert!(receiver.await.is_err());
    }

    #[tokio::test]
    async fn vanished_caller_is_tolerated() {
        let (responder, receiver) = Responder::channel();
        drop(receiver);

        responder.respond(Response::failure("late"));
    }

    #[tokio::test]
    async fn run_drains_the_message_stream() {
        let dispatcher = dispatcher();
        let (tx, rx) = mpsc::channel(8);

        let (responder_a, receiver_a) = Responder::channel();
        let (responder_b, receiver_b) = Responder::channel();
        tx.send((Request::GetBingWallpaper, responder_a)).await.unwrap();
        tx.send((Request::Unknown, responder_b)).await.unwrap();
        drop(tx);

        dispatcher.run(rx).await;

        assert!(receiver_a.await.is_ok());
        assert!(receiver_b.await.is_err());
    }
}
