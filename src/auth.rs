//! Auth session plumbing.
//!
//! The table only ever needs "current user id, or none". [`channel`]
//! returns the handle an identity-provider integration pushes into and the
//! event stream a UI layer consumes. The value observable at subscription
//! time plays the role of the initial callback; [`AuthEvents::next_change`]
//! resumes on every later sign-in or sign-out.

use tokio::sync::watch;

/// Opaque user identifier from the identity provider.
pub type UserId = String;

/// Publisher half of the auth channel.
#[derive(Debug)]
pub struct AuthHandle {
    /// Current-user publisher.
    tx: watch::Sender<Option<UserId>>,
}

/// Subscriber half of the auth channel.
#[derive(Debug, Clone)]
pub struct AuthEvents {
    /// Current-user subscription.
    rx: watch::Receiver<Option<UserId>>,
}

/// Creates a connected handle/events pair with no user signed in.
#[must_use]
pub fn channel() -> (AuthHandle, AuthEvents) {
    let (tx, rx) = watch::channel(None);
    (AuthHandle { tx }, AuthEvents { rx })
}

impl AuthHandle {
    /// Publishes a sign-in.
    pub fn sign_in(&self, user_id: impl Into<UserId>) {
        self.tx.send_replace(Some(user_id.into()));
    }

    /// Publishes a sign-out.
    pub fn sign_out(&self) {
        self.tx.send_replace(None);
    }
}

impl AuthEvents {
    /// Returns the user signed in right now, if any.
    #[must_use]
    pub fn current(&self) -> Option<UserId> {
        self.rx.borrow().clone()
    }

    /// Waits for the next sign-in or sign-out and returns the new value.
    ///
    /// The outer `None` means the publisher is gone and no further changes
    /// will arrive.
    pub async fn next_change(&mut self) -> Option<Option<UserId>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
