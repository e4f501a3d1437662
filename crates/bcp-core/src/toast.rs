//! Transient notifications.
//!
//! The wizard announces saves, clears and skips through a [`ToastChannel`]
//! it owns. Whoever renders the wizard subscribes one listener; a
//! [`ToastSlot`] on the listening side holds the message on screen until its
//! deadline passes or a newer message replaces it.
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use bcp_core::toast::ToastChannel;
//!
//! let channel = ToastChannel::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let subscription = channel.subscribe(move |msg| sink.borrow_mut().push(msg.to_string()));
//!
//! channel.publish("Draft cleared");
//! drop(subscription);
//! channel.publish("nobody hears this");
//!
//! assert_eq!(*seen.borrow(), vec!["Draft cleared".to_string()]);
//! ```

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
    time::{Duration, Instant},
};

/// How long a message stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(2);

type Listener = Box<dyn FnMut(&str)>;

#[derive(Default)]
struct Listeners {
    active: Option<u64>,
    callback: Option<Listener>,
    /// Published while the callback was running.
    pending: Option<String>,
    next_id: u64,
}

/// Single-listener publish/subscribe channel.
#[derive(Clone, Default)]
pub struct ToastChannel {
    inner: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for ToastChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastChannel")
            .field("active", &self.inner.borrow().active)
            .finish()
    }
}

impl ToastChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `message` to the current listener, if any.
    ///
    /// A message published by the listener itself is delivered as soon as
    /// the listener returns; if it publishes several, only the last is kept.
    pub fn publish(&self, message: &str) {
        let mut message = message.to_string();
        loop {
            // The callback runs outside the borrow so it may publish,
            // subscribe or drop its own subscription.
            let (id, mut callback) = {
                let mut inner = self.inner.borrow_mut();
                match (inner.active, inner.callback.take()) {
                    (Some(id), Some(callback)) => (id, callback),
                    (Some(_), None) => {
                        inner.pending = Some(message);
                        return;
                    }
                    _ => return,
                }
            };

            callback(message.as_str());

            let mut inner = self.inner.borrow_mut();
            if inner.active == Some(id) && inner.callback.is_none() {
                inner.callback = Some(callback);
            }
            match inner.pending.take() {
                Some(next) => message = next,
                None => return,
            }
        }
    }

    /// Install `callback` as the listener, replacing any previous one.
    ///
    /// The listener stays installed until the returned [`Subscription`] is
    /// dropped or a later subscription replaces it.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&str) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.active = Some(id);
        inner.callback = Some(Box::new(callback));

        Subscription {
            channel: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Whether a listener is installed.
    pub fn has_listener(&self) -> bool {
        self.inner.borrow().active.is_some()
    }
}

/// Handle for an installed listener; dropping it unsubscribes.
#[must_use = "dropping a Subscription removes the listener"]
pub struct Subscription {
    channel: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Subscription {
    /// Remove the listener now rather than at end of scope.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(channel) = self.channel.upgrade() else {
            return;
        };
        // Replaced subscriptions must not remove their successor.
        if let Ok(mut inner) = channel.try_borrow_mut() {
            if inner.active == Some(self.id) {
                inner.active = None;
                inner.callback = None;
            }
        };
    }
}

/// The message currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<(String, Instant)>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever is displayed.
    pub fn show(&mut self, message: &str, now: Instant) {
        self.current = Some((message.to_string(), now + TOAST_TTL));
    }

    /// The displayed message, if its deadline has not passed.
    pub fn visible(&self, now: Instant) -> Option<&str> {
        match &self.current {
            Some((message, deadline)) if now < *deadline => Some(message),
            _ => None,
        }
    }

    /// Take the displayed message for rendering once. Expired messages are
    /// discarded.
    pub fn take_fresh(&mut self, now: Instant) -> Option<String> {
        let (message, deadline) = self.current.take()?;
        (now < deadline).then_some(message)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
