//! Self-expiring notification queue.
//!
//! Every posted notification gets its own removal deadline and its own
//! scheduled expiry task. Expiring one entry never touches the others.

/// How long a notification stays visible, in milliseconds.
pub const NOTIFICATION_TTL_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

/// Token derived from the creation time in milliseconds, bumped when needed
/// so that ids stay strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// Creation time plus [`NOTIFICATION_TTL_MS`].
    pub expires_at: f64,
}

/// Schedules the delayed removal of a single notification.
///
/// In the browser this is a `gloo-timers` timeout that sends an expiry
/// message back to the component.
pub trait ExpiryScheduler {
    fn schedule(&self, id: NotificationId, after_ms: u32);
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    last_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification and schedules its removal.
    pub fn post(
        &mut self,
        scheduler: &impl ExpiryScheduler,
        now_ms: f64,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        let stamp = now_ms.max(0.0) as u64;
        let id = NotificationId(stamp.max(self.last_id + 1));
        self.last_id = id.0;

        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            expires_at: now_ms + f64::from(NOTIFICATION_TTL_MS),
        });
        scheduler.schedule(id, NOTIFICATION_TTL_MS);
        id
    }

    /// Removes the notification with `id`; returns whether it was present.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Removes every notification whose deadline is at or before `now_ms`.
    pub fn sweep(&mut self, now_ms: f64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now_ms);
        before - self.entries.len()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records scheduled expiries instead of starting timers.
    #[derive(Default)]
    pub(crate) struct RecordingScheduler {
        pub(crate) scheduled: RefCell<Vec<(NotificationId, u32)>>,
    }

    impl ExpiryScheduler for RecordingScheduler {
        fn schedule(&self, id: NotificationId, after_ms: u32) {
            self.scheduled.borrow_mut().push((id, after_ms));
        }
    }

    #[test]
    fn posted_notification_is_active_and_scheduled_for_five_seconds() {
        let scheduler = RecordingScheduler::default();
        let mut queue = NotificationQueue::new();

        let id = queue.post(&scheduler, 1_000.0, "Client created", NotificationKind::default());

        assert!(queue.contains(id));
        assert_eq!(scheduler.scheduled.borrow().as_slice(), &[(id, 5000)]);
        assert_eq!(queue.iter().next().unwrap().kind, NotificationKind::Success);
    }

    #[test]
    fn notifications_expire_exactly_at_their_own_deadline() {
        let scheduler = RecordingScheduler::default();
        let mut queue = NotificationQueue::new();

        let first = queue.post(&scheduler, 0.0, "first", NotificationKind::Success);
        let second = queue.post(&scheduler, 2_000.0, "second", NotificationKind::Error);

        assert_eq!(queue.sweep(4_999.0), 0);
        assert_eq!(queue.sweep(5_000.0), 1);
        assert!(!queue.contains(first));
        assert!(queue.contains(second));

        assert_eq!(queue.sweep(7_000.0), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn same_millisecond_posts_get_distinct_ids() {
        let scheduler = RecordingScheduler::default();
        let mut queue = NotificationQueue::new();

        let a = queue.post(&scheduler, 42.0, "a", NotificationKind::Success);
        let b = queue.post(&scheduler, 42.0, "b", NotificationKind::Success);

        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn expiring_one_entry_leaves_the_rest() {
        let scheduler = RecordingScheduler::default();
        let mut queue = NotificationQueue::new();

        let a = queue.post(&scheduler, 10.0, "a", NotificationKind::Success);
        let b = queue.post(&scheduler, 11.0, "b", NotificationKind::Error);

        assert!(queue.expire(a));
        assert!(!queue.expire(a));
        assert!(queue.contains(b));
        assert_eq!(queue.len(), 1);
    }
}
