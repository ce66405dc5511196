/// Handle returned by [`DurationSubject::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// "Duration changed by user" stream.
///
/// Observers run synchronously, in subscription order, on every drag update.
#[derive(Default)]
pub struct DurationSubject {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn FnMut(u32)>)>,
}

impl DurationSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(u32) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, seconds: u32) {
        for (_, observer) in self.observers.iter_mut() {
            observer(seconds);
        }
    }
}

impl std::fmt::Debug for DurationSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurationSubject")
            .field("observers", &self.observers.len())
            .finish()
    }
}
