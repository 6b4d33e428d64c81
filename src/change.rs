/// Single-slot change callback.
///
/// Subscribing replaces the previous callback. The callback runs synchronously
/// inside the mutating call, so a panic in it unwinds through that call.
#[derive(Default)]
pub struct ChangeNotifier {
    callback: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribed", &self.callback.is_some())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn unsubscribe(&mut self) {
        self.callback = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.callback.is_some()
    }

    pub fn fire(&mut self) {
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn latest_subscriber_wins() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut notifier = ChangeNotifier::new();

        notifier.fire();

        let counter = first.clone();
        notifier.subscribe(move || counter.set(counter.get() + 1));
        notifier.fire();

        let counter = second.clone();
        notifier.subscribe(move || counter.set(counter.get() + 1));
        notifier.fire();
        notifier.fire();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);

        notifier.unsubscribe();
        notifier.fire();
        assert_eq!(second.get(), 2);
        assert!(!notifier.is_subscribed());
    }
}
