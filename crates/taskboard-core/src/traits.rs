use std::cell::RefCell;
use std::rc::Rc;

/// Receives the full current state of a subject after every change.
pub trait Observer<T: ?Sized> {
    fn update(&mut self, data: &T);
}

/// Shared handle to an observer. Identity is the pointer, so the same
/// handle attached twice is still one subscription.
pub type SharedObserver<T> = Rc<RefCell<dyn Observer<T>>>;

/// Publish side of the observer pattern.
pub trait Subject<T: ?Sized> {
    /// Registers `observer`; attaching an already attached handle is a no-op.
    fn attach(&mut self, observer: SharedObserver<T>);

    /// Unregisters `observer`; detaching an unknown handle is a no-op.
    fn detach(&mut self, observer: &SharedObserver<T>);

    /// Delivers the current state to every observer in attachment order.
    fn notify(&self);
}

/// Ordered, identity-deduplicated observer list shared by subjects.
pub struct ObserverList<T: ?Sized> {
    observers: Vec<SharedObserver<T>>,
}

impl<T: ?Sized> ObserverList<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    fn position(&self, observer: &SharedObserver<T>) -> Option<usize> {
        self.observers
            .iter()
            .position(|existing| std::ptr::addr_eq(Rc::as_ptr(existing), Rc::as_ptr(observer)))
    }

    pub fn attach(&mut self, observer: SharedObserver<T>) -> bool {
        if self.position(&observer).is_some() {
            return false;
        }
        self.observers.push(observer);
        true
    }

    pub fn detach(&mut self, observer: &SharedObserver<T>) -> bool {
        match self.position(observer) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn publish(&self, data: &T) {
        for observer in &self.observers {
            observer.borrow_mut().update(data);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T: ?Sized> Default for ObserverList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<(&'static str, usize)>>>,
    }

    impl Observer<[u32]> for Recorder {
        fn update(&mut self, data: &[u32]) {
            self.log.borrow_mut().push((self.name, data.len()));
        }
    }

    fn recorder(
        name: &'static str,
        log: &Rc<RefCell<Vec<(&'static str, usize)>>>,
    ) -> SharedObserver<[u32]> {
        Rc::new(RefCell::new(Recorder {
            name,
            log: Rc::clone(log),
        }))
    }

    #[test]
    fn test_publish_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObserverList::new();
        list.attach(recorder("first", &log));
        list.attach(recorder("second", &log));

        list.publish(&[1, 2, 3]);

        assert_eq!(*log.borrow(), vec![("first", 3), ("second", 3)]);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObserverList::new();
        let observer = recorder("only", &log);

        assert!(list.attach(Rc::clone(&observer)));
        assert!(!list.attach(Rc::clone(&observer)));
        assert_eq!(list.len(), 1);

        list.publish(&[]);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_detach_stops_delivery_and_ignores_unknown() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObserverList::new();
        let kept = recorder("kept", &log);
        let dropped = recorder("dropped", &log);
        let stranger = recorder("stranger", &log);
        list.attach(Rc::clone(&kept));
        list.attach(Rc::clone(&dropped));

        assert!(list.detach(&dropped));
        assert!(!list.detach(&dropped));
        assert!(!list.detach(&stranger));

        list.publish(&[7]);
        assert_eq!(*log.borrow(), vec![("kept", 1)]);
    }
}
