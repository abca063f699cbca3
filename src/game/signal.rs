/// Pending event slot. Holds at most one value until it is acknowledged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signal<T> {
    pending: Option<T>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Signal { pending: None }
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Default::default()
    }

    // A newer value replaces one that was never acknowledged
    pub fn raise(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn acknowledge(&mut self) -> Option<T> {
        self.pending.take()
    }
}
