use std::time::{Duration, Instant};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds back a changing value until input has been idle for `delay`.
///
/// A settled value equal to the last emitted one is swallowed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    last_emitted: T,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(delay: Duration, initial: T) -> Self {
        Self {
            delay,
            pending: None,
            last_emitted: initial,
        }
    }

    /// Record a new input value at `now`, restarting the idle timer.
    pub fn input(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Emit the pending value once it has been idle long enough and differs
    /// from the last emission.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some((_, at)) if now.duration_since(*at) >= self.delay);
        if !ready {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if value == self.last_emitted {
            return None;
        }
        self.last_emitted = value.clone();
        Some(value)
    }

    /// Forget any pending input and treat `value` as already emitted.
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.last_emitted = value;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_after_idle_period() {
        let start = Instant::now();
        let mut d = Debouncer::new(SEARCH_DEBOUNCE, String::new());
        d.input("ti".to_string(), start);
        d.input("tissus".to_string(), start + Duration::from_millis(100));

        assert_eq!(d.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            d.poll(start + Duration::from_millis(400)),
            Some("tissus".to_string())
        );
        assert!(!d.is_pending());
    }

    #[test]
    fn unchanged_value_is_swallowed() {
        let start = Instant::now();
        let mut d = Debouncer::new(SEARCH_DEBOUNCE, "abc".to_string());
        d.input("abc".to_string(), start);
        assert_eq!(d.poll(start + SEARCH_DEBOUNCE), None);
        assert!(!d.is_pending());
    }
}
