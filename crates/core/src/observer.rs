/// Receives solver events and optionally returns a control action.
///
/// Solvers call [`Observer::observe`] at well-defined points in their
/// iteration and act on the returned action, if any. Closures of the form
/// `FnMut(&E) -> Option<A>` are observers, and `()` is an observer that
/// never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<u32, &'static str>>(mut observer: O, events: &[u32]) -> Vec<&'static str> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |e: &u32| {
                seen.push(*e);
                (*e == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
