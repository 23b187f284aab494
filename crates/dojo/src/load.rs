//! Generation tickets for screen loads.
//!
//! A screen takes a ticket before each request and checks it when the response
//! arrives. Starting a newer load, or deactivating the screen, retires older
//! tickets, so a late response never overwrites newer state.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct LoadGeneration(Rc<Cell<u64>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Data held by a screen and whether a load for it is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Loaded<T> {
    pub data: T,
    pub loading: bool,
}

impl<T: Clone> Loaded<T> {
    /// Same data, with a load in flight.
    pub fn begin(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: true,
        }
    }
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, retiring every ticket handed out before.
    pub fn begin(&self) -> Ticket {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        Ticket(next)
    }

    /// Retires all outstanding tickets without starting a load.
    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.get() == ticket.0
    }

    /// Folds the response for `ticket` into `current`.
    ///
    /// Returns `None` when the ticket was retired, leaving the screen as it is.
    /// Otherwise loading ends: a success replaces the data, a failure is logged
    /// and keeps what was there.
    pub fn settle<T, E>(
        &self,
        what: &str,
        ticket: Ticket,
        current: &Loaded<T>,
        result: Result<T, E>,
    ) -> Option<Loaded<T>>
    where
        T: Clone,
        E: fmt::Display,
    {
        if !self.is_current(ticket) {
            return None;
        }

        let data = match result {
            Ok(data) => data,
            Err(err) => {
                tracing::error!(what, %err, "Failed to load");
                current.data.clone()
            }
        };

        Some(Loaded {
            data,
            loading: false,
        })
    }
}

/// Latch for an action the user may trigger again before the first run ends.
#[derive(Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the latch. `false` while an earlier run is still going.
    pub fn try_start(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn finish(&self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_is_current() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));
    }

    #[test]
    fn newer_load_retires_older_ticket() {
        let generation = LoadGeneration::new();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn invalidate_retires_everything() {
        let generation = LoadGeneration::new();
        let handle = generation.clone();
        let ticket = generation.begin();

        handle.invalidate();

        assert!(!generation.is_current(ticket));
    }

    fn in_flight(data: Vec<&'static str>) -> Loaded<Vec<&'static str>> {
        Loaded {
            data,
            loading: true,
        }
    }

    #[test]
    fn success_replaces_data_and_ends_loading() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();

        let settled = generation
            .settle("problems", ticket, &in_flight(vec!["old"]), Ok::<_, String>(vec!["new"]))
            .unwrap();

        assert_eq!(settled.data, vec!["new"]);
        assert!(!settled.loading);
    }

    #[test]
    fn failure_keeps_previous_data_and_ends_loading() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();

        let settled = generation
            .settle("problems", ticket, &in_flight(vec!["old"]), Err("503"))
            .unwrap();

        assert_eq!(settled.data, vec!["old"]);
        assert!(!settled.loading);
    }

    #[test]
    fn stale_response_is_dropped() {
        let generation = LoadGeneration::new();
        let first = generation.begin();
        let _second = generation.begin();

        let settled =
            generation.settle("problems", first, &in_flight(vec![]), Ok::<_, String>(vec!["late"]));

        assert!(settled.is_none());
    }

    #[test]
    fn response_after_teardown_is_dropped() {
        let generation = LoadGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();

        let settled = generation.settle("leaderboard", ticket, &in_flight(vec![]), Err("offline"));

        assert!(settled.is_none());
    }

    #[test]
    fn begin_keeps_data_while_reloading() {
        let loaded = Loaded {
            data: vec!["kept"],
            loading: false,
        };

        let reloading = loaded.begin();

        assert_eq!(reloading.data, vec!["kept"]);
        assert!(reloading.loading);
    }

    #[test]
    fn second_start_is_refused_until_finished() {
        let latch = InFlight::new();
        let other_click = latch.clone();

        assert!(latch.try_start());
        assert!(!other_click.try_start());

        latch.finish();
        assert!(other_click.try_start());
    }
}
