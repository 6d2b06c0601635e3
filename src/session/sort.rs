// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;

use crate::exec::{Aborted, Controller, PauseFlag, RunFlag, Speed, StepDelay};
use crate::model::array::{ELEMENT_COUNTS, MAX_VALUE, MIN_VALUE};
use crate::model::{ElementStatus, SortArray, SortCounters};
use crate::sorting::{self, SortAlgorithm, SortReport, SortView};
use crate::sound::{self, Tone};

/// Rounds of random swaps in the shuffle animation.
pub const SHUFFLE_STEPS: usize = 15;

#[derive(Debug, Clone)]
pub struct SortState {
    array: SortArray,
    counters: SortCounters,
    algorithm: SortAlgorithm,
    speed: Speed,
    element_count: usize,
    sorting: bool,
    shuffling: bool,
}

impl SortState {
    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn counters(&self) -> SortCounters {
        self.counters
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn is_sorting(&self) -> bool {
        self.sorting
    }

    pub fn is_shuffling(&self) -> bool {
        self.shuffling
    }
}

/// The sorting page: one array, at most one live sort or shuffle.
pub struct SortSession {
    state: Rc<RefCell<SortState>>,
    run: RunFlag,
    shuffle: RunFlag,
    paused: PauseFlag,
    delay: StepDelay,
    base_delay: Duration,
    rng: StdRng,
}

impl SortSession {
    pub fn new(element_count: usize, speed: Speed, base_delay: Duration, mut rng: StdRng) -> Self {
        let array = SortArray::random(element_count, &mut rng);
        Self::with_array(array, speed, base_delay, rng)
    }

    pub fn with_array(array: SortArray, speed: Speed, base_delay: Duration, rng: StdRng) -> Self {
        let state = SortState {
            element_count: array.len(),
            array,
            counters: SortCounters::default(),
            algorithm: SortAlgorithm::default(),
            speed,
            sorting: false,
            shuffling: false,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            run: RunFlag::idle(),
            shuffle: RunFlag::idle(),
            paused: PauseFlag::new(),
            delay: StepDelay::new(speed.delay(base_delay)),
            base_delay,
            rng,
        }
    }

    pub fn state(&self) -> Ref<'_, SortState> {
        self.state.borrow()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.is_paused()
    }

    pub fn delay(&self) -> Duration {
        self.delay.get()
    }

    /// Starts sorting the current array. Ignored while a sort or shuffle is in flight.
    pub fn start(&mut self) -> Option<impl Future<Output = Result<SortReport, Aborted>> + 'static> {
        let (algorithm, values) = {
            let mut state = self.state.borrow_mut();
            if state.sorting || state.shuffling {
                return None;
            }
            state.sorting = true;
            state.counters = SortCounters::default();
            state.array.reset_statuses();
            (state.algorithm, state.array.values())
        };

        self.run.cancel();
        self.run = RunFlag::new();
        self.paused.set(false);
        let ctl = Controller::new(self.run.clone(), self.paused.clone(), self.delay.clone());
        let mut view = LiveArray { state: Rc::clone(&self.state) };
        let state = Rc::clone(&self.state);

        Some(async move {
            let report = sorting::run(algorithm, &values, &mut view, &ctl).await;
            if report.is_ok() {
                state.borrow_mut().sorting = false;
            }
            report
        })
    }

    /// Flips pause while sorting; returns the new state, or `None` when nothing runs.
    pub fn toggle_pause(&self) -> Option<bool> {
        self.state.borrow().sorting.then(|| self.paused.toggle())
    }

    /// Cancels any sort or shuffle. Statuses go back to default; values stay.
    pub fn stop(&mut self) {
        let sorting = self.run.cancel();
        let shuffling = self.shuffle.cancel();
        self.paused.set(false);
        if sorting || shuffling {
            let mut state = self.state.borrow_mut();
            state.sorting = false;
            state.shuffling = false;
            state.array.reset_statuses();
            tracing::debug!(sorting, shuffling, "sort session stopped");
        }
    }

    pub fn select_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.stop();
        let mut state = self.state.borrow_mut();
        state.algorithm = algorithm;
        state.counters = SortCounters::default();
        state.array.reset_statuses();
    }

    /// Applies to the next step of a live run as well.
    pub fn set_speed(&self, speed: Speed) {
        self.state.borrow_mut().speed = speed;
        self.delay.set(speed.delay(self.base_delay));
    }

    pub fn faster(&self) {
        let speed = self.state.borrow().speed.faster();
        self.set_speed(speed);
    }

    pub fn slower(&self) {
        let speed = self.state.borrow().speed.slower();
        self.set_speed(speed);
    }

    /// Switches to another allowed length and regenerates the array. Returns `false` for a
    /// length outside [`ELEMENT_COUNTS`].
    pub fn set_element_count(&mut self, count: usize) -> bool {
        if !ELEMENT_COUNTS.contains(&count) {
            return false;
        }
        self.stop();
        let array = SortArray::random(count, &mut self.rng);
        let mut state = self.state.borrow_mut();
        state.element_count = count;
        state.array = array;
        state.counters = SortCounters::default();
        true
    }

    /// Steps through [`ELEMENT_COUNTS`]; `true` moves up.
    pub fn cycle_element_count(&mut self, up: bool) -> bool {
        let current = self.state.borrow().element_count;
        let position = ELEMENT_COUNTS.iter().position(|&count| count == current).unwrap_or(0);
        let next = if up {
            ELEMENT_COUNTS.get(position + 1)
        } else {
            position.checked_sub(1).and_then(|p| ELEMENT_COUNTS.get(p))
        };
        next.is_some_and(|&count| self.set_element_count(count))
    }

    /// Cancels any sort, then animates a shuffle and finishes with fresh random values.
    ///
    /// Every swap and the final values are drawn up front; the future only replays them at half
    /// the current step delay per round. Returns `None` while a shuffle is already running.
    pub fn shuffle(&mut self) -> Option<impl Future<Output = Result<(), Aborted>> + 'static> {
        if self.state.borrow().shuffling {
            return None;
        }
        self.stop();

        let len = self.state.borrow().element_count;
        if self.state.borrow().array.len() != len {
            let array = SortArray::random(len, &mut self.rng);
            self.state.borrow_mut().array = array;
        }
        let swaps_per_step = len.div_ceil(3);
        let rounds: Vec<Vec<(usize, usize)>> = (0..SHUFFLE_STEPS)
            .map(|_| {
                (0..swaps_per_step)
                    .map(|_| (self.rng.gen_range(0..len.max(1)), self.rng.gen_range(0..len.max(1))))
                    .filter(|(i, j)| i != j)
                    .collect()
            })
            .collect();
        let fresh: Vec<u32> = (0..len).map(|_| self.rng.gen_range(MIN_VALUE..MAX_VALUE)).collect();

        self.shuffle = RunFlag::new();
        {
            let mut state = self.state.borrow_mut();
            state.shuffling = true;
            state.counters = SortCounters::default();
        }
        let ctl = Controller::new(self.shuffle.clone(), PauseFlag::new(), StepDelay::new(self.delay.get() / 2));
        let state = Rc::clone(&self.state);

        Some(async move {
            for round in rounds {
                ctl.ensure_running()?;
                {
                    let mut state = state.borrow_mut();
                    for (i, j) in round {
                        sound::play(Tone::for_height(i as f64, 100.0));
                        state.array.update(i, ElementStatus::Comparing, None);
                        state.array.update(j, ElementStatus::Swap, None);
                        state.array.swap_values(i, j);
                    }
                }
                ctl.visit_pause().await?;
                state.borrow_mut().array.reset_statuses();
            }

            let mut state = state.borrow_mut();
            for (index, value) in fresh.into_iter().enumerate() {
                state.array.update(index, ElementStatus::Default, Some(value));
            }
            state.shuffling = false;
            ctl.running().cancel();
            Ok(())
        })
    }
}

/// Comparisons sound by position, swap writes by the written value.
pub(crate) fn update_tone(index: usize, status: ElementStatus, value: Option<u32>) -> Option<Tone> {
    match (status, value) {
        (ElementStatus::Comparing, _) => Some(Tone::for_height(index as f64, 50.0)),
        (ElementStatus::Swap, Some(value)) => Some(Tone::for_height(f64::from(value), 100.0)),
        _ => None,
    }
}

/// Mirrors sort progress onto the session array and plays tones.
struct LiveArray {
    state: Rc<RefCell<SortState>>,
}

impl SortView for LiveArray {
    fn update(&mut self, index: usize, status: ElementStatus, value: Option<u32>) {
        self.state.borrow_mut().array.update(index, status, value);
        if let Some(tone) = update_tone(index, status, value) {
            sound::play(tone);
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        let mut state = self.state.borrow_mut();
        state.array.swap_values(i, j);
        for index in [i, j] {
            if let Some(element) = state.array.get(index) {
                sound::play(Tone::for_height(f64::from(element.value), 100.0));
            }
        }
    }

    fn counters(&mut self, counters: &SortCounters) {
        self.state.borrow_mut().counters = *counters;
    }
}
