//! Recording heating module and fan for executor tests
//!
//! Both doubles share one call log so tests can check the interleaving
//! of fan and heating calls.

use core::cell::RefCell;
use std::vec::Vec;

use crate::program::HeatingSettings;
use crate::traits::{Fan, HeatingError, HeatingModule};

/// A call made against the rig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Heater(HeatingSettings),
    Grill(HeatingSettings),
    ThermalCircuit(HeatingSettings),
    FanOn,
    FanOff,
    FanIsOn,
}

impl Call {
    pub fn is_heating(&self) -> bool {
        matches!(
            self,
            Call::Heater(_) | Call::Grill(_) | Call::ThermalCircuit(_)
        )
    }
}

/// A logged call plus the fan state when it was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub call: Call,
    pub fan_on: bool,
}

#[derive(Default)]
struct RigState {
    entries: Vec<Entry>,
    fan_on: bool,
    fail_on: Option<Call>,
    fail_at_heating: Option<usize>,
    heating_calls: usize,
}

impl RigState {
    fn record(&mut self, call: Call) {
        self.entries.push(Entry {
            call,
            fan_on: self.fan_on,
        });
    }

    fn heat(&mut self, call: Call) -> Result<(), HeatingError> {
        self.record(call);
        let index = self.heating_calls;
        self.heating_calls += 1;

        if self.fail_on == Some(call) || self.fail_at_heating == Some(index) {
            Err(HeatingError::Interlock)
        } else {
            Ok(())
        }
    }
}

/// Shared state behind a [`MockHeating`] / [`MockFan`] pair
#[derive(Default)]
pub struct Rig {
    state: RefCell<RigState>,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the fan already running
    pub fn with_fan_on(self) -> Self {
        self.state.borrow_mut().fan_on = true;
        self
    }

    /// Fail any heating call equal to `call`
    pub fn fail_on(self, call: Call) -> Self {
        self.state.borrow_mut().fail_on = Some(call);
        self
    }

    /// Fail the n-th heating call (0-based, warm-up included)
    pub fn fail_at_heating(self, index: usize) -> Self {
        self.state.borrow_mut().fail_at_heating = Some(index);
        self
    }

    pub fn heating(&self) -> MockHeating<'_> {
        MockHeating { rig: self }
    }

    pub fn fan(&self) -> MockFan<'_> {
        MockFan { rig: self }
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.state.borrow().entries.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().entries.iter().map(|e| e.call).collect()
    }

    pub fn count(&self, call: Call) -> usize {
        self.state
            .borrow()
            .entries
            .iter()
            .filter(|e| e.call == call)
            .count()
    }

    pub fn fan_is_running(&self) -> bool {
        self.state.borrow().fan_on
    }
}

pub struct MockHeating<'a> {
    rig: &'a Rig,
}

impl HeatingModule for MockHeating<'_> {
    fn heater(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        self.rig.state.borrow_mut().heat(Call::Heater(settings))
    }

    fn grill(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        self.rig.state.borrow_mut().heat(Call::Grill(settings))
    }

    fn thermal_circuit(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        self.rig.state.borrow_mut().heat(Call::ThermalCircuit(settings))
    }
}

pub struct MockFan<'a> {
    rig: &'a Rig,
}

impl Fan for MockFan<'_> {
    fn on(&mut self) {
        let mut state = self.rig.state.borrow_mut();
        state.record(Call::FanOn);
        state.fan_on = true;
    }

    fn off(&mut self) {
        let mut state = self.rig.state.borrow_mut();
        state.record(Call::FanOff);
        state.fan_on = false;
    }

    fn is_on(&self) -> bool {
        let mut state = self.rig.state.borrow_mut();
        state.record(Call::FanIsOn);
        state.fan_on
    }
}
