//! Baking program executor
//!
//! Runs a [`BakingProgram`] against a heating module and a circulation fan.
//! Every hardware call blocks until the hardware accepts it, so the
//! ordering of fan and heating calls is fixed entirely by this routine.

use super::error::OvenError;
use super::phase::ExecutionPhase;
use crate::program::{BakingProgram, HeatType, HeatingSettings, ProgramStage};
use crate::traits::{Fan, HeatingError, HeatingModule};

/// Duration (minutes) passed with the warm-up heater call
pub const HEAT_UP_AND_FINISH_SETTING_TIME: u16 = 0;

/// Program executor
///
/// Owns (or borrows, via the `&mut T` impls) one heating module and one
/// fan for the duration of each run.
#[derive(Debug)]
pub struct Oven<H, F> {
    heating: H,
    fan: F,
    phase: ExecutionPhase,
}

impl<H: HeatingModule, F: Fan> Oven<H, F> {
    /// Create a new executor
    pub fn new(heating: H, fan: F) -> Self {
        Self {
            heating,
            fan,
            phase: ExecutionPhase::Idle,
        }
    }

    /// Current phase, or the terminal phase of the last run
    pub fn phase(&self) -> ExecutionPhase {
        self.phase
    }

    /// Get access to the heating module
    pub fn heating_module(&self) -> &H {
        &self.heating
    }

    /// Get access to the fan
    pub fn fan(&self) -> &F {
        &self.fan
    }

    /// Consume the executor and return its collaborators
    pub fn into_parts(self) -> (H, F) {
        (self.heating, self.fan)
    }

    /// Run a baking program to completion
    ///
    /// Warm-up always issues one heater call at the program's initial
    /// temperature, including when that temperature is zero. The first
    /// heating fault aborts the run and is returned wrapped in an
    /// [`OvenError`]; the fan is left in whatever state it was in.
    pub fn run_program(&mut self, program: &BakingProgram) -> Result<(), OvenError> {
        info!(
            "Starting program: {} stages ({} min), warm-up {}C, cool at finish: {}",
            program.len(),
            program.total_stage_minutes(),
            program.initial_temp_c,
            program.cool_at_finish
        );

        match self.execute(program) {
            Ok(()) => {
                self.phase = ExecutionPhase::Done;
                info!("Program complete");
                Ok(())
            }
            Err(e) => {
                self.phase = ExecutionPhase::Failed;
                error!("Program aborted: {}", e);
                Err(e)
            }
        }
    }

    fn execute(&mut self, program: &BakingProgram) -> Result<(), OvenError> {
        self.phase = ExecutionPhase::WarmingUp;
        self.warm_up(program.initial_temp_c)?;

        for (index, stage) in program.stages.iter().enumerate() {
            self.phase = ExecutionPhase::RunningStage(index as u8);

            // The fan stays engaged into another thermo stage, or into cooldown
            let keep_fan = match program.stages.get(index + 1) {
                Some(next) => next.heat_type.needs_fan(),
                None => program.cool_at_finish,
            };

            self.run_stage(stage, keep_fan)?;
        }

        if program.cool_at_finish {
            self.phase = ExecutionPhase::CoolingDown;
            debug!("Cooling down");
            self.fan.on();
        }

        Ok(())
    }

    fn warm_up(&mut self, initial_temp_c: i16) -> Result<(), OvenError> {
        let settings = HeatingSettings::new(initial_temp_c, HEAT_UP_AND_FINISH_SETTING_TIME);
        debug!("Warming up to {}C", initial_temp_c);

        let result = self.heating.heater(settings);
        self.check(result)
    }

    fn run_stage(&mut self, stage: &ProgramStage, keep_fan: bool) -> Result<(), OvenError> {
        let settings = stage.settings();
        debug!(
            "{}: {} at {}C for {} min",
            self.phase,
            stage.heat_type,
            settings.target_temp_c,
            settings.time_in_minutes
        );

        match stage.heat_type {
            HeatType::Heater => {
                self.stop_fan();
                let result = self.heating.heater(settings);
                self.check(result)
            }
            HeatType::Grill => {
                self.stop_fan();
                let result = self.heating.grill(settings);
                self.check(result)
            }
            HeatType::ThermoCirculation => {
                self.fan.on();
                let result = self.heating.thermal_circuit(settings);
                self.check(result)?;

                if !keep_fan {
                    self.fan.off();
                } else {
                    trace!("Leaving fan running");
                }
                Ok(())
            }
        }
    }

    /// Stop the fan if it is running
    fn stop_fan(&mut self) {
        if self.fan.is_on() {
            debug!("Stopping fan");
            self.fan.off();
        }
    }

    /// Wrap a heating fault with the current phase
    fn check(&self, result: Result<(), HeatingError>) -> Result<(), OvenError> {
        result.map_err(|source| {
            warn!("Heating fault during {}: {}", self.phase, source);
            OvenError::new(self.phase, source)
        })
    }
}
