//! Background workers that own simulation state.

mod simulation;

pub(crate) use simulation::{Command, SimulationWorker};
