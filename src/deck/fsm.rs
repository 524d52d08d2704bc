use crate::{Error, Result};
use tracing::{debug, info};

// Run states for one deck generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    OutlineRequested,
    OutlineParsed,
    GeneratingSlide(usize),
    Packaged,
    Done,
}

// Run events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    OutlineRequested,
    OutlineParsed,
    SlideStarted(usize),
    ResultsPackaged,
    RunCompleted,
}

/// State machine for one pipeline run. There is no terminal error state:
/// per-slide failures are data, and a run always reaches `Done` once every
/// slide index has been attempted and results are packaged.
pub struct RunStateMachine {
    state: RunState,
    total_slides: usize,
}

impl RunStateMachine {
    pub fn new(total_slides: usize) -> Self {
        Self {
            state: RunState::Idle,
            total_slides,
        }
    }

    pub fn current_state(&self) -> &RunState {
        &self.state
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, RunState::Done)
    }

    pub fn transition(&mut self, event: RunEvent) -> Result<()> {
        let old_state = self.state.clone();

        let new_state = match (&self.state, &event) {
            (RunState::Idle, RunEvent::OutlineRequested) => RunState::OutlineRequested,
            (RunState::OutlineRequested, RunEvent::OutlineParsed) => RunState::OutlineParsed,
            (RunState::OutlineParsed, RunEvent::SlideStarted(1)) => RunState::GeneratingSlide(1),
            (RunState::GeneratingSlide(i), RunEvent::SlideStarted(j))
                if *j == i + 1 && *j <= self.total_slides =>
            {
                RunState::GeneratingSlide(*j)
            }
            (RunState::GeneratingSlide(i), RunEvent::ResultsPackaged) if *i == self.total_slides => {
                RunState::Packaged
            }
            (RunState::Packaged, RunEvent::RunCompleted) => RunState::Done,
            _ => {
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{event:?}"),
                });
            }
        };

        if matches!(new_state, RunState::GeneratingSlide(_)) {
            debug!("Run state transition: {:?} -> {:?}", old_state, new_state);
        } else {
            info!("Run state transition: {:?} -> {:?}", old_state, new_state);
        }

        self.state = new_state;
        Ok(())
    }
}
