//! Two-step planner: fill in the trip (INTAKE), then work the list (REVIEWING).

use crate::core::intake::TripDraft;
use crate::core::tracker::{Checklist, Progress};
use crate::errors::Rejection;
use crate::models::{Category, PackingItem, TripData};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intake,
    Reviewing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerState {
    Intake { draft: TripDraft },
    Reviewing { trip: TripData, checklist: Checklist },
}

impl Default for PlannerState {
    fn default() -> Self {
        PlannerState::Intake {
            draft: TripDraft::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Planner {
    state: PlannerState,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in INTAKE with some fields already filled in.
    pub fn with_draft(draft: TripDraft) -> Self {
        Self {
            state: PlannerState::Intake { draft },
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            PlannerState::Intake { .. } => Phase::Intake,
            PlannerState::Reviewing { .. } => Phase::Reviewing,
        }
    }

    pub fn is_reviewing(&self) -> bool {
        self.phase() == Phase::Reviewing
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn draft(&self) -> Option<&TripDraft> {
        match &self.state {
            PlannerState::Intake { draft } => Some(draft),
            PlannerState::Reviewing { .. } => None,
        }
    }

    pub fn draft_mut(&mut self) -> Result<&mut TripDraft, Rejection> {
        match &mut self.state {
            PlannerState::Intake { draft } => Ok(draft),
            PlannerState::Reviewing { .. } => Err(Rejection::NotInIntake),
        }
    }

    pub fn trip(&self) -> Option<&TripData> {
        match &self.state {
            PlannerState::Reviewing { trip, .. } => Some(trip),
            PlannerState::Intake { .. } => None,
        }
    }

    pub fn checklist(&self) -> Option<&Checklist> {
        match &self.state {
            PlannerState::Reviewing { checklist, .. } => Some(checklist),
            PlannerState::Intake { .. } => None,
        }
    }

    fn checklist_mut(&mut self) -> Result<&mut Checklist, Rejection> {
        match &mut self.state {
            PlannerState::Reviewing { checklist, .. } => Ok(checklist),
            PlannerState::Intake { .. } => Err(Rejection::NotReviewing),
        }
    }

    /// INTAKE -> REVIEWING. Generates the list for the submitted trip.
    pub fn submit(&mut self) -> Result<&TripData, Rejection> {
        let trip = match &self.state {
            PlannerState::Intake { draft } => draft.validate()?,
            PlannerState::Reviewing { .. } => return Err(Rejection::NotInIntake),
        };

        let checklist = Checklist::for_trip(&trip);
        info!(
            destination = %trip.destination,
            items = checklist.len(),
            "trip submitted"
        );

        self.state = PlannerState::Reviewing { trip, checklist };
        self.trip().ok_or(Rejection::NotReviewing)
    }

    /// REVIEWING -> INTAKE, discarding the trip and every item.
    /// Returns false when there was nothing to discard.
    pub fn back(&mut self) -> bool {
        if !self.is_reviewing() {
            return false;
        }
        self.state = PlannerState::default();
        info!("back to intake");
        true
    }

    /// Start over from an empty form, whatever the current step.
    pub fn reset(&mut self) -> bool {
        let discarded = self.back();
        self.state = PlannerState::default();
        discarded
    }

    pub fn toggle(&mut self, id: &str) -> Result<bool, Rejection> {
        self.checklist_mut()?.toggle(id)
    }

    pub fn add_custom_item(&mut self, name: &str, category: &str) -> Result<&PackingItem, Rejection> {
        self.checklist_mut()?.add_custom_item(name, category)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.checklist().map(Checklist::categories).unwrap_or_default()
    }

    pub fn group_by_category(&self, category: &Category) -> Vec<&PackingItem> {
        self.checklist()
            .map(|c| c.group_by_category(category))
            .unwrap_or_default()
    }

    pub fn progress(&self) -> Progress {
        self.checklist().map(Checklist::progress).unwrap_or_default()
    }

    /// Export to a document. Not implemented.
    pub fn export(&self) -> Result<(), Rejection> {
        Err(Rejection::Unavailable("export"))
    }

    /// Share the list. Not implemented.
    pub fn share(&self) -> Result<(), Rejection> {
        Err(Rejection::Unavailable("share"))
    }
}
