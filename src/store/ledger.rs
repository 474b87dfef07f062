use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::info;

use crate::dto::candidate_dto::{CreateCandidatePayload, UpdateCandidatePayload};
use crate::dto::requisition_dto::{CreateRequisitionPayload, UpdateRequisitionPayload};
use crate::error::{Error, Result};
use crate::models::candidate::{Application, Candidate, StageEntry};
use crate::models::reference::{ReferenceItem, ReferenceKind};
use crate::models::requisition::{Requisition, RequisitionStatus};
use crate::models::stage::PipelineStage;

/// All entity collections, owned exclusively by the [`Ledger`].
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    pub requisitions: Vec<Requisition>,
    pub candidates: Vec<Candidate>,
    pub recruiters: Vec<ReferenceItem>,
    pub regions: Vec<ReferenceItem>,
    pub departments: Vec<ReferenceItem>,
    pub sources: Vec<ReferenceItem>,
}

impl LedgerState {
    fn references(&self, kind: ReferenceKind) -> &Vec<ReferenceItem> {
        match kind {
            ReferenceKind::Recruiter => &self.recruiters,
            ReferenceKind::Region => &self.regions,
            ReferenceKind::Department => &self.departments,
            ReferenceKind::Source => &self.sources,
        }
    }

    fn references_mut(&mut self, kind: ReferenceKind) -> &mut Vec<ReferenceItem> {
        match kind {
            ReferenceKind::Recruiter => &mut self.recruiters,
            ReferenceKind::Region => &mut self.regions,
            ReferenceKind::Department => &mut self.departments,
            ReferenceKind::Source => &mut self.sources,
        }
    }
}

/// Canonical in-memory record of requisitions, candidates and master data.
///
/// Every mutation goes through a method here and holds the write lock for its
/// whole duration, so no two mutations ever interleave. Readers get cloned
/// snapshots and never observe a half-applied write. Each time-stamping
/// mutation has an `*_at` variant taking an explicit instant; the plain
/// variant stamps `Utc::now()`.
#[derive(Clone, Default)]
pub struct Ledger {
    state: Arc<RwLock<LedgerState>>,
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

fn avatar_url() -> String {
    // Fixed pseudo-random pool; edits never regenerate the pick.
    let index = rand::thread_rng().gen_range(0..70);
    format!("https://i.pravatar.cc/150?img={}", index)
}

impl Ledger {
    pub fn new(state: LedgerState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(crate::store::seed::seed())
    }

    pub async fn snapshot(&self) -> LedgerState {
        self.state.read().await.clone()
    }

    // ---- Requisitions ----

    pub async fn list_requisitions(&self) -> Vec<Requisition> {
        self.state.read().await.requisitions.clone()
    }

    pub async fn get_requisition(&self, id: i64) -> Result<Requisition> {
        self.state
            .read()
            .await
            .requisitions
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Requisition {} not found", id)))
    }

    pub async fn create_requisition(&self, payload: CreateRequisitionPayload) -> Requisition {
        self.create_requisition_at(payload, Utc::now()).await
    }

    pub async fn create_requisition_at(
        &self,
        payload: CreateRequisitionPayload,
        at: DateTime<Utc>,
    ) -> Requisition {
        let mut state = self.state.write().await;
        let id = next_id(state.requisitions.iter().map(|r| r.id));
        let requisition = Requisition {
            id,
            title: payload.title,
            department_id: payload.department_id,
            region_id: payload.region_id,
            recruiter_id: payload.recruiter_id,
            priority: payload.priority,
            reason: payload.reason,
            status: RequisitionStatus::Open,
            description: payload.description,
            created_at: at,
            closed_at: None,
        };
        // Newest first, the default listing order.
        state.requisitions.insert(0, requisition.clone());
        info!(requisition_id = id, "requisition created");
        requisition
    }

    /// Replaces only the provided fields; status and both timestamps are
    /// untouched.
    pub async fn update_requisition(
        &self,
        id: i64,
        payload: UpdateRequisitionPayload,
    ) -> Result<Requisition> {
        let mut state = self.state.write().await;
        let requisition = state
            .requisitions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("Requisition {} not found", id)))?;

        if let Some(title) = payload.title {
            requisition.title = title;
        }
        if let Some(department_id) = payload.department_id {
            requisition.department_id = department_id;
        }
        if let Some(region_id) = payload.region_id {
            requisition.region_id = region_id;
        }
        if let Some(recruiter_id) = payload.recruiter_id {
            requisition.recruiter_id = recruiter_id;
        }
        if let Some(priority) = payload.priority {
            requisition.priority = priority;
        }
        if let Some(reason) = payload.reason {
            requisition.reason = reason;
        }
        if let Some(description) = payload.description {
            requisition.description = description;
        }

        Ok(requisition.clone())
    }

    pub async fn toggle_requisition_status(&self, id: i64) -> Result<Requisition> {
        self.toggle_requisition_status_at(id, Utc::now()).await
    }

    /// Open -> Closed stamps `closed_at`; any other status reopens and clears
    /// it. There is no guard against closing a requisition with zero
    /// candidates.
    pub async fn toggle_requisition_status_at(
        &self,
        id: i64,
        at: DateTime<Utc>,
    ) -> Result<Requisition> {
        let mut state = self.state.write().await;
        let requisition = state
            .requisitions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("Requisition {} not found", id)))?;

        if requisition.status == RequisitionStatus::Open {
            requisition.status = RequisitionStatus::Closed;
            requisition.closed_at = Some(at);
        } else {
            requisition.status = RequisitionStatus::Open;
            requisition.closed_at = None;
        }
        info!(requisition_id = id, status = ?requisition.status, "requisition status toggled");

        Ok(requisition.clone())
    }

    /// Removes the requisition and strips every application referencing it
    /// from every candidate.
    pub async fn delete_requisition(&self, id: i64) -> Result<()> {
        let mut state = self.state.write().await;
        let before = state.requisitions.len();
        state.requisitions.retain(|r| r.id != id);
        if state.requisitions.len() == before {
            return Err(Error::NotFound(format!("Requisition {} not found", id)));
        }
        for candidate in &mut state.candidates {
            candidate.applications.retain(|a| a.requisition_id != id);
        }
        info!(requisition_id = id, "requisition deleted");
        Ok(())
    }

    // ---- Candidates ----

    pub async fn list_candidates(&self) -> Vec<Candidate> {
        self.state.read().await.candidates.clone()
    }

    pub async fn get_candidate(&self, id: i64) -> Result<Candidate> {
        self.state
            .read()
            .await
            .candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))
    }

    /// Candidates holding an application for the given requisition.
    pub async fn candidates_for_requisition(&self, requisition_id: i64) -> Vec<Candidate> {
        self.state
            .read()
            .await
            .candidates
            .iter()
            .filter(|c| {
                c.applications
                    .iter()
                    .any(|a| a.requisition_id == requisition_id)
            })
            .cloned()
            .collect()
    }

    pub async fn create_candidate(&self, payload: CreateCandidatePayload) -> Candidate {
        let mut state = self.state.write().await;
        let id = next_id(state.candidates.iter().map(|c| c.id));
        let candidate = Candidate {
            id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            role: payload.role,
            location: payload.location,
            avatar_url: avatar_url(),
            source_id: payload.source_id,
            skills: payload.skills,
            experience: payload.experience,
            education: payload.education,
            resume: payload.resume,
            applications: Vec::new(),
        };
        state.candidates.push(candidate.clone());
        info!(candidate_id = id, "candidate created");
        candidate
    }

    /// Merges the provided fields; the applications list and the avatar are
    /// untouched.
    pub async fn update_candidate(
        &self,
        id: i64,
        payload: UpdateCandidatePayload,
    ) -> Result<Candidate> {
        let mut state = self.state.write().await;
        let candidate = state
            .candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;

        if let Some(name) = payload.name {
            candidate.name = name;
        }
        if let Some(email) = payload.email {
            candidate.email = email;
        }
        if let Some(phone) = payload.phone {
            candidate.phone = phone;
        }
        if let Some(role) = payload.role {
            candidate.role = role;
        }
        if let Some(location) = payload.location {
            candidate.location = location;
        }
        if let Some(source_id) = payload.source_id {
            candidate.source_id = source_id;
        }
        if let Some(skills) = payload.skills {
            candidate.skills = skills;
        }
        if let Some(experience) = payload.experience {
            candidate.experience = experience;
        }
        if let Some(education) = payload.education {
            candidate.education = education;
        }
        if let Some(resume) = payload.resume {
            candidate.resume = resume;
        }

        Ok(candidate.clone())
    }

    pub async fn delete_candidate(&self, id: i64) -> Result<()> {
        let mut state = self.state.write().await;
        let before = state.candidates.len();
        state.candidates.retain(|c| c.id != id);
        if state.candidates.len() == before {
            return Err(Error::NotFound(format!("Candidate {} not found", id)));
        }
        info!(candidate_id = id, "candidate deleted");
        Ok(())
    }

    // ---- Applications ----

    pub async fn assign_candidate(
        &self,
        candidate_id: i64,
        requisition_id: i64,
    ) -> Result<Candidate> {
        self.assign_candidate_at(candidate_id, requisition_id, Utc::now())
            .await
    }

    /// Appends a fresh application seeded with an Applied entry. Assigning a
    /// candidate already linked to the requisition is a successful no-op, not
    /// an error. The requisition id is not validated: the ledger accepts
    /// assignment to closed or unknown requisitions.
    pub async fn assign_candidate_at(
        &self,
        candidate_id: i64,
        requisition_id: i64,
        at: DateTime<Utc>,
    ) -> Result<Candidate> {
        let mut state = self.state.write().await;
        let candidate = state
            .candidates
            .iter_mut()
            .find(|c| c.id == candidate_id)
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", candidate_id)))?;

        if candidate
            .applications
            .iter()
            .any(|a| a.requisition_id == requisition_id)
        {
            return Ok(candidate.clone());
        }

        candidate
            .applications
            .push(Application::new(requisition_id, at));
        info!(candidate_id, requisition_id, "candidate assigned to requisition");
        Ok(candidate.clone())
    }

    pub async fn advance_stage(
        &self,
        candidate_id: i64,
        requisition_id: i64,
        stage: PipelineStage,
    ) -> Result<Application> {
        self.advance_stage_at(candidate_id, requisition_id, stage, Utc::now())
            .await
    }

    /// Appends a stage entry to the matching application's history. Prior
    /// entries are never mutated or removed: the history is an audit log, not
    /// a pointer to the current stage. Transitions are unconstrained.
    pub async fn advance_stage_at(
        &self,
        candidate_id: i64,
        requisition_id: i64,
        stage: PipelineStage,
        at: DateTime<Utc>,
    ) -> Result<Application> {
        let mut state = self.state.write().await;
        let candidate = state
            .candidates
            .iter_mut()
            .find(|c| c.id == candidate_id)
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", candidate_id)))?;

        let application = candidate
            .applications
            .iter_mut()
            .find(|a| a.requisition_id == requisition_id)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Candidate {} has no application for requisition {}",
                    candidate_id, requisition_id
                ))
            })?;

        application.history.push(StageEntry { stage, date: at });
        info!(candidate_id, requisition_id, stage = ?stage, "application stage advanced");
        Ok(application.clone())
    }

    // ---- Reference entities ----

    pub async fn list_references(&self, kind: ReferenceKind) -> Vec<ReferenceItem> {
        self.state.read().await.references(kind).clone()
    }

    pub async fn create_reference(&self, kind: ReferenceKind, name: String) -> ReferenceItem {
        let mut state = self.state.write().await;
        let set = state.references_mut(kind);
        let item = ReferenceItem {
            id: next_id(set.iter().map(|i| i.id)),
            name,
        };
        set.push(item.clone());
        info!(kind = kind.label(), id = item.id, "reference item created");
        item
    }

    pub async fn update_reference(
        &self,
        kind: ReferenceKind,
        id: i64,
        name: String,
    ) -> Result<ReferenceItem> {
        let mut state = self.state.write().await;
        let item = state
            .references_mut(kind)
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| {
                Error::NotFound(format!("{} {} not found", kind.label(), id))
            })?;
        item.name = name;
        Ok(item.clone())
    }

    /// No cascade: requisitions and candidates keep whatever ids they hold,
    /// and consumers resolve dangling references to "unknown".
    pub async fn delete_reference(&self, kind: ReferenceKind, id: i64) -> Result<()> {
        let mut state = self.state.write().await;
        let set = state.references_mut(kind);
        let before = set.len();
        set.retain(|i| i.id != id);
        if set.len() == before {
            return Err(Error::NotFound(format!("{} {} not found", kind.label(), id)));
        }
        Ok(())
    }
}
