//! Proof engine - the proof-of-experience lifecycle on a review.

use crate::error::VerificationError;
use vouch_store::review::{ProofAttachment, ProofVerdict, ReviewRecord};
use vouch_types::{AdminId, Timestamp};

pub struct ProofEngine;

impl ProofEngine {
    /// Attach proof evidence to a review that has none yet.
    ///
    /// Only legal from the NoProof state; once a proof exists (pending or
    /// decided) it cannot be replaced.
    pub fn submit_proof(
        &self,
        review: &mut ReviewRecord,
        url: impl Into<String>,
        remark: Option<String>,
        now: Timestamp,
    ) -> Result<(), VerificationError> {
        if review.proof.is_some() {
            return Err(VerificationError::ProofAlreadySubmitted(review.id));
        }
        let url = url.into();
        if url.trim().is_empty() {
            return Err(VerificationError::EmptyProofUrl);
        }
        review.proof = Some(ProofAttachment {
            url,
            remark,
            verdict: ProofVerdict::Pending,
        });
        review.updated_at = now;
        Ok(())
    }

    /// Approve the proof. Legal from Pending, and from Rejected as a
    /// re-review correction; the previous reviewer, timestamp, and
    /// rejection reason are overwritten.
    pub fn approve(
        &self,
        review: &mut ReviewRecord,
        admin: AdminId,
        now: Timestamp,
    ) -> Result<(), VerificationError> {
        let proof = review
            .proof
            .as_mut()
            .ok_or(VerificationError::NoProofSubmitted(review.id))?;
        proof.verdict = ProofVerdict::Approved { by: admin, at: now };
        review.updated_at = now;
        Ok(())
    }

    /// Reject the proof with a mandatory reason. Legal from Pending, and
    /// from Approved as a re-review correction.
    pub fn reject(
        &self,
        review: &mut ReviewRecord,
        admin: AdminId,
        reason: &str,
        now: Timestamp,
    ) -> Result<(), VerificationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(VerificationError::MissingReason);
        }
        let proof = review
            .proof
            .as_mut()
            .ok_or(VerificationError::NoProofSubmitted(review.id))?;
        proof.verdict = ProofVerdict::Rejected {
            by: admin,
            at: now,
            reason: reason.to_string(),
        };
        review.updated_at = now;
        Ok(())
    }
}
