use serde::Serialize;
use thiserror::Error;

use super::email::is_valid_email;
use super::regions;

/// Wire record appended to the remote `leads` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub region: String,
    pub source: String,
}

/// Reasons the submit gate refuses to leave the editing state. The
/// messages are shown inline to the visitor, so they stay in Portuguese.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Preencha todos os campos.")]
    MissingFields,
    #[error("E-mail inválido.")]
    InvalidEmail,
}

/// In-progress form state. One draft lives per open/close cycle of the
/// modal and is discarded when it closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub region: String,
}

impl LeadDraft {
    /// The submit gate: all four fields filled and the email well formed.
    pub fn validate(&self) -> Result<(), FormError> {
        let filled = [&self.name, &self.phone, &self.email, &self.region]
            .iter()
            .all(|field| !field.trim().is_empty());
        if !filled {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Stamps the draft with its provenance tag. The region comes from a
    /// fixed select, so anything off-list is a bug in the page, not a
    /// visitor mistake.
    pub fn to_record(&self, source: &str) -> NewLead {
        debug_assert!(regions::is_region(&self.region));
        NewLead {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            region: self.region.clone(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormError, LeadDraft};

    fn filled() -> LeadDraft {
        LeadDraft {
            name: "Maria da Silva".into(),
            phone: "(61) 99998-8888".into(),
            email: "maria@example.com".into(),
            region: "Ceilândia".into(),
        }
    }

    #[test]
    fn complete_draft_passes_the_gate() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        let clears: [fn(&mut LeadDraft); 4] = [
            |d| d.name.clear(),
            |d| d.phone.clear(),
            |d| d.email.clear(),
            |d| d.region.clear(),
        ];
        for clear in clears {
            let mut draft = filled();
            clear(&mut draft);
            assert_eq!(draft.validate(), Err(FormError::MissingFields));
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut draft = filled();
        draft.name = "   ".into();
        assert_eq!(draft.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn malformed_email_blocks_submission() {
        let mut draft = filled();
        draft.email = "maria.example.com".into();
        assert_eq!(draft.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn record_carries_the_provenance_tag() {
        let record = filled().to_record("hero");
        assert_eq!(record.source, "hero");
        assert_eq!(record.name, "Maria da Silva");
        assert_eq!(record.region, "Ceilândia");
    }
}
