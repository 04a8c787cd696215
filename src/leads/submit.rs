use super::form::{FormError, LeadDraft};
use super::store::{LeadStore, StoreError};

/// Fixed asset saved when a lead opened from the booklet call-to-action
/// is stored, and the name the browser gives the saved file.
pub const BOOKLET_PATH: &str = "/cartilha-karen-langkammer.pdf";
pub const BOOKLET_FILENAME: &str = "cartilha.pdf";

/// Provenance tag of the booklet call-to-action. Only this tag earns a
/// download; the tag never changes validation.
pub const DOWNLOAD_SOURCE: &str = "download";

/// What a submit attempt came to.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The gate failed; nothing was sent to the store.
    Rejected(FormError),
    /// The record was appended. `download` names the asset to save,
    /// present at most once per successful submission.
    Saved { download: Option<&'static str> },
    /// The remote write failed; the draft is untouched and the visitor
    /// may resubmit. No automatic retry happens.
    Failed(StoreError),
}

/// The whole submission flow, minus DOM side effects: gate the draft,
/// append it with its provenance, decide whether a download follows.
/// The caller performs the download; this function only names it.
pub async fn submit_lead(
    draft: &LeadDraft,
    source: &str,
    store: &dyn LeadStore,
) -> SubmitOutcome {
    if let Err(gate) = draft.validate() {
        return SubmitOutcome::Rejected(gate);
    }

    let record = draft.to_record(source);
    match store.insert(&record).await {
        Ok(()) => SubmitOutcome::Saved {
            download: (source == DOWNLOAD_SOURCE).then_some(BOOKLET_PATH),
        },
        Err(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::leads::form::NewLead;

    /// In-memory stand-in for the remote collection.
    #[derive(Default)]
    struct FakeStore {
        fail_next: Cell<bool>,
        inserted: RefCell<Vec<NewLead>>,
    }

    impl LeadStore for FakeStore {
        fn insert<'a>(
            &'a self,
            lead: &'a NewLead,
        ) -> LocalBoxFuture<'a, Result<(), StoreError>> {
            Box::pin(async move {
                if self.fail_next.get() {
                    return Err(StoreError::Rejected {
                        status: 503,
                        message: "service unavailable".into(),
                    });
                }
                self.inserted.borrow_mut().push(lead.clone());
                Ok(())
            })
        }
    }

    fn draft() -> LeadDraft {
        LeadDraft {
            name: "Maria da Silva".into(),
            phone: "(61) 99998-8888".into(),
            email: "maria@example.com".into(),
            region: "Plano Piloto".into(),
        }
    }

    #[test]
    fn incomplete_draft_never_reaches_the_store() {
        let store = FakeStore::default();
        let mut incomplete = draft();
        incomplete.email.clear();

        let outcome = block_on(submit_lead(&incomplete, "hero", &store));

        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(FormError::MissingFields)
        ));
        assert!(store.inserted.borrow().is_empty());
    }

    #[test]
    fn malformed_email_never_reaches_the_store() {
        let store = FakeStore::default();
        let mut bad_email = draft();
        bad_email.email = "maria#example".into();

        let outcome = block_on(submit_lead(&bad_email, "download", &store));

        assert!(matches!(
            outcome,
            SubmitOutcome::Rejected(FormError::InvalidEmail)
        ));
        assert!(store.inserted.borrow().is_empty());
    }

    #[test]
    fn stored_record_carries_all_attributes() {
        let store = FakeStore::default();

        block_on(submit_lead(&draft(), "footer", &store));

        let inserted = store.inserted.borrow();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].name, "Maria da Silva");
        assert_eq!(inserted[0].phone, "(61) 99998-8888");
        assert_eq!(inserted[0].email, "maria@example.com");
        assert_eq!(inserted[0].region, "Plano Piloto");
        assert_eq!(inserted[0].source, "footer");
    }

    #[test]
    fn download_provenance_names_the_booklet_exactly_once() {
        let store = FakeStore::default();

        let outcome = block_on(submit_lead(&draft(), "download", &store));

        match outcome {
            SubmitOutcome::Saved { download } => {
                assert_eq!(download, Some(BOOKLET_PATH))
            }
            other => panic!("expected Saved, got {other:?}"),
        }
        assert_eq!(store.inserted.borrow().len(), 1);
    }

    #[test]
    fn other_provenances_never_download() {
        for source in ["hero", "footer", "footer_info"] {
            let store = FakeStore::default();
            let outcome = block_on(submit_lead(&draft(), source, &store));
            match outcome {
                SubmitOutcome::Saved { download } => assert_eq!(download, None),
                other => panic!("expected Saved, got {other:?}"),
            }
        }
    }

    #[test]
    fn store_failure_keeps_the_draft_for_a_manual_retry() {
        let store = FakeStore::default();
        store.fail_next.set(true);
        let attempt = draft();

        let outcome = block_on(submit_lead(&attempt, "hero", &store));

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(store.inserted.borrow().is_empty());
        // Nothing was consumed: the same draft resubmits as-is.
        assert_eq!(attempt, draft());

        store.fail_next.set(false);
        let retry = block_on(submit_lead(&attempt, "hero", &store));
        assert!(matches!(retry, SubmitOutcome::Saved { download: None }));
        assert_eq!(store.inserted.borrow().len(), 1);
    }
}
