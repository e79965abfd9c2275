use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::record::{Quotation, QuotationStatus};
use crate::core::{
    Invoice, InvoiceError, QuotationNumberSequence, fallback_number, validate_invoice,
};

/// Storage seam for saved quotations.
///
/// Implementors provide the five primitive operations; the lifecycle
/// operations (update, duplicate, convert, numbering) are built on top.
pub trait QuotationStore {
    /// Store a new quotation. Fails if the id is already taken.
    fn insert(&mut self, quotation: Quotation) -> Result<Quotation, InvoiceError>;

    /// Overwrite an existing quotation with the same id.
    fn replace(&mut self, quotation: Quotation) -> Result<Quotation, InvoiceError>;

    fn delete(&mut self, id: Uuid) -> Result<(), InvoiceError>;

    fn get(&self, id: Uuid) -> Result<Quotation, InvoiceError>;

    /// All quotations, newest first.
    fn list(&self) -> Result<Vec<Quotation>, InvoiceError>;

    /// Overwrite the editable content of quotation `id` with `invoice`.
    fn update(
        &mut self,
        id: Uuid,
        invoice: &Invoice,
        status: QuotationStatus,
    ) -> Result<Quotation, InvoiceError> {
        let mut quotation = self.get(id)?;
        quotation.apply(invoice, status);
        self.replace(quotation)
    }

    /// Copy quotation `id` under `new_number`. The copy is always a quotation,
    /// whatever the status of the original.
    fn duplicate(&mut self, id: Uuid, new_number: &str) -> Result<Quotation, InvoiceError> {
        let original = self.get(id)?;
        let copy = Quotation {
            id: Uuid::now_v7(),
            quotation_no: new_number.to_string(),
            status: QuotationStatus::Quotation,
            created_at: Utc::now(),
            ..original
        };
        tracing::info!(from = %id, to = %copy.id, number = new_number, "duplicated quotation");
        self.insert(copy)
    }

    /// Mark quotation `id` as an issued invoice.
    fn convert_to_invoice(&mut self, id: Uuid) -> Result<Quotation, InvoiceError> {
        let mut quotation = self.get(id)?;
        quotation.status = QuotationStatus::Invoice;
        tracing::info!(%id, number = %quotation.quotation_no, "converted quotation to invoice");
        self.replace(quotation)
    }

    /// Number for the next quotation, continuing from the newest stored one.
    ///
    /// Falls back to a timestamp number if the store cannot be read.
    fn next_quotation_number(&self, today: NaiveDate) -> String {
        match self.list() {
            Ok(all) => match all.first() {
                Some(latest) => {
                    QuotationNumberSequence::continuing_from(&latest.quotation_no, today).peek()
                }
                None => QuotationNumberSequence::for_month(today).peek(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "cannot read latest quotation number, using fallback");
                fallback_number(Utc::now().timestamp_millis())
            }
        }
    }
}

/// Validate `invoice` and save it: a new record when `current` is `None`,
/// otherwise an update of the record `current` refers to.
///
/// This is the save step that runs before a PDF export.
pub fn save_invoice<S: QuotationStore + ?Sized>(
    store: &mut S,
    current: Option<Uuid>,
    invoice: &Invoice,
    company_id: Option<Uuid>,
    status: QuotationStatus,
) -> Result<Quotation, InvoiceError> {
    let errors = validate_invoice(invoice);
    if !errors.is_empty() {
        return Err(crate::core::join_errors(&errors));
    }

    match current {
        Some(id) => store.update(id, invoice, status),
        None => store.insert(Quotation::snapshot(invoice, company_id, status)),
    }
}

/// In-memory [`QuotationStore`].
#[derive(Debug, Default)]
pub struct QuotationBook {
    // Insertion order.
    entries: Vec<Quotation>,
}

impl QuotationBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: Uuid) -> Result<usize, InvoiceError> {
        self.entries
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| InvoiceError::NotFound(format!("quotation {id}")))
    }
}

impl QuotationStore for QuotationBook {
    fn insert(&mut self, quotation: Quotation) -> Result<Quotation, InvoiceError> {
        if self.entries.iter().any(|q| q.id == quotation.id) {
            return Err(InvoiceError::Conflict(format!(
                "quotation {} already exists",
                quotation.id
            )));
        }
        tracing::info!(id = %quotation.id, number = %quotation.quotation_no, "saved quotation");
        self.entries.push(quotation.clone());
        Ok(quotation)
    }

    fn replace(&mut self, quotation: Quotation) -> Result<Quotation, InvoiceError> {
        let pos = self.position(quotation.id)?;
        tracing::debug!(id = %quotation.id, status = ?quotation.status, "updated quotation");
        self.entries[pos] = quotation.clone();
        Ok(quotation)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), InvoiceError> {
        let pos = self.position(id)?;
        self.entries.remove(pos);
        tracing::info!(%id, "deleted quotation");
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<Quotation, InvoiceError> {
        let pos = self.position(id)?;
        Ok(self.entries[pos].clone())
    }

    fn list(&self) -> Result<Vec<Quotation>, InvoiceError> {
        let mut all: Vec<Quotation> = self.entries.iter().rev().cloned().collect();
        // Stable: equal timestamps keep newest-inserted first.
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracing::debug!(count = all.len(), "listed quotations");
        Ok(all)
    }
}
