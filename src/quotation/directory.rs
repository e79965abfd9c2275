//! Saved company and buyer profiles, referenced by id from quotations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{
    Buyer, Company, InvoiceError, ValidationError, validate_buyer_profile,
    validate_company_profile,
};

/// A company profile in the company directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub company: Company,
    pub created_at: DateTime<Utc>,
}

impl CompanyRecord {
    /// Wrap `company` under a fresh id.
    pub fn new(company: Company) -> Self {
        Self {
            id: Uuid::now_v7(),
            company,
            created_at: Utc::now(),
        }
    }
}

/// A buyer profile in the buyer directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub buyer: Buyer,
    pub created_at: DateTime<Utc>,
}

impl BuyerRecord {
    /// Wrap `buyer` under a fresh id.
    pub fn new(buyer: Buyer) -> Self {
        Self {
            id: Uuid::now_v7(),
            buyer,
            created_at: Utc::now(),
        }
    }
}

/// Storage seam for seller company profiles.
pub trait CompanyStore {
    /// Store a new profile. Fails if the id is already taken.
    fn insert(&mut self, record: CompanyRecord) -> Result<CompanyRecord, InvoiceError>;

    /// Overwrite an existing profile with the same id.
    fn replace(&mut self, record: CompanyRecord) -> Result<CompanyRecord, InvoiceError>;

    fn delete(&mut self, id: Uuid) -> Result<(), InvoiceError>;

    fn get(&self, id: Uuid) -> Result<CompanyRecord, InvoiceError>;

    /// All profiles, sorted by company name.
    fn list(&self) -> Result<Vec<CompanyRecord>, InvoiceError>;

    /// Validate `company` and add it under a fresh id.
    fn save(&mut self, company: Company) -> Result<CompanyRecord, InvoiceError> {
        check(validate_company_profile(&company))?;
        self.insert(CompanyRecord::new(company))
    }

    /// Validate `company` and overwrite profile `id` with it.
    fn update(&mut self, id: Uuid, company: Company) -> Result<CompanyRecord, InvoiceError> {
        check(validate_company_profile(&company))?;
        let record = CompanyRecord {
            company,
            ..self.get(id)?
        };
        self.replace(record)
    }
}

/// Storage seam for buyer profiles.
pub trait BuyerStore {
    /// Store a new profile. Fails if the id is already taken.
    fn insert(&mut self, record: BuyerRecord) -> Result<BuyerRecord, InvoiceError>;

    /// Overwrite an existing profile with the same id.
    fn replace(&mut self, record: BuyerRecord) -> Result<BuyerRecord, InvoiceError>;

    fn delete(&mut self, id: Uuid) -> Result<(), InvoiceError>;

    fn get(&self, id: Uuid) -> Result<BuyerRecord, InvoiceError>;

    /// All profiles, sorted by buyer name.
    fn list(&self) -> Result<Vec<BuyerRecord>, InvoiceError>;

    /// Validate `buyer` and add it under a fresh id.
    fn save(&mut self, buyer: Buyer) -> Result<BuyerRecord, InvoiceError> {
        check(validate_buyer_profile(&buyer))?;
        self.insert(BuyerRecord::new(buyer))
    }

    /// Validate `buyer` and overwrite profile `id` with it.
    fn update(&mut self, id: Uuid, buyer: Buyer) -> Result<BuyerRecord, InvoiceError> {
        check(validate_buyer_profile(&buyer))?;
        let record = BuyerRecord {
            buyer,
            ..self.get(id)?
        };
        self.replace(record)
    }
}

fn check(errors: Vec<ValidationError>) -> Result<(), InvoiceError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::core::join_errors(&errors))
    }
}

/// A record kept in a [`Directory`].
pub trait DirectoryEntry: Clone {
    /// Record kind used in error messages and log events.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Sort key of directory listings.
    fn name(&self) -> &str;
}

impl DirectoryEntry for CompanyRecord {
    const KIND: &'static str = "company";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.company.name
    }
}

impl DirectoryEntry for BuyerRecord {
    const KIND: &'static str = "buyer";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.buyer.name
    }
}

/// In-memory directory of profiles.
#[derive(Debug)]
pub struct Directory<R> {
    entries: Vec<R>,
}

/// In-memory [`CompanyStore`].
pub type CompanyDirectory = Directory<CompanyRecord>;

/// In-memory [`BuyerStore`].
pub type BuyerDirectory = Directory<BuyerRecord>;

impl<R> Default for Directory<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R: DirectoryEntry> Directory<R> {
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
            .position(|r| r.id() == id)
            .ok_or_else(|| InvoiceError::NotFound(format!("{} {id}", R::KIND)))
    }

    fn insert_entry(&mut self, record: R) -> Result<R, InvoiceError> {
        if self.entries.iter().any(|r| r.id() == record.id()) {
            return Err(InvoiceError::Conflict(format!(
                "{} {} already exists",
                R::KIND,
                record.id()
            )));
        }
        tracing::info!(kind = R::KIND, id = %record.id(), name = record.name(), "saved profile");
        self.entries.push(record.clone());
        Ok(record)
    }

    fn replace_entry(&mut self, record: R) -> Result<R, InvoiceError> {
        let pos = self.position(record.id())?;
        tracing::debug!(kind = R::KIND, id = %record.id(), "updated profile");
        self.entries[pos] = record.clone();
        Ok(record)
    }

    fn delete_entry(&mut self, id: Uuid) -> Result<(), InvoiceError> {
        let pos = self.position(id)?;
        self.entries.remove(pos);
        tracing::info!(kind = R::KIND, %id, "deleted profile");
        Ok(())
    }

    fn get_entry(&self, id: Uuid) -> Result<R, InvoiceError> {
        let pos = self.position(id)?;
        Ok(self.entries[pos].clone())
    }

    fn sorted(&self) -> Vec<R> {
        let mut all = self.entries.clone();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }
}

impl CompanyStore for CompanyDirectory {
    fn insert(&mut self, record: CompanyRecord) -> Result<CompanyRecord, InvoiceError> {
        self.insert_entry(record)
    }

    fn replace(&mut self, record: CompanyRecord) -> Result<CompanyRecord, InvoiceError> {
        self.replace_entry(record)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), InvoiceError> {
        self.delete_entry(id)
    }

    fn get(&self, id: Uuid) -> Result<CompanyRecord, InvoiceError> {
        self.get_entry(id)
    }

    fn list(&self) -> Result<Vec<CompanyRecord>, InvoiceError> {
        Ok(self.sorted())
    }
}

impl BuyerStore for BuyerDirectory {
    fn insert(&mut self, record: BuyerRecord) -> Result<BuyerRecord, InvoiceError> {
        self.insert_entry(record)
    }

    fn replace(&mut self, record: BuyerRecord) -> Result<BuyerRecord, InvoiceError> {
        self.replace_entry(record)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), InvoiceError> {
        self.delete_entry(id)
    }

    fn get(&self, id: Uuid) -> Result<BuyerRecord, InvoiceError> {
        self.get_entry(id)
    }

    fn list(&self) -> Result<Vec<BuyerRecord>, InvoiceError> {
        Ok(self.sorted())
    }
}
