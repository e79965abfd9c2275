use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::directory::CompanyStore;
use crate::core::{
    Buyer, Company, DEFAULT_GST_RATE, Invoice, InvoiceDetails, InvoiceError, InvoiceTotals,
    LineItem, TaxRegime,
};

/// Whether a saved document is still a quotation or has been issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    #[default]
    Quotation,
    Invoice,
}

/// A saved quotation: the invoice as it stood at save time, with its totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: Uuid,
    pub quotation_no: String,
    /// Seller company profile the quotation was issued from.
    pub company_id: Option<Uuid>,
    pub buyer_name: String,
    pub buyer_address: String,
    pub buyer_gst: Option<String>,
    pub issue_date: NaiveDate,
    pub details: InvoiceDetails,
    #[serde(rename = "gst_type", default)]
    pub regime: TaxRegime,
    pub items: Vec<LineItem>,
    pub gst_rate: Decimal,
    pub total_before_tax: Decimal,
    pub total_gst: Decimal,
    pub total_after_tax: Decimal,
    pub status: QuotationStatus,
    pub created_at: DateTime<Utc>,
}

impl Quotation {
    /// Capture `invoice` and its current totals under a fresh id.
    pub fn snapshot(invoice: &Invoice, company_id: Option<Uuid>, status: QuotationStatus) -> Self {
        let totals = invoice.totals();
        Self {
            id: Uuid::now_v7(),
            quotation_no: invoice.number.clone(),
            company_id,
            buyer_name: invoice.buyer.name.clone(),
            buyer_address: invoice.buyer.address.clone(),
            buyer_gst: non_blank(invoice.buyer.gst_number.as_deref()),
            issue_date: invoice.issue_date,
            details: invoice.details.clone(),
            regime: invoice.regime,
            items: invoice.items.clone(),
            gst_rate: invoice.gst_rate,
            total_before_tax: totals.taxable_total,
            total_gst: totals.tax_total,
            total_after_tax: totals.grand_total,
            status,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the editable content with `invoice`.
    ///
    /// Number, company, id and creation time are kept.
    pub fn apply(&mut self, invoice: &Invoice, status: QuotationStatus) {
        let totals = invoice.totals();
        self.buyer_name = invoice.buyer.name.clone();
        self.buyer_address = invoice.buyer.address.clone();
        self.buyer_gst = non_blank(invoice.buyer.gst_number.as_deref());
        self.issue_date = invoice.issue_date;
        self.details = invoice.details.clone();
        self.regime = invoice.regime;
        self.items = invoice.items.clone();
        self.gst_rate = invoice.gst_rate;
        self.total_before_tax = totals.taxable_total;
        self.total_gst = totals.tax_total;
        self.total_after_tax = totals.grand_total;
        self.status = status;
    }

    /// Rebuild an editable invoice for `seller`.
    ///
    /// A zero stored rate falls back to 18%. Line amounts are re-derived from
    /// quantity and unit rate; lines stored with an amount but no unit rate
    /// get their rate back-derived from the amount. An empty item list
    /// yields a single blank line.
    pub fn restore(&self, seller: Company) -> Invoice {
        let mut items = self.restored_items();
        if items.is_empty() {
            items.push(LineItem::new(1, "", Decimal::ONE, Decimal::ZERO));
        }

        Invoice {
            number: self.quotation_no.clone(),
            issue_date: self.issue_date,
            seller,
            buyer: Buyer {
                name: self.buyer_name.clone(),
                address: self.buyer_address.clone(),
                gst_number: self.buyer_gst.clone(),
                ..Buyer::default()
            },
            details: self.details.clone(),
            items,
            gst_rate: if self.gst_rate.is_zero() {
                DEFAULT_GST_RATE
            } else {
                self.gst_rate
            },
            regime: self.regime,
        }
    }

    /// Rebuild an editable invoice, looking the seller up by `company_id`.
    pub fn restore_from<C: CompanyStore + ?Sized>(
        &self,
        companies: &C,
    ) -> Result<Invoice, InvoiceError> {
        let id = self.company_id.ok_or_else(|| {
            InvoiceError::NotFound(format!("company of quotation {}", self.quotation_no))
        })?;
        Ok(self.restore(companies.get(id)?.company))
    }

    fn restored_items(&self) -> Vec<LineItem> {
        self.items
            .iter()
            .map(|item| {
                let mut line = if item.unit_rate.is_zero() && !item.taxable_amount.is_zero() {
                    LineItem::from_amount(
                        item.id,
                        item.description.clone(),
                        item.quantity,
                        item.taxable_amount,
                    )
                } else {
                    LineItem::new(
                        item.id,
                        item.description.clone(),
                        item.quantity,
                        item.unit_rate,
                    )
                };
                line.hsn_code = item.hsn_code.clone();
                line.tax_exempt = item.tax_exempt;
                line
            })
            .collect()
    }

    /// Totals snapshot as stored.
    pub fn stored_totals(&self) -> (Decimal, Decimal, Decimal) {
        (self.total_before_tax, self.total_gst, self.total_after_tax)
    }

    /// Whether the stored totals or line amounts disagree with a fresh
    /// computation from the stored quantities and rates.
    pub fn is_stale(&self) -> bool {
        let items = self.restored_items();
        if items
            .iter()
            .zip(&self.items)
            .any(|(fresh, stored)| fresh.taxable_amount != stored.taxable_amount)
        {
            return true;
        }
        let InvoiceTotals {
            taxable_total,
            tax_total,
            grand_total,
            ..
        } = crate::core::compute_invoice_totals(&items, self.gst_rate, self.regime);
        self.stored_totals() != (taxable_total, tax_total, grand_total)
    }

    /// Serialize to a JSON snapshot.
    pub fn to_json(&self) -> Result<String, InvoiceError> {
        serde_json::to_string_pretty(self).map_err(|e| InvoiceError::Snapshot(e.to_string()))
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, InvoiceError> {
        serde_json::from_str(json).map_err(|e| InvoiceError::Snapshot(e.to_string()))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
