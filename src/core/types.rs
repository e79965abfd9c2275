use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax;
use super::words;

/// A GST invoice (or quotation) as edited in-session.
///
/// Totals are never stored on the document; [`Invoice::totals`] recomputes
/// them from the items, rate and regime every time it is called.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice / quotation number (e.g. "QT-2406-001").
    pub number: String,
    /// Issue date printed on the document.
    pub issue_date: NaiveDate,
    /// Seller.
    pub seller: Company,
    /// Buyer.
    pub buyer: Buyer,
    /// Dispatch and reference details printed in the header grid.
    pub details: InvoiceDetails,
    /// Line items, in display order.
    pub items: Vec<LineItem>,
    /// GST rate in percent, shared by every taxed line.
    pub gst_rate: Decimal,
    /// How the tax is charged and decomposed.
    pub regime: TaxRegime,
}

impl Invoice {
    /// Recompute the invoice totals from the current items.
    pub fn totals(&self) -> InvoiceTotals {
        tax::compute_invoice_totals(&self.items, self.gst_rate, self.regime)
    }

    /// Grand total in words, as printed under the totals table.
    pub fn amount_in_words(&self) -> String {
        words::amount_to_words(self.totals().grand_total)
    }

    /// Look up a line item by its id.
    pub fn item(&self, id: u32) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Mutable lookup of a line item by its id.
    pub fn item_mut(&mut self, id: u32) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Append an empty line item and return its id.
    ///
    /// Ids are one past the largest id currently in use, or the lowest free
    /// id once `u32::MAX` is taken.
    pub fn add_item(&mut self) -> u32 {
        let id = self.next_item_id();
        self.items.push(LineItem::new(id, "", Decimal::ONE, Decimal::ZERO));
        id
    }

    /// Remove a line item. The last remaining line is never removed.
    /// Returns true if an item was removed.
    pub fn remove_item(&mut self, id: u32) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub(crate) fn next_item_id(&self) -> u32 {
        let max = self.items.iter().map(|i| i.id).max().unwrap_or(0);
        max.checked_add(1).unwrap_or_else(|| {
            let used: HashSet<u32> = self.items.iter().map(|i| i.id).collect();
            (1..u32::MAX).find(|id| !used.contains(id)).unwrap_or(u32::MAX)
        })
    }
}

/// Seller company profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Registered company name.
    pub name: String,
    /// Postal address, free text (may span several lines).
    pub address: String,
    /// Telephone.
    pub phone: String,
    /// GSTIN (15 characters).
    pub gst_number: String,
    /// PAN, if recorded separately from the GSTIN.
    pub pan_number: Option<String>,
    /// Email.
    pub email: String,
    /// Tagline printed under the company name.
    pub tagline: Option<String>,
    /// Public URL of the company logo.
    pub logo_url: Option<String>,
    /// Public URL of the authorised signature image.
    pub signature_url: Option<String>,
}

impl Company {
    /// PAN printed next to the GSTIN.
    ///
    /// Falls back to characters 3..=12 of the GSTIN, which embed the PAN.
    pub fn pan(&self) -> String {
        if let Some(pan) = self.pan_number.as_deref().filter(|p| !p.trim().is_empty()) {
            return pan.to_string();
        }
        super::gstin::pan_from_gstin(&self.gst_number).unwrap_or_default()
    }
}

/// Buyer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    /// Buyer name.
    pub name: String,
    /// Postal address, free text.
    pub address: String,
    /// GSTIN, optional for unregistered buyers.
    pub gst_number: Option<String>,
    /// Telephone.
    pub phone: Option<String>,
    /// Email.
    pub email: Option<String>,
}

/// Dispatch and reference fields of the invoice header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    pub delivery_note: Option<String>,
    pub payment_mode: Option<String>,
    pub supplier_ref: Option<String>,
    pub other_ref: Option<String>,
    /// Buyer's purchase order number.
    pub buyer_po: Option<String>,
    pub po_date: Option<NaiveDate>,
    pub dispatch_through: Option<String>,
    pub destination: Option<String>,
    pub terms_of_delivery: Option<String>,
}

/// A single invoice line.
///
/// `taxable_amount` is derived from `quantity * unit_rate`; use the setters
/// so it stays in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row identifier, unique within the invoice.
    pub id: u32,
    /// Goods / service description.
    pub description: String,
    /// HSN / SAC classification code.
    pub hsn_code: String,
    /// Quantity (units).
    pub quantity: Decimal,
    /// Price per unit, before tax.
    pub unit_rate: Decimal,
    /// `quantity * unit_rate`, rounded to 2 places.
    pub taxable_amount: Decimal,
    /// Excluded from GST (printed as "Exempt").
    pub tax_exempt: bool,
}

impl LineItem {
    pub fn new(
        id: u32,
        description: impl Into<String>,
        quantity: Decimal,
        unit_rate: Decimal,
    ) -> Self {
        let quantity = tax::non_negative(quantity);
        let unit_rate = tax::non_negative(unit_rate);
        Self {
            id,
            description: description.into(),
            hsn_code: String::new(),
            quantity,
            unit_rate,
            taxable_amount: tax::taxable_amount(quantity, unit_rate),
            tax_exempt: false,
        }
    }

    /// Rebuild a line that was stored with an amount but no unit rate.
    ///
    /// The unit rate is back-derived as `amount / quantity` (zero when the
    /// quantity is zero); the stored amount is kept as the taxable amount.
    pub fn from_amount(
        id: u32,
        description: impl Into<String>,
        quantity: Decimal,
        amount: Decimal,
    ) -> Self {
        let quantity = tax::non_negative(quantity);
        let amount = tax::non_negative(amount);
        let unit_rate = amount.checked_div(quantity).unwrap_or(Decimal::ZERO);
        Self {
            id,
            description: description.into(),
            hsn_code: String::new(),
            quantity,
            unit_rate,
            taxable_amount: tax::round2(amount),
            tax_exempt: false,
        }
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = tax::non_negative(quantity);
        self.recompute();
    }

    pub fn set_unit_rate(&mut self, unit_rate: Decimal) {
        self.unit_rate = tax::non_negative(unit_rate);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.taxable_amount = tax::taxable_amount(self.quantity, self.unit_rate);
    }
}

/// How GST is charged on the invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    /// No GST charged.
    #[default]
    #[serde(rename = "")]
    None,
    /// Intra-state supply: tax split equally into CGST and SGST.
    #[serde(rename = "CGST_SGST")]
    SplitDomestic,
    /// Inter-state supply: a single IGST component.
    #[serde(rename = "IGST")]
    Unified,
}

impl TaxRegime {
    /// Stored code, as persisted with saved quotations.
    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::SplitDomestic => "CGST_SGST",
            Self::Unified => "IGST",
        }
    }

    /// Parse from the stored code. Unknown codes map to [`TaxRegime::None`].
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "CGST_SGST" => Self::SplitDomestic,
            "IGST" => Self::Unified,
            _ => Self::None,
        }
    }

    /// Whether any tax is charged under this regime.
    pub fn is_taxed(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Per-line tax figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTax {
    /// GST on the line, rounded to 2 places.
    pub tax_amount: Decimal,
    /// Taxable amount plus GST, rounded to 2 places.
    pub total_amount: Decimal,
}

/// Aggregate invoice totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of line taxable amounts ("Total Amount Before Tax").
    pub taxable_total: Decimal,
    /// Sum of rounded line taxes.
    pub tax_total: Decimal,
    /// `taxable_total + tax_total` ("Total amount after tax").
    pub grand_total: Decimal,
    /// CGST share (split regime only).
    pub cgst: Decimal,
    /// SGST share (split regime only).
    pub sgst: Decimal,
    /// IGST (unified regime only).
    pub igst: Decimal,
}

impl InvoiceTotals {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
