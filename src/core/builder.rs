use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::{InvoiceError, join_errors};
use super::types::*;
use super::validation;

/// GST rate a new invoice starts with.
pub const DEFAULT_GST_RATE: Decimal = dec!(18);

/// Builder for constructing valid invoices.
///
/// ```
/// use gst_invoice::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("QT-2406-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .seller(CompanyBuilder::new("Acme Traders", "12 MG Road, Pune")
///         .phone("+91 20 5555 0101")
///         .gst_number("27AAPFU0939F1ZV")
///         .email("billing@acme.in")
///         .build())
///     .buyer(BuyerBuilder::new("Kumar Stores", "4 Park Street, Mumbai").build())
///     .add_line(LineItemBuilder::new("Steel racks", dec!(2), dec!(2500)).hsn("9403").build())
///     .regime(TaxRegime::SplitDomestic)
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.totals().grand_total, dec!(5900.00));
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: NaiveDate,
    seller: Option<Company>,
    buyer: Option<Buyer>,
    details: InvoiceDetails,
    items: Vec<LineItem>,
    gst_rate: Decimal,
    regime: TaxRegime,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            seller: None,
            buyer: None,
            details: InvoiceDetails::default(),
            items: Vec::new(),
            gst_rate: DEFAULT_GST_RATE,
            regime: TaxRegime::None,
        }
    }

    pub fn seller(mut self, company: Company) -> Self {
        self.seller = Some(company);
        self
    }

    pub fn buyer(mut self, buyer: Buyer) -> Self {
        self.buyer = Some(buyer);
        self
    }

    pub fn details(mut self, details: InvoiceDetails) -> Self {
        self.details = details;
        self
    }

    /// Append a line. Line ids are assigned in insertion order starting at 1.
    pub fn add_line(mut self, line: LineItem) -> Self {
        let id = self.items.len() as u32 + 1;
        self.items.push(LineItem { id, ..line });
        self
    }

    pub fn gst_rate(mut self, rate: Decimal) -> Self {
        self.gst_rate = rate;
        self
    }

    pub fn regime(mut self, regime: TaxRegime) -> Self {
        self.regime = regime;
        self
    }

    /// Build the invoice and run save/export validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            return Err(join_errors(&errors));
        }

        Ok(invoice)
    }

    /// Build without validation: the in-session draft state, where fields
    /// may still be blank.
    pub fn build_unchecked(self) -> Result<Invoice, InvoiceError> {
        if self.gst_rate.is_sign_negative() {
            return Err(InvoiceError::Builder(format!(
                "GST rate cannot be negative (got {})",
                self.gst_rate
            )));
        }
        if self.items.len() > 10_000 {
            return Err(InvoiceError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(InvoiceError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        Ok(Invoice {
            number: self.number,
            issue_date: self.issue_date,
            seller: self.seller.unwrap_or_default(),
            buyer: self.buyer.unwrap_or_default(),
            details: self.details,
            items: self.items,
            gst_rate: self.gst_rate,
            regime: self.regime,
        })
    }
}

/// Builder for the seller [`Company`].
pub struct CompanyBuilder {
    company: Company,
}

impl CompanyBuilder {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            company: Company {
                name: name.into(),
                address: address.into(),
                ..Company::default()
            },
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.company.phone = phone.into();
        self
    }

    pub fn gst_number(mut self, gstin: impl Into<String>) -> Self {
        self.company.gst_number = gstin.into();
        self
    }

    pub fn pan_number(mut self, pan: impl Into<String>) -> Self {
        self.company.pan_number = Some(pan.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.company.email = email.into();
        self
    }

    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.company.tagline = Some(tagline.into());
        self
    }

    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.company.logo_url = Some(url.into());
        self
    }

    pub fn signature_url(mut self, url: impl Into<String>) -> Self {
        self.company.signature_url = Some(url.into());
        self
    }

    pub fn build(self) -> Company {
        self.company
    }
}

/// Builder for [`Buyer`].
pub struct BuyerBuilder {
    buyer: Buyer,
}

impl BuyerBuilder {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            buyer: Buyer {
                name: name.into(),
                address: address.into(),
                ..Buyer::default()
            },
        }
    }

    pub fn gst_number(mut self, gstin: impl Into<String>) -> Self {
        self.buyer.gst_number = Some(gstin.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.buyer.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.buyer.email = Some(email.into());
        self
    }

    pub fn build(self) -> Buyer {
        self.buyer
    }
}

/// Builder for [`LineItem`]. The id is assigned by [`InvoiceBuilder::add_line`].
pub struct LineItemBuilder {
    description: String,
    hsn_code: String,
    quantity: Decimal,
    unit_rate: Decimal,
    tax_exempt: bool,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_rate: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn_code: String::new(),
            quantity,
            unit_rate,
            tax_exempt: false,
        }
    }

    pub fn hsn(mut self, code: impl Into<String>) -> Self {
        self.hsn_code = code.into();
        self
    }

    /// Exclude this line from GST.
    pub fn exempt(mut self) -> Self {
        self.tax_exempt = true;
        self
    }

    pub fn build(self) -> LineItem {
        let mut item = LineItem::new(0, self.description, self.quantity, self.unit_rate);
        item.hsn_code = self.hsn_code;
        item.tax_exempt = self.tax_exempt;
        item
    }
}
