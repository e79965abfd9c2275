use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::gstin::validate_gstin_format;
use super::types::*;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Fewest digits a saved company phone number may have.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Validate an invoice before it is saved or exported.
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_seller("seller", &invoice.seller, &mut errors);
    validate_buyer("buyer", &invoice.buyer, &mut errors);

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "number",
            "invoice number must not be empty",
            "REQ-NUMBER",
        ));
    }

    if invoice.items.is_empty() {
        errors.push(ValidationError::with_rule(
            "items",
            "invoice must have at least one line item",
            "REQ-ITEMS",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors
}

/// Validate a company profile before it is added to the company directory.
///
/// On top of the seller rules of [`validate_invoice`], the email must be
/// well-formed and the phone must carry at least [`MIN_PHONE_DIGITS`] digits.
pub fn validate_company_profile(company: &Company) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_seller("company", company, &mut errors);

    if !company.email.trim().is_empty() {
        check_email("company.email", &company.email, &mut errors);
    }
    let digits = company.phone.chars().filter(char::is_ascii_digit).count();
    if !company.phone.trim().is_empty() && digits < MIN_PHONE_DIGITS {
        errors.push(ValidationError::with_rule(
            "company.phone",
            format!("phone number must contain at least {MIN_PHONE_DIGITS} digits (got {digits})"),
            "PHONE-DIGITS",
        ));
    }
    errors
}

/// Validate a buyer profile before it is added to the buyer directory.
///
/// Email is optional, but must be well-formed when given.
pub fn validate_buyer_profile(buyer: &Buyer) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_buyer("buyer", buyer, &mut errors);

    if let Some(email) = buyer.email.as_deref().filter(|e| !e.trim().is_empty()) {
        check_email("buyer.email", email, &mut errors);
    }
    errors
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

fn validate_seller(prefix: &str, seller: &Company, errors: &mut Vec<ValidationError>) {
    let required = [
        ("name", &seller.name, "REQ-SELLER-NAME"),
        ("address", &seller.address, "REQ-SELLER-ADDRESS"),
        ("phone", &seller.phone, "REQ-SELLER-PHONE"),
        ("gst_number", &seller.gst_number, "REQ-SELLER-GST"),
        ("email", &seller.email, "REQ-SELLER-EMAIL"),
    ];
    for (field, value, rule) in required {
        require(&format!("{prefix}.{field}"), value, rule, errors);
    }

    if !seller.gst_number.trim().is_empty() {
        check_gstin(&format!("{prefix}.gst_number"), &seller.gst_number, errors);
    }
}

fn validate_buyer(prefix: &str, buyer: &Buyer, errors: &mut Vec<ValidationError>) {
    require(&format!("{prefix}.name"), &buyer.name, "REQ-BUYER-NAME", errors);
    require(&format!("{prefix}.address"), &buyer.address, "REQ-BUYER-ADDRESS", errors);

    // Unregistered buyers have no GSTIN.
    if let Some(gstin) = buyer.gst_number.as_deref().filter(|g| !g.trim().is_empty()) {
        check_gstin(&format!("{prefix}.gst_number"), gstin, errors);
    }
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.description"),
            "item description must not be empty",
            "REQ-ITEM-DESC",
        ));
    }

    if item.taxable_amount <= Decimal::ZERO {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.taxable_amount"),
            format!(
                "item amount must be greater than zero (got {})",
                item.taxable_amount
            ),
            "REQ-ITEM-AMOUNT",
        ));
    }
}

fn require(field: &str, value: &str, rule: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::with_rule(field, "must not be empty", rule));
    }
}

fn check_email(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if !is_valid_email(value) {
        errors.push(ValidationError::with_rule(
            field,
            format!("'{}' is not a valid email address", value.trim()),
            "EMAIL-FORMAT",
        ));
    }
}

fn check_gstin(field: &str, value: &str, errors: &mut Vec<ValidationError>) {
    if let Err(e) = validate_gstin_format(value) {
        errors.push(ValidationError::with_rule(field, e.reason, "GSTIN-FORMAT"));
    }
}
