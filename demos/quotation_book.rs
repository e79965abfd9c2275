//! Run with: `cargo run --example quotation_book --features quotation`

use chrono::{NaiveDate, Utc};
use gst_invoice::core::*;
use gst_invoice::quotation::*;
use rust_decimal_macros::dec;

fn seller() -> Company {
    CompanyBuilder::new("Shree Ganesh Traders", "14 Laxmi Road, Pune 411030")
        .phone("+91 20 2445 1234")
        .gst_number("27AAPFU0939F1ZV")
        .email("accounts@ganeshtraders.in")
        .build()
}

fn draft(number: String, today: NaiveDate) -> Result<Invoice, InvoiceError> {
    InvoiceBuilder::new(number, today)
        .seller(seller())
        .buyer(
            BuyerBuilder::new("Kumar Stores", "4 Park Street, Kolkata 700016")
                .gst_number("19ABCDE1234F1Z5")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Hinges 4in (pair)", dec!(200), dec!(12.50))
                .hsn("8302")
                .build(),
        )
        .regime(TaxRegime::Unified)
        .build()
}

fn main() -> Result<(), InvoiceError> {
    let today = Utc::now().date_naive();
    let mut companies = CompanyDirectory::new();
    let company_id = Some(companies.save(seller())?.id);
    let mut book = QuotationBook::new();

    // New quotation
    let number = book.next_quotation_number(today);
    let mut invoice = draft(number, today)?;
    let saved = save_invoice(&mut book, None, &invoice, company_id, QuotationStatus::Quotation)?;
    println!("saved {} ({})", saved.quotation_no, saved.total_after_tax);

    // Customer asks for more; edit and save over the same record
    if let Some(item) = invoice.item_mut(1) {
        item.set_quantity(dec!(350));
    }
    let saved = save_invoice(
        &mut book,
        Some(saved.id),
        &invoice,
        company_id,
        QuotationStatus::Quotation,
    )?;
    println!("updated {} ({})", saved.quotation_no, saved.total_after_tax);

    // Same order for a second branch
    let next = book.next_quotation_number(today);
    let copy = book.duplicate(saved.id, &next)?;
    println!("duplicated as {}", copy.quotation_no);

    // First branch confirms the order
    book.convert_to_invoice(saved.id)?;

    for q in book.list()? {
        println!(
            "{:<14} {:<10} {:>10}  {}",
            q.quotation_no,
            format!("{:?}", q.status),
            q.total_after_tax,
            amount_to_words(q.total_after_tax),
        );
    }

    let reopened = book.get(copy.id)?.restore_from(&companies)?;
    println!("reopened {} with {} line(s)", reopened.number, reopened.items.len());
    println!("{}", book.get(copy.id)?.to_json()?);
    Ok(())
}
