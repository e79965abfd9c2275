use chrono::NaiveDate;
use gst_invoice::core::*;
use rust_decimal_macros::dec;

fn main() {
    // Intra-state supply: GST is split into CGST and SGST.
    let invoice = InvoiceBuilder::new("QT-2406-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .seller(
            CompanyBuilder::new("Shree Ganesh Traders", "14 Laxmi Road, Pune 411030")
                .phone("+91 20 2445 1234")
                .gst_number("27AAPFU0939F1ZV")
                .email("accounts@ganeshtraders.in")
                .tagline("Wholesale hardware since 1986")
                .build(),
        )
        .buyer(
            BuyerBuilder::new("Patil Constructions", "Plot 7, MIDC Bhosari, Pune 411026")
                .gst_number("27ABCDE1234F1Z5")
                .phone("+91 98220 11223")
                .build(),
        )
        .details(InvoiceDetails {
            payment_mode: Some("NEFT".into()),
            buyer_po: Some("PC/PO/118".into()),
            po_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            dispatch_through: Some("Own vehicle".into()),
            destination: Some("Bhosari".into()),
            ..InvoiceDetails::default()
        })
        .add_line(
            LineItemBuilder::new("MS angle 40x40x5", dec!(120), dec!(68.50))
                .hsn("7216")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Hinges 4in (pair)", dec!(200), dec!(12.50))
                .hsn("8302")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Loading charges", dec!(1), dec!(350))
                .exempt()
                .build(),
        )
        .regime(TaxRegime::SplitDomestic)
        .build()
        .expect("invoice should be valid");

    println!("{}", invoice.seller.name);
    println!("GSTIN: {}   PAN: {}", invoice.seller.gst_number, invoice.seller.pan());
    println!("Invoice: {}   Date: {}", invoice.number, format_print_date(invoice.issue_date));
    println!("Buyer:   {}", invoice.buyer.name);
    println!("---");
    for item in &invoice.items {
        let line = line_breakdown(item, invoice.gst_rate, invoice.regime);
        let rate = match effective_rate(item, invoice.gst_rate, invoice.regime) {
            Some(rate) => format!("{}%", format_rate(rate)),
            None => "Exempt".to_string(),
        };
        println!(
            "  {:>2} {:<20} {:>6} x {:>8} = {:>10}  {:>7}  {:>10}",
            item.id,
            item.description,
            item.quantity,
            format_amount(item.unit_rate),
            format_amount(item.taxable_amount),
            rate,
            format_amount(line.total_amount),
        );
    }
    println!("---");
    let totals = invoice.totals();
    for row in summary_rows(&totals, invoice.gst_rate, invoice.regime) {
        println!("{:<26} {:>12}", row.label, format_amount(row.amount));
    }
    println!("{}", invoice.amount_in_words());
    println!("Export: {}", pdf_file_name(&invoice.number));
}
