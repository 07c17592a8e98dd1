use super::LATE_FEE;
use super::RENTAL_SERVICE;
use super::SELLER_ADDRESS;
use super::SELLER_NAME;
use crate::domain::billing::models::Alignment;
use crate::domain::billing::models::BillDocument;
use crate::domain::billing::models::BillKind;
use crate::domain::billing::models::Rental;
use crate::domain::billing::ports::DocumentStrategy;
use crate::domain::registry::KeyedStrategy;

/// VAT-style invoice with an itemised four-column service table.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceStrategy;

impl KeyedStrategy for InvoiceStrategy {
    type Kind = BillKind;

    fn supported_kind(&self) -> BillKind {
        BillKind::Invoice
    }
}

impl DocumentStrategy for InvoiceStrategy {
    fn compose(&self, rental: &Rental) -> BillDocument {
        let transaction = &rental.transaction;
        let rental_amount = transaction.rental_amount().to_string();
        let late_fee = transaction.late_fee.to_string();

        let mut document = BillDocument::new()
            .heading("INVOICE")
            .spacer()
            .bold("Seller:")
            .paragraph(SELLER_NAME);
        for line in SELLER_ADDRESS {
            document = document.paragraph(line);
        }

        // Late fee row is always itemised, even when zero.
        let rows = vec![
            vec![
                format!("{} \"{}\"", RENTAL_SERVICE, transaction.dvd_title),
                "1".to_string(),
                rental_amount.clone(),
                rental_amount,
            ],
            vec![
                LATE_FEE.to_string(),
                "1".to_string(),
                late_fee.clone(),
                late_fee,
            ],
        ];
        let header = ["Description", "Qty", "Unit price", "Amount"]
            .map(String::from)
            .to_vec();

        document
            .spacer()
            .bold(format!("Invoice number: {}", transaction.invoice_id))
            .paragraph(format!(
                "Issue date: {}",
                transaction.generated_at.format("%d.%m.%Y")
            ))
            .spacer()
            .bold("Buyer:")
            .paragraph(format!("Customer: {}", rental.customer_nickname))
            .spacer()
            .table(Some(header), rows)
            .spacer()
            .aligned(
                format!("TOTAL DUE: {}", transaction.total_amount),
                Alignment::Right,
                true,
            )
            .spacer()
            .aligned(
                "Thank you for choosing CineRent!",
                Alignment::Center,
                false,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::models::test_support::rental;
    use crate::domain::billing::models::DocumentBlock;
    use crate::domain::billing::models::RentalStatus;

    #[test]
    fn test_invoice_content() {
        let document = InvoiceStrategy.compose(&rental(RentalStatus::Inactive, 0));
        let lines = document.text_lines();

        assert_eq!(lines[0], "INVOICE");
        assert!(lines.contains(&"Invoice number: INV-2024-0042"));
        assert!(lines.contains(&"Issue date: 15.03.2024"));
        assert!(lines.contains(&"Customer: movie_fan"));
        assert!(lines.contains(&"DVD rental service \"The Matrix\""));
        assert!(lines.contains(&"TOTAL DUE: 13.50 PLN"));
    }

    #[test]
    fn test_invoice_always_lists_late_fee() {
        let document = InvoiceStrategy.compose(&rental(RentalStatus::Inactive, 0));

        let table = document
            .blocks()
            .iter()
            .find_map(|block| match block {
                DocumentBlock::Table { header, rows } => Some((header, rows)),
                _ => None,
            })
            .unwrap();

        assert_eq!(table.0.as_ref().map(Vec::len), Some(4));
        assert_eq!(table.1.len(), 2);
        assert_eq!(table.1[1][0], "Late return fee");
        assert_eq!(table.1[1][3], "0.00 PLN");
    }

    #[test]
    fn test_service_row_excludes_late_fee() {
        let document = InvoiceStrategy.compose(&rental(RentalStatus::Inactive, 300));
        let lines = document.text_lines();

        assert!(lines.contains(&"13.50 PLN"));
        assert!(lines.contains(&"3.00 PLN"));
        assert!(lines.contains(&"TOTAL DUE: 16.50 PLN"));
    }
}
