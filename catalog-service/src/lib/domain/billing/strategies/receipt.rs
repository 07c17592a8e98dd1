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

/// Till receipt: centred header, two-column summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptStrategy;

impl KeyedStrategy for ReceiptStrategy {
    type Kind = BillKind;

    fn supported_kind(&self) -> BillKind {
        BillKind::Receipt
    }
}

impl DocumentStrategy for ReceiptStrategy {
    fn compose(&self, rental: &Rental) -> BillDocument {
        let transaction = &rental.transaction;

        let mut document = BillDocument::new()
            .heading("RECEIPT")
            .spacer()
            .aligned(SELLER_NAME, Alignment::Center, true);
        for line in SELLER_ADDRESS {
            document = document.aligned(line, Alignment::Center, false);
        }

        let mut rows = vec![vec![
            RENTAL_SERVICE.to_string(),
            transaction.rental_amount().to_string(),
        ]];
        if transaction.late_fee.is_positive() {
            rows.push(vec![LATE_FEE.to_string(), transaction.late_fee.to_string()]);
        }

        document
            .spacer()
            .paragraph(format!(
                "Date and time: {}",
                transaction.generated_at.format("%d.%m.%Y %H:%M")
            ))
            .paragraph(format!("Receipt no: {}", transaction.invoice_id))
            .spacer()
            .table(None, rows)
            .spacer()
            .aligned(
                format!("AMOUNT DUE: {}", transaction.total_amount),
                Alignment::Right,
                true,
            )
            .spacer()
            .aligned("Thank you for your purchase!", Alignment::Center, false)
            .aligned(
                "CineRent - your favourite films on DVD",
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

    fn table_rows(document: &BillDocument) -> Vec<Vec<String>> {
        document
            .blocks()
            .iter()
            .find_map(|block| match block {
                DocumentBlock::Table { rows, .. } => Some(rows.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_receipt_content() {
        let document = ReceiptStrategy.compose(&rental(RentalStatus::Inactive, 0));
        let lines = document.text_lines();

        assert_eq!(lines[0], "RECEIPT");
        assert!(lines.contains(&"Date and time: 15.03.2024 14:30"));
        assert!(lines.contains(&"Receipt no: INV-2024-0042"));
        assert!(lines.contains(&"AMOUNT DUE: 13.50 PLN"));
    }

    #[test]
    fn test_late_fee_row_only_when_charged() {
        let without_fee = ReceiptStrategy.compose(&rental(RentalStatus::Inactive, 0));
        assert_eq!(table_rows(&without_fee).len(), 1);

        let with_fee = ReceiptStrategy.compose(&rental(RentalStatus::Inactive, 250));
        let rows = table_rows(&with_fee);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["Late return fee".to_string(), "2.50 PLN".to_string()]);
    }

    #[test]
    fn test_seller_block_is_centred() {
        let document = ReceiptStrategy.compose(&rental(RentalStatus::Inactive, 0));

        assert!(document.blocks().contains(&DocumentBlock::Paragraph {
            text: "CineRent Sp. z o.o.".to_string(),
            alignment: Alignment::Center,
            bold: true,
        }));
    }
}
