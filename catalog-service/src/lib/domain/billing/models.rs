use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Kinds of billing document a rental can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillKind {
    Invoice,
    Receipt,
    Subscription,
    OneTime,
    Refund,
}

impl BillKind {
    pub const ALL: [BillKind; 5] = [
        BillKind::Invoice,
        BillKind::Receipt,
        BillKind::Subscription,
        BillKind::OneTime,
        BillKind::Refund,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillKind::Invoice => "INVOICE",
            BillKind::Receipt => "RECEIPT",
            BillKind::Subscription => "SUBSCRIPTION",
            BillKind::OneTime => "ONE_TIME",
            BillKind::Refund => "REFUND",
        }
    }

    /// Prefix used for generated file names.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            BillKind::Invoice => "invoice",
            BillKind::Receipt => "receipt",
            BillKind::Subscription => "subscription",
            BillKind::OneTime => "one_time",
            BillKind::Refund => "refund",
        }
    }
}

impl fmt::Display for BillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown bill kind: {}", s))
    }
}

/// Rental unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentalId(pub i64);

impl fmt::Display for RentalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Active,
    ReturnRequested,
    Inactive,
}

/// Amount of money in minor units (grosze).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const CURRENCY: &'static str = "PLN";

    pub fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let absolute = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02} {}",
            sign,
            absolute / 100,
            absolute % 100,
            Self::CURRENCY
        )
    }
}

/// Financial summary captured when a rental is settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub invoice_id: String,
    pub dvd_title: String,
    pub rental_period_days: u32,
    pub price_per_day: Money,
    pub late_fee: Money,
    pub total_amount: Money,
    pub generated_at: DateTime<Utc>,
}

impl Transaction {
    /// Total without the late fee.
    pub fn rental_amount(&self) -> Money {
        self.total_amount.saturating_sub(self.late_fee)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub customer_nickname: String,
    pub status: RentalStatus,
    pub transaction: Transaction,
}

impl Rental {
    pub fn has_ended(&self) -> bool {
        self.status == RentalStatus::Inactive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// One layout element of a bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBlock {
    Heading(String),
    Paragraph {
        text: String,
        alignment: Alignment,
        bold: bool,
    },
    Table {
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    Spacer,
}

/// Renderer-neutral description of a bill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDocument {
    blocks: Vec<DocumentBlock>,
}

impl BillDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, text: impl ToString) -> Self {
        self.blocks.push(DocumentBlock::Heading(text.to_string()));
        self
    }

    pub fn paragraph(self, text: impl ToString) -> Self {
        self.aligned(text, Alignment::Left, false)
    }

    pub fn bold(self, text: impl ToString) -> Self {
        self.aligned(text, Alignment::Left, true)
    }

    pub fn aligned(mut self, text: impl ToString, alignment: Alignment, bold: bool) -> Self {
        self.blocks.push(DocumentBlock::Paragraph {
            text: text.to_string(),
            alignment,
            bold,
        });
        self
    }

    pub fn table(mut self, header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        self.blocks.push(DocumentBlock::Table { header, rows });
        self
    }

    pub fn spacer(mut self) -> Self {
        self.blocks.push(DocumentBlock::Spacer);
        self
    }

    pub fn blocks(&self) -> &[DocumentBlock] {
        &self.blocks
    }

    /// Every piece of text in the document, in order.
    pub fn text_lines(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                DocumentBlock::Heading(text) | DocumentBlock::Paragraph { text, .. } => {
                    lines.push(text.as_str())
                }
                DocumentBlock::Table { header, rows } => {
                    for row in header.iter().chain(rows.iter()) {
                        lines.extend(row.iter().map(String::as_str));
                    }
                }
                DocumentBlock::Spacer => {}
            }
        }
        lines
    }
}

/// A rendered bill ready to be sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBill {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(1234).to_string(), "12.34 PLN");
        assert_eq!(Money::from_minor(5).to_string(), "0.05 PLN");
        assert_eq!(Money::from_minor(-250).to_string(), "-2.50 PLN");
    }

    #[test]
    fn test_rental_amount_excludes_late_fee() {
        let rental = test_support::rental(RentalStatus::Inactive, 200);
        assert_eq!(rental.transaction.rental_amount(), Money::from_minor(1350));
    }

    #[test]
    fn test_parse_bill_kind() {
        assert_eq!("invoice".parse(), Ok(BillKind::Invoice));
        assert_eq!("one-time".parse(), Ok(BillKind::OneTime));
        assert!("credit_note".parse::<BillKind>().is_err());
    }

    #[test]
    fn test_rental_from_json() {
        let json = r#"{
            "id": 7,
            "customer_nickname": "alice",
            "status": "RETURN_REQUESTED",
            "transaction": {
                "invoice_id": "INV-7",
                "dvd_title": "Heat",
                "rental_period_days": 2,
                "price_per_day": 500,
                "late_fee": 0,
                "total_amount": 1000,
                "generated_at": "2024-05-01T10:00:00Z"
            }
        }"#;

        let rental: Rental = serde_json::from_str(json).unwrap();
        assert_eq!(rental.id, RentalId(7));
        assert!(!rental.has_ended());
        assert_eq!(rental.transaction.total_amount.to_string(), "10.00 PLN");
    }
}
