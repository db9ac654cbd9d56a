//! Column detection and per-field parsing for ledger CSV files

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::models::{Category, ExpenseType, Money, NewTransaction, Owner};

/// Largest accepted amount magnitude (10^15), so monthly sums cannot overflow
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Positions of the known columns in a CSV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub owner: usize,
    pub description: usize,
    pub amount: usize,
    pub expense_type: usize,
    pub date: usize,
    pub category: Option<usize>,
}

impl ColumnMap {
    /// Locate columns by Portuguese or English name, case-insensitively
    pub fn from_header(header: &StringRecord) -> Result<Self, String> {
        let names: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();

        match (
            find_column(&names, &["dono", "owner"]),
            find_column(&names, &["descricao", "description"]),
            find_column(&names, &["valor", "amount"]),
            find_column(&names, &["tipo", "type"]),
            find_column(&names, &["data", "date"]),
        ) {
            (Some(owner), Some(description), Some(amount), Some(expense_type), Some(date)) => {
                Ok(Self {
                    owner,
                    description,
                    amount,
                    expense_type,
                    date,
                    category: find_column(&names, &["categoria", "category"]),
                })
            }
            _ => Err(format!(
                "Missing required columns. Expected: Dono/Owner, Descricao/Description, \
                 Valor/Amount, Tipo/Type, Data/Date. Found: {}",
                names.join(", ")
            )),
        }
    }

    /// Parse one data row; the error names the first invalid field
    pub fn parse_record(&self, record: &StringRecord) -> Result<NewTransaction, String> {
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");

        let owner_str = field(self.owner);
        let owner: Owner = owner_str.parse().map_err(|_| {
            format!(
                "Invalid owner \"{}\". Expected Lorenzo or Maria.",
                owner_str
            )
        })?;

        let type_str = field(self.expense_type);
        let expense_type: ExpenseType = type_str
            .parse()
            .map_err(|_| format!("Invalid type \"{}\".", type_str))?;

        let amount_str = field(self.amount);
        let amount = Money::parse(amount_str)
            .ok()
            .filter(|m| m.amount().abs() <= MAX_AMOUNT)
            .ok_or_else(|| format!("Invalid amount \"{}\".", amount_str))?;

        let date_str = field(self.date);
        let date = parse_date(date_str).ok_or_else(|| format!("Invalid date \"{}\".", date_str))?;

        let category = match self.category.map(field).filter(|s| !s.is_empty()) {
            Some(category_str) => Some(
                category_str
                    .parse::<Category>()
                    .map_err(|_| format!("Invalid category \"{}\".", category_str))?,
            ),
            None => None,
        };

        Ok(NewTransaction {
            owner,
            description: field(self.description).to_string(),
            amount,
            expense_type,
            date,
            category,
        })
    }
}

fn find_column(names: &[String], aliases: &[&str]) -> Option<usize> {
    names
        .iter()
        .position(|name| aliases.iter().any(|alias| name == alias))
}

/// Parse `D/M/YY`, `D/M/YYYY` or ISO `YYYY-MM-DD`
///
/// Two-digit years below 50 are read as 20xx, the rest as 19xx.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let parts: Vec<&str> = s.split('/').collect();
    if let [day, month, year] = parts.as_slice() {
        let day: u32 = day.trim().parse().ok()?;
        let month: u32 = month.trim().parse().ok()?;
        let year: i32 = year.trim().parse().ok()?;
        let full_year = match year {
            0..=49 => 2000 + year,
            50..=99 => 1900 + year,
            _ => year,
        };
        return NaiveDate::from_ymd_opt(full_year, month, day);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("5/3/25"), Some(date(2025, 3, 5)));
        assert_eq!(parse_date("05/03/2025"), Some(date(2025, 3, 5)));
        assert_eq!(parse_date("31/12/99"), Some(date(1999, 12, 31)));
        assert_eq!(parse_date("1/1/49"), Some(date(2049, 1, 1)));
        assert_eq!(parse_date("2025-03-05"), Some(date(2025, 3, 5)));
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        assert_eq!(parse_date("31/2/25"), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("1/2"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_header_detection_portuguese() {
        let header = StringRecord::from(vec!["Dono", "Descricao", "Valor", "Tipo", "Data"]);
        let map = ColumnMap::from_header(&header).unwrap();
        assert_eq!(map.owner, 0);
        assert_eq!(map.date, 4);
        assert_eq!(map.category, None);
    }

    #[test]
    fn test_header_detection_english_any_order() {
        let header = StringRecord::from(vec![
            "DATE", "Amount", "owner", "Category", "Type", "Description",
        ]);
        let map = ColumnMap::from_header(&header).unwrap();
        assert_eq!(map.date, 0);
        assert_eq!(map.amount, 1);
        assert_eq!(map.owner, 2);
        assert_eq!(map.category, Some(3));
        assert_eq!(map.expense_type, 4);
        assert_eq!(map.description, 5);
    }

    #[test]
    fn test_header_missing_columns() {
        let header = StringRecord::from(vec!["Owner", "Amount"]);
        let err = ColumnMap::from_header(&header).unwrap_err();
        assert!(err.starts_with("Missing required columns"));
        assert!(err.ends_with("Found: owner, amount"));
    }

    #[test]
    fn test_parse_record() {
        let header = StringRecord::from(vec!["Owner", "Description", "Amount", "Type", "Date"]);
        let map = ColumnMap::from_header(&header).unwrap();

        let record = StringRecord::from(vec![
            "Maria",
            "Rent",
            "R$1.200,00",
            "Despesa Familiar",
            "1/3/25",
        ]);
        let parsed = map.parse_record(&record).unwrap();
        assert_eq!(parsed.owner, Owner::Maria);
        assert_eq!(parsed.amount, Money::from_units(1200));
        assert_eq!(parsed.expense_type, ExpenseType::Household);
        assert_eq!(parsed.date, date(2025, 3, 1));
    }

    #[test]
    fn test_parse_record_errors() {
        let header = StringRecord::from(vec![
            "Owner",
            "Description",
            "Amount",
            "Type",
            "Date",
            "Category",
        ]);
        let map = ColumnMap::from_header(&header).unwrap();

        let bad_owner = StringRecord::from(vec!["Bob", "x", "1", "Income", "1/3/25", ""]);
        assert_eq!(
            map.parse_record(&bad_owner).unwrap_err(),
            "Invalid owner \"Bob\". Expected Lorenzo or Maria."
        );

        let bad_type = StringRecord::from(vec!["Maria", "x", "1", "Gift", "1/3/25", ""]);
        assert_eq!(map.parse_record(&bad_type).unwrap_err(), "Invalid type \"Gift\".");

        let bad_amount = StringRecord::from(vec!["Maria", "x", "lots", "Income", "1/3/25", ""]);
        assert_eq!(map.parse_record(&bad_amount).unwrap_err(), "Invalid amount \"lots\".");

        let bad_date = StringRecord::from(vec!["Maria", "x", "1", "Income", "soon", ""]);
        assert_eq!(map.parse_record(&bad_date).unwrap_err(), "Invalid date \"soon\".");

        let bad_category =
            StringRecord::from(vec!["Maria", "x", "1", "Personal", "1/3/25", "Yachts"]);
        assert_eq!(
            map.parse_record(&bad_category).unwrap_err(),
            "Invalid category \"Yachts\"."
        );
    }

    #[test]
    fn test_amount_magnitude_limit() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000i64));

        let header = StringRecord::from(vec!["Owner", "Description", "Amount", "Type", "Date"]);
        let map = ColumnMap::from_header(&header).unwrap();
        let row = |amount: &str| StringRecord::from(vec!["Maria", "x", amount, "Income", "1/3/25"]);

        let at_limit = map.parse_record(&row("1000000000000000")).unwrap();
        assert_eq!(at_limit.amount.amount(), MAX_AMOUNT);
        assert!(map.parse_record(&row("-1000000000000000")).is_ok());

        assert_eq!(
            map.parse_record(&row("1000000000000000.01")).unwrap_err(),
            "Invalid amount \"1000000000000000.01\"."
        );
        assert_eq!(
            map.parse_record(&row("79228162514264337593543950335")).unwrap_err(),
            "Invalid amount \"79228162514264337593543950335\"."
        );
        assert!(map.parse_record(&row("-79228162514264337593543950335")).is_err());
    }

    #[test]
    fn test_parse_record_short_row() {
        let header = StringRecord::from(vec!["Owner", "Description", "Amount", "Type", "Date"]);
        let map = ColumnMap::from_header(&header).unwrap();
        let short = StringRecord::from(vec!["Lorenzo", "x", "10"]);
        assert_eq!(map.parse_record(&short).unwrap_err(), "Invalid type \"\".");
    }
}
