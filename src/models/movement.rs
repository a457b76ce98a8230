//! Movement record
//!
//! One settlement movement per line. Field offsets are part of the file
//! contract and are reproduced byte for byte on encode.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::field::{check_line, Field};
use super::money::Money;
use crate::error::{MovError, MovResult};

const ACQUIRER_CODE: Field = Field::new("acquirer code", 1, 2);
const MOVEMENT_DATE: Field = Field::new("movement date", 3, 8);
const CARD_NUMBER: Field = Field::new("card number", 11, 20);
const INSTALLMENTS: Field = Field::new("installments", 31, 2);
const SALE_VALUE: Field = Field::new("sale value", 33, 17);
const SALE_DATE: Field = Field::new("sale date", 50, 8);
const NSU: Field = Field::new("NSU", 58, 9);
const RESERVED: Field = Field::new("reserved zeros", 67, 2);
const TAX_ID: Field = Field::new("payer tax id", 69, 15);
const ORDER_NUMBER: Field = Field::new("order number", 84, 7);

/// Editable fields of a movement record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovementField {
    AcquirerCode,
    MovementDate,
    CardNumber,
    Installments,
    SaleValue,
    SaleDate,
    Nsu,
    TaxId,
    OrderNumber,
}

impl MovementField {
    pub const ALL: [MovementField; 9] = [
        Self::AcquirerCode,
        Self::MovementDate,
        Self::CardNumber,
        Self::Installments,
        Self::SaleValue,
        Self::SaleDate,
        Self::Nsu,
        Self::TaxId,
        Self::OrderNumber,
    ];

    /// Short name accepted on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::AcquirerCode => "acquirer",
            Self::MovementDate => "movement-date",
            Self::CardNumber => "card",
            Self::Installments => "installments",
            Self::SaleValue => "value",
            Self::SaleDate => "sale-date",
            Self::Nsu => "nsu",
            Self::TaxId => "tax-id",
            Self::OrderNumber => "order",
        }
    }

    fn layout(&self) -> Field {
        match self {
            Self::AcquirerCode => ACQUIRER_CODE,
            Self::MovementDate => MOVEMENT_DATE,
            Self::CardNumber => CARD_NUMBER,
            Self::Installments => INSTALLMENTS,
            Self::SaleValue => SALE_VALUE,
            Self::SaleDate => SALE_DATE,
            Self::Nsu => NSU,
            Self::TaxId => TAX_ID,
            Self::OrderNumber => ORDER_NUMBER,
        }
    }
}

impl fmt::Display for MovementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout().name)
    }
}

impl FromStr for MovementField {
    type Err = MovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|f| f.key()).collect();
                MovError::Validation(format!(
                    "Unknown movement field '{}'. Expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// The 'M' record: one settlement movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementRecord {
    acquirer_code: String,
    movement_date: String,
    card_number: String,
    installments: u8,
    value: Money,
    sale_date: String,
    nsu: String,
    reserved: String,
    tax_id: String,
    order_number: String,
}

impl MovementRecord {
    pub const TAG: char = 'M';

    /// Start building a record from scratch with all-zero defaults
    pub fn builder() -> MovementBuilder {
        MovementBuilder::default()
    }

    /// Largest value the sale value field can hold
    pub fn max_value() -> Money {
        Money::from_cents(SALE_VALUE.max_number() as i64)
    }

    /// Decode a movement line
    pub fn decode(line: &str) -> MovResult<Self> {
        check_line(line, Self::TAG, "Movement")?;
        Ok(Self {
            acquirer_code: ACQUIRER_CODE.digits(line)?.to_string(),
            movement_date: MOVEMENT_DATE.digits(line)?.to_string(),
            card_number: CARD_NUMBER.slice(line).to_string(),
            installments: INSTALLMENTS.number(line)? as u8,
            value: Money::from_cents(SALE_VALUE.number(line)? as i64),
            sale_date: SALE_DATE.digits(line)?.to_string(),
            nsu: NSU.slice(line).to_string(),
            reserved: RESERVED.digits(line)?.to_string(),
            tax_id: TAX_ID.slice(line).to_string(),
            order_number: ORDER_NUMBER.slice(line).to_string(),
        })
    }

    /// Encode back into a 91-character line
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}{:02}{:017}{}{}{}{}{}",
            Self::TAG,
            self.acquirer_code,
            self.movement_date,
            self.card_number,
            self.installments,
            self.value.cents(),
            self.sale_date,
            self.nsu,
            self.reserved,
            self.tax_id,
            self.order_number
        )
    }

    pub fn acquirer_code(&self) -> &str {
        &self.acquirer_code
    }

    pub fn movement_date(&self) -> &str {
        &self.movement_date
    }

    /// Movement date as a calendar date, if it is one
    pub fn movement_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.movement_date, "%Y%m%d").ok()
    }

    /// Card number without its right padding
    pub fn card_number(&self) -> &str {
        self.card_number.trim_end()
    }

    pub fn installments(&self) -> u8 {
        self.installments
    }

    pub fn value(&self) -> Money {
        self.value
    }

    pub fn sale_date(&self) -> &str {
        &self.sale_date
    }

    /// Sale date as a calendar date, if it is one
    pub fn sale_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.sale_date, "%Y%m%d").ok()
    }

    pub fn nsu(&self) -> &str {
        self.nsu.trim_end()
    }

    pub fn tax_id(&self) -> &str {
        self.tax_id.trim_end()
    }

    pub fn order_number(&self) -> &str {
        self.order_number.trim_end()
    }

    /// Display text of one field
    pub fn field_text(&self, field: MovementField) -> String {
        match field {
            MovementField::AcquirerCode => self.acquirer_code.clone(),
            MovementField::MovementDate => self.movement_date.clone(),
            MovementField::CardNumber => self.card_number().to_string(),
            MovementField::Installments => format!("{:02}", self.installments),
            MovementField::SaleValue => self.value.to_string(),
            MovementField::SaleDate => self.sale_date.clone(),
            MovementField::Nsu => self.nsu().to_string(),
            MovementField::TaxId => self.tax_id().to_string(),
            MovementField::OrderNumber => self.order_number().to_string(),
        }
    }

    /// Copy of this record with one field replaced from user text
    ///
    /// Numeric fields accept shorter input and zero-pad it; the sale value is
    /// a decimal amount converted to cents once, rounding half-up.
    pub fn with_field(&self, field: MovementField, input: &str) -> MovResult<Self> {
        let layout = field.layout();
        let mut updated = self.clone();
        match field {
            MovementField::AcquirerCode => updated.acquirer_code = layout.pad_digits(input)?,
            MovementField::MovementDate => updated.movement_date = layout.pad_digits(input)?,
            MovementField::CardNumber => updated.card_number = layout.pad_text(input)?,
            MovementField::Installments => {
                updated.installments = parse_installments(&layout.pad_digits(input)?)?
            }
            MovementField::SaleValue => {
                let value = Money::parse(input).map_err(|e| MovError::field(layout.name, e))?;
                updated.value = check_value(value)?;
            }
            MovementField::SaleDate => updated.sale_date = layout.pad_digits(input)?,
            MovementField::Nsu => updated.nsu = layout.pad_text(input)?,
            MovementField::TaxId => updated.tax_id = layout.pad_text(input)?,
            MovementField::OrderNumber => updated.order_number = layout.pad_text(input)?,
        }
        Ok(updated)
    }
}

fn parse_installments(digits: &str) -> MovResult<u8> {
    digits
        .parse()
        .map_err(|e| MovError::field(INSTALLMENTS.name, e))
}

fn check_value(value: Money) -> MovResult<Money> {
    if value.is_negative() {
        return Err(MovError::field(SALE_VALUE.name, "value cannot be negative"));
    }
    if value > MovementRecord::max_value() {
        return Err(MovError::field(
            SALE_VALUE.name,
            format!("{} does not fit in {} digits", value, SALE_VALUE.width),
        ));
    }
    Ok(value)
}

/// Builder for synthesizing movement records
///
/// Every field starts at the neutral value the file format uses for
/// "not informed"; widths are checked in [`MovementBuilder::build`].
#[derive(Debug, Clone)]
pub struct MovementBuilder {
    acquirer_code: String,
    movement_date: String,
    card_number: String,
    installments: String,
    value: Money,
    sale_date: String,
    nsu: String,
    reserved: String,
    tax_id: String,
    order_number: String,
}

impl Default for MovementBuilder {
    fn default() -> Self {
        Self {
            acquirer_code: "00".into(),
            movement_date: "00000000".into(),
            card_number: String::new(),
            installments: "00".into(),
            value: Money::zero(),
            sale_date: "00000000".into(),
            nsu: "0".repeat(9),
            reserved: "00".into(),
            tax_id: "0".repeat(15),
            order_number: "0".repeat(7),
        }
    }
}

impl MovementBuilder {
    pub fn acquirer_code(mut self, code: impl Into<String>) -> Self {
        self.acquirer_code = code.into();
        self
    }

    pub fn movement_date(mut self, date: impl Into<String>) -> Self {
        self.movement_date = date.into();
        self
    }

    pub fn card_number(mut self, card: impl Into<String>) -> Self {
        self.card_number = card.into();
        self
    }

    pub fn installments(mut self, installments: impl Into<String>) -> Self {
        self.installments = installments.into();
        self
    }

    pub fn value(mut self, value: Money) -> Self {
        self.value = value;
        self
    }

    pub fn sale_date(mut self, date: impl Into<String>) -> Self {
        self.sale_date = date.into();
        self
    }

    pub fn nsu(mut self, nsu: impl Into<String>) -> Self {
        self.nsu = nsu.into();
        self
    }

    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = tax_id.into();
        self
    }

    pub fn order_number(mut self, order: impl Into<String>) -> Self {
        self.order_number = order.into();
        self
    }

    /// Validate every field width and produce the record
    pub fn build(self) -> MovResult<MovementRecord> {
        Ok(MovementRecord {
            acquirer_code: ACQUIRER_CODE.pad_digits(&self.acquirer_code)?,
            movement_date: MOVEMENT_DATE.pad_digits(&self.movement_date)?,
            card_number: CARD_NUMBER.pad_text(&self.card_number)?,
            installments: parse_installments(&INSTALLMENTS.pad_digits(&self.installments)?)?,
            value: check_value(self.value)?,
            sale_date: SALE_DATE.pad_digits(&self.sale_date)?,
            nsu: NSU.pad_text(&self.nsu)?,
            reserved: RESERVED.pad_digits(&self.reserved)?,
            tax_id: TAX_ID.pad_text(&self.tax_id)?,
            order_number: ORDER_NUMBER.pad_text(&self.order_number)?,
        })
    }
}
