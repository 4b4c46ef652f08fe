//! Delivery information collected before an order is submitted.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delivery and contact details for an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryInfo {
    /// Recipient name
    pub name: String,

    /// Mobile number, 10 digits
    pub mobile: String,

    /// Contact email address
    pub email: String,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// ZIP or postal code, 5 or 6 digits
    pub zip: String,

    /// Street address
    pub address: String,

    /// Requested delivery date as entered (`YYYY-MM-DD` from a date input)
    pub schedule_date: String,
}

impl DeliveryInfo {
    /// Get the value of a single field.
    pub fn get(&self, field: DeliveryField) -> &str {
        match field {
            DeliveryField::Name => &self.name,
            DeliveryField::Mobile => &self.mobile,
            DeliveryField::Email => &self.email,
            DeliveryField::City => &self.city,
            DeliveryField::State => &self.state,
            DeliveryField::Zip => &self.zip,
            DeliveryField::Address => &self.address,
            DeliveryField::ScheduleDate => &self.schedule_date,
        }
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: DeliveryField, value: impl Into<String>) {
        let slot = match field {
            DeliveryField::Name => &mut self.name,
            DeliveryField::Mobile => &mut self.mobile,
            DeliveryField::Email => &mut self.email,
            DeliveryField::City => &mut self.city,
            DeliveryField::State => &mut self.state,
            DeliveryField::Zip => &mut self.zip,
            DeliveryField::Address => &mut self.address,
            DeliveryField::ScheduleDate => &mut self.schedule_date,
        };

        *slot = value.into();
    }
}

/// The fields of [`DeliveryInfo`], named as the form names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryField {
    /// `name`
    Name,
    /// `mobile`
    Mobile,
    /// `email`
    Email,
    /// `city`
    City,
    /// `state`
    State,
    /// `zip`
    Zip,
    /// `address`
    Address,
    /// `scheduleDate`
    ScheduleDate,
}

impl DeliveryField {
    /// Every field, in form order.
    pub const ALL: [DeliveryField; 8] = [
        DeliveryField::Name,
        DeliveryField::Mobile,
        DeliveryField::Email,
        DeliveryField::City,
        DeliveryField::State,
        DeliveryField::Zip,
        DeliveryField::Address,
        DeliveryField::ScheduleDate,
    ];

    /// The form/wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryField::Name => "name",
            DeliveryField::Mobile => "mobile",
            DeliveryField::Email => "email",
            DeliveryField::City => "city",
            DeliveryField::State => "state",
            DeliveryField::Zip => "zip",
            DeliveryField::Address => "address",
            DeliveryField::ScheduleDate => "scheduleDate",
        }
    }
}

impl fmt::Display for DeliveryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised delivery field name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown delivery field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DeliveryField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
