//! Delivery form validation

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::delivery::{DeliveryField, DeliveryInfo};

static MOBILE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").ok());
static ZIP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{5,6}$").ok());
static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").ok());

/// Field name to message, one entry per failing field.
///
/// Always produced whole by [`validate_delivery`]; never merged into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<DeliveryField, &'static str>,
}

impl ValidationErrors {
    /// `true` when the snapshot can be submitted.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for a field, if it failed.
    pub fn get(&self, field: DeliveryField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Failing fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DeliveryField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: DeliveryField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Validate a delivery snapshot.
///
/// Every rule is checked independently; the result holds one message for
/// each field that is missing or malformed.
pub fn validate_delivery(info: &DeliveryInfo) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in DeliveryField::ALL {
        if let Some(message) = check_field(field, info.get(field)) {
            errors.insert(field, message);
        }
    }

    errors
}

fn check_field(field: DeliveryField, value: &str) -> Option<&'static str> {
    let missing = value.trim().is_empty();

    match field {
        DeliveryField::Name => missing.then_some("Name is required"),
        DeliveryField::Mobile if missing => Some("Mobile number is required"),
        DeliveryField::Mobile => (!matches(&MOBILE, value)).then_some("Invalid mobile number"),
        DeliveryField::Email if missing => Some("Email is required"),
        DeliveryField::Email => (!matches(&EMAIL, value)).then_some("Invalid email address"),
        DeliveryField::City => missing.then_some("City is required"),
        DeliveryField::State => missing.then_some("State is required"),
        DeliveryField::Zip if missing => Some("ZIP code is required"),
        DeliveryField::Zip => (!matches(&ZIP, value)).then_some("Invalid ZIP code"),
        DeliveryField::Address => missing.then_some("Address is required"),
        DeliveryField::ScheduleDate => missing.then_some("Schedule date is required"),
    }
}

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}
