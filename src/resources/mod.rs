//! Resource record shapes returned by the API
//!
//! The set of kinds is closed: [`Resource`] is sealed, so the envelope
//! decoder can only ever be instantiated with the types defined here.
//! Each record is a flat shape with lenient defaults; the API omits
//! fields freely depending on account settings.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// A decodable record shape in the closed set of API resource kinds
pub trait Resource: DeserializeOwned + sealed::Sealed {
    /// Value of the envelope `object` tag for this kind
    const OBJECT: &'static str;
}

/// A single affiliate sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default)]
    pub id: String,
    /// Unix timestamp of the transaction
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    /// Decimal amount as reported by the API
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub affiliate_id: String,
    #[serde(default)]
    pub refunded: bool,
}

/// A JV partner on a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A single payment within a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
}

/// An affiliate promoting a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A buying customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Partners embedded as a bare array within another record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerList(pub Vec<Partner>);

/// Payments embedded as a bare array within another record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentList(pub Vec<Payment>);

impl sealed::Sealed for Sale {}
impl Resource for Sale {
    const OBJECT: &'static str = "sale";
}

impl sealed::Sealed for Partner {}
impl Resource for Partner {
    const OBJECT: &'static str = "partner";
}

impl sealed::Sealed for Payment {}
impl Resource for Payment {
    const OBJECT: &'static str = "payment";
}

impl sealed::Sealed for Affiliate {}
impl Resource for Affiliate {
    const OBJECT: &'static str = "affiliate";
}

impl sealed::Sealed for Customer {}
impl Resource for Customer {
    const OBJECT: &'static str = "customer";
}

impl sealed::Sealed for PartnerList {}
impl Resource for PartnerList {
    const OBJECT: &'static str = "partner_list";
}

impl sealed::Sealed for PaymentList {}
impl Resource for PaymentList {
    const OBJECT: &'static str = "payment_list";
}
