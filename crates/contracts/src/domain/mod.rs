//! Backend-owned records as the console reads them.
//!
//! The client never owns entity lifecycle; these are read models for list
//! rows. Mutations go through form payloads, not these structs.

pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_attribute;
pub mod a004_package;
pub mod a005_banner;
pub mod a006_bank;
pub mod a007_b2b_customer;
pub mod a008_payment;
pub mod a009_notification;
pub mod a010_course;
