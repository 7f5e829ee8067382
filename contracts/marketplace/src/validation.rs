//! Input checks shared by every create/update operation.
//!
//! All checks run before the operation writes anything.

use soroban_sdk::{String, Vec};

use crate::error::MarketError;
use crate::types::{Limits, Location};

/// A field that must be present and within the text limit.
pub fn require_text(value: &String, limits: &Limits) -> Result<(), MarketError> {
    if value.is_empty() {
        return Err(MarketError::EmptyField);
    }
    check_len(value, limits)
}

/// A field that may be empty but must still respect the text limit.
pub fn optional_text(value: &String, limits: &Limits) -> Result<(), MarketError> {
    check_len(value, limits)
}

fn check_len(value: &String, limits: &Limits) -> Result<(), MarketError> {
    if value.len() > limits.max_text_len {
        return Err(MarketError::FieldTooLong);
    }
    Ok(())
}

pub fn location(location: &Location) -> Result<(), MarketError> {
    if !location.is_valid() {
        return Err(MarketError::InvalidLocation);
    }
    Ok(())
}

/// Image lists may be empty, but every reference in them must be non-empty.
pub fn images(images: &Vec<String>, limits: &Limits) -> Result<(), MarketError> {
    if images.len() > limits.max_images {
        return Err(MarketError::TooManyImages);
    }
    for image in images.iter() {
        require_text(&image, limits)?;
    }
    Ok(())
}

pub fn price(price: i128) -> Result<(), MarketError> {
    if price < 0 {
        return Err(MarketError::InvalidPrice);
    }
    Ok(())
}

pub fn limits(limits: &Limits) -> Result<(), MarketError> {
    if limits.max_text_len == 0 || limits.max_images == 0 {
        return Err(MarketError::InvalidLimits);
    }
    Ok(())
}
