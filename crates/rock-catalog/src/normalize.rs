//! Conversion from API records to display laptops.

use crate::catalog::{DisplayLaptop, ExternalLaptopRecord};
use crate::config::Locale;
use crate::money::{Currency, Money};

/// Build the display view of one API record. Pure and total.
pub fn normalize(record: &ExternalLaptopRecord, locale: Locale) -> DisplayLaptop {
    let dedicated = record
        .graphics
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty());

    DisplayLaptop {
        id: record.id.clone(),
        numeric_id: record.id.numeric(),
        brand: record.brand.clone(),
        model: record.model.clone(),
        category: record.category.trim().to_lowercase(),
        price: Money::from_decimal(record.price, Currency::EUR),
        image: record.image.clone(),
        processor: record.processor.clone(),
        ram: format!("{}GB", record.ram_gb),
        storage: format!("{}GB", record.storage_gb),
        screen: format!("{}\"", record.screen_inches),
        graphics: dedicated
            .unwrap_or_else(|| locale.integrated_graphics())
            .to_string(),
        has_dedicated_graphics: dedicated.is_some(),
        description: record.description.clone().unwrap_or_default(),
    }
}

/// Normalize every record, keeping API order.
pub fn normalize_all(records: &[ExternalLaptopRecord], locale: Locale) -> Vec<DisplayLaptop> {
    records.iter().map(|r| normalize(r, locale)).collect()
}
