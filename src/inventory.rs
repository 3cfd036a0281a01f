// 🧊 Inventory - Food entries, aggregation and expiry filtering
// Entries are immutable values; aggregation and filtering always build a new Inventory

use crate::error::ParseError;
use crate::measurement::MeasurementKind;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

// ============================================================================
// INVENTORY ENTRY
// ============================================================================

/// One line item of food: quantity, unit kind and optional expiry.
///
/// Built only through [`InventoryEntry::build`] (or [`InventoryEntry::new`] for
/// already-typed values), so `name` is never blank and `quantity` never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    name: String,
    quantity: u32,
    kind: MeasurementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry: Option<NaiveDate>,
}

impl InventoryEntry {
    /// Build an entry from typed values
    pub fn new(
        name: &str,
        quantity: u32,
        kind: MeasurementKind,
        expiry: Option<NaiveDate>,
    ) -> Result<Self, ParseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }
        if quantity == 0 {
            return Err(ParseError::NonPositiveQuantity(0));
        }

        Ok(InventoryEntry {
            name: name.to_string(),
            quantity,
            kind,
            expiry,
        })
    }

    /// Build an entry from raw text fields.
    ///
    /// # Arguments
    /// * `name` - trimmed; must not be empty
    /// * `quantity` - integer text, must be > 0
    /// * `kind` - one of the measurement tags (`of`, `grams`, `ml`, `slices`)
    /// * `expiry` - optional `DD/MM/YYYY`; blank is treated as absent
    ///
    /// Either every field is valid and an entry comes back, or nothing does.
    pub fn build(
        name: &str,
        quantity: &str,
        kind: &str,
        expiry: Option<&str>,
    ) -> Result<Self, ParseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }

        let kind: MeasurementKind = kind.trim().parse()?;
        let quantity = parse_quantity(quantity)?;

        let expiry = match expiry.map(str::trim) {
            Some(text) if !text.is_empty() => Some(parse_expiry(text)?),
            _ => None,
        };

        Ok(InventoryEntry {
            name: name.to_string(),
            quantity,
            kind,
            expiry,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn kind(&self) -> MeasurementKind {
        self.kind
    }

    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry
    }

    /// Usable on `today`? Undated entries never expire; the boundary day is inclusive.
    pub fn is_usable_on(&self, today: NaiveDate) -> bool {
        match self.expiry {
            Some(date) => date >= today,
            None => true,
        }
    }

    /// Same entry without its expiry (recipe requirements carry none)
    pub fn without_expiry(mut self) -> Self {
        self.expiry = None;
        self
    }
}

fn parse_quantity(text: &str) -> Result<u32, ParseError> {
    let text = text.trim();
    let value: i64 = text
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(text.to_string()))?;

    if value <= 0 {
        return Err(ParseError::NonPositiveQuantity(value));
    }

    u32::try_from(value).map_err(|_| ParseError::InvalidQuantity(text.to_string()))
}

/// Parse `DD/MM/YYYY` into a calendar date
pub fn parse_expiry(text: &str) -> Result<NaiveDate, ParseError> {
    let malformed = || ParseError::MalformedDate(text.to_string());

    let parts: Vec<&str> = text.split('/').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let day: u32 = parts[0].parse().map_err(|_| malformed())?;
    let month: u32 = parts[1].parse().map_err(|_| malformed())?;
    let year: i32 = parts[2].parse().map_err(|_| malformed())?;

    // calendar years start at 1
    if year < 1 {
        return Err(ParseError::InvalidDate { day, month, year });
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate { day, month, year })
}

// ============================================================================
// INVENTORY
// ============================================================================

/// Ordered collection of entries. Duplicates are allowed until [`Inventory::aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<InventoryEntry>) -> Self {
        Inventory { entries }
    }

    pub fn push(&mut self, entry: InventoryEntry) {
        self.entries.push(entry);
    }

    /// Parse a raw row and append it.
    ///
    /// A row that fails to parse is logged and dropped; returns whether it was kept.
    pub fn push_raw(&mut self, name: &str, quantity: &str, kind: &str, expiry: Option<&str>) -> bool {
        match InventoryEntry::build(name, quantity, kind, expiry) {
            Ok(entry) => {
                self.entries.push(entry);
                true
            }
            Err(e) => {
                tracing::warn!(name = name.trim(), error = %e, "Failed to parse food item, skipping");
                false
            }
        }
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InventoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge entries sharing `(name, kind)` into one entry with the summed quantity.
    ///
    /// Entries are stably sorted by name then kind, and each group keeps the
    /// name, kind and expiry of its first member. Same name with a different
    /// kind stays separate ("2 slices cheese" and "50 grams cheese").
    pub fn aggregate(&self) -> Inventory {
        let mut sorted: Vec<&InventoryEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.kind.cmp(&b.kind)));

        let mut merged: Vec<InventoryEntry> = Vec::with_capacity(sorted.len());
        for entry in sorted {
            match merged.last_mut() {
                Some(last) if last.name == entry.name && last.kind == entry.kind => {
                    last.quantity = last.quantity.saturating_add(entry.quantity);
                }
                _ => merged.push(entry.clone()),
            }
        }

        Inventory { entries: merged }
    }

    /// Today's usable food: drop expired entries, order by expiry, aggregate.
    ///
    /// The expiry sort runs before aggregation, so each merged entry carries the
    /// soonest expiry of its group.
    pub fn usable(&self, today: NaiveDate) -> Inventory {
        let mut edible: Vec<InventoryEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.is_usable_on(today))
            .cloned()
            .collect();
        edible.sort_by(|a, b| compare_expiry(a.expiry, b.expiry));

        let usable = Inventory { entries: edible }.aggregate();
        tracing::debug!(
            total = self.entries.len(),
            usable = usable.len(),
            %today,
            "Computed today's food"
        );
        usable
    }
}

/// Dated entries first, earliest first; undated ("never expires") last
fn compare_expiry(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryEntry;
    type IntoIter = std::slice::Iter<'a, InventoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<InventoryEntry> for Inventory {
    fn from_iter<I: IntoIterator<Item = InventoryEntry>>(iter: I) -> Self {
        Inventory {
            entries: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
