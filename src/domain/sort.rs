// src/domain/sort.rs

use crate::domain::timestamp::parse_timestamp;
use crate::estates::Estate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const ITEMS_PER_PAGE: usize = 10;

/// Table columns that can be sorted on. The string forms are the keys the
/// table headers send back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    NetYield,
    Title,
    Type,
    City,
    Price,
    Timestamp,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::NetYield,
        SortColumn::Title,
        SortColumn::Type,
        SortColumn::City,
        SortColumn::Price,
        SortColumn::Timestamp,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortColumn::NetYield => "net_yield",
            SortColumn::Title => "title",
            SortColumn::Type => "type",
            SortColumn::City => "city.name",
            SortColumn::Price => "price",
            SortColumn::Timestamp => "timestamp",
        }
    }

    fn compare(self, a: &Estate, b: &Estate) -> Ordering {
        match self {
            SortColumn::NetYield => cmp_f64(a.raw.net_yield, b.raw.net_yield),
            SortColumn::Title => cmp_text(&a.raw.title, &b.raw.title),
            SortColumn::Type => cmp_text(&a.raw.estate_type, &b.raw.estate_type),
            SortColumn::City => cmp_text(&a.raw.city.name, &b.raw.city.name),
            SortColumn::Price => cmp_f64(a.raw.price.as_f64(), b.raw.price.as_f64()),
            SortColumn::Timestamp => {
                parse_timestamp(&a.raw.timestamp).cmp(&parse_timestamp(&b.raw.timestamp))
            }
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("unknown sort column '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub descending: bool,
}

impl Default for SortOrder {
    /// Highest yield first.
    fn default() -> Self {
        Self {
            column: SortColumn::NetYield,
            descending: true,
        }
    }
}

impl SortOrder {
    /// Order a header link should request: flips direction on the active
    /// column, starts ascending on any other.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == column {
            Self {
                column,
                descending: !self.descending,
            }
        } else {
            Self {
                column,
                descending: false,
            }
        }
    }
}

fn cmp_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable sort; rows that compare equal keep their feed order.
pub fn sort_estates(estates: &mut [&Estate], order: SortOrder) {
    estates.sort_by(|a, b| {
        let ord = order.column.compare(a, b);
        if order.descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

#[derive(Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a Estate>,
    /// 1-based.
    pub number: usize,
    pub count: usize,
    pub total: usize,
}

impl Page<'_> {
    /// 1-based index of the first row on this page, 0 when empty.
    pub fn first_row(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.number - 1) * ITEMS_PER_PAGE + 1
        }
    }

    pub fn last_row(&self) -> usize {
        (self.number - 1) * ITEMS_PER_PAGE + self.items.len()
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.count
    }
}

/// Cuts one page out of an already sorted list. Pages past the end clamp to
/// the last page.
pub fn paginate(estates: Vec<&Estate>, page: usize) -> Page<'_> {
    let total = estates.len();
    let count = total.div_ceil(ITEMS_PER_PAGE).max(1);
    let number = page.clamp(1, count);

    let items = estates
        .into_iter()
        .skip((number - 1) * ITEMS_PER_PAGE)
        .take(ITEMS_PER_PAGE)
        .collect();

    Page {
        items,
        number,
        count,
        total,
    }
}
