//! Sorting, filtering, column visibility and paging for the product table.
//!
//! [`TableState`] holds only the user's choices; [`TableState::view`] applies
//! them to a freshly loaded product list and returns the rows of the current
//! page. Nothing is cached between calls.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use store::format::{format_date, price_cents, quantity_value};
use store::Product;

/// Data columns of the product table. The actions column is always shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Name,
    Price,
    Unit,
    ManufacturingDate,
    ExpirationDate,
    Perishable,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Price,
        Column::Unit,
        Column::ManufacturingDate,
        Column::ExpirationDate,
        Column::Perishable,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Price => "Price",
            Column::Unit => "Unit",
            Column::ManufacturingDate => "Manufacturing date",
            Column::ExpirationDate => "Expiration date",
            Column::Perishable => "Perishable?",
        }
    }

    /// Text shown in this column for `product`.
    pub fn cell(self, product: &Product, currency_symbol: &str) -> String {
        match self {
            Column::Name => product.name.clone(),
            Column::Price => format!("{currency_symbol} {}", product.price),
            Column::Unit => format!("{} {}", product.quantity, product.unit.code()),
            Column::ManufacturingDate => format_date(Some(product.manufacturing_date)),
            Column::ExpirationDate => format_date(product.expiration_date),
            Column::Perishable => {
                let label = if product.perishable { "Yes" } else { "No" };
                label.to_string()
            }
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Column::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Column::Price => price_cents(&a.price).cmp(&price_cents(&b.price)),
            Column::Unit => a.unit.cmp(&b.unit).then_with(|| {
                quantity_value(&a.quantity).total_cmp(&quantity_value(&b.quantity))
            }),
            Column::ManufacturingDate => a.manufacturing_date.cmp(&b.manufacturing_date),
            Column::ExpirationDate => a.expiration_date.cmp(&b.expiration_date),
            Column::Perishable => a.perishable.cmp(&b.perishable),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Rows of the current page.
#[derive(Debug, PartialEq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a Product>,
    /// Zero-based, clamped to the last page.
    pub page: usize,
    pub page_count: usize,
    /// Rows matching the filter, across all pages.
    pub matching: usize,
}

impl TablePage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    sort: Option<(Column, SortDirection)>,
    filter: String,
    hidden: BTreeSet<Column>,
    page: usize,
    page_size: usize,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            filter: String::new(),
            hidden: BTreeSet::new(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn sort(&self) -> Option<(Column, SortDirection)> {
        self.sort
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Cycle a column through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
        self.page = 0;
    }

    /// Case-insensitive substring match on the product name.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.page = 0;
    }

    pub fn toggle_column(&mut self, column: Column) {
        if !self.hidden.remove(&column) {
            self.hidden.insert(column);
        }
    }

    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }

    /// Step back from the page currently shown for `matching` rows.
    pub fn previous_page(&mut self, matching: usize) {
        self.page = self.clamped_page(matching).saturating_sub(1);
    }

    /// Advance unless already on the last page of `matching` rows.
    pub fn next_page(&mut self, matching: usize) {
        let page = self.clamped_page(matching);
        self.page = if page + 1 < self.page_count(matching) {
            page + 1
        } else {
            page
        };
    }

    fn clamped_page(&self, matching: usize) -> usize {
        self.page.min(self.page_count(matching) - 1)
    }

    fn page_count(&self, matching: usize) -> usize {
        matching.div_ceil(self.page_size).max(1)
    }

    pub fn view<'a>(&self, products: &'a [Product]) -> TablePage<'a> {
        let needle = self.filter.trim().to_lowercase();
        let mut rows: Vec<&Product> = products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect();

        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ord = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        let matching = rows.len();
        let page_count = self.page_count(matching);
        let page = self.clamped_page(matching);
        let rows = rows
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect();

        TablePage {
            rows,
            page,
            page_count,
            matching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use store::Unit;

    fn product(name: &str, price: &str, day: u32, perishable: bool) -> Product {
        Product {
            id: format!("id-{name}"),
            name: name.to_string(),
            unit: Unit::Kilograms,
            price: price.to_string(),
            quantity: "1".to_string(),
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            perishable,
            expiration_date: perishable.then(|| NaiveDate::from_ymd_opt(2024, 12, day).unwrap()),
        }
    }

    fn names(page: &TablePage<'_>) -> Vec<String> {
        page.rows.iter().map(|p| p.name.clone()).collect()
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("banana", "5,00", 3, true),
            product("Apple", "1.200,00", 1, true),
            product("carrot", "80,00", 2, false),
        ]
    }

    #[test]
    fn test_unsorted_keeps_insertion_order() {
        let products = catalog();
        let page = TableState::new(10).view(&products);
        assert_eq!(names(&page), ["banana", "Apple", "carrot"]);
        assert_eq!(page.matching, 3);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_sort_cycle() {
        let products = catalog();
        let mut table = TableState::new(10);

        table.toggle_sort(Column::Name);
        assert_eq!(names(&table.view(&products)), ["Apple", "banana", "carrot"]);

        table.toggle_sort(Column::Name);
        assert_eq!(names(&table.view(&products)), ["carrot", "banana", "Apple"]);

        table.toggle_sort(Column::Name);
        assert_eq!(table.sort(), None);
        assert_eq!(names(&table.view(&products)), ["banana", "Apple", "carrot"]);
    }

    #[test]
    fn test_sort_price_numerically() {
        let products = catalog();
        let mut table = TableState::new(10);
        table.toggle_sort(Column::Price);
        assert_eq!(names(&table.view(&products)), ["banana", "carrot", "Apple"]);
    }

    #[test]
    fn test_sort_expiration_puts_absent_first() {
        let products = catalog();
        let mut table = TableState::new(10);
        table.toggle_sort(Column::ExpirationDate);
        assert_eq!(names(&table.view(&products)), ["carrot", "Apple", "banana"]);
    }

    #[test]
    fn test_filter_by_name() {
        let products = catalog();
        let mut table = TableState::new(10);
        table.set_filter("AN");
        let page = table.view(&products);
        assert_eq!(names(&page), ["banana"]);
        assert_eq!(page.matching, 1);

        table.set_filter("zzz");
        let page = table.view(&products);
        assert!(page.rows.is_empty());
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_pagination() {
        let products: Vec<Product> = (1..=25)
            .map(|i| product(&format!("item {i:02}"), "1,00", 1, false))
            .collect();
        let mut table = TableState::new(10);

        let page = table.view(&products);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.page_count, 3);
        assert!(!page.has_previous());
        assert!(page.has_next());

        table.next_page(page.matching);
        table.next_page(page.matching);
        table.next_page(page.matching);
        let page = table.view(&products);
        assert_eq!(page.page, 2);
        assert_eq!(page.rows.len(), 5);
        assert!(!page.has_next());

        // Shrinking the list clamps to the last page
        let page = table.view(&products[..12]);
        assert_eq!(page.page, 1);
        assert_eq!(names(&page), ["item 11", "item 12"]);

        table.previous_page(page.matching);
        assert_eq!(table.view(&products).page, 0);
    }

    #[test]
    fn test_previous_after_list_shrinks_moves_off_shown_page() {
        let products: Vec<Product> = (1..=25)
            .map(|i| product(&format!("item {i:02}"), "1,00", 1, false))
            .collect();
        let mut table = TableState::new(10);
        table.next_page(25);
        table.next_page(25);
        assert_eq!(table.view(&products).page, 2);

        // Deletes leave two pages; the last one is shown
        let remaining = &products[..12];
        let shown = table.view(remaining);
        assert_eq!(shown.page, 1);
        assert!(shown.has_previous());

        table.previous_page(shown.matching);
        let after = table.view(remaining);
        assert_eq!(after.page, 0);
        assert_eq!(names(&after)[0], "item 01");
    }

    #[test]
    fn test_next_after_list_shrinks_stays_on_last_page() {
        let products: Vec<Product> = (1..=25)
            .map(|i| product(&format!("item {i:02}"), "1,00", 1, false))
            .collect();
        let mut table = TableState::new(10);
        table.next_page(25);
        table.next_page(25);

        table.next_page(12);
        assert_eq!(table.view(&products).page, 1);
    }

    #[test]
    fn test_column_visibility() {
        let mut table = TableState::new(10);
        assert_eq!(table.visible_columns().len(), Column::ALL.len());

        table.toggle_column(Column::Price);
        assert!(!table.is_visible(Column::Price));
        assert_eq!(table.visible_columns().len(), Column::ALL.len() - 1);

        table.toggle_column(Column::Price);
        assert!(table.is_visible(Column::Price));
    }

    #[test]
    fn test_cells() {
        let products = catalog();
        let apple = &products[1];
        assert_eq!(Column::Price.cell(apple, "R$"), "R$ 1.200,00");
        assert_eq!(Column::Unit.cell(apple, "R$"), "1 kg");
        assert_eq!(Column::ManufacturingDate.cell(apple, "R$"), "01/01/2024");
        assert_eq!(Column::ExpirationDate.cell(&products[2], "R$"), "*");
        assert_eq!(Column::Perishable.cell(apple, "R$"), "Yes");
    }
}
