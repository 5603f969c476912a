use super::*;

fn pages(pagination: &Pagination) -> Vec<u64> {
    pagination.page_window().iter().map(|b| b.page).collect()
}

/// Tests the page count of empty and partial lists.
///
/// Expected: at least one page, a partial page counts as a page
#[test]
fn total_pages_rounds_up() {
    assert_eq!(Pagination::new(10).total_pages(), 1);
    assert_eq!(Pagination::new(10).with_total(10).total_pages(), 1);
    assert_eq!(Pagination::new(10).with_total(11).total_pages(), 2);
    assert_eq!(Pagination::new(0).with_total(3).total_pages(), 3);
}

#[test]
fn item_indexes() {
    let mut pagination = Pagination::new(10).with_total(42);
    assert_eq!(pagination.first_item_index(), 0);
    assert_eq!(pagination.last_item_index(), Some(9));

    pagination.go_to(5);
    assert_eq!(pagination.first_item_index(), 40);
    assert_eq!(pagination.last_item_index(), Some(41));
    assert_eq!(pagination.summary(), "Showing 41 to 42 of 42");

    let empty = Pagination::new(10);
    assert_eq!(empty.last_item_index(), None);
    assert_eq!(empty.summary(), "No entries");
}

/// Tests the window of page buttons.
///
/// Expected: five pages centred on the current one, shifted at both ends
#[test]
fn page_window_is_centred() {
    let mut pagination = Pagination::new(10).with_total(100);
    assert_eq!(pages(&pagination), vec![1, 2, 3, 4, 5]);

    pagination.go_to(5);
    assert_eq!(pages(&pagination), vec![3, 4, 5, 6, 7]);

    pagination.go_to(10);
    assert_eq!(pages(&pagination), vec![6, 7, 8, 9, 10]);

    let current: Vec<_> = pagination
        .page_window()
        .into_iter()
        .filter(|b| b.is_current)
        .map(|b| b.page)
        .collect();
    assert_eq!(current, vec![10]);
}

#[test]
fn page_window_with_few_pages() {
    let mut pagination = Pagination::new(10).with_total(25);
    pagination.go_to(3);
    assert_eq!(pages(&pagination), vec![1, 2, 3]);

    assert_eq!(pages(&Pagination::new(10)), vec![1]);
}

/// Tests navigation bounds.
///
/// Expected: out-of-range targets are ignored, next/previous stop at the ends
#[test]
fn navigation_stays_in_range() {
    let mut pagination = Pagination::new(10).with_total(30);

    pagination.go_to(0);
    assert_eq!(pagination.page(), 1);
    pagination.go_to(4);
    assert_eq!(pagination.page(), 1);

    pagination.previous();
    assert_eq!(pagination.page(), 1);
    assert!(!pagination.has_previous());

    pagination.last();
    assert_eq!(pagination.page(), 3);
    assert!(!pagination.has_next());
    pagination.next();
    assert_eq!(pagination.page(), 3);

    pagination.previous();
    assert_eq!(pagination.page(), 2);
    pagination.first();
    assert_eq!(pagination.page(), 1);
}

/// Tests that shrinking the list pulls the current page back.
///
/// Expected: page clamped to the new last page
#[test]
fn set_total_clamps_page() {
    let mut pagination = Pagination::new(10).with_total(50);
    pagination.go_to(5);

    pagination.set_total(12);
    assert_eq!(pagination.page(), 2);

    pagination.set_total(0);
    assert_eq!(pagination.page(), 1);
}

/// Tests changing the page size.
///
/// Expected: the page holding the previously first visible item
#[test]
fn change_items_per_page_keeps_first_item() {
    let mut pagination = Pagination::new(10).with_total(100);
    pagination.go_to(4);

    pagination.change_items_per_page(25);
    assert_eq!(pagination.per_page(), 25);
    assert_eq!(pagination.page(), 2);

    pagination.change_items_per_page(5);
    assert_eq!(pagination.page(), 6);
}

#[test]
fn paginate_slices_current_page() {
    let items: Vec<u32> = (1..=23).collect();
    let mut pagination = Pagination::new(10).with_total(items.len() as u64);

    assert_eq!(pagination.paginate(&items), &items[0..10]);

    pagination.last();
    assert_eq!(pagination.paginate(&items), &[21, 22, 23]);

    // Stale total larger than the slice.
    pagination.set_total(100);
    pagination.go_to(8);
    assert!(pagination.paginate(&items).is_empty());
}

/// Tests a zero page size, whichever way it is requested.
///
/// Expected: treated as one item per page, so page math never divides by zero
#[test]
fn zero_page_size_becomes_one() {
    let mut pagination = Pagination::new(0).with_total(3);
    assert_eq!(pagination.per_page(), 1);
    assert_eq!(pagination.total_pages(), 3);

    pagination.change_items_per_page(10);
    pagination.change_items_per_page(0);
    assert_eq!(pagination.per_page(), 1);
    assert_eq!(pagination.page(), 1);
    assert_eq!(pagination.first_item_index(), 0);
    assert_eq!(pagination.total(), 3);
}
