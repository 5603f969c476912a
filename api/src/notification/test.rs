use super::*;

fn notification(id: i64, is_read: bool) -> NotificationDto {
    NotificationDto {
        id: Some(id),
        message: format!("Notification {}", id),
        is_read,
        ..Default::default()
    }
}

/// Tests that replacing the list recounts unread entries.
///
/// Expected: 2 unread out of 3
#[test]
fn replace_all_counts_unread() {
    let mut center = NotificationCenter::new();
    center.replace_all(vec![
        notification(1, false),
        notification(2, true),
        notification(3, false),
    ]);

    assert_eq!(center.notifications.len(), 3);
    assert_eq!(center.unread_count, 2);
    assert!(center.has_unread());
}

/// Tests marking a single notification as read.
///
/// Expected: count decremented once, never below zero
#[test]
fn mark_read_decrements_once() {
    let mut center = NotificationCenter::new();
    center.replace_all(vec![notification(1, false), notification(2, true)]);

    assert!(center.mark_read(1));
    assert_eq!(center.unread_count, 0);

    assert!(!center.mark_read(1), "already read");
    assert!(!center.mark_read(2), "read from the start");
    assert!(!center.mark_read(404), "unknown id");
    assert_eq!(center.unread_count, 0);
}

#[test]
fn mark_read_floors_at_zero() {
    let mut center = NotificationCenter::new();
    center.notifications = vec![notification(1, false)];
    center.set_unread_count(0);

    center.mark_read(1);
    assert_eq!(center.unread_count, 0);
}

#[test]
fn mark_all_read_clears_count() {
    let mut center = NotificationCenter::new();
    center.replace_all(vec![notification(1, false), notification(2, false)]);

    center.mark_all_read();

    assert_eq!(center.unread_count, 0);
    assert!(center.notifications.iter().all(|n| n.is_read));
}

/// Tests adding a notification.
///
/// Expected: prepended, count bumped only when unread
#[test]
fn add_prepends() {
    let mut center = NotificationCenter::new();
    center.replace_all(vec![notification(1, true)]);

    center.add(notification(2, false));
    center.add(notification(3, true));

    let ids: Vec<_> = center.notifications.iter().filter_map(|n| n.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(center.unread_count, 1);
}

/// Tests removing notifications.
///
/// Expected: count decremented only for an unread one
#[test]
fn remove_adjusts_count_for_unread_only() {
    let mut center = NotificationCenter::new();
    center.replace_all(vec![notification(1, false), notification(2, true)]);

    center.remove(2);
    assert_eq!(center.unread_count, 1);

    center.remove(1);
    assert_eq!(center.unread_count, 0);
    assert!(center.notifications.is_empty());

    center.remove(1);
    assert_eq!(center.unread_count, 0);
}

#[test]
fn badge_text() {
    let mut center = NotificationCenter::new();
    assert_eq!(center.badge(), None);

    center.set_unread_count(7);
    assert_eq!(center.badge().as_deref(), Some("7"));

    center.set_unread_count(120);
    assert_eq!(center.badge().as_deref(), Some("99+"));
}
