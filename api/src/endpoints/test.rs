use super::*;

#[test]
fn resource_paths() {
    assert_eq!(users::by_id(3), "/users/3");
    assert_eq!(competitions::by_team(8), "/competitions/team/8");
    assert_eq!(teams::competition_standings(2), "/teams/competition/2/standings");
    assert_eq!(
        teams::team_competition_standing(2, 5),
        "/teams/competition/2/team/5/standing"
    );
    assert_eq!(players::performance(9), "/players/9/performance");
    assert_eq!(matches::BASE, "/matches/all");
    assert_eq!(matches::consolidated(4), "/matches/4/consolidated");
    assert_eq!(messages::delete(7, 1), "/messages/7/1");
    assert_eq!(notifications::recent(5), "/notifications/recent?limit=5");
}

/// Tests the paths scoped to a coach.
///
/// Expected: coach id first, then the team or sheet
#[test]
fn coach_paths() {
    assert_eq!(teams::coach::delete(1, 2), "/teams/coach/1/team/2");
    assert_eq!(
        teams::coach::transfer_player(1, 2, 3, 4),
        "/teams/coach/1/transfer/from/2/to/3/player/4"
    );
    assert_eq!(players::coach::by_team(6, 1), "/players/coach/1/team/6");
    assert_eq!(matches::coach::sheets(1, 6), "/matches/coach/1/team/6/sheets");
    assert_eq!(matches::coach::update_sheet(1, 30), "/matches/coach/1/sheet/30");
}

/// Tests that free-text reasons are percent-encoded into the query string.
///
/// Expected: spaces as `+`, reserved characters escaped
#[test]
fn reasons_are_encoded() {
    assert_eq!(
        competitions::coach::register(1, 2, 3, "Ready to play"),
        "/competitions/coach/1/team/2/register/3?reason=Ready+to+play"
    );
    assert_eq!(
        competitions::organizer::process_request(4, 11, true, "ok & welcome"),
        "/competitions/organizer/4/request/11?approved=true&reason=ok+%26+welcome"
    );
    assert_eq!(
        competitions::organizer::update_status(4, "été"),
        "/competitions/organizer/4/status?reason=%C3%A9t%C3%A9"
    );
    assert_eq!(
        competitions::coach::withdraw_all(1, 2, ""),
        "/competitions/coach/1/team/2/withdraw-all?reason="
    );
}

#[test]
fn recipient_categories_by_role() {
    assert_eq!(
        messages::recipient_categories("COACH"),
        "/messages/recipient-categories/COACH"
    );
}
