//! Paths, query strings and payloads sent by the resource services.

use league_api::{
    http::Method,
    model::{
        competition::{CompetitionFilter, CompetitionStatus},
        match_sheet::MatchSheetValidationDto,
        matches::{MatchStatus, MatchStatusUpdateDto},
        message::{InboxFilter, RecipientFilter},
        user::Role,
    },
    validation::MatchSheetDraft,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, error::TestError, fixture, transport::MockTransport};

fn last_body(transport: &MockTransport) -> Result<Value, TestError> {
    let request = transport.last_request().unwrap();
    Ok(serde_json::from_str(request.body.as_deref().unwrap_or("null"))?)
}

/// Tests that list filters are sent as query parameters.
///
/// Expected: only the set fields, percent-encoded
#[tokio::test]
async fn competition_filters_in_query() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(Method::Get, "/competitions", &vec![fixture::competition::dto()])
        .build()?;

    let filter = CompetitionFilter {
        status: Some(CompetitionStatus::Registration),
        name: Some("Spring Cup".to_string()),
        ..Default::default()
    };
    let competitions = test.client.competitions().get_all(&filter).await?;

    assert_eq!(competitions, vec![fixture::competition::dto()]);
    assert_eq!(
        test.transport.calls(),
        vec!["GET /competitions?status=REGISTRATION&name=Spring+Cup"]
    );

    Ok(())
}

#[tokio::test]
async fn coach_registers_team_with_reason() -> Result<(), TestError> {
    let path = "/competitions/coach/1/team/10/register/20";
    let test = TestBuilder::new()
        .with_json(Method::Post, path, &fixture::competition::registration_request())
        .build()?;

    let request = test
        .client
        .competitions()
        .register_team(1, 10, 20, "Ready to play")
        .await?;

    assert!(request.is_pending());
    assert_eq!(
        test.transport.calls(),
        vec![format!("POST {}?reason=Ready+to+play", path)]
    );

    Ok(())
}

/// Tests endpoints answering with plain text.
///
/// Expected: Ok(()) whatever the text
#[tokio::test]
async fn plain_text_replies_are_accepted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response(
            Method::Put,
            "/competitions/organizer/2/request/30",
            200,
            "Request approved",
        )
        .with_response(Method::Delete, "/teams/coach/1/team/10", 200, "Team deleted")
        .with_response(Method::Post, "/notifications/read-all", 200, "")
        .build()?;

    test.client
        .competitions()
        .process_request(2, 30, true, "Welcome")
        .await?;
    test.client.teams().delete(1, 10).await?;
    test.client.notifications().mark_all_as_read().await?;

    assert_eq!(
        test.transport.calls()[0],
        "PUT /competitions/organizer/2/request/30?approved=true&reason=Welcome"
    );

    Ok(())
}

/// Tests inbox filters and the wrapped reply shape.
///
/// Expected: role lists as repeated keys, messages unwrapped from `data`
#[tokio::test]
async fn inbox_filters_and_wrapped_reply() -> Result<(), TestError> {
    let reply = json!({"data": [fixture::message::dto(1, "Kick-off moved to 16:00")]});
    let test = TestBuilder::new()
        .with_auth_token("access")
        .with_json(Method::Get, "/messages/inbox", &reply)
        .build()?;

    let filter = InboxFilter {
        is_read: Some(false),
        sender_roles: vec![Role::Organizer, Role::Admin],
        ..Default::default()
    };
    let messages = test.client.messages().get_inbox(&filter).await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Kick-off moved to 16:00");
    assert_eq!(
        test.transport.calls(),
        vec!["GET /messages/inbox?isRead=false&senderRoles=ORGANIZER&senderRoles=ADMIN"]
    );

    Ok(())
}

#[tokio::test]
async fn empty_inbox_reply() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response(Method::Get, "/messages/inbox", 200, "")
        .build()?;

    let messages = test.client.messages().get_inbox(&InboxFilter::default()).await?;

    assert!(messages.is_empty());

    Ok(())
}

#[tokio::test]
async fn recipients_sorted_by_name() -> Result<(), TestError> {
    let recipients = vec![
        fixture::message::recipient(1, "zoe", "Martin"),
        fixture::message::recipient(2, "Adam", "Smith"),
    ];
    let test = TestBuilder::new()
        .with_json(Method::Get, "/messages/recipients", &recipients)
        .build()?;

    let sorted = test
        .client
        .messages()
        .get_recipients(&RecipientFilter::default())
        .await?;

    let ids: Vec<_> = sorted.iter().filter_map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);

    Ok(())
}

/// Tests both shapes of the unread notification count.
///
/// Expected: 3 from a bare number, 4 from an object
#[tokio::test]
async fn unread_count_shapes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response(Method::Get, "/notifications/count", 200, "3")
        .with_json(Method::Get, "/notifications/count", &json!({"count": 4}))
        .build()?;

    assert_eq!(test.client.notifications().unread_count().await?, 3);
    assert_eq!(test.client.notifications().unread_count().await?, 4);

    Ok(())
}

#[tokio::test]
async fn recent_notifications_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(
            Method::Get,
            "/notifications/recent",
            &vec![fixture::notification::dto(1, false)],
        )
        .build()?;

    let recent = test.client.notifications().recent(5).await?;

    assert_eq!(recent.len(), 1);
    assert_eq!(test.transport.calls(), vec!["GET /notifications/recent?limit=5"]);

    Ok(())
}

/// Tests that the status change reason travels in the body.
///
/// Expected: body carries matchId, newStatus and reason
#[tokio::test]
async fn match_status_update_carries_reason() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(Method::Put, "/matches/organizer/2/status", &fixture::matches::dto())
        .build()?;

    let update = MatchStatusUpdateDto {
        match_id: fixture::matches::DEFAULT_ID,
        new_status: MatchStatus::Postponed,
        date_time: None,
        reason: None,
    };
    test.client
        .matches()
        .update_status(2, &update, "Waterlogged pitch")
        .await?;

    let body = last_body(&test.transport)?;
    assert_eq!(body["matchId"], json!(fixture::matches::DEFAULT_ID));
    assert_eq!(body["newStatus"], json!("POSTPONED"));
    assert_eq!(body["reason"], json!("Waterlogged pitch"));

    Ok(())
}

/// Tests rejecting a submitted sheet.
///
/// Expected: UNVALIDATED with the organizer's comments
#[tokio::test]
async fn sheet_rejection_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(
            Method::Put,
            "/matches/organizer/2/validate-sheet",
            &json!({"id": 50, "status": "UNVALIDATED"}),
        )
        .build()?;

    let validation = MatchSheetValidationDto::reject(50, "Missing goalkeeper");
    let sheet = test
        .client
        .matches()
        .validate_sheet(2, &validation, None)
        .await?;

    assert_eq!(sheet.id, Some(50));
    let body = last_body(&test.transport)?;
    assert_eq!(body["isApproved"], json!(false));
    assert_eq!(body["newStatus"], json!("UNVALIDATED"));
    assert_eq!(body["comments"], json!("Missing goalkeeper"));

    Ok(())
}

/// Tests submitting a coach's match sheet built from a draft.
///
/// Expected: PUT to the coach sheet path with status SUBMITTED
#[tokio::test]
async fn coach_submits_match_sheet() -> Result<(), TestError> {
    let sheet = fixture::match_sheet::coach_sheet();
    let path = format!("/matches/coach/1/sheet/{}", fixture::match_sheet::DEFAULT_ID);
    let test = TestBuilder::new()
        .with_auth_token("access")
        .with_json(Method::Get, &path, &sheet)
        .with_json(Method::Put, &path, &sheet)
        .build()?;

    let matches = test.client.matches();
    let loaded = matches
        .get_coach_sheet(1, fixture::match_sheet::DEFAULT_ID)
        .await?;
    let draft = MatchSheetDraft::from_sheet(loaded, &[]);
    let payload = draft.to_submit_payload().unwrap();

    matches
        .update_coach_sheet(1, fixture::match_sheet::DEFAULT_ID, &payload)
        .await?;

    let body = last_body(&test.transport)?;
    assert_eq!(body["status"], json!("SUBMITTED"));
    assert_eq!(body["strategy"], json!(fixture::match_sheet::DEFAULT_STRATEGY));
    assert_eq!(body["playerParticipations"].as_array().map(Vec::len), Some(3));

    Ok(())
}

#[tokio::test]
async fn player_performance_by_competition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(Method::Get, "/players/3/performance", &json!([]))
        .build()?;

    test.client.players().get_performance(3, Some(20)).await?;
    test.client.players().get_performance(3, None).await?;

    assert_eq!(
        test.transport.calls(),
        vec![
            "GET /players/3/performance?competitionId=20",
            "GET /players/3/performance"
        ]
    );

    Ok(())
}

/// Tests that a team's standings and its coach's roster decode into typed rows.
///
/// Expected: one GET per call, rows in reply order
#[tokio::test]
async fn team_standings_and_coach_roster() -> Result<(), TestError> {
    let team = fixture::team::dto();
    let standings = vec![
        fixture::team::standing(fixture::team::DEFAULT_ID, fixture::team::DEFAULT_NAME, 12),
        fixture::team::standing(11, "Blue Tigers", 9),
    ];
    let test = TestBuilder::new()
        .with_json(Method::Get, "/teams/10/standings", &standings)
        .with_json(Method::Get, "/players/coach/1", &vec![fixture::user::player()])
        .build()?;

    let table = test.client.teams().get_standings(fixture::team::DEFAULT_ID).await?;
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].team_name, team.name);
    assert_eq!(table[0].points, Some(12));

    let roster = test.client.players().get_coach_players(1).await?;
    assert_eq!(roster[0].team_id, team.id);

    assert_eq!(
        test.transport.calls(),
        vec!["GET /teams/10/standings", "GET /players/coach/1"]
    );

    Ok(())
}

/// Tests the calls behind a coach's and an organizer's public profile.
///
/// Expected: the user, the coach's teams and the organizer's competitions
#[tokio::test]
async fn public_profile_lookups() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(Method::Get, "/users/1", &fixture::user::coach())
        .with_json(Method::Get, "/users/2", &fixture::user::organizer())
        .with_json(Method::Get, "/teams/coach/1", &vec![fixture::team::dto()])
        .with_json(
            Method::Get,
            "/competitions/user/2",
            &vec![fixture::competition::dto()],
        )
        .build()?;

    let coach = test.client.users().get_user(1).await?;
    assert_eq!(coach.role, Some(Role::Coach));
    let teams = test
        .client
        .teams()
        .get_by_coach(1, &Default::default())
        .await?;
    assert_eq!(teams, vec![fixture::team::dto()]);

    let organizer = test.client.users().get_user(2).await?;
    assert_eq!(organizer.role, Some(Role::Organizer));
    let competitions = test.client.competitions().get_by_user(2).await?;
    assert_eq!(competitions, vec![fixture::competition::dto()]);

    assert_eq!(
        test.transport.calls(),
        vec![
            "GET /users/1",
            "GET /teams/coach/1",
            "GET /users/2",
            "GET /competitions/user/2",
        ]
    );

    Ok(())
}
