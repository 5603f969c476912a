use super::*;

fn row(player_id: i64, status: Option<PlayerStatus>, number: Option<u32>) -> PlayerParticipationDto {
    PlayerParticipationDto {
        player_id: Some(player_id),
        player_name: Some(format!("Player {}", player_id)),
        player_status: status,
        shirt_number: number,
        ..Default::default()
    }
}

fn sheet(status: MatchSheetStatus, players: Vec<PlayerParticipationDto>) -> CoachMatchSheetDto {
    CoachMatchSheetDto {
        id: Some(12),
        match_id: Some(3),
        status: Some(status),
        strategy: Some("4-4-2".to_string()),
        player_participations: players,
        ..Default::default()
    }
}

/// Tests that distinct shirt numbers produce no duplicate message.
///
/// Expected: None
#[test]
fn no_duplicates_for_distinct_numbers() {
    let players = vec![
        row(1, Some(PlayerStatus::Starter), Some(1)),
        row(2, Some(PlayerStatus::Starter), Some(7)),
        row(3, Some(PlayerStatus::Substitute), Some(10)),
    ];

    assert!(duplicate_shirt_numbers(&players).is_empty());
    assert_eq!(check_duplicate_shirt_numbers(&players), None);
}

/// Tests that missing and zero shirt numbers are never reported as duplicates.
///
/// Expected: None even though several rows share "no number"
#[test]
fn empty_numbers_are_ignored() {
    let players = vec![
        row(1, None, None),
        row(2, None, None),
        row(3, None, Some(0)),
        row(4, None, Some(0)),
    ];

    assert_eq!(check_duplicate_shirt_numbers(&players), None);
}

/// Tests that each duplicated number is listed once, in order of first repetition.
///
/// Expected: [7, 10] and a message naming both
#[test]
fn lists_each_duplicate_once() {
    let players = vec![
        row(1, None, Some(10)),
        row(2, None, Some(7)),
        row(3, None, Some(7)),
        row(4, None, Some(10)),
        row(5, None, Some(7)),
    ];

    assert_eq!(duplicate_shirt_numbers(&players), vec![7, 10]);

    let message = check_duplicate_shirt_numbers(&players).unwrap();
    assert_eq!(
        message,
        "Duplicate shirt number(s): 7, 10. Each player must have a unique number."
    );
}

/// Tests the per-row highlight check.
///
/// Expected: true only for a number worn twice
#[test]
fn highlights_duplicated_rows_only() {
    let players = vec![
        row(1, None, Some(9)),
        row(2, None, Some(9)),
        row(3, None, Some(4)),
    ];

    assert!(is_shirt_number_duplicated(&players, Some(9)));
    assert!(!is_shirt_number_duplicated(&players, Some(4)));
    assert!(!is_shirt_number_duplicated(&players, Some(0)));
    assert!(!is_shirt_number_duplicated(&players, None));
}

/// Tests which sheet statuses allow editing.
///
/// Expected: only DRAFT and UNVALIDATED are editable
#[test]
fn editable_statuses() {
    for status in MatchSheetStatus::variants() {
        let expected = matches!(
            status,
            MatchSheetStatus::Draft | MatchSheetStatus::Unvalidated
        );
        assert_eq!(status.is_editable(), expected, "{:?}", status);
    }
    assert!(!MatchSheetStatus::Unknown("ARCHIVED".to_string()).is_editable());
}

/// Tests that a player without a status blocks submission.
///
/// Expected: Err(IncompleteLineup)
#[test]
fn submission_requires_a_status_for_everyone() {
    let players = vec![
        row(1, Some(PlayerStatus::Starter), Some(1)),
        row(2, None, None),
    ];

    assert_eq!(
        validate_for_submission(&players, "Press high"),
        Err(MatchSheetError::IncompleteLineup)
    );
}

/// Tests that a starter without a shirt number blocks submission.
///
/// Expected: Err(IncompleteLineup), while a numberless substitute is fine
#[test]
fn submission_requires_numbers_for_starters() {
    let starter_without_number = vec![
        row(1, Some(PlayerStatus::Starter), Some(0)),
        row(2, Some(PlayerStatus::Substitute), None),
    ];
    assert_eq!(
        validate_for_submission(&starter_without_number, "Press high"),
        Err(MatchSheetError::IncompleteLineup)
    );

    let substitute_without_number = vec![
        row(1, Some(PlayerStatus::Starter), Some(1)),
        row(2, Some(PlayerStatus::Substitute), None),
    ];
    assert_eq!(
        validate_for_submission(&substitute_without_number, "Press high"),
        Ok(())
    );
}

/// Tests the order in which submission checks run.
///
/// Expected: lineup first, then duplicates, then strategy
#[test]
fn submission_checks_run_in_order() {
    let incomplete_and_duplicated = vec![
        row(1, Some(PlayerStatus::Starter), Some(5)),
        row(2, Some(PlayerStatus::Starter), Some(5)),
        row(3, None, None),
    ];
    assert_eq!(
        validate_for_submission(&incomplete_and_duplicated, ""),
        Err(MatchSheetError::IncompleteLineup)
    );

    let duplicated = vec![
        row(1, Some(PlayerStatus::Starter), Some(5)),
        row(2, Some(PlayerStatus::Starter), Some(5)),
    ];
    assert_eq!(
        validate_for_submission(&duplicated, ""),
        Err(MatchSheetError::DuplicateShirtNumbers(vec![5]))
    );

    let valid = vec![
        row(1, Some(PlayerStatus::Starter), Some(5)),
        row(2, Some(PlayerStatus::Starter), Some(6)),
    ];
    assert_eq!(
        validate_for_submission(&valid, "   "),
        Err(MatchSheetError::MissingStrategy)
    );
}

/// Tests that saving a draft only checks for duplicates.
///
/// Expected: Ok for an incomplete lineup, Err for duplicates
#[test]
fn save_only_rejects_duplicates() {
    let incomplete = vec![row(1, None, None), row(2, None, Some(3))];
    assert_eq!(validate_for_save(&incomplete), Ok(()));

    let duplicated = vec![row(1, None, Some(3)), row(2, None, Some(3))];
    assert_eq!(
        validate_for_save(&duplicated),
        Err(MatchSheetError::DuplicateShirtNumbers(vec![3]))
    );
}

/// Tests seeding a draft from the roster when the sheet lists no players.
///
/// Expected: one row per roster player with no status, position or number and zeroed counters
#[test]
fn draft_seeds_from_roster() {
    let roster = vec![
        PlayerDto {
            id: Some(21),
            first_name: Some("Ada".to_string()),
            last_name: Some("Diallo".to_string()),
            ..Default::default()
        },
        PlayerDto {
            id: Some(22),
            user_name: Some("kbenz".to_string()),
            ..Default::default()
        },
    ];

    let draft = MatchSheetDraft::from_sheet(sheet(MatchSheetStatus::Draft, vec![]), &roster);

    assert_eq!(draft.players.len(), 2);
    assert_eq!(draft.strategy, "4-4-2");

    let first = &draft.players[0];
    assert_eq!(first.player_id, Some(21));
    assert_eq!(first.player_name.as_deref(), Some("Ada Diallo"));
    assert_eq!(first.match_sheet_id, Some(12));
    assert_eq!(first.player_status, None);
    assert_eq!(first.position, None);
    assert_eq!(first.shirt_number, None);
    assert_eq!(first.goals_scored, Some(0));
    assert_eq!(first.yellow_cards, Some(0));
    assert_eq!(first.red_cards, Some(0));
    assert_eq!(first.minutes_played, Some(0));
    assert_eq!(first.substitution_in_time, None);

    assert_eq!(draft.players[1].player_name.as_deref(), Some("kbenz"));
}

/// Tests that existing participations win over the roster.
///
/// Expected: the sheet's rows are kept unchanged
#[test]
fn draft_keeps_existing_participations() {
    let existing = vec![row(1, Some(PlayerStatus::Starter), Some(9))];
    let roster = vec![PlayerDto {
        id: Some(99),
        ..Default::default()
    }];

    let draft =
        MatchSheetDraft::from_sheet(sheet(MatchSheetStatus::Draft, existing.clone()), &roster);

    assert_eq!(draft.players, existing);
}

/// Tests editing a row by player id.
///
/// Expected: only the targeted row changes, and a zero number clears the number
#[test]
fn draft_edits_rows_by_player_id() {
    let mut draft = MatchSheetDraft::from_sheet(
        sheet(
            MatchSheetStatus::Draft,
            vec![row(1, None, None), row(2, None, None)],
        ),
        &[],
    );

    draft.set_status(2, Some(PlayerStatus::Starter));
    draft.set_position(2, Some(PlayerPosition::Forward));
    draft.set_shirt_number(2, Some(11));
    draft.set_status(404, Some(PlayerStatus::Injured));

    assert_eq!(draft.players[0].player_status, None);
    assert_eq!(draft.players[1].player_status, Some(PlayerStatus::Starter));
    assert_eq!(draft.players[1].position, Some(PlayerPosition::Forward));
    assert_eq!(draft.players[1].shirt_number, Some(11));

    draft.set_shirt_number(2, Some(0));
    assert_eq!(draft.players[1].shirt_number, None);
}

/// Tests the payload built for final submission.
///
/// Expected: status SUBMITTED with the draft's players and strategy
#[test]
fn submit_payload_sets_submitted_status() {
    let mut draft = MatchSheetDraft::from_sheet(
        sheet(
            MatchSheetStatus::Unvalidated,
            vec![row(1, Some(PlayerStatus::Starter), Some(1))],
        ),
        &[],
    );
    draft.strategy = "Counter-attack".to_string();

    let payload = draft.to_submit_payload().unwrap();

    assert_eq!(payload.status, Some(MatchSheetStatus::Submitted));
    assert_eq!(payload.strategy.as_deref(), Some("Counter-attack"));
    assert_eq!(payload.player_participations, draft.players);
    assert_eq!(payload.id, Some(12));

    let saved = draft.to_save_payload().unwrap();
    assert_eq!(saved.status, Some(MatchSheetStatus::Unvalidated));
}

/// Tests that a submitted sheet can no longer produce payloads.
///
/// Expected: Err(NotEditable)
#[test]
fn locked_sheet_rejects_payloads() {
    let draft = MatchSheetDraft::from_sheet(
        sheet(
            MatchSheetStatus::Submitted,
            vec![row(1, Some(PlayerStatus::Starter), Some(1))],
        ),
        &[],
    );

    assert!(!draft.is_editable());
    assert_eq!(
        draft.to_save_payload(),
        Err(MatchSheetError::NotEditable(Some(MatchSheetStatus::Submitted)))
    );
    assert!(draft.to_submit_payload().is_err());
}

/// Tests a sheet the backend returned without a status.
///
/// Expected: locked like any non-editable sheet, for both save and submit
#[test]
fn draft_without_status_is_locked() {
    let draft = MatchSheetDraft::from_sheet(
        CoachMatchSheetDto {
            status: None,
            ..sheet(
                MatchSheetStatus::Draft,
                vec![row(1, Some(PlayerStatus::Starter), Some(1))],
            )
        },
        &[],
    );

    assert!(!draft.is_editable());
    assert_eq!(
        draft.to_save_payload(),
        Err(MatchSheetError::NotEditable(None))
    );
    assert_eq!(
        draft.to_submit_payload(),
        Err(MatchSheetError::NotEditable(None))
    );
    assert_eq!(
        MatchSheetError::NotEditable(None).to_string(),
        "This match sheet can no longer be modified (no status)."
    );
}

/// Tests reading the shirt-number input.
///
/// Expected: blank and zero clear the number, anything that is not 1 to 99 is an error
#[test]
fn shirt_number_input() {
    assert_eq!(parse_shirt_number(" 10 "), Ok(Some(10)));
    assert_eq!(parse_shirt_number("99"), Ok(Some(99)));
    assert_eq!(parse_shirt_number(""), Ok(None));
    assert_eq!(parse_shirt_number("0"), Ok(None));

    for input in ["abc", "-4", "7.5", "100"] {
        assert_eq!(
            parse_shirt_number(input),
            Err(MatchSheetError::InvalidShirtNumber(input.to_string())),
            "{input}"
        );
    }
    assert_eq!(
        MatchSheetError::InvalidShirtNumber("abc".to_string()).to_string(),
        "\"abc\" is not a shirt number. Use a whole number from 1 to 99."
    );
}

/// Tests grouping players for the read-only viewer.
///
/// Expected: one group per status, starters ordered by shirt number
#[test]
fn summary_groups_by_status() {
    let players = vec![
        row(1, Some(PlayerStatus::Starter), Some(9)),
        row(2, Some(PlayerStatus::Starter), Some(1)),
        row(3, Some(PlayerStatus::Substitute), Some(14)),
        row(4, Some(PlayerStatus::Injured), None),
        row(5, Some(PlayerStatus::Reserve), None),
        row(6, None, None),
        row(7, Some(PlayerStatus::Expelled), Some(4)),
    ];

    let summary = MatchSheetSummary::new(&players);

    let starters: Vec<_> = summary.starters.iter().map(|p| p.player_id).collect();
    assert_eq!(starters, vec![Some(2), Some(1)]);
    assert_eq!(summary.substitutes.len(), 1);
    assert_eq!(summary.injured.len(), 1);
    assert_eq!(summary.reserves.len(), 1);
    assert_eq!(summary.expelled.len(), 1);
    assert_eq!(summary.unassigned.len(), 1);
    assert!(summary.not_played.is_empty());
    assert_eq!(summary.assigned_count(), 6);
}
