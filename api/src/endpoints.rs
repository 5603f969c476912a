//! Paths of the league backend, relative to the configured API base URL.
//!
//! Paths that carry `reason`, `approved` or `limit` build their own query string;
//! those values are percent-encoded here.

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const REFRESH_TOKEN: &str = "/auth/refresh-token";
    pub const LOGOUT: &str = "/auth/logout";
    pub const ME: &str = "/auth/me";
}

pub mod users {
    pub const BASE: &str = "/users";
    pub const UPDATE_PROFILE: &str = "/users/profile";
    pub const CHANGE_PASSWORD: &str = "/users/change-password";
    pub const UPDATE_COACH_PROFILE: &str = "/users/coach/profile";
    pub const UPDATE_ORGANIZER_PROFILE: &str = "/users/organizer/profile";

    pub fn by_id(id: i64) -> String {
        format!("/users/{}", id)
    }
}

pub mod competitions {
    pub const BASE: &str = "/competitions";

    pub fn by_id(id: i64) -> String {
        format!("/competitions/{}", id)
    }

    pub fn by_team(team_id: i64) -> String {
        format!("/competitions/team/{}", team_id)
    }

    pub fn by_user(user_id: i64) -> String {
        format!("/competitions/user/{}", user_id)
    }

    pub mod organizer {
        use crate::http::encode_component;

        pub fn base(organizer_id: i64) -> String {
            format!("/competitions/organizer/{}", organizer_id)
        }

        pub fn create(organizer_id: i64) -> String {
            base(organizer_id)
        }

        pub fn update(organizer_id: i64, competition_id: i64) -> String {
            format!("/competitions/organizer/{}/{}", organizer_id, competition_id)
        }

        pub fn delete(organizer_id: i64, competition_id: i64) -> String {
            update(organizer_id, competition_id)
        }

        pub fn update_status(organizer_id: i64, reason: &str) -> String {
            format!(
                "/competitions/organizer/{}/status?reason={}",
                organizer_id,
                encode_component(reason)
            )
        }

        pub fn update_team_status(organizer_id: i64, reason: &str) -> String {
            format!(
                "/competitions/organizer/{}/team-status?reason={}",
                organizer_id,
                encode_component(reason)
            )
        }

        pub fn process_request(
            organizer_id: i64,
            request_id: i64,
            approved: bool,
            reason: &str,
        ) -> String {
            format!(
                "/competitions/organizer/{}/request/{}?approved={}&reason={}",
                organizer_id,
                request_id,
                approved,
                encode_component(reason)
            )
        }

        pub fn requests(organizer_id: i64, competition_id: i64) -> String {
            format!(
                "/competitions/organizer/{}/competition/{}/requests",
                organizer_id, competition_id
            )
        }
    }

    pub mod coach {
        use crate::http::encode_component;

        pub fn register(coach_id: i64, team_id: i64, competition_id: i64, reason: &str) -> String {
            format!(
                "/competitions/coach/{}/team/{}/register/{}?reason={}",
                coach_id,
                team_id,
                competition_id,
                encode_component(reason)
            )
        }

        pub fn withdraw(coach_id: i64, team_id: i64, competition_id: i64, reason: &str) -> String {
            format!(
                "/competitions/coach/{}/team/{}/withdraw/{}?reason={}",
                coach_id,
                team_id,
                competition_id,
                encode_component(reason)
            )
        }

        pub fn withdraw_all(coach_id: i64, team_id: i64, reason: &str) -> String {
            format!(
                "/competitions/coach/{}/team/{}/withdraw-all?reason={}",
                coach_id,
                team_id,
                encode_component(reason)
            )
        }

        pub fn requests(coach_id: i64) -> String {
            format!("/competitions/coach/{}/requests", coach_id)
        }
    }
}

pub mod teams {
    pub const BASE: &str = "/teams";

    pub fn by_id(id: i64) -> String {
        format!("/teams/{}", id)
    }

    pub fn by_coach(coach_id: i64) -> String {
        format!("/teams/coach/{}", coach_id)
    }

    pub fn by_competition(competition_id: i64) -> String {
        format!("/teams/competition/{}", competition_id)
    }

    pub fn by_player(player_id: i64) -> String {
        format!("/teams/player/{}", player_id)
    }

    pub fn standings(team_id: i64) -> String {
        format!("/teams/{}/standings", team_id)
    }

    pub fn competition_standings(competition_id: i64) -> String {
        format!("/teams/competition/{}/standings", competition_id)
    }

    pub fn team_competition_standing(competition_id: i64, team_id: i64) -> String {
        format!(
            "/teams/competition/{}/team/{}/standing",
            competition_id, team_id
        )
    }

    pub mod coach {
        pub fn create(coach_id: i64) -> String {
            format!("/teams/coach/{}", coach_id)
        }

        pub fn update(coach_id: i64) -> String {
            create(coach_id)
        }

        pub fn delete(coach_id: i64, team_id: i64) -> String {
            format!("/teams/coach/{}/team/{}", coach_id, team_id)
        }

        pub fn all(coach_id: i64) -> String {
            format!("/teams/coach/{}/all", coach_id)
        }

        pub fn add_player(coach_id: i64, team_id: i64) -> String {
            format!("/teams/coach/{}/team/{}/player", coach_id, team_id)
        }

        pub fn remove_player(coach_id: i64, team_id: i64, player_id: i64) -> String {
            format!(
                "/teams/coach/{}/team/{}/player/{}",
                coach_id, team_id, player_id
            )
        }

        pub fn transfer_player(
            coach_id: i64,
            source_team_id: i64,
            target_team_id: i64,
            player_id: i64,
        ) -> String {
            format!(
                "/teams/coach/{}/transfer/from/{}/to/{}/player/{}",
                coach_id, source_team_id, target_team_id, player_id
            )
        }
    }

    pub mod organizer {
        pub fn by_competition(organizer_id: i64, competition_id: i64) -> String {
            format!(
                "/teams/organizer/{}/competition/{}",
                organizer_id, competition_id
            )
        }

        pub fn coaches(organizer_id: i64, competition_id: i64) -> String {
            format!(
                "/teams/organizer/{}/competition/{}/coaches",
                organizer_id, competition_id
            )
        }
    }
}

pub mod players {
    pub const BASE: &str = "/players";

    pub fn by_id(id: i64) -> String {
        format!("/players/{}", id)
    }

    pub fn performance(player_id: i64) -> String {
        format!("/players/{}/performance", player_id)
    }

    pub mod coach {
        pub fn register(coach_id: i64, team_id: i64) -> String {
            format!("/players/coach/{}/team/{}", coach_id, team_id)
        }

        pub fn update(coach_id: i64) -> String {
            format!("/players/coach/{}", coach_id)
        }

        pub fn remove(coach_id: i64, player_id: i64) -> String {
            format!("/players/coach/{}/player/{}", coach_id, player_id)
        }

        pub fn all(coach_id: i64) -> String {
            update(coach_id)
        }

        pub fn by_team(team_id: i64, coach_id: i64) -> String {
            register(coach_id, team_id)
        }
    }

    pub mod organizer {
        pub fn by_competition(organizer_id: i64, competition_id: i64) -> String {
            format!(
                "/players/organizer/{}/competition/{}",
                organizer_id, competition_id
            )
        }

        pub fn update_performance(organizer_id: i64) -> String {
            format!("/players/organizer/{}/performance", organizer_id)
        }
    }
}

pub mod matches {
    pub const BASE: &str = "/matches/all";

    pub fn by_id(id: i64) -> String {
        format!("/matches/{}", id)
    }

    pub fn by_team(team_id: i64) -> String {
        format!("/matches/team/{}", team_id)
    }

    pub fn by_competition(competition_id: i64) -> String {
        format!("/matches/competition/{}", competition_id)
    }

    pub fn sheets(match_id: i64) -> String {
        format!("/matches/{}/sheets", match_id)
    }

    pub fn by_sheet(match_sheet_id: i64) -> String {
        format!("/matches/sheets/{}", match_sheet_id)
    }

    pub fn consolidated(match_id: i64) -> String {
        format!("/matches/{}/consolidated", match_id)
    }

    pub fn team_match(team_id: i64, match_id: i64) -> String {
        format!("/matches/team/{}/match/{}", team_id, match_id)
    }

    pub fn by_player(player_id: i64) -> String {
        format!("/matches/player/{}", player_id)
    }

    pub mod organizer {
        pub fn schedule(organizer_id: i64) -> String {
            format!("/matches/organizer/{}", organizer_id)
        }

        pub fn update_status(organizer_id: i64) -> String {
            format!("/matches/organizer/{}/status", organizer_id)
        }

        pub fn update(organizer_id: i64) -> String {
            schedule(organizer_id)
        }

        pub fn update_score(organizer_id: i64) -> String {
            format!("/matches/organizer/{}/score", organizer_id)
        }

        pub fn update_participants(organizer_id: i64, match_id: i64) -> String {
            format!(
                "/matches/organizer/{}/match/{}/participants",
                organizer_id, match_id
            )
        }

        pub fn validate_sheet(organizer_id: i64) -> String {
            format!("/matches/organizer/{}/validate-sheet", organizer_id)
        }
    }

    pub mod coach {
        pub fn sheets(coach_id: i64, team_id: i64) -> String {
            format!("/matches/coach/{}/team/{}/sheets", coach_id, team_id)
        }

        pub fn all_sheets(coach_id: i64) -> String {
            format!("/matches/coach/{}/sheets", coach_id)
        }

        pub fn sheet(coach_id: i64, match_sheet_id: i64) -> String {
            format!("/matches/coach/{}/sheet/{}", coach_id, match_sheet_id)
        }

        pub fn update_sheet(coach_id: i64, match_sheet_id: i64) -> String {
            sheet(coach_id, match_sheet_id)
        }
    }
}

pub mod media {
    pub const BASE: &str = "/media";
    pub const CREATE: &str = BASE;

    pub fn by_id(id: i64) -> String {
        format!("/media/{}", id)
    }

    pub fn update(id: i64) -> String {
        by_id(id)
    }

    pub fn delete(user_id: i64, media_id: i64) -> String {
        format!("/media/{}/{}", user_id, media_id)
    }

    pub fn report(user_id: i64) -> String {
        format!("/media/{}/report", user_id)
    }
}

pub mod messages {
    pub const BASE: &str = "/messages";
    pub const INBOX: &str = "/messages/inbox";
    pub const SENT: &str = "/messages/sent";
    pub const SEND: &str = BASE;
    pub const READ_ALL: &str = "/messages/read-all";
    pub const RECIPIENTS: &str = "/messages/recipients";

    pub fn by_id(id: i64) -> String {
        format!("/messages/{}", id)
    }

    pub fn read(id: i64) -> String {
        format!("/messages/{}/read", id)
    }

    pub fn delete(message_id: i64, user_id: i64) -> String {
        format!("/messages/{}/{}", message_id, user_id)
    }

    pub fn recipient_categories(user_role: &str) -> String {
        format!("/messages/recipient-categories/{}", user_role)
    }
}

pub mod notifications {
    pub const BASE: &str = "/notifications";
    pub const READ_ALL: &str = "/notifications/read-all";
    pub const COUNT: &str = "/notifications/count";

    pub fn by_id(id: i64) -> String {
        format!("/notifications/{}", id)
    }

    pub fn read(id: i64) -> String {
        format!("/notifications/{}/read", id)
    }

    pub fn recent(limit: u32) -> String {
        format!("/notifications/recent?limit={}", limit)
    }
}

#[cfg(test)]
mod test;
