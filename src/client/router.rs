use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresCoach, RequiresLoggedIn, RequiresOrganizer};
use crate::client::route::{
    coach::{
        CoachCompetitions, CoachCreateTeam, CoachDashboard, CoachMatchSheetEditor,
        CoachMatchSheets, CoachPlayers, CoachRegisterPlayer, CoachTeamDetail, CoachTeams,
        CoachTransferPlayer,
    },
    competition::{CompetitionDetail, Competitions},
    dashboard::{
        message::{ComposeMessage, MessageDetail, Messages},
        Dashboard, Notifications, Profile,
    },
    matches::{MatchDetail, Matches},
    organizer::{
        OrganizerCompetitionDetail, OrganizerCompetitions, OrganizerCreateCompetition,
        OrganizerDashboard, OrganizerMatchValidation, OrganizerMatches,
    },
    player::{PlayerDetail, Players},
    team::{TeamDetail, Teams},
    Home, Login, Media, NotFound, PublicProfile, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[route("/competitions")]
        Competitions {},

        #[route("/competitions/:id")]
        CompetitionDetail { id: i64 },

        #[route("/teams")]
        Teams {},

        #[route("/teams/:id")]
        TeamDetail { id: i64 },

        #[route("/players")]
        Players {},

        #[route("/players/:id")]
        PlayerDetail { id: i64 },

        #[route("/matches")]
        Matches {},

        #[route("/matches/:id")]
        MatchDetail { id: i64 },

        #[route("/media")]
        Media {},

        #[route("/profile/:id")]
        PublicProfile { id: i64 },

        #[layout(RequiresLoggedIn)]
        #[nest("/dashboard")]
            #[route("/")]
            Dashboard {},

            #[route("/profile")]
            Profile {},

            #[route("/notifications")]
            Notifications {},

            #[route("/messages")]
            Messages {},

            #[route("/messages/compose")]
            ComposeMessage {},

            #[route("/messages/:id")]
            MessageDetail { id: i64 },
        #[end_nest]
        #[end_layout]

        #[layout(RequiresCoach)]
        #[nest("/dashboard/coach")]
            #[route("/")]
            CoachDashboard {},

            #[route("/teams")]
            CoachTeams {},

            #[route("/teams/create")]
            CoachCreateTeam {},

            #[route("/teams/:id")]
            CoachTeamDetail { id: i64 },

            #[route("/players")]
            CoachPlayers {},

            #[route("/players/register")]
            CoachRegisterPlayer {},

            #[route("/players/transfer")]
            CoachTransferPlayer {},

            #[route("/competitions")]
            CoachCompetitions {},

            #[route("/matches")]
            CoachMatchSheets {},

            #[route("/matches/:sheet_id")]
            CoachMatchSheetEditor { sheet_id: i64 },
        #[end_nest]
        #[end_layout]

        #[layout(RequiresOrganizer)]
        #[nest("/dashboard/organizer")]
            #[route("/")]
            OrganizerDashboard {},

            #[route("/competitions")]
            OrganizerCompetitions {},

            #[route("/competitions/create")]
            OrganizerCreateCompetition {},

            #[route("/competitions/:id")]
            OrganizerCompetitionDetail { id: i64 },

            #[route("/matches")]
            OrganizerMatches {},

            #[route("/match-validation")]
            OrganizerMatchValidation {},
        #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
