use crate::{
    client::ApiClient,
    endpoints::teams as ep,
    error::ApiError,
    http::Transport,
    model::{
        competition::OrganizerTeamSummaryDto,
        player::RegisterPlayerDto,
        team::{CreateTeamDto, StandingDto, TeamDto, TeamFilter, UpdateTeamDto},
        user::UserDto,
    },
    storage::TokenStore,
};

pub struct TeamService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> TeamService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, filter: &TeamFilter) -> Result<Vec<TeamDto>, ApiError> {
        self.client.get_with(ep::BASE, filter).await
    }

    pub async fn get_by_id(&self, team_id: i64) -> Result<TeamDto, ApiError> {
        self.client.get(&ep::by_id(team_id)).await
    }

    pub async fn get_by_coach(
        &self,
        coach_id: i64,
        filter: &TeamFilter,
    ) -> Result<Vec<TeamDto>, ApiError> {
        self.client.get_with(&ep::by_coach(coach_id), filter).await
    }

    pub async fn get_by_competition(
        &self,
        competition_id: i64,
        filter: &TeamFilter,
    ) -> Result<Vec<TeamDto>, ApiError> {
        self.client
            .get_with(&ep::by_competition(competition_id), filter)
            .await
    }

    pub async fn get_by_player(&self, player_id: i64) -> Result<Vec<TeamDto>, ApiError> {
        self.client.get(&ep::by_player(player_id)).await
    }

    /// Standings of a team in every competition it plays.
    pub async fn get_standings(&self, team_id: i64) -> Result<Vec<StandingDto>, ApiError> {
        self.client.get(&ep::standings(team_id)).await
    }

    pub async fn get_competition_standings(
        &self,
        competition_id: i64,
    ) -> Result<Vec<StandingDto>, ApiError> {
        self.client
            .get(&ep::competition_standings(competition_id))
            .await
    }

    pub async fn get_team_competition_standing(
        &self,
        competition_id: i64,
        team_id: i64,
    ) -> Result<StandingDto, ApiError> {
        self.client
            .get(&ep::team_competition_standing(competition_id, team_id))
            .await
    }

    pub async fn create(&self, coach_id: i64, team: &CreateTeamDto) -> Result<TeamDto, ApiError> {
        self.client.post(&ep::coach::create(coach_id), team).await
    }

    pub async fn update(&self, coach_id: i64, team: &UpdateTeamDto) -> Result<TeamDto, ApiError> {
        self.client.put(&ep::coach::update(coach_id), team).await
    }

    pub async fn delete(&self, coach_id: i64, team_id: i64) -> Result<(), ApiError> {
        self.client
            .delete_for_text(&ep::coach::delete(coach_id, team_id))
            .await
            .map(|_| ())
    }

    pub async fn get_coach_teams(&self, coach_id: i64) -> Result<Vec<TeamDto>, ApiError> {
        self.client.get(&ep::coach::all(coach_id)).await
    }

    pub async fn add_player(
        &self,
        coach_id: i64,
        team_id: i64,
        player: &RegisterPlayerDto,
    ) -> Result<TeamDto, ApiError> {
        self.client
            .post(&ep::coach::add_player(coach_id, team_id), player)
            .await
    }

    pub async fn remove_player(
        &self,
        coach_id: i64,
        team_id: i64,
        player_id: i64,
    ) -> Result<(), ApiError> {
        self.client
            .delete_for_text(&ep::coach::remove_player(coach_id, team_id, player_id))
            .await
            .map(|_| ())
    }

    /// Moves a player between two teams of the same coach.
    pub async fn transfer_player(
        &self,
        coach_id: i64,
        source_team_id: i64,
        target_team_id: i64,
        player_id: i64,
    ) -> Result<(), ApiError> {
        self.client
            .post_for_text(
                &ep::coach::transfer_player(coach_id, source_team_id, target_team_id, player_id),
                None::<&()>,
            )
            .await
            .map(|_| ())
    }

    pub async fn get_organizer_competition_teams(
        &self,
        organizer_id: i64,
        competition_id: i64,
    ) -> Result<Vec<OrganizerTeamSummaryDto>, ApiError> {
        self.client
            .get(&ep::organizer::by_competition(organizer_id, competition_id))
            .await
    }

    pub async fn get_competition_coaches(
        &self,
        organizer_id: i64,
        competition_id: i64,
    ) -> Result<Vec<UserDto>, ApiError> {
        self.client
            .get(&ep::organizer::coaches(organizer_id, competition_id))
            .await
    }
}
