use crate::{
    client::ApiClient,
    endpoints::players as ep,
    error::ApiError,
    http::{QueryParams, Transport},
    model::player::{
        MatchPerformanceDto, PlayerDto, PlayerFilter, PlayerPerformanceDto, RegisterPlayerDto,
        UpdatePlayerDto,
    },
    storage::TokenStore,
};

pub struct PlayerService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> PlayerService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    /// Registers a new or existing player into one of the coach's teams.
    pub async fn register(
        &self,
        coach_id: i64,
        team_id: i64,
        player: &RegisterPlayerDto,
    ) -> Result<PlayerDto, ApiError> {
        self.client
            .post(&ep::coach::register(coach_id, team_id), player)
            .await
    }

    pub async fn update(&self, coach_id: i64, player: &UpdatePlayerDto) -> Result<PlayerDto, ApiError> {
        self.client.put(&ep::coach::update(coach_id), player).await
    }

    pub async fn remove(&self, coach_id: i64, player_id: i64) -> Result<(), ApiError> {
        self.client
            .delete_for_text(&ep::coach::remove(coach_id, player_id))
            .await
            .map(|_| ())
    }

    pub async fn get_coach_players(&self, coach_id: i64) -> Result<Vec<PlayerDto>, ApiError> {
        self.client.get(&ep::coach::all(coach_id)).await
    }

    pub async fn get_by_team(&self, team_id: i64, coach_id: i64) -> Result<Vec<PlayerDto>, ApiError> {
        self.client.get(&ep::coach::by_team(team_id, coach_id)).await
    }

    pub async fn get_by_competition(
        &self,
        organizer_id: i64,
        competition_id: i64,
    ) -> Result<Vec<PlayerDto>, ApiError> {
        self.client
            .get(&ep::organizer::by_competition(organizer_id, competition_id))
            .await
    }

    pub async fn update_performance(
        &self,
        organizer_id: i64,
        performance: &MatchPerformanceDto,
    ) -> Result<MatchPerformanceDto, ApiError> {
        self.client
            .put(&ep::organizer::update_performance(organizer_id), performance)
            .await
    }

    pub async fn get_all(&self, filter: &PlayerFilter) -> Result<Vec<PlayerDto>, ApiError> {
        self.client.get_with(ep::BASE, filter).await
    }

    pub async fn get_by_id(&self, player_id: i64) -> Result<PlayerDto, ApiError> {
        self.client.get(&ep::by_id(player_id)).await
    }

    /// Performance of a player, optionally limited to one competition.
    pub async fn get_performance(
        &self,
        player_id: i64,
        competition_id: Option<i64>,
    ) -> Result<Vec<PlayerPerformanceDto>, ApiError> {
        let query = QueryParams::new().with_opt("competitionId", competition_id);
        self.client
            .get_with(&ep::performance(player_id), &query)
            .await
    }
}
