use crate::{
    client::ApiClient,
    endpoints::competitions as ep,
    error::ApiError,
    http::Transport,
    model::competition::{
        CompetitionDto, CompetitionFilter, CompetitionRequestDto, CompetitionStatusUpdateDto,
        OrganizerCompetitionDto, OrganizerCompetitionsResponseDto, TeamCompetitionStatusUpdateDto,
    },
    storage::TokenStore,
};

pub struct CompetitionService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> CompetitionService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, filter: &CompetitionFilter) -> Result<Vec<CompetitionDto>, ApiError> {
        self.client.get_with(ep::BASE, filter).await
    }

    pub async fn get_by_id(&self, competition_id: i64) -> Result<CompetitionDto, ApiError> {
        self.client.get(&ep::by_id(competition_id)).await
    }

    pub async fn get_by_team(
        &self,
        team_id: i64,
        filter: &CompetitionFilter,
    ) -> Result<Vec<CompetitionDto>, ApiError> {
        self.client.get_with(&ep::by_team(team_id), filter).await
    }

    pub async fn get_by_user(&self, user_id: i64) -> Result<Vec<CompetitionDto>, ApiError> {
        self.client.get(&ep::by_user(user_id)).await
    }

    pub async fn get_organizer_competitions(
        &self,
        organizer_id: i64,
        filter: &CompetitionFilter,
    ) -> Result<OrganizerCompetitionsResponseDto, ApiError> {
        self.client
            .get_with(&ep::organizer::base(organizer_id), filter)
            .await
    }

    pub async fn create(
        &self,
        organizer_id: i64,
        competition: &OrganizerCompetitionDto,
    ) -> Result<OrganizerCompetitionDto, ApiError> {
        self.client
            .post(&ep::organizer::create(organizer_id), competition)
            .await
    }

    pub async fn update(
        &self,
        organizer_id: i64,
        competition_id: i64,
        competition: &OrganizerCompetitionDto,
    ) -> Result<OrganizerCompetitionDto, ApiError> {
        self.client
            .put(&ep::organizer::update(organizer_id, competition_id), competition)
            .await
    }

    pub async fn delete(&self, organizer_id: i64, competition_id: i64) -> Result<(), ApiError> {
        self.client
            .delete_for_text(&ep::organizer::delete(organizer_id, competition_id))
            .await
            .map(|_| ())
    }

    pub async fn update_status(
        &self,
        organizer_id: i64,
        update: &CompetitionStatusUpdateDto,
        reason: &str,
    ) -> Result<OrganizerCompetitionDto, ApiError> {
        self.client
            .put(&ep::organizer::update_status(organizer_id, reason), update)
            .await
    }

    pub async fn update_team_status(
        &self,
        organizer_id: i64,
        update: &TeamCompetitionStatusUpdateDto,
        reason: &str,
    ) -> Result<(), ApiError> {
        self.client
            .put_for_text(
                &ep::organizer::update_team_status(organizer_id, reason),
                Some(update),
            )
            .await
            .map(|_| ())
    }

    /// Approves or rejects a registration or withdrawal request.
    pub async fn process_request(
        &self,
        organizer_id: i64,
        request_id: i64,
        approved: bool,
        reason: &str,
    ) -> Result<(), ApiError> {
        self.client
            .put_for_text(
                &ep::organizer::process_request(organizer_id, request_id, approved, reason),
                None::<&()>,
            )
            .await
            .map(|_| ())
    }

    pub async fn get_requests(
        &self,
        organizer_id: i64,
        competition_id: i64,
    ) -> Result<Vec<CompetitionRequestDto>, ApiError> {
        self.client
            .get(&ep::organizer::requests(organizer_id, competition_id))
            .await
    }

    pub async fn register_team(
        &self,
        coach_id: i64,
        team_id: i64,
        competition_id: i64,
        reason: &str,
    ) -> Result<CompetitionRequestDto, ApiError> {
        self.client
            .post_empty(&ep::coach::register(coach_id, team_id, competition_id, reason))
            .await
    }

    pub async fn withdraw_team(
        &self,
        coach_id: i64,
        team_id: i64,
        competition_id: i64,
        reason: &str,
    ) -> Result<CompetitionRequestDto, ApiError> {
        self.client
            .post_empty(&ep::coach::withdraw(coach_id, team_id, competition_id, reason))
            .await
    }

    pub async fn withdraw_team_from_all(
        &self,
        coach_id: i64,
        team_id: i64,
        reason: &str,
    ) -> Result<(), ApiError> {
        self.client
            .post_for_text(&ep::coach::withdraw_all(coach_id, team_id, reason), None::<&()>)
            .await
            .map(|_| ())
    }

    pub async fn get_coach_requests(
        &self,
        coach_id: i64,
    ) -> Result<Vec<CompetitionRequestDto>, ApiError> {
        self.client.get(&ep::coach::requests(coach_id)).await
    }
}
