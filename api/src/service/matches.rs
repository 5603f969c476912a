use crate::{
    client::ApiClient,
    endpoints::matches as ep,
    error::ApiError,
    http::Transport,
    model::{
        match_sheet::{
            CoachMatchSheetDto, CoachMatchSheetsResponseDto, MatchSheetDto,
            MatchSheetValidationDto,
        },
        matches::{
            ConsolidatedMatchDto, MatchDto, MatchFilter, MatchParticipantDto,
            MatchScoreUpdateDto, MatchStatusUpdateDto,
        },
    },
    storage::TokenStore,
};

pub struct MatchService<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<'a, T: Transport, S: TokenStore> MatchService<'a, T, S> {
    pub fn new(client: &'a ApiClient<T, S>) -> Self {
        Self { client }
    }

    pub async fn get_by_team(&self, team_id: i64, filter: &MatchFilter) -> Result<Vec<MatchDto>, ApiError> {
        self.client.get_with(&ep::by_team(team_id), filter).await
    }

    pub async fn get_all(&self, filter: &MatchFilter) -> Result<Vec<MatchDto>, ApiError> {
        self.client.get_with(ep::BASE, filter).await
    }

    pub async fn get_by_id(&self, match_id: i64) -> Result<MatchDto, ApiError> {
        self.client.get(&ep::by_id(match_id)).await
    }

    pub async fn get_by_competition(
        &self,
        competition_id: i64,
        filter: &MatchFilter,
    ) -> Result<Vec<MatchDto>, ApiError> {
        self.client
            .get_with(&ep::by_competition(competition_id), filter)
            .await
    }

    pub async fn get_sheets_by_match(&self, match_id: i64) -> Result<Vec<MatchSheetDto>, ApiError> {
        self.client.get(&ep::sheets(match_id)).await
    }

    pub async fn get_sheet(&self, match_sheet_id: i64) -> Result<MatchSheetDto, ApiError> {
        self.client.get(&ep::by_sheet(match_sheet_id)).await
    }

    pub async fn get_consolidated(&self, match_id: i64) -> Result<ConsolidatedMatchDto, ApiError> {
        self.client.get(&ep::consolidated(match_id)).await
    }

    pub async fn get_team_match_sheet(
        &self,
        team_id: i64,
        match_id: i64,
    ) -> Result<MatchSheetDto, ApiError> {
        self.client.get(&ep::team_match(team_id, match_id)).await
    }

    pub async fn get_by_player(&self, player_id: i64) -> Result<Vec<MatchDto>, ApiError> {
        self.client.get(&ep::by_player(player_id)).await
    }

    pub async fn schedule(&self, organizer_id: i64, game: &MatchDto) -> Result<MatchDto, ApiError> {
        self.client
            .post(&ep::organizer::schedule(organizer_id), game)
            .await
    }

    /// Changes the status of a match; `reason` is sent alongside the update.
    pub async fn update_status(
        &self,
        organizer_id: i64,
        update: &MatchStatusUpdateDto,
        reason: &str,
    ) -> Result<MatchDto, ApiError> {
        let body = MatchStatusUpdateDto {
            reason: Some(reason.to_string()),
            ..update.clone()
        };
        self.client
            .put(&ep::organizer::update_status(organizer_id), &body)
            .await
    }

    pub async fn update(&self, organizer_id: i64, game: &MatchDto) -> Result<MatchDto, ApiError> {
        self.client
            .put(&ep::organizer::update(organizer_id), game)
            .await
    }

    pub async fn update_score(
        &self,
        organizer_id: i64,
        score: &MatchScoreUpdateDto,
    ) -> Result<MatchDto, ApiError> {
        self.client
            .put(&ep::organizer::update_score(organizer_id), score)
            .await
    }

    pub async fn update_participants(
        &self,
        organizer_id: i64,
        match_id: i64,
        participants: &[MatchParticipantDto],
    ) -> Result<Vec<MatchParticipantDto>, ApiError> {
        self.client
            .put(
                &ep::organizer::update_participants(organizer_id, match_id),
                participants,
            )
            .await
    }

    /// Approves or rejects a submitted sheet; `comments` is sent alongside the decision.
    pub async fn validate_sheet(
        &self,
        organizer_id: i64,
        validation: &MatchSheetValidationDto,
        comments: Option<&str>,
    ) -> Result<MatchSheetDto, ApiError> {
        let body = MatchSheetValidationDto {
            comments: comments.map(str::to_string).or_else(|| validation.comments.clone()),
            ..validation.clone()
        };
        self.client
            .put(&ep::organizer::validate_sheet(organizer_id), &body)
            .await
    }

    pub async fn get_coach_team_sheets(
        &self,
        coach_id: i64,
        team_id: i64,
    ) -> Result<CoachMatchSheetsResponseDto, ApiError> {
        self.client.get(&ep::coach::sheets(coach_id, team_id)).await
    }

    pub async fn get_coach_sheets(&self, coach_id: i64) -> Result<CoachMatchSheetsResponseDto, ApiError> {
        self.client.get(&ep::coach::all_sheets(coach_id)).await
    }

    pub async fn get_coach_sheet(
        &self,
        coach_id: i64,
        match_sheet_id: i64,
    ) -> Result<CoachMatchSheetDto, ApiError> {
        self.client
            .get(&ep::coach::sheet(coach_id, match_sheet_id))
            .await
    }

    pub async fn update_coach_sheet(
        &self,
        coach_id: i64,
        match_sheet_id: i64,
        sheet: &CoachMatchSheetDto,
    ) -> Result<CoachMatchSheetDto, ApiError> {
        self.client
            .put(&ep::coach::update_sheet(coach_id, match_sheet_id), sheet)
            .await
    }
}
