//! Request handlers

use axum::{extract::State, Json};
use crypto_session::CipherEnvelope;
use shared_protocol::{
    encode_public_key, DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse,
    EndSessionRequest, EndSessionResponse, PairSessionsRequest, PairSessionsResponse, SessionId,
    SessionStatus, StartSessionResponse, StatsResponse,
};

use crate::extract::JsonBody;
use crate::{ApiResult, AppState};

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Stats endpoint
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        sessions: state.store.len(),
    })
}

pub async fn start_session(State(state): State<AppState>) -> ApiResult<Json<StartSessionResponse>> {
    let (session_id, public_key) = state.store.create()?;
    Ok(Json(StartSessionResponse {
        session_id,
        public_key: encode_public_key(&public_key),
    }))
}

pub async fn end_session(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EndSessionRequest>,
) -> ApiResult<Json<EndSessionResponse>> {
    let session_id = SessionId::parse(&payload.session_id)?;
    state.store.end(&session_id)?;
    Ok(Json(EndSessionResponse {
        status: SessionStatus::Ended,
        session_id,
    }))
}

pub async fn pair_sessions(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PairSessionsRequest>,
) -> ApiResult<Json<PairSessionsResponse>> {
    let a = SessionId::parse(&payload.session_id_a)?;
    let b = SessionId::parse(&payload.session_id_b)?;
    let (public_a, public_b) = state.store.pair(&a, &b)?;
    Ok(Json(PairSessionsResponse {
        public_key_a: encode_public_key(&public_a),
        public_key_b: encode_public_key(&public_b),
    }))
}

pub async fn encrypt(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EncryptRequest>,
) -> ApiResult<Json<EncryptResponse>> {
    let session_id = SessionId::parse(&payload.session_id)?;
    let envelope = state.store.encrypt(&session_id, &payload.plaintext)?;
    Ok(Json(EncryptResponse {
        envelope: envelope.encode(),
    }))
}

pub async fn decrypt(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DecryptRequest>,
) -> ApiResult<Json<DecryptResponse>> {
    let session_id = SessionId::parse(&payload.session_id)?;
    // Resolve the session first so an unknown id wins over a bad envelope
    state.store.lookup(&session_id)?;
    let envelope = CipherEnvelope::decode(&payload.envelope)?;
    let plaintext = state.store.decrypt(&session_id, &envelope)?;
    Ok(Json(DecryptResponse { plaintext }))
}
